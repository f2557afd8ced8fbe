use crate::quiz::bank::QUESTION_BANK;
use crate::quiz::{next_question, QuizCheckpoint, QuizError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn wrong_option(checkpoint: &QuizCheckpoint) -> String {
    let question = checkpoint.current();
    question
        .options
        .iter()
        .find(|option| **option != question.correct_answer)
        .cloned()
        .expect("Every question has wrong options.")
}

#[test]
fn bank_questions_offer_their_answer() {
    for (_, answer, options) in QUESTION_BANK.iter() {
        assert!(options.contains(answer));
        let distinct = options.iter().collect::<HashSet<_>>();
        assert_eq!(distinct.len(), 4);
    }
}

#[test]
fn next_question_keeps_all_options() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let question = next_question(&mut rng, None);
        assert_eq!(question.options.len(), 4);
        assert!(question.options.contains(&question.correct_answer));
    }
}

#[test]
fn next_question_respects_exclusion() {
    let mut rng = StdRng::seed_from_u64(5);
    let excluded = QUESTION_BANK[2].0;
    for _ in 0..100 {
        assert_ne!(next_question(&mut rng, Some(excluded)).prompt, excluded);
    }
}

#[test]
fn two_correct_answers_clear_the_checkpoint_despite_mistakes() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut checkpoint = QuizCheckpoint::new(&mut rng);

    let wrong = wrong_option(&checkpoint);
    let prompt_before = checkpoint.current().prompt.clone();
    let outcome = checkpoint.submit_answer(&wrong, &mut rng).unwrap();
    assert!(!outcome.correct);
    assert_eq!(checkpoint.current().prompt, prompt_before);
    assert_eq!(checkpoint.correct_answers(), 0);

    let answer = checkpoint.current().correct_answer.clone();
    let outcome = checkpoint.submit_answer(&answer, &mut rng).unwrap();
    assert!(outcome.correct && !outcome.cleared);
    assert_ne!(checkpoint.current().prompt, prompt_before);

    let wrong = wrong_option(&checkpoint);
    assert!(!checkpoint.submit_answer(&wrong, &mut rng).unwrap().correct);
    assert_eq!(checkpoint.correct_answers(), 1);

    let answer = checkpoint.current().correct_answer.clone();
    let outcome = checkpoint.submit_answer(&answer, &mut rng).unwrap();
    assert!(outcome.correct && outcome.cleared);
    assert!(checkpoint.is_cleared());
}

#[test]
fn unknown_options_are_rejected() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut checkpoint = QuizCheckpoint::new(&mut rng);
    assert_eq!(
        checkpoint.submit_answer("sommes", &mut rng),
        Err(QuizError::UnknownOption(String::from("sommes")))
    );
    assert_eq!(checkpoint.correct_answers(), 0);
}

#[test]
fn cleared_checkpoint_takes_no_more_answers() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut checkpoint = QuizCheckpoint::new(&mut rng);
    for _ in 0..2 {
        let answer = checkpoint.current().correct_answer.clone();
        checkpoint.submit_answer(&answer, &mut rng).unwrap();
    }
    let answer = checkpoint.current().correct_answer.clone();
    assert_eq!(
        checkpoint.submit_answer(&answer, &mut rng),
        Err(QuizError::AlreadyCleared)
    );
}
