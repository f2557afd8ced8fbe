use bank::QUESTION_BANK;
use consts::ANSWERS_TO_CLEAR_CHECKPOINT;
use models::{AnswerOutcome, QuizQuestion};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

pub mod bank;
pub mod consts;
pub mod models;
#[cfg(test)]
mod tests;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("`{0}` is not one of the offered options")]
    UnknownOption(String),
    #[error("the checkpoint is already cleared")]
    AlreadyCleared,
}

/// Picks a question uniformly from the bank and shuffles its options. `exclude` names a prompt
/// that must not be picked again.
pub fn next_question<R: Rng + ?Sized>(rng: &mut R, exclude: Option<&str>) -> QuizQuestion {
    let candidates = QUESTION_BANK
        .iter()
        .filter(|(prompt, _, _)| Some(*prompt) != exclude)
        .collect::<Vec<_>>();
    let template = candidates
        .choose(rng)
        .copied()
        .unwrap_or(&QUESTION_BANK[0]);
    let mut question = QuizQuestion::from(template);
    question.options.shuffle(rng);
    question
}

/// Progress through one quiz interruption between rounds.
#[derive(Clone, Debug)]
pub struct QuizCheckpoint {
    current: QuizQuestion,
    correct_answers: u32,
}

impl QuizCheckpoint {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            current: next_question(rng, None),
            correct_answers: 0,
        }
    }

    pub fn current(&self) -> &QuizQuestion {
        &self.current
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    pub fn is_cleared(&self) -> bool {
        self.correct_answers >= ANSWERS_TO_CLEAR_CHECKPOINT
    }

    /// Wrong answers keep the current question so the player can retry it. Correct answers
    /// count towards the checkpoint and, unless it is cleared, move on to a different question.
    pub fn submit_answer<R: Rng + ?Sized>(
        &mut self,
        selected: &str,
        rng: &mut R,
    ) -> Result<AnswerOutcome, QuizError> {
        if self.is_cleared() {
            return Err(QuizError::AlreadyCleared);
        }
        if !self.current.options.iter().any(|option| option == selected) {
            return Err(QuizError::UnknownOption(selected.to_string()));
        }
        if selected != self.current.correct_answer {
            return Ok(AnswerOutcome {
                correct: false,
                cleared: false,
            });
        }
        self.correct_answers += 1;
        let cleared = self.is_cleared();
        if !cleared {
            self.current = next_question(rng, Some(&self.current.prompt));
        }
        Ok(AnswerOutcome {
            correct: true,
            cleared,
        })
    }
}
