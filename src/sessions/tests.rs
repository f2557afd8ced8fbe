use crate::game::models::{Difficulty, GamePhase, GameSnapshot};
use crate::http::tests::test_server;
use crate::locations::tests::REYKJAVIK;
use crate::map::models::LatLng;
use crate::sessions::requests::{CreateGameRequest, DifficultyRequest, QuizAnswerRequest};
use crate::sessions::responses::{CreateGameResponse, GameErrorCode, GameResponse};
use axum_test::TestServer;
use serde_json::json;
use std::time::Duration;

async fn create_game(server: &TestServer) -> String {
    let response = server.post("/games").await;
    response.assert_status_ok();
    response
        .json::<CreateGameResponse>()
        .game_id
        .expect("Game was not created.")
}

async fn wait_for_phase(server: &TestServer, game_id: &str, phase: GamePhase) -> GameSnapshot {
    for _ in 0..500 {
        let game = server
            .get(&format!("/games/{game_id}"))
            .await
            .json::<GameResponse>()
            .game
            .expect("Game is gone.");
        if game.phase == phase {
            return game;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("Game never reached the `{phase}` phase.");
}

async fn post_action(server: &TestServer, game_id: &str, action: &str) -> GameResponse {
    server
        .post(&format!("/games/{game_id}/{action}"))
        .await
        .json::<GameResponse>()
}

async fn start(server: &TestServer, game_id: &str) -> GameResponse {
    server
        .post(&format!("/games/{game_id}/start"))
        .json(&DifficultyRequest {
            difficulty: Difficulty::Easy,
        })
        .await
        .json::<GameResponse>()
}

async fn save_guess(server: &TestServer, game_id: &str, guess: LatLng) -> GameResponse {
    server
        .post(&format!("/games/{game_id}/save-guess"))
        .json(&guess)
        .await
        .json::<GameResponse>()
}

async fn clear_quiz(server: &TestServer, game_id: &str) {
    for _ in 0..20 {
        let game = wait_for_phase(server, game_id, GamePhase::QuizCheckpoint).await;
        let quiz = game.quiz.expect("Quiz is missing.");
        for option in &quiz.question.options {
            let response = server
                .post(&format!("/games/{game_id}/quiz/answer"))
                .json(&QuizAnswerRequest {
                    option: option.clone(),
                })
                .await
                .json::<GameResponse>();
            assert!(!response.error);
            let game = response.game.expect("Game is gone.");
            if game.phase != GamePhase::QuizCheckpoint {
                return;
            }
            if game.quiz.map_or(0, |quiz| quiz.correct_answers) > quiz.correct_answers {
                break;
            }
        }
    }
    panic!("Quiz checkpoint was never cleared.");
}

#[tokio::test]
async fn test_create_game_with_default_name() {
    let server = test_server();

    let response = server.post("/games").await.json::<CreateGameResponse>();

    assert!(!response.error);
    let game = response.game.unwrap();
    assert_eq!(game.player_name, "Player_1");
    assert_eq!(game.phase, GamePhase::Idle);
    assert_eq!(game.max_rounds, 5);
}

#[tokio::test]
async fn test_create_game_with_too_long_name() {
    let server = test_server();

    let response = server
        .post("/games")
        .json(&CreateGameRequest {
            player_name: Some("🌍".repeat(25)),
        })
        .await
        .json::<CreateGameResponse>();

    assert!(response.error);
    assert_eq!(response.error_code, Some(GameErrorCode::PlayerNameTooLong));
    assert!(response.game_id.is_none());
}

#[tokio::test]
async fn test_unknown_game() {
    let server = test_server();

    let response = post_action(&server, "missing", "submit-guess").await;

    assert!(response.error);
    assert_eq!(response.error_code, Some(GameErrorCode::GameNotFound));
}

#[tokio::test]
async fn test_perfect_guess_scores_5000() {
    let server = test_server();
    let game_id = create_game(&server).await;

    let started = start(&server, &game_id).await;
    assert!(!started.error);
    let game = wait_for_phase(&server, &game_id, GamePhase::AwaitingGuess).await;
    let actual_location = game.round.unwrap().panorama.location;
    assert_eq!(actual_location, REYKJAVIK);

    assert!(!save_guess(&server, &game_id, actual_location).await.error);
    let response = post_action(&server, &game_id, "submit-guess").await;

    let game = response.game.unwrap();
    assert_eq!(game.phase, GamePhase::RoundResolved);
    let outcome = game.round.unwrap().outcome.unwrap();
    assert_eq!(outcome.round_score, 5000);
    assert_eq!(outcome.country_name, "Iceland");
    assert_eq!(game.total_score, 5000);
}

#[tokio::test]
async fn test_submit_without_guess_is_rejected() {
    let server = test_server();
    let game_id = create_game(&server).await;
    start(&server, &game_id).await;
    wait_for_phase(&server, &game_id, GamePhase::AwaitingGuess).await;

    let response = post_action(&server, &game_id, "submit-guess").await;

    assert!(response.error);
    assert_eq!(response.error_code, Some(GameErrorCode::NoGuess));
    let game = wait_for_phase(&server, &game_id, GamePhase::AwaitingGuess).await;
    assert_eq!(game.total_score, 0);
}

#[tokio::test]
async fn test_out_of_range_guess_is_rejected() {
    let server = test_server();
    let game_id = create_game(&server).await;
    start(&server, &game_id).await;
    wait_for_phase(&server, &game_id, GamePhase::AwaitingGuess).await;

    let response = server
        .post(&format!("/games/{game_id}/save-guess"))
        .json(&json!({"lat": 12.0, "lng": 181.0}))
        .await
        .json::<GameResponse>();

    assert_eq!(response.error_code, Some(GameErrorCode::InvalidCoordinate));
}

#[tokio::test]
async fn test_hint_is_given_once() {
    let server = test_server();
    let game_id = create_game(&server).await;
    start(&server, &game_id).await;
    wait_for_phase(&server, &game_id, GamePhase::AwaitingGuess).await;

    let first = post_action(&server, &game_id, "hint").await;
    let second = post_action(&server, &game_id, "hint").await;

    let hint = first.game.unwrap().hint.unwrap();
    assert_eq!(hint.radius_meters, 1_000_000.0);
    assert_eq!(second.error_code, Some(GameErrorCode::HintAlreadyUsed));
}

#[tokio::test]
async fn test_actions_out_of_order_are_rejected() {
    let server = test_server();
    let game_id = create_game(&server).await;

    let response = post_action(&server, &game_id, "next").await;

    assert_eq!(response.error_code, Some(GameErrorCode::ActionNotAllowed));
}

#[tokio::test]
async fn test_full_game() {
    let server = test_server();
    let game_id = create_game(&server).await;
    start(&server, &game_id).await;

    for round in 1..=5 {
        let game = wait_for_phase(&server, &game_id, GamePhase::AwaitingGuess).await;
        assert_eq!(game.round_count, round);
        save_guess(&server, &game_id, LatLng::new(48.8566, 2.3522)).await;
        post_action(&server, &game_id, "submit-guess").await;

        let game = post_action(&server, &game_id, "next").await.game.unwrap();
        if game.phase == GamePhase::QuizCheckpoint {
            clear_quiz(&server, &game_id).await;
        }
    }

    let game = wait_for_phase(&server, &game_id, GamePhase::Summary).await;
    let summary = game.summary.unwrap();
    assert_eq!(game.quiz_checkpoints_passed, 2);
    assert_eq!(summary.round_scores.len(), 5);
    assert_eq!(summary.total_score, summary.round_scores.iter().sum::<u64>());
    assert_eq!(summary.player_name, "Player_1");

    let restarted = post_action(&server, &game_id, "restart").await;
    assert_eq!(restarted.game.unwrap().phase, GamePhase::Idle);
}

#[tokio::test]
async fn test_change_difficulty_restarts_the_game() {
    let server = test_server();
    let game_id = create_game(&server).await;
    start(&server, &game_id).await;
    wait_for_phase(&server, &game_id, GamePhase::AwaitingGuess).await;

    let response = server
        .post(&format!("/games/{game_id}/change-difficulty"))
        .json(&DifficultyRequest {
            difficulty: Difficulty::Hard,
        })
        .await
        .json::<GameResponse>();

    let game = response.game.unwrap();
    assert_eq!(game.difficulty, Difficulty::Hard);
    assert_eq!(game.round_count, 1);
    wait_for_phase(&server, &game_id, GamePhase::AwaitingGuess).await;
}

#[tokio::test]
async fn test_delete_game() {
    let server = test_server();
    let game_id = create_game(&server).await;

    let deleted = server
        .delete(&format!("/games/{game_id}"))
        .await
        .json::<GameResponse>();
    let state = server
        .get(&format!("/games/{game_id}"))
        .await
        .json::<GameResponse>();

    assert!(!deleted.error);
    assert_eq!(state.error_code, Some(GameErrorCode::GameNotFound));
}
