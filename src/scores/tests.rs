use crate::game::models::{GameSummary, StarRating};
use crate::scores::errors::ScorePersistenceError;
use crate::scores::models::ScoreRecord;
use crate::scores::{HttpScoreStorage, LoggingScoreStorage, ScoreStorage};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use std::sync::{Arc, Mutex};
use url::Url;

type Received = Arc<Mutex<Vec<ScoreRecord>>>;

async fn accept(State(received): State<Received>, Json(record): Json<ScoreRecord>) -> StatusCode {
    received.lock().unwrap().push(record);
    StatusCode::CREATED
}

async fn reject() -> (StatusCode, &'static str) {
    (StatusCode::SERVICE_UNAVAILABLE, "maintenance")
}

async fn fake_score_service() -> (Url, Received) {
    let received = Received::default();
    let router = Router::new()
        .route("/scores", post(accept))
        .route("/broken", post(reject))
        .with_state(received.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await });
    let base_url = Url::parse(&format!("http://{address}/")).unwrap();
    (base_url, received)
}

fn record() -> ScoreRecord {
    ScoreRecord {
        player_name: String::from("Player_1"),
        score: 17_250,
    }
}

#[test]
fn test_record_shape() {
    assert_eq!(
        serde_json::to_value(record()).unwrap(),
        serde_json::json!({"playerName": "Player_1", "score": 17250})
    );
}

#[test]
fn test_record_from_summary() {
    let summary = GameSummary {
        player_name: String::from("Player_1"),
        total_score: 17_250,
        stars: StarRating::from_total_score(17_250),
        round_scores: vec![5000, 4000, 3000, 2750, 2500],
    };

    assert_eq!(ScoreRecord::from(&summary), record());
}

#[tokio::test]
async fn test_posts_the_final_score() {
    let (base_url, received) = fake_score_service().await;
    let storage = HttpScoreStorage::new(base_url.join("scores").unwrap());

    storage.save(&record()).await.unwrap();

    assert_eq!(*received.lock().unwrap(), vec![record()]);
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let (base_url, received) = fake_score_service().await;
    let storage = HttpScoreStorage::new(base_url.join("broken").unwrap());

    let err = storage.save(&record()).await.unwrap_err();

    assert!(matches!(
        err,
        ScorePersistenceError::Api { status: 503, ref message } if message == "maintenance"
    ));
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_logging_storage_never_fails() {
    assert!(LoggingScoreStorage.save(&record()).await.is_ok());
}
