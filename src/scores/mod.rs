use crate::cli::Args;
use crate::locations::consts::HTTP_TIMEOUT_SECS;
use async_trait::async_trait;
use errors::ScorePersistenceError;
use models::ScoreRecord;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub mod errors;
pub mod models;
#[cfg(test)]
mod tests;

pub fn init(args: &Args) -> Arc<dyn ScoreStorage> {
    match &args.score_storage_url {
        Some(url) => {
            tracing::info!(score_storage_url = %url, "Final scores will be saved remotely.");
            Arc::new(HttpScoreStorage::new(url.clone()))
        }
        None => {
            tracing::warn!("`--score-storage-url` is not set, final scores will only be logged.");
            Arc::new(LoggingScoreStorage)
        }
    }
}

#[async_trait]
pub trait ScoreStorage: Send + Sync {
    async fn save(&self, record: &ScoreRecord) -> Result<(), ScorePersistenceError>;
}

/// Posts `{playerName, score}` to an external score service.
pub struct HttpScoreStorage {
    client: reqwest::Client,
    url: Url,
}

impl HttpScoreStorage {
    pub fn new(url: Url) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self { client, url }
    }
}

#[async_trait]
impl ScoreStorage for HttpScoreStorage {
    async fn save(&self, record: &ScoreRecord) -> Result<(), ScorePersistenceError> {
        let resp = self
            .client
            .post(self.url.clone())
            .json(record)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ScorePersistenceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(())
    }
}

pub struct LoggingScoreStorage;

#[async_trait]
impl ScoreStorage for LoggingScoreStorage {
    async fn save(&self, record: &ScoreRecord) -> Result<(), ScorePersistenceError> {
        tracing::info!(
            player_name = %record.player_name,
            score = record.score,
            "Final score."
        );
        Ok(())
    }
}

/// Saves in the background. The game summary never depends on the outcome.
pub fn spawn_save(storage: Arc<dyn ScoreStorage>, game_id: String, record: ScoreRecord) {
    tokio::spawn(async move {
        match storage.save(&record).await {
            Ok(()) => tracing::info!(
                task = "game_event",
                event = "score_saved",
                game_id = %game_id,
                score = record.score,
            ),
            Err(err) => tracing::warn!(
                game_id = %game_id,
                score = record.score,
                "Failed to save the final score: {err}"
            ),
        }
    });
}
