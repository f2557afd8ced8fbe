use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScorePersistenceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Score storage error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for ScorePersistenceError {
    fn from(err: reqwest::Error) -> Self {
        ScorePersistenceError::Network(err.to_string())
    }
}
