use crate::game::errors::GameError;
use crate::game::models::GameSnapshot;
use crate::quiz::QuizError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<GameSnapshot>,
}

/// Returned by every game action, carries the state of the game after the action.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<GameSnapshot>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameErrorCode {
    GameNotFound,
    PlayerNameTooLong,
    NoGuess,
    ActionNotAllowed,
    HintAlreadyUsed,
    InvalidCoordinate,
    UnknownQuizOption,
}

impl From<&GameError> for GameErrorCode {
    fn from(err: &GameError) -> Self {
        match err {
            GameError::GameNotFound => Self::GameNotFound,
            GameError::NoGuess => Self::NoGuess,
            GameError::ActionNotAllowed { .. } => Self::ActionNotAllowed,
            GameError::HintAlreadyUsed => Self::HintAlreadyUsed,
            GameError::InvalidCoordinate => Self::InvalidCoordinate,
            GameError::Quiz(QuizError::UnknownOption(_)) => Self::UnknownQuizOption,
            GameError::Quiz(QuizError::AlreadyCleared) => Self::ActionNotAllowed,
        }
    }
}
