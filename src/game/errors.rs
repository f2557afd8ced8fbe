use crate::game::models::GamePhase;
use crate::quiz::QuizError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("no game with such id")]
    GameNotFound,

    #[error("place a pin on the map first")]
    NoGuess,

    #[error("`{action}` is not allowed in the `{phase}` phase")]
    ActionNotAllowed {
        action: &'static str,
        phase: GamePhase,
    },

    #[error("the hint for this round was already used")]
    HintAlreadyUsed,

    #[error("coordinates are out of range")]
    InvalidCoordinate,

    #[error(transparent)]
    Quiz(#[from] QuizError),
}
