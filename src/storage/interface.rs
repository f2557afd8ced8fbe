use crate::game::errors::GameError;
use crate::game::machine::{AcquisitionTicket, LocationHandoff, NextStep, QuizFeedback};
use crate::game::models::{Difficulty, GameSnapshot, RoundOutcome};
use crate::locations::errors::LocationError;
use crate::locations::models::ValidatedLocation;
use crate::map::models::{HintRegion, LatLng};
use crate::storage::sockets::HashMapClientSocketsStorage;
use async_trait::async_trait;
use std::time::Duration;

pub trait IGameStorage: GameRepo + GameFlowHandler + Clone + Send + Sync + 'static {}

#[async_trait]
pub trait GameRepo {
    async fn exists(&self, game_id: &str) -> bool;

    async fn create(&self, player_name: String, sockets: HashMapClientSocketsStorage) -> String;

    async fn delete(&self, game_id: &str) -> bool;

    async fn count(&self) -> usize;

    /// Drops every game nobody acted on for `max_idle` and returns how many went.
    async fn remove_idle(&self, max_idle: Duration) -> usize;

    async fn snapshot(&self, game_id: &str) -> Result<GameSnapshot, GameError>;
}

#[async_trait]
pub trait GameFlowHandler {
    async fn start_game(
        &self,
        game_id: &str,
        difficulty: Difficulty,
    ) -> Result<AcquisitionTicket, GameError>;

    async fn change_difficulty(
        &self,
        game_id: &str,
        difficulty: Difficulty,
    ) -> Result<AcquisitionTicket, GameError>;

    async fn location_ready(
        &self,
        game_id: &str,
        generation: u64,
        location: ValidatedLocation,
    ) -> Result<LocationHandoff, GameError>;

    async fn location_failed(
        &self,
        game_id: &str,
        generation: u64,
        error: &LocationError,
    ) -> Result<LocationHandoff, GameError>;

    async fn place_guess(&self, game_id: &str, guess: LatLng) -> Result<(), GameError>;

    async fn submit_guess(&self, game_id: &str) -> Result<RoundOutcome, GameError>;

    async fn use_hint(&self, game_id: &str) -> Result<HintRegion, GameError>;

    async fn next(&self, game_id: &str) -> Result<NextStep, GameError>;

    async fn answer_quiz(&self, game_id: &str, option: &str) -> Result<QuizFeedback, GameError>;

    async fn restart(&self, game_id: &str) -> Result<(), GameError>;
}
