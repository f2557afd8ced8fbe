use crate::game::errors::GameError;
use crate::game::machine::{
    AcquisitionTicket, GameMachine, LocationHandoff, NextStep, QuizFeedback,
};
use crate::game::models::{Difficulty, GameSnapshot, RoundOutcome};
use crate::locations::errors::LocationError;
use crate::locations::models::ValidatedLocation;
use crate::map::models::{HintRegion, LatLng};
use crate::presentation::socket::SocketPresenter;
use crate::storage::interface::{GameFlowHandler, GameRepo, IGameStorage};
use crate::storage::sockets::HashMapClientSocketsStorage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

type Game = GameMachine<SocketPresenter>;

struct StoredGame {
    game: Game,
    last_active: Instant,
}

/// In-memory game sessions. Every mutation of a game happens under the write lock.
#[derive(Clone, Default)]
pub struct HashMapGamesStorage {
    storage: Arc<RwLock<HashMap<String, StoredGame>>>,
}

impl HashMapGamesStorage {
    async fn with_game<T, F>(&self, game_id: &str, action: F) -> Result<T, GameError>
    where
        F: FnOnce(&mut Game) -> Result<T, GameError> + Send,
        T: Send,
    {
        let mut storage_guard = self.storage.write().await;
        let stored = storage_guard
            .get_mut(game_id)
            .ok_or(GameError::GameNotFound)?;
        stored.last_active = Instant::now();
        action(&mut stored.game)
    }
}

impl IGameStorage for HashMapGamesStorage {}

#[async_trait]
impl GameRepo for HashMapGamesStorage {
    async fn exists(&self, game_id: &str) -> bool {
        self.storage.read().await.contains_key(game_id)
    }

    async fn create(&self, player_name: String, sockets: HashMapClientSocketsStorage) -> String {
        let game_id = Uuid::new_v4().to_string();
        let presenter = SocketPresenter::spawn(game_id.clone(), sockets);
        let stored = StoredGame {
            game: GameMachine::new(player_name, presenter),
            last_active: Instant::now(),
        };
        self.storage.write().await.insert(game_id.clone(), stored);
        game_id
    }

    async fn delete(&self, game_id: &str) -> bool {
        self.storage.write().await.remove(game_id).is_some()
    }

    async fn count(&self) -> usize {
        self.storage.read().await.len()
    }

    async fn remove_idle(&self, max_idle: Duration) -> usize {
        let mut storage_guard = self.storage.write().await;
        let before = storage_guard.len();
        let now = Instant::now();
        storage_guard.retain(|_, stored| now.duration_since(stored.last_active) < max_idle);
        before - storage_guard.len()
    }

    async fn snapshot(&self, game_id: &str) -> Result<GameSnapshot, GameError> {
        self.storage
            .read()
            .await
            .get(game_id)
            .map(|stored| stored.game.snapshot())
            .ok_or(GameError::GameNotFound)
    }
}

#[async_trait]
impl GameFlowHandler for HashMapGamesStorage {
    async fn start_game(
        &self,
        game_id: &str,
        difficulty: Difficulty,
    ) -> Result<AcquisitionTicket, GameError> {
        self.with_game(game_id, |game| game.start_game(difficulty))
            .await
    }

    async fn change_difficulty(
        &self,
        game_id: &str,
        difficulty: Difficulty,
    ) -> Result<AcquisitionTicket, GameError> {
        self.with_game(game_id, |game| game.change_difficulty(difficulty))
            .await
    }

    async fn location_ready(
        &self,
        game_id: &str,
        generation: u64,
        location: ValidatedLocation,
    ) -> Result<LocationHandoff, GameError> {
        self.with_game(game_id, |game| Ok(game.location_ready(generation, location)))
            .await
    }

    async fn location_failed(
        &self,
        game_id: &str,
        generation: u64,
        error: &LocationError,
    ) -> Result<LocationHandoff, GameError> {
        self.with_game(game_id, |game| Ok(game.location_failed(generation, error)))
            .await
    }

    async fn place_guess(&self, game_id: &str, guess: LatLng) -> Result<(), GameError> {
        self.with_game(game_id, |game| game.place_guess(guess)).await
    }

    async fn submit_guess(&self, game_id: &str) -> Result<RoundOutcome, GameError> {
        self.with_game(game_id, |game| game.submit_guess()).await
    }

    async fn use_hint(&self, game_id: &str) -> Result<HintRegion, GameError> {
        self.with_game(game_id, |game| game.use_hint()).await
    }

    async fn next(&self, game_id: &str) -> Result<NextStep, GameError> {
        self.with_game(game_id, |game| game.next()).await
    }

    async fn answer_quiz(&self, game_id: &str, option: &str) -> Result<QuizFeedback, GameError> {
        self.with_game(game_id, |game| game.answer_quiz(option))
            .await
    }

    async fn restart(&self, game_id: &str) -> Result<(), GameError> {
        self.with_game(game_id, |game| game.restart()).await
    }
}
