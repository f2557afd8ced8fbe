use crate::app_context::{AppContext, RequestContext};
use crate::game::errors::GameError;
use crate::game::machine::{AcquisitionTicket, NextStep, QuizFeedback};
use crate::game::models::Difficulty;
use crate::map::models::LatLng;
use crate::scores::{self, models::ScoreRecord};
use crate::sessions::acquisition::spawn_location_acquisition;
use crate::sessions::consts::{DEFAULT_PLAYER_NAME, MAX_PLAYER_NAME_LENGTH};
use crate::sessions::responses::{CreateGameResponse, GameErrorCode, GameResponse};
use crate::storage::interface::IGameStorage;
use unicode_segmentation::UnicodeSegmentation;

pub struct GameHttpHandler<'a, GS: IGameStorage> {
    app_context: AppContext<GS>,
    request_context: &'a RequestContext,
}

impl<'a, GS> GameHttpHandler<'a, GS>
where
    GS: IGameStorage,
{
    pub fn new(app_context: AppContext<GS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    fn game_id(&self) -> &str {
        &self.request_context.game_id
    }

    pub async fn state(&self) -> GameResponse {
        self.respond("state", Ok(())).await
    }

    pub async fn start(&self, difficulty: Difficulty) -> GameResponse {
        let result = self
            .app_context
            .games
            .start_game(self.game_id(), difficulty)
            .await
            .map(|ticket| self.acquire_location(ticket));
        self.respond("start_game", result).await
    }

    pub async fn change_difficulty(&self, difficulty: Difficulty) -> GameResponse {
        let result = self
            .app_context
            .games
            .change_difficulty(self.game_id(), difficulty)
            .await
            .map(|ticket| self.acquire_location(ticket));
        self.respond("change_difficulty", result).await
    }

    pub async fn save_guess(&self, guess: LatLng) -> GameResponse {
        let result = self
            .app_context
            .games
            .place_guess(self.game_id(), guess)
            .await;
        self.respond("place_guess", result).await
    }

    pub async fn submit_guess(&self) -> GameResponse {
        let result = self.app_context.games.submit_guess(self.game_id()).await;
        if let Ok(outcome) = &result {
            tracing::info!(
                task = "game_event",
                event = "round_resolved",
                game_id = %self.game_id(),
                round = outcome.round_index,
                distance_km = outcome.distance_km,
                round_score = outcome.round_score,
                total_score = outcome.total_score,
            );
        }
        self.respond("submit_guess", result.map(|_| ())).await
    }

    pub async fn hint(&self) -> GameResponse {
        let result = self.app_context.games.use_hint(self.game_id()).await;
        self.respond("use_hint", result.map(|_| ())).await
    }

    pub async fn next(&self) -> GameResponse {
        let result = self
            .app_context
            .games
            .next(self.game_id())
            .await
            .map(|step| match step {
                NextStep::AcquireLocation(ticket) => self.acquire_location(ticket),
                NextStep::QuizCheckpoint => {}
                NextStep::Summary(summary) => {
                    tracing::info!(
                        task = "game_event",
                        event = "game_finished",
                        game_id = %self.game_id(),
                        total_score = summary.total_score,
                        stars = summary.stars.stars(),
                    );
                    scores::spawn_save(
                        self.app_context.scores.clone(),
                        self.game_id().to_string(),
                        ScoreRecord::from(&summary),
                    );
                }
            });
        self.respond("next", result).await
    }

    pub async fn answer_quiz(&self, option: &str) -> GameResponse {
        let result = self
            .app_context
            .games
            .answer_quiz(self.game_id(), option)
            .await
            .map(|feedback| {
                if let QuizFeedback::CheckpointCleared(ticket) = feedback {
                    tracing::info!(
                        task = "game_event",
                        event = "quiz_checkpoint_cleared",
                        game_id = %self.game_id(),
                    );
                    self.acquire_location(ticket);
                }
            });
        self.respond("answer_quiz", result).await
    }

    pub async fn restart(&self) -> GameResponse {
        let result = self.app_context.games.restart(self.game_id()).await;
        self.respond("restart", result).await
    }

    pub async fn delete(&self) -> GameResponse {
        if !self.app_context.games.delete(self.game_id()).await {
            return error_response(&GameError::GameNotFound);
        }
        tracing::info!(task = "game_event", event = "game_deleted", game_id = %self.game_id());
        GameResponse {
            error: false,
            error_code: None,
            game: None,
        }
    }

    fn acquire_location(&self, ticket: AcquisitionTicket) {
        spawn_location_acquisition(
            self.app_context.clone(),
            self.game_id().to_string(),
            ticket,
        );
    }

    async fn respond(&self, action: &'static str, result: Result<(), GameError>) -> GameResponse {
        if let Err(err) = result {
            tracing::debug!(game_id = %self.game_id(), action, "Rejected game action: {err}");
            return error_response(&err);
        }
        match self.app_context.games.snapshot(self.game_id()).await {
            Ok(snapshot) => GameResponse {
                error: false,
                error_code: None,
                game: Some(snapshot),
            },
            Err(err) => error_response(&err),
        }
    }
}

fn error_response(err: &GameError) -> GameResponse {
    GameResponse {
        error: true,
        error_code: Some(GameErrorCode::from(err)),
        game: None,
    }
}

pub struct CreateGameHttpHandler<GS: IGameStorage> {
    app_context: AppContext<GS>,
}

impl<GS> CreateGameHttpHandler<GS>
where
    GS: IGameStorage,
{
    pub fn new(app_context: AppContext<GS>) -> Self {
        Self { app_context }
    }

    pub async fn create(&self, player_name: Option<String>) -> CreateGameResponse {
        let player_name = player_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string());
        let name_length = player_name.graphemes(true).count();
        if name_length > MAX_PLAYER_NAME_LENGTH {
            tracing::debug!(
                name_length,
                max_length = MAX_PLAYER_NAME_LENGTH,
                "Rejecting a game because the player name is too long."
            );
            return CreateGameResponse {
                error: true,
                error_code: Some(GameErrorCode::PlayerNameTooLong),
                game_id: None,
                game: None,
            };
        }

        let game_id = self
            .app_context
            .games
            .create(player_name, self.app_context.sockets.clone())
            .await;
        tracing::info!(task = "game_event", event = "game_created", game_id = %game_id);
        let game = self.app_context.games.snapshot(&game_id).await.ok();
        CreateGameResponse {
            error: false,
            error_code: None,
            game_id: Some(game_id),
            game,
        }
    }
}
