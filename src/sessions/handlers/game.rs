use crate::app_context::{AppContext, RequestContext};
use crate::sessions::handlers::http::{CreateGameHttpHandler, GameHttpHandler};
use crate::sessions::requests::{CreateGameRequest, DifficultyRequest};
use crate::sessions::responses::{CreateGameResponse, GameResponse};
use crate::storage::interface::IGameStorage;
use axum::extract::{Path, State};
use axum::response::Json;

pub async fn create<GS>(
    State(app_context): State<AppContext<GS>>,
    request: Option<Json<CreateGameRequest>>,
) -> Json<CreateGameResponse>
where
    GS: IGameStorage,
{
    let request = request.map(|Json(request)| request).unwrap_or_default();
    let response = CreateGameHttpHandler::new(app_context)
        .create(request.player_name)
        .await;
    Json(response)
}

pub async fn state<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Json<GameResponse>
where
    GS: IGameStorage,
{
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .state()
        .await;
    Json(response)
}

pub async fn start<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
    Json(request): Json<DifficultyRequest>,
) -> Json<GameResponse>
where
    GS: IGameStorage,
{
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .start(request.difficulty)
        .await;
    Json(response)
}

pub async fn change_difficulty<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
    Json(request): Json<DifficultyRequest>,
) -> Json<GameResponse>
where
    GS: IGameStorage,
{
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .change_difficulty(request.difficulty)
        .await;
    Json(response)
}

pub async fn restart<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Json<GameResponse>
where
    GS: IGameStorage,
{
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .restart()
        .await;
    Json(response)
}

pub async fn delete<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Json<GameResponse>
where
    GS: IGameStorage,
{
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .delete()
        .await;
    Json(response)
}
