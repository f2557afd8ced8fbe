use crate::app_context::{AppContext, RequestContext};
use crate::map::models::LatLng;
use crate::sessions::handlers::http::GameHttpHandler;
use crate::sessions::responses::GameResponse;
use crate::storage::interface::IGameStorage;
use axum::extract::{Path, State};
use axum::response::Json;

pub async fn save_guess<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
    Json(guess): Json<LatLng>,
) -> Json<GameResponse>
where
    GS: IGameStorage,
{
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .save_guess(guess)
        .await;
    Json(response)
}

pub async fn submit_guess<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Json<GameResponse>
where
    GS: IGameStorage,
{
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .submit_guess()
        .await;
    Json(response)
}

pub async fn hint<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Json<GameResponse>
where
    GS: IGameStorage,
{
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .hint()
        .await;
    Json(response)
}

pub async fn next<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Json<GameResponse>
where
    GS: IGameStorage,
{
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .next()
        .await;
    Json(response)
}
