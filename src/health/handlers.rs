use crate::app_context::AppContext;
use crate::health::responses::HealthCheckResponse;
use crate::storage::interface::IGameStorage;
use axum::extract::State;
use axum::response::Json;

pub async fn healthcheck<GS>(State(app_context): State<AppContext<GS>>) -> Json<HealthCheckResponse>
where
    GS: IGameStorage,
{
    Json(HealthCheckResponse {
        error: false,
        active_games: app_context.games.count().await,
        open_sockets: app_context.sockets.count().await,
    })
}
