use crate::app_context::{AppContext, RequestContext};
use crate::sessions::handlers::http::GameHttpHandler;
use crate::sessions::requests::QuizAnswerRequest;
use crate::sessions::responses::GameResponse;
use crate::storage::interface::IGameStorage;
use axum::extract::{Path, State};
use axum::response::Json;

pub async fn answer<GS>(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
    Json(request): Json<QuizAnswerRequest>,
) -> Json<GameResponse>
where
    GS: IGameStorage,
{
    let request_context = RequestContext { game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .answer_quiz(&request.option)
        .await;
    Json(response)
}
