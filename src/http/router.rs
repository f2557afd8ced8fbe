use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::interface::IGameStorage;
use crate::{health, http::cors, http::middleware, sessions::handlers};
use axum::{
    routing::{any, get, post},
    Router,
};
use tower::ServiceBuilder;

pub fn new<GS>(args: &Args, app_context: AppContext<GS>) -> Router
where
    GS: IGameStorage,
{
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck::<GS>));
    let quiz_routes = Router::new().route("/answer", post(handlers::quiz::answer::<GS>));
    let games_routes = Router::new()
        .route("/", post(handlers::game::create::<GS>))
        .route(
            "/:game-id",
            get(handlers::game::state::<GS>).delete(handlers::game::delete::<GS>),
        )
        .route("/:game-id/start", post(handlers::game::start::<GS>))
        .route(
            "/:game-id/change-difficulty",
            post(handlers::game::change_difficulty::<GS>),
        )
        .route("/:game-id/restart", post(handlers::game::restart::<GS>))
        .route(
            "/:game-id/save-guess",
            post(handlers::player_actions::save_guess::<GS>),
        )
        .route(
            "/:game-id/submit-guess",
            post(handlers::player_actions::submit_guess::<GS>),
        )
        .route("/:game-id/hint", post(handlers::player_actions::hint::<GS>))
        .route("/:game-id/next", post(handlers::player_actions::next::<GS>))
        .nest("/:game-id/quiz", quiz_routes)
        .route("/:game-id/ws", any(handlers::ws::ws::<GS>));

    Router::new()
        .nest("/health", health_routes)
        .nest("/games", games_routes)
        .with_state(app_context)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::tracing))
                .layer(cors_policy),
        )
}
