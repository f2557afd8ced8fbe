use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

mod app_context;
mod cli;
mod game;
mod health;
mod http;
mod locations;
mod logging;
mod map;
mod presentation;
mod quiz;
mod scores;
mod sessions;
mod storage;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init(&args);
    let oracle = match locations::init(&args) {
        Ok(oracle) => oracle,
        Err(err) => {
            tracing::error!(
                locations_file = %args.locations.display(),
                "Failed to load locations: {err}"
            );
            std::process::exit(1);
        }
    };
    let scores = scores::init(&args);
    let app_context = app_context::init(oracle, scores);
    storage::sweep::spawn_idle_sweep(
        app_context.games.clone(),
        Duration::from_secs(args.idle_game_ttl_secs),
    );
    let router = http::router::new(&args, app_context);

    let listener = match tokio::net::TcpListener::bind(args.listen_address).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(address = %args.listen_address, "Failed to bind: {err}");
            std::process::exit(1);
        }
    };
    tracing::info!(address = %args.listen_address, "Listening.");
    if let Err(err) = axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        tracing::error!("Server error: {err}");
    }
}
