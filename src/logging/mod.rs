use crate::cli::Args;
use crate::logging::quickwit::QuickwitLoggingLayerBuilder;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod consts;
pub mod quickwit;

pub fn init(args: &Args) {
    let quickwit_logging_layer = args.quickwit_url.clone().map(|quickwit_url| {
        QuickwitLoggingLayerBuilder::new(quickwit_url)
            .marker_field("task")
            .map_marker_to_index("http_request", "http_requests")
            .map_marker_to_index("game_event", "game_events")
            .map_marker_to_index("location_acquisition", "location_acquisitions")
            .with_batch_size(100)
            .build()
    });
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("strabo_server=info"));
    tracing_subscriber::registry()
        .with(quickwit_logging_layer)
        .with(env_filter)
        .with(fmt::layer())
        .init();
    if let Some(quickwit_url) = &args.quickwit_url {
        tracing::info!(quickwit_url = %quickwit_url, "Shipping logs to Quickwit.");
    }
}
