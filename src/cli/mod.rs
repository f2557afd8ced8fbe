use crate::locations::consts::DEFAULT_MAX_ATTEMPTS;
use crate::storage::consts::DEFAULT_IDLE_GAME_TTL_SECS;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    /// Logs are shipped to Quickwit only when this is set.
    #[arg(long)]
    pub quickwit_url: Option<Url>,
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Candidate locations, one `{"lat": .., "lng": .., "difficulty": ..}` object per line.
    #[arg(long)]
    #[arg(default_value = "locations.example.ndjson")]
    pub locations: PathBuf,
    /// Remote location provider, takes precedence over `--locations`.
    #[arg(long)]
    pub location_provider_url: Option<Url>,
    #[arg(long)]
    #[arg(default_value = "https://maps.googleapis.com/maps/api/")]
    pub maps_api_url: Url,
    #[arg(long)]
    pub score_storage_url: Option<Url>,
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    #[arg(default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_location_attempts: u32,
    /// Games nobody acted on for this many seconds are dropped.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    #[arg(default_value_t = DEFAULT_IDLE_GAME_TTL_SECS)]
    pub idle_game_ttl_secs: u64,
    #[arg(long, value_delimiter = ',')]
    #[arg(default_value = "http://127.0.0.1:3000,http://localhost:3000")]
    pub allowed_origins: Vec<String>,
}
