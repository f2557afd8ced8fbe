use std::time::Duration;

pub const IDLE_SWEEP_INTERVAL: Duration = Duration::from_secs(60);
pub const DEFAULT_IDLE_GAME_TTL_SECS: u64 = 3600;
