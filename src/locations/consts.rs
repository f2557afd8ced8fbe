/// Search radius around a candidate when looking for a panorama, in meters.
pub const PANORAMA_SEARCH_RADIUS_M: f64 = 50.0;
pub const PANORAMA_SOURCE: &str = "outdoor";
pub const PANORAMA_PITCH: f64 = 0.0;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 25;
pub const HTTP_TIMEOUT_SECS: u64 = 10;
