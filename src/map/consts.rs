pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const EARTH_RADIUS_M: f64 = EARTH_RADIUS_KM * 1000.0;

pub const MAX_SCORE: u64 = 5000;
/// Guesses closer than this are awarded `MAX_SCORE` regardless of rounding.
pub const PERFECT_GUESS_DISTANCE_KM: f64 = 1.0;
/// Distance at which the score decays to `MAX_SCORE / e`.
pub const SCORE_DECAY_DISTANCE_KM: f64 = 2000.0;

pub const HINT_MAX_OFFSET_M: f64 = 900_000.0;
pub const HINT_REGION_RADIUS_M: f64 = 1_000_000.0;
