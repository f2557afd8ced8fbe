pub const MAX_ROUNDS: u32 = 5;

/// `(exclusive lower bound on the total score, stars)`, best first.
pub const STAR_THRESHOLDS: [(u64, u8); 4] = [(22_500, 5), (18_000, 4), (12_000, 3), (5_000, 2)];
pub const MIN_STARS: u8 = 1;
pub const MAX_STARS: u8 = 5;
