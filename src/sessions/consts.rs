pub const MAX_PLAYER_NAME_LENGTH: usize = 24;
pub const DEFAULT_PLAYER_NAME: &str = "Player_1";
