pub mod game;
pub mod http;
pub mod player_actions;
pub mod quiz;
pub mod ws;
