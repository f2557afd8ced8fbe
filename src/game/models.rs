use crate::game::consts::{MAX_STARS, MIN_STARS, STAR_THRESHOLDS};
use crate::map::models::{HintRegion, LatLng};
use crate::quiz::models::QuizQuestion;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    Idle,
    AwaitingLocation,
    AwaitingGuess,
    RoundResolved,
    QuizCheckpoint,
    Summary,
    /// The location for the current round could not be acquired.
    LocationUnavailable,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::AwaitingLocation => "awaitingLocation",
            Self::AwaitingGuess => "awaitingGuess",
            Self::RoundResolved => "roundResolved",
            Self::QuizCheckpoint => "quizCheckpoint",
            Self::Summary => "summary",
            Self::LocationUnavailable => "locationUnavailable",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    pub total_score: u64,
    pub round_count: u32,
    pub difficulty: Difficulty,
    pub quiz_checkpoints_passed: u32,
    pub round_scores: Vec<u64>,
}

impl GameSession {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            total_score: 0,
            round_count: 1,
            difficulty,
            quiz_checkpoints_passed: 0,
            round_scores: Vec::new(),
        }
    }

    pub fn record_round_score(&mut self, score: u64) {
        self.round_scores.push(score);
        self.total_score += score;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Round {
    pub index: u32,
    pub actual_location: LatLng,
    pub actual_country_name: String,
    pub heading: f64,
    pub guess_location: Option<LatLng>,
    pub distance_km: Option<f64>,
    pub round_score: Option<u64>,
    pub hint_used: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRating(u8);

impl StarRating {
    pub fn from_total_score(total_score: u64) -> Self {
        let stars = STAR_THRESHOLDS
            .iter()
            .find(|(threshold, _)| total_score > *threshold)
            .map_or(MIN_STARS, |(_, stars)| *stars);
        Self(stars)
    }

    pub fn stars(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for star in 1..=MAX_STARS {
            f.write_str(if star <= self.0 { "★" } else { "☆" })?;
        }
        Ok(())
    }
}

/// Result of scoring a submitted guess.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOutcome {
    pub round_index: u32,
    pub country_name: String,
    pub distance_km: f64,
    pub round_score: u64,
    pub total_score: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub player_name: String,
    pub total_score: u64,
    pub stars: StarRating,
    pub round_scores: Vec<u64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanoramaView {
    pub location: LatLng,
    pub heading: f64,
    pub pitch: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub index: u32,
    pub panorama: PanoramaView,
    pub guess_location: Option<LatLng>,
    pub hint_used: bool,
    /// Only filled in once the round is resolved.
    pub outcome: Option<RoundOutcome>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSnapshot {
    pub question: QuizQuestion,
    pub correct_answers: u32,
    pub answers_needed: u32,
}

/// Serializable view of a game session as seen by the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub player_name: String,
    pub difficulty: Difficulty,
    pub round_count: u32,
    pub max_rounds: u32,
    pub total_score: u64,
    pub quiz_checkpoints_passed: u32,
    pub round: Option<RoundSnapshot>,
    pub pending_guess: Option<LatLng>,
    pub hint: Option<HintRegion>,
    pub quiz: Option<QuizSnapshot>,
    pub summary: Option<GameSummary>,
}
