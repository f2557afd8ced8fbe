use crate::game::models::{Difficulty, StarRating};
use crate::locations::models::GenerationGuard;
use crate::map::models::LatLng;
use crate::quiz::models::QuizQuestion;
use std::time::Duration;

pub mod message_types;
pub mod socket;

/// Everything the game core asks the client to render.
#[derive(Clone, Debug, PartialEq)]
pub enum PresentationCommand {
    ShowLoading {
        round_number: u32,
        max_rounds: u32,
        difficulty: Difficulty,
    },
    ShowPanorama {
        location: LatLng,
        heading: f64,
        pitch: f64,
    },
    ShowScoreBar {
        country_name: String,
        distance_km: f64,
        round_score: u64,
        total_score: u64,
    },
    ShowHintRegion {
        center: LatLng,
        radius_meters: f64,
    },
    ShowQuizOverlay {
        question: QuizQuestion,
        question_number: u32,
        questions_needed: u32,
    },
    ShowQuizFeedback {
        correct: bool,
        checkpoint_cleared: bool,
    },
    ShowSummary {
        total_score: u64,
        stars: StarRating,
    },
    ShowError {
        reason: PresentationError,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PresentationError {
    CannotConnect,
    NoLocationFound,
}

pub trait Presenter: Send + Sync {
    fn present(&self, command: PresentationCommand);

    /// Same as `present`, but the client should only see the command after `delay`, and only
    /// if the game is still in the generation `guard` was taken in by then.
    fn present_after(
        &self,
        command: PresentationCommand,
        delay: Duration,
        guard: GenerationGuard,
    ) {
        let _ = delay;
        if !guard.is_superseded() {
            self.present(command);
        }
    }
}
