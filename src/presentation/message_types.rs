use crate::game::models::Difficulty;
use crate::map::models::LatLng;
use crate::presentation::{PresentationCommand, PresentationError};
use crate::quiz::models::QuizQuestion;
use serde::{Deserialize, Serialize};
use serde_unit_struct::{Deserialize_unit_struct, Serialize_unit_struct};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ClientSentSocketMessage {
    Ping {
        #[allow(dead_code)]
        // This field is actually being pattern-matched on.
        r#type: Ping,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ServerSentSocketMessage {
    ShowLoading {
        r#type: ShowLoading,
        payload: LoadingPayload,
    },
    ShowPanorama {
        r#type: ShowPanorama,
        payload: PanoramaPayload,
    },
    ShowScoreBar {
        r#type: ShowScoreBar,
        payload: ScoreBarPayload,
    },
    ShowHintRegion {
        r#type: ShowHintRegion,
        payload: HintRegionPayload,
    },
    ShowQuizOverlay {
        r#type: ShowQuizOverlay,
        payload: QuizOverlayPayload,
    },
    ShowQuizFeedback {
        r#type: ShowQuizFeedback,
        payload: QuizFeedbackPayload,
    },
    ShowSummary {
        r#type: ShowSummary,
        payload: SummaryPayload,
    },
    ShowError {
        r#type: ShowError,
        payload: ErrorPayload,
    },
    Pong {
        r#type: Pong,
    },
}

impl From<PresentationCommand> for ServerSentSocketMessage {
    fn from(command: PresentationCommand) -> Self {
        match command {
            PresentationCommand::ShowLoading {
                round_number,
                max_rounds,
                difficulty,
            } => Self::ShowLoading {
                r#type: ShowLoading,
                payload: LoadingPayload {
                    round_number,
                    max_rounds,
                    difficulty,
                },
            },
            PresentationCommand::ShowPanorama {
                location,
                heading,
                pitch,
            } => Self::ShowPanorama {
                r#type: ShowPanorama,
                payload: PanoramaPayload {
                    location,
                    heading,
                    pitch,
                },
            },
            PresentationCommand::ShowScoreBar {
                country_name,
                distance_km,
                round_score,
                total_score,
            } => Self::ShowScoreBar {
                r#type: ShowScoreBar,
                payload: ScoreBarPayload {
                    country_name,
                    distance_km,
                    round_score,
                    total_score,
                },
            },
            PresentationCommand::ShowHintRegion {
                center,
                radius_meters,
            } => Self::ShowHintRegion {
                r#type: ShowHintRegion,
                payload: HintRegionPayload {
                    center,
                    radius_meters,
                },
            },
            PresentationCommand::ShowQuizOverlay {
                question,
                question_number,
                questions_needed,
            } => Self::ShowQuizOverlay {
                r#type: ShowQuizOverlay,
                payload: QuizOverlayPayload {
                    question,
                    question_number,
                    questions_needed,
                },
            },
            PresentationCommand::ShowQuizFeedback {
                correct,
                checkpoint_cleared,
            } => Self::ShowQuizFeedback {
                r#type: ShowQuizFeedback,
                payload: QuizFeedbackPayload {
                    correct,
                    checkpoint_cleared,
                },
            },
            PresentationCommand::ShowSummary { total_score, stars } => Self::ShowSummary {
                r#type: ShowSummary,
                payload: SummaryPayload {
                    total_score,
                    stars: stars.stars(),
                    stars_text: stars.to_string(),
                },
            },
            PresentationCommand::ShowError { reason } => Self::ShowError {
                r#type: ShowError,
                payload: ErrorPayload {
                    reason: match reason {
                        PresentationError::CannotConnect => ErrorReason::CannotConnect,
                        PresentationError::NoLocationFound => ErrorReason::NoLocationFound,
                    },
                },
            },
        }
    }
}

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct ShowLoading;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct ShowPanorama;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct ShowScoreBar;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct ShowHintRegion;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct ShowQuizOverlay;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct ShowQuizFeedback;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct ShowSummary;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct ShowError;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct Ping;

#[derive(Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct Pong;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingPayload {
    pub round_number: u32,
    pub max_rounds: u32,
    pub difficulty: Difficulty,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanoramaPayload {
    pub location: LatLng,
    pub heading: f64,
    pub pitch: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBarPayload {
    pub country_name: String,
    pub distance_km: f64,
    pub round_score: u64,
    pub total_score: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintRegionPayload {
    pub center: LatLng,
    pub radius_meters: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOverlayPayload {
    pub question: QuizQuestion,
    pub question_number: u32,
    pub questions_needed: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizFeedbackPayload {
    pub correct: bool,
    pub checkpoint_cleared: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPayload {
    pub total_score: u64,
    pub stars: u8,
    /// E.g. `★★★☆☆`.
    pub stars_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub reason: ErrorReason,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorReason {
    CannotConnect,
    NoLocationFound,
}
