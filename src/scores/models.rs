use crate::game::models::GameSummary;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub player_name: String,
    pub score: u64,
}

impl From<&GameSummary> for ScoreRecord {
    fn from(summary: &GameSummary) -> Self {
        Self {
            player_name: summary.player_name.clone(),
            score: summary.total_score,
        }
    }
}
