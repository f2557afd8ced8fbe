use crate::quiz::bank::QuestionTemplate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub prompt: String,
    #[serde(skip_serializing, default)]
    pub correct_answer: String,
    pub options: Vec<String>,
}

impl From<&QuestionTemplate> for QuizQuestion {
    fn from((prompt, correct_answer, options): &QuestionTemplate) -> Self {
        Self {
            prompt: prompt.to_string(),
            correct_answer: correct_answer.to_string(),
            options: options.iter().map(|option| option.to_string()).collect(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Whether this answer cleared the whole checkpoint.
    pub cleared: bool,
}
