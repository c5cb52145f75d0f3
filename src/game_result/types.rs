use serde::Deserialize;
use uuid::Uuid;

/// A submitted round, referencing its question by ID
#[derive(Debug, Clone, Deserialize)]
pub struct RoundResultRequest {
    pub question_id: Uuid,
    pub answer: String,
}

/// Request payload sent by the game client when a play-through ends
#[derive(Debug, Clone, Deserialize)]
pub struct GameResultRequest {
    pub configuration_id: Uuid,
    pub question_count: u32,
    pub time_spent: u64,
    #[serde(default)]
    pub correct_answered_questions: Vec<RoundResultRequest>,
    #[serde(default)]
    pub wrong_answered_questions: Vec<RoundResultRequest>,
}

impl GameResultRequest {
    pub fn answered_count(&self) -> usize {
        self.correct_answered_questions.len() + self.wrong_answered_questions.len()
    }
}
