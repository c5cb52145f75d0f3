use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One question and the answer the player submitted for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub question_id: Uuid,
    pub answer: String,
}

impl RoundResult {
    pub fn new(question_id: Uuid, answer: impl Into<String>) -> Self {
        Self {
            question_id,
            answer: answer.into(),
        }
    }
}

/// Outcome of one completed play-through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub id: Uuid,
    pub configuration_id: Uuid,
    pub player_id: String,
    pub correct_answered_questions: Vec<RoundResult>,
    pub wrong_answered_questions: Vec<RoundResult>,
    pub question_count: u32,
    /// Percentage of correctly answered questions, 0 to 100
    pub score: u32,
    /// Seconds the player needed for the whole game
    pub time_spent: u64,
    pub rewards: u32,
    pub played_at: DateTime<Utc>,
}
