use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use super::models::{Configuration, Question, WrongAnswer};
use crate::shared::AppError;

/// Request payload describing a question
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRequest {
    pub text: String,
    pub right_answers: BTreeSet<String>,
    #[serde(default)]
    pub wrong_answers: Vec<String>,
}

impl QuestionRequest {
    /// Rejects blank question or wrong-answer texts
    pub fn validate(&self) -> Result<(), AppError> {
        if self.text.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "question text cannot be blank".to_string(),
            ));
        }
        if self.wrong_answers.iter().any(|text| text.trim().is_empty()) {
            return Err(AppError::InvalidArgument(
                "wrong answer text cannot be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds a new question with generated IDs
    pub fn into_question(self) -> Question {
        Question::new(
            self.text,
            self.right_answers,
            self.wrong_answers.into_iter().map(WrongAnswer::new).collect(),
        )
    }
}

/// Request payload for creating or replacing a configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigurationRequest {
    #[serde(default)]
    pub questions: Vec<QuestionRequest>,
}

/// Configuration with its questions resolved, for API responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigurationResponse {
    pub id: Uuid,
    pub questions: Vec<Question>,
    pub volume_level: Option<i32>,
}

impl ConfigurationResponse {
    pub fn new(configuration: Configuration, questions: Vec<Question>) -> Self {
        Self {
            id: configuration.id,
            questions,
            volume_level: configuration.volume_level,
        }
    }
}
