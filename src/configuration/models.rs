use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// A wrong answer offered next to the right ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrongAnswer {
    pub id: Uuid,
    pub text: String,
}

impl WrongAnswer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
        }
    }
}

/// A quiz question, stored independently of the configurations using it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub text: String,
    pub right_answers: BTreeSet<String>,
    pub wrong_answers: Vec<WrongAnswer>,
}

impl Question {
    /// Creates a question with a generated ID
    pub fn new(
        text: impl Into<String>,
        right_answers: impl IntoIterator<Item = String>,
        wrong_answers: Vec<WrongAnswer>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            right_answers: right_answers.into_iter().collect(),
            wrong_answers,
        }
    }

    /// Copy with fresh IDs for the question and each wrong answer
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: self.text.clone(),
            right_answers: self.right_answers.clone(),
            wrong_answers: self
                .wrong_answers
                .iter()
                .map(|answer| WrongAnswer::new(answer.text.clone()))
                .collect(),
        }
    }
}

/// One playable quiz
///
/// Questions are referenced by ID only. Insertion order is kept so that
/// statistics built from a configuration are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub id: Uuid,
    pub question_ids: Vec<Uuid>,
    /// Filled in from the overworld service, never persisted here
    pub volume_level: Option<i32>,
}

impl Configuration {
    /// Creates a new configuration with generated ID
    pub fn new(question_ids: impl IntoIterator<Item = Uuid>) -> Self {
        let mut configuration = Self {
            id: Uuid::new_v4(),
            question_ids: Vec::new(),
            volume_level: None,
        };
        for question_id in question_ids {
            configuration.add_question(question_id);
        }
        configuration
    }

    pub fn has_question(&self, question_id: &Uuid) -> bool {
        self.question_ids.contains(question_id)
    }

    /// Adds a question ID unless it is already part of the configuration
    pub fn add_question(&mut self, question_id: Uuid) {
        if !self.has_question(&question_id) {
            self.question_ids.push(question_id);
        }
    }

    pub fn remove_question(&mut self, question_id: &Uuid) {
        self.question_ids.retain(|id| id != question_id);
    }

    pub fn question_count(&self) -> usize {
        self.question_ids.len()
    }
}
