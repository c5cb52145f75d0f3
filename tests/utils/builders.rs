use quiz_stats::{
    game_result::{GameResultRequest, RoundResultRequest},
    GameResult,
};
use uuid::Uuid;

use super::TestSetup;

/// Builds and submits one finished game
pub struct GameBuilder {
    correct: Vec<usize>,
    wrong: Vec<usize>,
    time_spent: u64,
    player_id: String,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            correct: vec![],
            wrong: vec![],
            time_spent: 60,
            player_id: Uuid::new_v4().to_string(),
        }
    }

    /// Question indexes answered correctly
    pub fn correct(mut self, indexes: impl IntoIterator<Item = usize>) -> Self {
        self.correct.extend(indexes);
        self
    }

    /// Question indexes answered wrongly
    pub fn wrong(mut self, indexes: impl IntoIterator<Item = usize>) -> Self {
        self.wrong.extend(indexes);
        self
    }

    pub fn time_spent(mut self, time_spent: u64) -> Self {
        self.time_spent = time_spent;
        self
    }

    pub fn request(&self, setup: &TestSetup) -> GameResultRequest {
        let rounds = |indexes: &[usize], answer: &str| -> Vec<RoundResultRequest> {
            indexes
                .iter()
                .map(|&i| RoundResultRequest {
                    question_id: setup.question_id(i),
                    answer: answer.to_string(),
                })
                .collect()
        };

        GameResultRequest {
            configuration_id: setup.configuration.id,
            question_count: setup.configuration.questions.len() as u32,
            time_spent: self.time_spent,
            correct_answered_questions: rounds(&self.correct, "right"),
            wrong_answered_questions: rounds(&self.wrong, "wrong"),
        }
    }

    pub async fn submit(self, setup: &TestSetup) -> GameResult {
        setup
            .state
            .game_result_service()
            .submit_game_result(self.request(setup), &self.player_id)
            .await
            .expect("game result should be saved")
    }
}
