use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::config::StatisticsConfig;
use crate::configuration::{
    ConfigService, ConfigurationRepository, InMemoryConfigurationRepository,
    InMemoryQuestionRepository, QuestionRepository,
};
use crate::game_result::{
    GameResultRepository, GameResultService, InMemoryGameResultRepository, RewardCalculator,
};
use crate::statistics::StatisticsService;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub configuration_repository: Arc<dyn ConfigurationRepository>,
    pub question_repository: Arc<dyn QuestionRepository>,
    pub game_result_repository: Arc<dyn GameResultRepository>,
    /// Holds the process-wide perfect-score counter
    pub reward_calculator: RewardCalculator,
    pub statistics_config: StatisticsConfig,
}

impl AppState {
    pub fn new(
        configuration_repository: Arc<dyn ConfigurationRepository>,
        question_repository: Arc<dyn QuestionRepository>,
        game_result_repository: Arc<dyn GameResultRepository>,
        reward_calculator: RewardCalculator,
        statistics_config: StatisticsConfig,
    ) -> Self {
        Self {
            configuration_repository,
            question_repository,
            game_result_repository,
            reward_calculator,
            statistics_config,
        }
    }

    /// State backed by in-memory repositories and a fresh counter
    pub fn in_memory(statistics_config: StatisticsConfig) -> Self {
        Self::new(
            Arc::new(InMemoryConfigurationRepository::new()),
            Arc::new(InMemoryQuestionRepository::new()),
            Arc::new(InMemoryGameResultRepository::new()),
            RewardCalculator::default(),
            statistics_config,
        )
    }

    /// In-memory state configured from `QUIZ_*` environment variables
    pub fn from_env() -> Self {
        Self::in_memory(StatisticsConfig::from_env())
    }

    pub fn config_service(&self) -> ConfigService {
        ConfigService::new(
            Arc::clone(&self.configuration_repository),
            Arc::clone(&self.question_repository),
        )
    }

    pub fn game_result_service(&self) -> GameResultService {
        GameResultService::new(
            Arc::clone(&self.game_result_repository),
            Arc::clone(&self.question_repository),
            self.reward_calculator.clone(),
        )
    }

    pub fn statistics_service(&self) -> StatisticsService {
        StatisticsService::new(
            Arc::clone(&self.configuration_repository),
            Arc::clone(&self.question_repository),
            Arc::clone(&self.game_result_repository),
            self.statistics_config.clone(),
        )
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}


#[cfg(test)]
mod tests {
    use super::test_utils::AppStateBuilder;
    use super::*;
    use crate::configuration::{ConfigurationRequest, QuestionRequest};
    use crate::game_result::{GameResultRequest, RoundResultRequest};

    async fn error_body(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn invalid_argument_maps_to_bad_request() {
        let response = AppError::InvalidArgument("score below zero".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_body(response).await["error"], "score below zero");
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response = AppError::NotFound("no configuration".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(error_body(response).await["error"], "no configuration");
    }

    #[test]
    fn storage_failures_map_to_500() {
        assert_eq!(
            AppError::DatabaseError("down".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn services_from_state_share_storage_and_counter() {
        let rewards = RewardCalculator::default();
        let state = AppStateBuilder::new()
            .with_reward_calculator(rewards.clone())
            .with_statistics_config(StatisticsConfig::default().with_max_problematic_questions(1))
            .build();

        let configuration = state
            .config_service()
            .create_configuration(ConfigurationRequest {
                questions: vec![
                    QuestionRequest {
                        text: "first".to_string(),
                        right_answers: ["1".to_string()].into_iter().collect(),
                        wrong_answers: vec![],
                    },
                    QuestionRequest {
                        text: "second".to_string(),
                        right_answers: ["2".to_string()].into_iter().collect(),
                        wrong_answers: vec![],
                    },
                ],
            })
            .await
            .unwrap();

        let round = |index: usize| RoundResultRequest {
            question_id: configuration.questions[index].id,
            answer: "x".to_string(),
        };
        state
            .game_result_service()
            .submit_game_result(
                GameResultRequest {
                    configuration_id: configuration.id,
                    question_count: 2,
                    time_spent: 30,
                    correct_answered_questions: vec![round(0), round(1)],
                    wrong_answered_questions: vec![],
                },
                "player",
            )
            .await
            .unwrap();

        assert_eq!(rewards.perfect_scores().count(), 1);

        let ranked = state
            .statistics_service()
            .get_problematic_questions(configuration.id)
            .await
            .unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].correct_answers, 1);
    }

    #[test]
    fn state_from_env_uses_environment_config() {
        let state = AppState::from_env();
        assert_eq!(state.statistics_config, StatisticsConfig::from_env());
    }

    #[test]
    fn in_memory_state_starts_with_zero_perfect_scores() {
        let state = AppState::in_memory(StatisticsConfig::default());
        assert_eq!(state.reward_calculator.perfect_scores().count(), 0);
    }
}
