use quiz_stats::{
    configuration::{ConfigurationRequest, ConfigurationResponse, QuestionRequest},
    telemetry, AppState, StatisticsConfig,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub state: AppState,
    pub configuration: ConfigurationResponse,
}

pub struct TestSetupBuilder {
    question_count: usize,
    config: StatisticsConfig,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            question_count: 6,
            config: StatisticsConfig::default(),
        }
    }

    pub fn with_questions(mut self, question_count: usize) -> Self {
        self.question_count = question_count;
        self
    }

    pub fn with_config(mut self, config: StatisticsConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn build(self) -> TestSetup {
        telemetry::init_tracing("quiz_stats=debug");

        let state = AppState::in_memory(self.config);
        let request = ConfigurationRequest {
            questions: (0..self.question_count)
                .map(|i| QuestionRequest {
                    text: format!("question{i}"),
                    right_answers: [format!("answer{i}")].into_iter().collect(),
                    wrong_answers: vec![
                        "answer2".to_string(),
                        "answer3".to_string(),
                        "answer4".to_string(),
                    ],
                })
                .collect(),
        };

        let configuration = state
            .config_service()
            .create_configuration(request)
            .await
            .expect("configuration should be created");

        TestSetup {
            state,
            configuration,
        }
    }
}

impl TestSetup {
    pub fn question_id(&self, index: usize) -> uuid::Uuid {
        self.configuration.questions[index].id
    }
}
