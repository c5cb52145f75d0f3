use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::models::{Configuration, Question};
use crate::shared::AppError;

/// Trait for configuration storage
#[async_trait]
pub trait ConfigurationRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Configuration>, AppError>;
    async fn find_all(&self) -> Result<Vec<Configuration>, AppError>;
    /// Inserts or replaces the configuration with the same ID
    async fn save(&self, configuration: &Configuration) -> Result<(), AppError>;
    /// Returns whether a configuration was removed
    async fn delete(&self, id: &Uuid) -> Result<bool, AppError>;
}

/// Trait for question storage
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Question>, AppError>;

    /// Returns the questions that exist, in the order of `ids`
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Question>, AppError>;

    /// Inserts or replaces the question with the same ID
    async fn save(&self, question: &Question) -> Result<(), AppError>;
    async fn delete(&self, id: &Uuid) -> Result<bool, AppError>;
}

/// In-memory implementation of ConfigurationRepository for development and testing
#[derive(Debug, Default)]
pub struct InMemoryConfigurationRepository {
    configurations: Arc<RwLock<HashMap<Uuid, Configuration>>>,
}

impl InMemoryConfigurationRepository {
    pub fn new() -> Self {
        Self {
            configurations: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ConfigurationRepository for InMemoryConfigurationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Configuration>, AppError> {
        let configurations = self.configurations.read().await;
        let configuration = configurations.get(id).cloned();

        match &configuration {
            Some(c) => debug!(
                configuration_id = %id,
                questions = c.question_count(),
                "Configuration found in memory"
            ),
            None => debug!(configuration_id = %id, "Configuration not found in memory"),
        }

        Ok(configuration)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Configuration>, AppError> {
        let configurations = self.configurations.read().await;
        Ok(configurations.values().cloned().collect())
    }

    #[instrument(skip(self, configuration), fields(configuration_id = %configuration.id))]
    async fn save(&self, configuration: &Configuration) -> Result<(), AppError> {
        let mut configurations = self.configurations.write().await;
        configurations.insert(configuration.id, configuration.clone());
        debug!("Configuration saved in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &Uuid) -> Result<bool, AppError> {
        let mut configurations = self.configurations.write().await;
        Ok(configurations.remove(id).is_some())
    }
}

/// In-memory implementation of QuestionRepository for development and testing
#[derive(Debug, Default)]
pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<HashMap<Uuid, Question>>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Question>, AppError> {
        let questions = self.questions.read().await;
        Ok(questions.get(id).cloned())
    }

    #[instrument(skip(self, ids), fields(requested = ids.len()))]
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Question>, AppError> {
        let questions = self.questions.read().await;
        let found: Vec<Question> = ids.iter().filter_map(|id| questions.get(id).cloned()).collect();

        if found.len() < ids.len() {
            debug!(found = found.len(), "Some questions are missing from memory");
        }

        Ok(found)
    }

    #[instrument(skip(self, question), fields(question_id = %question.id))]
    async fn save(&self, question: &Question) -> Result<(), AppError> {
        let mut questions = self.questions.write().await;
        questions.insert(question.id, question.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &Uuid) -> Result<bool, AppError> {
        let mut questions = self.questions.write().await;
        Ok(questions.remove(id).is_some())
    }
}
