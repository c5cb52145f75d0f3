use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::models::GameResult;
use crate::shared::AppError;

#[async_trait]
pub trait GameResultRepository: Send + Sync {
    async fn save(&self, game_result: &GameResult) -> Result<(), AppError>;

    /// All results of a configuration, oldest first
    async fn find_by_configuration_id(
        &self,
        configuration_id: &Uuid,
    ) -> Result<Vec<GameResult>, AppError>;
}

/// In-memory implementation of GameResultRepository for development and testing
#[derive(Debug, Default)]
pub struct InMemoryGameResultRepository {
    results: Arc<RwLock<Vec<GameResult>>>,
}

impl InMemoryGameResultRepository {
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl GameResultRepository for InMemoryGameResultRepository {
    #[instrument(skip(self, game_result), fields(game_result_id = %game_result.id))]
    async fn save(&self, game_result: &GameResult) -> Result<(), AppError> {
        let mut results = self.results.write().await;
        match results.iter_mut().find(|r| r.id == game_result.id) {
            Some(existing) => *existing = game_result.clone(),
            None => results.push(game_result.clone()),
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_configuration_id(
        &self,
        configuration_id: &Uuid,
    ) -> Result<Vec<GameResult>, AppError> {
        let results = self.results.read().await;
        let matching: Vec<GameResult> = results
            .iter()
            .filter(|r| &r.configuration_id == configuration_id)
            .cloned()
            .collect();

        debug!(count = matching.len(), "Game results loaded from memory");
        Ok(matching)
    }
}
