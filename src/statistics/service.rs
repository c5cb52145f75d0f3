use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{
    distribution::distribute_time_spent,
    models::{ProblematicQuestion, TimeSpentDistribution},
    ranking::rank_problematic_questions,
};
use crate::{
    config::StatisticsConfig,
    configuration::{ConfigurationRepository, QuestionRepository},
    game_result::GameResultRepository,
    shared::AppError,
};

/// Statistics facade: loads stored data and runs the analyses on it
pub struct StatisticsService {
    configurations: Arc<dyn ConfigurationRepository>,
    questions: Arc<dyn QuestionRepository>,
    results: Arc<dyn GameResultRepository>,
    config: StatisticsConfig,
}

impl StatisticsService {
    pub fn new(
        configurations: Arc<dyn ConfigurationRepository>,
        questions: Arc<dyn QuestionRepository>,
        results: Arc<dyn GameResultRepository>,
        config: StatisticsConfig,
    ) -> Self {
        Self {
            configurations,
            questions,
            results,
            config,
        }
    }

    /// Questions of a configuration with the highest share of wrong answers
    #[instrument(skip(self))]
    pub async fn get_problematic_questions(
        &self,
        configuration_id: Uuid,
    ) -> Result<Vec<ProblematicQuestion>, AppError> {
        let configuration = self
            .configurations
            .find_by_id(&configuration_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "There is no configuration with id {configuration_id}."
                ))
            })?;

        let questions = self
            .questions
            .find_by_ids(&configuration.question_ids)
            .await?;
        if questions.len() < configuration.question_count() {
            warn!(
                configured = configuration.question_count(),
                stored = questions.len(),
                "Configuration references missing questions"
            );
        }

        let game_results = self
            .results
            .find_by_configuration_id(&configuration_id)
            .await?;

        let ranked = rank_problematic_questions(
            &questions,
            &game_results,
            self.config.max_problematic_questions,
        );

        info!(
            game_results = game_results.len(),
            returned = ranked.len(),
            "Problematic questions ranked"
        );
        Ok(ranked)
    }

    /// Completion times of a configuration bucketed by percentile
    ///
    /// Does not check that the configuration exists; an unknown ID yields
    /// empty buckets.
    #[instrument(skip(self))]
    pub async fn get_time_spent_distributions(
        &self,
        configuration_id: Uuid,
    ) -> Result<Vec<TimeSpentDistribution>, AppError> {
        let game_results = self
            .results
            .find_by_configuration_id(&configuration_id)
            .await?;

        let distributions =
            distribute_time_spent(&game_results, &self.config.time_spent_percentages)
                .inspect_err(|err| warn!(error = %err, "Time spent percentages misconfigured"))?;

        info!(
            game_results = game_results.len(),
            buckets = distributions.len(),
            "Time spent distribution computed"
        );
        Ok(distributions)
    }
}
