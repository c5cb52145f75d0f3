use std::sync::Arc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::{
    models::{Configuration, Question},
    repository::{ConfigurationRepository, QuestionRepository},
    types::{ConfigurationRequest, ConfigurationResponse, QuestionRequest},
};
use crate::shared::AppError;

/// Service for configuration and question management
pub struct ConfigService {
    configurations: Arc<dyn ConfigurationRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl ConfigService {
    pub fn new(
        configurations: Arc<dyn ConfigurationRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            configurations,
            questions,
        }
    }

    /// Loads a configuration or fails with NotFound
    #[instrument(skip(self))]
    pub async fn get_configuration(&self, id: Uuid) -> Result<Configuration, AppError> {
        self.configurations
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("There is no configuration with id {id}.")))
    }

    /// Gets a configuration with its questions resolved
    #[instrument(skip(self))]
    pub async fn get_configuration_details(
        &self,
        id: Uuid,
    ) -> Result<ConfigurationResponse, AppError> {
        let configuration = self.get_configuration(id).await?;
        self.to_response(configuration).await
    }

    #[instrument(skip(self))]
    pub async fn list_configurations(&self) -> Result<Vec<ConfigurationResponse>, AppError> {
        let configurations = self.configurations.find_all().await?;
        debug!(count = configurations.len(), "Configurations loaded");

        let mut responses = Vec::with_capacity(configurations.len());
        for configuration in configurations {
            responses.push(self.to_response(configuration).await?);
        }
        Ok(responses)
    }

    /// Stores every question of the request and a configuration referencing them
    #[instrument(skip(self, request), fields(questions = request.questions.len()))]
    pub async fn create_configuration(
        &self,
        request: ConfigurationRequest,
    ) -> Result<ConfigurationResponse, AppError> {
        let questions = self.store_questions(request.questions).await?;
        let configuration = Configuration::new(questions.iter().map(|q| q.id));
        self.configurations.save(&configuration).await?;

        info!(configuration_id = %configuration.id, "Configuration created");
        Ok(ConfigurationResponse::new(configuration, questions))
    }

    /// Replaces the question set of a configuration
    ///
    /// Questions dropped from the set stay in the question store so that old
    /// game results can still point at them.
    #[instrument(skip(self, request), fields(questions = request.questions.len()))]
    pub async fn update_configuration(
        &self,
        id: Uuid,
        request: ConfigurationRequest,
    ) -> Result<ConfigurationResponse, AppError> {
        let mut configuration = self.get_configuration(id).await?;
        let questions = self.store_questions(request.questions).await?;

        configuration.question_ids.clear();
        for question in &questions {
            configuration.add_question(question.id);
        }
        self.configurations.save(&configuration).await?;

        info!(configuration_id = %id, "Configuration updated");
        Ok(ConfigurationResponse::new(configuration, questions))
    }

    #[instrument(skip(self))]
    pub async fn delete_configuration(&self, id: Uuid) -> Result<ConfigurationResponse, AppError> {
        let configuration = self.get_configuration(id).await?;
        let response = self.to_response(configuration).await?;
        self.configurations.delete(&id).await?;

        info!(configuration_id = %id, "Configuration deleted");
        Ok(response)
    }

    #[instrument(skip(self))]
    pub async fn get_questions(&self, id: Uuid) -> Result<Vec<Question>, AppError> {
        let configuration = self.get_configuration(id).await?;
        self.questions.find_by_ids(&configuration.question_ids).await
    }

    #[instrument(skip(self, request))]
    pub async fn add_question(
        &self,
        id: Uuid,
        request: QuestionRequest,
    ) -> Result<Question, AppError> {
        request.validate()?;
        let mut configuration = self.get_configuration(id).await?;

        let question = request.into_question();
        self.questions.save(&question).await?;
        configuration.add_question(question.id);
        self.configurations.save(&configuration).await?;

        info!(configuration_id = %id, question_id = %question.id, "Question added");
        Ok(question)
    }

    #[instrument(skip(self))]
    pub async fn remove_question(&self, id: Uuid, question_id: Uuid) -> Result<Question, AppError> {
        let mut configuration = self.get_configuration(id).await?;
        let question = self.question_in_configuration(&configuration, question_id).await?;

        configuration.remove_question(&question_id);
        self.configurations.save(&configuration).await?;
        self.questions.delete(&question_id).await?;

        info!(configuration_id = %id, question_id = %question_id, "Question removed");
        Ok(question)
    }

    /// Replaces the content of a question, keeping its ID
    #[instrument(skip(self, request))]
    pub async fn update_question(
        &self,
        id: Uuid,
        question_id: Uuid,
        request: QuestionRequest,
    ) -> Result<Question, AppError> {
        request.validate()?;
        let configuration = self.get_configuration(id).await?;
        self.question_in_configuration(&configuration, question_id)
            .await?;

        let mut question = request.into_question();
        question.id = question_id;
        self.questions.save(&question).await?;

        info!(configuration_id = %id, question_id = %question_id, "Question updated");
        Ok(question)
    }

    /// Copies a configuration and its questions under fresh IDs
    #[instrument(skip(self))]
    pub async fn clone_configuration(&self, id: Uuid) -> Result<Uuid, AppError> {
        let configuration = self.get_configuration(id).await?;
        let questions = self.questions.find_by_ids(&configuration.question_ids).await?;

        let copies: Vec<Question> = questions.iter().map(Question::duplicate).collect();
        for question in &copies {
            self.questions.save(question).await?;
        }

        let clone = Configuration::new(copies.iter().map(|q| q.id));
        self.configurations.save(&clone).await?;

        info!(configuration_id = %id, clone_id = %clone.id, "Configuration cloned");
        Ok(clone.id)
    }

    /// Validates every request before anything is written
    async fn store_questions(
        &self,
        requests: Vec<QuestionRequest>,
    ) -> Result<Vec<Question>, AppError> {
        for request in &requests {
            request.validate()?;
        }

        let questions: Vec<Question> = requests
            .into_iter()
            .map(QuestionRequest::into_question)
            .collect();
        for question in &questions {
            self.questions.save(question).await?;
        }
        Ok(questions)
    }

    async fn question_in_configuration(
        &self,
        configuration: &Configuration,
        question_id: Uuid,
    ) -> Result<Question, AppError> {
        let not_found = || {
            AppError::NotFound(format!(
                "Question with ID {question_id} does not exist in configuration {}.",
                configuration.id
            ))
        };

        if !configuration.has_question(&question_id) {
            return Err(not_found());
        }
        self.questions
            .find_by_id(&question_id)
            .await?
            .ok_or_else(not_found)
    }

    async fn to_response(
        &self,
        configuration: Configuration,
    ) -> Result<ConfigurationResponse, AppError> {
        let questions = self.questions.find_by_ids(&configuration.question_ids).await?;
        Ok(ConfigurationResponse::new(configuration, questions))
    }
}
