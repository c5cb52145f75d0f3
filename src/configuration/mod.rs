// Public API - what other modules can use
pub use models::{Configuration, Question, WrongAnswer};
pub use repository::{
    ConfigurationRepository, InMemoryConfigurationRepository, InMemoryQuestionRepository,
    QuestionRepository,
};
pub use service::ConfigService;
pub use types::{ConfigurationRequest, ConfigurationResponse, QuestionRequest};

// Internal modules
pub mod models;
pub mod repository;
mod service;
mod types;
