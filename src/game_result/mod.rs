// Public API - what other modules can use
pub use models::{GameResult, RoundResult};
pub use repository::{GameResultRepository, InMemoryGameResultRepository};
pub use scoring::{compute_score, PerfectScoreCounter, RewardCalculator};
pub use service::GameResultService;
pub use types::{GameResultRequest, RoundResultRequest};

// Internal modules
pub mod models;
pub mod repository;
pub mod scoring;
mod service;
mod types;
