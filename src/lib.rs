// Library crate for the quiz statistics backend
// The HTTP layer lives outside this crate and consumes the services below

pub mod config;
pub mod configuration;
pub mod game_result;
pub mod shared;
pub mod statistics;
pub mod telemetry;

// Re-export commonly used types for easier access in tests
pub use config::StatisticsConfig;
pub use configuration::{ConfigService, Configuration, Question};
pub use game_result::{GameResult, GameResultService, RewardCalculator, RoundResult};
pub use shared::{AppError, AppState};
pub use statistics::{ProblematicQuestion, StatisticsService, TimeSpentDistribution};
