pub mod distribution;
pub mod ranking;
pub mod service;

mod errors;
pub mod models;

pub use distribution::{distribute_time_spent, validate_percentages};
pub use errors::StatisticsError;
pub use models::*;
pub use ranking::rank_problematic_questions;
pub use service::StatisticsService;
