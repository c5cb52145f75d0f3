use thiserror::Error;

use crate::shared::AppError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatisticsError {
    #[error("Invalid time spent percentages: {0}")]
    InvalidBoundaries(String),
}

impl From<StatisticsError> for AppError {
    fn from(err: StatisticsError) -> Self {
        AppError::InvalidArgument(err.to_string())
    }
}
