use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::shared::AppError;

/// Reward constants for finished games
pub mod reward {
    /// Reward for one of the first perfect scores
    pub const PERFECT_SCORE: u32 = 10;
    /// Reward for every perfect score after the bonus ones
    pub const REPEATED_PERFECT_SCORE: u32 = 5;
    /// How many perfect scores earn the full reward
    pub const PERFECT_SCORE_BONUS_LIMIT: u64 = 3;
}

/// Percentage of correctly answered questions, rounded down
pub fn compute_score(correct_answers: i64, question_count: i64) -> Result<u32, AppError> {
    if correct_answers < 0 || question_count < correct_answers {
        return Err(AppError::InvalidArgument(format!(
            "correctAnswers ({correct_answers}) or numberOfQuestions ({question_count}) \
             is not possible"
        )));
    }
    if question_count == 0 {
        return Err(AppError::InvalidArgument(
            "numberOfQuestions must be greater than zero".to_string(),
        ));
    }

    // widened so that 100 * correct_answers cannot overflow; the quotient is at most 100
    let score = 100 * i128::from(correct_answers) / i128::from(question_count);
    Ok(score as u32)
}

/// Process-wide count of perfect scores
///
/// Starts at zero and only grows. One shared instance lives in the
/// application state; tests build their own.
#[derive(Debug, Default)]
pub struct PerfectScoreCounter {
    count: AtomicU64,
}

impl PerfectScoreCounter {
    pub fn new() -> Self {
        Self {
            count: AtomicU64::new(0),
        }
    }

    /// Records one perfect score and returns how many came before it
    pub fn record(&self) -> u64 {
        self.count.fetch_add(1, Ordering::SeqCst)
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }

    /// Starts over from zero; production code never calls this
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

/// Turns scores into rewards
#[derive(Debug, Clone, Default)]
pub struct RewardCalculator {
    perfect_scores: Arc<PerfectScoreCounter>,
}

impl RewardCalculator {
    pub fn new(perfect_scores: Arc<PerfectScoreCounter>) -> Self {
        Self { perfect_scores }
    }

    pub fn perfect_scores(&self) -> &PerfectScoreCounter {
        &self.perfect_scores
    }

    /// Reward for a score
    ///
    /// A perfect score consumes one tick of the shared counter: the first
    /// three pay the full reward and every later one the reduced reward.
    pub fn compute_reward(&self, score: i64) -> Result<u32, AppError> {
        if score < 0 {
            return Err(AppError::InvalidArgument(
                "Result score cannot be less than zero".to_string(),
            ));
        }

        if score == 100 {
            let previous = self.perfect_scores.record();
            debug!(previous_perfect_scores = previous, "Perfect score recorded");
            return Ok(if previous < reward::PERFECT_SCORE_BONUS_LIMIT {
                reward::PERFECT_SCORE
            } else {
                reward::REPEATED_PERFECT_SCORE
            });
        }

        Ok((score / 10) as u32)
    }
}
