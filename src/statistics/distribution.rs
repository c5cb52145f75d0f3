use super::{errors::StatisticsError, models::TimeSpentDistribution};
use crate::game_result::GameResult;

/// Checks that boundaries run strictly upwards from 0 to 100
pub fn validate_percentages(percentages: &[u32]) -> Result<(), StatisticsError> {
    if percentages.len() < 2 {
        return Err(StatisticsError::InvalidBoundaries(format!(
            "expected at least two boundaries, got {}",
            percentages.len()
        )));
    }
    if percentages.first() != Some(&0) || percentages.last() != Some(&100) {
        return Err(StatisticsError::InvalidBoundaries(format!(
            "boundaries must start at 0 and end at 100, got {percentages:?}"
        )));
    }
    if percentages.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(StatisticsError::InvalidBoundaries(format!(
            "boundaries must be strictly increasing, got {percentages:?}"
        )));
    }
    Ok(())
}

/// Buckets game results by completion time percentile
///
/// Results are sorted by time and consumed front to back by one cursor. A
/// bucket ending at `p` percent takes results while the cursor is below `p`
/// percent of the total, so the counts always add up to the number of results.
/// A bucket's `from_time` stays at 0 until a result with a non-zero time joins.
pub fn distribute_time_spent(
    game_results: &[GameResult],
    percentages: &[u32],
) -> Result<Vec<TimeSpentDistribution>, StatisticsError> {
    validate_percentages(percentages)?;

    let mut times: Vec<u64> = game_results.iter().map(|r| r.time_spent).collect();
    times.sort();

    let total = times.len() as u64;
    let mut cursor = 0usize;

    let distributions = percentages
        .windows(2)
        .map(|pair| {
            let mut bucket = TimeSpentDistribution::new(pair[0], pair[1]);
            // cursor < to/100 * total, kept in integers
            let upper = u64::from(bucket.to_percentage) * total;
            while cursor < times.len() && (cursor as u64) * 100 < upper {
                bucket.add(times[cursor]);
                cursor += 1;
            }
            bucket
        })
        .collect();

    Ok(distributions)
}
