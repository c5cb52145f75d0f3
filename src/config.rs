use tracing::warn;

/// Percentile boundaries used when `QUIZ_TIME_SPENT_PERCENTAGES` is not set
pub const DEFAULT_TIME_SPENT_PERCENTAGES: [u32; 5] = [0, 25, 50, 75, 100];

/// Number of entries returned by the problematic-question ranking
pub const MAX_PROBLEMATIC_QUESTIONS: usize = 5;

/// Static settings for the statistics engine
///
/// Values are read once from the environment. The percentile boundaries are
/// only checked when a distribution is requested, so a bad value surfaces as an
/// invalid-argument error on that call rather than at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsConfig {
    pub time_spent_percentages: Vec<u32>,
    pub max_problematic_questions: usize,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            time_spent_percentages: DEFAULT_TIME_SPENT_PERCENTAGES.to_vec(),
            max_problematic_questions: MAX_PROBLEMATIC_QUESTIONS,
        }
    }
}

impl StatisticsConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("QUIZ_TIME_SPENT_PERCENTAGES").ok(),
            std::env::var("QUIZ_MAX_PROBLEMATIC_QUESTIONS").ok(),
        )
    }

    /// Builds the config from raw variable values, falling back to defaults
    fn from_values(percentages: Option<String>, max_problematic: Option<String>) -> Self {
        let time_spent_percentages = percentages
            .map(|raw| {
                parse_percentages(&raw).unwrap_or_else(|| {
                    warn!(value = %raw, "Ignoring unparsable QUIZ_TIME_SPENT_PERCENTAGES");
                    DEFAULT_TIME_SPENT_PERCENTAGES.to_vec()
                })
            })
            .unwrap_or_else(|| DEFAULT_TIME_SPENT_PERCENTAGES.to_vec());

        let max_problematic_questions = max_problematic
            .and_then(|raw| {
                raw.trim().parse::<usize>().ok().or_else(|| {
                    warn!(value = %raw, "Ignoring unparsable QUIZ_MAX_PROBLEMATIC_QUESTIONS");
                    None
                })
            })
            .unwrap_or(MAX_PROBLEMATIC_QUESTIONS);

        Self {
            time_spent_percentages,
            max_problematic_questions,
        }
    }

    pub fn with_time_spent_percentages(mut self, percentages: Vec<u32>) -> Self {
        self.time_spent_percentages = percentages;
        self
    }

    pub fn with_max_problematic_questions(mut self, limit: usize) -> Self {
        self.max_problematic_questions = limit;
        self
    }
}

/// Parses a comma separated list such as `0,10,50,90,100`
fn parse_percentages(raw: &str) -> Option<Vec<u32>> {
    raw.split(',')
        .map(|part| part.trim().parse::<u32>().ok())
        .collect()
}
