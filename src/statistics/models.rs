use serde::{Deserialize, Serialize};

use crate::configuration::Question;

/// Answer tally for one question across every game of a configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblematicQuestion {
    pub attempts: u64,
    pub wrong_answers: u64,
    pub correct_answers: u64,
    pub question: Question,
}

impl ProblematicQuestion {
    pub fn new(question: Question) -> Self {
        Self {
            attempts: 0,
            wrong_answers: 0,
            correct_answers: 0,
            question,
        }
    }

    pub fn add_wrong_answer(&mut self) {
        self.wrong_answers += 1;
        self.attempts += 1;
    }

    pub fn add_correct_answer(&mut self) {
        self.correct_answers += 1;
        self.attempts += 1;
    }
}

/// How many games finished within one percentile range of completion times
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpentDistribution {
    pub from_percentage: u32,
    pub to_percentage: u32,
    pub from_time: u64,
    pub to_time: u64,
    pub count: u32,
}

impl TimeSpentDistribution {
    pub fn new(from_percentage: u32, to_percentage: u32) -> Self {
        Self {
            from_percentage,
            to_percentage,
            ..Self::default()
        }
    }

    /// Adds a game; `from_time` is filled while it still holds the zero sentinel
    pub fn add(&mut self, time_spent: u64) {
        if self.from_time == 0 {
            self.from_time = time_spent;
        }
        self.to_time = time_spent;
        self.count += 1;
    }
}
