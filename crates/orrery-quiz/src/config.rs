//! Configuration for a quiz session.

use std::time::Duration;

use crate::store::SUCCESS_COUNT_KEY;

/// Configuration for a quiz session.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// RNG seed for reproducible rounds.
    pub seed: u64,
    /// Comparison mode: pause after a correct pick before the next pair.
    pub comparison_advance: Duration,
    /// Comparison mode: pause after a wrong pick before the pair is shown again.
    pub comparison_retry: Duration,
    /// Identification mode: pause after a correct answer before the next body.
    pub identification_advance: Duration,
    /// Key the success counter is stored under.
    pub counter_key: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            comparison_advance: Duration::from_millis(1500),
            comparison_retry: Duration::from_millis(1200),
            identification_advance: Duration::from_millis(2500),
            counter_key: SUCCESS_COUNT_KEY.to_string(),
        }
    }
}

impl QuizConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set both comparison-mode delays.
    pub fn with_comparison_delays(mut self, advance: Duration, retry: Duration) -> Self {
        self.comparison_advance = advance;
        self.comparison_retry = retry;
        self
    }

    /// Set the identification-mode advance delay.
    pub fn with_identification_delay(mut self, advance: Duration) -> Self {
        self.identification_advance = advance;
        self
    }

    /// Store the success counter under a different key.
    pub fn with_counter_key(mut self, key: impl Into<String>) -> Self {
        self.counter_key = key.into();
        self
    }
}
