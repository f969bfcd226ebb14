//! Search configuration

use serde::{Deserialize, Serialize};

/// Positions scanned behind the current position when searching backward
pub const SEARCH_LOOKBACK: usize = 50;
/// Positions scanned past the displayed window when searching forward
pub const SEARCH_LOOKAHEAD: usize = 25;
/// Samples drawn by a randomized directional search
pub const RANDOM_SEARCH_ITERATIONS: usize = 1000;
/// Attempts to fill a pattern before giving up on it
pub const MAX_GENERATION_ATTEMPTS: usize = 100;

/// Tuning constants for the navigation engine. Fixed for the lifetime of an
/// engine once it is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Lookback window size for backward local search
    pub lookback: usize,

    /// Lookahead window size for forward local search
    pub lookahead: usize,

    /// Iteration budget of the randomized search
    pub random_iterations: usize,

    /// Retry bound of the constrained random generator
    pub max_generation_attempts: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lookback: SEARCH_LOOKBACK,
            lookahead: SEARCH_LOOKAHEAD,
            random_iterations: RANDOM_SEARCH_ITERATIONS,
            max_generation_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{ "lookahead": 10 }"#).unwrap();
        assert_eq!(config.lookahead, 10);
        assert_eq!(config.lookback, SEARCH_LOOKBACK);
        assert_eq!(config.random_iterations, RANDOM_SEARCH_ITERATIONS);
        assert_eq!(config.max_generation_attempts, MAX_GENERATION_ATTEMPTS);
    }
}
