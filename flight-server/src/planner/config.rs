//! Search configuration for the itinerary planner.

use chrono::Duration;

use super::SearchError;

/// Largest accepted `max_legs`. Search work grows steeply with path length.
pub const MAX_LEGS_LIMIT: usize = 6;

/// Largest accepted `max_results`.
pub const MAX_RESULTS_LIMIT: usize = 50;

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of legs in one itinerary.
    pub max_legs: usize,

    /// Minimum layover between legs (minutes).
    /// Tighter connections are rejected.
    pub min_connection_mins: i64,

    /// Maximum layover between legs (minutes).
    /// Longer connections are rejected.
    pub max_connection_mins: i64,

    /// Maximum number of itineraries the multi-result search returns.
    pub max_results: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_legs: usize,
        min_connection_mins: i64,
        max_connection_mins: i64,
        max_results: usize,
    ) -> Self {
        Self {
            max_legs,
            min_connection_mins,
            max_connection_mins,
            max_results,
        }
    }

    /// Returns the minimum connection time as a Duration.
    pub fn min_connection(&self) -> Duration {
        Duration::minutes(self.min_connection_mins)
    }

    /// Returns the maximum connection time as a Duration.
    pub fn max_connection(&self) -> Duration {
        Duration::minutes(self.max_connection_mins)
    }

    /// Returns true if a layover of `gap` is allowed. Both bounds are
    /// inclusive.
    pub fn allows_connection(&self, gap: Duration) -> bool {
        gap >= self.min_connection() && gap <= self.max_connection()
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_legs == 0 {
            return Err(SearchError::InvalidConfig(
                "max_legs must be at least 1".to_string(),
            ));
        }
        if self.max_legs > MAX_LEGS_LIMIT {
            return Err(SearchError::InvalidConfig(format!(
                "max_legs ({}) exceeds the limit of {MAX_LEGS_LIMIT}",
                self.max_legs
            )));
        }
        if self.max_results > MAX_RESULTS_LIMIT {
            return Err(SearchError::InvalidConfig(format!(
                "max_results ({}) exceeds the limit of {MAX_RESULTS_LIMIT}",
                self.max_results
            )));
        }
        if self.min_connection_mins < 0 || self.max_connection_mins < 0 {
            return Err(SearchError::InvalidConfig(
                "connection times must be non-negative".to_string(),
            ));
        }
        if self.min_connection_mins > self.max_connection_mins {
            return Err(SearchError::InvalidConfig(format!(
                "min_connection_mins ({}) exceeds max_connection_mins ({})",
                self.min_connection_mins, self.max_connection_mins
            )));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_legs: 3,
            min_connection_mins: 30,
            max_connection_mins: 480, // 8 hours
            max_results: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.max_legs, 3);
        assert_eq!(config.min_connection_mins, 30);
        assert_eq!(config.max_connection_mins, 480);
        assert_eq!(config.max_results, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn duration_methods() {
        let config = SearchConfig::default();

        assert_eq!(config.min_connection(), Duration::minutes(30));
        assert_eq!(config.max_connection(), Duration::minutes(480));
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(2, 45, 240, 3);

        assert_eq!(config.max_legs, 2);
        assert_eq!(config.min_connection_mins, 45);
        assert_eq!(config.max_connection_mins, 240);
        assert_eq!(config.max_results, 3);
    }

    #[test]
    fn connection_window_inclusive() {
        let config = SearchConfig::default();

        assert!(!config.allows_connection(Duration::minutes(29)));
        assert!(config.allows_connection(Duration::minutes(30)));
        assert!(config.allows_connection(Duration::minutes(480)));
        assert!(!config.allows_connection(Duration::minutes(480) + Duration::seconds(1)));
        assert!(!config.allows_connection(Duration::minutes(-10)));
    }

    #[test]
    fn invalid_configs() {
        assert!(SearchConfig::new(0, 30, 480, 6).validate().is_err());
        assert!(SearchConfig::new(3, -1, 480, 6).validate().is_err());
        assert!(SearchConfig::new(3, 500, 480, 6).validate().is_err());
        assert!(SearchConfig::new(1, 0, 0, 0).validate().is_ok());
    }

    #[test]
    fn oversized_configs_rejected() {
        assert!(SearchConfig::new(MAX_LEGS_LIMIT, 30, 480, MAX_RESULTS_LIMIT)
            .validate()
            .is_ok());
        assert!(matches!(
            SearchConfig::new(MAX_LEGS_LIMIT + 1, 30, 480, 6).validate(),
            Err(SearchError::InvalidConfig(_))
        ));
        assert!(matches!(
            SearchConfig::new(3, 30, 480, MAX_RESULTS_LIMIT + 1).validate(),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
