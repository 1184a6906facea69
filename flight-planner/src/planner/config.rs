//! Search configuration for the itinerary planner.

use chrono::Duration;

use super::SearchError;

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Shortest acceptable layover between legs (minutes, inclusive).
    pub min_layover_mins: i64,

    /// Longest acceptable layover between legs (minutes, inclusive).
    pub max_layover_mins: i64,
}

impl SearchConfig {
    /// Create a new configuration with the given layover window.
    pub fn new(min_layover_mins: i64, max_layover_mins: i64) -> Self {
        Self {
            min_layover_mins,
            max_layover_mins,
        }
    }

    /// Returns the minimum layover as a Duration.
    pub fn min_layover(&self) -> Duration {
        Duration::minutes(self.min_layover_mins)
    }

    /// Returns the maximum layover as a Duration.
    pub fn max_layover(&self) -> Duration {
        Duration::minutes(self.max_layover_mins)
    }

    /// Returns true if `layover` lies within the closed window.
    pub fn accepts_layover(&self, layover: Duration) -> bool {
        self.min_layover() <= layover && layover <= self.max_layover()
    }

    /// Check that the layover window is non-empty, non-negative and
    /// representable as a `Duration`.
    pub fn validate(&self) -> Result<(), SearchError> {
        for (name, mins) in [
            ("minimum", self.min_layover_mins),
            ("maximum", self.max_layover_mins),
        ] {
            if Duration::try_minutes(mins).is_none() {
                return Err(SearchError::InvalidConfig(format!(
                    "{name} layover of {mins} minutes is out of range"
                )));
            }
        }

        if self.min_layover_mins < 0 {
            return Err(SearchError::InvalidConfig(format!(
                "minimum layover must not be negative (got {} minutes)",
                self.min_layover_mins
            )));
        }

        if self.min_layover_mins > self.max_layover_mins {
            return Err(SearchError::InvalidConfig(format!(
                "minimum layover ({} minutes) exceeds maximum layover ({} minutes)",
                self.min_layover_mins, self.max_layover_mins
            )));
        }

        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_layover_mins: 60,  // 1 hour
            max_layover_mins: 360, // 6 hours
        }
    }
}
