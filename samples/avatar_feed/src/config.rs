//! Feed configuration loaded from environment variables.

use std::env;

use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// How the simulated feed behaves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedConfig {
    /// Number of users in the feed.
    pub feed_size: u64,
    /// Every n-th avatar fetch fails. Zero disables failures.
    pub fail_every: u64,
    /// Number of progress events sent before a fetch completes.
    pub progress_steps: u16,
    /// Delay between two progress events, in milliseconds.
    pub step_delay_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            feed_size: 8,
            fail_every: 3,
            progress_steps: 4,
            step_delay_ms: 20,
        }
    }
}

impl FeedConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FEED_SIZE`: users in the feed (optional, default: 8)
    /// - `FEED_FAIL_EVERY`: fail every n-th fetch (optional, default: 3)
    /// - `FEED_PROGRESS_STEPS`: progress events per fetch (optional, default: 4)
    /// - `FEED_STEP_DELAY_MS`: delay between progress events (optional, default: 20)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a value is present but does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            feed_size: parse_or(&lookup, "FEED_SIZE", defaults.feed_size)?,
            fail_every: parse_or(&lookup, "FEED_FAIL_EVERY", defaults.fail_every)?,
            progress_steps: parse_or(&lookup, "FEED_PROGRESS_STEPS", defaults.progress_steps)?,
            step_delay_ms: parse_or(&lookup, "FEED_STEP_DELAY_MS", defaults.step_delay_ms)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|error: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_defaults_when_unset() {
        let config = FeedConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, FeedConfig::default());
    }

    #[rstest]
    fn test_reads_overrides() {
        let config = FeedConfig::from_lookup(|key| match key {
            "FEED_SIZE" => Some("20".to_string()),
            "FEED_FAIL_EVERY" => Some(" 0 ".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.feed_size, 20);
        assert_eq!(config.fail_every, 0);
        assert_eq!(config.progress_steps, 4);
    }

    #[rstest]
    fn test_rejects_invalid_number() {
        let error = FeedConfig::from_lookup(|key| (key == "FEED_SIZE").then(|| "many".to_string()))
            .unwrap_err();

        assert!(matches!(error, ConfigError::InvalidValue { ref key, .. } if key == "FEED_SIZE"));
    }
}
