//! crates/logging/src/config.rs
//! Threshold configuration installed into the process-wide policy.

use crate::severity::{ParseSeverityError, Severity};

/// Environment variable holding the minimum non-verbose severity.
pub const MIN_SEVERITY_ENV: &str = "DIAGLOG_MIN_SEVERITY";

/// Environment variable holding the maximum enabled verbosity.
pub const MAX_VERBOSITY_ENV: &str = "DIAGLOG_MAX_VERBOSITY";

/// Filtering thresholds for diagnostic records.
///
/// The default enables every non-verbose severity and every verbose level.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    /// Records below this severity are suppressed. `Fatal` is never suppressed.
    pub min_severity: Severity,
    /// Highest enabled verbose level; `None` leaves verbosity unbounded.
    pub max_verbosity: Option<u32>,
}

/// Error returned when a configuration value cannot be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The minimum severity was not a severity name or level.
    #[error("invalid {variable}")]
    InvalidSeverity {
        /// Name of the offending setting.
        variable: &'static str,
        /// Underlying parse failure.
        source: ParseSeverityError,
    },
    /// The maximum verbosity was not a non-negative integer or `all`.
    #[error("invalid {variable}: {value:?} is not a verbosity level")]
    InvalidVerbosity {
        /// Name of the offending setting.
        variable: &'static str,
        /// Rejected value.
        value: String,
    },
}

impl LogConfig {
    /// Returns a copy with a different minimum severity.
    #[must_use]
    pub const fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Returns a copy with a different maximum verbosity.
    #[must_use]
    pub const fn with_max_verbosity(mut self, level: Option<u32>) -> Self {
        self.max_verbosity = level;
        self
    }

    /// Reads [`MIN_SEVERITY_ENV`] and [`MAX_VERBOSITY_ENV`].
    ///
    /// Unset or empty variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = non_empty(lookup(MIN_SEVERITY_ENV)) {
            config.min_severity =
                value
                    .parse()
                    .map_err(|source| ConfigError::InvalidSeverity {
                        variable: MIN_SEVERITY_ENV,
                        source,
                    })?;
        }

        if let Some(value) = non_empty(lookup(MAX_VERBOSITY_ENV)) {
            config.max_verbosity = parse_verbosity(&value).ok_or(ConfigError::InvalidVerbosity {
                variable: MAX_VERBOSITY_ENV,
                value,
            })?;
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Parses `"all"` into `Some(None)` and a decimal level into `Some(Some(n))`.
fn parse_verbosity(value: &str) -> Option<Option<u32>> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("all") {
        return Some(None);
    }
    trimmed.parse::<u32>().ok().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn default_enables_everything() {
        let config = LogConfig::default();
        assert_eq!(config.min_severity, Severity::Info);
        assert_eq!(config.max_verbosity, None);
    }

    #[test]
    fn builders_replace_fields() {
        let config = LogConfig::default()
            .with_min_severity(Severity::Error)
            .with_max_verbosity(Some(2));
        assert_eq!(config.min_severity, Severity::Error);
        assert_eq!(config.max_verbosity, Some(2));
    }

    #[test]
    fn lookup_reads_both_variables() {
        let config = LogConfig::from_lookup(lookup(&[
            (MIN_SEVERITY_ENV, "warning"),
            (MAX_VERBOSITY_ENV, "3"),
        ]))
        .expect("valid config");
        assert_eq!(config.min_severity, Severity::Warning);
        assert_eq!(config.max_verbosity, Some(3));
    }

    #[test]
    fn missing_and_empty_values_keep_defaults() {
        let config = LogConfig::from_lookup(lookup(&[(MIN_SEVERITY_ENV, "  ")]))
            .expect("valid config");
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn all_means_unbounded() {
        let config = LogConfig::from_lookup(lookup(&[(MAX_VERBOSITY_ENV, "ALL")]))
            .expect("valid config");
        assert_eq!(config.max_verbosity, None);
    }

    #[test]
    fn bad_severity_reports_variable_and_source() {
        let error = LogConfig::from_lookup(lookup(&[(MIN_SEVERITY_ENV, "shouty")]))
            .expect_err("invalid severity");
        assert!(error.to_string().contains(MIN_SEVERITY_ENV));
        let source = std::error::Error::source(&error).expect("parse error is the source");
        assert!(source.to_string().contains("shouty"));
    }

    #[test]
    fn bad_verbosity_is_rejected() {
        let error = LogConfig::from_lookup(lookup(&[(MAX_VERBOSITY_ENV, "-2")]))
            .expect_err("invalid verbosity");
        match error {
            ConfigError::InvalidVerbosity { variable, value } => {
                assert_eq!(variable, MAX_VERBOSITY_ENV);
                assert_eq!(value, "-2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_uses_severity_names() {
        let config = LogConfig::default()
            .with_min_severity(Severity::Verbose(2))
            .with_max_verbosity(Some(5));
        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains("\"VERBOSE2\""));
        let back: LogConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
