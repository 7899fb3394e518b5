//! crates/logging/src/policy.rs
//! Severity filtering consulted before any record is built.
//!
//! The thresholds are atomics so every filtering decision reads the live
//! value without locking, and a new [`LogConfig`] can be installed between
//! statements.

use std::sync::atomic::{AtomicI32, AtomicU32, Ordering};

use crate::config::LogConfig;
use crate::fatal::BuildMode;
use crate::severity::Severity;

const UNBOUNDED: u32 = u32::MAX;

static POLICY: SeverityPolicy = SeverityPolicy::new(LogConfig {
    min_severity: Severity::Info,
    max_verbosity: None,
});

/// Returns the process-wide policy consulted by the logging macros.
pub fn policy() -> &'static SeverityPolicy {
    &POLICY
}

/// Installs `config` into the process-wide policy.
pub fn init(config: LogConfig) {
    POLICY.apply(&config);
}

/// Decides which severities produce output.
#[derive(Debug)]
pub struct SeverityPolicy {
    min_level: AtomicI32,
    max_verbosity: AtomicU32,
}

impl SeverityPolicy {
    /// Creates a policy holding `config`'s thresholds.
    #[must_use]
    pub const fn new(config: LogConfig) -> Self {
        Self {
            min_level: AtomicI32::new(config.min_severity.level()),
            max_verbosity: AtomicU32::new(encode_verbosity(config.max_verbosity)),
        }
    }

    /// Reports whether a record at `severity` should be built.
    ///
    /// Fatal records are always enabled. Verbose severities defer to
    /// [`is_verbose_enabled`](Self::is_verbose_enabled).
    pub fn is_enabled(&self, severity: Severity) -> bool {
        match severity {
            Severity::Fatal => true,
            Severity::Verbose(level) => self.is_verbose_enabled(level),
            other => other.level() >= self.min_level.load(Ordering::Relaxed),
        }
    }

    /// Reports whether verbose output at `level` should be built.
    pub fn is_verbose_enabled(&self, level: u32) -> bool {
        level <= self.max_verbosity.load(Ordering::Relaxed)
    }

    /// Debug-build-only variant of [`is_enabled`](Self::is_enabled).
    pub fn dlog_is_on(&self, severity: Severity) -> bool {
        dcheck_is_on() && self.is_enabled(severity)
    }

    /// Debug-build-only variant of [`is_verbose_enabled`](Self::is_verbose_enabled).
    pub fn dvlog_is_on(&self, level: u32) -> bool {
        dcheck_is_on() && self.is_verbose_enabled(level)
    }

    /// Returns the current minimum severity.
    pub fn min_severity(&self) -> Severity {
        Severity::from_level(self.min_level.load(Ordering::Relaxed))
    }

    /// Returns the current maximum verbosity, `None` when unbounded.
    pub fn max_verbosity(&self) -> Option<u32> {
        decode_verbosity(self.max_verbosity.load(Ordering::Relaxed))
    }

    /// Replaces the minimum severity.
    pub fn set_min_severity(&self, severity: Severity) {
        self.min_level.store(severity.level(), Ordering::Relaxed);
    }

    /// Replaces the maximum verbosity.
    pub fn set_max_verbosity(&self, level: Option<u32>) {
        self.max_verbosity
            .store(encode_verbosity(level), Ordering::Relaxed);
    }

    /// Replaces both thresholds.
    pub fn apply(&self, config: &LogConfig) {
        self.set_min_severity(config.min_severity);
        self.set_max_verbosity(config.max_verbosity);
    }

    /// Returns a snapshot of the thresholds.
    pub fn config(&self) -> LogConfig {
        LogConfig {
            min_severity: self.min_severity(),
            max_verbosity: self.max_verbosity(),
        }
    }
}

impl Default for SeverityPolicy {
    fn default() -> Self {
        Self::new(LogConfig::default())
    }
}

/// Reports whether `d*` checks are compiled into this build.
#[must_use]
pub const fn dcheck_is_on() -> bool {
    BuildMode::current().is_debug()
}

const fn encode_verbosity(level: Option<u32>) -> u32 {
    match level {
        Some(level) => level,
        None => UNBOUNDED,
    }
}

const fn decode_verbosity(raw: u32) -> Option<u32> {
    if raw == UNBOUNDED { None } else { Some(raw) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_all_named_and_verbose_levels() {
        let policy = SeverityPolicy::default();
        for severity in Severity::NAMED {
            assert!(policy.is_enabled(severity), "{severity} enabled");
        }
        assert!(policy.is_verbose_enabled(1));
        assert!(policy.is_verbose_enabled(u32::MAX - 1));
    }

    #[test]
    fn threshold_suppresses_lower_severities() {
        let policy = SeverityPolicy::new(LogConfig::default().with_min_severity(Severity::Error));
        assert!(!policy.is_enabled(Severity::Info));
        assert!(!policy.is_enabled(Severity::Warning));
        assert!(policy.is_enabled(Severity::Error));
        assert!(policy.is_enabled(Severity::ErrorReport));
    }

    #[test]
    fn fatal_ignores_threshold() {
        let policy = SeverityPolicy::default();
        policy.set_min_severity(Severity::Fatal);
        assert!(policy.is_enabled(Severity::Fatal));
        assert!(!policy.is_enabled(Severity::ErrorReport));
    }

    #[test]
    fn verbose_levels_respect_max_verbosity() {
        let policy = SeverityPolicy::new(LogConfig::default().with_max_verbosity(Some(2)));
        assert!(policy.is_enabled(Severity::Verbose(1)));
        assert!(policy.is_enabled(Severity::Verbose(2)));
        assert!(!policy.is_enabled(Severity::Verbose(3)));
        assert!(!policy.is_verbose_enabled(3));
    }

    #[test]
    fn verbose_ignores_named_threshold() {
        let policy = SeverityPolicy::new(LogConfig::default().with_min_severity(Severity::Error));
        assert!(policy.is_enabled(Severity::Verbose(1)));
    }

    #[test]
    fn config_snapshot_round_trips() {
        let config = LogConfig::default()
            .with_min_severity(Severity::Warning)
            .with_max_verbosity(Some(0));
        let policy = SeverityPolicy::default();
        policy.apply(&config);
        assert_eq!(policy.config(), config);
        assert!(!policy.is_verbose_enabled(1));
    }

    #[test]
    fn debug_predicates_follow_build_mode() {
        let policy = SeverityPolicy::default();
        assert_eq!(policy.dlog_is_on(Severity::Info), cfg!(debug_assertions));
        assert_eq!(policy.dvlog_is_on(1), cfg!(debug_assertions));
        assert_eq!(dcheck_is_on(), cfg!(debug_assertions));
    }
}
