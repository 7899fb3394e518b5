//! crates/logging/src/severity.rs
//! Ordered severity levels and their textual names.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::fatal::BuildMode;

/// Severity of a diagnostic record.
///
/// Every severity maps to a signed level: `Verbose(n)` is `-n`, then
/// `Info` = 0 through `Fatal` = 4. Ordering follows that level, so
/// `Verbose(2) < Verbose(1) < Info < ... < Fatal`.
///
/// `Verbose(0)` is not a distinct level; [`Severity::verbose`] and
/// [`Severity::from_level`] normalise it to [`Severity::Info`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub enum Severity {
    /// Verbose output at the given verbosity (1 = least chatty).
    Verbose(u32),
    /// Informational message.
    #[default]
    Info,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
    /// Error that should additionally be reported upstream.
    ErrorReport,
    /// Unrecoverable error; the process terminates after the record is written.
    Fatal,
}

impl Severity {
    /// All non-verbose severities in ascending order.
    pub const NAMED: [Self; 5] = [
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::ErrorReport,
        Self::Fatal,
    ];

    /// Returns the severity for verbosity `level`, normalising 0 to [`Severity::Info`].
    #[must_use]
    pub const fn verbose(level: u32) -> Self {
        if level == 0 { Self::Info } else { Self::Verbose(level) }
    }

    /// Returns the severity for a signed level.
    ///
    /// Negative levels are verbose; levels above `Fatal` clamp to `Fatal`.
    #[must_use]
    pub const fn from_level(level: i32) -> Self {
        match level {
            i32::MIN..=-1 => Self::Verbose(level.unsigned_abs()),
            0 => Self::Info,
            1 => Self::Warning,
            2 => Self::Error,
            3 => Self::ErrorReport,
            _ => Self::Fatal,
        }
    }

    /// Returns the signed level used for threshold comparisons.
    #[must_use]
    pub const fn level(self) -> i32 {
        match self {
            Self::Verbose(n) => {
                if n > i32::MAX as u32 {
                    i32::MIN
                } else {
                    -(n as i32)
                }
            }
            Self::Info => 0,
            Self::Warning => 1,
            Self::Error => 2,
            Self::ErrorReport => 3,
            Self::Fatal => 4,
        }
    }

    /// `Fatal` in debug builds and `Error` in release builds.
    #[must_use]
    pub const fn dfatal() -> Self {
        BuildMode::current().dfatal_severity()
    }

    /// Returns the upper-case name of a non-verbose severity.
    ///
    /// Verbose severities have no static name; use the [`Display`](fmt::Display)
    /// implementation, which renders `VERBOSE<n>`.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Self::Verbose(_) => None,
            Self::Info => Some("INFO"),
            Self::Warning => Some("WARNING"),
            Self::Error => Some("ERROR"),
            Self::ErrorReport => Some("ERROR_REPORT"),
            Self::Fatal => Some("FATAL"),
        }
    }

    /// Reports whether the severity is one of the verbose levels.
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose(_))
    }

    /// Reports whether writing a record at this severity terminates the process.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Fatal)
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        // A stray `Verbose(0)` shares level 0 with `Info`; keep it just below.
        self.level()
            .cmp(&other.level())
            .then_with(|| other.is_verbose().cmp(&self.is_verbose()))
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verbose(n) => write!(f, "VERBOSE{n}"),
            named => f.write_str(named.name().unwrap_or_default()),
        }
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised log severity: {input:?}")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses a severity name (case-insensitive), `VERBOSE<n>`, or a signed level.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let error = || ParseSeverityError {
            input: input.to_string(),
        };
        let trimmed = input.trim();
        let upper = trimmed.to_ascii_uppercase();

        if let Some(named) = Self::NAMED.iter().find(|s| s.name() == Some(upper.as_str())) {
            return Ok(*named);
        }
        if let Some(digits) = upper.strip_prefix("VERBOSE") {
            return digits.parse::<u32>().map(Self::verbose).map_err(|_| error());
        }
        trimmed.parse::<i32>().map(Self::from_level).map_err(|_| error())
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.to_string()
    }
}

impl TryFrom<String> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: String) -> Result<Self, ParseSeverityError> {
        value.parse()
    }
}
