//! crates/logging/src/tracing_bridge.rs
//! Bridge from the `tracing` macros into diagnostic records.
//!
//! [`RecordLayer`] is a `tracing-subscriber` layer that turns each event into
//! one [`LogRecord`] written through the same policy and stderr sink as the
//! `log!` family. Levels map as follows:
//!
//! | tracing | severity   |
//! |---------|------------|
//! | `TRACE` | `VERBOSE2` |
//! | `DEBUG` | `VERBOSE1` |
//! | `INFO`  | `INFO`     |
//! | `WARN`  | `WARNING`  |
//! | `ERROR` | `ERROR`    |
//!
//! Events never map to `FATAL`, so a tracing event cannot terminate the process.
//!
//! ```no_run
//! use logging::{LogConfig, Severity, init_tracing};
//!
//! init_tracing(LogConfig::default().with_min_severity(Severity::Warning));
//! tracing::warn!(peer = "10.0.0.7", "handshake timed out");
//! ```

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::config::LogConfig;
use crate::location::SourceLocation;
use crate::policy::{SeverityPolicy, policy};
use crate::record::LogRecord;
use crate::severity::Severity;

/// A tracing layer that writes events as diagnostic records.
#[derive(Clone, Copy, Debug)]
pub struct RecordLayer {
    policy: &'static SeverityPolicy,
}

impl RecordLayer {
    /// Creates a layer filtering through the process-wide policy.
    #[must_use]
    pub fn new() -> Self {
        Self { policy: policy() }
    }

    /// Maps a tracing level to the severity its records carry.
    #[must_use]
    pub const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::TRACE => Severity::Verbose(2),
            Level::DEBUG => Severity::Verbose(1),
            Level::INFO => Severity::Info,
            Level::WARN => Severity::Warning,
            Level::ERROR => Severity::Error,
        }
    }

    fn location(event: &Event<'_>) -> SourceLocation {
        let metadata = event.metadata();
        SourceLocation::new(
            metadata.module_path().unwrap_or_else(|| metadata.target()),
            metadata.file().unwrap_or("<unknown>"),
            metadata.line().unwrap_or(0),
        )
    }
}

impl Default for RecordLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for RecordLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let severity = Self::severity_for(event.metadata().level());
        if !self.policy.is_enabled(severity) {
            return;
        }

        let mut visitor = BodyVisitor::default();
        event.record(&mut visitor);
        LogRecord::open(Self::location(event), severity).stream(visitor.finish());
    }
}

/// Collects the `message` field first and any other fields as `name=value`.
#[derive(Default)]
struct BodyVisitor {
    message: String,
    fields: String,
}

impl BodyVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", field.name(), value);
    }
}

impl Visit for BodyVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }
}

/// Installs `config` and a global subscriber built around [`RecordLayer`].
///
/// Does nothing further if a global subscriber is already set.
pub fn init_tracing(config: LogConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    crate::policy::init(config);
    let _ = tracing_subscriber::registry()
        .with(RecordLayer::new())
        .try_init();
}
