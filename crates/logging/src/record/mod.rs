//! crates/logging/src/record/mod.rs
//! Scoped diagnostic records.
//!
//! A [`LogRecord`] is opened at the call site, collects its body through
//! [`stream`](LogRecord::stream), and emits exactly one line when it is
//! dropped. Dropping happens on every exit from the enclosing scope,
//! including unwinding, so there is no separate "flush" step to forget.
//!
//! Ownership models the record lifecycle: an opened record can be streamed
//! into until it is moved into [`close`](LogRecord::close) or goes out of
//! scope, after which it no longer exists.

mod errno;
mod header;

pub use errno::ErrnoLogRecord;

use std::fmt::{self, Display, Write as _};

use crate::fatal;
use crate::location::SourceLocation;
use crate::severity::Severity;

use header::RecordHeader;

const INITIAL_CAPACITY: usize = 160;

/// One diagnostic line under construction.
///
/// # Examples
///
/// ```no_run
/// use logging::{LogRecord, Severity, SourceLocation};
///
/// LogRecord::open(SourceLocation::caller(), Severity::Warning)
///     .stream("retrying in ")
///     .stream(3)
///     .stream("s");
/// // The temporary record is dropped here and the line reaches stderr.
/// ```
#[must_use = "a record emits when dropped; bind it to stream more text"]
#[derive(Debug)]
pub struct LogRecord {
    severity: Severity,
    location: SourceLocation,
    buffer: String,
}

impl LogRecord {
    /// Opens a record and renders its prefix. No I/O happens until it closes.
    pub fn open(location: SourceLocation, severity: Severity) -> Self {
        let mut buffer = String::with_capacity(INITIAL_CAPACITY);
        RecordHeader::capture(location, severity).write_prefix(&mut buffer);
        Self {
            severity,
            location,
            buffer,
        }
    }

    /// Opens a fatal record for a failed comparison.
    ///
    /// `diagnostic` is consumed: its text is folded into the body
    /// (`"Check failed: <diagnostic>. "`) and the string is released.
    pub fn check_failed(location: SourceLocation, diagnostic: String) -> Self {
        let mut record = Self::open(location, Severity::Fatal);
        record.stream("Check failed: ").stream(diagnostic).stream(". ");
        record
    }

    /// Appends the [`Display`] rendering of `value` to the body.
    pub fn stream<T: Display>(&mut self, value: T) -> &mut Self {
        let _ = write!(self.buffer, "{value}");
        self
    }

    /// Appends pre-built format arguments to the body.
    pub fn stream_fmt(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        let _ = self.buffer.write_fmt(args);
        self
    }

    /// Returns the record's severity.
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns where the record was opened.
    pub const fn location(&self) -> SourceLocation {
        self.location
    }

    /// Returns the text rendered so far, prefix included.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Closes the record immediately instead of at the end of the scope.
    pub fn close(self) {
        drop(self);
    }

    /// Terminates the buffer and returns the complete line.
    fn finish(&mut self) -> &[u8] {
        self.buffer.push('\n');
        self.buffer.as_bytes()
    }

    /// Finalises the line without emitting it or running the fatal path.
    #[cfg(test)]
    pub(crate) fn into_line(self) -> String {
        let mut this = std::mem::ManuallyDrop::new(self);
        this.finish();
        std::mem::take(&mut this.buffer)
    }
}

impl fmt::Write for LogRecord {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl Drop for LogRecord {
    fn drop(&mut self) {
        let fatal = self.severity.is_fatal();
        // Best effort: a failed write is dropped, and never blocks termination.
        let _ = logging_sink::emit_to_stderr(self.finish());
        if fatal {
            fatal::terminate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;

    fn location() -> SourceLocation {
        SourceLocation::new("tests", "/src/app/worker.rs", 19)
    }

    #[test]
    fn open_renders_prefix_only() {
        let record = LogRecord::open(location(), Severity::Info);
        let text = record.as_str().to_string();
        assert!(text.starts_with('['));
        assert!(text.ends_with(":INFO] worker.rs:19] "));
        let _ = record.into_line();
    }

    #[test]
    fn stream_appends_in_order() {
        let mut record = LogRecord::open(location(), Severity::Warning);
        record.stream("disk ").stream(93).stream('%');
        let line = record.into_line();
        assert!(line.ends_with("] worker.rs:19] disk 93%\n"));
    }

    #[test]
    fn fmt_write_and_stream_fmt_share_the_buffer() {
        let mut record = LogRecord::open(location(), Severity::Error);
        write!(record, "{}-{}", 1, 2).expect("infallible");
        record.stream_fmt(format_args!(" [{:>3}]", 7));
        let line = record.into_line();
        assert!(line.ends_with("1-2 [  7]\n"));
    }

    #[test]
    fn line_is_single_and_newline_terminated() {
        let mut record = LogRecord::open(location(), Severity::ErrorReport);
        record.stream("payload");
        let line = record.into_line();
        assert_eq!(line.matches('\n').count(), 1);
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn check_failed_is_fatal_with_check_body() {
        let record = LogRecord::check_failed(location(), "a == b (3 vs. 4)".to_string());
        assert_eq!(record.severity(), Severity::Fatal);
        let line = record.into_line();
        assert!(line.ends_with(":FATAL] worker.rs:19] Check failed: a == b (3 vs. 4). \n"));
    }

    #[test]
    fn accessors_report_open_arguments() {
        let record = LogRecord::open(location(), Severity::Verbose(2));
        assert_eq!(record.severity(), Severity::Verbose(2));
        assert_eq!(record.location(), location());
        let _ = record.into_line();
    }
}
