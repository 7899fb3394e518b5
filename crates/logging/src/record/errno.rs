//! crates/logging/src/record/errno.rs
//! Records annotated with an OS error code.

use std::fmt::{self, Display};
use std::ops::{Deref, DerefMut};

use super::LogRecord;
use crate::location::SourceLocation;
use crate::severity::Severity;

/// A [`LogRecord`] that ends with `": <description> (<code>)"`.
///
/// The code is supplied at open time, so the annotation reflects the OS error
/// state at the call site even if streaming the body clobbers `errno`. The
/// `plog!` family reads the code before doing any other work.
///
/// # Examples
///
/// ```no_run
/// use logging::{ErrnoLogRecord, Severity, SourceLocation};
///
/// let code = logging::last_error_code();
/// ErrnoLogRecord::open(SourceLocation::caller(), Severity::Error, code)
///     .stream("open(\"/etc/app.conf\") failed");
/// ```
#[must_use = "a record emits when dropped; bind it to stream more text"]
#[derive(Debug)]
pub struct ErrnoLogRecord {
    record: LogRecord,
    error_code: i32,
}

impl ErrnoLogRecord {
    /// Opens a record that will be annotated with `error_code`.
    pub fn open(location: SourceLocation, severity: Severity, error_code: i32) -> Self {
        Self {
            record: LogRecord::open(location, severity),
            error_code,
        }
    }

    /// Returns the error code captured at open time.
    pub const fn error_code(&self) -> i32 {
        self.error_code
    }

    /// Appends the [`Display`] rendering of `value` to the body.
    pub fn stream<T: Display>(&mut self, value: T) -> &mut Self {
        self.record.stream(value);
        self
    }

    /// Appends pre-built format arguments to the body.
    pub fn stream_fmt(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        self.record.stream_fmt(args);
        self
    }

    /// Closes the record immediately instead of at the end of the scope.
    pub fn close(self) {
        drop(self);
    }

    fn append_error(&mut self) {
        let description = platform::safe_strerror(self.error_code);
        self.record
            .stream(": ")
            .stream(description)
            .stream(" (")
            .stream(self.error_code)
            .stream(")");
    }

    #[cfg(test)]
    fn into_line(self) -> String {
        let mut this = std::mem::ManuallyDrop::new(self);
        this.append_error();
        // The empty stand-in stays inside the ManuallyDrop and never emits.
        let record = std::mem::replace(
            &mut this.record,
            LogRecord {
                severity: Severity::Info,
                location: SourceLocation::new("", "", 0),
                buffer: String::new(),
            },
        );
        record.into_line()
    }
}

impl Deref for ErrnoLogRecord {
    type Target = LogRecord;

    fn deref(&self) -> &Self::Target {
        &self.record
    }
}

impl DerefMut for ErrnoLogRecord {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.record
    }
}

impl fmt::Write for ErrnoLogRecord {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.record.write_str(s)
    }
}

impl Drop for ErrnoLogRecord {
    fn drop(&mut self) {
        // The inner record is dropped after this returns and emits the line.
        self.append_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> SourceLocation {
        SourceLocation::new("tests", "net/socket.rs", 88)
    }

    #[test]
    fn annotation_follows_body() {
        let mut record = ErrnoLogRecord::open(location(), Severity::Error, 2);
        record.stream("open failed");
        let line = record.into_line();
        let expected_tail = format!(
            "] socket.rs:88] open failed: {} (2)\n",
            platform::safe_strerror(2)
        );
        assert!(line.ends_with(&expected_tail), "{line}");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn no_such_process_is_described() {
        const ESRCH: i32 = 3;
        let line = ErrnoLogRecord::open(location(), Severity::Warning, ESRCH).into_line();
        assert!(line.ends_with(": No such process (3)\n"), "{line}");
    }

    #[test]
    fn code_is_captured_at_open_time() {
        platform::set_last_error_code(0);
        let record = ErrnoLogRecord::open(location(), Severity::Info, 13);
        platform::set_last_error_code(2);
        assert_eq!(record.error_code(), 13);
        assert!(record.into_line().ends_with(" (13)\n"));
    }

    #[test]
    fn deref_exposes_inner_record() {
        let record = ErrnoLogRecord::open(location(), Severity::ErrorReport, 1);
        assert_eq!(record.severity(), Severity::ErrorReport);
        assert_eq!(record.location().file(), "socket.rs");
        let _ = record.into_line();
    }

    #[test]
    fn unknown_code_still_yields_text() {
        let line = ErrnoLogRecord::open(location(), Severity::Info, 999_999).into_line();
        assert!(line.ends_with(" (999999)\n"));
        assert!(!line.contains(":  ("));
    }
}
