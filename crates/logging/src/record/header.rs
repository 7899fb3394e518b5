//! crates/logging/src/record/header.rs
//! The fixed line prefix written when a record is opened.
//!
//! ```text
//! [<pid>:<tid>:<YYYYMMDD>,<HHMMSS>.<micros>:<SEVERITY>] <file>:<line>]
//! ```

use std::fmt::Write as _;

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::location::SourceLocation;
use crate::severity::Severity;

const FALLBACK_TIMESTAMP: &str = "00000000,000000.000000";

/// Identity, clock reading and call site captured at open time.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RecordHeader {
    pub(crate) pid: u32,
    pub(crate) thread: u64,
    pub(crate) timestamp: OffsetDateTime,
    pub(crate) severity: Severity,
    pub(crate) location: SourceLocation,
}

impl RecordHeader {
    pub(crate) fn capture(location: SourceLocation, severity: Severity) -> Self {
        Self {
            pid: platform::process_id(),
            thread: platform::thread_id(),
            timestamp: now_local(),
            severity,
            location,
        }
    }

    pub(crate) fn write_prefix(&self, out: &mut String) {
        let timestamp = self
            .timestamp
            .format(format_description!(
                "[year][month padding:zero][day padding:zero],[hour padding:zero][minute padding:zero][second padding:zero].[subsecond digits:6]"
            ))
            .unwrap_or_else(|_| FALLBACK_TIMESTAMP.to_string());

        let _ = write!(
            out,
            "[{}:{}:{}:{}] {}:{}] ",
            self.pid,
            self.thread,
            timestamp,
            self.severity,
            self.location.file(),
            self.location.line()
        );
    }
}

/// Current wall-clock time in the local zone, or UTC when the offset is unknown.
pub(crate) fn now_local() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    let offset = platform::local_utc_offset_seconds(now.unix_timestamp());
    UtcOffset::from_whole_seconds(offset).map_or(now, |offset| now.to_offset(offset))
}
