#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a severity-filtered diagnostic facility. Each statement
//! produces exactly one line on standard error:
//!
//! ```text
//! [<pid>:<tid>:<YYYYMMDD>,<HHMMSS>.<micros>:<SEVERITY>] <file>:<line>] <body>
//! ```
//!
//! Statements at [`Severity::Fatal`] terminate the process after their line is
//! written. The `check*!` macros build on that to assert invariants, and the
//! `plog!` family appends the description of the current OS error.
//!
//! # Design
//!
//! - [`LogRecord`] collects the body and emits in `Drop`, so a record is
//!   written once on every path out of its scope. [`ErrnoLogRecord`] wraps
//!   it and appends `": <strerror> (<code>)"` before the inner record closes.
//! - [`policy()`] holds the thresholds in atomics. Macros consult it before
//!   opening a record; a suppressed statement evaluates none of its arguments.
//! - The comparison helpers in [`check_op`] return `None` on success and only
//!   allocate the `"<names> (<lhs> vs. <rhs>)"` text on failure.
//! - Output goes through `logging_sink`, which writes each completed line with
//!   a single call under the stderr lock.
//!
//! # Invariants
//!
//! - A record writes nothing before it closes and exactly one line when it does.
//! - A fatal record's line is complete on stderr before termination begins.
//! - The `d*` macros evaluate nothing in release builds.
//!
//! # Examples
//!
//! ```
//! use logging::{LogConfig, Severity, check_eq, log, vlog};
//!
//! logging::init(LogConfig::default().with_max_verbosity(Some(1)));
//!
//! let queued = 4;
//! log!(Info, "{queued} jobs queued");
//! vlog!(1, "scheduler tick");
//! vlog!(2, "suppressed: verbosity capped at 1");
//! check_eq!(queued, 4);
//! # let _ = Severity::Info;
//! ```
//!
//! # See also
//!
//! - [`LogConfig::from_env`] for reading thresholds from the environment.

pub mod check_op;
mod config;
mod fatal;
pub mod location;
mod macros;
mod policy;
mod record;
mod severity;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{ConfigError, LogConfig, MAX_VERBOSITY_ENV, MIN_SEVERITY_ENV};
pub use fatal::{BuildMode, FatalAction, terminate};
pub use location::SourceLocation;
pub use platform::{last_error_code, safe_strerror, set_last_error_code};
pub use policy::{SeverityPolicy, dcheck_is_on, init, policy};
pub use record::{ErrnoLogRecord, LogRecord};
pub use severity::{ParseSeverityError, Severity};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{RecordLayer, init_tracing};
