#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` owns the one place diagnostic lines leave the process. A
//! [`MessageSink`] wraps an [`std::io::Write`] implementor and writes each
//! fully-rendered record with a single `write_all` followed by a flush.
//! [`emit_to_stderr`] is the production path: it locks the process's
//! standard error stream for the duration of that write.
//!
//! # Invariants
//!
//! - A record is handed to the writer as one contiguous buffer; the sink never
//!   splits, buffers, or reorders records.
//! - The writer is flushed after every record.
//! - While [`emit_to_stderr`] holds the stderr lock no other thread of this
//!   process can write to stderr, so concurrent records appear as whole lines.
//!
//! # Errors
//!
//! Operations surface [`std::io::Error`] values from the underlying writer.
//! Nothing is retried; callers on a best-effort path are expected to discard
//! the error.
//!
//! # Examples
//!
//! ```
//! use logging_sink::MessageSink;
//!
//! let mut sink = MessageSink::new(Vec::new());
//! sink.write_record(b"[1:1:20240101,000000.000000:INFO] main.rs:3] ready\n")?;
//! assert!(sink.into_inner().ends_with(b"ready\n"));
//! # Ok::<(), std::io::Error>(())
//! ```

mod sink;

pub use sink::{MessageSink, emit_to_stderr};
