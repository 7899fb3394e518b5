#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/platform/src/lib.rs
//!
//! # Overview
//!
//! `platform` isolates every operating-system query the diagnostic logging
//! core depends on. All `unsafe` FFI in the workspace lives here so the
//! `logging` and `logging-sink` crates can keep `#![deny(unsafe_code)]`.
//!
//! The crate answers four kinds of questions:
//!
//! - [`errno`]: what the calling thread's last OS error code is, and what
//!   human-readable text describes a given code.
//! - [`identity`]: which process and OS thread are running.
//! - [`clock`]: which UTC offset the local time zone applies at an instant.
//! - [`trap`]: how to stop in a debugger-friendly way.
//!
//! [`capabilities`] exposes the fixed build facts the core may branch on.
//!
//! # Errors
//!
//! Nothing here returns an error. Translation failures fall back to a
//! generic placeholder and identity lookups have infallible fallbacks.

pub mod capabilities;
pub mod clock;
pub mod errno;
pub mod identity;
pub mod trap;

pub use clock::local_utc_offset_seconds;
pub use errno::{
    STRERROR_BUFFER_LEN, last_error_code, safe_strerror, safe_strerror_r, set_last_error_code,
};
pub use identity::{process_id, thread_id};
pub use trap::raise_trap;
