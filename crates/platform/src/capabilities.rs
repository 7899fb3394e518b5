//! crates/platform/src/capabilities.rs
//! Fixed build facts queried by the logging core.

/// True when [`raise_trap`](crate::raise_trap) delivers a real breakpoint trap.
pub const HAS_DEBUG_TRAP: bool = cfg!(unix);

/// True when the compiler emitted debug assertions for this build.
pub const DEBUG_ASSERTIONS: bool = cfg!(debug_assertions);

/// Path separator characters recognised when reducing a source path to its basename.
#[cfg(windows)]
pub const PATH_SEPARATORS: &[char] = &['/', '\\'];

/// Path separator characters recognised when reducing a source path to its basename.
#[cfg(not(windows))]
pub const PATH_SEPARATORS: &[char] = &['/'];
