//! crates/platform/src/trap.rs
//! Debugger trap used by debug-build fatal termination.

/// Raises `SIGTRAP` against the calling thread.
///
/// With the default disposition this terminates the process (and stops an
/// attached debugger at the faulting frame). The function returns only when
/// the signal was ignored or handled, or on targets without POSIX signals;
/// callers that require termination must follow up with an abort.
pub fn raise_trap() {
    #[cfg(unix)]
    {
        let _ = nix::sys::signal::raise(nix::sys::signal::Signal::SIGTRAP);
    }
}
