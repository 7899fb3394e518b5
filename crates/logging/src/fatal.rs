//! crates/logging/src/fatal.rs
//! Build-mode selection and the fatal termination path.
//!
//! Debug builds stop with a breakpoint trap so an attached debugger lands on
//! the failing frame; release builds abort. Either way [`FatalAction::execute`]
//! never returns.

use crate::severity::Severity;

/// Which flavour of the facility this binary was compiled as.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Compiled with debug assertions: `d*` macros are live, fatal records trap.
    Debug,
    /// Compiled without debug assertions: `d*` macros vanish, fatal records abort.
    Release,
}

impl BuildMode {
    /// Returns the mode selected by `cfg!(debug_assertions)`.
    #[must_use]
    pub const fn current() -> Self {
        if platform::capabilities::DEBUG_ASSERTIONS {
            Self::Debug
        } else {
            Self::Release
        }
    }

    /// Reports whether debug-only checks and logs are compiled in.
    #[must_use]
    pub const fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }

    /// Severity used by `DFATAL` records in this mode.
    #[must_use]
    pub const fn dfatal_severity(self) -> Severity {
        match self {
            Self::Debug => Severity::Fatal,
            Self::Release => Severity::Error,
        }
    }

    /// Termination mechanism used by fatal records in this mode.
    #[must_use]
    pub const fn fatal_action(self) -> FatalAction {
        match self {
            Self::Debug if platform::capabilities::HAS_DEBUG_TRAP => FatalAction::Trap,
            Self::Debug | Self::Release => FatalAction::Abort,
        }
    }
}

/// How a fatal record ends the process.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FatalAction {
    /// Raise a breakpoint trap, aborting if the trap is ignored.
    Trap,
    /// Abort immediately.
    Abort,
}

impl FatalAction {
    /// Ends the process. Unwinding does not happen and destructors do not run.
    #[cold]
    #[inline(never)]
    pub fn execute(self) -> ! {
        if self == Self::Trap {
            platform::raise_trap();
        }
        std::process::abort()
    }
}

/// Terminates the process using the current build mode's [`FatalAction`].
#[cold]
pub fn terminate() -> ! {
    BuildMode::current().fatal_action().execute()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_mode_tracks_debug_assertions() {
        assert_eq!(BuildMode::current().is_debug(), cfg!(debug_assertions));
    }

    #[test]
    fn release_always_aborts() {
        assert_eq!(BuildMode::Release.fatal_action(), FatalAction::Abort);
    }

    #[cfg(unix)]
    #[test]
    fn debug_traps_on_unix() {
        assert_eq!(BuildMode::Debug.fatal_action(), FatalAction::Trap);
    }

    #[test]
    fn dfatal_is_downgraded_in_release() {
        assert_eq!(BuildMode::Debug.dfatal_severity(), Severity::Fatal);
        assert_eq!(BuildMode::Release.dfatal_severity(), Severity::Error);
    }
}
