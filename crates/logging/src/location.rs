//! crates/logging/src/location.rs
//! Call-site metadata captured when a record is opened.

use std::fmt;

/// Immutable (function, file, line) triple describing where a record came from.
///
/// Only the basename of the file is kept. The logging macros fill the
/// function slot with the enclosing `module_path!()`; locations captured via
/// [`SourceLocation::caller`] leave it empty.
///
/// # Examples
///
/// ```
/// use logging::SourceLocation;
///
/// let location = SourceLocation::new("app::main", "/src/app/main.rs", 42);
/// assert_eq!(location.file(), "main.rs");
/// assert_eq!(location.to_string(), "main.rs:42");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SourceLocation {
    function: &'static str,
    file: &'static str,
    line: u32,
}

impl SourceLocation {
    /// Creates a location, reducing `file_path` to its basename.
    #[must_use]
    pub fn new(function: &'static str, file_path: &'static str, line: u32) -> Self {
        Self {
            function,
            file: basename(file_path),
            line,
        }
    }

    /// Captures the location of the caller through `#[track_caller]`.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let caller = std::panic::Location::caller();
        Self::new("", caller.file(), caller.line())
    }

    /// Returns the function (or module path) recorded for the call site.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Returns the file basename.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Returns the 1-based line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Returns the portion of `path` after its last path separator.
///
/// ```
/// assert_eq!(logging::location::basename("/a/b/c.cc"), "c.cc");
/// assert_eq!(logging::location::basename("plain.rs"), "plain.rs");
/// ```
#[must_use]
pub fn basename(path: &str) -> &str {
    path.rfind(platform::capabilities::PATH_SEPARATORS)
        .map_or(path, |index| &path[index + 1..])
}
