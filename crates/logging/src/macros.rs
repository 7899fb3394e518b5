//! crates/logging/src/macros.rs
//! Call-site macros.
//!
//! Every logging macro consults the process-wide [`policy`](crate::policy)
//! first. When the severity is disabled, or the extra condition is false,
//! nothing else runs: no record is opened and the format arguments are not
//! evaluated. The `d*` variants additionally require a debug build and
//! disappear entirely from release builds.
//!
//! Severity arguments are the variant names of [`Severity`](crate::Severity)
//! (`Info`, `Warning`, `Error`, `ErrorReport`, `Fatal`) or `DFatal`, which is
//! `Fatal` in debug builds and `Error` in release builds.

#[doc(hidden)]
#[macro_export]
macro_rules! __location {
    () => {
        $crate::SourceLocation::new(::std::module_path!(), ::std::file!(), ::std::line!())
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __severity {
    (DFatal) => {
        $crate::Severity::dfatal()
    };
    ($severity:ident) => {
        $crate::Severity::$severity
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_stream {
    ($is_on:ident, $severity:expr, $cond:expr, $($arg:tt)+) => {{
        let severity: $crate::Severity = $severity;
        if $crate::policy().$is_on(severity) && ($cond) {
            $crate::LogRecord::open($crate::__location!(), severity)
                .stream_fmt(::std::format_args!($($arg)+));
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __plog_stream {
    ($is_on:ident, $severity:expr, $cond:expr, $($arg:tt)+) => {{
        let severity: $crate::Severity = $severity;
        if $crate::policy().$is_on(severity) && ($cond) {
            let error_code = $crate::last_error_code();
            $crate::ErrnoLogRecord::open($crate::__location!(), severity, error_code)
                .stream_fmt(::std::format_args!($($arg)+));
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __check_op {
    ($check:ident, $op:tt, $lhs:expr, $rhs:expr, $($arg:tt)+) => {{
        if let ::std::option::Option::Some(diagnostic) = $crate::check_op::$check(
            &($lhs),
            &($rhs),
            ::std::concat!(
                ::std::stringify!($lhs),
                " ",
                ::std::stringify!($op),
                " ",
                ::std::stringify!($rhs)
            ),
        ) {
            $crate::LogRecord::check_failed($crate::__location!(), diagnostic)
                .stream_fmt(::std::format_args!($($arg)+));
        }
    }};
}

/// Reports whether `log!` at the given severity would produce output.
#[macro_export]
macro_rules! log_is_on {
    ($severity:ident) => {
        $crate::policy().is_enabled($crate::__severity!($severity))
    };
}

/// Reports whether `vlog!` at the given level would produce output.
#[macro_export]
macro_rules! vlog_is_on {
    ($level:expr) => {
        $crate::policy().is_verbose_enabled($level)
    };
}

/// Writes one record at the given severity.
///
/// ```
/// let attempts = 3;
/// logging::log!(Warning, "connect retry {attempts}");
/// ```
#[macro_export]
macro_rules! log {
    ($severity:ident, $($arg:tt)+) => {
        $crate::__log_stream!(is_enabled, $crate::__severity!($severity), true, $($arg)+)
    };
}

/// Writes one record when the severity is enabled and `cond` holds.
#[macro_export]
macro_rules! log_if {
    ($severity:ident, $cond:expr, $($arg:tt)+) => {
        $crate::__log_stream!(is_enabled, $crate::__severity!($severity), $cond, $($arg)+)
    };
}

/// Writes a fatal `"Assertion failed: <cond>. "` record when `cond` is false.
#[macro_export]
macro_rules! log_assert {
    ($cond:expr $(,)?) => {
        $crate::log_assert!($cond, "")
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::__log_stream!(
            is_enabled,
            $crate::Severity::Fatal,
            !($cond),
            "{}{}",
            ::std::concat!("Assertion failed: ", ::std::stringify!($cond), ". "),
            ::std::format_args!($($arg)+)
        )
    };
}

/// Writes one record at verbose `level`.
///
/// ```
/// logging::vlog!(2, "cache probe for {}", "key");
/// ```
#[macro_export]
macro_rules! vlog {
    ($level:expr, $($arg:tt)+) => {
        $crate::__log_stream!(is_enabled, $crate::Severity::verbose($level), true, $($arg)+)
    };
}

/// Writes one record at verbose `level` when `cond` holds.
#[macro_export]
macro_rules! vlog_if {
    ($level:expr, $cond:expr, $($arg:tt)+) => {
        $crate::__log_stream!(is_enabled, $crate::Severity::verbose($level), $cond, $($arg)+)
    };
}

/// Writes one record annotated with the current OS error.
///
/// ```
/// logging::plog!(Error, "write to {} failed", "/dev/full");
/// ```
#[macro_export]
macro_rules! plog {
    ($severity:ident, $($arg:tt)+) => {
        $crate::__plog_stream!(is_enabled, $crate::__severity!($severity), true, $($arg)+)
    };
}

/// Writes one errno-annotated record when `cond` holds.
#[macro_export]
macro_rules! plog_if {
    ($severity:ident, $cond:expr, $($arg:tt)+) => {
        $crate::__plog_stream!(is_enabled, $crate::__severity!($severity), $cond, $($arg)+)
    };
}

/// Writes one errno-annotated record at verbose `level`.
#[macro_export]
macro_rules! vplog {
    ($level:expr, $($arg:tt)+) => {
        $crate::__plog_stream!(is_enabled, $crate::Severity::verbose($level), true, $($arg)+)
    };
}

/// Writes one errno-annotated record at verbose `level` when `cond` holds.
#[macro_export]
macro_rules! vplog_if {
    ($level:expr, $cond:expr, $($arg:tt)+) => {
        $crate::__plog_stream!(is_enabled, $crate::Severity::verbose($level), $cond, $($arg)+)
    };
}

/// Terminates with `"Check failed: <cond>. "` when `cond` is false.
///
/// Unlike the `d*` variants this is active in every build.
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        $crate::check!($cond, "")
    };
    ($cond:expr, $($arg:tt)+) => {{
        if !($cond) {
            $crate::LogRecord::open($crate::__location!(), $crate::Severity::Fatal)
                .stream(::std::concat!("Check failed: ", ::std::stringify!($cond), ". "))
                .stream_fmt(::std::format_args!($($arg)+));
        }
    }};
}

/// Like [`check!`], with the current OS error appended.
#[macro_export]
macro_rules! pcheck {
    ($cond:expr $(,)?) => {
        $crate::pcheck!($cond, "")
    };
    ($cond:expr, $($arg:tt)+) => {{
        if !($cond) {
            let error_code = $crate::last_error_code();
            $crate::ErrnoLogRecord::open($crate::__location!(), $crate::Severity::Fatal, error_code)
                .stream(::std::concat!("Check failed: ", ::std::stringify!($cond), ". "))
                .stream_fmt(::std::format_args!($($arg)+));
        }
    }};
}

/// Terminates with `"Check failed: a == b (<a> vs. <b>). "` unless `a == b`.
#[macro_export]
macro_rules! check_eq {
    ($lhs:expr, $rhs:expr $(,)?) => { $crate::__check_op!(check_eq, ==, $lhs, $rhs, "") };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => { $crate::__check_op!(check_eq, ==, $lhs, $rhs, $($arg)+) };
}

/// Terminates unless `a != b`.
#[macro_export]
macro_rules! check_ne {
    ($lhs:expr, $rhs:expr $(,)?) => { $crate::__check_op!(check_ne, !=, $lhs, $rhs, "") };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => { $crate::__check_op!(check_ne, !=, $lhs, $rhs, $($arg)+) };
}

/// Terminates unless `a <= b`.
#[macro_export]
macro_rules! check_le {
    ($lhs:expr, $rhs:expr $(,)?) => { $crate::__check_op!(check_le, <=, $lhs, $rhs, "") };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => { $crate::__check_op!(check_le, <=, $lhs, $rhs, $($arg)+) };
}

/// Terminates unless `a < b`.
#[macro_export]
macro_rules! check_lt {
    ($lhs:expr, $rhs:expr $(,)?) => { $crate::__check_op!(check_lt, <, $lhs, $rhs, "") };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => { $crate::__check_op!(check_lt, <, $lhs, $rhs, $($arg)+) };
}

/// Terminates unless `a >= b`.
#[macro_export]
macro_rules! check_ge {
    ($lhs:expr, $rhs:expr $(,)?) => { $crate::__check_op!(check_ge, >=, $lhs, $rhs, "") };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => { $crate::__check_op!(check_ge, >=, $lhs, $rhs, $($arg)+) };
}

/// Terminates unless `a > b`.
#[macro_export]
macro_rules! check_gt {
    ($lhs:expr, $rhs:expr $(,)?) => { $crate::__check_op!(check_gt, >, $lhs, $rhs, "") };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => { $crate::__check_op!(check_gt, >, $lhs, $rhs, $($arg)+) };
}

/// Debug-build-only [`log!`].
#[macro_export]
macro_rules! dlog {
    ($severity:ident, $($arg:tt)+) => {
        $crate::__log_stream!(dlog_is_on, $crate::__severity!($severity), true, $($arg)+)
    };
}

/// Debug-build-only [`log_if!`].
#[macro_export]
macro_rules! dlog_if {
    ($severity:ident, $cond:expr, $($arg:tt)+) => {
        $crate::__log_stream!(dlog_is_on, $crate::__severity!($severity), $cond, $($arg)+)
    };
}

/// Debug-build-only [`log_assert!`].
#[macro_export]
macro_rules! dlog_assert {
    ($cond:expr $(,)?) => {
        $crate::dlog_assert!($cond, "")
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::__log_stream!(
            dlog_is_on,
            $crate::Severity::Fatal,
            !($cond),
            "{}{}",
            ::std::concat!("Assertion failed: ", ::std::stringify!($cond), ". "),
            ::std::format_args!($($arg)+)
        )
    };
}

/// Debug-build-only [`vlog!`].
#[macro_export]
macro_rules! dvlog {
    ($level:expr, $($arg:tt)+) => {
        $crate::__log_stream!(dlog_is_on, $crate::Severity::verbose($level), true, $($arg)+)
    };
}

/// Debug-build-only [`vlog_if!`].
#[macro_export]
macro_rules! dvlog_if {
    ($level:expr, $cond:expr, $($arg:tt)+) => {
        $crate::__log_stream!(dlog_is_on, $crate::Severity::verbose($level), $cond, $($arg)+)
    };
}

/// Debug-build-only [`plog!`].
#[macro_export]
macro_rules! dplog {
    ($severity:ident, $($arg:tt)+) => {
        $crate::__plog_stream!(dlog_is_on, $crate::__severity!($severity), true, $($arg)+)
    };
}

/// Debug-build-only [`plog_if!`].
#[macro_export]
macro_rules! dplog_if {
    ($severity:ident, $cond:expr, $($arg:tt)+) => {
        $crate::__plog_stream!(dlog_is_on, $crate::__severity!($severity), $cond, $($arg)+)
    };
}

/// Debug-build-only [`vplog!`].
#[macro_export]
macro_rules! dvplog {
    ($level:expr, $($arg:tt)+) => {
        $crate::__plog_stream!(dlog_is_on, $crate::Severity::verbose($level), true, $($arg)+)
    };
}

/// Debug-build-only [`vplog_if!`].
#[macro_export]
macro_rules! dvplog_if {
    ($level:expr, $cond:expr, $($arg:tt)+) => {
        $crate::__plog_stream!(dlog_is_on, $crate::Severity::verbose($level), $cond, $($arg)+)
    };
}

/// Debug-build-only [`check!`]. The condition is not evaluated in release builds.
#[macro_export]
macro_rules! dcheck {
    ($($arg:tt)+) => {
        if $crate::dcheck_is_on() {
            $crate::check!($($arg)+);
        }
    };
}

/// Debug-build-only [`pcheck!`].
#[macro_export]
macro_rules! dpcheck {
    ($($arg:tt)+) => {
        if $crate::dcheck_is_on() {
            $crate::pcheck!($($arg)+);
        }
    };
}

/// Debug-build-only [`check_eq!`].
#[macro_export]
macro_rules! dcheck_eq {
    ($($arg:tt)+) => {
        if $crate::dcheck_is_on() {
            $crate::check_eq!($($arg)+);
        }
    };
}

/// Debug-build-only [`check_ne!`].
#[macro_export]
macro_rules! dcheck_ne {
    ($($arg:tt)+) => {
        if $crate::dcheck_is_on() {
            $crate::check_ne!($($arg)+);
        }
    };
}

/// Debug-build-only [`check_le!`].
#[macro_export]
macro_rules! dcheck_le {
    ($($arg:tt)+) => {
        if $crate::dcheck_is_on() {
            $crate::check_le!($($arg)+);
        }
    };
}

/// Debug-build-only [`check_lt!`].
#[macro_export]
macro_rules! dcheck_lt {
    ($($arg:tt)+) => {
        if $crate::dcheck_is_on() {
            $crate::check_lt!($($arg)+);
        }
    };
}

/// Debug-build-only [`check_ge!`].
#[macro_export]
macro_rules! dcheck_ge {
    ($($arg:tt)+) => {
        if $crate::dcheck_is_on() {
            $crate::check_ge!($($arg)+);
        }
    };
}

/// Debug-build-only [`check_gt!`].
#[macro_export]
macro_rules! dcheck_gt {
    ($($arg:tt)+) => {
        if $crate::dcheck_is_on() {
            $crate::check_gt!($($arg)+);
        }
    };
}

/// Marks code that must never run; a failed [`dcheck!`] in debug builds.
#[macro_export]
macro_rules! notreached {
    () => {
        $crate::dcheck!(false)
    };
    ($($arg:tt)+) => {
        $crate::dcheck!(false, $($arg)+)
    };
}
