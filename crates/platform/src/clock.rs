//! crates/platform/src/clock.rs
//! Local time zone offset lookup.
//!
//! Rendering the timestamp itself is left to the caller; this module only
//! answers which offset from UTC the local zone applies at a given instant.
//! `localtime_r(3)` is used because it stays usable in multi-threaded
//! processes, where portable offset lookups refuse to run.

/// Returns the local zone's offset from UTC, in seconds, at `unix_seconds`.
///
/// Targets without `tm_gmtoff` (and lookups that fail) report `0`, which
/// renders timestamps in UTC.
pub fn local_utc_offset_seconds(unix_seconds: i64) -> i32 {
    offset_at(unix_seconds).unwrap_or(0)
}

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_vendor = "apple",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
))]
fn offset_at(unix_seconds: i64) -> Option<i32> {
    let time = libc::time_t::try_from(unix_seconds).ok()?;
    // SAFETY: an all-zero `tm` is a valid value for every field.
    let mut broken_down: libc::tm = unsafe { std::mem::zeroed() };
    // SAFETY: both pointers reference live stack values for the whole call.
    let result = unsafe { libc::localtime_r(&time, &mut broken_down) };
    if result.is_null() {
        return None;
    }
    i32::try_from(broken_down.tm_gmtoff).ok()
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_vendor = "apple",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
)))]
fn offset_at(_unix_seconds: i64) -> Option<i32> {
    None
}
