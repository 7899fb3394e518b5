//! crates/platform/src/errno.rs
//! Errno capture and thread-safe error-code translation.
//!
//! [`safe_strerror_r`] wraps the XSI `strerror_r(3)` interface. Its output is
//! bounded by the caller's buffer and always NUL-terminated. When the libc
//! call itself fails (unknown code, buffer too small), the buffer receives
//! `"Error <r> while retrieving error <code>"` instead, so callers always get
//! printable text.

use std::fmt::Write as _;

/// Capacity of the buffer used by [`safe_strerror`].
pub const STRERROR_BUFFER_LEN: usize = 256;

/// Returns the calling thread's current OS error code (`errno`).
pub fn last_error_code() -> i32 {
    #[cfg(unix)]
    {
        nix::errno::Errno::last_raw()
    }

    #[cfg(not(unix))]
    {
        std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
    }
}

/// Overwrites the calling thread's OS error code.
///
/// Only meaningful on Unix; other targets ignore the request.
pub fn set_last_error_code(code: i32) {
    #[cfg(unix)]
    nix::errno::Errno::set_raw(code);

    #[cfg(not(unix))]
    let _ = code;
}

/// Writes a NUL-terminated description of `code` into `buf`.
///
/// An empty buffer is left untouched. Output longer than the buffer is
/// truncated so the final byte is always NUL.
pub fn safe_strerror_r(code: i32, buf: &mut [u8]) {
    if buf.is_empty() {
        return;
    }

    #[cfg(unix)]
    {
        // SAFETY: `buf` is a valid, writable region of `buf.len()` bytes and
        // strerror_r never writes past the length it is given.
        let result = unsafe { libc::strerror_r(code, buf.as_mut_ptr().cast(), buf.len()) };
        if result != 0 {
            // Older glibc returns -1 and reports the failure through errno.
            let failure = if result == -1 { last_error_code() } else { result };
            write_fallback(code, failure, buf);
        } else if buf[0] == 0 {
            write_fallback(code, 0, buf);
        }
    }

    #[cfg(not(unix))]
    {
        let text = std::io::Error::from_raw_os_error(code).to_string();
        copy_truncated(text.as_bytes(), buf);
    }
}

/// Returns a description of `code`, never empty.
///
/// # Examples
///
/// ```
/// let text = platform::safe_strerror(2);
/// assert!(!text.is_empty());
/// ```
pub fn safe_strerror(code: i32) -> String {
    let mut buf = [0u8; STRERROR_BUFFER_LEN];
    safe_strerror_r(code, &mut buf);
    let len = buf.iter().position(|&byte| byte == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..len]).into_owned()
}

#[cfg_attr(not(unix), allow(dead_code))]
fn write_fallback(code: i32, failure: i32, buf: &mut [u8]) {
    let mut text = String::with_capacity(64);
    let _ = write!(text, "Error {failure} while retrieving error {code}");
    copy_truncated(text.as_bytes(), buf);
}

fn copy_truncated(text: &[u8], buf: &mut [u8]) {
    let len = text.len().min(buf.len() - 1);
    buf[..len].copy_from_slice(&text[..len]);
    buf[len] = 0;
}
