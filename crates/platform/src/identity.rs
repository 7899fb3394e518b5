//! crates/platform/src/identity.rs
//! Process and OS thread identity.

/// Returns the id of the current process.
pub fn process_id() -> u32 {
    #[cfg(unix)]
    {
        nix::unistd::getpid().as_raw().unsigned_abs()
    }

    #[cfg(not(unix))]
    {
        std::process::id()
    }
}

/// Returns an identifier for the calling thread.
///
/// Linux and Android report the kernel thread id (`gettid(2)`), Apple targets
/// the system-wide `pthread_threadid_np` value. Elsewhere every thread is
/// assigned a small process-local number the first time it asks.
pub fn thread_id() -> u64 {
    os_thread_id()
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn os_thread_id() -> u64 {
    u64::from(nix::unistd::gettid().as_raw().unsigned_abs())
}

#[cfg(target_vendor = "apple")]
fn os_thread_id() -> u64 {
    let mut id: u64 = 0;
    // SAFETY: pthread_self() is always a valid handle for the calling thread
    // and `id` is a valid out-pointer for the duration of the call.
    let rc = unsafe { libc::pthread_threadid_np(libc::pthread_self(), &mut id) };
    if rc == 0 { id } else { local_thread_number() }
}

#[cfg(not(any(target_os = "linux", target_os = "android", target_vendor = "apple")))]
fn os_thread_id() -> u64 {
    local_thread_number()
}

#[cfg_attr(any(target_os = "linux", target_os = "android"), allow(dead_code))]
fn local_thread_number() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};

    static NEXT: AtomicU64 = AtomicU64::new(1);
    thread_local! {
        static NUMBER: u64 = NEXT.fetch_add(1, Ordering::Relaxed);
    }
    NUMBER.with(|number| *number)
}
