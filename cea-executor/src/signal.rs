//! Process-group signaling: SIGTERM-then-SIGKILL, and a zero-signal
//! liveness probe.

use std::time::Duration;

/// Grace period between SIGTERM and SIGKILL.
pub const KILL_GRACE: Duration = Duration::from_millis(200);

/// Send SIGTERM to the process group led by `pgid`, wait [`KILL_GRACE`],
/// then send SIGKILL if the group is still alive.
#[cfg(unix)]
pub async fn terminate_process_group(pgid: i32) {
    send_signal(pgid, libc::SIGTERM);
    tokio::time::sleep(KILL_GRACE).await;
    if process_group_alive(pgid) {
        send_signal(pgid, libc::SIGKILL);
    }
}

#[cfg(unix)]
fn send_signal(pgid: i32, signal: i32) {
    // SAFETY: kill(2) with a negative pid targets the process group; this
    // has no memory-safety implications, only the usual signal-delivery
    // semantics.
    unsafe {
        libc::kill(-pgid, signal);
    }
}

/// Probe whether any process in the group led by `pgid` is still alive,
/// using a zero-signal `kill`. `EPERM` (we can see the group but lack
/// permission to signal it) is treated as alive; any other error (notably
/// `ESRCH`) is treated as dead.
#[cfg(unix)]
pub fn process_group_alive(pgid: i32) -> bool {
    // SAFETY: signal 0 performs no action beyond existence/permission
    // checks.
    let ret = unsafe { libc::kill(-pgid, 0) };
    if ret == 0 {
        return true;
    }
    std::io::Error::last_os_error().raw_os_error() == Some(libc::EPERM)
}

#[cfg(not(unix))]
pub async fn terminate_process_group(_pgid: i32) {}

#[cfg(not(unix))]
pub fn process_group_alive(_pgid: i32) -> bool {
    false
}

#[cfg(test)]
#[path = "signal.test.rs"]
mod tests;
