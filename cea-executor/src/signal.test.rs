use super::*;

#[cfg(unix)]
#[test]
fn a_dead_process_group_is_reported_dead() {
    // A pid this large is essentially guaranteed not to exist.
    assert!(!process_group_alive(i32::MAX - 1));
}

#[cfg(unix)]
#[test]
fn our_own_process_group_is_alive() {
    let pgid = unsafe { libc::getpgrp() };
    assert!(process_group_alive(pgid));
}
