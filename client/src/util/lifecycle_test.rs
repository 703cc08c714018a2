use super::*;

#[test]
fn new_guard_is_mounted() {
    assert!(MountGuard::new().is_mounted());
}

#[test]
fn release_is_visible_to_clones() {
    let guard = MountGuard::new();
    let task = guard.clone();
    guard.release();
    assert!(!task.is_mounted());
    assert!(!guard.is_mounted());
}
