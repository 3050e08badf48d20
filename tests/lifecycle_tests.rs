// Host-side tests for mount/unmount bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/core/lifecycle.rs");
}

use lifecycle::*;

#[test]
fn mount_then_unmount_tears_down() {
    let mut gate = MountGate::default();
    assert!(gate.begin());
    assert_eq!(gate.complete(), MountOutcome::Install);
    assert_eq!(gate.phase(), MountPhase::Mounted);
    assert_eq!(gate.request_unmount(), UnmountAction::Teardown);
    assert_eq!(gate.phase(), MountPhase::Idle);
}

#[test]
fn second_mount_is_refused_while_active_or_in_flight() {
    let mut gate = MountGate::default();
    assert!(gate.begin());
    assert!(!gate.begin());
    gate.complete();
    assert!(!gate.begin());
}

#[test]
fn unmount_during_mount_discards_the_result() {
    let mut gate = MountGate::default();
    assert!(gate.begin());
    assert_eq!(gate.request_unmount(), UnmountAction::Deferred);
    assert_eq!(gate.complete(), MountOutcome::Discard);
    assert_eq!(gate.phase(), MountPhase::Idle);
    // and the page can mount again afterwards
    assert!(gate.begin());
    assert_eq!(gate.complete(), MountOutcome::Install);
}

#[test]
fn failed_mount_reopens_the_gate() {
    let mut gate = MountGate::default();
    assert!(gate.begin());
    gate.request_unmount();
    gate.fail();
    assert_eq!(gate.phase(), MountPhase::Idle);
    assert!(gate.begin());
    assert_eq!(gate.complete(), MountOutcome::Install);
}

#[test]
fn unmount_when_idle_does_nothing() {
    let mut gate = MountGate::default();
    assert_eq!(gate.request_unmount(), UnmountAction::Nothing);
    assert_eq!(gate.phase(), MountPhase::Idle);
}
