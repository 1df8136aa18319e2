use super::*;

// =============================================================
// MountFlag
// =============================================================

#[test]
fn new_flag_is_live() {
    assert!(MountFlag::default().is_live());
}

#[test]
fn unmount_is_seen_by_clones() {
    let flag = MountFlag::default();
    let task_copy = flag.clone();
    flag.unmount();
    assert!(!task_copy.is_live());
}

#[test]
fn run_if_live_skips_after_unmount() {
    let flag = MountFlag::default();
    let mut writes = 0;
    assert!(flag.run_if_live(|| writes += 1));
    flag.unmount();
    assert!(!flag.run_if_live(|| writes += 1));
    assert_eq!(writes, 1);
}

// =============================================================
// RequestGate
// =============================================================

#[test]
fn newer_ticket_supersedes_older() {
    let gate = MountFlag::default().gate();
    let first = gate.begin();
    assert!(first.is_current());
    let second = gate.begin();
    assert!(!first.is_current());
    assert!(second.is_current());
}

#[test]
fn stale_ticket_skips_write() {
    let gate = MountFlag::default().gate();
    let stale = gate.begin();
    let fresh = gate.begin();
    let mut writes = Vec::new();
    assert!(fresh.run_if_current(|| writes.push("fresh")));
    assert!(!stale.run_if_current(|| writes.push("stale")));
    assert_eq!(writes, vec!["fresh"]);
}

#[test]
fn cancel_invalidates_in_flight_ticket() {
    let gate = MountFlag::default().gate();
    let ticket = gate.begin();
    gate.cancel();
    assert!(!ticket.is_current());
}

#[test]
fn unmount_invalidates_newest_ticket() {
    let flag = MountFlag::default();
    let ticket = flag.gate().begin();
    flag.unmount();
    assert!(!ticket.is_current());
}

#[test]
fn gates_of_one_view_are_independent() {
    let flag = MountFlag::default();
    let users = flag.gate();
    let logs = flag.gate();
    let users_ticket = users.begin();
    logs.begin();
    assert!(users_ticket.is_current());
}
