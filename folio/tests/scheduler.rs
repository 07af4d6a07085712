use std::time::Duration;

use folio::ComponentId;
use folio::scheduler::{Due, Scheduler};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn owner(n: usize) -> ComponentId {
    ComponentId::from_index(n)
}

// =============================================================================
// Timers
// =============================================================================

#[test]
fn test_timers_fire_in_deadline_order() {
    let mut scheduler = Scheduler::new(ms(16));
    scheduler.set_timeout(owner(0), ms(300), 3);
    scheduler.set_timeout(owner(0), ms(100), 1);
    scheduler.set_timeout(owner(1), ms(200), 2);

    let mut tags = Vec::new();
    while let Some(Due::Timer { tag, .. }) = scheduler.pop_due(ms(1000)) {
        tags.push(tag);
    }
    assert_eq!(tags, vec![1, 2, 3]);
    assert_eq!(scheduler.now(), ms(300));
}

#[test]
fn test_equal_deadlines_fire_in_insertion_order() {
    let mut scheduler = Scheduler::default();
    scheduler.set_timeout(owner(0), ms(50), 7);
    scheduler.set_timeout(owner(1), ms(50), 8);

    assert!(matches!(scheduler.pop_due(ms(50)), Some(Due::Timer { tag: 7, .. })));
    assert!(matches!(scheduler.pop_due(ms(50)), Some(Due::Timer { tag: 8, .. })));
    assert_eq!(scheduler.pop_due(ms(50)), None);
}

#[test]
fn test_timer_not_due_before_deadline() {
    let mut scheduler = Scheduler::default();
    let handle = scheduler.set_timeout(owner(0), ms(1500), 0);
    assert_eq!(scheduler.pop_due(ms(1499)), None);
    assert!(scheduler.is_pending(handle));
    assert!(scheduler.pop_due(ms(1500)).is_some());
    assert!(!scheduler.is_pending(handle));
}

#[test]
fn test_cancel_timeout() {
    let mut scheduler = Scheduler::default();
    let handle = scheduler.set_timeout(owner(0), ms(10), 0);
    assert!(scheduler.cancel_timeout(handle));
    assert!(!scheduler.cancel_timeout(handle));
    assert_eq!(scheduler.pop_due(ms(100)), None);
}

// =============================================================================
// Frames
// =============================================================================

#[test]
fn test_no_ticks_without_requests() {
    let mut scheduler = Scheduler::new(ms(16));
    assert_eq!(scheduler.next_deadline(), None);
    assert_eq!(scheduler.pop_due(ms(1000)), None);
    assert_eq!(scheduler.frame_count(), 0);
}

#[test]
fn test_frame_ticks_align_to_interval() {
    let mut scheduler = Scheduler::new(ms(16));
    scheduler.set_now(ms(5));
    scheduler.request_frame(owner(0));
    assert_eq!(scheduler.next_deadline(), Some(ms(16)));
    assert_eq!(scheduler.pop_due(ms(100)), Some(Due::Frame));
    assert_eq!(scheduler.now(), ms(16));
    assert_eq!(scheduler.take_frame_requests().len(), 1);

    // A request made during a tick waits for the next one
    scheduler.request_frame(owner(0));
    assert_eq!(scheduler.next_deadline(), Some(ms(32)));
}

#[test]
fn test_timer_wins_tie_with_frame() {
    let mut scheduler = Scheduler::new(ms(16));
    scheduler.request_frame(owner(0));
    scheduler.set_timeout(owner(1), ms(16), 9);
    assert!(matches!(scheduler.pop_due(ms(16)), Some(Due::Timer { tag: 9, .. })));
    assert_eq!(scheduler.pop_due(ms(16)), Some(Due::Frame));
}

#[test]
fn test_boundary_timers_do_not_skip_ticks() {
    let mut scheduler = Scheduler::new(ms(16));
    scheduler.request_frame(owner(0));
    scheduler.set_timeout(owner(1), ms(32), 1);
    scheduler.set_timeout(owner(1), ms(64), 2);

    let mut ticks = Vec::new();
    while let Some(due) = scheduler.pop_due(ms(80)) {
        if due == Due::Frame {
            ticks.push(scheduler.now().as_millis());
            scheduler.take_frame_requests();
            scheduler.request_frame(owner(0));
        }
    }
    assert_eq!(ticks, vec![16, 32, 48, 64, 80]);
    assert_eq!(scheduler.frame_count(), 5);
}

#[test]
fn test_cancel_frame() {
    let mut scheduler = Scheduler::new(ms(16));
    let handle = scheduler.request_frame(owner(0));
    assert!(scheduler.cancel_frame(handle));
    assert!(!scheduler.has_frame_requests());
    assert_eq!(scheduler.pop_due(ms(100)), None);
}

#[test]
fn test_cancel_owned() {
    let mut scheduler = Scheduler::new(ms(16));
    scheduler.set_timeout(owner(0), ms(10), 0);
    scheduler.set_timeout(owner(1), ms(10), 0);
    scheduler.request_frame(owner(0));

    assert_eq!(scheduler.cancel_owned(owner(0)), 2);
    assert_eq!(scheduler.pending_timers(), 1);
    assert!(!scheduler.has_frame_requests());
}
