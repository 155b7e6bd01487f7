// File: crates/area-core/tests/frame.rs
// Purpose: Frame link registration and release.

use area_core::FrameScheduler;

#[test]
fn links_release_on_drop_and_cancel() {
    let scheduler = FrameScheduler::new();
    assert!(!scheduler.wants_frames());

    let a = scheduler.subscribe();
    let b = scheduler.subscribe();
    assert_ne!(a.id(), b.id());
    assert_eq!(scheduler.active_links(), 2);
    assert!(a.is_active());

    drop(a);
    assert_eq!(scheduler.active_links(), 1);

    b.cancel();
    assert!(!scheduler.wants_frames());
}

#[test]
fn link_outliving_scheduler_is_inert() {
    let scheduler = FrameScheduler::new();
    let link = scheduler.subscribe();
    drop(scheduler);
    assert!(!link.is_active());
}

#[test]
fn tick_records_timestamp() {
    let scheduler = FrameScheduler::new();
    assert_eq!(scheduler.last_timestamp(), None);
    assert_eq!(scheduler.tick(12.5), 12.5);
    assert_eq!(scheduler.clone().last_timestamp(), Some(12.5));
}
