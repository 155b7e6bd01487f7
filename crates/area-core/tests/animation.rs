// File: crates/area-core/tests/animation.rs
// Purpose: Snap vs animated window updates driven through per-frame callbacks.

use std::time::Duration as StdDuration;

use area_core::quote::to_epoch_seconds;
use area_core::{AnimationState, AreaView, FrameOutcome, FrameScheduler, Quote};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap() + Duration::days(n)
}

fn quotes(closes: &[f64]) -> Vec<Quote> {
    closes.iter().enumerate().map(|(i, &c)| Quote::new(day(i as i64), c)).collect()
}

fn window_of(view: &AreaView) -> (f64, f64) {
    let w = view.window().expect("window");
    (w.minimum, w.maximum)
}

#[test]
fn snap_applies_range_immediately() {
    let scheduler = FrameScheduler::new();
    let mut view = AreaView::new(scheduler.clone());
    assert!(view.window().is_none());

    view.set_values(quotes(&[10.0, 20.0, 15.0]), false, day(0));
    assert_eq!(window_of(&view), (10.0, 20.0));
    assert!(!view.is_animating());
    assert!(!scheduler.wants_frames());
    assert!(view.take_needs_display());
    assert!(!view.needs_display());

    view.set_values(quotes(&[30.0, 40.0, 35.0]), false, day(1));
    assert_eq!(window_of(&view), (35.0, 40.0));
    assert_eq!(view.on_frame(1.0), FrameOutcome::Idle);
}

#[test]
fn animated_without_prior_data_snaps() {
    let scheduler = FrameScheduler::new();
    let mut view = AreaView::new(scheduler.clone());
    view.set_values(quotes(&[10.0, 20.0]), true, day(0));
    assert_eq!(window_of(&view), (10.0, 20.0));
    assert!(matches!(view.animation(), AnimationState::Idle));
    assert!(!scheduler.wants_frames());
}

#[test]
fn animated_window_interpolates_min_and_max() {
    let scheduler = FrameScheduler::new();
    let mut view = AreaView::new(scheduler.clone()).with_duration(StdDuration::from_secs(1));
    view.set_values(quotes(&[10.0, 20.0]), false, day(0));
    view.take_needs_display();

    view.set_values(quotes(&[15.0, 25.0]), true, day(0));
    assert!(view.is_animating());
    assert!(scheduler.wants_frames());
    // nothing moves before the first frame
    assert_eq!(window_of(&view), (10.0, 20.0));
    assert!(view.take_needs_display());

    assert_eq!(view.on_frame(100.0), FrameOutcome::Latched);
    assert!(!view.needs_display());
    assert_eq!(window_of(&view), (10.0, 20.0));

    assert_eq!(view.on_frame(100.5), FrameOutcome::Animating);
    assert_eq!(window_of(&view), (12.5, 22.5));
    assert!(view.take_needs_display());

    assert_eq!(view.on_frame(101.25), FrameOutcome::Finished);
    assert_eq!(window_of(&view), (15.0, 25.0));
    assert!(!view.is_animating());
    assert!(!scheduler.wants_frames());

    assert_eq!(view.on_frame(101.5), FrameOutcome::Idle);
}

#[test]
fn start_date_glides_toward_target() {
    let scheduler = FrameScheduler::new();
    let mut view = AreaView::new(scheduler).with_duration(StdDuration::from_secs(2));
    let q = quotes(&[10.0, 20.0, 15.0, 12.0]);
    view.set_values(q.clone(), false, day(0));
    view.set_values(q, true, day(2));

    view.on_frame(0.0);
    view.on_frame(1.0);
    assert_eq!(view.start_seconds(), Some(to_epoch_seconds(day(1))));
    assert_eq!(view.render_state().expect("state").start, day(1));

    assert_eq!(view.on_frame(2.0), FrameOutcome::Finished);
    let state = view.render_state().expect("state");
    assert_eq!(state.start, day(2));
    assert_eq!((state.minimum, state.maximum), (12.0, 15.0));
}

#[test]
fn new_update_mid_animation_cancels_and_restarts_from_screen() {
    let scheduler = FrameScheduler::new();
    let mut view = AreaView::new(scheduler.clone());
    view.set_values(quotes(&[10.0, 20.0]), false, day(0));
    view.set_values(quotes(&[15.0, 25.0]), true, day(0));
    view.on_frame(0.0);
    view.on_frame(0.5);
    assert_eq!(window_of(&view), (12.5, 22.5));

    view.set_values(quotes(&[0.0, 10.0]), true, day(0));
    assert_eq!(scheduler.active_links(), 1);
    let AnimationState::Animating(t) = view.animation() else { panic!("expected animation") };
    assert_eq!((t.origin().minimum, t.origin().maximum), (12.5, 22.5));
    assert_eq!((t.target().minimum, t.target().maximum), (0.0, 10.0));
    assert_eq!(t.started_at(), None);

    // new transition latches afresh
    assert_eq!(view.on_frame(0.75), FrameOutcome::Latched);
    assert_eq!(view.on_frame(1.75), FrameOutcome::Finished);
    assert_eq!(window_of(&view), (0.0, 10.0));
    assert!(!scheduler.wants_frames());
}

#[test]
fn snap_mid_animation_releases_link() {
    let scheduler = FrameScheduler::new();
    let mut view = AreaView::new(scheduler.clone());
    view.set_values(quotes(&[10.0, 20.0]), false, day(0));
    view.set_values(quotes(&[15.0, 25.0]), true, day(0));
    assert!(scheduler.wants_frames());

    view.set_values(quotes(&[1.0, 2.0]), false, day(0));
    assert!(!scheduler.wants_frames());
    assert_eq!(window_of(&view), (1.0, 2.0));
}

#[test]
fn dropping_view_releases_link() {
    let scheduler = FrameScheduler::new();
    {
        let mut view = AreaView::new(scheduler.clone());
        view.set_values(quotes(&[10.0, 20.0]), false, day(0));
        view.set_values(quotes(&[15.0, 25.0]), true, day(0));
        assert_eq!(scheduler.active_links(), 1);
    }
    assert_eq!(scheduler.active_links(), 0);
}

#[test]
fn final_frame_keeps_sub_millisecond_start() {
    let t = day(0);
    let start_from = t + Duration::microseconds(10_700);
    let q = vec![
        Quote::new(t, 10.0),
        // after the millisecond-rounded start but before `start_from`
        Quote::new(t + Duration::microseconds(10_300), 99.0),
        Quote::new(start_from, 15.0),
        Quote::new(t + Duration::days(1), 20.0),
    ];
    let mut view = AreaView::new(FrameScheduler::new());
    view.set_values(q.clone(), false, t);
    view.set_values(q, true, start_from);

    view.on_frame(0.0);
    assert_eq!(view.on_frame(1.0), FrameOutcome::Finished);
    let state = view.render_state().expect("state");
    assert_eq!(state.start, start_from);
    assert_eq!((state.minimum, state.maximum), (15.0, 20.0));
    for quote in state.values.iter().filter(|x| x.date >= state.start) {
        assert!(state.minimum <= quote.close && quote.close <= state.maximum, "{} outside window", quote.close);
    }
}
