// File: crates/area-core/src/animation.rs
// Summary: Immutable render state and the idle/animating window transition.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::curve::AnimationCurve;
use crate::frame::FrameLink;
use crate::quote::{from_epoch_seconds, to_epoch_seconds, Quote};
use crate::range::RangeCalculator;

/// Everything `draw` needs. Replaced as a whole, never patched field by field.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    pub values: Arc<[Quote]>,
    pub start: DateTime<Utc>,
    pub minimum: f64,
    pub maximum: f64,
}

impl RenderState {
    /// Snap to the window of `values` starting at `start`.
    pub fn snapped(values: Arc<[Quote]>, start: DateTime<Utc>) -> Self {
        let range = RangeCalculator::new(&values, start);
        if range.is_empty() {
            log::warn!("no quotes at or after {start}; window keeps sentinel range");
        }
        Self { values, start, minimum: range.min(), maximum: range.max() }
    }

    pub fn window(&self) -> Window {
        Window { start: to_epoch_seconds(self.start), minimum: self.minimum, maximum: self.maximum }
    }

    fn with_window(&self, w: Window) -> Self {
        Self {
            values: Arc::clone(&self.values),
            start: from_epoch_seconds(w.start).unwrap_or(self.start),
            minimum: w.minimum,
            maximum: w.maximum,
        }
    }
}

/// Start (epoch seconds), min and max of a displayed window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub start: f64,
    pub minimum: f64,
    pub maximum: f64,
}

/// An in-flight move between two windows.
#[derive(Debug)]
pub struct Transition {
    start_curve: AnimationCurve,
    min_curve: AnimationCurve,
    max_curve: AnimationCurve,
    duration: Duration,
    /// Latched from the first frame after the transition begins.
    started_at: Option<f64>,
    /// Exact state shown once the transition completes.
    landing: RenderState,
    link: FrameLink,
}

impl Transition {
    pub fn new(origin: Window, landing: RenderState, duration: Duration, link: FrameLink) -> Self {
        let target = landing.window();
        Self {
            start_curve: AnimationCurve::new(origin.start, target.start),
            min_curve: AnimationCurve::new(origin.minimum, target.minimum),
            max_curve: AnimationCurve::new(origin.maximum, target.maximum),
            duration,
            started_at: None,
            landing,
            link,
        }
    }

    pub fn origin(&self) -> Window {
        Window {
            start: self.start_curve.origin(),
            minimum: self.min_curve.origin(),
            maximum: self.max_curve.origin(),
        }
    }

    pub fn target(&self) -> Window {
        Window {
            start: self.start_curve.target(),
            minimum: self.min_curve.target(),
            maximum: self.max_curve.target(),
        }
    }

    /// Render state the transition ends on, with the unrounded start date.
    pub fn landing(&self) -> &RenderState { &self.landing }
    pub fn started_at(&self) -> Option<f64> { self.started_at }
    pub fn duration(&self) -> Duration { self.duration }
    pub fn link(&self) -> &FrameLink { &self.link }

    /// Window after `dt` seconds.
    pub fn sample(&self, dt: f64) -> Window {
        let d = self.duration.as_secs_f64();
        Window {
            start: self.start_curve.linear(dt, d),
            minimum: self.min_curve.linear(dt, d),
            maximum: self.max_curve.linear(dt, d),
        }
    }
}

#[derive(Debug, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Animating(Transition),
}

impl AnimationState {
    pub fn is_animating(&self) -> bool {
        matches!(self, AnimationState::Animating(_))
    }
}

/// What a frame callback did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No animation is running.
    Idle,
    /// First frame: the start timestamp was latched, nothing redrawn.
    Latched,
    /// Interpolated frame; more frames follow.
    Animating,
    /// Exact final frame; the frame link has been released.
    Finished,
}

/// Advance `transition` to `timestamp` (seconds). Returns the new render state, if any,
/// and whether the transition has completed.
pub(crate) fn step(
    transition: &mut Transition,
    state: &RenderState,
    timestamp: f64,
) -> (Option<RenderState>, FrameOutcome) {
    let Some(t0) = transition.started_at else {
        transition.started_at = Some(timestamp);
        return (None, FrameOutcome::Latched);
    };
    let duration = transition.duration.as_secs_f64();
    let dt = timestamp - t0;
    if dt >= duration {
        // epoch seconds drop sub-millisecond precision; land on the exact target instead
        return (Some(transition.landing.clone()), FrameOutcome::Finished);
    }
    (Some(state.with_window(transition.sample(dt))), FrameOutcome::Animating)
}
