// File: crates/area-core/src/view.rs
// Summary: Area view controller: snaps or animates the visible window and draws the area.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use skia_safe as skia;

use crate::animation::{self, AnimationState, FrameOutcome, RenderState, Transition, Window};
use crate::frame::FrameScheduler;
use crate::geometry::PlotRect;
use crate::quote::{to_epoch_seconds, Quote};
use crate::render::draw_area;
use crate::style::AreaStyle;

/// Default transition length.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(1);

pub struct AreaView {
    pub style: AreaStyle,
    scheduler: FrameScheduler,
    state: Option<RenderState>,
    animation: AnimationState,
    duration: Duration,
    needs_display: bool,
}

impl AreaView {
    pub fn new(scheduler: FrameScheduler) -> Self {
        Self {
            style: AreaStyle::default(),
            scheduler,
            state: None,
            animation: AnimationState::Idle,
            duration: DEFAULT_DURATION,
            needs_display: false,
        }
    }

    pub fn with_style(mut self, style: AreaStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn duration(&self) -> Duration { self.duration }
    pub fn render_state(&self) -> Option<&RenderState> { self.state.as_ref() }
    pub fn animation(&self) -> &AnimationState { &self.animation }
    pub fn is_animating(&self) -> bool { self.animation.is_animating() }
    pub fn scheduler(&self) -> &FrameScheduler { &self.scheduler }

    /// Replace the displayed quotes and move the window to `start_from`.
    ///
    /// With `animated` and data already on screen, the window start/min/max glide from
    /// what is currently shown to the new window over [`AreaView::duration`]. A call that
    /// lands mid-animation cancels the running transition and starts from the window
    /// currently on screen. Otherwise the new window is applied at once.
    pub fn set_values(&mut self, values: impl Into<Arc<[Quote]>>, animated: bool, start_from: DateTime<Utc>) {
        let values: Arc<[Quote]> = values.into();
        let target = RenderState::snapped(Arc::clone(&values), start_from);

        // Dropping the previous state releases any in-flight frame link.
        let previous = std::mem::take(&mut self.animation);
        if previous.is_animating() {
            log::debug!("set_values during animation; cancelling running transition");
        }
        drop(previous);

        let on_screen = self.state.as_ref().map(|s| (s.window(), s.start));
        match on_screen {
            Some((origin, shown_start)) if animated => {
                let goal = target.window();
                log::debug!(
                    "animating window start {:.0}->{:.0} min {}->{} max {}->{} over {:?}",
                    origin.start, goal.start, origin.minimum, goal.minimum,
                    origin.maximum, goal.maximum, self.duration,
                );
                let link = self.scheduler.subscribe();
                self.animation = AnimationState::Animating(Transition::new(origin, target, self.duration, link));
                // The new quotes are shown through the window currently on screen.
                self.state = Some(RenderState {
                    values,
                    start: shown_start,
                    minimum: origin.minimum,
                    maximum: origin.maximum,
                });
            }
            _ => {
                log::debug!(
                    "snapping window to {start_from} (min {}, max {})",
                    target.minimum, target.maximum
                );
                self.state = Some(target);
            }
        }
        self.needs_display = true;
    }

    /// Per-frame callback; `timestamp` is the host frame time in seconds.
    pub fn on_frame(&mut self, timestamp: f64) -> FrameOutcome {
        let (Some(state), AnimationState::Animating(transition)) = (self.state.as_ref(), &mut self.animation) else {
            return FrameOutcome::Idle;
        };
        let (next, outcome) = animation::step(transition, state, timestamp);
        if let Some(next) = next {
            self.state = Some(next);
            self.needs_display = true;
        }
        if outcome == FrameOutcome::Finished {
            // releases the frame link
            self.animation = AnimationState::Idle;
            log::debug!("window animation finished at {timestamp:.3}");
        }
        outcome
    }

    /// Window currently on screen, if any data is set.
    pub fn window(&self) -> Option<Window> {
        self.state.as_ref().map(RenderState::window)
    }

    /// Start of the visible window as epoch seconds.
    pub fn start_seconds(&self) -> Option<f64> {
        self.state.as_ref().map(|s| to_epoch_seconds(s.start))
    }

    pub fn needs_display(&self) -> bool { self.needs_display }

    /// Read and clear the redraw request.
    pub fn take_needs_display(&mut self) -> bool {
        std::mem::replace(&mut self.needs_display, false)
    }

    /// Draw the area into `rect`. Does nothing until values have been set.
    pub fn draw(&self, canvas: &skia::Canvas, rect: &PlotRect) {
        let Some(state) = self.state.as_ref() else { return };
        draw_area(canvas, state, &self.style, rect);
    }
}
