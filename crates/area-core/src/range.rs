// File: crates/area-core/src/range.rs
// Summary: Visible min/max scan over quotes at or after a start date.

use chrono::{DateTime, Utc};

use crate::quote::Quote;

/// Minimum reported when the window is empty.
pub const EMPTY_MINIMUM: f64 = 999_999_999_999.0;
/// Maximum reported when the window is empty.
pub const EMPTY_MAXIMUM: f64 = 0.0;

/// Running min/max of closes for the window starting at `start`.
///
/// An empty window keeps the sentinel pair (`EMPTY_MINIMUM`, `EMPTY_MAXIMUM`),
/// so `min() > max()`; check [`RangeCalculator::is_empty`] before trusting it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeCalculator {
    start: DateTime<Utc>,
    minimum: f64,
    maximum: f64,
    visible: usize,
}

impl RangeCalculator {
    pub fn new(values: &[Quote], start: DateTime<Utc>) -> Self {
        let mut minimum = EMPTY_MINIMUM;
        let mut maximum = EMPTY_MAXIMUM;
        let mut visible = 0usize;
        for q in values.iter().filter(|q| q.is_visible_from(start)) {
            if q.close > maximum { maximum = q.close; }
            if q.close < minimum { minimum = q.close; }
            visible += 1;
        }
        Self { start, minimum, maximum, visible }
    }

    pub fn min(&self) -> f64 { self.minimum }
    pub fn max(&self) -> f64 { self.maximum }
    pub fn start(&self) -> DateTime<Utc> { self.start }
    pub fn visible_count(&self) -> usize { self.visible }
    pub fn is_empty(&self) -> bool { self.visible == 0 }
}
