// File: crates/area-core/src/normalize.rs
// Summary: Maps visible closes into [0, 1] against a min/max pair.

use chrono::{DateTime, Utc};

use crate::error::ChartError;
use crate::quote::Quote;

/// Span below which a range is treated as flat.
pub const FLAT_EPSILON: f64 = 1e-12;

pub struct Normalizer<'a> {
    values: &'a [Quote],
    start: DateTime<Utc>,
    minimum: f64,
    maximum: f64,
}

impl<'a> Normalizer<'a> {
    pub fn new(values: &'a [Quote], start: DateTime<Utc>, min: f64, max: f64) -> Self {
        Self { values, start, minimum: min, maximum: max }
    }

    /// `(close - min) / (max - min)` for every quote at or after `start`, in order.
    ///
    /// Values outside `[min, max]` map outside `[0, 1]`; that happens mid-animation
    /// while the window is still moving toward the data. A window without quotes is
    /// [`ChartError::EmptyWindow`].
    pub fn norms(&self) -> Result<Vec<f64>, ChartError> {
        if self.visible().next().is_none() {
            return Err(ChartError::EmptyWindow);
        }
        let span = self.maximum - self.minimum;
        if span.abs() < FLAT_EPSILON {
            return Err(ChartError::FlatRange { value: self.minimum });
        }
        Ok(self
            .visible()
            .map(|q| (q.close - self.minimum) / span)
            .collect())
    }

    /// Number of quotes the window covers.
    pub fn visible_len(&self) -> usize {
        self.visible().count()
    }

    /// Inverse mapping of a normalized value back into price units.
    pub fn denormalize(&self, norm: f64) -> f64 {
        self.minimum + norm * (self.maximum - self.minimum)
    }

    fn visible(&self) -> impl Iterator<Item = &'a Quote> + '_ {
        let (values, start): (&'a [Quote], _) = (self.values, self.start);
        values.iter().filter(move |q| q.is_visible_from(start))
    }
}
