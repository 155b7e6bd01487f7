// File: crates/area-core/src/quote.rs
// Summary: Quote sample and the displayed quote model.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

/// A timestamped closing price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quote {
    pub date: DateTime<Utc>,
    pub close: f64,
}

impl Quote {
    pub fn new(date: DateTime<Utc>, close: f64) -> Self {
        Self { date, close }
    }

    /// Build a quote from epoch seconds. Returns `None` when out of chrono's range.
    pub fn from_epoch(secs: i64, close: f64) -> Option<Self> {
        let date = Utc.timestamp_opt(secs, 0).single()?;
        Some(Self { date, close })
    }

    /// True when this quote belongs to the window starting at `start`.
    #[inline]
    pub fn is_visible_from(&self, start: DateTime<Utc>) -> bool {
        self.date >= start
    }
}

/// Ordered quotes currently shown by a view. Replaced wholesale on update.
#[derive(Clone, Debug)]
pub struct Model {
    pub values: Arc<[Quote]>,
}

impl Model {
    pub fn new(values: impl Into<Arc<[Quote]>>) -> Self {
        Self { values: values.into() }
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Earliest and latest dates, if any quotes are present.
    pub fn date_span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.values.iter().map(|q| q.date).min()?;
        let last = self.values.iter().map(|q| q.date).max()?;
        Some((first, last))
    }
}

/// Seconds since the epoch with millisecond precision, as used by the start-date curve.
#[inline]
pub fn to_epoch_seconds(date: DateTime<Utc>) -> f64 {
    date.timestamp_millis() as f64 / 1000.0
}

/// Inverse of [`to_epoch_seconds`]; `None` if the value is outside chrono's range.
pub fn from_epoch_seconds(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() { return None; }
    Utc.timestamp_millis_opt((secs * 1000.0).round() as i64).single()
}
