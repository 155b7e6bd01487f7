// File: crates/area-core/src/error.rs
// Summary: Error taxonomy for window computation and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Every visible close sits at the same value, so `max - min == 0`.
    #[error("flat price range at {value}; cannot normalize")]
    FlatRange { value: f64 },
    #[error("no quotes at or after the window start")]
    EmptyWindow,
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
