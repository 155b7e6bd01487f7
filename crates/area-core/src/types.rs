// File: crates/area-core/src/types.rs
// Summary: Shared constants (default surface size).

/// Default surface width in pixels.
pub const WIDTH: i32 = 640;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 320;
