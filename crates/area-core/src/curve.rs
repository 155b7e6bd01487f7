// File: crates/area-core/src/curve.rs
// Summary: Linear origin -> target interpolation over a fixed duration.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationCurve {
    origin: f64,
    target: f64,
}

impl AnimationCurve {
    pub const fn new(origin: f64, target: f64) -> Self {
        Self { origin, target }
    }

    pub fn origin(&self) -> f64 { self.origin }
    pub fn target(&self) -> f64 { self.target }

    /// Value after `dt` of `duration` (same units). The fraction is clamped to `[0, 1]`,
    /// so the curve never extrapolates. A non-positive duration jumps to the target.
    pub fn linear(&self, dt: f64, duration: f64) -> f64 {
        if duration <= 0.0 {
            return self.target;
        }
        let r = (dt / duration).clamp(0.0, 1.0);
        self.origin + r * (self.target - self.origin)
    }
}
