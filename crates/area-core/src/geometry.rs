// File: crates/area-core/src/geometry.rs
// Summary: Plot rectangle and the closed area outline built from normalized values.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotRect {
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }
    /// Rect anchored at the origin, as a view's own bounds.
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::from_ltwh(0.0, 0.0, width, height)
    }
    pub fn right(&self) -> f32 { self.left + self.width }
    pub fn bottom(&self) -> f32 { self.top + self.height }
}

/// Polygon vertices for a filled area: `(left, bottom)`, one vertex per normalized value
/// spread evenly across the width, then `(right, bottom)`. The caller closes the path.
///
/// No values gives no outline. A single value spans the whole width at its height.
pub fn area_outline(norms: &[f64], rect: &PlotRect) -> Vec<(f32, f32)> {
    if norms.is_empty() {
        return Vec::new();
    }
    let bottom = rect.bottom();
    let y_of = |n: f64| -> f32 { bottom - (rect.height as f64 * n) as f32 };

    let mut pts = Vec::with_capacity(norms.len() + 3);
    pts.push((rect.left, bottom));
    if let [only] = norms {
        pts.push((rect.left, y_of(*only)));
        pts.push((rect.right(), y_of(*only)));
    } else {
        let last = (norms.len() - 1) as f64;
        for (i, &n) in norms.iter().enumerate() {
            let x = rect.left + (rect.width as f64 * i as f64 / last) as f32;
            pts.push((x, y_of(n)));
        }
    }
    pts.push((rect.right(), bottom));
    pts
}
