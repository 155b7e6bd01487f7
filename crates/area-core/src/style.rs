// File: crates/area-core/src/style.rs
// Summary: Fill/stroke styling for the area view, with a few named presets.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaStyle {
    pub name: &'static str,
    pub fill: skia::Color,
    pub stroke: skia::Color,
    pub stroke_width: f32,
}

impl Default for AreaStyle {
    /// Black fill and stroke.
    fn default() -> Self { Self::mono() }
}

impl AreaStyle {
    pub fn mono() -> Self {
        Self {
            name: "mono",
            fill: skia::Color::BLACK,
            stroke: skia::Color::BLACK,
            stroke_width: 1.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            fill: skia::Color::from_argb(96, 64, 160, 255),
            stroke: skia::Color::from_argb(255, 64, 160, 255),
            stroke_width: 2.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            fill: skia::Color::from_argb(80, 32, 120, 200),
            stroke: skia::Color::from_argb(255, 32, 120, 200),
            stroke_width: 2.0,
        }
    }

    pub fn solarized() -> Self {
        Self {
            name: "solarized",
            fill: skia::Color::from_argb(96, 0x26, 0x8b, 0xd2),   // blue
            stroke: skia::Color::from_argb(255, 0x2a, 0xa1, 0x98), // cyan
            stroke_width: 1.5,
        }
    }

    pub fn with_fill(mut self, fill: skia::Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: skia::Color) -> Self {
        self.stroke = stroke;
        self
    }
}

/// Return the built-in presets.
pub fn presets() -> Vec<AreaStyle> {
    vec![AreaStyle::mono(), AreaStyle::dark(), AreaStyle::light(), AreaStyle::solarized()]
}

/// Find a preset by `name`, falling back to mono.
pub fn find(name: &str) -> AreaStyle {
    for s in presets() { if s.name.eq_ignore_ascii_case(name) { return s; } }
    AreaStyle::mono()
}
