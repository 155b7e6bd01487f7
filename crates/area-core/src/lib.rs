// File: crates/area-core/src/lib.rs
// Summary: Core library entry point; quote model, window animation and area rendering.

pub mod quote;
pub mod range;
pub mod normalize;
pub mod curve;
pub mod frame;
pub mod animation;
pub mod geometry;
pub mod style;
pub mod render;
pub mod view;
pub mod types;
pub mod error;

pub use quote::{Model, Quote};
pub use range::RangeCalculator;
pub use normalize::Normalizer;
pub use curve::AnimationCurve;
pub use frame::{FrameLink, FrameScheduler};
pub use animation::{AnimationState, FrameOutcome, RenderState, Window};
pub use geometry::PlotRect;
pub use style::AreaStyle;
pub use render::RenderOptions;
pub use view::AreaView;
pub use error::ChartError;
