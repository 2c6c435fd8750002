mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    AreaPrimitive, Color, GradientStop, LinePrimitive, LineStrokeStyle, PolylinePrimitive,
    TextHAlign, TextPrimitive, VerticalGradient,
};

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code never
/// sees series data, domains or label rules.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
