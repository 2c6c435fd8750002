use tracing::debug;

use crate::core::{
    LabelDecision, LabelOffset, LinearScale, Step, compute_domain_tuned, compute_split_fraction,
    label_series, project_area_geometry, validate_series,
};
use crate::error::ChartResult;
use crate::render::{
    AreaPrimitive, LinePrimitive, LineStrokeStyle, PolylinePrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive, VerticalGradient,
};

use super::{BalanceChartConfig, ChartSnapshot, format_label_value};

/// Stateless render pass over a balance series.
///
/// Nothing about the series is retained between calls; every frame is derived
/// from the series and reference value passed in.
pub struct BalanceChart<R: Renderer> {
    renderer: R,
    config: BalanceChartConfig,
}

impl<R: Renderer> BalanceChart<R> {
    pub fn new(renderer: R, config: BalanceChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> &BalanceChartConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Computes domain, split fraction and label decisions for `series`.
    pub fn snapshot(&self, series: &[Step], reference: f64) -> ChartResult<ChartSnapshot> {
        validate_series(series)?;
        let domain = compute_domain_tuned(series, reference, self.config.domain)?;
        Ok(ChartSnapshot {
            reference,
            step_count: series.len(),
            domain,
            split_fraction: compute_split_fraction(domain, reference),
            decisions: label_series(series, reference),
        })
    }

    pub fn build_frame(&self, series: &[Step], reference: f64) -> ChartResult<RenderFrame> {
        let snapshot = self.snapshot(series, reference)?;
        self.frame_from_snapshot(series, &snapshot)
    }

    /// Builds the frame, hands it to the renderer and returns the values it
    /// was built from.
    pub fn render(&mut self, series: &[Step], reference: f64) -> ChartResult<ChartSnapshot> {
        let snapshot = self.snapshot(series, reference)?;
        let frame = self.frame_from_snapshot(series, &snapshot)?;
        debug!(
            steps = snapshot.step_count,
            labels = frame.texts.len(),
            split_fraction = snapshot.split_fraction,
            "render balance chart"
        );
        self.renderer.render(&frame)?;
        Ok(snapshot)
    }

    fn frame_from_snapshot(
        &self,
        series: &[Step],
        snapshot: &ChartSnapshot,
    ) -> ChartResult<RenderFrame> {
        let viewport = self.config.viewport;
        let style = self.config.style;
        let step_scale = LinearScale::for_steps(series.len(), self.config.max_steps)?;
        let geometry = project_area_geometry(series, step_scale, snapshot.domain, viewport)?;

        let fill = VerticalGradient::split(
            snapshot.split_fraction,
            style.profit_color.with_alpha(style.fill_alpha),
            style.loss_color.with_alpha(style.fill_alpha),
        );
        let stroke = VerticalGradient::split(
            snapshot.split_fraction,
            style.profit_color,
            style.loss_color,
        );

        let mut frame = RenderFrame::new(viewport)
            .with_area(AreaPrimitive {
                polygon: geometry.fill_polygon,
                fill,
            })
            .with_polyline(PolylinePrimitive {
                points: geometry.line_points.clone(),
                stroke_width: style.stroke_width,
                stroke,
            });

        if style.show_reference_line {
            let y = snapshot
                .domain
                .value_to_pixel(snapshot.reference, f64::from(viewport.height))?;
            frame = frame.with_line(
                LinePrimitive::new(
                    0.0,
                    y,
                    f64::from(viewport.width),
                    y,
                    style.reference_line_width,
                    style.reference_line_color,
                )
                .with_stroke_style(LineStrokeStyle::Dashed),
            );
        }

        let labels = &self.config.labels;
        let width = f64::from(viewport.width);
        for (decision, point) in snapshot.decisions.iter().zip(&geometry.line_points) {
            let LabelDecision::Show(label) = *decision else {
                continue;
            };
            let y = match label.offset() {
                LabelOffset::Above => point.y - labels.peak_offset_px,
                LabelOffset::Below => point.y + labels.trough_offset_px,
            };
            frame = frame.with_text(TextPrimitive::new(
                format_label_value(label.value, labels),
                point.x,
                y,
                labels.font_size_px,
                labels.color_for(label.is_above_reference),
                edge_alignment(point.x, width),
            ));
        }

        Ok(frame)
    }
}

/// Labels on the viewport edges grow inward instead of being clipped.
fn edge_alignment(x: f64, width: f64) -> TextHAlign {
    if x <= 0.0 {
        TextHAlign::Left
    } else if x >= width {
        TextHAlign::Right
    } else {
        TextHAlign::Center
    }
}
