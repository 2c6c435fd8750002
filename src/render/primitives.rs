use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::AreaVertex;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Top-to-bottom gradient over the plot height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalGradient {
    pub stops: SmallVec<[GradientStop; 4]>,
}

impl VerticalGradient {
    /// Hard two-color split at `fraction`: `above` from the top down to the
    /// split, `below` from the split to the bottom.
    ///
    /// Two stops share the split offset, so there is no blend band.
    #[must_use]
    pub fn split(fraction: f64, above: Color, below: Color) -> Self {
        let offset = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        Self {
            stops: smallvec![
                GradientStop { offset: 0.0, color: above },
                GradientStop { offset, color: above },
                GradientStop { offset, color: below },
                GradientStop { offset: 1.0, color: below },
            ],
        }
    }

    /// Color in effect at `offset`; exactly at a split the lower color wins.
    #[must_use]
    pub fn color_at(&self, offset: f64) -> Option<Color> {
        self.stops
            .iter()
            .rev()
            .find(|stop| stop.offset <= offset)
            .or_else(|| self.stops.first())
            .map(|stop| stop.color)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.stops.len() < 2 {
            return Err(ChartError::InvalidData(
                "gradient needs at least two stops".to_owned(),
            ));
        }
        let mut previous = 0.0;
        for stop in &self.stops {
            if !stop.offset.is_finite() || !(0.0..=1.0).contains(&stop.offset) {
                return Err(ChartError::InvalidData(
                    "gradient stop offset must be finite and in [0, 1]".to_owned(),
                ));
            }
            if stop.offset < previous {
                return Err(ChartError::InvalidData(
                    "gradient stop offsets must be non-decreasing".to_owned(),
                ));
            }
            previous = stop.offset;
            stop.color.validate()?;
        }
        Ok(())
    }
}

/// Closed polygon filled with a vertical gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaPrimitive {
    pub polygon: Vec<AreaVertex>,
    pub fill: VerticalGradient,
}

impl AreaPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        validate_vertices(&self.polygon, "area")?;
        self.fill.validate()
    }
}

/// Open polyline stroked with a vertical gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePrimitive {
    pub points: Vec<AreaVertex>,
    pub stroke_width: f64,
    pub stroke: VerticalGradient,
}

impl PolylinePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        validate_vertices(&self.points, "polyline")?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "polyline stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke.validate()
    }
}

fn validate_vertices(vertices: &[AreaVertex], kind: &str) -> ChartResult<()> {
    if vertices.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "{kind} vertices must be finite"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    Solid,
    Dashed,
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
///
/// `y` is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
