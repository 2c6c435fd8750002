use serde::{Deserialize, Serialize};

use crate::core::{DomainTuning, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

const PROFIT_GREEN: Color = Color::rgb(0.063, 0.725, 0.506);
const LOSS_RED: Color = Color::rgb(0.937, 0.267, 0.267);
const REFERENCE_GRAY: Color = Color::rgba(0.58, 0.64, 0.72, 0.8);

/// Area and stroke styling for the two-tone split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    #[serde(default = "default_profit_color")]
    pub profit_color: Color,
    #[serde(default = "default_loss_color")]
    pub loss_color: Color,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_fill_alpha")]
    pub fill_alpha: f64,
    #[serde(default = "default_show_reference_line")]
    pub show_reference_line: bool,
    #[serde(default = "default_reference_line_color")]
    pub reference_line_color: Color,
    #[serde(default = "default_reference_line_width")]
    pub reference_line_width: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            profit_color: default_profit_color(),
            loss_color: default_loss_color(),
            stroke_width: default_stroke_width(),
            fill_alpha: default_fill_alpha(),
            show_reference_line: default_show_reference_line(),
            reference_line_color: default_reference_line_color(),
            reference_line_width: default_reference_line_width(),
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> ChartResult<Self> {
        self.profit_color.validate()?;
        self.loss_color.validate()?;
        self.reference_line_color.validate()?;
        for (value, name) in [
            (self.stroke_width, "stroke_width"),
            (self.reference_line_width, "reference_line_width"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "chart style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.fill_alpha.is_finite() || !(0.0..=1.0).contains(&self.fill_alpha) {
            return Err(ChartError::InvalidData(
                "chart style `fill_alpha` must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Presentation policy for extremum labels.
///
/// Color follows the point's side of the reference value, offset follows
/// peak vs. trough. Offsets are distances in pixels from the point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    #[serde(default = "default_profit_color")]
    pub profit_color: Color,
    #[serde(default = "default_loss_color")]
    pub loss_color: Color,
    #[serde(default = "default_peak_offset_px")]
    pub peak_offset_px: f64,
    #[serde(default = "default_trough_offset_px")]
    pub trough_offset_px: f64,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    #[serde(default = "default_value_prefix")]
    pub value_prefix: String,
    #[serde(default)]
    pub value_decimals: usize,
    #[serde(default = "default_group_thousands")]
    pub group_thousands: bool,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            profit_color: default_profit_color(),
            loss_color: default_loss_color(),
            peak_offset_px: default_peak_offset_px(),
            trough_offset_px: default_trough_offset_px(),
            font_size_px: default_font_size_px(),
            value_prefix: default_value_prefix(),
            value_decimals: 0,
            group_thousands: default_group_thousands(),
        }
    }
}

impl LabelStyle {
    pub fn validate(&self) -> ChartResult<()> {
        self.profit_color.validate()?;
        self.loss_color.validate()?;
        for (value, name) in [
            (self.peak_offset_px, "peak_offset_px"),
            (self.trough_offset_px, "trough_offset_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "label style `{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "label style `font_size_px` must be finite and > 0".to_owned(),
            ));
        }
        if self.value_decimals > 8 {
            return Err(ChartError::InvalidData(
                "label style `value_decimals` must be <= 8".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn color_for(&self, is_above_reference: bool) -> Color {
        if is_above_reference {
            self.profit_color
        } else {
            self.loss_color
        }
    }
}

/// Bootstrap configuration for [`super::BalanceChart`].
///
/// Serializable so hosts can keep chart setup next to their own settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceChartConfig {
    pub viewport: Viewport,
    /// Horizontal axis bound; only widens the step axis, never narrows it.
    #[serde(default)]
    pub max_steps: Option<usize>,
    #[serde(default)]
    pub style: ChartStyle,
    #[serde(default)]
    pub labels: LabelStyle,
    #[serde(default)]
    pub domain: DomainTuning,
}

impl BalanceChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            max_steps: None,
            style: ChartStyle::default(),
            labels: LabelStyle::default(),
            domain: DomainTuning::default(),
        }
    }

    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: LabelStyle) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_domain_tuning(mut self, domain: DomainTuning) -> Self {
        self.domain = domain;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.style.validate()?;
        self.labels.validate()?;
        self.domain.validate()?;
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }
}

fn default_profit_color() -> Color {
    PROFIT_GREEN
}

fn default_loss_color() -> Color {
    LOSS_RED
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_fill_alpha() -> f64 {
    0.3
}

fn default_show_reference_line() -> bool {
    true
}

fn default_reference_line_color() -> Color {
    REFERENCE_GRAY
}

fn default_reference_line_width() -> f64 {
    1.0
}

fn default_peak_offset_px() -> f64 {
    10.0
}

fn default_trough_offset_px() -> f64 {
    18.0
}

fn default_font_size_px() -> f64 {
    11.0
}

fn default_value_prefix() -> String {
    "$".to_owned()
}

fn default_group_thousands() -> bool {
    true
}
