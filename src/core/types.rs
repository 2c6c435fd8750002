use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One observation of the running balance.
///
/// `metadata` carries whatever the simulation attached to the step (outcome,
/// net change, ...). It is never read by the chart and round-trips through
/// serde as extra keys next to `index` and `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub index: usize,
    pub value: f64,
    #[serde(flatten)]
    pub metadata: IndexMap<String, Value>,
}

impl Step {
    #[must_use]
    pub fn new(index: usize, value: f64) -> Self {
        Self {
            index,
            value,
            metadata: IndexMap::new(),
        }
    }

    pub fn from_decimal(index: usize, value: Decimal) -> ChartResult<Self> {
        let value = value.to_f64().ok_or_else(|| {
            ChartError::InvalidData(format!("step {index} value cannot be represented as f64"))
        })?;
        Ok(Self::new(index, value))
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Builds a contiguous series from raw values, indexing from zero.
#[must_use]
pub fn series_from_values(values: &[f64]) -> Vec<Step> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| Step::new(index, *value))
        .collect()
}

/// Checks the series shape expected by the render pass: non-empty, 0-based
/// contiguous indices and finite values.
pub fn validate_series(series: &[Step]) -> ChartResult<()> {
    if series.is_empty() {
        return Err(ChartError::InvalidInput(
            "series must contain at least one step".to_owned(),
        ));
    }

    for (position, step) in series.iter().enumerate() {
        if step.index != position {
            return Err(ChartError::InvalidInput(format!(
                "step indices must be contiguous from 0: expected {position}, found {}",
                step.index
            )));
        }
        if !step.value.is_finite() {
            return Err(ChartError::InvalidInput(format!(
                "step {position} value must be finite"
            )));
        }
    }

    Ok(())
}
