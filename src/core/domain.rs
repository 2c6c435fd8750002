use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Step;
use crate::error::{ChartError, ChartResult};

/// Closed value interval used for vertical scaling.
///
/// Hand-built domains may be degenerate or inverted. Domains returned by
/// [`compute_domain`] always contain the reference value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// True for empty, inverted, NaN-bounded or infinitely wide domains.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.max > self.min) || !self.span().is_finite()
    }

    /// Maps a value to a top-down pixel offset inside `height_px`.
    ///
    /// `max` lands on `0`, `min` lands on `height_px`.
    pub fn value_to_pixel(self, value: f64, height_px: f64) -> ChartResult<f64> {
        if self.is_degenerate() {
            return Err(ChartError::InvalidData(
                "value domain must be finite with max > min".to_owned(),
            ));
        }
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        if !height_px.is_finite() || height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "pixel height must be finite and > 0".to_owned(),
            ));
        }

        Ok((self.max - value) / self.span() * height_px)
    }
}

/// Padding controls for [`compute_domain_tuned`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainTuning {
    /// Fraction of the raw spread added on each side.
    pub padding_ratio: f64,
    /// Absolute padding used when the raw spread yields zero padding.
    pub flat_padding: f64,
}

impl Default for DomainTuning {
    fn default() -> Self {
        Self {
            padding_ratio: 0.05,
            flat_padding: 100.0,
        }
    }
}

impl DomainTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.padding_ratio.is_finite() || self.padding_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "domain padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.flat_padding.is_finite() || self.flat_padding <= 0.0 {
            return Err(ChartError::InvalidData(
                "domain flat padding must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Computes the padded display domain for `series` with default tuning.
pub fn compute_domain(series: &[Step], reference: f64) -> ChartResult<ValueDomain> {
    compute_domain_tuned(series, reference, DomainTuning::default())
}

/// Computes the padded display domain for `series`.
///
/// `reference` joins the min/max pool before padding, so the returned domain
/// always contains it. A flat pool falls back to `tuning.flat_padding`.
/// Padding shrinks and bounds saturate at `±f64::MAX` so the span stays
/// finite; pools that still cannot form a non-empty finite domain are rejected
/// with `InvalidInput`.
pub fn compute_domain_tuned(
    series: &[Step],
    reference: f64,
    tuning: DomainTuning,
) -> ChartResult<ValueDomain> {
    let tuning = tuning.validate()?;
    if series.is_empty() {
        return Err(ChartError::InvalidInput(
            "domain cannot be computed from an empty series".to_owned(),
        ));
    }
    if !reference.is_finite() {
        return Err(ChartError::InvalidInput(
            "reference value must be finite".to_owned(),
        ));
    }

    let mut raw_min = reference;
    let mut raw_max = reference;
    for step in series {
        if !step.value.is_finite() {
            return Err(ChartError::InvalidInput(format!(
                "step {} value must be finite",
                step.index
            )));
        }
        raw_min = raw_min.min(step.value);
        raw_max = raw_max.max(step.value);
    }

    let spread = raw_max - raw_min;
    if !spread.is_finite() {
        return Err(ChartError::InvalidInput(format!(
            "value range [{raw_min}, {raw_max}] is wider than f64 can represent"
        )));
    }

    // Scaling each bound first keeps the product from overflowing.
    let mut padding = raw_max * tuning.padding_ratio - raw_min * tuning.padding_ratio;
    if padding == 0.0 {
        trace!(raw_min, raw_max, "flat value pool, using fallback padding");
        padding = tuning.flat_padding;
    }
    // The padded span must stay finite for pixel and split math.
    padding = padding.min((f64::MAX - spread) * 0.49);

    let domain = ValueDomain {
        min: (raw_min - padding).max(f64::MIN),
        max: (raw_max + padding).min(f64::MAX),
    };
    if domain.is_degenerate() {
        return Err(ChartError::InvalidInput(format!(
            "value range [{raw_min}, {raw_max}] cannot be padded into a finite domain"
        )));
    }

    Ok(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ratio_falls_back_to_flat_padding() {
        let series = [Step::new(0, 10.0), Step::new(1, 20.0)];
        let tuning = DomainTuning {
            padding_ratio: 0.0,
            flat_padding: 5.0,
        };
        let domain = compute_domain_tuned(&series, 15.0, tuning).expect("domain");
        assert_eq!(domain, ValueDomain::new(5.0, 25.0));
    }

    #[test]
    fn rejects_invalid_tuning() {
        let series = [Step::new(0, 1.0)];
        let tuning = DomainTuning {
            padding_ratio: -0.1,
            flat_padding: 100.0,
        };
        assert!(compute_domain_tuned(&series, 1.0, tuning).is_err());

        let tuning = DomainTuning {
            padding_ratio: 0.05,
            flat_padding: 0.0,
        };
        assert!(compute_domain_tuned(&series, 1.0, tuning).is_err());
    }

    #[test]
    fn degenerate_domains_are_detected() {
        assert!(ValueDomain::new(f64::NAN, 1.0).is_degenerate());
        assert!(ValueDomain::new(2.0, 2.0).is_degenerate());
        assert!(ValueDomain::new(f64::NEG_INFINITY, 0.0).is_degenerate());
        assert!(ValueDomain::new(-f64::MAX, f64::MAX).is_degenerate());
        assert!(!ValueDomain::new(1.0, 2.0).is_degenerate());
    }
}
