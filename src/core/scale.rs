use crate::error::{ChartError, ChartResult};

/// Linear mapping from a domain onto `[0, extent_px]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Step axis covering indices `0..=last`, where `last` is the larger of
    /// `len - 1` and `max_steps`, and at least `1`.
    pub fn for_steps(len: usize, max_steps: Option<usize>) -> ChartResult<Self> {
        let last = len
            .saturating_sub(1)
            .max(max_steps.unwrap_or(0))
            .max(1);
        Self::new(0.0, last as f64)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, extent_px: f64) -> ChartResult<f64> {
        validate_extent(extent_px)?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * extent_px)
    }
}

fn validate_extent(extent_px: f64) -> ChartResult<()> {
    if !extent_px.is_finite() || extent_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "pixel extent must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_axis_takes_the_wider_bound() {
        assert_eq!(LinearScale::for_steps(6, None).expect("scale").domain(), (0.0, 5.0));
        assert_eq!(
            LinearScale::for_steps(6, Some(20)).expect("scale").domain(),
            (0.0, 20.0)
        );
        assert_eq!(
            LinearScale::for_steps(6, Some(3)).expect("scale").domain(),
            (0.0, 5.0)
        );
        assert_eq!(LinearScale::for_steps(1, None).expect("scale").domain(), (0.0, 1.0));
    }

    #[test]
    fn maps_domain_onto_pixel_extent() {
        let scale = LinearScale::new(0.0, 50.0).expect("scale");
        let px = scale.domain_to_pixel(12.5, 800.0).expect("to pixel");
        assert!((px - 200.0).abs() <= 1e-9);
        assert!(scale.domain_to_pixel(1.0, 0.0).is_err());
        assert!(LinearScale::new(3.0, 3.0).is_err());
    }
}
