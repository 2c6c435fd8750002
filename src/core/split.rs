use tracing::trace;

use crate::core::ValueDomain;

/// Position of `reference` inside `domain`, measured from the top (`max`) down.
///
/// Returns `0` when the whole domain sits at or below the reference and `1`
/// when it sits at or above it. Degenerate domains and a NaN reference map to
/// `0` so the result is always in `[0, 1]`.
#[must_use]
pub fn compute_split_fraction(domain: ValueDomain, reference: f64) -> f64 {
    if domain.is_degenerate() {
        trace!(
            min = domain.min,
            max = domain.max,
            "degenerate domain, split at top"
        );
        return 0.0;
    }
    if reference.is_nan() {
        trace!("nan reference, split at top");
        return 0.0;
    }
    if reference >= domain.max {
        return 0.0;
    }
    if reference <= domain.min {
        return 1.0;
    }

    (domain.max - reference) / (domain.max - domain.min)
}
