use serde::{Deserialize, Serialize};

use crate::core::Step;

/// Why a point earned a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPosition {
    Peak,
    Trough,
    Last,
}

/// Vertical side of the point the label is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelOffset {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLabel {
    pub index: usize,
    pub value: f64,
    pub position: LabelPosition,
    pub is_peak: bool,
    pub is_trough: bool,
    pub is_last: bool,
    pub is_above_reference: bool,
}

impl PointLabel {
    /// Peaks point up; troughs, ties resolved as troughs and last-only
    /// points point down.
    #[must_use]
    pub fn offset(self) -> LabelOffset {
        if self.is_peak {
            LabelOffset::Above
        } else {
            LabelOffset::Below
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LabelDecision {
    Hidden,
    Show(PointLabel),
}

impl LabelDecision {
    #[must_use]
    pub fn is_shown(self) -> bool {
        matches!(self, Self::Show(_))
    }

    #[must_use]
    pub fn label(self) -> Option<PointLabel> {
        match self {
            Self::Show(label) => Some(label),
            Self::Hidden => None,
        }
    }

    #[must_use]
    pub fn offset(self) -> Option<LabelOffset> {
        self.label().map(PointLabel::offset)
    }
}

/// Decides whether the point at `index` gets a value label.
///
/// Looks only at `index - 1`, `index` and `index + 1`. A missing neighbour
/// satisfies both comparisons, so endpoints are always peak or trough.
/// Out-of-range indices are `Hidden`.
#[must_use]
pub fn label_for(series: &[Step], index: usize, reference: f64) -> LabelDecision {
    let Some(curr) = series.get(index) else {
        return LabelDecision::Hidden;
    };
    let prev = index.checked_sub(1).and_then(|i| series.get(i));
    let next = series.get(index + 1);

    decide(
        index,
        prev.map(|step| step.value),
        curr.value,
        next.map(|step| step.value),
        reference,
    )
}

/// Label decisions for every index in one sliding-window pass.
///
/// Produces exactly what calling [`label_for`] per index would.
#[must_use]
pub fn label_series(series: &[Step], reference: f64) -> Vec<LabelDecision> {
    #[cfg(feature = "parallel-labels")]
    {
        use rayon::prelude::*;

        return (0..series.len())
            .into_par_iter()
            .map(|index| label_for(series, index, reference))
            .collect();
    }

    #[cfg(not(feature = "parallel-labels"))]
    {
        let mut decisions = Vec::with_capacity(series.len());
        let mut prev = None;
        for (index, step) in series.iter().enumerate() {
            let next = series.get(index + 1).map(|step| step.value);
            decisions.push(decide(index, prev, step.value, next, reference));
            prev = Some(step.value);
        }
        decisions
    }
}

fn decide(
    index: usize,
    prev: Option<f64>,
    curr: f64,
    next: Option<f64>,
    reference: f64,
) -> LabelDecision {
    let is_peak = prev.is_none_or(|p| curr >= p) && next.is_none_or(|n| curr >= n);
    let is_trough = prev.is_none_or(|p| curr <= p) && next.is_none_or(|n| curr <= n);
    let is_last = next.is_none();

    let position = if is_peak {
        LabelPosition::Peak
    } else if is_trough {
        LabelPosition::Trough
    } else if is_last {
        LabelPosition::Last
    } else {
        return LabelDecision::Hidden;
    };

    LabelDecision::Show(PointLabel {
        index,
        value: curr,
        position,
        is_peak,
        is_trough,
        is_last,
        is_above_reference: curr >= reference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point_is_peak_trough_and_last() {
        let decision = decide(0, None, 7.0, None, 10.0);
        let label = decision.label().expect("shown");
        assert!(label.is_peak && label.is_trough && label.is_last);
        assert_eq!(label.position, LabelPosition::Peak);
        assert_eq!(label.offset(), LabelOffset::Above);
        assert!(!label.is_above_reference);
    }

    #[test]
    fn nan_neighbour_hides_interior_point() {
        assert_eq!(
            decide(1, Some(f64::NAN), 3.0, Some(1.0), 0.0),
            LabelDecision::Hidden
        );
    }
}
