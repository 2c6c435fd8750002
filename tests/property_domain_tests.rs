use balance_chart::core::{compute_domain, series_from_values};
use proptest::prelude::*;

proptest! {
    #[test]
    fn domain_contains_reference_and_every_value(
        values in proptest::collection::vec(-1_000_000.0f64..1_000_000.0, 1..128),
        reference in -1_000_000.0f64..1_000_000.0
    ) {
        let series = series_from_values(&values);
        let domain = compute_domain(&series, reference).expect("domain");

        prop_assert!(domain.min < domain.max);
        prop_assert!(domain.min <= reference && reference <= domain.max);
        for value in &values {
            prop_assert!(domain.min <= *value && *value <= domain.max);
        }
    }

    #[test]
    fn flat_series_at_reference_is_exactly_two_hundred_wide(
        reference in -1_000_000i32..1_000_000,
        len in 1usize..32
    ) {
        let reference = f64::from(reference);
        let series = series_from_values(&vec![reference; len]);
        let domain = compute_domain(&series, reference).expect("domain");

        prop_assert_eq!(domain.min, reference - 100.0);
        prop_assert_eq!(domain.max, reference + 100.0);
        prop_assert_eq!(domain.max - domain.min, 200.0);
    }
}
