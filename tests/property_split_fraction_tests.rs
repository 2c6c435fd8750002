use balance_chart::core::{ValueDomain, compute_domain, compute_split_fraction, series_from_values};
use proptest::prelude::*;

proptest! {
    #[test]
    fn split_fraction_stays_in_unit_interval(
        min in -10_000.0f64..10_000.0,
        span in 0.001f64..10_000.0,
        reference in -30_000.0f64..30_000.0
    ) {
        let domain = ValueDomain::new(min, min + span);
        let fraction = compute_split_fraction(domain, reference);
        prop_assert!((0.0..=1.0).contains(&fraction));
    }

    #[test]
    fn lower_reference_never_lowers_the_split(
        min in -10_000.0f64..10_000.0,
        span in 0.001f64..10_000.0,
        a in -30_000.0f64..30_000.0,
        b in -30_000.0f64..30_000.0
    ) {
        let domain = ValueDomain::new(min, min + span);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(compute_split_fraction(domain, low) >= compute_split_fraction(domain, high));
    }

    #[test]
    fn arbitrary_domains_never_produce_nan(
        min in proptest::num::f64::ANY,
        max in proptest::num::f64::ANY,
        reference in proptest::num::f64::ANY
    ) {
        let fraction = compute_split_fraction(ValueDomain::new(min, max), reference);
        prop_assert!((0.0..=1.0).contains(&fraction));
    }

    #[test]
    fn computed_domain_split_is_strictly_inside(
        values in proptest::collection::vec(-1_000i32..1_000, 1..64),
        reference in -1_000i32..1_000
    ) {
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let reference = f64::from(reference);
        let series = series_from_values(&values);
        let domain = compute_domain(&series, reference).expect("domain");
        let fraction = compute_split_fraction(domain, reference);
        prop_assert!(fraction > 0.0 && fraction < 1.0);
    }
}
