use approx::assert_abs_diff_eq;
use balance_chart::core::{ValueDomain, compute_domain, compute_split_fraction, series_from_values};

#[test]
fn reference_at_bounds_maps_to_edges() {
    let domain = ValueDomain::new(0.0, 200.0);

    assert_eq!(compute_split_fraction(domain, 0.0), 1.0);
    assert_eq!(compute_split_fraction(domain, 200.0), 0.0);
    assert_eq!(compute_split_fraction(domain, 100.0), 0.5);
}

#[test]
fn reference_outside_domain_is_clamped() {
    let domain = ValueDomain::new(10.0, 20.0);

    assert_eq!(compute_split_fraction(domain, 25.0), 0.0);
    assert_eq!(compute_split_fraction(domain, -5.0), 1.0);
    assert_eq!(compute_split_fraction(domain, f64::INFINITY), 0.0);
    assert_eq!(compute_split_fraction(domain, f64::NEG_INFINITY), 1.0);
}

#[test]
fn fraction_is_measured_from_the_top() {
    let domain = ValueDomain::new(0.0, 100.0);
    assert_abs_diff_eq!(compute_split_fraction(domain, 75.0), 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(compute_split_fraction(domain, 10.0), 0.9, epsilon = 1e-12);
}

#[test]
fn degenerate_domains_fall_back_to_zero() {
    assert_eq!(compute_split_fraction(ValueDomain::new(5.0, 5.0), 5.0), 0.0);
    assert_eq!(compute_split_fraction(ValueDomain::new(5.0, 5.0), 1.0), 0.0);
    assert_eq!(compute_split_fraction(ValueDomain::new(10.0, 0.0), 5.0), 0.0);
    assert_eq!(
        compute_split_fraction(ValueDomain::new(f64::NAN, 1.0), 0.5),
        0.0
    );
}

#[test]
fn nan_reference_never_produces_nan() {
    let fraction = compute_split_fraction(ValueDomain::new(0.0, 1.0), f64::NAN);
    assert_eq!(fraction, 0.0);
}

#[test]
fn end_to_end_split_matches_domain() {
    let series = series_from_values(&[100.0, 120.0, 90.0, 150.0, 150.0, 140.0]);
    let domain = compute_domain(&series, 100.0).expect("domain");
    let fraction = compute_split_fraction(domain, 100.0);

    assert_abs_diff_eq!(fraction, 53.0 / 66.0, epsilon = 1e-9);
    assert_abs_diff_eq!(fraction, 0.8030, epsilon = 1e-4);
}
