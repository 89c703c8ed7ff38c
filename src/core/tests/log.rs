use crate::core::log::{w32, w64};
use crate::core::tests::utils::{assert_bits, assert_ulps, assert_ulps_f32, grid, log_grid};

#[test]
fn log_edges() {
    assert_eq!(w64::log(0.0), f64::NEG_INFINITY);
    assert_eq!(w64::log(-0.0), f64::NEG_INFINITY);
    assert_eq!(w64::log(f64::INFINITY), f64::INFINITY);
    assert_bits("log(1)", w64::log(1.0), 0.0);
    assert!(w64::log(-1.0).is_nan());
    assert!(w64::log(-1.0).is_sign_negative());
    assert!(w64::log(f64::NEG_INFINITY).is_nan());
    assert!(w64::log(f64::NAN).is_nan());

    for f in [w64::log2, w64::log10] {
        assert_eq!(f(0.0), f64::NEG_INFINITY);
        assert_eq!(f(f64::INFINITY), f64::INFINITY);
        assert_bits("log_b(1)", f(1.0), 0.0);
        assert!(f(-5e-324).is_nan());
    }
}

#[test]
fn log_within_two_ulps_of_std() {
    for x in log_grid(1e-300, 1e300, 4000).chain(grid(0.5, 2.0, 2000)) {
        assert_ulps("log", w64::log(x), x.ln(), 2);
        assert_ulps("log2", w64::log2(x), x.log2(), 2);
        assert_ulps("log10", w64::log10(x), x.log10(), 2);
    }
    for x in [5e-324, 1e-310, f64::MIN_POSITIVE, f64::MAX, 1.0 + f64::EPSILON, 1.0 - f64::EPSILON / 2.0] {
        assert_ulps("log special", w64::log(x), x.ln(), 2);
        assert_ulps("log2 special", w64::log2(x), x.log2(), 2);
    }
}

#[test]
fn log2_is_exact_on_powers_of_two() {
    let mut k = -1074;
    while k <= 1023 {
        let x = crate::core::exp2i::w64::scalbn(1.0, k);
        assert_eq!(w64::log2(x), k as f64, "log2(2^{k})");
        k += 1;
    }
}

#[test]
fn log2_agrees_with_log_over_ln2() {
    for x in log_grid(1e-20, 1e20, 500) {
        let via_ln = w64::log(x) / core::f64::consts::LN_2;
        assert_ulps("log2 vs log/ln2", w64::log2(x), via_ln, 4);
    }
}

#[test]
fn log1p_edges() {
    assert_bits("log1p(0)", w64::log1p(0.0), 0.0);
    assert_bits("log1p(-0)", w64::log1p(-0.0), -0.0);
    assert_eq!(w64::log1p(-1.0), f64::NEG_INFINITY);
    assert!(w64::log1p(-1.5).is_nan());
    assert!(w64::log1p(f64::NEG_INFINITY).is_nan());
    assert_eq!(w64::log1p(f64::INFINITY), f64::INFINITY);
    assert_eq!(w64::log1p(1e-300), 1e-300);
    assert_eq!(w64::log1p(-1e-20), -1e-20);
}

#[test]
fn log1p_within_three_ulps_of_std() {
    for x in grid(-0.999, 10.0, 5000).chain(log_grid(1e-15, 1e10, 1000)) {
        assert_ulps("log1p", w64::log1p(x), x.ln_1p(), 3);
    }
    for x in log_grid(1e-15, 0.5, 1000) {
        assert_ulps("log1p(-x)", w64::log1p(-x), (-x).ln_1p(), 3);
    }
}

#[test]
fn single_precision_logs() {
    assert_eq!(w32::log(0.0), f32::NEG_INFINITY);
    assert!(w32::log(-1.0).is_nan());
    assert_eq!(w32::log2(1.0), 0.0);
    assert_eq!(w32::log2(1024.0), 10.0);
    assert_eq!(w32::log2(f32::from_bits(1)), -149.0);
    assert_eq!(w32::log1p(-1.0), f32::NEG_INFINITY);
    assert_eq!(w32::log1p(-0.0).to_bits(), (-0.0f32).to_bits());

    for x in log_grid(1e-38, 1e38, 3000) {
        let xf = x as f32;
        let xd = xf as f64;
        assert_ulps_f32("logf", w32::log(xf), xd.ln() as f32, 1);
        assert_ulps_f32("log2f", w32::log2(xf), xd.log2() as f32, 1);
        assert_ulps_f32("log10f", w32::log10(xf), xd.log10() as f32, 1);
    }
    for x in grid(-0.99, 100.0, 3000) {
        let xf = x as f32;
        assert_ulps_f32("log1pf", w32::log1p(xf), (xf as f64).ln_1p() as f32, 1);
    }
}
