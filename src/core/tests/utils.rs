use crate::budget::ulp_diff;

// Helpers for tests: print the comparison, then assert.

pub fn assert_approx(label: &str, a: f64, b: f64, eps: f64) {
    let err = (a - b).abs();
    println!("{label}: a = {a:.17e}, b = {b:.17e}, err = {err:.3e}, eps = {eps:.3e}");
    assert!(err <= eps, "{label} failed: a = {a}, b = {b}, err = {err}, eps = {eps}");
}

pub fn assert_ulps(label: &str, ours: f64, reference: f64, max_ulps: u128) {
    let d = ulp_diff(ours, reference);
    if d > max_ulps {
        panic!("{label} failed: ours = {ours:e}, reference = {reference:e}, {d} ulp > {max_ulps}");
    }
}

pub fn assert_ulps_f32(label: &str, ours: f32, reference: f32, max_ulps: u128) {
    let d = ulp_diff(ours, reference);
    if d > max_ulps {
        panic!("{label} failed: ours = {ours:e}, reference = {reference:e}, {d} ulp > {max_ulps}");
    }
}

pub fn assert_bits(label: &str, ours: f64, expected: f64) {
    println!("{label}: ours = {:#018x}, expected = {:#018x}", ours.to_bits(), expected.to_bits());
    assert_eq!(ours.to_bits(), expected.to_bits(), "{label}: {ours:e} vs {expected:e}");
}

pub fn assert_bits_f32(label: &str, ours: f32, expected: f32) {
    assert_eq!(ours.to_bits(), expected.to_bits(), "{label}: {ours:e} vs {expected:e}");
}

/// Evenly spaced points on [lo, hi], both ends included.
pub fn grid(lo: f64, hi: f64, n: usize) -> impl Iterator<Item = f64> {
    (0..=n).map(move |i| lo + (hi - lo) * (i as f64 / n as f64))
}

/// Points spaced evenly in log scale on [lo, hi], both positive.
pub fn log_grid(lo: f64, hi: f64, n: usize) -> impl Iterator<Item = f64> {
    let (a, b) = (lo.ln(), hi.ln());
    grid(a, b, n).map(f64::exp)
}

/// Interesting f64 values: zeros, subnormals, extremes, infinities, NaN.
pub const SPECIALS: [f64; 16] = [
    0.0,
    -0.0,
    1.0,
    -1.0,
    0.5,
    -2.5,
    f64::MIN_POSITIVE,
    -f64::MIN_POSITIVE,
    5e-324,
    -5e-324,
    2.2250738585072009e-308,
    f64::MAX,
    f64::MIN,
    f64::INFINITY,
    f64::NEG_INFINITY,
    f64::NAN,
];
