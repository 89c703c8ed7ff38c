//! Property-based tests for interpolation
//!
//! - lerp hits both ends exactly
//! - lerp is monotonic in t
//! - smoothstep stays in [0, 1]

use proptest::prelude::*;

fn bounded() -> impl Strategy<Value = f64> {
    -1e100f64..1e100
}

proptest! {
    #[test]
    fn lerp_hits_the_ends(a in bounded(), b in bounded()) {
        prop_assert_eq!(fpmath::f64::lerp(a, b, 0.0), a);
        prop_assert_eq!(fpmath::f64::lerp(a, b, 1.0), b);
    }

    #[test]
    fn lerp_is_monotonic(a in bounded(), b in bounded(), t1 in -2.0f64..3.0, t2 in -2.0f64..3.0) {
        let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let (x, y) = (fpmath::f64::lerp(a, b, lo), fpmath::f64::lerp(a, b, hi));
        if b >= a {
            prop_assert!(x <= y, "lerp({}, {}, {}) = {} > lerp(.., {}) = {}", a, b, lo, x, hi, y);
        } else {
            prop_assert!(x >= y, "lerp({}, {}, {}) = {} < lerp(.., {}) = {}", a, b, lo, x, hi, y);
        }
    }

    #[test]
    fn smoothstep_is_bounded(x in -10.0f64..10.0) {
        let v = fpmath::f64::smoothstep(-1.0, 1.0, x);
        prop_assert!((0.0..=1.0).contains(&v));
    }

    #[test]
    fn ping_pong_stays_in_range(a in -1e6f64..1e6, b in 0.01f64..100.0) {
        let v = fpmath::f64::ping_pong(a, b);
        prop_assert!(v >= 0.0 && v <= b * (1.0 + 1e-9), "ping_pong({}, {}) = {}", a, b, v);
    }
}
