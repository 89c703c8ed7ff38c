//! Property-based tests for rounding and remainders
//!
//! - trunc, floor, ceil, round and rint agree bitwise with `std` / libm
//! - modf splits exactly
//! - fmod agrees with `%`

use proptest::prelude::*;

use super::{any_f64, finite_f64};

fn same(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

proptest! {
    #[test]
    fn rounding_matches_std(x in any_f64()) {
        prop_assert!(same(fpmath::f64::trunc(x), x.trunc()));
        prop_assert!(same(fpmath::f64::floor(x), x.floor()));
        prop_assert!(same(fpmath::f64::ceil(x), x.ceil()));
        prop_assert!(same(fpmath::f64::round(x), x.round()));
        prop_assert!(same(fpmath::f64::rint(x), libm::rint(x)));
    }

    #[test]
    fn rounding_matches_std_f32(bits in any::<u32>()) {
        let x = f32::from_bits(bits);
        let same32 = |a: f32, b: f32| (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits();
        prop_assert!(same32(fpmath::f32::trunc(x), x.trunc()));
        prop_assert!(same32(fpmath::f32::floor(x), x.floor()));
        prop_assert!(same32(fpmath::f32::ceil(x), x.ceil()));
    }

    #[test]
    fn modf_parts_add_up(x in finite_f64()) {
        let (frac, int) = fpmath::f64::modf(x);
        prop_assert_eq!(int, x.trunc());
        prop_assert_eq!(frac + int, x);
        prop_assert!(frac.abs() < 1.0);
    }

    #[test]
    fn frexp_ldexp_round_trip(x in finite_f64()) {
        let (m, e) = fpmath::f64::frexp(x);
        prop_assert_eq!(fpmath::f64::ldexp(m, e), x);
        if x != 0.0 {
            prop_assert!((0.5..1.0).contains(&m.abs()));
        }
    }

    #[test]
    fn fmod_matches_std(x in finite_f64(), y in finite_f64()) {
        prop_assert!(same(fpmath::f64::fmod(x, y), x % y));
    }

    #[test]
    fn remquo_remainder_matches_libm(x in finite_f64(), y in finite_f64()) {
        prop_assume!(y != 0.0);
        let (r, _) = fpmath::f64::remquo(x, y);
        let (lr, _) = libm::remquo(x, y);
        prop_assert!(same(r, lr));
    }
}
