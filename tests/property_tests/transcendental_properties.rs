//! Property-based tests for the transcendental functions
//!
//! - sqrt is correctly rounded
//! - log, exp and pow stay inside their ULP budgets against `std`

use fpmath::budget::ulp_diff;
use proptest::prelude::*;

use super::positive_f64;

proptest! {
    #[test]
    fn sqrt_is_correctly_rounded(x in positive_f64()) {
        prop_assert_eq!(fpmath::f64::sqrt(x).to_bits(), x.sqrt().to_bits());
    }

    #[test]
    fn sqrt_f32_is_correctly_rounded(bits in 1u32..0x7f80_0000) {
        let x = f32::from_bits(bits);
        prop_assert_eq!(fpmath::f32::sqrt(x).to_bits(), x.sqrt().to_bits());
    }

    #[test]
    fn logs_within_budget(x in positive_f64()) {
        prop_assert!(ulp_diff(fpmath::f64::log(x), x.ln()) <= 2);
        prop_assert!(ulp_diff(fpmath::f64::log2(x), x.log2()) <= 2);
        prop_assert!(ulp_diff(fpmath::f64::log10(x), x.log10()) <= 2);
    }

    #[test]
    fn log1p_within_budget(x in -0.999f64..1e10) {
        prop_assert!(ulp_diff(fpmath::f64::log1p(x), x.ln_1p()) <= 3);
    }

    #[test]
    fn exp_within_budget(x in -740.0f64..709.0) {
        prop_assert!(ulp_diff(fpmath::f64::exp(x), x.exp()) <= 2);
        prop_assert!(ulp_diff(fpmath::f64::expm1(x), x.exp_m1()) <= 3);
    }

    #[test]
    fn exp2_within_budget(x in -1070.0f64..1023.0) {
        prop_assert!(ulp_diff(fpmath::f64::exp2(x), x.exp2()) <= 2);
    }

    #[test]
    fn pow_within_budget(x in 1e-3f64..1e3, y in -9.0f64..9.0) {
        prop_assert!(ulp_diff(fpmath::f64::pow(x, y), x.powf(y)) <= 8);
    }

    #[test]
    fn pow_within_budget_for_wide_exponents(x in 0.6f64..1.6, y in -2000.0f64..2000.0) {
        prop_assume!((y * x.ln()).abs() < 700.0);
        prop_assert!(ulp_diff(fpmath::f64::pow(x, y), x.powf(y)) <= 8);
    }

    #[test]
    fn pow_of_tiny_base_by_negative_integer(x in 1e-7f64..1e-2, n in -64i32..0) {
        let y = n as f64;
        let reference = x.powf(y);
        prop_assume!(reference.is_finite());
        prop_assert!(ulp_diff(fpmath::f64::pow(x, y), reference) <= 8);
    }

    #[test]
    fn log_of_exp_is_close_to_identity(x in -700.0f64..700.0) {
        let back = fpmath::f64::log(fpmath::f64::exp(x));
        prop_assert!((back - x).abs() <= 4.0 * f64::EPSILON * x.abs().max(1.0));
    }
}
