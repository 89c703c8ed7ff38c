//! Property-based tests for classification and ordering
//!
//! - every value is in exactly one class
//! - classes agree with `std`
//! - the quiet comparisons agree with the operators and never see NaN as ordered

use std::num::FpCategory;

use fpmath::Classification;
use proptest::prelude::*;

use super::{any_f32, any_f64};

proptest! {
    #[test]
    fn exactly_one_class(x in any_f64()) {
        let flags = [
            fpmath::f64::isnan(x),
            fpmath::f64::isinf(x),
            fpmath::f64::iszero(x),
            fpmath::f64::issubnormal(x),
            fpmath::f64::isnormal(x),
        ];
        prop_assert_eq!(flags.iter().filter(|&&f| f).count(), 1);
        prop_assert_eq!(fpmath::f64::isfinite(x), !flags[0] && !flags[1]);
    }

    #[test]
    fn class_matches_std(x in any_f64()) {
        let ours: FpCategory = fpmath::f64::fpclassify(x).into();
        prop_assert_eq!(ours, x.classify());
        prop_assert_eq!(fpmath::f64::signbit(x), x.is_sign_negative());
    }

    #[test]
    fn class_matches_std_f32(x in any_f32()) {
        let ours: FpCategory = fpmath::f32::fpclassify(x).into();
        prop_assert_eq!(ours, x.classify());
    }

    #[test]
    fn class_codes_round_trip(x in any_f64()) {
        let class = fpmath::f64::fpclassify(x);
        prop_assert_eq!(Classification::from_code(class.code()), Some(class));
    }

    #[test]
    fn comparisons_match_operators(x in any_f64(), y in any_f64()) {
        prop_assert_eq!(fpmath::f64::isgreater(x, y), x > y);
        prop_assert_eq!(fpmath::f64::isgreaterequal(x, y), x >= y);
        prop_assert_eq!(fpmath::f64::isless(x, y), x < y);
        prop_assert_eq!(fpmath::f64::islessequal(x, y), x <= y);
        prop_assert_eq!(fpmath::f64::islessgreater(x, y), x < y || x > y);
        prop_assert_eq!(fpmath::f64::isunordered(x, y), x.is_nan() || y.is_nan());
    }
}
