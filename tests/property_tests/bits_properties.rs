//! Property-based tests for the bit views
//!
//! - to_bits / from_bits are inverse on every width
//! - unpack / pack are inverse
//! - widening to F80 and narrowing back loses nothing

use fpmath::{F80, FloatBits};
use proptest::prelude::*;

use super::{any_f32, any_f64};

proptest! {
    #[test]
    fn f64_bits_round_trip(bits in any::<u64>()) {
        prop_assert_eq!(fpmath::f64::to_bits(fpmath::f64::from_bits(bits)), bits);
    }

    #[test]
    fn f32_bits_round_trip(bits in any::<u32>()) {
        prop_assert_eq!(fpmath::f32::to_bits(fpmath::f32::from_bits(bits)), bits);
    }

    #[test]
    fn unpack_pack_round_trip(x in any_f64()) {
        let packed = <f64 as FloatBits>::pack(x.unpack());
        prop_assert_eq!(packed.to_bits(), x.to_bits());
    }

    #[test]
    fn unpack_pack_round_trip_f32(x in any_f32()) {
        let packed = <f32 as FloatBits>::pack(x.unpack());
        prop_assert_eq!(packed.to_bits(), x.to_bits());
    }

    #[test]
    fn f80_widening_is_exact(x in any_f64()) {
        let back = F80::from_f64(x).to_f64();
        if x.is_nan() {
            // Payload kept, quiet bit forced.
            prop_assert_eq!(back.to_bits(), x.to_bits() | 0x0008_0000_0000_0000);
        } else {
            prop_assert_eq!(back.to_bits(), x.to_bits());
        }
    }

    #[test]
    fn f80_bytes_round_trip(bits in any::<u128>()) {
        let x = F80::from_bits(bits);
        prop_assert_eq!(F80::from_le_bytes(x.to_le_bytes()), x);
        prop_assert!(x.to_bits() < 1 << 80);
    }

    #[test]
    fn f80_classification_matches_f64(x in any_f64()) {
        let wide = F80::from_f64(x);
        prop_assert_eq!(wide.isnan(), x.is_nan());
        prop_assert_eq!(wide.isinf(), x.is_infinite());
        prop_assert_eq!(wide.iszero(), x == 0.0);
        // Every f64 subnormal is normal in the wider format.
        prop_assert_eq!(wide.isnormal(), x.is_normal() || x.is_subnormal());
    }
}
