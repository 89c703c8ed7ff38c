//! Property-based tests for fpmath
//!
//! Bit views, classification, rounding, interpolation and the
//! transcendental functions checked against `std` over generated inputs.

mod bits_properties;
mod classify_properties;
mod interp_properties;
mod rounding_properties;
mod transcendental_properties;

use proptest::prelude::*;

/// Any f64 bit pattern, NaNs and infinities included.
pub fn any_f64() -> impl Strategy<Value = f64> {
    any::<u64>().prop_map(f64::from_bits)
}

/// Any f32 bit pattern.
pub fn any_f32() -> impl Strategy<Value = f32> {
    any::<u32>().prop_map(f32::from_bits)
}

/// Positive finite non-zero f64, subnormals included.
pub fn positive_f64() -> impl Strategy<Value = f64> {
    (1u64..0x7ff0_0000_0000_0000).prop_map(f64::from_bits)
}

/// Finite f64 of either sign.
pub fn finite_f64() -> impl Strategy<Value = f64> {
    (any::<bool>(), 0u64..0x7ff0_0000_0000_0000)
        .prop_map(|(neg, bits)| f64::from_bits(bits | if neg { 1 << 63 } else { 0 }))
}
