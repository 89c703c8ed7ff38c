use crate::core::classify::Classification;
use crate::core::f80::F80;
use crate::core::rep::FloatBits;
use crate::core::tests::utils::{assert_bits, SPECIALS};
use crate::error::FloatError;

const EXP_SHIFT: u32 = 64;
const INT_BIT: u128 = 1 << 63;

fn f80(sign: bool, exp: u32, sig: u64) -> F80 {
    let s = if sign { 1u128 << 79 } else { 0 };
    F80::from_bits(s | ((exp as u128) << EXP_SHIFT) | sig as u128)
}

#[test]
fn constants() {
    assert_eq!(F80::ONE.to_bits(), 0x3fff_8000_0000_0000_0000);
    assert_eq!(F80::ONE.to_f64(), 1.0);
    assert_eq!(F80::INFINITY.to_f64(), f64::INFINITY);
    assert_eq!(F80::NEG_INFINITY.to_f64(), f64::NEG_INFINITY);
    assert!(F80::NAN.isnan());
    assert!(F80::NAN.to_f64().is_nan());
    assert_bits("-0", F80::NEG_ZERO.to_f64(), -0.0);
    assert_eq!(F80::default(), F80::ZERO);
    assert_eq!(<F80 as FloatBits>::WIDTH, 80);
    assert_eq!(<F80 as FloatBits>::BIAS, 16383);
}

#[test]
fn widening_and_back_is_lossless() {
    for x in SPECIALS.into_iter().chain([0.1, -1e-310, 3.0e-320, 123456.789, f64::EPSILON]) {
        let wide = F80::from_f64(x);
        assert_bits(&format!("round trip {x:e}"), wide.to_f64(), x);
        assert_eq!(wide.classify() == Classification::Nan, x.is_nan());
        assert_eq!(wide.signbit(), x.is_sign_negative());
    }
    // f64 subnormals become normal F80 values.
    let tiny = F80::from_f64(5e-324);
    assert_eq!(tiny.classify(), Classification::Normal);
    assert_eq!(tiny.significand(), 1 << 63);
    assert_eq!(tiny.biased_exponent(), (16383 - 1074) as u32);

    let f: F80 = 1.5f32.into();
    assert_eq!(f64::from(f), 1.5);
}

#[test]
fn nan_payload_survives() {
    let x = f64::from_bits(0x7ff8_0000_0000_beef);
    let wide = F80::from_f64(x);
    assert!(wide.isnan());
    assert_eq!(wide.to_f64().to_bits(), x.to_bits());
    let neg = f64::from_bits(0xfff4_0000_0000_0001);
    // A signalling payload comes back quiet.
    assert_eq!(F80::from_f64(neg).to_f64().to_bits(), 0xfffc_0000_0000_0001);
}

#[test]
fn narrowing_rounds_to_nearest_even() {
    let half = 1u64 << 10;
    // 1 + half an ulp: tie, stays on the even 1.0.
    assert_eq!(f80(false, 16383, (INT_BIT as u64) | half).to_f64(), 1.0);
    // 1 + ulp + half an ulp: tie, goes up to the even neighbour.
    let odd = (INT_BIT as u64) | (1 << 11) | half;
    assert_eq!(f80(false, 16383, odd).to_f64(), 1.0 + 2.0 * f64::EPSILON);
    // Just above the tie rounds up.
    assert_eq!(f80(false, 16383, (INT_BIT as u64) | half | 1).to_f64(), 1.0 + f64::EPSILON);
    // All ones carries into the exponent.
    assert_eq!(f80(false, 16383, u64::MAX).to_f64(), 2.0);
    assert_eq!(f80(true, 16383, u64::MAX).to_f64(), -2.0);
}

#[test]
fn narrowing_out_of_range() {
    // 2^1024 overflows.
    assert_eq!(f80(false, 16383 + 1024, INT_BIT as u64).to_f64(), f64::INFINITY);
    // Largest value rounding to f64::MAX and the first one that does not.
    assert_eq!(F80::from_f64(f64::MAX).to_f64(), f64::MAX);
    assert_eq!(f80(false, 16383 + 1023, u64::MAX).to_f64(), f64::INFINITY);
    // 2^-1075 is a tie between 0 and the smallest subnormal.
    assert_bits("2^-1075", f80(false, 16383 - 1075, INT_BIT as u64).to_f64(), 0.0);
    assert_eq!(f80(false, 16383 - 1075, (INT_BIT as u64) | 1).to_f64(), 5e-324);
    assert_bits("2^-1200", f80(true, 16383 - 1200, INT_BIT as u64).to_f64(), -0.0);
    // Subnormal result.
    assert_eq!(f80(false, 16383 - 1030, INT_BIT as u64).to_f64(), f64::from_bits(1 << 44));
}

#[test]
fn non_canonical_encodings() {
    // Unnormal: exponent set, integer bit clear.
    assert_eq!(f80(false, 1, 1).classify(), Classification::Nan);
    // Pseudo-infinity and pseudo-NaN.
    assert_eq!(f80(false, 0x7fff, 0).classify(), Classification::Nan);
    assert_eq!(f80(false, 0x7fff, 1 << 62).classify(), Classification::Nan);
    // Pseudo-denormal: zero exponent, integer bit set.
    let pseudo = f80(false, 0, INT_BIT as u64);
    assert_eq!(pseudo.classify(), Classification::Normal);
    assert_eq!(pseudo.to_f64(), 0.0);
    // Real denormal.
    let denormal = f80(true, 0, 1);
    assert_eq!(denormal.classify(), Classification::Subnormal);
    assert!(denormal.issubnormal());
    assert!(denormal.signbit());
    assert!(denormal.isfinite());
}

#[test]
fn predicates() {
    let one = F80::ONE;
    assert!(one.isnormal() && one.isfinite() && !one.iszero());
    assert!(F80::NEG_ZERO.iszero());
    assert!(F80::INFINITY.isinf() && !F80::INFINITY.isfinite());
    assert_eq!(one.neg().to_f64(), -1.0);
    assert_eq!(one.neg().abs(), one);
    assert_eq!(F80::NEG_INFINITY.abs(), F80::INFINITY);
}

#[test]
fn bits_and_bytes() {
    let x = F80::from_f64(-2.75);
    let bytes = x.to_le_bytes();
    assert_eq!(bytes[9], 0xc0);
    assert_eq!(F80::from_le_bytes(bytes), x);
    assert_eq!(F80::from_bits(u128::MAX).to_bits(), (1 << 80) - 1);

    assert_eq!(F80::try_from_bits(0x3fff_8000_0000_0000_0000), Ok(F80::ONE));
    assert_eq!(F80::try_from(1u128 << 80), Err(FloatError::InvalidF80Bits(1 << 80)));

    let u = x.unpack();
    assert!(u.sign);
    assert_eq!(u.biased_exponent, 16384);
    assert_eq!(<F80 as FloatBits>::pack(u), x);
}

#[test]
fn formatting() {
    assert_eq!(F80::ONE.to_string(), "F80(1.00000000e0, bits=0x3FFF8000000000000000)");
    assert_eq!(F80::NEG_INFINITY.to_string(), "F80(-inf, bits=0xFFFF8000000000000000)");
    assert!(F80::NAN.to_string().starts_with("F80(NaN"));
    assert!(format!("{:?}", F80::ONE).contains("3FFF8000000000000000"));
}
