use std::fmt;

use crate::core::classify::Classification;
use crate::core::rep::{FloatBits, Unpacked};
use crate::error::{FloatError, Result};

/// x87 80-bit extended precision value, kept as its raw encoding.
///
/// Layout (little end first): 64-bit significand with an explicit integer bit
/// at bit 63, 15-bit exponent, sign at bit 79. Only the low 80 bits of the
/// `u128` are ever set. Equality and hashing are on the encoding, so two NaNs
/// with the same bits compare equal.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct F80(u128);

const SIG_BITS: u32 = 64;
const EXP_FIELD: u128 = 0x7fff;
const SIGN: u128 = 1 << 79;
const EXP_MASK: u128 = EXP_FIELD << SIG_BITS;
const SIG_MASK: u128 = (1 << SIG_BITS) - 1;
const INTEGER_BIT: u128 = 1 << 63;
const QUIET_BIT: u128 = 1 << 62;
const STORAGE: u128 = (1 << 80) - 1;
const BIAS: i32 = 16383;

impl F80 {
    pub const ZERO: Self = F80(0);
    pub const NEG_ZERO: Self = F80(SIGN);
    pub const ONE: Self = F80(((BIAS as u128) << SIG_BITS) | INTEGER_BIT);
    pub const INFINITY: Self = F80(EXP_MASK | INTEGER_BIT);
    pub const NEG_INFINITY: Self = F80(SIGN | EXP_MASK | INTEGER_BIT);
    /// The x87 "real indefinite" quiet NaN, sign clear.
    pub const NAN: Self = F80(EXP_MASK | INTEGER_BIT | QUIET_BIT);

    /// Raw encoding; bits above 80 are dropped.
    #[inline]
    pub const fn from_bits(bits: u128) -> Self {
        F80(bits & STORAGE)
    }

    /// Raw encoding, rejecting anything with bits above 80 set.
    pub const fn try_from_bits(bits: u128) -> Result<Self> {
        if bits & !STORAGE != 0 {
            return Err(FloatError::InvalidF80Bits(bits));
        }
        Ok(F80(bits))
    }

    #[inline]
    pub const fn to_bits(self) -> u128 {
        self.0
    }

    pub const fn from_le_bytes(bytes: [u8; 10]) -> Self {
        let mut wide = [0u8; 16];
        let mut i = 0;
        while i < 10 {
            wide[i] = bytes[i];
            i += 1;
        }
        F80(u128::from_le_bytes(wide))
    }

    pub const fn to_le_bytes(self) -> [u8; 10] {
        let wide = self.0.to_le_bytes();
        let mut out = [0u8; 10];
        let mut i = 0;
        while i < 10 {
            out[i] = wide[i];
            i += 1;
        }
        out
    }

    #[inline]
    pub const fn signbit(self) -> bool {
        self.0 & SIGN != 0
    }

    #[inline]
    pub const fn biased_exponent(self) -> u32 {
        ((self.0 & EXP_MASK) >> SIG_BITS) as u32
    }

    /// Full 64-bit significand, integer bit included.
    #[inline]
    pub const fn significand(self) -> u64 {
        (self.0 & SIG_MASK) as u64
    }

    /// Classification of the encoding.
    ///
    /// Non-canonical x87 encodings are folded in the way the FPU treats them
    /// as operands: unnormals, pseudo-NaNs and pseudo-infinities are NaN
    /// (invalid operands), pseudo-denormals are Normal.
    pub const fn classify(self) -> Classification {
        let sig = self.0 & SIG_MASK;
        let exp = self.0 & EXP_MASK;
        if exp == 0 {
            if sig == 0 {
                Classification::Zero
            } else if sig & INTEGER_BIT != 0 {
                Classification::Normal
            } else {
                Classification::Subnormal
            }
        } else if exp == EXP_MASK {
            if sig == INTEGER_BIT {
                Classification::Infinite
            } else {
                Classification::Nan
            }
        } else if sig & INTEGER_BIT == 0 {
            Classification::Nan
        } else {
            Classification::Normal
        }
    }

    pub const fn isnan(self) -> bool {
        matches!(self.classify(), Classification::Nan)
    }

    pub const fn isinf(self) -> bool {
        matches!(self.classify(), Classification::Infinite)
    }

    pub const fn isfinite(self) -> bool {
        !matches!(self.classify(), Classification::Nan | Classification::Infinite)
    }

    pub const fn iszero(self) -> bool {
        self.0 & !SIGN == 0
    }

    pub const fn issubnormal(self) -> bool {
        matches!(self.classify(), Classification::Subnormal)
    }

    pub const fn isnormal(self) -> bool {
        matches!(self.classify(), Classification::Normal)
    }

    /// Position on the number line as an integer, for non-NaN values of
    /// canonical encoding. Both zeros map to 0.
    pub(crate) const fn ordinal(self) -> i128 {
        let mag = (self.0 & !SIGN) as i128;
        if self.signbit() { -mag } else { mag }
    }

    #[inline]
    pub const fn abs(self) -> Self {
        F80(self.0 & !SIGN)
    }

    #[inline]
    pub const fn neg(self) -> Self {
        F80(self.0 ^ SIGN)
    }

    /// Exact widening; every f64 (NaN payloads included) has an F80 encoding.
    pub const fn from_f64(x: f64) -> Self {
        let bits = x.to_bits();
        let sign = if bits >> 63 != 0 { SIGN } else { 0 };
        let biased = ((bits >> 52) & 0x7ff) as i32;
        let mant = bits & ((1 << 52) - 1);
        if biased == 0x7ff {
            // Infinity keeps a zero fraction; NaN payloads keep their quiet bit at 62.
            return F80(sign | EXP_MASK | INTEGER_BIT | ((mant as u128) << 11));
        }
        if biased == 0 {
            if mant == 0 {
                return F80(sign);
            }
            // f64 subnormals are normal here.
            let lz = mant.leading_zeros();
            let sig = (mant as u128) << lz;
            let exp = 63 - 1074 - lz as i32 + BIAS;
            return F80(sign | ((exp as u128) << SIG_BITS) | sig);
        }
        let exp = biased - 1023 + BIAS;
        F80(sign | ((exp as u128) << SIG_BITS) | INTEGER_BIT | ((mant as u128) << 11))
    }

    /// Round to the nearest f64, ties to even, subnormal results included.
    pub const fn to_f64(self) -> f64 {
        let sign: u64 = if self.signbit() { 1 << 63 } else { 0 };
        match self.classify() {
            Classification::Nan => {
                let payload = ((self.0 & SIG_MASK) >> 11) as u64 & ((1 << 52) - 1);
                return f64::from_bits(sign | 0x7ff8_0000_0000_0000 | payload);
            }
            Classification::Infinite => return f64::from_bits(sign | 0x7ff0_0000_0000_0000),
            Classification::Zero => return f64::from_bits(sign),
            _ => {}
        }

        let mut sig = self.0 & SIG_MASK;
        let field = self.biased_exponent() as i32;
        // Denormal encodings share the exponent of the smallest normal.
        let mut unbiased = if field == 0 { 1 - BIAS } else { field - BIAS };
        let lz = (sig as u64).leading_zeros();
        sig <<= lz;
        unbiased -= lz as i32;

        let biased = unbiased + 1023;
        if biased >= 0x7ff {
            return f64::from_bits(sign | 0x7ff0_0000_0000_0000);
        }
        let shift = if biased >= 1 { 11 } else { 11 + (1 - biased) as u32 };
        if shift > 64 {
            return f64::from_bits(sign);
        }
        let mut m = sig >> shift;
        let rem = sig & ((1u128 << shift) - 1);
        let half = 1u128 << (shift - 1);
        if rem > half || (rem == half && m & 1 == 1) {
            m += 1;
        }
        // A carry out of the mantissa lands in the exponent field by itself.
        let out = if biased >= 1 {
            ((biased as u64) << 52) + (m as u64 - (1 << 52))
        } else {
            m as u64
        };
        f64::from_bits(sign | out)
    }
}

impl FloatBits for F80 {
    type Bits = u128;

    const WIDTH: u32 = 80;
    const MANT_BITS: u32 = SIG_BITS;
    const EXP_BITS: u32 = 15;
    const BIAS: i32 = BIAS;
    const SIGN_MASK: u128 = SIGN;
    const EXP_MASK: u128 = EXP_MASK;
    const MANT_MASK: u128 = SIG_MASK;

    #[inline]
    fn to_bits(self) -> u128 {
        self.0
    }

    #[inline]
    fn from_bits(bits: u128) -> Self {
        F80::from_bits(bits)
    }

    fn unpack(self) -> Unpacked<u128> {
        Unpacked {
            sign: self.signbit(),
            biased_exponent: self.biased_exponent(),
            mantissa: self.0 & SIG_MASK,
        }
    }

    fn pack(u: Unpacked<u128>) -> Self {
        let sign = if u.sign { SIGN } else { 0 };
        let exp = ((u.biased_exponent as u128) << SIG_BITS) & EXP_MASK;
        F80(sign | exp | (u.mantissa & SIG_MASK))
    }
}

impl TryFrom<u128> for F80 {
    type Error = FloatError;

    fn try_from(bits: u128) -> Result<Self> {
        F80::try_from_bits(bits)
    }
}

impl From<f64> for F80 {
    fn from(x: f64) -> Self {
        F80::from_f64(x)
    }
}

impl From<f32> for F80 {
    fn from(x: f32) -> Self {
        F80::from_f64(x as f64)
    }
}

impl From<F80> for f64 {
    fn from(x: F80) -> Self {
        x.to_f64()
    }
}

impl fmt::Debug for F80 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F80({:#022X})", self.0)
    }
}

impl fmt::Display for F80 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.classify() {
            Classification::Nan => write!(f, "F80(NaN, bits=0x{:020X})", self.0),
            Classification::Infinite if self.signbit() => write!(f, "F80(-inf, bits=0x{:020X})", self.0),
            Classification::Infinite => write!(f, "F80(+inf, bits=0x{:020X})", self.0),
            _ => write!(f, "F80({:.8e}, bits=0x{:020X})", self.to_f64(), self.0),
        }
    }
}
