use std::fmt;

use crate::error::FloatError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `FP_*` codes, numbered as glibc numbers them.
pub const FP_NAN: i32 = 0;
pub const FP_INFINITE: i32 = 1;
pub const FP_ZERO: i32 = 2;
pub const FP_SUBNORMAL: i32 = 3;
pub const FP_NORMAL: i32 = 4;

/// Category of a floating-point value, derived from its bit fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Classification {
    Nan,
    Infinite,
    Zero,
    Subnormal,
    Normal,
}

impl Classification {
    pub const ALL: [Classification; 5] = [
        Classification::Nan,
        Classification::Infinite,
        Classification::Zero,
        Classification::Subnormal,
        Classification::Normal,
    ];

    /// The matching `FP_*` code.
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            Classification::Nan => FP_NAN,
            Classification::Infinite => FP_INFINITE,
            Classification::Zero => FP_ZERO,
            Classification::Subnormal => FP_SUBNORMAL,
            Classification::Normal => FP_NORMAL,
        }
    }

    #[inline]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            FP_NAN => Some(Classification::Nan),
            FP_INFINITE => Some(Classification::Infinite),
            FP_ZERO => Some(Classification::Zero),
            FP_SUBNORMAL => Some(Classification::Subnormal),
            FP_NORMAL => Some(Classification::Normal),
            _ => None,
        }
    }
}

impl TryFrom<i32> for Classification {
    type Error = FloatError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Classification::from_code(code).ok_or(FloatError::InvalidClassCode(code))
    }
}

impl From<Classification> for std::num::FpCategory {
    fn from(c: Classification) -> Self {
        use std::num::FpCategory;
        match c {
            Classification::Nan => FpCategory::Nan,
            Classification::Infinite => FpCategory::Infinite,
            Classification::Zero => FpCategory::Zero,
            Classification::Subnormal => FpCategory::Subnormal,
            Classification::Normal => FpCategory::Normal,
        }
    }
}

impl From<std::num::FpCategory> for Classification {
    fn from(c: std::num::FpCategory) -> Self {
        use std::num::FpCategory;
        match c {
            FpCategory::Nan => Classification::Nan,
            FpCategory::Infinite => Classification::Infinite,
            FpCategory::Zero => Classification::Zero,
            FpCategory::Subnormal => Classification::Subnormal,
            FpCategory::Normal => Classification::Normal,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::Nan => "FP_NAN",
            Classification::Infinite => "FP_INFINITE",
            Classification::Zero => "FP_ZERO",
            Classification::Subnormal => "FP_SUBNORMAL",
            Classification::Normal => "FP_NORMAL",
        };
        f.write_str(name)
    }
}

// Every predicate reads the exponent and mantissa fields directly, so none of
// them depend on how the target compares NaNs.
macro_rules! classify_impl {
    ($w:ident, $t:ty) => {
        pub mod $w {
            use super::Classification;
            use crate::core::rep::$w as rep;

            /// Exponent all ones, mantissa non-zero. Quiet and signaling alike.
            #[inline]
            pub const fn isnan(x: $t) -> bool {
                rep::magnitude_bits(x) > rep::EXP_MASK
            }

            #[inline]
            pub const fn isinf(x: $t) -> bool {
                rep::magnitude_bits(x) == rep::EXP_MASK
            }

            #[inline]
            pub const fn isfinite(x: $t) -> bool {
                rep::to_bits(x) & rep::EXP_MASK != rep::EXP_MASK
            }

            /// Both zeros.
            #[inline]
            pub const fn iszero(x: $t) -> bool {
                rep::magnitude_bits(x) == 0
            }

            #[inline]
            pub const fn issubnormal(x: $t) -> bool {
                let bits = rep::to_bits(x);
                bits & rep::EXP_MASK == 0 && bits & rep::MANT_MASK != 0
            }

            #[inline]
            pub const fn isnormal(x: $t) -> bool {
                let exp = rep::to_bits(x) & rep::EXP_MASK;
                exp != 0 && exp != rep::EXP_MASK
            }

            /// Set for `-0.0` and for negative NaNs too.
            #[inline]
            pub const fn signbit(x: $t) -> bool {
                rep::to_bits(x) & rep::SIGN_MASK != 0
            }

            pub const fn fpclassify(x: $t) -> Classification {
                if isnan(x) {
                    Classification::Nan
                } else if isinf(x) {
                    Classification::Infinite
                } else if iszero(x) {
                    Classification::Zero
                } else if issubnormal(x) {
                    Classification::Subnormal
                } else {
                    Classification::Normal
                }
            }
        }
    };
}

classify_impl!(w32, f32);
classify_impl!(w64, f64);
#[cfg(feature = "f16")]
classify_impl!(w16, f16);
#[cfg(feature = "f128")]
classify_impl!(w128, f128);
