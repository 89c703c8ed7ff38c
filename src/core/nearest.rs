// Rounding to integral values. All of these work on the bit fields; none of
// them converts through an integer type, so the full finite range is covered.

macro_rules! nearest_impl {
    ($w:ident, $t:ty, $u:ty) => {
        pub mod $w {
            use crate::core::classify::$w::{isfinite, isnan, isinf};
            use crate::core::sign::$w::copysign_bits;
            use crate::core::rep::$w as rep;

            /// 2^MANT_BITS; every float at or above this magnitude is integral.
            const INTEGRAL: $t = rep::from_bits(
                ((rep::BIAS + rep::MANT_BITS as i32) as $u) << rep::MANT_BITS,
            );

            /// Round toward zero. ±0, ±inf and NaN come back unchanged.
            pub const fn trunc(x: $t) -> $t {
                let bits = rep::to_bits(x);
                let biased = rep::biased_exponent(x);
                if biased == rep::EXP_MAX {
                    return x;
                }
                let exp = biased as i32 - rep::BIAS;
                if exp >= rep::MANT_BITS as i32 {
                    return x;
                }
                if exp < 0 {
                    // |x| < 1, zeros included: keep only the sign.
                    return rep::from_bits(bits & rep::SIGN_MASK);
                }
                let fraction = rep::MANT_MASK >> exp;
                rep::from_bits(bits & !fraction)
            }

            pub const fn floor(x: $t) -> $t {
                let t = trunc(x);
                if x < t {
                    t - 1.0
                } else {
                    t
                }
            }

            pub const fn ceil(x: $t) -> $t {
                let t = trunc(x);
                if x > t {
                    t + 1.0
                } else {
                    t
                }
            }

            /// Round half away from zero.
            pub const fn round(x: $t) -> $t {
                if !isfinite(x) {
                    return x;
                }
                let t = trunc(x);
                // x - t is exact for every finite x.
                let diff = x - t;
                if diff >= 0.5 {
                    t + 1.0
                } else if diff <= -0.5 {
                    t - 1.0
                } else {
                    t
                }
            }

            /// Round half to even, the default IEEE rounding direction.
            pub const fn rint(x: $t) -> $t {
                if !isfinite(x) {
                    return x;
                }
                let mag = rep::from_bits(rep::magnitude_bits(x));
                if mag >= INTEGRAL {
                    return x;
                }
                let rounded = (mag + INTEGRAL) - INTEGRAL;
                copysign_bits(rounded, x)
            }

            #[inline]
            pub const fn nearbyint(x: $t) -> $t {
                rint(x)
            }

            /// Split into (fractional, integral) parts, both carrying the sign
            /// of x.
            pub const fn modf(x: $t) -> ($t, $t) {
                if isnan(x) {
                    return (x, x);
                }
                if isinf(x) {
                    return (copysign_bits(0.0, x), x);
                }
                let int = trunc(x);
                (copysign_bits(x - int, x), int)
            }
        }
    };
}

nearest_impl!(w32, f32, u32);
nearest_impl!(w64, f64, u64);
