// Power-of-two scaling built straight from exponent bits.

macro_rules! exp2i_impl {
    ($w:ident, $t:ty, $u:ty) => {
        pub mod $w {
            use crate::core::rep::$w as rep;

            const MAX_EXP: i32 = rep::BIAS;
            const MIN_EXP: i32 = 1 - rep::BIAS;
            const MANT_DIG: i32 = rep::MANT_BITS as i32 + 1;

            /// 2^k, with k clamped into the normal exponent range.
            #[inline]
            pub const fn exp2i(k: i32) -> $t {
                let k = if k < MIN_EXP {
                    MIN_EXP
                } else if k > MAX_EXP {
                    MAX_EXP
                } else {
                    k
                };
                rep::from_bits(((k + rep::BIAS) as $u) << rep::MANT_BITS)
            }

            /// x * 2^n with a single rounding, also into the subnormal range.
            pub const fn scalbn(x: $t, n: i32) -> $t {
                let mut y = x;
                let mut n = n;
                if n > MAX_EXP {
                    y *= exp2i(MAX_EXP);
                    n -= MAX_EXP;
                    if n > MAX_EXP {
                        y *= exp2i(MAX_EXP);
                        n -= MAX_EXP;
                        if n > MAX_EXP {
                            n = MAX_EXP;
                        }
                    }
                } else if n < MIN_EXP {
                    // Leave n below -MANT_DIG afterwards so the last multiply
                    // is the only one that can round.
                    y *= exp2i(MIN_EXP + MANT_DIG);
                    n += -MIN_EXP - MANT_DIG;
                    if n < MIN_EXP {
                        y *= exp2i(MIN_EXP + MANT_DIG);
                        n += -MIN_EXP - MANT_DIG;
                        if n < MIN_EXP {
                            n = MIN_EXP;
                        }
                    }
                }
                y * exp2i(n)
            }

            #[inline]
            pub const fn ldexp(x: $t, exp: i32) -> $t {
                scalbn(x, exp)
            }

            /// Split x into m * 2^e with |m| in [0.5, 1). Zero, infinities and
            /// NaN come back unchanged with e = 0.
            pub const fn frexp(x: $t) -> ($t, i32) {
                let mut x = x;
                let mut adjust = 0;
                let mut exp = rep::biased_exponent(x) as i32;
                if exp == 0 {
                    if rep::magnitude_bits(x) == 0 {
                        return (x, 0);
                    }
                    // Subnormal: lift into the normal range first.
                    x *= exp2i(MANT_DIG + 1);
                    adjust = MANT_DIG + 1;
                    exp = rep::biased_exponent(x) as i32;
                } else if exp == rep::EXP_MAX as i32 {
                    return (x, 0);
                }
                let bits = (rep::to_bits(x) & !rep::EXP_MASK)
                    | (((rep::BIAS - 1) as $u) << rep::MANT_BITS);
                (rep::from_bits(bits), exp - (rep::BIAS - 1) - adjust)
            }
        }
    };
}

exp2i_impl!(w32, f32, u32);
exp2i_impl!(w64, f64, u64);
