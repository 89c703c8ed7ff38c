// Remainders. `fmod` and `remquo` run an exact shift-and-subtract division on
// the integer mantissas, so their results carry no rounding error at all.
// `remainder` is the truncating variant `x - trunc(x / y) * y`.

macro_rules! rem_impl {
    ($w:ident, $t:ty, $u:ty) => {
        pub mod $w {
            use crate::core::classify::$w::{isfinite, isinf, isnan, iszero, signbit};
            use crate::core::nearest::$w::trunc;
            use crate::core::rep::$w as rep;
            use crate::core::sign::$w::fabs;

            const IMPLICIT: $u = (1 as $u) << rep::MANT_BITS;
            const TOP: u32 = rep::WIDTH - 1;
            const HEAD: u32 = rep::EXP_BITS + 1;

            /// Quotients at or above this are too coarse for the truncating
            /// formula, so `remainder` hands them to `fmod`.
            const QUOTIENT_LIMIT: $t = rep::from_bits(
                ((rep::BIAS + rep::MANT_BITS as i32) as $u) << rep::MANT_BITS,
            );

            /// Mantissa with the implicit bit present, paired with its exponent
            /// field. Subnormals are shifted up and get an exponent <= 0.
            const fn normalize(mag: $u, biased: i32) -> ($u, i32) {
                if biased != 0 {
                    return ((mag & rep::MANT_MASK) | IMPLICIT, biased);
                }
                let mut exp = 0;
                let mut probe = mag << HEAD;
                while probe >> TOP == 0 {
                    exp -= 1;
                    probe <<= 1;
                }
                (mag << ((1 - exp) as u32), exp)
            }

            /// Inverse of `normalize` for a mantissa whose implicit bit is set.
            const fn denormalize(mant: $u, exp: i32) -> $u {
                if exp > 0 {
                    (mant - IMPLICIT) | ((exp as $u) << rep::MANT_BITS)
                } else {
                    mant >> ((1 - exp) as u32)
                }
            }

            /// Remainder of `x / y` with the quotient truncated; exact, sign of x.
            pub const fn fmod(x: $t, y: $t) -> $t {
                if isnan(x) {
                    return x;
                }
                if isnan(y) {
                    return y;
                }
                if isinf(x) || iszero(y) {
                    return rep::NEG_QNAN;
                }
                let sx = rep::to_bits(x) & rep::SIGN_MASK;
                let ax = rep::magnitude_bits(x);
                let ay = rep::magnitude_bits(y);
                // Also covers x == ±0 and infinite y.
                if ax <= ay {
                    return if ax == ay { rep::from_bits(sx) } else { x };
                }

                let (mut mx, mut ex) = normalize(ax, rep::biased_exponent(x) as i32);
                let (my, ey) = normalize(ay, rep::biased_exponent(y) as i32);

                while ex > ey {
                    let diff = mx.wrapping_sub(my);
                    if diff >> TOP == 0 {
                        if diff == 0 {
                            return rep::from_bits(sx);
                        }
                        mx = diff;
                    }
                    mx <<= 1;
                    ex -= 1;
                }
                let diff = mx.wrapping_sub(my);
                if diff >> TOP == 0 {
                    if diff == 0 {
                        return rep::from_bits(sx);
                    }
                    mx = diff;
                }
                while mx >> rep::MANT_BITS == 0 {
                    mx <<= 1;
                    ex -= 1;
                }
                rep::from_bits(sx | denormalize(mx, ex))
            }

            /// IEEE remainder (quotient rounded to nearest, ties to even)
            /// together with the low 31 bits of that quotient, signed like
            /// `x / y`.
            pub const fn remquo(x: $t, y: $t) -> ($t, i32) {
                if isnan(x) {
                    return (x, 0);
                }
                if isnan(y) {
                    return (y, 0);
                }
                if isinf(x) || iszero(y) {
                    return (rep::NEG_QNAN, 0);
                }
                if iszero(x) {
                    return (x, 0);
                }
                let sx = signbit(x);
                let sy = signbit(y);

                let (mut mx, mut ex) = normalize(rep::magnitude_bits(x), rep::biased_exponent(x) as i32);
                let (my, ey) = normalize(rep::magnitude_bits(y), rep::biased_exponent(y) as i32);

                let mut q: u32 = 0;
                if ex < ey && ex + 1 != ey {
                    // |x| < |y| / 2: x is already the remainder.
                    return (x, 0);
                }
                if ex >= ey {
                    while ex > ey {
                        let diff = mx.wrapping_sub(my);
                        if diff >> TOP == 0 {
                            mx = diff;
                            q += 1;
                        }
                        mx <<= 1;
                        q <<= 1;
                        ex -= 1;
                    }
                    let diff = mx.wrapping_sub(my);
                    if diff >> TOP == 0 {
                        mx = diff;
                        q += 1;
                    }
                    if mx == 0 {
                        ex = 4 - rep::WIDTH as i32;
                    } else {
                        while mx >> rep::MANT_BITS == 0 {
                            mx <<= 1;
                            ex -= 1;
                        }
                    }
                }

                // Pick between |r| and |r| - |y|, whichever is nearer zero.
                let mut r = rep::from_bits(denormalize(mx, ex));
                let ay = fabs(y);
                if ex == ey || (ex + 1 == ey && (2.0 * r > ay || (2.0 * r == ay && q % 2 != 0))) {
                    r -= ay;
                    q = q.wrapping_add(1);
                }
                let q = (q & 0x7fff_ffff) as i32;
                let quo = if sx != sy { -q } else { q };
                (if sx { -r } else { r }, quo)
            }

            /// `x - trunc(x / y) * y`.
            ///
            /// This is the truncating remainder, so the result has the sign of
            /// `x` (it is not the round-to-nearest IEEE remainder; use `remquo`
            /// for that). Infinite x, zero y or a NaN operand give NaN, and a
            /// finite x over an infinite y gives x back.
            pub const fn remainder(x: $t, y: $t) -> $t {
                if isnan(x) {
                    return x;
                }
                if isnan(y) {
                    return y;
                }
                if isinf(x) || iszero(y) {
                    return rep::NEG_QNAN;
                }
                if isinf(y) {
                    return x;
                }
                let q = x / y;
                if !isfinite(q) || fabs(q) >= QUOTIENT_LIMIT {
                    return fmod(x, y);
                }
                x - trunc(q) * y
            }
        }
    };
}

rem_impl!(w32, f32, u32);
rem_impl!(w64, f64, u64);
