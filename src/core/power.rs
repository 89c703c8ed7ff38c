// pow and sqrt.
//
// pow walks the C99 Annex F special-value table first. Small integral
// exponents then go through repeated squaring in double-double; everything
// else is exp(y * log|x|) with the logarithm and the product kept in
// double-double, and the low word of the product folded into the
// exponential's range reduction.

pub mod w64 {
    use crate::core::classify::w64::{isinf, isnan, iszero, signbit};
    use crate::core::dd::{dd_add, dd_mul, dd_recip, fast_two_sum, two_prod, two_sum, Dd};
    use crate::core::exp::w64::exp_dd;
    use crate::core::log::w64::{reduce_log, LN2_HI, LN2_LO};
    use crate::core::nearest::w64::trunc;
    use crate::core::poly::Poly;
    use crate::core::rep::w64 as rep;
    use crate::core::sign::w64::{copysign_bits, fabs};

    /// 2^53: every f64 at or above this is an even integer.
    const EVEN_ONLY: f64 = 9007199254740992.0;
    /// 2^64: past this y*log|x| leaves the finite range for any |x| != 1.
    const HUGE_EXPONENT: f64 = 18446744073709551616.0;
    /// Largest |n| handled by repeated squaring.
    const POWI_MAX: i32 = 64;
    /// Keeps every partial product of repeated squaring, and its reciprocal,
    /// inside the range where the Dekker split cannot overflow.
    const POWI_EXP_LIMIT: i32 = 960;

    /// 1/3 as a double-double.
    const THIRD: Dd = Dd::new(3.333333333333333148e-01, 1.850371707708594217e-17);
    /// 1/5, 1/7, ..., 1/27: atanh(s) - s - s^3/3 = s^5 * P(s^2).
    const ATANH_TAIL: Poly<12> = Poly::new([
        1.0 / 5.0,
        1.0 / 7.0,
        1.0 / 9.0,
        1.0 / 11.0,
        1.0 / 13.0,
        1.0 / 15.0,
        1.0 / 17.0,
        1.0 / 19.0,
        1.0 / 21.0,
        1.0 / 23.0,
        1.0 / 25.0,
        1.0 / 27.0,
    ]);

    const fn is_integer(y: f64) -> bool {
        trunc(y) == y
    }

    /// Finite y that is an odd integer.
    const fn is_odd_integer(y: f64) -> bool {
        if !is_integer(y) || fabs(y) >= EVEN_ONLY {
            return false;
        }
        let half = y * 0.5;
        trunc(half) != half
    }

    /// x^n by binary powering, every product exact to about 2^-104.
    const fn powi_dd(x: f64, n: i32) -> f64 {
        let mut base = Dd::from_f64(x);
        let mut acc = Dd::from_f64(1.0);
        let mut m = n.unsigned_abs();
        while m > 0 {
            if m & 1 == 1 {
                acc = dd_mul(acc, base);
            }
            m >>= 1;
            if m > 0 {
                base = dd_mul(base, base);
            }
        }
        if n < 0 {
            dd_recip(acc).value()
        } else {
            acc.value()
        }
    }

    /// log(x) as a double-double, positive finite non-zero x.
    ///
    /// log(1 + f) = 2 * atanh(s) with s = f / (2 + f), |s| < 0.172. s and the
    /// s^3 / 3 term are carried in double-double; the rest of the series is
    /// below 2^-14 * |s| and needs only f64.
    const fn log_dd(x: f64) -> Dd {
        let red = reduce_log(x);
        let f = red.reduced;
        let dk = red.k as f64;

        let d = two_sum(2.0, f);
        let q = f / d.hi;
        // f - q * d without rounding; f - p.hi is exact since p.hi is within
        // a couple of ulps of f.
        let p = two_prod(q, d.hi);
        let s = fast_two_sum(q, (((f - p.hi) - p.lo) - q * d.lo) / d.hi);

        let s2 = dd_mul(s, s);
        let cube = dd_mul(dd_mul(s2, s), THIRD);
        let rest = s2.hi * s2.hi * ATANH_TAIL.eval_odd(s.hi);
        let half = dd_add(s, cube);
        let half = fast_two_sum(half.hi, half.lo + rest);

        // dk * LN2_HI is exact: LN2_HI has its low 32 bits clear.
        let sum = two_sum(dk * LN2_HI, 2.0 * half.hi);
        fast_two_sum(sum.hi, sum.lo + 2.0 * half.lo + dk * LN2_LO)
    }

    /// Annex F results for a zero or infinite base. None for finite non-zero x.
    const fn pow_special_base(x: f64, y: f64) -> Option<f64> {
        if iszero(x) {
            let odd = is_odd_integer(y);
            return Some(if y < 0.0 {
                if odd { copysign_bits(rep::INF, x) } else { rep::INF }
            } else if odd {
                x
            } else {
                0.0
            });
        }
        if isinf(x) {
            let odd = is_odd_integer(y);
            return Some(if signbit(x) {
                if y < 0.0 {
                    if odd { -0.0 } else { 0.0 }
                } else if odd {
                    rep::NEG_INF
                } else {
                    rep::INF
                }
            } else if y < 0.0 {
                0.0
            } else {
                rep::INF
            });
        }
        None
    }

    /// x raised to y.
    pub const fn pow(x: f64, y: f64) -> f64 {
        if iszero(y) || x == 1.0 {
            return 1.0;
        }
        if isnan(x) {
            return x;
        }
        if isnan(y) {
            return y;
        }
        if isinf(y) {
            let ax = fabs(x);
            return if ax == 1.0 {
                1.0
            } else if (ax > 1.0) == (y > 0.0) {
                rep::INF
            } else {
                0.0
            };
        }
        if let Some(v) = pow_special_base(x, y) {
            return v;
        }

        let negate = if signbit(x) {
            if !is_integer(y) {
                return rep::NEG_QNAN;
            }
            is_odd_integer(y)
        } else {
            false
        };
        let ax = fabs(x);
        if ax == 1.0 {
            return if negate { -1.0 } else { 1.0 };
        }

        let mag = if fabs(y) >= HUGE_EXPONENT {
            if (ax > 1.0) == (y > 0.0) { rep::INF } else { 0.0 }
        } else {
            // ax lies in [2^(scale-1), 2^scale), so |log2 ax| <= |scale| + 1.
            let scale = rep::biased_exponent(ax) as i32 - rep::BIAS + 1;
            let small = is_integer(y) && fabs(y) <= POWI_MAX as f64;
            if small && (scale.abs() + 1) * (y as i32).abs() <= POWI_EXP_LIMIT {
                powi_dd(ax, y as i32)
            } else {
                let l = log_dd(ax);
                let p = two_prod(y, l.hi);
                let t = fast_two_sum(p.hi, p.lo + y * l.lo);
                exp_dd(t.hi, t.lo)
            }
        };
        if negate { -mag } else { mag }
    }

    /// Integer square root of n with its remainder, bit pair by bit pair.
    const fn isqrt_rem(n: u128) -> (u128, u128) {
        let mut rem = n;
        let mut root: u128 = 0;
        let mut bit: u128 = 1 << 126;
        while bit > n {
            bit >>= 2;
        }
        while bit != 0 {
            if rem >= root + bit {
                rem -= root + bit;
                root = (root >> 1) + bit;
            } else {
                root >>= 1;
            }
            bit >>= 2;
        }
        (root, rem)
    }

    /// Correctly rounded square root using integer arithmetic only.
    pub const fn sqrt(x: f64) -> f64 {
        if isnan(x) || iszero(x) {
            return x;
        }
        if signbit(x) {
            return rep::NEG_QNAN;
        }
        if isinf(x) {
            return x;
        }
        let implicit = 1u64 << rep::MANT_BITS;
        let mut biased = rep::biased_exponent(x) as i32;
        let mut m = rep::to_bits(x) & rep::MANT_MASK;
        if biased == 0 {
            while m & implicit == 0 {
                m <<= 1;
                biased -= 1;
            }
            biased += 1;
        } else {
            m |= implicit;
        }
        // x = m * 2^e with e even, m in [2^52, 2^54).
        let mut e = biased - rep::BIAS - rep::MANT_BITS as i32;
        if e & 1 != 0 {
            m <<= 1;
            e -= 1;
        }
        let (mut root, rem) = isqrt_rem((m as u128) << rep::MANT_BITS);
        // An exact half is impossible, so rem > root means above the midpoint.
        if rem > root {
            root += 1;
        }
        let biased_out = (e - rep::MANT_BITS as i32) / 2 + rep::MANT_BITS as i32 + rep::BIAS;
        // root == 2^53 carries into the exponent on its own.
        rep::from_bits(((biased_out as u64) << rep::MANT_BITS) + (root as u64 - implicit))
    }
}

pub mod w32 {
    use crate::core::classify::w32::{isnan, iszero};
    use crate::core::classify::w64::isnan as isnan64;
    use crate::core::rep::w32 as rep;

    /// f64 result rounded to f32; NaN maps to the f32 sentinel.
    const fn narrow(r: f64) -> f32 {
        if isnan64(r) {
            rep::NEG_QNAN
        } else {
            r as f32
        }
    }

    pub const fn pow(x: f32, y: f32) -> f32 {
        if iszero(y) || x == 1.0 {
            return 1.0;
        }
        if isnan(x) {
            return x;
        }
        if isnan(y) {
            return y;
        }
        narrow(super::w64::pow(x as f64, y as f64))
    }

    /// sqrt in f64 then one rounding; 53 >= 2 * 24 + 2 makes that correctly
    /// rounded too.
    pub const fn sqrt(x: f32) -> f32 {
        if isnan(x) || iszero(x) {
            return x;
        }
        narrow(super::w64::sqrt(x as f64))
    }
}
