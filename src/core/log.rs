// Logarithms.
//
// Every variant shares one reduction: x = 2^k * m with m in [sqrt(2)/2, sqrt(2)),
// then f = m - 1 and log(1 + f) is evaluated through s = f / (2 + f), where
// log(1 + f) = f - f^2/2 + s * (f^2/2 + R(s^2)) and R is a minimax polynomial
// split into odd and even halves. log2 and log10 carry the extra bits of f
// through a hi/lo split so the final scaling does not lose them.

/// Reduced argument plus the power of two that was factored out.
///
/// `reduced + tail` is the part that goes through the polynomial, `k` is
/// reapplied at the end (added as `k * ln 2` for logs, scaled in as `2^k` for
/// exponentials). Lives only inside one evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RangeReduction {
    pub reduced: f64,
    pub tail:    f64,
    pub k:       i32,
}

pub mod w64 {
    use super::RangeReduction;
    use crate::core::classify::w64::{isinf, isnan, iszero, signbit};
    use crate::core::poly::Poly;
    use crate::core::rep::w64 as rep;

    pub(crate) const LN2_HI: f64 = 6.93147180369123816490e-01; // 0x3fe62e42_fee00000
    pub(crate) const LN2_LO: f64 = 1.90821492927058770002e-10; // 0x3dea39ef_35793c76

    const IVLN2_HI: f64 = 1.44269504072144627571e+00;
    const IVLN2_LO: f64 = 1.67517131648865118353e-10;
    const IVLN10_HI: f64 = 4.34294481878168880939e-01;
    const IVLN10_LO: f64 = 2.50829467116452752298e-11;
    const LOG10_2_HI: f64 = 3.01029995663611771306e-01;
    const LOG10_2_LO: f64 = 3.69423907715893078616e-13;

    const TWO54: f64 = 18014398509481984.0;

    /// Lg1, Lg3, Lg5, Lg7: odd part of R, in powers of s^4.
    const LG_ODD: Poly<4> = Poly::new([
        6.666666666666735130e-01,
        2.857142874366239149e-01,
        1.818357216161805012e-01,
        1.479819860511658591e-01,
    ]);
    /// Lg2, Lg4, Lg6.
    const LG_EVEN: Poly<3> = Poly::new([
        3.999999999940941908e-01,
        2.222219843214978396e-01,
        1.531383769920937332e-01,
    ]);

    /// Split a positive finite non-zero x into 2^k * (1 + f).
    pub(crate) const fn reduce_log(x: f64) -> RangeReduction {
        let mut bits = rep::to_bits(x);
        let mut k = 0;
        if rep::biased_exponent(x) == 0 {
            k -= 54;
            bits = rep::to_bits(x * TWO54);
        }
        // Bias the high word so the exponent flips over at sqrt(2)/2.
        let mut hx = (bits >> 32) as u32;
        hx += 0x3ff0_0000 - 0x3fe6_a09e;
        k += (hx >> 20) as i32 - 0x3ff;
        hx = (hx & 0x000f_ffff) + 0x3fe6_a09e;
        let m = rep::from_bits(((hx as u64) << 32) | (bits & 0xffff_ffff));
        RangeReduction { reduced: m - 1.0, tail: 0.0, k }
    }

    /// (f^2 / 2, s, R(s^2)) for the reduced f.
    const fn kernel(f: f64) -> (f64, f64, f64) {
        let hfsq = 0.5 * f * f;
        let s = f / (2.0 + f);
        let z = s * s;
        let r = LG_ODD.eval_odd(z) + z * z * LG_EVEN.eval_even(z);
        (hfsq, s, r)
    }

    /// Edge table shared by the three logarithms: `Some(result)` when x
    /// needs no evaluation.
    const fn edge(x: f64) -> Option<f64> {
        if isnan(x) {
            return Some(x);
        }
        if iszero(x) {
            return Some(rep::NEG_INF);
        }
        if signbit(x) {
            return Some(rep::NEG_QNAN);
        }
        if isinf(x) {
            return Some(x);
        }
        if x == 1.0 {
            return Some(0.0);
        }
        None
    }

    /// (hi, lo) with hi + lo = log(1 + f), hi holding only its top 32 bits.
    const fn split_log1pf(f: f64) -> (f64, f64) {
        let (hfsq, s, r) = kernel(f);
        let hi = rep::from_bits(rep::to_bits(f - hfsq) & 0xffff_ffff_0000_0000);
        let lo = f - hi - hfsq + s * (hfsq + r);
        (hi, lo)
    }

    /// Natural logarithm.
    pub const fn log(x: f64) -> f64 {
        if let Some(v) = edge(x) {
            return v;
        }
        let red = reduce_log(x);
        let f = red.reduced;
        let dk = red.k as f64;
        let (hfsq, s, r) = kernel(f);
        s * (hfsq + r) + dk * LN2_LO - hfsq + f + dk * LN2_HI
    }

    /// Base-2 logarithm; exact for powers of two.
    pub const fn log2(x: f64) -> f64 {
        if let Some(v) = edge(x) {
            return v;
        }
        let red = reduce_log(x);
        let (hi, lo) = split_log1pf(red.reduced);

        let val_hi = hi * IVLN2_HI;
        let mut val_lo = (lo + hi) * IVLN2_LO + lo * IVLN2_HI;

        let y = red.k as f64;
        let w = y + val_hi;
        val_lo += (y - w) + val_hi;
        val_lo + w
    }

    /// Base-10 logarithm.
    pub const fn log10(x: f64) -> f64 {
        if let Some(v) = edge(x) {
            return v;
        }
        let red = reduce_log(x);
        let (hi, lo) = split_log1pf(red.reduced);
        let dk = red.k as f64;

        let val_hi = hi * IVLN10_HI;
        let y = dk * LOG10_2_HI;
        let mut val_lo = dk * LOG10_2_LO + (lo + hi) * IVLN10_LO + lo * IVLN10_HI;

        let w = y + val_hi;
        val_lo += (y - w) + val_hi;
        val_lo + w
    }

    /// log(1 + x), accurate for tiny x.
    ///
    /// u = 1 + x rounds, but log(u) * x / (u - 1) cancels that rounding to
    /// first order. ±0 and anything too small to move 1 come back unchanged.
    pub const fn log1p(x: f64) -> f64 {
        if isnan(x) {
            return x;
        }
        if x == -1.0 {
            return rep::NEG_INF;
        }
        if x < -1.0 {
            return rep::NEG_QNAN;
        }
        if isinf(x) {
            return x;
        }
        let u = 1.0 + x;
        if u == 1.0 {
            return x;
        }
        log(u) * (x / (u - 1.0))
    }
}

/// Single precision: edge cases decided in f32, value computed in f64 and
/// rounded once.
pub mod w32 {
    use crate::core::classify::w32::{isinf, isnan, iszero, signbit};
    use crate::core::rep::w32 as rep;

    const fn edge(x: f32) -> Option<f32> {
        if isnan(x) {
            return Some(x);
        }
        if iszero(x) {
            return Some(rep::NEG_INF);
        }
        if signbit(x) {
            return Some(rep::NEG_QNAN);
        }
        if isinf(x) {
            return Some(x);
        }
        if x == 1.0 {
            return Some(0.0);
        }
        None
    }

    pub const fn log(x: f32) -> f32 {
        match edge(x) {
            Some(v) => v,
            None => super::w64::log(x as f64) as f32,
        }
    }

    pub const fn log2(x: f32) -> f32 {
        match edge(x) {
            Some(v) => v,
            None => super::w64::log2(x as f64) as f32,
        }
    }

    pub const fn log10(x: f32) -> f32 {
        match edge(x) {
            Some(v) => v,
            None => super::w64::log10(x as f64) as f32,
        }
    }

    pub const fn log1p(x: f32) -> f32 {
        if isnan(x) {
            return x;
        }
        if x == -1.0 {
            return rep::NEG_INF;
        }
        if x < -1.0 {
            return rep::NEG_QNAN;
        }
        if isinf(x) || iszero(x) {
            return x;
        }
        super::w64::log1p(x as f64) as f32
    }
}
