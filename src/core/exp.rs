// Exponentials.
//
// exp reduces x = k*ln2 + r with |r| <= ln2/2 (ln2 carried as hi + lo so the
// subtraction is exact), evaluates exp(r) through the Remez rational form
// 1 + r + r*c/(2 - c) with c = r - r^2 * P(r^2), and scales by 2^k.

pub mod w64 {
    use crate::core::classify::w64::isnan;
    use crate::core::dd::{fast_two_sum, two_prod, two_sum};
    use crate::core::exp2i::w64::{exp2i, scalbn};
    use crate::core::log::w64::{LN2_HI, LN2_LO};
    use crate::core::log::RangeReduction;
    use crate::core::nearest::w64::rint;
    use crate::core::poly::Poly;
    use crate::core::rep::w64 as rep;
    use crate::core::sign::w64::fabs;

    const INVLN2: f64 = 1.44269504088896338700e+00;
    const HALF: [f64; 2] = [0.5, -0.5];
    const LN_2: f64 = core::f64::consts::LN_2;
    /// ln 2 - LN_2, the part the f64 constant drops.
    const LN_2_TAIL: f64 = 2.319046813846299558e-17;

    /// Above this exp overflows.
    pub(crate) const OVERFLOW: f64 = 7.09782712893383973096e+02;
    /// Below this exp underflows to +0.
    const UNDERFLOW: f64 = -7.45133219101941108420e+02;
    const HALF_LN2: f64 = 3.46573590279972654709e-01;
    const TINY: f64 = 5.551115123125783e-17; // 2^-54

    const P: Poly<5> = Poly::new([
        1.66666666666666019037e-01,
        -2.77777777770155933842e-03,
        6.61375632143793436117e-05,
        -1.65339022054652515390e-06,
        4.13813679705723846039e-08,
    ]);

    /// 1/2!, 1/3!, ..., 1/15!
    const EXPM1_TAYLOR: Poly<14> = Poly::new([
        5.0000000000000000000e-01,
        1.6666666666666666667e-01,
        4.1666666666666666667e-02,
        8.3333333333333333333e-03,
        1.3888888888888888889e-03,
        1.9841269841269841270e-04,
        2.4801587301587301587e-05,
        2.7557319223985890653e-06,
        2.7557319223985890653e-07,
        2.5052108385441718775e-08,
        2.0876756987868098979e-09,
        1.6059043836821614599e-10,
        1.1470745597729724714e-11,
        7.6471637318198164759e-13,
    ]);

    /// x = k*ln2 + (reduced + tail), |reduced| <= ln2/2.
    pub(crate) const fn reduce_exp(x: f64) -> RangeReduction {
        let hx = ((rep::to_bits(x) >> 32) as u32) & 0x7fff_ffff;
        let sign = (rep::to_bits(x) >> 63) as usize;
        if hx <= 0x3fd6_2e42 {
            return RangeReduction { reduced: x, tail: 0.0, k: 0 };
        }
        let k = if hx >= 0x3ff0_a2b2 {
            (INVLN2 * x + HALF[sign]) as i32
        } else {
            1 - 2 * sign as i32
        };
        let kf = k as f64;
        let hi = x - kf * LN2_HI;
        let lo = kf * LN2_LO;
        let reduced = hi - lo;
        RangeReduction { reduced, tail: (hi - reduced) - lo, k }
    }

    /// Overflow, underflow and NaN, judged on the leading part of the argument.
    const fn edge(x: f64) -> Option<f64> {
        let hx = ((rep::to_bits(x) >> 32) as u32) & 0x7fff_ffff;
        if hx >= 0x4086_232b {
            // |x| >= 708.39 or NaN
            if isnan(x) {
                return Some(x);
            }
            if x > OVERFLOW {
                return Some(rep::INF);
            }
            if x < UNDERFLOW {
                return Some(0.0);
            }
        }
        None
    }

    /// exp(reduced + tail) scaled by 2^k.
    const fn kernel(red: RangeReduction) -> f64 {
        let r = red.reduced;
        let rr = r * r;
        let c = r - rr * P.eval(rr);
        let y = 1.0 + (r * c / (2.0 - c) + red.tail + r);
        if red.k == 0 {
            y
        } else {
            scalbn(y, red.k)
        }
    }

    pub const fn exp(x: f64) -> f64 {
        if let Some(v) = edge(x) {
            return v;
        }
        if ((rep::to_bits(x) >> 32) as u32) & 0x7fff_ffff <= 0x3e30_0000 {
            // |x| <= 2^-28
            return 1.0 + x;
        }
        kernel(reduce_exp(x))
    }

    /// exp(hi + lo) for |lo| <= ulp(hi), lo folded into the reduced argument.
    pub(crate) const fn exp_dd(hi: f64, lo: f64) -> f64 {
        if let Some(v) = edge(hi) {
            return v;
        }
        let red = reduce_exp(hi);
        let r = two_sum(red.reduced, lo);
        let r = fast_two_sum(r.hi, r.lo + red.tail);
        kernel(RangeReduction { reduced: r.hi, tail: r.lo, k: red.k })
    }

    /// 2^x. Integral x in range gives the exact power of two.
    pub const fn exp2(x: f64) -> f64 {
        if isnan(x) {
            return x;
        }
        if x >= 1024.0 {
            return rep::INF;
        }
        if x < -1075.0 {
            return 0.0;
        }
        let k = rint(x);
        let r = x - k;
        let p = two_prod(r, LN_2);
        scalbn(exp_dd(p.hi, p.lo + r * LN_2_TAIL), k as i32)
    }

    /// expm1 on |x| < ln2/2 by the truncated series.
    const fn expm1_small(x: f64) -> f64 {
        x + x * x * EXPM1_TAYLOR.eval(x)
    }

    /// e^x - 1 without the cancellation near 0.
    pub const fn expm1(x: f64) -> f64 {
        if isnan(x) {
            return x;
        }
        if x > OVERFLOW {
            return rep::INF;
        }
        if x < -40.0 {
            // e^x is below half an ulp of 1.
            return -1.0;
        }
        let ax = fabs(x);
        if ax < TINY {
            return x;
        }
        if ax < HALF_LN2 {
            return expm1_small(x);
        }
        let red = reduce_exp(x);
        let r = red.reduced;
        // d/dr expm1(r) = e^r ~ 1 + r, enough to fold the tail in.
        let e = expm1_small(r) + red.tail * (1.0 + r);
        let k = red.k;
        if k > 56 {
            return scalbn(1.0 + e, k) - 1.0;
        }
        let t = exp2i(k);
        (t - 1.0) + t * e
    }
}

/// Single precision, evaluated in f64; overflow and underflow fall out of the
/// final rounding.
pub mod w32 {
    use crate::core::classify::w32::isnan;

    pub const fn exp(x: f32) -> f32 {
        if isnan(x) {
            return x;
        }
        super::w64::exp(x as f64) as f32
    }

    pub const fn exp2(x: f32) -> f32 {
        if isnan(x) {
            return x;
        }
        super::w64::exp2(x as f64) as f32
    }

    pub const fn expm1(x: f32) -> f32 {
        if isnan(x) {
            return x;
        }
        super::w64::expm1(x as f64) as f32
    }
}
