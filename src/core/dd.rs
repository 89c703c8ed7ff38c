// Error-free transformations on f64 (double-double arithmetic). A pair
// `(hi, lo)` stands for the unevaluated sum hi + lo with |lo| <= ulp(hi) / 2.
// No FMA is assumed; products are split Dekker style so every step is plain
// const arithmetic.

/// 2^27 + 1, splits a 53-bit mantissa into two 26-bit halves.
const SPLITTER: f64 = 134217729.0;

/// Double-double value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dd {
    pub hi: f64,
    pub lo: f64,
}

impl Dd {
    pub const fn new(hi: f64, lo: f64) -> Self {
        Dd { hi, lo }
    }

    pub const fn from_f64(x: f64) -> Self {
        Dd { hi: x, lo: 0.0 }
    }

    /// Rounds back to a single f64.
    #[inline]
    pub const fn value(self) -> f64 {
        self.hi + self.lo
    }
}

/// Veltkamp split: `x == hi + lo` exactly, each half fits in 26 bits.
#[inline]
pub const fn split(x: f64) -> (f64, f64) {
    let c = SPLITTER * x;
    let hi = c - (c - x);
    (hi, x - hi)
}

/// `a + b` as an exact pair, any magnitudes.
#[inline]
pub const fn two_sum(a: f64, b: f64) -> Dd {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    Dd::new(s, err)
}

/// `a + b` as an exact pair when |a| >= |b|.
#[inline]
pub const fn fast_two_sum(a: f64, b: f64) -> Dd {
    let s = a + b;
    Dd::new(s, b - (s - a))
}

/// `a * b` as an exact pair (Dekker), valid away from overflow.
pub const fn two_prod(a: f64, b: f64) -> Dd {
    let p = a * b;
    let (ah, al) = split(a);
    let (bh, bl) = split(b);
    let err = ((ah * bh - p) + ah * bl + al * bh) + al * bl;
    Dd::new(p, err)
}

pub const fn dd_add(a: Dd, b: Dd) -> Dd {
    let s = two_sum(a.hi, b.hi);
    let t = s.lo + a.lo + b.lo;
    fast_two_sum(s.hi, t)
}

pub const fn dd_mul(a: Dd, b: Dd) -> Dd {
    let p = two_prod(a.hi, b.hi);
    let t = p.lo + (a.hi * b.lo + a.lo * b.hi);
    fast_two_sum(p.hi, t)
}

/// `1 / a`, one Newton correction on top of the f64 reciprocal.
pub const fn dd_recip(a: Dd) -> Dd {
    let q = 1.0 / a.hi;
    // r = 1 - q * a, computed with the exact product.
    let p = dd_mul(Dd::from_f64(q), a);
    let r = (1.0 - p.hi) - p.lo;
    fast_two_sum(q, q * r)
}
