/// Fixed coefficient table evaluated with Horner's rule.
///
/// `coeffs[0]` is the constant term. Tables are built once as `const` items and
/// never mutated, so evaluation is a plain const loop over N terms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Poly<const N: usize> {
    pub coeffs: [f64; N],
}

impl<const N: usize> Poly<N> {
    pub const fn new(coeffs: [f64; N]) -> Self {
        Self { coeffs }
    }

    /// sum of coeffs[i] * x^i
    #[inline]
    pub const fn eval(&self, x: f64) -> f64 {
        if N == 0 {
            return 0.0;
        }
        let mut acc = self.coeffs[N - 1];
        let mut i = N - 1;
        while i > 0 {
            i -= 1;
            acc = acc * x + self.coeffs[i];
        }
        acc
    }

    /// sum of coeffs[i] * x^(2i)
    #[inline]
    pub const fn eval_even(&self, x: f64) -> f64 {
        self.eval(x * x)
    }

    /// sum of coeffs[i] * x^(2i+1)
    #[inline]
    pub const fn eval_odd(&self, x: f64) -> f64 {
        x * self.eval(x * x)
    }
}
