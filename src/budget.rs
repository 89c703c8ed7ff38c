//! Accuracy budget of the transcendental functions.
//!
//! Results are compared against `std` in units in the last place. `BUDGETS`
//! lists the largest distance each function is allowed; `measure` walks a
//! sample grid and reports the worst input it found.

use std::fmt;

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::real::Classify;
use crate::core::rep::FloatBits;

/// Distance between `a` and `b` in representable steps.
///
/// `+0` and `-0` are the same point. Two NaNs are 0 apart; a NaN and a
/// number are `u128::MAX` apart.
pub fn ulp_diff<T: FloatBits + Classify>(a: T, b: T) -> u128 {
    if a.isnan() || b.isnan() {
        return if a.isnan() && b.isnan() { 0 } else { u128::MAX };
    }
    let sign: u128 = T::SIGN_MASK.into();
    let split = |x: T| {
        let bits: u128 = x.to_bits().into();
        (bits & sign != 0, bits & !sign)
    };
    let (sa, ma) = split(a);
    let (sb, mb) = split(b);
    if sa == sb || ma == 0 || mb == 0 {
        ma.abs_diff(mb)
    } else {
        ma.saturating_add(mb)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Function {
    Log,
    Log2,
    Log10,
    Log1p,
    Exp,
    Exp2,
    Expm1,
    Pow,
    Sqrt,
}

impl Function {
    pub const ALL: [Function; 9] = [
        Function::Log,
        Function::Log2,
        Function::Log10,
        Function::Log1p,
        Function::Exp,
        Function::Exp2,
        Function::Expm1,
        Function::Pow,
        Function::Sqrt,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Function::Log => "log",
            Function::Log2 => "log2",
            Function::Log10 => "log10",
            Function::Log1p => "log1p",
            Function::Exp => "exp",
            Function::Exp2 => "exp2",
            Function::Expm1 => "expm1",
            Function::Pow => "pow",
            Function::Sqrt => "sqrt",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Function::ALL.into_iter().find(|f| f.name() == name)
    }

    pub const fn is_binary(self) -> bool {
        matches!(self, Function::Pow)
    }

    /// (ours, std) in double precision.
    pub fn eval_f64(self, x: f64, y: f64) -> (f64, f64) {
        match self {
            Function::Log => (crate::f64::log(x), x.ln()),
            Function::Log2 => (crate::f64::log2(x), x.log2()),
            Function::Log10 => (crate::f64::log10(x), x.log10()),
            Function::Log1p => (crate::f64::log1p(x), x.ln_1p()),
            Function::Exp => (crate::f64::exp(x), x.exp()),
            Function::Exp2 => (crate::f64::exp2(x), x.exp2()),
            Function::Expm1 => (crate::f64::expm1(x), x.exp_m1()),
            Function::Pow => (crate::f64::pow(x, y), x.powf(y)),
            Function::Sqrt => (crate::f64::sqrt(x), x.sqrt()),
        }
    }

    /// (ours, std) in single precision. The reference is the double result
    /// rounded once.
    pub fn eval_f32(self, x: f32, y: f32) -> (f32, f32) {
        let ours = match self {
            Function::Log => crate::f32::log(x),
            Function::Log2 => crate::f32::log2(x),
            Function::Log10 => crate::f32::log10(x),
            Function::Log1p => crate::f32::log1p(x),
            Function::Exp => crate::f32::exp(x),
            Function::Exp2 => crate::f32::exp2(x),
            Function::Expm1 => crate::f32::expm1(x),
            Function::Pow => crate::f32::pow(x, y),
            Function::Sqrt => crate::f32::sqrt(x),
        };
        let (_, reference) = self.eval_f64(x as f64, y as f64);
        (ours, reference as f32)
    }

    /// Sample inputs `(x, y)` covering the domain the budget is promised on.
    pub fn samples(self, n: usize) -> Vec<(f64, f64)> {
        let unary = |xs: Vec<f64>| xs.into_iter().map(|x| (x, 0.0)).collect::<Vec<_>>();
        match self {
            Function::Log | Function::Log2 | Function::Log10 | Function::Sqrt => {
                let mut xs = log_samples(1e-300, 1e300, n);
                xs.extend(linear_samples(0.5, 2.0, n));
                unary(xs)
            }
            Function::Log1p => {
                let mut xs = linear_samples(-0.999, 10.0, n);
                xs.extend(log_samples(1e-12, 1e6, n));
                xs.extend(log_samples(1e-12, 0.5, n).into_iter().map(|x| -x));
                unary(xs)
            }
            Function::Exp => unary(linear_samples(-700.0, 700.0, n)),
            Function::Exp2 => unary(linear_samples(-1020.0, 1020.0, n)),
            Function::Expm1 => {
                let mut xs = linear_samples(-30.0, 30.0, n);
                xs.extend(log_samples(1e-12, 0.5, n));
                xs.extend(log_samples(1e-12, 0.5, n).into_iter().map(|x| -x));
                unary(xs)
            }
            Function::Pow => {
                let side = (n as f64).sqrt().ceil() as usize;
                let grid = |xs: Vec<f64>, ys: Vec<f64>| {
                    xs.into_iter()
                        .flat_map(move |x| ys.clone().into_iter().map(move |y| (x, y)))
                        .collect::<Vec<_>>()
                };
                let mut pairs = grid(log_samples(1e-3, 1e3, side.max(2)), linear_samples(-9.0, 9.0, side.max(2)));
                // Wide exponents, kept where the result is a normal number.
                pairs.extend(
                    grid(linear_samples(0.6, 1.6, side.max(2)), linear_samples(-2000.0, 2000.0, side.max(2)))
                        .into_iter()
                        .filter(|&(x, y)| (y * x.ln()).abs() < 700.0),
                );
                pairs
            }
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Precision {
    Single,
    Double,
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Precision::Single => "f32",
            Precision::Double => "f64",
        })
    }
}

/// Largest allowed distance from `std` for one function at one precision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Budget {
    pub function:  Function,
    pub precision: Precision,
    pub max_ulps:  u64,
}

const fn budget(function: Function, precision: Precision, max_ulps: u64) -> Budget {
    Budget { function, precision, max_ulps }
}

pub const BUDGETS: [Budget; 18] = [
    budget(Function::Log, Precision::Double, 2),
    budget(Function::Log2, Precision::Double, 2),
    budget(Function::Log10, Precision::Double, 2),
    budget(Function::Log1p, Precision::Double, 3),
    budget(Function::Exp, Precision::Double, 2),
    budget(Function::Exp2, Precision::Double, 2),
    budget(Function::Expm1, Precision::Double, 3),
    budget(Function::Pow, Precision::Double, 8),
    budget(Function::Sqrt, Precision::Double, 0),
    budget(Function::Log, Precision::Single, 1),
    budget(Function::Log2, Precision::Single, 1),
    budget(Function::Log10, Precision::Single, 1),
    budget(Function::Log1p, Precision::Single, 1),
    budget(Function::Exp, Precision::Single, 1),
    budget(Function::Exp2, Precision::Single, 1),
    budget(Function::Expm1, Precision::Single, 1),
    budget(Function::Pow, Precision::Single, 1),
    budget(Function::Sqrt, Precision::Single, 0),
];

/// Budget entry for a function and precision.
pub fn budget_for(function: Function, precision: Precision) -> Option<Budget> {
    BUDGETS
        .iter()
        .copied()
        .find(|b| b.function == function && b.precision == precision)
}

/// Worst case found by `measure`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BudgetReport {
    pub budget:    Budget,
    pub samples:   usize,
    pub worst_x:   f64,
    pub worst_y:   f64,
    pub ours:      f64,
    pub reference: f64,
    pub ulps:      u64,
}

impl BudgetReport {
    pub fn passed(&self) -> bool {
        self.ulps <= self.budget.max_ulps
    }
}

impl fmt::Display for BudgetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed() { "ok" } else { "FAIL" };
        write!(
            f,
            "{:<6} {:<4} max {:>2} ulp, worst {:>2} ulp at x={:e}",
            self.budget.function, self.budget.precision, self.budget.max_ulps, self.ulps, self.worst_x
        )?;
        if self.budget.function.is_binary() {
            write!(f, " y={:e}", self.worst_y)?;
        }
        write!(f, " (ours {:e}, std {:e}) [{}]", self.ours, self.reference, status)
    }
}

/// Evaluate `budget.function` on `samples` and keep the largest distance.
pub fn measure(budget: Budget, samples: &[(f64, f64)]) -> BudgetReport {
    let mut report = BudgetReport {
        budget,
        samples: samples.len(),
        worst_x: f64::NAN,
        worst_y: f64::NAN,
        ours: f64::NAN,
        reference: f64::NAN,
        ulps: 0,
    };
    let mut first = true;
    for &(x, y) in samples {
        let (ours, reference, ulps) = match budget.precision {
            Precision::Double => {
                let (o, r) = budget.function.eval_f64(x, y);
                (o, r, ulp_diff(o, r))
            }
            Precision::Single => {
                let (o, r) = budget.function.eval_f32(x as f32, y as f32);
                (o as f64, r as f64, ulp_diff(o, r))
            }
        };
        let ulps = u64::try_from(ulps).unwrap_or(u64::MAX);
        if first || ulps > report.ulps {
            first = false;
            report.worst_x = x;
            report.worst_y = y;
            report.ours = ours;
            report.reference = reference;
            report.ulps = ulps;
        }
    }
    report
}

/// Measure every entry of `BUDGETS` with `n` samples per range.
pub fn measure_all(n: usize) -> Vec<BudgetReport> {
    BUDGETS
        .iter()
        .map(|&b| measure(b, &b.function.samples(n)))
        .collect()
}

/// `n` points spaced evenly in log scale over `[lo, hi]`, both positive.
pub fn log_samples<T: Float>(lo: T, hi: T, n: usize) -> Vec<T> {
    let (a, b) = (lo.ln(), hi.ln());
    linear_samples(a, b, n).into_iter().map(Float::exp).collect()
}

/// `n` evenly spaced points over `[lo, hi]`, both ends included.
pub fn linear_samples<T: Float>(lo: T, hi: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let mut steps = T::zero();
            for _ in 1..n {
                steps = steps + T::one();
            }
            let mut out = Vec::with_capacity(n);
            let mut i = T::zero();
            for _ in 0..n {
                out.push(lo + (hi - lo) * i / steps);
                i = i + T::one();
            }
            out
        }
    }
}
