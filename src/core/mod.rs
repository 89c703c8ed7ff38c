// Bit view and classification
pub mod rep;
pub mod classify;
pub mod compare;
pub mod f80;

// Manipulation
pub mod sign;
pub mod manip;
pub mod exp2i;
pub mod nearest;
pub mod rem;

// Evaluators
pub mod dd;
pub mod poly;
pub mod log;
pub mod exp;
pub mod power;
pub mod lerp;

// Generic front end
pub mod real;
pub mod generic;

pub use classify::{Classification, FP_INFINITE, FP_NAN, FP_NORMAL, FP_SUBNORMAL, FP_ZERO};
pub use f80::F80;
pub use generic::*;
pub use log::RangeReduction;
pub use poly::Poly;
pub use real::{Classify, Common, Promote, Real, Widen};
pub use rep::{FloatBits, Unpacked};

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
