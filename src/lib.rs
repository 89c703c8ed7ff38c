#![cfg_attr(feature = "f16", feature(f16))]
#![cfg_attr(feature = "f128", feature(f128))]

pub mod core;
pub use crate::core::*;

pub mod budget;
pub mod config;
pub mod error;
pub mod runtime;

pub use error::{FloatError, Result};

/// Constant-evaluable single-precision surface.
pub mod f32 {
    pub use crate::core::classify::w32::*;
    pub use crate::core::compare::w32::*;
    pub use crate::core::exp::w32::*;
    pub use crate::core::exp2i::w32::*;
    pub use crate::core::lerp::w32::*;
    pub use crate::core::log::w32::*;
    pub use crate::core::manip::w32::*;
    pub use crate::core::nearest::w32::*;
    pub use crate::core::power::w32::*;
    pub use crate::core::rem::w32::*;
    pub use crate::core::rep::w32::*;
}

/// Constant-evaluable double-precision surface.
pub mod f64 {
    pub use crate::core::classify::w64::*;
    pub use crate::core::compare::w64::*;
    pub use crate::core::exp::w64::*;
    pub use crate::core::exp2i::w64::*;
    pub use crate::core::lerp::w64::*;
    pub use crate::core::log::w64::*;
    pub use crate::core::manip::w64::*;
    pub use crate::core::nearest::w64::*;
    pub use crate::core::power::w64::*;
    pub use crate::core::rem::w64::*;
    pub use crate::core::rep::w64::*;
}

/// Bit view, classification, ordering and sign operations for `f16`.
#[cfg(feature = "f16")]
pub mod f16 {
    pub use crate::core::classify::w16::*;
    pub use crate::core::compare::w16::*;
    pub use crate::core::rep::w16::*;
    pub use crate::core::sign::w16::*;
}

/// Bit view, classification, ordering and sign operations for `f128`.
#[cfg(feature = "f128")]
pub mod f128 {
    pub use crate::core::classify::w128::*;
    pub use crate::core::compare::w128::*;
    pub use crate::core::rep::w128::*;
    pub use crate::core::sign::w128::*;
}
