use thiserror::Error;

/// Errors raised when foreign data is turned into one of this crate's types.
///
/// The numeric functions themselves never fail; domain errors are reported
/// through NaN and infinity results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FloatError {
    /// Not one of the `FP_*` classification codes.
    #[error("invalid floating-point classification code {0}")]
    InvalidClassCode(i32),

    /// Bits above the 80-bit x87 extended storage are set.
    #[error("bits {0:#x} do not fit the 80-bit extended format")]
    InvalidF80Bits(u128),
}

pub type Result<T> = core::result::Result<T, FloatError>;
