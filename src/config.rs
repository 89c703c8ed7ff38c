//! Build-time capability flags.
//!
//! Everything here is fixed when the crate is compiled. The flags only choose
//! which algorithm the `runtime` entry points run; the numeric results are the
//! same either way.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The target has a correctly rounded hardware square root.
pub const TARGET_HAS_HW_SQRT: bool = cfg!(any(
    target_arch = "x86_64",
    all(target_arch = "x86", target_feature = "sse2"),
    target_arch = "aarch64",
    target_arch = "riscv64",
    target_arch = "powerpc64",
));

/// Hardware square root is both available and opted into (`hw-sqrt`).
pub const HW_SQRT: bool = cfg!(feature = "hw-sqrt") && TARGET_HAS_HW_SQRT;

/// Fused multiply-add is enabled for this compilation. The constant-evaluable
/// paths never depend on it.
pub const TARGET_HAS_FMA: bool = cfg!(target_feature = "fma");

/// Which implementation the runtime entry points use.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Backend {
    /// The constant-evaluable integer/bit implementations.
    Portable,
    /// Hardware instructions through `std`.
    Hardware,
}

impl Backend {
    /// Backend picked by this build.
    pub const fn selected() -> Self {
        if HW_SQRT {
            Backend::Hardware
        } else {
            Backend::Portable
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Backend::Portable => "portable",
            Backend::Hardware => "hardware",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
