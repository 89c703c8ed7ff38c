//! Runtime-only entry points.
//!
//! These may use hardware instructions and therefore are not `const`. They
//! return exactly what the constant-evaluable functions return.

use std::sync::OnceLock;

use crate::config::Backend;

static BACKEND: OnceLock<Backend> = OnceLock::new();

/// Backend in use, logged once on first call.
pub fn backend() -> Backend {
    *BACKEND.get_or_init(|| {
        let backend = Backend::selected();
        tracing::debug!(
            backend = backend.name(),
            fma = crate::config::TARGET_HAS_FMA,
            "fpmath runtime backend selected"
        );
        backend
    })
}

/// Square root, through the hardware instruction when the build enables it.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    match backend() {
        Backend::Hardware => sqrt_hw_or_portable(x),
        Backend::Portable => crate::f64::sqrt(x),
    }
}

#[inline]
pub fn sqrtf(x: f32) -> f32 {
    match backend() {
        Backend::Hardware if x >= 0.0 => x.sqrt(),
        _ => crate::f32::sqrt(x),
    }
}

/// In-place square root of every element.
pub fn sqrt_slice(xs: &mut [f64]) {
    match backend() {
        Backend::Hardware => xs.iter_mut().for_each(|x| *x = sqrt_hw_or_portable(*x)),
        Backend::Portable => xs.iter_mut().for_each(|x| *x = crate::f64::sqrt(*x)),
    }
}

// Negative and NaN operands go through the portable path so the NaN that
// comes back has the same sign and payload on every target.
#[inline]
fn sqrt_hw_or_portable(x: f64) -> f64 {
    if x >= 0.0 {
        x.sqrt()
    } else {
        crate::f64::sqrt(x)
    }
}
