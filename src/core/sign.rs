// Sign-bit operations, available for every supported width.

macro_rules! sign_impl {
    ($w:ident, $t:ty) => {
        pub mod $w {
            use crate::core::classify::$w::isnan;
            use crate::core::rep::$w as rep;

            /// Magnitude of `mag` with the sign bit of `sgn`, bit for bit and
            /// with no NaN special-casing.
            #[inline]
            pub const fn copysign_bits(mag: $t, sgn: $t) -> $t {
                rep::from_bits(rep::magnitude_bits(mag) | (rep::to_bits(sgn) & rep::SIGN_MASK))
            }

            /// Magnitude of `mag`, sign of `sgn`.
            ///
            /// A NaN in either operand yields a NaN carrying the sign of `sgn`;
            /// a NaN `mag` keeps its payload.
            pub const fn copysign(mag: $t, sgn: $t) -> $t {
                if isnan(mag) {
                    return copysign_bits(mag, sgn);
                }
                if isnan(sgn) {
                    return copysign_bits(rep::QNAN, sgn);
                }
                copysign_bits(mag, sgn)
            }

            /// Clears the sign bit, NaNs included.
            #[inline]
            pub const fn fabs(x: $t) -> $t {
                rep::from_bits(rep::magnitude_bits(x))
            }

            #[inline]
            pub const fn abs(x: $t) -> $t {
                fabs(x)
            }
        }
    };
}

sign_impl!(w32, f32);
sign_impl!(w64, f64);
#[cfg(feature = "f16")]
sign_impl!(w16, f16);
#[cfg(feature = "f128")]
sign_impl!(w128, f128);
