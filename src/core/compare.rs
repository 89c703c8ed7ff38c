// NaN-aware relational predicates. Any NaN operand makes every ordering
// predicate false and `isunordered` true; otherwise the plain operator decides.

macro_rules! compare_impl {
    ($w:ident, $t:ty) => {
        pub mod $w {
            use crate::core::classify::$w::isnan;

            #[inline]
            pub const fn isunordered(x: $t, y: $t) -> bool {
                isnan(x) || isnan(y)
            }

            #[inline]
            pub const fn isgreater(x: $t, y: $t) -> bool {
                !isunordered(x, y) && x > y
            }

            #[inline]
            pub const fn isgreaterequal(x: $t, y: $t) -> bool {
                !isunordered(x, y) && x >= y
            }

            #[inline]
            pub const fn isless(x: $t, y: $t) -> bool {
                !isunordered(x, y) && x < y
            }

            #[inline]
            pub const fn islessequal(x: $t, y: $t) -> bool {
                !isunordered(x, y) && x <= y
            }

            /// Ordered and not equal; `-0.0` and `+0.0` compare equal.
            #[inline]
            pub const fn islessgreater(x: $t, y: $t) -> bool {
                !isunordered(x, y) && (x < y || x > y)
            }
        }
    };
}

compare_impl!(w32, f32);
compare_impl!(w64, f64);
#[cfg(feature = "f16")]
compare_impl!(w16, f16);
#[cfg(feature = "f128")]
compare_impl!(w128, f128);
