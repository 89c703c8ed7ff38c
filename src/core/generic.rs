// Type-generic front end. Classification takes anything `Classify`; the
// numeric functions promote their arguments (`Promote`), binary ones bring
// both operands to the common type first (`Widen`), then the per-width
// constant-evaluable implementation runs.

use crate::core::classify::Classification;
use crate::core::f80::F80;
use crate::core::real::{promote2, Classify, Common, Promote, Real, Widen};

#[inline]
pub fn fpclassify<T: Classify>(x: T) -> Classification {
    x.fpclassify()
}

#[inline]
pub fn isnan<T: Classify>(x: T) -> bool {
    x.isnan()
}

#[inline]
pub fn isinf<T: Classify>(x: T) -> bool {
    x.isinf()
}

#[inline]
pub fn isfinite<T: Classify>(x: T) -> bool {
    x.isfinite()
}

#[inline]
pub fn isnormal<T: Classify>(x: T) -> bool {
    x.isnormal()
}

#[inline]
pub fn issubnormal<T: Classify>(x: T) -> bool {
    x.issubnormal()
}

#[inline]
pub fn iszero<T: Classify>(x: T) -> bool {
    x.iszero()
}

#[inline]
pub fn signbit<T: Classify>(x: T) -> bool {
    x.signbit()
}

macro_rules! unary {
    ($($(#[$m:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$m])*
            #[inline]
            pub fn $name<T: Promote>(x: T) -> T::Output {
                x.promote().$name()
            }
        )*
    };
}

unary!(
    fabs,
    trunc,
    floor,
    ceil,
    /// Half away from zero.
    round,
    /// Ties to even.
    rint,
    fract,
    log,
    log2,
    log10,
    log1p,
    exp,
    exp2,
    expm1,
    sqrt,
    rcp,
    /// Radians to degrees.
    degrees,
    /// Degrees to radians.
    radians,
);

#[inline]
pub fn abs<T: Promote>(x: T) -> T::Output {
    x.promote().fabs()
}

#[inline]
pub fn modf<T: Promote>(x: T) -> (T::Output, T::Output) {
    x.promote().modf()
}

#[inline]
pub fn frexp<T: Promote>(x: T) -> (T::Output, i32) {
    x.promote().frexp()
}

#[inline]
pub fn scalbn<T: Promote>(x: T, n: i32) -> T::Output {
    x.promote().scalbn(n)
}

#[inline]
pub fn nexttoward<T: Promote>(from: T, to: F80) -> T::Output {
    from.promote().nexttoward(to)
}

#[inline]
pub fn ldexp<T: Promote>(x: T, n: i32) -> T::Output {
    x.promote().scalbn(n)
}

macro_rules! binary {
    ($($(#[$m:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$m])*
            #[inline]
            pub fn $name<A, B>(x: A, y: B) -> Common<A, B>
            where
                A: Promote,
                B: Promote,
                A::Output: Widen<B::Output>,
            {
                let (x, y) = promote2(x, y);
                x.$name(y)
            }
        )*
    };
}

binary!(
    /// Magnitude of `x`, sign of `y`; a NaN result takes the sign of `y`.
    copysign,
    fdim,
    fmax,
    fmin,
    fmod,
    /// Truncating remainder `x - trunc(x / y) * y`.
    remainder,
    nextafter,
    pow,
    ping_pong,
);

macro_rules! predicate {
    ($($name:ident),* $(,)?) => {
        $(
            #[inline]
            pub fn $name<A, B>(x: A, y: B) -> bool
            where
                A: Promote,
                B: Promote,
                A::Output: Widen<B::Output>,
            {
                let (x, y) = promote2(x, y);
                x.$name(y)
            }
        )*
    };
}

predicate!(isgreater, isgreaterequal, isless, islessequal, islessgreater, isunordered);

/// IEEE remainder with the low bits of the rounded quotient.
#[inline]
pub fn remquo<A, B>(x: A, y: B) -> (Common<A, B>, i32)
where
    A: Promote,
    B: Promote,
    A::Output: Widen<B::Output>,
{
    let (x, y) = promote2(x, y);
    x.remquo(y)
}

#[inline]
pub fn lerp<T: Real>(a: T, b: T, t: T) -> T {
    a.lerp(b, t)
}

#[inline]
pub fn mix<T: Real>(x: T, y: T, a: T) -> T {
    x.mix(y, a)
}

#[inline]
pub fn cubic<T: Real>(y0: T, y1: T, y2: T, y3: T, t: T) -> T {
    T::cubic(y0, y1, y2, y3, t)
}

#[inline]
pub fn clamp<T: Real>(v: T, lo: T, hi: T) -> T {
    v.clamp(lo, hi)
}

#[inline]
pub fn smoothstep<T: Real>(edge0: T, edge1: T, x: T) -> T {
    T::smoothstep(edge0, edge1, x)
}

#[inline]
pub fn normalize<T: Real>(value: T, min: T, max: T) -> T {
    value.normalize(min, max)
}

#[inline]
pub fn lerp_smooth<T: Real>(a: T, b: T, t: T, h: T) -> T {
    a.lerp_smooth(b, t, h)
}
