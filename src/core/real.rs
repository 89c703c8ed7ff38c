// Traits behind the generic free functions. Each width keeps its own
// constant-evaluable functions in `crate::f32` / `crate::f64`; these traits
// only pick the right one for a type parameter.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::core::classify::Classification;
use crate::core::f80::F80;
use crate::core::rep::FloatBits;
use crate::core::{classify, compare, exp, exp2i, lerp, log, manip, nearest, power, rem, rep};

/// Classification predicates, for floats and for integers.
///
/// Integers are always finite and never NaN, infinite or subnormal; zero is
/// `Zero` and every other value `Normal`.
pub trait Classify: Copy {
    fn isnan(self) -> bool;
    fn isinf(self) -> bool;
    fn isfinite(self) -> bool;
    fn iszero(self) -> bool;
    fn issubnormal(self) -> bool;
    fn isnormal(self) -> bool;
    fn signbit(self) -> bool;
    fn fpclassify(self) -> Classification;
}

macro_rules! classify_float {
    ($t:ty, $w:ident) => {
        impl Classify for $t {
            #[inline] fn isnan(self) -> bool { classify::$w::isnan(self) }
            #[inline] fn isinf(self) -> bool { classify::$w::isinf(self) }
            #[inline] fn isfinite(self) -> bool { classify::$w::isfinite(self) }
            #[inline] fn iszero(self) -> bool { classify::$w::iszero(self) }
            #[inline] fn issubnormal(self) -> bool { classify::$w::issubnormal(self) }
            #[inline] fn isnormal(self) -> bool { classify::$w::isnormal(self) }
            #[inline] fn signbit(self) -> bool { classify::$w::signbit(self) }
            #[inline] fn fpclassify(self) -> Classification { classify::$w::fpclassify(self) }
        }
    };
}

classify_float!(f32, w32);
classify_float!(f64, w64);
#[cfg(feature = "f16")]
classify_float!(f16, w16);
#[cfg(feature = "f128")]
classify_float!(f128, w128);

impl Classify for F80 {
    #[inline] fn isnan(self) -> bool { F80::isnan(self) }
    #[inline] fn isinf(self) -> bool { F80::isinf(self) }
    #[inline] fn isfinite(self) -> bool { F80::isfinite(self) }
    #[inline] fn iszero(self) -> bool { F80::iszero(self) }
    #[inline] fn issubnormal(self) -> bool { F80::issubnormal(self) }
    #[inline] fn isnormal(self) -> bool { F80::isnormal(self) }
    #[inline] fn signbit(self) -> bool { F80::signbit(self) }
    #[inline] fn fpclassify(self) -> Classification { F80::classify(self) }
}

macro_rules! classify_int {
    (@impl $t:ty, $neg:expr) => {
        impl Classify for $t {
            #[inline] fn isnan(self) -> bool { false }
            #[inline] fn isinf(self) -> bool { false }
            #[inline] fn isfinite(self) -> bool { true }
            #[inline] fn iszero(self) -> bool { self == 0 }
            #[inline] fn issubnormal(self) -> bool { false }
            #[inline] fn isnormal(self) -> bool { self != 0 }
            #[inline] fn signbit(self) -> bool { ($neg)(self) }
            #[inline]
            fn fpclassify(self) -> Classification {
                if self == 0 { Classification::Zero } else { Classification::Normal }
            }
        }
    };
    ($($t:ty),*; signed) => { $( classify_int!(@impl $t, |x: $t| x < 0); )* };
    ($($t:ty),*; unsigned) => { $( classify_int!(@impl $t, |_x: $t| false); )* };
}

classify_int!(i8, i16, i32, i64, i128, isize; signed);
classify_int!(u8, u16, u32, u64, u128, usize; unsigned);

/// A binary float the whole library is implemented for.
pub trait Real:
    FloatBits
    + Classify
    + Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    /// Positive quiet NaN.
    const NAN: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;

    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;

    fn copysign(self, sgn: Self) -> Self;
    fn fabs(self) -> Self;
    fn trunc(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    fn rint(self) -> Self;
    fn modf(self) -> (Self, Self);
    fn frexp(self) -> (Self, i32);
    fn scalbn(self, n: i32) -> Self;
    fn nextafter(self, to: Self) -> Self;
    fn nexttoward(self, to: F80) -> Self;

    fn fdim(self, y: Self) -> Self;
    fn fmax(self, y: Self) -> Self;
    fn fmin(self, y: Self) -> Self;
    fn fmod(self, y: Self) -> Self;
    fn remainder(self, y: Self) -> Self;
    fn remquo(self, y: Self) -> (Self, i32);

    fn isgreater(self, y: Self) -> bool;
    fn isgreaterequal(self, y: Self) -> bool;
    fn isless(self, y: Self) -> bool;
    fn islessequal(self, y: Self) -> bool;
    fn islessgreater(self, y: Self) -> bool;
    fn isunordered(self, y: Self) -> bool;

    fn log(self) -> Self;
    fn log2(self) -> Self;
    fn log10(self) -> Self;
    fn log1p(self) -> Self;
    fn exp(self) -> Self;
    fn exp2(self) -> Self;
    fn expm1(self) -> Self;
    fn pow(self, y: Self) -> Self;
    fn sqrt(self) -> Self;

    fn lerp(self, b: Self, t: Self) -> Self;
    fn mix(self, y: Self, a: Self) -> Self;
    fn cubic(y0: Self, y1: Self, y2: Self, y3: Self, t: Self) -> Self;
    fn ping_pong(self, b: Self) -> Self;
    fn fract(self) -> Self;
    fn clamp(self, lo: Self, hi: Self) -> Self;
    fn smoothstep(edge0: Self, edge1: Self, x: Self) -> Self;
    fn normalize(self, min: Self, max: Self) -> Self;
    fn lerp_smooth(self, b: Self, t: Self, h: Self) -> Self;
    fn rcp(self) -> Self;
    fn degrees(self) -> Self;
    fn radians(self) -> Self;
}

macro_rules! real_impl {
    ($t:ty, $w:ident) => {
        impl Real for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NAN: Self = rep::$w::QNAN;
            const INFINITY: Self = rep::$w::INF;
            const NEG_INFINITY: Self = rep::$w::NEG_INF;

            #[inline] fn from_f64(x: f64) -> Self { x as $t }
            #[inline] fn to_f64(self) -> f64 { self as f64 }

            #[inline] fn copysign(self, sgn: Self) -> Self { manip::$w::copysign(self, sgn) }
            #[inline] fn fabs(self) -> Self { manip::$w::fabs(self) }
            #[inline] fn trunc(self) -> Self { nearest::$w::trunc(self) }
            #[inline] fn floor(self) -> Self { nearest::$w::floor(self) }
            #[inline] fn ceil(self) -> Self { nearest::$w::ceil(self) }
            #[inline] fn round(self) -> Self { nearest::$w::round(self) }
            #[inline] fn rint(self) -> Self { nearest::$w::rint(self) }
            #[inline] fn modf(self) -> (Self, Self) { nearest::$w::modf(self) }
            #[inline] fn frexp(self) -> (Self, i32) { exp2i::$w::frexp(self) }
            #[inline] fn scalbn(self, n: i32) -> Self { exp2i::$w::scalbn(self, n) }
            #[inline] fn nextafter(self, to: Self) -> Self { manip::$w::nextafter(self, to) }
            #[inline] fn nexttoward(self, to: F80) -> Self { manip::$w::nexttoward(self, to) }

            #[inline] fn fdim(self, y: Self) -> Self { manip::$w::fdim(self, y) }
            #[inline] fn fmax(self, y: Self) -> Self { manip::$w::fmax(self, y) }
            #[inline] fn fmin(self, y: Self) -> Self { manip::$w::fmin(self, y) }
            #[inline] fn fmod(self, y: Self) -> Self { rem::$w::fmod(self, y) }
            #[inline] fn remainder(self, y: Self) -> Self { rem::$w::remainder(self, y) }
            #[inline] fn remquo(self, y: Self) -> (Self, i32) { rem::$w::remquo(self, y) }

            #[inline] fn isgreater(self, y: Self) -> bool { compare::$w::isgreater(self, y) }
            #[inline] fn isgreaterequal(self, y: Self) -> bool { compare::$w::isgreaterequal(self, y) }
            #[inline] fn isless(self, y: Self) -> bool { compare::$w::isless(self, y) }
            #[inline] fn islessequal(self, y: Self) -> bool { compare::$w::islessequal(self, y) }
            #[inline] fn islessgreater(self, y: Self) -> bool { compare::$w::islessgreater(self, y) }
            #[inline] fn isunordered(self, y: Self) -> bool { compare::$w::isunordered(self, y) }

            #[inline] fn log(self) -> Self { log::$w::log(self) }
            #[inline] fn log2(self) -> Self { log::$w::log2(self) }
            #[inline] fn log10(self) -> Self { log::$w::log10(self) }
            #[inline] fn log1p(self) -> Self { log::$w::log1p(self) }
            #[inline] fn exp(self) -> Self { exp::$w::exp(self) }
            #[inline] fn exp2(self) -> Self { exp::$w::exp2(self) }
            #[inline] fn expm1(self) -> Self { exp::$w::expm1(self) }
            #[inline] fn pow(self, y: Self) -> Self { power::$w::pow(self, y) }
            #[inline] fn sqrt(self) -> Self { power::$w::sqrt(self) }

            #[inline] fn lerp(self, b: Self, t: Self) -> Self { lerp::$w::lerp(self, b, t) }
            #[inline] fn mix(self, y: Self, a: Self) -> Self { lerp::$w::mix(self, y, a) }
            #[inline]
            fn cubic(y0: Self, y1: Self, y2: Self, y3: Self, t: Self) -> Self {
                lerp::$w::cubic(y0, y1, y2, y3, t)
            }
            #[inline] fn ping_pong(self, b: Self) -> Self { lerp::$w::ping_pong(self, b) }
            #[inline] fn fract(self) -> Self { lerp::$w::fract(self) }
            #[inline] fn clamp(self, lo: Self, hi: Self) -> Self { lerp::$w::clamp(self, lo, hi) }
            #[inline]
            fn smoothstep(edge0: Self, edge1: Self, x: Self) -> Self {
                lerp::$w::smoothstep(edge0, edge1, x)
            }
            #[inline] fn normalize(self, min: Self, max: Self) -> Self { lerp::$w::normalize(self, min, max) }
            #[inline]
            fn lerp_smooth(self, b: Self, t: Self, h: Self) -> Self {
                lerp::$w::lerp_smooth(self, b, t, h)
            }
            #[inline] fn rcp(self) -> Self { lerp::$w::rcp(self) }
            #[inline] fn degrees(self) -> Self { lerp::$w::degrees(self) }
            #[inline] fn radians(self) -> Self { lerp::$w::radians(self) }
        }
    };
}

real_impl!(f32, w32);
real_impl!(f64, w64);

/// Argument promotion for the generic functions: floats stay as they are,
/// integers compute in `f64` as `<cmath>` does.
pub trait Promote: Copy {
    type Output: Real;
    fn promote(self) -> Self::Output;
}

impl Promote for f32 {
    type Output = f32;
    #[inline]
    fn promote(self) -> f32 {
        self
    }
}

impl Promote for f64 {
    type Output = f64;
    #[inline]
    fn promote(self) -> f64 {
        self
    }
}

macro_rules! promote_int {
    ($($t:ty),*) => {
        $(
            impl Promote for $t {
                type Output = f64;
                #[inline]
                fn promote(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

promote_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Common representation of two promoted operands: f32 only when both are.
pub trait Widen<B: Real>: Real {
    type Common: Real;
    fn widen(a: Self, b: B) -> (Self::Common, Self::Common);
}

macro_rules! widen_impl {
    ($a:ty, $b:ty => $out:ty) => {
        impl Widen<$b> for $a {
            type Common = $out;
            #[inline]
            fn widen(a: $a, b: $b) -> ($out, $out) {
                (a as $out, b as $out)
            }
        }
    };
}

widen_impl!(f32, f32 => f32);
widen_impl!(f32, f64 => f64);
widen_impl!(f64, f32 => f64);
widen_impl!(f64, f64 => f64);

/// Result type of a binary generic function on `A` and `B`.
pub type Common<A, B> = <<A as Promote>::Output as Widen<<B as Promote>::Output>>::Common;

/// Promote both operands and bring them to their common type.
#[inline]
pub fn promote2<A, B>(a: A, b: B) -> (Common<A, B>, Common<A, B>)
where
    A: Promote,
    B: Promote,
    A::Output: Widen<B::Output>,
{
    Widen::widen(a.promote(), b.promote())
}
