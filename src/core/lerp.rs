// Interpolation helpers.

macro_rules! lerp_impl {
    ($w:ident, $t:ty, $pi:expr) => {
        pub mod $w {
            use crate::core::exp::$w::exp2;
            use crate::core::manip::$w::{fabs, fmax, fmin};
            use crate::core::nearest::$w::floor;

            /// Linear interpolation between `a` (t = 0) and `b` (t = 1).
            ///
            /// Exact at both ends, monotonic in t, and `a + t * (b - a)`
            /// outside [0, 1]. When a and b straddle zero the two-product form
            /// is used instead, which cannot overshoot.
            pub const fn lerp(a: $t, b: $t, t: $t) -> $t {
                if (a <= 0.0 && b >= 0.0) || (a >= 0.0 && b <= 0.0) {
                    return t * b + (1.0 - t) * a;
                }
                if t == 1.0 {
                    return b;
                }
                let x = a + t * (b - a);
                // Rounding may step past b; clamp on the side b lies on.
                if (t > 1.0) == (b > a) {
                    if b < x { x } else { b }
                } else if x < b {
                    x
                } else {
                    b
                }
            }

            /// `x * (1 - a) + y * a`, the shader-style blend.
            #[inline]
            pub const fn mix(x: $t, y: $t, a: $t) -> $t {
                x * (1.0 - a) + y * a
            }

            /// Cubic through four evenly spaced samples, evaluated between
            /// `y1` (t = 0) and `y2` (t = 1).
            pub const fn cubic(y0: $t, y1: $t, y2: $t, y3: $t, t: $t) -> $t {
                let a0 = y3 - y2 - y0 + y1;
                let a1 = y0 - y1 - a0;
                let a2 = y2 - y0;
                let a3 = y1;
                let t2 = t * t;
                a0 * t * t2 + a1 * t2 + a2 * t + a3
            }

            #[inline]
            pub const fn fract(x: $t) -> $t {
                x - floor(x)
            }

            /// Triangle wave over [0, b] with period 2b. `b == 0` gives 0.
            pub const fn ping_pong(a: $t, b: $t) -> $t {
                if b == 0.0 {
                    return 0.0;
                }
                fabs(fract((a - b) / (b * 2.0)) * b * 2.0 - b)
            }

            #[inline]
            pub const fn clamp(v: $t, lo: $t, hi: $t) -> $t {
                fmin(fmax(v, lo), hi)
            }

            /// Hermite step: 0 below `edge0`, 1 above `edge1`, smooth between.
            pub const fn smoothstep(edge0: $t, edge1: $t, x: $t) -> $t {
                let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
                t * t * (3.0 - 2.0 * t)
            }

            /// Position of `value` inside [min, max], clamped to [0, 1].
            pub const fn normalize(value: $t, min: $t, max: $t) -> $t {
                clamp((value - min) / (max - min), 0.0, 1.0)
            }

            /// Frame-rate independent smoothing: moves from `a` toward `b`,
            /// halving the distance every `h` units of `t`.
            pub const fn lerp_smooth(a: $t, b: $t, t: $t, h: $t) -> $t {
                b + (a - b) * exp2(-t / h)
            }

            #[inline]
            pub const fn rcp(x: $t) -> $t {
                1.0 / x
            }

            #[inline]
            pub const fn degrees(radians: $t) -> $t {
                (180.0 * radians) / $pi
            }

            #[inline]
            pub const fn radians(degrees: $t) -> $t {
                ($pi * degrees) / 180.0
            }
        }
    };
}

lerp_impl!(w32, f32, core::f32::consts::PI);
lerp_impl!(w64, f64, core::f64::consts::PI);
