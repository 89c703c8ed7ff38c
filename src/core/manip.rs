// Two-operand helpers (fdim, fmin, fmax, nextafter, nexttoward) and NaN
// construction.
// The sign operations live in `sign` and are re-exported per width.

macro_rules! manip_impl {
    ($w:ident, $t:ty, $u:ty) => {
        pub mod $w {
            pub use crate::core::sign::$w::*;
            use crate::core::classify::$w::{isnan, iszero, signbit};
            use crate::core::f80::F80;
            use crate::core::rep::$w as rep;

            /// Positive difference: `x - y` when `x > y`, else `+0`. A NaN
            /// operand is returned unchanged.
            pub const fn fdim(x: $t, y: $t) -> $t {
                if isnan(x) {
                    return x;
                }
                if isnan(y) {
                    return y;
                }
                if x <= y {
                    return 0.0;
                }
                x - y
            }

            /// Larger operand; a NaN loses to a number and `+0` beats `-0`.
            pub const fn fmax(x: $t, y: $t) -> $t {
                if isnan(x) {
                    return y;
                }
                if isnan(y) {
                    return x;
                }
                if x == y {
                    return if signbit(x) { y } else { x };
                }
                if x > y { x } else { y }
            }

            /// Smaller operand; a NaN loses to a number and `-0` beats `+0`.
            pub const fn fmin(x: $t, y: $t) -> $t {
                if isnan(x) {
                    return y;
                }
                if isnan(y) {
                    return x;
                }
                if x == y {
                    return if signbit(x) { x } else { y };
                }
                if x < y { x } else { y }
            }

            const fn digit(c: u8, radix: $u) -> Option<$u> {
                let d = match c {
                    b'0'..=b'9' => (c - b'0') as $u,
                    b'a'..=b'f' => (c - b'a' + 10) as $u,
                    b'A'..=b'F' => (c - b'A' + 10) as $u,
                    _ => return None,
                };
                if d < radix { Some(d) } else { None }
            }

            /// Quiet NaN whose payload is `tag` read as decimal, or as hex
            /// after a `0x` prefix. Unparseable tags give the default NaN.
            pub const fn nan(tag: &str) -> $t {
                let bytes = tag.as_bytes();
                let (mut i, radix): (usize, $u) =
                    if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
                        (2, 16)
                    } else {
                        (0, 10)
                    };
                let mut payload: $u = 0;
                while i < bytes.len() {
                    payload = match digit(bytes[i], radix) {
                        Some(d) => payload.wrapping_mul(radix).wrapping_add(d),
                        None => return rep::QNAN,
                    };
                    i += 1;
                }
                rep::from_bits(rep::EXP_MASK | rep::QUIET_BIT | (payload & (rep::QUIET_BIT - 1)))
            }

            /// Next representable value after `from` in the direction of `to`.
            pub const fn nextafter(from: $t, to: $t) -> $t {
                if isnan(from) {
                    return from;
                }
                if isnan(to) {
                    return to;
                }
                if from == to {
                    return to;
                }
                if iszero(from) {
                    return rep::from_bits(1 | (rep::to_bits(to) & rep::SIGN_MASK));
                }
                let bits = rep::to_bits(from);
                let away_from_zero = (from < to) != signbit(from);
                rep::from_bits(if away_from_zero { bits + 1 } else { bits - 1 })
            }

            /// `nextafter` toward an extended-precision target. A target that
            /// lies between `from` and its neighbour still moves `from`.
            pub const fn nexttoward(from: $t, to: F80) -> $t {
                if isnan(from) {
                    return from;
                }
                if to.isnan() {
                    return to.to_f64() as $t;
                }
                let here = F80::from_f64(from as f64).ordinal();
                let there = to.ordinal();
                if here == there {
                    return to.to_f64() as $t;
                }
                nextafter(from, if there > here { rep::INF } else { rep::NEG_INF })
            }
        }
    };
}

manip_impl!(w32, f32, u32);
manip_impl!(w64, f64, u64);
