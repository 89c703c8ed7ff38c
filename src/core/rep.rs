// Field-level view of IEEE-754 storage. Everything here is a plain integer
// reinterpretation (`to_bits`/`from_bits`), so it also runs during constant
// evaluation.

/// Sign, biased exponent and stored mantissa of a float, exactly as encoded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Unpacked<B> {
    pub sign:            bool, // true when the sign bit is set
    pub biased_exponent: u32,  // raw exponent field
    pub mantissa:        B,    // stored fraction bits (no implicit bit)
}

/// A fixed-width binary float whose storage can be viewed as raw bits.
///
/// The masks describe where the sign, exponent and mantissa fields live inside
/// `Bits`. `to_bits`/`from_bits` must be exact inverses for every bit pattern,
/// NaN payloads and signed zeros included.
pub trait FloatBits: Copy {
    type Bits: Copy + Eq + core::fmt::Debug + core::fmt::LowerHex + Into<u128>;

    const WIDTH: u32;
    const MANT_BITS: u32;
    const EXP_BITS: u32;
    const BIAS: i32;
    const SIGN_MASK: Self::Bits;
    const EXP_MASK: Self::Bits;
    const MANT_MASK: Self::Bits;

    fn to_bits(self) -> Self::Bits;
    fn from_bits(bits: Self::Bits) -> Self;
    fn unpack(self) -> Unpacked<Self::Bits>;
    fn pack(u: Unpacked<Self::Bits>) -> Self;

    /// Exponent field with the bias removed; zeros and subnormals give `-BIAS`.
    #[inline]
    fn exponent(self) -> i32 {
        self.unpack().biased_exponent as i32 - Self::BIAS
    }
}

macro_rules! bits_impl {
    ($w:ident, $t:ty, $u:ty, $mant:expr, $exp:expr) => {
        pub mod $w {
            use super::Unpacked;

            pub type Bits = $u;

            pub const WIDTH: u32 = <$u>::BITS;
            pub const MANT_BITS: u32 = $mant;
            pub const EXP_BITS: u32 = $exp;
            pub const BIAS: i32 = (1 << (EXP_BITS - 1)) - 1;
            /// Raw exponent field shared by infinities and NaNs.
            pub const EXP_MAX: u32 = (1 << EXP_BITS) - 1;

            pub const SIGN_MASK: $u = (1 as $u) << (WIDTH - 1);
            pub const EXP_MASK: $u = (EXP_MAX as $u) << MANT_BITS;
            pub const MANT_MASK: $u = ((1 as $u) << MANT_BITS) - 1;
            pub const QUIET_BIT: $u = (1 as $u) << (MANT_BITS - 1);

            pub const QNAN: $t = <$t>::from_bits(EXP_MASK | QUIET_BIT);
            pub const NEG_QNAN: $t = <$t>::from_bits(SIGN_MASK | EXP_MASK | QUIET_BIT);
            pub const INF: $t = <$t>::from_bits(EXP_MASK);
            pub const NEG_INF: $t = <$t>::from_bits(SIGN_MASK | EXP_MASK);

            #[inline]
            pub const fn to_bits(x: $t) -> $u {
                x.to_bits()
            }

            #[inline]
            pub const fn from_bits(bits: $u) -> $t {
                <$t>::from_bits(bits)
            }

            /// Split into sign / biased exponent / mantissa.
            #[inline]
            pub const fn unpack(x: $t) -> Unpacked<$u> {
                let bits = to_bits(x);
                Unpacked {
                    sign: bits & SIGN_MASK != 0,
                    biased_exponent: ((bits & EXP_MASK) >> MANT_BITS) as u32,
                    mantissa: bits & MANT_MASK,
                }
            }

            /// Reassemble fields produced by `unpack`. Out-of-range fields are
            /// masked, never carried into neighbouring fields.
            #[inline]
            pub const fn pack(u: Unpacked<$u>) -> $t {
                let sign = if u.sign { SIGN_MASK } else { 0 };
                let exp = ((u.biased_exponent as $u) << MANT_BITS) & EXP_MASK;
                from_bits(sign | exp | (u.mantissa & MANT_MASK))
            }

            /// Bits with the sign cleared.
            #[inline]
            pub const fn magnitude_bits(x: $t) -> $u {
                to_bits(x) & !SIGN_MASK
            }

            /// Raw exponent field.
            #[inline]
            pub const fn biased_exponent(x: $t) -> u32 {
                ((to_bits(x) & EXP_MASK) >> MANT_BITS) as u32
            }
        }

        impl FloatBits for $t {
            type Bits = $u;

            const WIDTH: u32 = $w::WIDTH;
            const MANT_BITS: u32 = $w::MANT_BITS;
            const EXP_BITS: u32 = $w::EXP_BITS;
            const BIAS: i32 = $w::BIAS;
            const SIGN_MASK: $u = $w::SIGN_MASK;
            const EXP_MASK: $u = $w::EXP_MASK;
            const MANT_MASK: $u = $w::MANT_MASK;

            #[inline]
            fn to_bits(self) -> $u {
                $w::to_bits(self)
            }
            #[inline]
            fn from_bits(bits: $u) -> Self {
                $w::from_bits(bits)
            }
            #[inline]
            fn unpack(self) -> Unpacked<$u> {
                $w::unpack(self)
            }
            #[inline]
            fn pack(u: Unpacked<$u>) -> Self {
                $w::pack(u)
            }
        }
    };
}

bits_impl!(w32, f32, u32, 23, 8);
bits_impl!(w64, f64, u64, 52, 11);
#[cfg(feature = "f16")]
bits_impl!(w16, f16, u16, 10, 5);
#[cfg(feature = "f128")]
bits_impl!(w128, f128, u128, 112, 15);
