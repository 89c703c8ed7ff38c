mod bit_view {
    use crate::core::rep::{self, FloatBits, Unpacked};

    fn round_trips<T: FloatBits + Copy>(bits: T::Bits) -> bool {
        T::from_bits(bits).to_bits() == bits
    }

    #[test]
    fn masks_match_ieee_layout() {
        assert_eq!(rep::w64::SIGN_MASK, 0x8000_0000_0000_0000);
        assert_eq!(rep::w64::EXP_MASK, 0x7ff0_0000_0000_0000);
        assert_eq!(rep::w64::MANT_MASK, 0x000f_ffff_ffff_ffff);
        assert_eq!(rep::w64::BIAS, 1023);
        assert_eq!(rep::w32::SIGN_MASK, 0x8000_0000);
        assert_eq!(rep::w32::EXP_MASK, 0x7f80_0000);
        assert_eq!(rep::w32::MANT_MASK, 0x007f_ffff);
        assert_eq!(rep::w32::BIAS, 127);
        assert_eq!(<f64 as FloatBits>::WIDTH, 64);
        assert_eq!(<f32 as FloatBits>::MANT_BITS, 23);
    }

    #[test]
    fn sentinels_have_canonical_bits() {
        assert_eq!(rep::w64::QNAN.to_bits(), 0x7ff8_0000_0000_0000);
        assert_eq!(rep::w64::NEG_QNAN.to_bits(), 0xfff8_0000_0000_0000);
        assert_eq!(rep::w32::QNAN.to_bits(), 0x7fc0_0000);
        assert_eq!(rep::w32::NEG_QNAN.to_bits(), 0xffc0_0000);
        assert_eq!(rep::w64::INF, f64::INFINITY);
        assert_eq!(rep::w32::NEG_INF, f32::NEG_INFINITY);
    }

    #[test]
    fn every_pattern_class_round_trips() {
        let patterns: [u64; 8] = [
            0,
            0x8000_0000_0000_0000,
            0x0000_0000_0000_0001,
            0x7ff0_0000_0000_0000,
            0x7ff0_0000_0000_0001, // signaling NaN
            0xfff8_dead_beef_0042, // negative quiet NaN with payload
            0x3ff0_0000_0000_0000,
            0xffef_ffff_ffff_ffff,
        ];
        for bits in patterns {
            assert!(round_trips::<f64>(bits), "{bits:#x}");
        }
        for bits in [0u32, 0x8000_0000, 0x7f80_0001, 0xffc0_1234, 0x0000_0001] {
            assert!(round_trips::<f32>(bits), "{bits:#x}");
        }
    }

    #[test]
    fn unpack_splits_fields() {
        let u = rep::w64::unpack(-1.5);
        println!("unpack(-1.5) = {u:?}");
        assert_eq!(
            u,
            Unpacked { sign: true, biased_exponent: 1023, mantissa: 0x0008_0000_0000_0000 }
        );
        assert_eq!((-1.5f64).exponent(), 0);
        assert_eq!(1024.0f64.exponent(), 10);

        let sub = rep::w32::unpack(f32::from_bits(3));
        assert_eq!(sub.biased_exponent, 0);
        assert_eq!(sub.mantissa, 3);
        assert_eq!(f32::from_bits(3).exponent(), -127);
        assert_eq!(f32::MAX.exponent(), 127);
    }

    #[test]
    fn pack_inverts_unpack() {
        for x in crate::core::tests::utils::SPECIALS {
            let back = rep::w64::pack(rep::w64::unpack(x));
            assert_eq!(back.to_bits(), x.to_bits());
            let generic = <f64 as FloatBits>::pack(x.unpack());
            assert_eq!(generic.to_bits(), x.to_bits());
        }
    }

    #[test]
    fn pack_masks_oversized_fields() {
        let u = Unpacked { sign: false, biased_exponent: 0x1_3ff, mantissa: u64::MAX };
        let x = rep::w64::pack(u);
        assert_eq!(x.to_bits(), 0x3fff_ffff_ffff_ffff);
    }

    #[test]
    fn magnitude_and_exponent_helpers() {
        assert_eq!(rep::w64::magnitude_bits(-0.0), 0);
        assert_eq!(rep::w64::biased_exponent(1.0), 1023);
        assert_eq!(rep::w64::biased_exponent(f64::INFINITY), rep::w64::EXP_MAX);
        assert_eq!(rep::w32::biased_exponent(2.0), 128);
    }
}
