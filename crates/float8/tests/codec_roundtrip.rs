use float8::{ConversionMode, Float8, Float8Error};
use half::bf16;

#[test]
fn decode_golden_values() {
    let golden: &[(u8, f32)] = &[
        (0x00, 0.0),
        (0x01, 0.0087890625),
        (0x08, 0.015625),
        (0x22, 0.15625),
        (0x30, 0.5),
        (0x33, 0.6875),
        (0x38, 1.0),
        (0x39, 1.125),
        (0x40, 2.0),
        (0x41, 2.25),
        (0x44, 3.0),
        (0x4A, 5.0),
        (0x77, 240.0),
        (0x79, 288.0),
        (0x7E, 448.0),
    ];
    for &(bits, expected) in golden {
        let v = Float8::from_bits(bits);
        assert_eq!(v.to_f32(), expected, "decode 0x{bits:02x}");
        // Mirrored sign decodes to the mirrored value.
        let neg = Float8::from_bits(bits | 0x80);
        assert_eq!(neg.to_f32(), -expected, "decode 0x{:02x}", bits | 0x80);
    }

    assert_eq!(Float8::from_bits(0x80).to_f32().to_bits(), (-0.0f32).to_bits());
    assert_eq!(Float8::POSITIVE_INFINITY.to_f32(), f32::INFINITY);
    assert_eq!(Float8::NEGATIVE_INFINITY.to_f32(), f32::NEG_INFINITY);
    assert!(Float8::NAN.to_f32().is_nan());
    assert!(Float8::from_bits(0xFF).to_f32().is_nan());
}

#[test]
fn encode_golden_values() {
    let golden: &[(f32, u8)] = &[
        (0.0, 0x00),
        (-0.0, 0x80),
        (1.0, 0x38),
        (-1.0, 0xB8),
        (2.0, 0x40),
        (3.0, 0x44),
        (5.0, 0x4A),
        (0.15625, 0x22),
        (448.0, 0x7E),
        (-448.0, 0xFE),
        // In range but inexact: rounds to the nearest encoding.
        (449.0, 0x7E),
        (1.06, 0x38),
        (3.2, 0x45),
        (f32::INFINITY, 0x78),
        (f32::NEG_INFINITY, 0xF8),
    ];
    for &(input, expected) in golden {
        assert_eq!(
            Float8::from_f32(input).to_bits(),
            expected,
            "encode {input}"
        );
    }
}

#[test]
fn round_trip_all_encodings() {
    for bits in 0..=u8::MAX {
        let v = Float8::from_bits(bits);
        if v.is_nan() {
            // The two NaN patterns may canonicalize.
            assert!(Float8::from_f32(v.to_f32()).is_nan());
            continue;
        }
        let reencoded = Float8::from_f32(v.to_f32());
        assert_eq!(reencoded.to_bits(), bits, "bits 0x{bits:02x}");
    }
}

#[test]
fn strict_mode_round_trips_without_errors() {
    for bits in 0..=u8::MAX {
        let v = Float8::from_bits(bits);
        if v.is_nan() {
            continue;
        }
        let reencoded = Float8::from_f32_with_mode(v.to_f32(), ConversionMode::Strict)
            .expect("in-range value");
        assert_eq!(reencoded.to_bits(), bits, "bits 0x{bits:02x}");
    }
}

#[test]
fn rounding_is_half_up_not_to_even() {
    // 2.125 is exactly halfway between 2.0 and 2.25; ties round away
    // from zero on the first discarded bit, not toward even.
    assert_eq!(Float8::from_f32(2.125).to_f32(), 2.25);
    assert_eq!(Float8::from_f32(-2.125).to_f32(), -2.25);
    // Below halfway truncates.
    assert_eq!(Float8::from_f32(2.0625).to_f32(), 2.0);
    // A mantissa carry bumps the exponent.
    assert_eq!(Float8::from_f32(1.9375).to_f32(), 2.0);
}

#[test]
fn overflow_saturates_or_errors() {
    assert_eq!(Float8::from_f32(1e10).to_bits(), 0x78);
    assert_eq!(Float8::from_f32(-1e10).to_bits(), 0xF8);
    assert_eq!(Float8::from_f32(512.0).to_bits(), 0x78);

    match Float8::from_f32_with_mode(1e10, ConversionMode::Strict) {
        Err(Float8Error::Overflow { op, value }) => {
            assert_eq!(op, "convert");
            assert_eq!(value, 1e10);
        }
        other => panic!("expected overflow, got {other:?}"),
    }
    // Carry during rounding can overflow too.
    assert!(matches!(
        Float8::from_f32_with_mode(500.0, ConversionMode::Strict),
        Err(Float8Error::Overflow { .. })
    ));
}

#[test]
fn underflow_flushes_or_errors() {
    assert_eq!(Float8::from_f32(1e-10).to_bits(), 0x00);
    assert_eq!(Float8::from_f32(-1e-10).to_bits(), 0x80);
    // 2^-8 sits just below the smallest encodable exponent.
    assert_eq!(Float8::from_f32(0.00390625).to_bits(), 0x00);

    assert!(matches!(
        Float8::from_f32_with_mode(1e-10, ConversionMode::Strict),
        Err(Float8Error::Underflow { .. })
    ));
    assert!(matches!(
        Float8::from_f32_with_mode(-0.00390625, ConversionMode::Strict),
        Err(Float8Error::Underflow { .. })
    ));
}

#[test]
fn nan_maps_or_errors() {
    assert!(Float8::from_f32(f32::NAN).is_nan());
    assert!(matches!(
        Float8::from_f32_with_mode(f32::NAN, ConversionMode::Strict),
        Err(Float8Error::NanUnrepresentable { .. })
    ));
}

#[test]
fn values_between_max_and_overflow_round_into_nan_row() {
    // The top exponent row holds finite values up to 448, then the NaN
    // mantissa; magnitudes rounding past 448 but short of the exponent
    // overflow land on the NaN pattern.
    assert_eq!(Float8::from_f32(460.0).to_bits(), 0x7E);
    assert!(Float8::from_f32(464.0).is_nan());
    assert!(Float8::from_f32(-464.0).is_nan());
    assert_eq!(Float8::from_f32(496.0).to_bits(), 0x78);
}

#[test]
fn wider_float_interop() {
    assert_eq!(Float8::from_f64(2.0).to_bits(), 0x40);
    assert_eq!(Float8::MAX.to_f64(), 448.0);

    assert_eq!(Float8::from_bf16(bf16::from_f32(2.5)).to_f32(), 2.5);
    for bits in 0..=u8::MAX {
        let v = Float8::from_bits(bits);
        if v.is_nan() {
            continue;
        }
        // Every decoded value is exact in bf16.
        assert_eq!(
            Float8::from_bf16(v.to_bf16()).to_bits(),
            bits,
            "bits 0x{bits:02x}"
        );
    }
}
