//! Conversion between `Float8` and IEEE 754 binary32.

use half::bf16;

use crate::config;
use crate::tables;
use crate::types::{
    ConversionMode, Float8, Float8Error, Result, EXPONENT_BIAS, EXPONENT_MAX, F32_BIAS,
    F32_MANTISSA_BITS, MANTISSA_BITS,
};

impl Float8 {
    /// Converts `value`, saturating on overflow and flushing to zero on
    /// underflow. Never fails; NaN input maps to NaN.
    pub fn from_f32(value: f32) -> Self {
        // ConversionMode::Default reports no errors.
        Self::from_f32_with_mode(value, ConversionMode::Default).unwrap_or(Self::NAN)
    }

    /// Converts `value` under the given conversion mode.
    ///
    /// In `Strict` mode, values outside the representable range yield
    /// `Overflow`/`Underflow` and NaN yields `NanUnrepresentable`; in
    /// `Default` mode those cases saturate, flush, and map to NaN
    /// respectively.
    pub fn from_f32_with_mode(value: f32, mode: ConversionMode) -> Result<Self> {
        if value == 0.0 {
            return Ok(if value.is_sign_negative() {
                Self::NEGATIVE_ZERO
            } else {
                Self::POSITIVE_ZERO
            });
        }
        if value.is_infinite() {
            return Ok(if value < 0.0 {
                Self::NEGATIVE_INFINITY
            } else {
                Self::POSITIVE_INFINITY
            });
        }
        if value.is_nan() {
            return match mode {
                ConversionMode::Strict => Err(Float8Error::NanUnrepresentable {
                    op: "convert",
                    value,
                }),
                ConversionMode::Default => Ok(Self::NAN),
            };
        }

        let bits = value.to_bits();
        let sign = (bits >> 31) as u8;
        let exp = ((bits >> F32_MANTISSA_BITS) & 0xFF) as i32;
        let mant = bits & 0x007F_FFFF;

        // Rebias from binary32 into the 4-bit exponent field.
        let mut exp8 = exp - F32_BIAS + EXPONENT_BIAS;

        if exp8 > EXPONENT_MAX {
            return match mode {
                ConversionMode::Strict => Err(Float8Error::Overflow {
                    op: "convert",
                    value,
                }),
                ConversionMode::Default => Ok(Self::signed_infinity(sign)),
            };
        }
        // The smallest encodable exponent field is 0; anything below it
        // (f32 subnormals included) flushes.
        if exp8 < 0 {
            return match mode {
                ConversionMode::Strict => Err(Float8Error::Underflow {
                    op: "convert",
                    value,
                }),
                ConversionMode::Default => Ok(Self::signed_zero(sign)),
            };
        }

        // Truncate to 3 mantissa bits, rounding half up away from zero on
        // the first discarded bit.
        let mut mant8 = mant >> (F32_MANTISSA_BITS - MANTISSA_BITS);
        if (mant >> (F32_MANTISSA_BITS - MANTISSA_BITS - 1)) & 1 != 0 {
            mant8 += 1;
            if mant8 >= 1 << MANTISSA_BITS {
                // Mantissa carry bumps the exponent.
                mant8 = 0;
                exp8 += 1;
                if exp8 > EXPONENT_MAX {
                    return match mode {
                        ConversionMode::Strict => Err(Float8Error::Overflow {
                            op: "convert",
                            value,
                        }),
                        ConversionMode::Default => Ok(Self::signed_infinity(sign)),
                    };
                }
            }
        }

        Ok(Self::from_bits(
            (sign << 7) | ((exp8 as u8) << MANTISSA_BITS) | mant8 as u8,
        ))
    }

    /// Converts to `f32`. Exact for every bit pattern; this direction
    /// never loses information.
    pub fn to_f32(self) -> f32 {
        match tables::decode(self) {
            Some(value) => value,
            None => self.to_f32_algorithmic(),
        }
    }

    pub(crate) fn to_f32_algorithmic(self) -> f32 {
        if self.is_zero() {
            return if self.is_sign_negative() { -0.0 } else { 0.0 };
        }
        if self.is_nan() {
            return f32::NAN;
        }
        if self.is_infinite() {
            return if self.is_sign_negative() {
                f32::NEG_INFINITY
            } else {
                f32::INFINITY
            };
        }

        let bits = self.to_bits() as u32;
        let sign = bits >> 7;
        let exp8 = (bits >> MANTISSA_BITS) & 0x0F;
        let mant8 = bits & 0x07;

        // The exponent-0 row keeps the implicit leading 1 at exponent -7,
        // so every decoded value re-encodes to the same byte.
        let exp32 = (exp8 as i32 - EXPONENT_BIAS + F32_BIAS) as u32;
        let mant32 = mant8 << (F32_MANTISSA_BITS - MANTISSA_BITS);
        f32::from_bits((sign << 31) | (exp32 << F32_MANTISSA_BITS) | mant32)
    }

    /// Converts `value` through `f32`, saturating like `from_f32`.
    pub fn from_f64(value: f64) -> Self {
        Self::from_f32(value as f32)
    }

    /// Converts to `f64`. Exact.
    pub fn to_f64(self) -> f64 {
        f64::from(self.to_f32())
    }

    /// Converts a `bf16` value, saturating like `from_f32`.
    pub fn from_bf16(value: bf16) -> Self {
        Self::from_f32(f32::from(value))
    }

    /// Converts to `bf16`. Exact: every decoded value fits in `bf16`'s
    /// 8-bit mantissa and wider exponent range.
    pub fn to_bf16(self) -> bf16 {
        bf16::from_f32(self.to_f32())
    }

    #[inline]
    fn signed_infinity(sign: u8) -> Self {
        if sign != 0 {
            Self::NEGATIVE_INFINITY
        } else {
            Self::POSITIVE_INFINITY
        }
    }

    #[inline]
    fn signed_zero(sign: u8) -> Self {
        if sign != 0 {
            Self::NEGATIVE_ZERO
        } else {
            Self::POSITIVE_ZERO
        }
    }
}

impl From<Float8> for f32 {
    fn from(value: Float8) -> f32 {
        value.to_f32()
    }
}

impl From<Float8> for f64 {
    fn from(value: Float8) -> f64 {
        value.to_f64()
    }
}

/// Fallible conversion honoring the process-wide default conversion mode
/// (see [`crate::set_default_conversion_mode`]).
impl TryFrom<f32> for Float8 {
    type Error = Float8Error;

    fn try_from(value: f32) -> Result<Float8> {
        Float8::from_f32_with_mode(value, config::default_conversion_mode())
    }
}
