//! Mathematical functions over `Float8`.
//!
//! Everything here decodes to `f32`, delegates to the standard float
//! math, and re-encodes under the saturating conversion, so the IEEE
//! special cases (`sqrt(-1) = NaN`, `ln(0) = -Inf`, `exp(-Inf) = +0`, …)
//! fall out of the codec rather than being restated per function.

use crate::types::Float8;

impl Float8 {
    /// Square root. `sqrt(-0) = -0`; negative values yield NaN.
    pub fn sqrt(self) -> Float8 {
        Float8::from_f32(self.to_f32().sqrt())
    }

    /// Raises `self` to the power `exp`.
    pub fn powf(self, exp: Float8) -> Float8 {
        Float8::from_f32(self.to_f32().powf(exp.to_f32()))
    }

    /// e^self. `exp(-Inf) = +0`, `exp(+Inf) = +Inf`.
    pub fn exp(self) -> Float8 {
        Float8::from_f32(self.to_f32().exp())
    }

    /// Natural logarithm. `ln(0) = -Inf`; negative values yield NaN.
    pub fn ln(self) -> Float8 {
        Float8::from_f32(self.to_f32().ln())
    }

    /// Sine, in radians. `sin(±Inf) = NaN`.
    pub fn sin(self) -> Float8 {
        Float8::from_f32(self.to_f32().sin())
    }

    /// Cosine, in radians. `cos(±Inf) = NaN`.
    pub fn cos(self) -> Float8 {
        Float8::from_f32(self.to_f32().cos())
    }

    /// Tangent, in radians.
    pub fn tan(self) -> Float8 {
        Float8::from_f32(self.to_f32().tan())
    }

    /// Largest integer value not above `self`.
    pub fn floor(self) -> Float8 {
        Float8::from_f32(self.to_f32().floor())
    }

    /// Smallest integer value not below `self`.
    pub fn ceil(self) -> Float8 {
        Float8::from_f32(self.to_f32().ceil())
    }

    /// Nearest integer value, ties away from zero.
    pub fn round(self) -> Float8 {
        Float8::from_f32(self.to_f32().round())
    }

    /// Integer part of `self`, toward zero.
    pub fn trunc(self) -> Float8 {
        Float8::from_f32(self.to_f32().trunc())
    }

    /// Remainder of `self / rhs` with the sign of `self`.
    /// `fmod(x, 0) = NaN`, `fmod(±Inf, y) = NaN`, `fmod(x, ±Inf) = x`.
    pub fn fmod(self, rhs: Float8) -> Float8 {
        Float8::from_f32(self.to_f32() % rhs.to_f32())
    }

    /// Returns -1.0, +0, or 1.0 by the sign of `self`; zeros of either
    /// sign and NaN map to +0.
    pub fn signum(self) -> Float8 {
        match self.sign() {
            -1 => -Float8::ONE,
            1 => Float8::ONE,
            _ => Float8::POSITIVE_ZERO,
        }
    }

    /// Magnitude of `self` with the sign of `sign`. Zeros and NaN carry
    /// a positive sign here, matching [`Float8::sign`].
    pub fn copysign(self, sign: Float8) -> Float8 {
        if sign.sign() < 0 {
            Float8::from_bits(self.abs().to_bits() | crate::types::SIGN_MASK)
        } else {
            self.abs()
        }
    }
}

/// Linear interpolation `a + t * (b - a)`, computed with `Float8`
/// arithmetic so the result matches the operator chain.
pub fn lerp(a: Float8, b: Float8, t: Float8) -> Float8 {
    a + t * (b - a)
}

/// Common constants, pre-rounded to the nearest representable value.
pub mod consts {
    use crate::types::Float8;

    /// Euler's number, rounds to 2.75.
    pub const E: Float8 = Float8::from_bits(0x43);
    /// Archimedes' constant, rounds to 3.25.
    pub const PI: Float8 = Float8::from_bits(0x45);
    /// Golden ratio, rounds to 1.625.
    pub const PHI: Float8 = Float8::from_bits(0x3D);
    /// sqrt(2), rounds to 1.375.
    pub const SQRT_2: Float8 = Float8::from_bits(0x3B);
    /// sqrt(e), rounds to 1.625.
    pub const SQRT_E: Float8 = Float8::from_bits(0x3D);
    /// sqrt(pi), rounds to 1.75.
    pub const SQRT_PI: Float8 = Float8::from_bits(0x3E);
    /// ln(2), rounds to 0.6875.
    pub const LN_2: Float8 = Float8::from_bits(0x33);
    /// log2(e), rounds to 1.5.
    pub const LOG2_E: Float8 = Float8::from_bits(0x3C);
    /// ln(10), rounds to 2.25.
    pub const LN_10: Float8 = Float8::from_bits(0x41);
    /// log10(e), rounds to 0.4375.
    pub const LOG10_E: Float8 = Float8::from_bits(0x2E);
}
