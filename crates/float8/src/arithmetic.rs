//! Arithmetic over `Float8` values.
//!
//! Every operator resolves NaN and the zero/infinity matrix first; only
//! pairs of ordinary values reach the fallback path, which decodes to
//! `f32`, computes, and re-encodes under the saturating conversion mode.
//! The lookup tables in [`crate::tables`] are built by running these same
//! algorithmic functions over all operand pairs, so the two dispatch
//! strategies cannot disagree.

use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

use crate::config;
use crate::tables;
use crate::types::{ArithmeticMode, Float8, Float8Error, Result};

/// The four binary operators, used for table selection and error reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub(crate) const fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
        }
    }
}

impl Float8 {
    /// Adds under an explicit arithmetic mode.
    ///
    /// `Auto` and `Algorithmic` cannot fail; `Lookup` reports
    /// [`Float8Error::TablesDisabled`] when no tables have been built.
    pub fn add_with_mode(self, rhs: Float8, mode: ArithmeticMode) -> Result<Float8> {
        dispatch(Op::Add, self, rhs, mode)
    }

    /// Subtracts under an explicit arithmetic mode. See [`Float8::add_with_mode`].
    pub fn sub_with_mode(self, rhs: Float8, mode: ArithmeticMode) -> Result<Float8> {
        dispatch(Op::Sub, self, rhs, mode)
    }

    /// Multiplies under an explicit arithmetic mode. See [`Float8::add_with_mode`].
    pub fn mul_with_mode(self, rhs: Float8, mode: ArithmeticMode) -> Result<Float8> {
        dispatch(Op::Mul, self, rhs, mode)
    }

    /// Divides under an explicit arithmetic mode. See [`Float8::add_with_mode`].
    pub fn div_with_mode(self, rhs: Float8, mode: ArithmeticMode) -> Result<Float8> {
        dispatch(Op::Div, self, rhs, mode)
    }
}

fn dispatch(op: Op, a: Float8, b: Float8, mode: ArithmeticMode) -> Result<Float8> {
    match mode {
        ArithmeticMode::Algorithmic => Ok(apply_algorithmic(op, a, b)),
        ArithmeticMode::Auto => Ok(match tables::lookup(op, a, b) {
            Some(result) => result,
            None => apply_algorithmic(op, a, b),
        }),
        ArithmeticMode::Lookup => {
            tables::lookup(op, a, b).ok_or(Float8Error::TablesDisabled { op: op.name() })
        }
    }
}

/// Dispatch under the process-wide default mode. Operators cannot report
/// errors, so a configured Lookup default degrades to the algorithmic
/// path when no tables are built.
fn dispatch_default(op: Op, a: Float8, b: Float8) -> Float8 {
    match dispatch(op, a, b, config::default_arithmetic_mode()) {
        Ok(result) => result,
        Err(_) => apply_algorithmic(op, a, b),
    }
}

pub(crate) fn apply_algorithmic(op: Op, a: Float8, b: Float8) -> Float8 {
    match op {
        Op::Add => add_algorithmic(a, b),
        Op::Sub => sub_algorithmic(a, b),
        Op::Mul => mul_algorithmic(a, b),
        Op::Div => div_algorithmic(a, b),
    }
}

pub(crate) fn add_algorithmic(a: Float8, b: Float8) -> Float8 {
    if a.is_nan() || b.is_nan() {
        return Float8::NAN;
    }
    if a.is_zero() && b.is_zero() {
        // A zero sum is negative only when both addends are.
        return if a.is_sign_negative() && b.is_sign_negative() {
            Float8::NEGATIVE_ZERO
        } else {
            Float8::POSITIVE_ZERO
        };
    }
    if a.is_zero() {
        return b;
    }
    if b.is_zero() {
        return a;
    }
    if a.is_infinite() || b.is_infinite() {
        if a.is_infinite() && b.is_infinite() {
            if a.is_sign_negative() == b.is_sign_negative() {
                return a;
            }
            // Opposite infinities: indeterminate; this format resolves
            // the sum to +0 rather than NaN.
            return Float8::POSITIVE_ZERO;
        }
        return if a.is_infinite() { a } else { b };
    }
    Float8::from_f32(a.to_f32() + b.to_f32())
}

pub(crate) fn sub_algorithmic(a: Float8, b: Float8) -> Float8 {
    add_algorithmic(a, -b)
}

pub(crate) fn mul_algorithmic(a: Float8, b: Float8) -> Float8 {
    if a.is_nan() || b.is_nan() {
        return Float8::NAN;
    }
    let negative = a.is_sign_negative() != b.is_sign_negative();
    if (a.is_infinite() && b.is_zero()) || (a.is_zero() && b.is_infinite()) {
        return Float8::NAN;
    }
    if a.is_zero() || b.is_zero() {
        return if negative {
            Float8::NEGATIVE_ZERO
        } else {
            Float8::POSITIVE_ZERO
        };
    }
    if a.is_infinite() || b.is_infinite() {
        return if negative {
            Float8::NEGATIVE_INFINITY
        } else {
            Float8::POSITIVE_INFINITY
        };
    }
    Float8::from_f32(a.to_f32() * b.to_f32())
}

pub(crate) fn div_algorithmic(a: Float8, b: Float8) -> Float8 {
    if a.is_nan() || b.is_nan() {
        return Float8::NAN;
    }
    let negative = a.is_sign_negative() != b.is_sign_negative();
    if b.is_zero() {
        if a.is_zero() {
            return Float8::NAN;
        }
        return if negative {
            Float8::NEGATIVE_INFINITY
        } else {
            Float8::POSITIVE_INFINITY
        };
    }
    if a.is_zero() {
        return if negative {
            Float8::NEGATIVE_ZERO
        } else {
            Float8::POSITIVE_ZERO
        };
    }
    if a.is_infinite() {
        if b.is_infinite() {
            return Float8::NAN;
        }
        return if negative {
            Float8::NEGATIVE_INFINITY
        } else {
            Float8::POSITIVE_INFINITY
        };
    }
    if b.is_infinite() {
        return if negative {
            Float8::NEGATIVE_ZERO
        } else {
            Float8::POSITIVE_ZERO
        };
    }

    let quotient = a.to_f32() / b.to_f32();
    // An infinite intermediate means the quotient overflowed the narrow
    // range; the sign comes from the operands, not the intermediate.
    if quotient.is_infinite() {
        return if negative {
            Float8::NEGATIVE_INFINITY
        } else {
            Float8::POSITIVE_INFINITY
        };
    }
    Float8::from_f32(quotient)
}

impl Add for Float8 {
    type Output = Float8;

    #[inline]
    fn add(self, rhs: Float8) -> Float8 {
        dispatch_default(Op::Add, self, rhs)
    }
}

impl Sub for Float8 {
    type Output = Float8;

    #[inline]
    fn sub(self, rhs: Float8) -> Float8 {
        dispatch_default(Op::Sub, self, rhs)
    }
}

impl Mul for Float8 {
    type Output = Float8;

    #[inline]
    fn mul(self, rhs: Float8) -> Float8 {
        dispatch_default(Op::Mul, self, rhs)
    }
}

impl Div for Float8 {
    type Output = Float8;

    #[inline]
    fn div(self, rhs: Float8) -> Float8 {
        dispatch_default(Op::Div, self, rhs)
    }
}

impl Sum for Float8 {
    fn sum<I: Iterator<Item = Float8>>(iter: I) -> Float8 {
        iter.fold(Float8::POSITIVE_ZERO, |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a Float8> for Float8 {
    fn sum<I: Iterator<Item = &'a Float8>>(iter: I) -> Float8 {
        iter.fold(Float8::POSITIVE_ZERO, |acc, v| acc + *v)
    }
}
