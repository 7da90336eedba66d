//! Element-wise operators over `Float8` slices.

use float8::Float8;
use rayon::prelude::*;

use crate::{OpsError, Result, PARALLEL_CUTOFF};

/// Element-wise `a + b`. Errors when the slices differ in length.
pub fn add_slice(a: &[Float8], b: &[Float8]) -> Result<Vec<Float8>> {
    binary_op(a, b, "add_slice", |x, y| x + y)
}

/// Element-wise `a - b`. Errors when the slices differ in length.
pub fn sub_slice(a: &[Float8], b: &[Float8]) -> Result<Vec<Float8>> {
    binary_op(a, b, "sub_slice", |x, y| x - y)
}

/// Element-wise `a * b`. Errors when the slices differ in length.
pub fn mul_slice(a: &[Float8], b: &[Float8]) -> Result<Vec<Float8>> {
    binary_op(a, b, "mul_slice", |x, y| x * y)
}

/// Element-wise `a / b`. Errors when the slices differ in length.
pub fn div_slice(a: &[Float8], b: &[Float8]) -> Result<Vec<Float8>> {
    binary_op(a, b, "div_slice", |x, y| x / y)
}

/// Multiplies every element by `scalar`.
pub fn scale_slice(values: &[Float8], scalar: Float8) -> Vec<Float8> {
    if values.len() >= PARALLEL_CUTOFF {
        values.par_iter().map(|&v| v * scalar).collect()
    } else {
        values.iter().map(|&v| v * scalar).collect()
    }
}

fn binary_op<F>(a: &[Float8], b: &[Float8], op: &'static str, f: F) -> Result<Vec<Float8>>
where
    F: Fn(Float8, Float8) -> Float8 + Sync + Send,
{
    if a.len() != b.len() {
        return Err(OpsError::LengthMismatch {
            op,
            left: a.len(),
            right: b.len(),
        });
    }
    if a.len() >= PARALLEL_CUTOFF {
        Ok(a.par_iter()
            .zip(b.par_iter())
            .map(|(&x, &y)| f(x, y))
            .collect())
    } else {
        Ok(a.iter().zip(b.iter()).map(|(&x, &y)| f(x, y)).collect())
    }
}
