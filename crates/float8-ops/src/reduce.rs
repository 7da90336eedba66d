//! Reductions over `Float8` slices.
//!
//! Accumulation runs in `Float8`, not `f32`, so results agree with the
//! scalar operator chain (and with the lookup tables when enabled).

use float8::Float8;

use crate::{OpsError, Result};

/// Sums the slice left to right; an empty slice sums to +0. NaN in any
/// element poisons the result.
pub fn sum_slice(values: &[Float8]) -> Float8 {
    values.iter().sum()
}

/// Dot product `sum(a[i] * b[i])`. Errors when the slices differ in
/// length.
pub fn dot(a: &[Float8], b: &[Float8]) -> Result<Float8> {
    if a.len() != b.len() {
        return Err(OpsError::LengthMismatch {
            op: "dot",
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(&x, &y)| x * y).sum())
}
