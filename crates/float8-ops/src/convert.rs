//! Bulk conversion between `Float8`, `f32`, and `bf16` slices.

use float8::Float8;
use half::bf16;
use rayon::prelude::*;

use crate::PARALLEL_CUTOFF;

/// Encodes every element, saturating like [`Float8::from_f32`].
pub fn encode_f32(src: &[f32]) -> Vec<Float8> {
    if src.len() >= PARALLEL_CUTOFF {
        src.par_iter().map(|&v| Float8::from_f32(v)).collect()
    } else {
        src.iter().map(|&v| Float8::from_f32(v)).collect()
    }
}

/// Decodes every element. Exact.
pub fn decode_f32(src: &[Float8]) -> Vec<f32> {
    if src.len() >= PARALLEL_CUTOFF {
        src.par_iter().map(|&v| v.to_f32()).collect()
    } else {
        src.iter().map(|&v| v.to_f32()).collect()
    }
}

/// Encodes a `bf16` slice, saturating like [`Float8::from_bf16`].
pub fn encode_bf16(src: &[bf16]) -> Vec<Float8> {
    if src.len() >= PARALLEL_CUTOFF {
        src.par_iter().map(|&v| Float8::from_bf16(v)).collect()
    } else {
        src.iter().map(|&v| Float8::from_bf16(v)).collect()
    }
}

/// Decodes every element to `bf16`. Exact.
pub fn decode_bf16(src: &[Float8]) -> Vec<bf16> {
    if src.len() >= PARALLEL_CUTOFF {
        src.par_iter().map(|&v| v.to_bf16()).collect()
    } else {
        src.iter().map(|&v| v.to_bf16()).collect()
    }
}
