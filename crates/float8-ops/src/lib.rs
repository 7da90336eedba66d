//! Batch helpers over [`float8::Float8`] slices.
//!
//! Element-wise operators and bulk conversions parallelize across
//! elements with rayon once slices are large enough to pay for the
//! fork; no element's result depends on any other's. Reductions stay
//! sequential because summation order is observable at 8-bit precision.

/// Bulk conversion between `Float8`, `f32`, and `bf16` slices.
pub mod convert;

/// Element-wise slice operators.
pub mod elementwise;

/// Reductions: sums and dot products.
pub mod reduce;

/// Errors reported by binary slice helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpsError {
    #[error("float8_ops.{op}: slice length mismatch ({left} vs {right})")]
    LengthMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },
}

pub type Result<T> = std::result::Result<T, OpsError>;

/// Element count above which slice helpers fan out across threads.
pub(crate) const PARALLEL_CUTOFF: usize = 4096;
