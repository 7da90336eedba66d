//! 8-bit floating point with binary32 conversion and lookup-table
//! arithmetic.
//!
//! [`Float8`] packs sign, a 4-bit exponent (bias 7), and a 3-bit
//! mantissa into one byte, covering magnitudes from about 8.8e-3 up to
//! 448.0 — the reduced-precision layout used for machine-learning
//! tensors. Conversion to `f32` is exact; conversion from `f32`
//! saturates to signed infinity, flushes tiny values to signed zero, and
//! rounds the mantissa half up, or reports those cases as errors in
//! strict mode.
//!
//! The `+ - * /` operators follow IEEE special-value rules (NaN
//! dominates, `0 * Inf = NaN`, `x / 0 = ±Inf`, …) and can run off
//! precomputed tables: [`enable_fast_arithmetic`] builds four
//! 65536-entry tables by exhaustively running the algorithmic operators,
//! trading 256 KiB for one array index per operation. Tables are
//! immutable snapshots published atomically, so enabling or disabling
//! them while other threads compute is safe.
//!
//! ```
//! use float8::Float8;
//!
//! let a = Float8::from_f32(2.0);
//! let b = Float8::from_f32(3.0);
//! assert_eq!((a + b).to_f32(), 5.0);
//! assert_eq!((a / Float8::NEGATIVE_ZERO).to_bits(), 0xF8);
//! ```

mod arithmetic;
mod cmp;
mod config;
mod convert;
mod tables;
mod types;

pub mod math;

pub use config::{
    configure, default_arithmetic_mode, default_conversion_mode, runtime_info,
    set_default_arithmetic_mode, set_default_conversion_mode, table_memory_usage, Config,
    RuntimeInfo,
};
pub use tables::{
    disable_fast_arithmetic, disable_fast_conversion, enable_fast_arithmetic,
    enable_fast_conversion,
};
pub use types::{
    ArithmeticMode, ConversionMode, Float8, Float8Error, Result, EXPONENT_BIAS, EXPONENT_MASK,
    EXPONENT_MAX, MANTISSA_BITS, MANTISSA_MASK, SIGN_MASK,
};
