//! Process-wide defaults and cache control.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::tables;
use crate::types::{ArithmeticMode, ConversionMode};

static DEFAULT_CONVERSION_MODE: AtomicU8 = AtomicU8::new(0);
static DEFAULT_ARITHMETIC_MODE: AtomicU8 = AtomicU8::new(0);

/// The conversion mode used by fallible ambient conversions
/// (`TryFrom<f32>`).
pub fn default_conversion_mode() -> ConversionMode {
    match DEFAULT_CONVERSION_MODE.load(Ordering::Relaxed) {
        1 => ConversionMode::Strict,
        _ => ConversionMode::Default,
    }
}

pub fn set_default_conversion_mode(mode: ConversionMode) {
    let raw = match mode {
        ConversionMode::Default => 0,
        ConversionMode::Strict => 1,
    };
    DEFAULT_CONVERSION_MODE.store(raw, Ordering::Relaxed);
}

/// The arithmetic mode used by the `+ - * /` operators.
pub fn default_arithmetic_mode() -> ArithmeticMode {
    match DEFAULT_ARITHMETIC_MODE.load(Ordering::Relaxed) {
        1 => ArithmeticMode::Algorithmic,
        2 => ArithmeticMode::Lookup,
        _ => ArithmeticMode::Auto,
    }
}

pub fn set_default_arithmetic_mode(mode: ArithmeticMode) {
    let raw = match mode {
        ArithmeticMode::Auto => 0,
        ArithmeticMode::Algorithmic => 1,
        ArithmeticMode::Lookup => 2,
    };
    DEFAULT_ARITHMETIC_MODE.store(raw, Ordering::Relaxed);
}

/// Package-level configuration, applied as one unit by [`configure`].
#[derive(Clone, Debug)]
pub struct Config {
    /// Build the 65536-entry operator tables.
    pub fast_arithmetic: bool,
    /// Build the 256-entry decode table.
    pub fast_conversion: bool,
    /// Default mode for fallible conversions.
    pub conversion_mode: ConversionMode,
    /// Default mode for the arithmetic operators.
    pub arithmetic_mode: ArithmeticMode,
}

impl Default for Config {
    /// Tables disabled to save memory; saturating conversion; automatic
    /// arithmetic dispatch.
    fn default() -> Self {
        Config {
            fast_arithmetic: false,
            fast_conversion: false,
            conversion_mode: ConversionMode::Default,
            arithmetic_mode: ArithmeticMode::Auto,
        }
    }
}

/// Applies `config`: builds or drops each table set and installs the
/// default modes.
pub fn configure(config: &Config) {
    if config.fast_arithmetic {
        tables::enable_fast_arithmetic();
    } else {
        tables::disable_fast_arithmetic();
    }
    if config.fast_conversion {
        tables::enable_fast_conversion();
    } else {
        tables::disable_fast_conversion();
    }
    set_default_conversion_mode(config.conversion_mode);
    set_default_arithmetic_mode(config.arithmetic_mode);
}

/// Bytes currently held by lookup tables.
pub fn table_memory_usage() -> usize {
    let mut usage = 0;
    if tables::fast_conversion_enabled() {
        usage += tables::DECODE_TABLE_BYTES;
    }
    if tables::fast_arithmetic_enabled() {
        usage += 4 * tables::OPERATOR_TABLE_BYTES;
    }
    usage
}

/// A diagnostic snapshot of the process-wide state.
#[derive(Clone, Debug)]
pub struct RuntimeInfo {
    pub version: &'static str,
    pub table_memory_bytes: usize,
    pub fast_arithmetic: bool,
    pub fast_conversion: bool,
    pub conversion_mode: ConversionMode,
    pub arithmetic_mode: ArithmeticMode,
}

pub fn runtime_info() -> RuntimeInfo {
    RuntimeInfo {
        version: env!("CARGO_PKG_VERSION"),
        table_memory_bytes: table_memory_usage(),
        fast_arithmetic: tables::fast_arithmetic_enabled(),
        fast_conversion: tables::fast_conversion_enabled(),
        conversion_mode: default_conversion_mode(),
        arithmetic_mode: default_arithmetic_mode(),
    }
}
