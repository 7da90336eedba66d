//! Lazily-built lookup tables for conversion and arithmetic.
//!
//! Each table set is an immutable snapshot: it is built fully off to the
//! side and published with a single atomic pointer swap, so concurrent
//! readers observe either a complete table or none. `enable_*` is
//! idempotent; `disable_*` drops the snapshot as a unit. There is no
//! partially-populated state.

use std::sync::Arc;
use std::time::Instant;

use arc_swap::ArcSwapOption;

use crate::arithmetic::{add_algorithmic, div_algorithmic, mul_algorithmic, sub_algorithmic, Op};
use crate::types::Float8;

const DECODE_TABLE_LEN: usize = 1 << 8;
const OPERATOR_TABLE_LEN: usize = 1 << 16;

static DECODE_TABLE: ArcSwapOption<DecodeTable> = ArcSwapOption::const_empty();
static OPERATOR_TABLES: ArcSwapOption<OperatorTables> = ArcSwapOption::const_empty();

struct DecodeTable([f32; DECODE_TABLE_LEN]);

impl DecodeTable {
    fn build() -> Self {
        let mut entries = [0.0f32; DECODE_TABLE_LEN];
        for (bits, entry) in entries.iter_mut().enumerate() {
            *entry = Float8::from_bits(bits as u8).to_f32_algorithmic();
        }
        DecodeTable(entries)
    }
}

struct OperatorTables {
    add: Box<[Float8]>,
    sub: Box<[Float8]>,
    mul: Box<[Float8]>,
    div: Box<[Float8]>,
}

impl OperatorTables {
    fn build() -> Self {
        let mut add = vec![Float8::POSITIVE_ZERO; OPERATOR_TABLE_LEN];
        let mut sub = vec![Float8::POSITIVE_ZERO; OPERATOR_TABLE_LEN];
        let mut mul = vec![Float8::POSITIVE_ZERO; OPERATOR_TABLE_LEN];
        let mut div = vec![Float8::POSITIVE_ZERO; OPERATOR_TABLE_LEN];

        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                let fa = Float8::from_bits(a);
                let fb = Float8::from_bits(b);
                let idx = table_index(fa, fb);
                add[idx] = add_algorithmic(fa, fb);
                sub[idx] = sub_algorithmic(fa, fb);
                mul[idx] = mul_algorithmic(fa, fb);
                div[idx] = div_algorithmic(fa, fb);
            }
        }

        OperatorTables {
            add: add.into_boxed_slice(),
            sub: sub.into_boxed_slice(),
            mul: mul.into_boxed_slice(),
            div: div.into_boxed_slice(),
        }
    }

    fn table(&self, op: Op) -> &[Float8] {
        match op {
            Op::Add => &self.add,
            Op::Sub => &self.sub,
            Op::Mul => &self.mul,
            Op::Div => &self.div,
        }
    }
}

#[inline]
fn table_index(a: Float8, b: Float8) -> usize {
    ((a.to_bits() as usize) << 8) | b.to_bits() as usize
}

pub(crate) fn decode(value: Float8) -> Option<f32> {
    DECODE_TABLE
        .load()
        .as_ref()
        .map(|t| t.0[value.to_bits() as usize])
}

pub(crate) fn lookup(op: Op, a: Float8, b: Float8) -> Option<Float8> {
    OPERATOR_TABLES
        .load()
        .as_ref()
        .map(|t| t.table(op)[table_index(a, b)])
}

pub(crate) fn fast_conversion_enabled() -> bool {
    DECODE_TABLE.load().is_some()
}

pub(crate) fn fast_arithmetic_enabled() -> bool {
    OPERATOR_TABLES.load().is_some()
}

/// Size of the decode table in bytes.
pub(crate) const DECODE_TABLE_BYTES: usize = DECODE_TABLE_LEN * std::mem::size_of::<f32>();
/// Size of one operator table in bytes.
pub(crate) const OPERATOR_TABLE_BYTES: usize = OPERATOR_TABLE_LEN;

/// Builds and publishes the 256-entry decode table. Idempotent; racing
/// callers may build twice, but the snapshots are identical.
pub fn enable_fast_conversion() {
    if fast_conversion_enabled() {
        return;
    }
    let start = Instant::now();
    DECODE_TABLE.store(Some(Arc::new(DecodeTable::build())));
    log::debug!("float8 decode table built in {:?}", start.elapsed());
}

/// Drops the decode table; decoding recomputes algorithmically.
pub fn disable_fast_conversion() {
    DECODE_TABLE.store(None);
}

/// Builds and publishes the four 65536-entry operator tables by running
/// the algorithmic operators over every operand pair. Idempotent.
pub fn enable_fast_arithmetic() {
    if fast_arithmetic_enabled() {
        return;
    }
    let start = Instant::now();
    OPERATOR_TABLES.store(Some(Arc::new(OperatorTables::build())));
    log::debug!(
        "float8 operator tables built in {:?} ({} bytes)",
        start.elapsed(),
        4 * OPERATOR_TABLE_BYTES,
    );
}

/// Drops the operator tables; arithmetic recomputes algorithmically.
pub fn disable_fast_arithmetic() {
    OPERATOR_TABLES.store(None);
}
