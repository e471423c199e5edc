use serde::Serialize;

use crate::util::index_function::equidistant_indices;

/// number of (len, count) pairs the sweep generates
pub const SWEEP_POINTS: i64 = 13;
/// stride between successive range lengths
pub const LEN_STRIDE: i64 = 4;
/// ratio of requested sample count to range length
pub const COUNT_RATIO: f64 = 1.1;

/// One line of the demonstration sweep: the generated pair and the
/// indices computed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepRow {
    pub len: i64,
    pub count: i64,
    pub indices: Vec<i64>,
}

/// Runs the fixed demonstration sweep: lengths 0, 4, ..., 48 with the
/// sample count at 1.1x the length (truncated toward zero), zero-based.
pub fn demo_sweep() -> Vec<SweepRow> {
    (0..SWEEP_POINTS)
        .map(|i| {
            let len = i * LEN_STRIDE;
            let count = (len as f64 * COUNT_RATIO).trunc() as i64;
            SweepRow {
                len,
                count,
                indices: equidistant_indices(len, count, false),
            }
        })
        .collect()
}
