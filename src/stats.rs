//! Small statistics helpers for count tables
//!
//! The count extractors reduce every log to a row of per-slot counts, then
//! order the rows so that gnuplot output groups runs of similar size before
//! runs of similar spread.

use std::cmp::Ordering;

/// Rows whose second slot falls in the same 500-wide bucket are considered
/// equally sized and fall through to the deviation comparison.
pub const SIZE_BUCKET: u64 = 500;

/// Arithmetic mean of a count row.
pub fn mean(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<u64>() as f64 / values.len() as f64
}

/// Total absolute deviation of a row from its own mean. This is the
/// "variation" used to rank rows of similar size.
pub fn total_deviation(values: &[u64]) -> f64 {
    let avg = mean(values);
    values.iter().map(|&v| (v as f64 - avg).abs()).sum()
}

/// Ordering for count rows: primary key is the bucketed second slot,
/// secondary key the total deviation. Both keys are finite, so the float
/// comparison is total.
pub fn compare_rows(a: &[u64], b: &[u64]) -> Ordering {
    let bucket = |row: &[u64]| row.get(1).copied().unwrap_or(0) / SIZE_BUCKET;
    bucket(a)
        .cmp(&bucket(b))
        .then_with(|| total_deviation(a).total_cmp(&total_deviation(b)))
}
