//! Log file scanning
//!
//! Maestro benchmark runs write line-oriented logs. Two markers matter here:
//!
//! - `DURATION <nanoseconds>`: the run's wall-clock duration. A run may
//!   report several of these; the last one wins.
//! - `Worker: (<type>):` followed by an indented statistics block whose first
//!   line carries the per-slot job/task count as its fourth token.
//!
//! The content-level functions take the originating path purely for error
//! reporting; the file-level wrappers read and delegate.

use std::fs;
use std::path::Path;

use crate::error::{BenchError, BenchResult};

/// Line prefix announcing a duration measurement, in nanoseconds
pub const DURATION_MARKER: &str = "DURATION";

/// Line prefix announcing a per-worker statistics block
pub const WORKER_MARKER: &str = "Worker:";

/// Number of worker report slots in a single log
pub const WORKER_SLOTS: usize = 5;

/// Scan `content` for `DURATION` lines and return the last payload found.
///
/// Returns `Ok(None)` when no marker line is present; a marker line with a
/// non-integer payload is an error.
pub fn last_duration_in(content: &str, file: &Path) -> BenchResult<Option<i64>> {
    let mut result = None;
    for line in content.lines() {
        if let Some(payload) = line.strip_prefix(DURATION_MARKER) {
            let value: i64 = payload.trim().parse().map_err(|_| BenchError::BadDuration {
                file: file.to_path_buf(),
                payload: payload.trim().to_string(),
            })?;
            result = Some(value);
        }
    }
    Ok(result)
}

/// Read `path` and return the last `DURATION` payload, if any.
pub fn last_duration(path: &Path) -> BenchResult<Option<i64>> {
    let content = fs::read_to_string(path)?;
    last_duration_in(&content, path)
}

/// Scan `content` for worker statistics blocks and return the count table.
///
/// A header is a line starting with `Worker:` and ending with `:`; the slot
/// index sits between the fifth-from-start and second-from-end characters of
/// the trimmed remainder (the `(<type>=N):` convention). The line after a
/// header carries the count as its fourth whitespace-separated token. Slots
/// never reported stay 0.
pub fn worker_counts_in(content: &str, file: &Path) -> BenchResult<[u64; WORKER_SLOTS]> {
    let mut counts = [0u64; WORKER_SLOTS];
    let mut pending: Option<usize> = None;

    for (idx, line) in content.lines().enumerate() {
        if let Some(slot) = pending.take() {
            counts[slot] = parse_count_line(line, file, idx + 1)?;
        }
        pending = parse_worker_header(line, file, idx + 1)?;
    }
    // A header on the last line has no count line to consume; ignore it.
    Ok(counts)
}

/// Read `path` and return its worker count table.
pub fn worker_counts(path: &Path) -> BenchResult<[u64; WORKER_SLOTS]> {
    let content = fs::read_to_string(path)?;
    worker_counts_in(&content, path)
}

/// Returns the slot index when `line` is a worker report header.
fn parse_worker_header(line: &str, file: &Path, lineno: usize) -> BenchResult<Option<usize>> {
    let rest = match line.strip_prefix(WORKER_MARKER) {
        Some(rest) if line.ends_with(':') => rest.trim(),
        _ => return Ok(None),
    };

    let bad = |reason: String| BenchError::BadWorkerReport {
        file: file.to_path_buf(),
        line: lineno,
        reason,
    };

    let slot_text = rest
        .get(5..rest.len().saturating_sub(2))
        .ok_or_else(|| bad(format!("cannot find a slot index in '{rest}'")))?;
    let slot: usize = slot_text
        .parse()
        .map_err(|_| bad(format!("'{slot_text}' is not a slot index")))?;
    if slot >= WORKER_SLOTS {
        return Err(bad(format!("slot {slot} is out of range (0..{WORKER_SLOTS})")));
    }
    Ok(Some(slot))
}

/// The count line is the fourth whitespace token, per the
/// `    # tasks          = <count>` statistics layout.
fn parse_count_line(line: &str, file: &Path, lineno: usize) -> BenchResult<u64> {
    let token = line.split_whitespace().nth(3).ok_or_else(|| BenchError::BadWorkerReport {
        file: file.to_path_buf(),
        line: lineno,
        reason: "missing count token".to_string(),
    })?;
    token.parse().map_err(|_| BenchError::BadWorkerReport {
        file: file.to_path_buf(),
        line: lineno,
        reason: format!("'{token}' is not a count"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn at(content: &str) -> (String, PathBuf) {
        (content.to_string(), PathBuf::from("test.log"))
    }

    #[test]
    fn test_last_duration_wins() {
        let (content, path) = at("DURATION 100\nnoise\nDURATION 250\n");
        assert_eq!(last_duration_in(&content, &path).unwrap(), Some(250));
    }

    #[test]
    fn test_duration_absent() {
        let (content, path) = at("no markers here\n");
        assert_eq!(last_duration_in(&content, &path).unwrap(), None);
    }

    #[test]
    fn test_duration_bad_payload_is_fatal() {
        let (content, path) = at("DURATION not-a-number\n");
        let err = last_duration_in(&content, &path).unwrap_err();
        assert!(matches!(err, BenchError::BadDuration { .. }));
    }

    #[test]
    fn test_duration_marker_mid_line_ignored() {
        let (content, path) = at("total DURATION 99\n");
        assert_eq!(last_duration_in(&content, &path).unwrap(), None);
    }

    #[test]
    fn test_worker_counts_basic() {
        let log = "\
Worker: (job=2):
    # tasks          =    42
    total work time = 12.3 s (55.0%)
Worker: (job=0):
    # tasks          =     7
";
        let (content, path) = at(log);
        let counts = worker_counts_in(&content, &path).unwrap();
        assert_eq!(counts, [7, 0, 42, 0, 0]);
    }

    #[test]
    fn test_worker_header_without_trailing_colon_ignored() {
        let (content, path) = at("Worker: (job=2) is unused\nplain line\n");
        let counts = worker_counts_in(&content, &path).unwrap();
        assert_eq!(counts, [0; WORKER_SLOTS]);
    }

    #[test]
    fn test_worker_header_at_eof_ignored() {
        let (content, path) = at("Worker: (job=1):");
        let counts = worker_counts_in(&content, &path).unwrap();
        assert_eq!(counts, [0; WORKER_SLOTS]);
    }

    #[test]
    fn test_worker_slot_out_of_range_is_fatal() {
        let (content, path) = at("Worker: (job=9):\n    # tasks          =    42\n");
        let err = worker_counts_in(&content, &path).unwrap_err();
        assert!(matches!(err, BenchError::BadWorkerReport { line: 1, .. }));
    }

    #[test]
    fn test_worker_count_line_missing_token_is_fatal() {
        let (content, path) = at("Worker: (job=1):\nshort line\n");
        let err = worker_counts_in(&content, &path).unwrap_err();
        assert!(matches!(err, BenchError::BadWorkerReport { line: 2, .. }));
    }
}
