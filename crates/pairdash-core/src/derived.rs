use chrono::{DateTime, NaiveDate, Utc};

/// Calendar counters derived from the snapshot's first-commit date.
/// Never persisted; recomputed on every render from wall-clock now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedMetrics {
    pub days_elapsed: i64,
    pub months_elapsed: i64,
}

impl DerivedMetrics {
    /// Days are the ceiling of whole days since midnight of the first-commit
    /// date; months are ceil(days / 30). Both are non-decreasing as `now`
    /// advances for a fixed first commit.
    pub fn since(first_commit: NaiveDate, now: DateTime<Utc>) -> Self {
        let start = first_commit
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .unwrap_or(now);
        // `secs` is clamped non-negative, so the u64 round-trip is lossless;
        // signed div_ceil is still unstable on this toolchain.
        let secs = (now - start).num_seconds().max(0) as u64;
        let days_elapsed = secs.div_ceil(86_400);
        let months_elapsed = days_elapsed.div_ceil(30) as i64;
        let days_elapsed = days_elapsed as i64;
        Self {
            days_elapsed,
            months_elapsed,
        }
    }
}
