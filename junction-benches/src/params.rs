//! Benchmark parameter labels.

use std::fmt;

/// Parameters for a benchmark over one point set.
#[derive(Clone, Copy, Debug)]
pub struct PointBenchParams {
    /// Number of points in the set.
    pub point_count: usize,
}

impl fmt::Display for PointBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.point_count)
    }
}

/// Parameters for a bounded-attempts benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct AttemptBenchParams {
    /// Number of points in the set.
    pub point_count: usize,
    /// Connection attempts made per iteration.
    pub attempts: usize,
}

impl fmt::Display for AttemptBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.point_count, self.attempts)
    }
}
