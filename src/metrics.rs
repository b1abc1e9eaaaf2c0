//! Tick-to-trade latency statistics for the benchmark harness.
//!
//! Latencies are recorded in nanoseconds into an HdrHistogram and summarized
//! as min/max/mean/stddev plus the p50/p90/p99 percentiles.

use std::fmt;

use hdrhistogram::Histogram;

/// Latency recorder with nanosecond precision.
#[derive(Debug)]
pub struct LatencyStats {
    histogram: Histogram<u64>,
}

impl LatencyStats {
    /// Create a recorder with 3 significant digits of precision
    pub fn new() -> Self {
        Self {
            histogram: Histogram::new(3).expect("3 significant digits is a valid precision"),
        }
    }

    /// Record one latency sample in nanoseconds.
    ///
    /// Samples beyond the histogram's trackable range are dropped.
    #[inline]
    pub fn record(&mut self, nanos: u64) {
        let _ = self.histogram.record(nanos);
    }

    /// Number of recorded samples
    #[inline]
    pub fn samples(&self) -> u64 {
        self.histogram.len()
    }

    /// Snapshot of the distribution
    pub fn summary(&self) -> Summary {
        Summary {
            samples: self.histogram.len(),
            min: self.histogram.min(),
            max: self.histogram.max(),
            mean: self.histogram.mean(),
            stddev: self.histogram.stdev(),
            p50: self.histogram.value_at_quantile(0.50),
            p90: self.histogram.value_at_quantile(0.90),
            p99: self.histogram.value_at_quantile(0.99),
        }
    }
}

impl Default for LatencyStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time latency distribution, all values in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub samples: u64,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub stddev: f64,
    pub p50: u64,
    pub p90: u64,
    pub p99: u64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.samples == 0 {
            return write!(f, "no samples");
        }
        write!(
            f,
            "samples={} min={}ns max={}ns mean={:.1}ns stddev={:.1}ns p50={}ns p90={}ns p99={}ns",
            self.samples, self.min, self.max, self.mean, self.stddev, self.p50, self.p90, self.p99,
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = LatencyStats::new();
        let summary = stats.summary();

        assert_eq!(summary.samples, 0);
        assert_eq!(format!("{summary}"), "no samples");
    }

    #[test]
    fn test_record_and_summarize() {
        let mut stats = LatencyStats::new();
        for nanos in [100, 200, 300, 400, 500] {
            stats.record(nanos);
        }

        let summary = stats.summary();
        assert_eq!(summary.samples, 5);
        assert!(summary.min <= 100);
        assert!(summary.max >= 499);
        assert!(summary.mean > 0.0);
        assert!(summary.p50 >= summary.min && summary.p50 <= summary.max);
        assert!(summary.p99 >= summary.p50);
    }

    #[test]
    fn test_percentile_ordering() {
        let mut stats = LatencyStats::new();
        for nanos in 1..=10_000u64 {
            stats.record(nanos);
        }

        let summary = stats.summary();
        assert!(summary.p50 <= summary.p90);
        assert!(summary.p90 <= summary.p99);
        assert!(summary.p99 <= summary.max);
    }
}
