//! Synthetic market data generation for the benchmark harness.
//!
//! Produces a deterministic stream of top-of-book ticks from a seeded RNG;
//! the same seed always yields the same sequence. Prices are fixed-point
//! (scaled by 10^8), uniformly spread over 100..200 with a small positive
//! bid/ask spread.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One top-of-book observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Best bid price (fixed-point, scaled by 10^8)
    pub bid: u64,

    /// Best ask price (fixed-point, scaled by 10^8)
    pub ask: u64,

    /// Sequence number standing in for arrival time
    pub timestamp: u64,
}

impl Tick {
    /// Midpoint of bid and ask
    #[inline]
    pub fn mid(&self) -> u64 {
        (self.bid + self.ask) / 2
    }
}

/// Deterministic tick generator.
#[derive(Debug)]
pub struct FeedGenerator {
    rng: ChaCha8Rng,
    sequence: u64,
}

impl FeedGenerator {
    /// Create a generator for the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            sequence: 0,
        }
    }

    /// Produce the next tick
    pub fn next_tick(&mut self) -> Tick {
        // Bid in [100, 200), spread in [0.01, 0.10]
        let bid: u64 = self.rng.gen_range(10_000_000_000..20_000_000_000);
        let spread: u64 = self.rng.gen_range(1_000_000..=10_000_000);
        let tick = Tick {
            bid,
            ask: bid + spread,
            timestamp: self.sequence,
        };
        self.sequence += 1;
        tick
    }

    /// Produce a batch of ticks
    pub fn generate(&mut self, count: usize) -> Vec<Tick> {
        (0..count).map(|_| self.next_tick()).collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_ticks() {
        let a = FeedGenerator::new(42).generate(100);
        let b = FeedGenerator::new(42).generate(100);

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_ticks() {
        let a = FeedGenerator::new(42).generate(100);
        let b = FeedGenerator::new(43).generate(100);

        assert_ne!(a, b);
    }

    #[test]
    fn test_tick_shape() {
        let ticks = FeedGenerator::new(7).generate(1000);

        for (i, tick) in ticks.iter().enumerate() {
            assert!(tick.bid >= 10_000_000_000);
            assert!(tick.bid < 20_000_000_000);
            assert!(tick.ask > tick.bid, "spread must be positive");
            assert!(tick.ask - tick.bid <= 10_000_000);
            assert_eq!(tick.timestamp, i as u64);
            assert!(tick.mid() >= tick.bid && tick.mid() <= tick.ask);
        }
    }
}
