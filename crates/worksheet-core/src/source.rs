//! Uniform integer draws behind a trait so tests can inject a seeded source.

use rand::Rng;

/// A source of uniformly distributed integers over inclusive bounds.
pub trait UniformSource {
    /// Draws an integer uniformly from `[lo, hi]`. Returns `lo` when
    /// `hi <= lo`.
    fn uniform(&mut self, lo: u64, hi: u64) -> u64;

    /// Draws an index uniformly from `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        self.uniform(0, len.saturating_sub(1) as u64) as usize
    }
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn uniform(&mut self, lo: u64, hi: u64) -> u64 {
        if hi <= lo {
            return lo;
        }
        self.random_range(lo..=hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn draws_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let value = rng.uniform(3, 9);
            assert!((3..=9).contains(&value));
        }
    }

    #[test]
    fn degenerate_range_returns_low_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(rng.uniform(4, 4), 4);
        assert_eq!(rng.uniform(9, 2), 9);
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        let a: Vec<u64> = (0..20).map(|_| first.uniform(0, 1000)).collect();
        let b: Vec<u64> = (0..20).map(|_| second.uniform(0, 1000)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn index_covers_whole_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.index(4)] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
