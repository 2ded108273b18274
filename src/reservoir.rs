//! Reservoir sampling: a uniform fixed-size sample from a stream of unknown
//! length, in one pass.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed-capacity uniform random sampler over a stream (Algorithm R).
///
/// The first `capacity` items fill the reservoir in input order. Each later
/// item, the i-th offered overall, replaces a uniformly drawn slot with
/// probability `capacity / i`, so after `n >= capacity` offers every item has
/// the same probability `capacity / n` of being in the sample.
///
/// The generator is injectable so callers can pin the draws; [`seeded`] is
/// the shorthand for reproducible runs.
///
/// [`seeded`]: ReservoirSampler::seeded
///
/// # Example
///
/// ```
/// use csv_taster::ReservoirSampler;
///
/// let mut sampler = ReservoirSampler::seeded(2, 7);
/// for n in 0..1000u32 {
///     sampler.offer(n);
/// }
/// assert_eq!(sampler.len(), 2);
/// assert_eq!(sampler.seen(), 1000);
/// ```
#[derive(Debug, Clone)]
pub struct ReservoirSampler<T, R = StdRng> {
    capacity: usize,
    items: Vec<T>,
    seen: u64,
    rng: R,
}

impl<T> ReservoirSampler<T> {
    /// Create a sampler with the given capacity, seeded from the OS.
    pub fn new(capacity: usize) -> Self {
        Self::with_rng(capacity, StdRng::from_os_rng())
    }

    /// Create a sampler whose draws derive from `seed`.
    ///
    /// Two samplers with the same seed and the same offer sequence hold the
    /// same sample.
    pub fn seeded(capacity: usize, seed: u64) -> Self {
        Self::with_rng(capacity, StdRng::seed_from_u64(seed))
    }
}

impl<T, R: Rng> ReservoirSampler<T, R> {
    /// Create a sampler that draws slot indices from the caller's generator.
    pub fn with_rng(capacity: usize, rng: R) -> Self {
        Self {
            // Cap the upfront allocation; a capacity far above the actual
            // record count should not reserve memory for phantom rows.
            items: Vec::with_capacity(capacity.min(1024)),
            capacity,
            seen: 0,
            rng,
        }
    }

    /// Offer the next stream item to the reservoir.
    ///
    /// Items are appended unconditionally until the reservoir is full; after
    /// that a slot index is drawn in `[0, seen)` and the item lands in the
    /// reservoir iff the index falls below `capacity`.
    pub fn offer(&mut self, item: T) {
        self.seen += 1;
        if self.items.len() < self.capacity {
            self.items.push(item);
        } else {
            let slot = self.rng.random_range(0..self.seen);
            if (slot as usize) < self.capacity {
                self.items[slot as usize] = item;
            }
        }
    }

    /// Number of items offered so far.
    pub fn seen(&self) -> u64 {
        self.seen
    }

    /// Reservoir capacity `k`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently held, i.e. `min(seen, capacity)`.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing has been sampled.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// View of the current sample.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the sampler and return the sample.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_in_input_order_below_capacity() {
        let mut sampler = ReservoirSampler::seeded(8, 1);
        for n in 0..5u32 {
            sampler.offer(n);
        }
        assert_eq!(sampler.items(), &[0, 1, 2, 3, 4]);
        assert_eq!(sampler.seen(), 5);
    }

    #[test]
    fn test_len_is_min_of_seen_and_capacity() {
        let mut sampler = ReservoirSampler::seeded(10, 1);
        for n in 0..100u32 {
            sampler.offer(n);
        }
        assert_eq!(sampler.len(), 10);
        assert_eq!(sampler.seen(), 100);

        let mut small = ReservoirSampler::seeded(10, 1);
        for n in 0..3u32 {
            small.offer(n);
        }
        assert_eq!(small.len(), 3);
    }

    #[test]
    fn test_sample_is_subset_without_duplicates() {
        let mut sampler = ReservoirSampler::seeded(10, 99);
        for n in 0..500u32 {
            sampler.offer(n);
        }

        let items = sampler.into_items();
        assert_eq!(items.len(), 10);
        for &item in &items {
            assert!(item < 500);
        }
        let mut deduped = items.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), items.len());
    }

    #[test]
    fn test_zero_capacity_holds_nothing() {
        let mut sampler = ReservoirSampler::seeded(0, 1);
        for n in 0..10u32 {
            sampler.offer(n);
        }
        assert!(sampler.is_empty());
        assert_eq!(sampler.seen(), 10);
    }

    #[test]
    fn test_same_seed_reproduces_sample() {
        let mut a = ReservoirSampler::seeded(5, 42);
        let mut b = ReservoirSampler::seeded(5, 42);
        for n in 0..200u32 {
            a.offer(n);
            b.offer(n);
        }
        assert_eq!(a.items(), b.items());
    }

    #[test]
    fn test_different_seeds_change_outcome() {
        let outcomes: Vec<Vec<u32>> = (1..=3u64)
            .map(|seed| {
                let mut sampler = ReservoirSampler::seeded(5, seed);
                for n in 0..200u32 {
                    sampler.offer(n);
                }
                sampler.into_items()
            })
            .collect();
        assert!(outcomes[0] != outcomes[1] || outcomes[1] != outcomes[2]);
    }

    /// Statistical check of the k/n inclusion probability: with n=30 and
    /// k=10 every record should land in roughly a third of the runs. The
    /// bounds sit beyond five standard deviations of the binomial count, so
    /// the test only fails if the draws are genuinely non-uniform.
    #[test]
    fn test_inclusion_frequency_is_uniform() {
        const RECORDS: u32 = 30;
        const CAPACITY: usize = 10;
        const RUNS: u64 = 2000;

        let mut inclusion_counts = [0u32; RECORDS as usize];
        for seed in 0..RUNS {
            let mut sampler = ReservoirSampler::seeded(CAPACITY, seed);
            for n in 0..RECORDS {
                sampler.offer(n);
            }
            for &item in sampler.items() {
                inclusion_counts[item as usize] += 1;
            }
        }

        // Expected count per record: RUNS * k/n = 2000/3. Five sigma of
        // Binomial(2000, 1/3) is about 105.
        for (record, &count) in inclusion_counts.iter().enumerate() {
            assert!(
                (561..=772).contains(&count),
                "record {record} sampled {count} times, expected ~667"
            );
        }
    }
}
