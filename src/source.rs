//! Sources of values to feed into a [`Tree`][crate::tree::Tree]. The demo draws random values but
//! anything that needs a reproducible run can hand over a fixed sequence instead.
//!
//! # Examples
//!
//! ```
//! use rebalancing_bst::source::{FixedValues, RandomValues, ValueSource};
//!
//! let mut fixed = FixedValues::new(vec![1, 2, 3]);
//! assert_eq!(fixed.values(5), vec![1, 2, 3, 1, 2]);
//!
//! // The same seed always draws the same values.
//! let a = RandomValues::seeded(7).values(10);
//! let b = RandomValues::seeded(7).values(10);
//! assert_eq!(a, b);
//! assert!(a.iter().all(|v| (0..100).contains(v)));
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound of the values drawn by [`RandomValues`].
pub const RANDOM_VALUE_BOUND: i32 = 100;

/// Something that can hand out a batch of integers.
pub trait ValueSource {
    /// Produces `size` values.
    fn values(&mut self, size: usize) -> Vec<i32>;
}

/// Draws independent, uniformly distributed values in `0..RANDOM_VALUE_BOUND`.
#[derive(Clone, Debug)]
pub struct RandomValues {
    rng: StdRng,
}

impl RandomValues {
    /// A source that yields the same values every time it is built with the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl ValueSource for RandomValues {
    fn values(&mut self, size: usize) -> Vec<i32> {
        (0..size)
            .map(|_| self.rng.gen_range(0..RANDOM_VALUE_BOUND))
            .collect()
    }
}

/// Replays a fixed sequence, starting over from the beginning whenever it runs out.
#[derive(Clone, Debug, Default)]
pub struct FixedValues {
    values: Vec<i32>,
    next: usize,
}

impl FixedValues {
    /// A source replaying `values`. An empty sequence yields nothing no matter the size asked for.
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, next: 0 }
    }
}

impl ValueSource for FixedValues {
    fn values(&mut self, size: usize) -> Vec<i32> {
        if self.values.is_empty() {
            return Vec::new();
        }

        let start = self.next;
        self.next = (start + size) % self.values.len();
        self.values
            .iter()
            .cycle()
            .skip(start)
            .take(size)
            .copied()
            .collect()
    }
}
