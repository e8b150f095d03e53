use log::trace;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::{error::LatinRectangleError, permutation::Permutation};

/// Draws uniformly random derangements by shuffling until no point is fixed.
///
/// About `e` shuffles are needed on average.
pub struct DerangementSampler<R> {
    rng: R,
}

impl DerangementSampler<Xoshiro256StarStar> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(Xoshiro256StarStar::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(Xoshiro256StarStar::from_entropy())
    }
}

impl<R: Rng> DerangementSampler<R> {
    pub fn new(rng: R) -> Self {
        DerangementSampler { rng }
    }

    /// A derangement of `1..=n`. Fails for `n == 1` and for negative `n`.
    pub fn sample(&mut self, n: i64) -> Result<Permutation, LatinRectangleError> {
        let size = match usize::try_from(n) {
            Ok(size) if size != 1 => size,
            _ => return Err(LatinRectangleError::InvalidSize(n)),
        };

        let mut elements: Vec<usize> = (0..=size).collect();
        let mut trials = 0usize;

        loop {
            trials += 1;
            elements[1..].shuffle(&mut self.rng);

            if elements.iter().enumerate().skip(1).all(|(i, &v)| v != i) {
                trace!("derangement of size {size} after {trials} shuffles");
                return Ok(Permutation::from_one_indexed_unchecked(elements));
            }
        }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}
