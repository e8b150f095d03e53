use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        PoisonError, RwLock,
    },
};

use log::trace;
use num::BigUint;

use crate::{
    cycles::CyclePartition, error::LatinRectangleError, extension_counter::ExtensionCounter,
    permutation::Permutation,
};

/// An [`ExtensionCounter`] remembering every count by cycle type.
///
/// Safe to share between threads; counts are computed outside the lock, so two
/// threads missing on the same partition may both compute it.
#[derive(Debug, Default)]
pub struct ExtensionCache {
    counter: ExtensionCounter,
    entries: RwLock<HashMap<CyclePartition, BigUint>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl ExtensionCache {
    pub fn new(counter: ExtensionCounter) -> Self {
        ExtensionCache {
            counter,
            ..Default::default()
        }
    }

    pub fn count_partition(
        &self,
        partition: &CyclePartition,
    ) -> Result<BigUint, LatinRectangleError> {
        let cached = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(partition)
            .cloned();

        if let Some(count) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!("cache hit for {partition}");
            return Ok(count);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let count = self.counter.count_partition(partition)?;

        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(partition.clone(), count.clone());

        Ok(count)
    }

    pub fn count_permutation(
        &self,
        permutation: &Permutation,
    ) -> Result<BigUint, LatinRectangleError> {
        // run the fixed point check of the counter before looking anything up
        if !self.counter.allows_fixed_points() && !permutation.is_derangement() {
            return self.counter.count_permutation(permutation);
        }

        self.count_partition(&permutation.cycle_type())
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod test {

    use std::thread;

    use super::*;
    use crate::{cycles::generate_cycle_structures, error::PartitionDefect};

    #[test]
    fn remembers_counts() {
        let cache = ExtensionCache::default();
        let p = Permutation::from_images(&[2, 3, 4, 5, 6, 1, 8, 7]).unwrap();
        let q = Permutation::from_images(&[2, 1, 4, 5, 6, 7, 8, 3]).unwrap();

        assert_eq!(cache.count_permutation(&p).unwrap(), BigUint::from(4740u32));
        assert_eq!(cache.count_permutation(&q).unwrap(), BigUint::from(4740u32));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn errors_are_not_cached() {
        let cache = ExtensionCache::default();
        let p = Permutation::from_images(&[1, 3, 2]).unwrap();

        assert_eq!(
            cache.count_permutation(&p),
            Err(LatinRectangleError::PartitionInvalid(
                PartitionDefect::FixedPoint(1)
            ))
        );
        assert!(cache.is_empty());
    }

    #[test]
    fn shared_between_threads() {
        let cache = ExtensionCache::default();
        let structures = generate_cycle_structures(12);

        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for partition in &structures {
                        cache.count_partition(partition).unwrap();
                    }
                });
            }
        });

        assert_eq!(cache.len(), structures.len());
        assert_eq!(cache.hits() + cache.misses(), 4 * structures.len());

        let counter = ExtensionCounter::new();
        for partition in &structures {
            assert_eq!(
                cache.count_partition(partition).unwrap(),
                counter.count_partition(partition).unwrap()
            );
        }
    }
}
