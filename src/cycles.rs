use std::fmt::{self, Display};

use crate::{
    error::{LatinRectangleError, PartitionDefect},
    permutation::Permutation,
};

/// The indices of one cycle in traversal order, starting at its smallest index.
pub type Cycle = Vec<usize>;

/// Decomposes a 1-indexed permutation (index 0 ignored) into disjoint cycles.
///
/// Cycles are listed in order of their smallest element, each starting there.
pub fn decompose(permutation: &[usize]) -> Result<Vec<Cycle>, LatinRectangleError> {
    Permutation::from_one_indexed(permutation.to_vec()).map(|p| p.cycles())
}

/// Same as [`decompose`] for input already known to be a bijection.
pub(crate) fn decompose_valid(permutation: &[usize]) -> Vec<Cycle> {
    let n = permutation.len().saturating_sub(1);
    let mut visited = vec![false; n + 1];
    let mut cycles = Vec::new();

    for start in 1..=n {
        if visited[start] {
            continue;
        }

        let mut cycle = Vec::new();
        let mut current = start;
        while !visited[current] {
            visited[current] = true;
            cycle.push(current);
            current = permutation[current];
        }

        cycles.push(cycle);
    }

    cycles
}

/// The multiset of cycle lengths of a permutation, kept sorted ascending so
/// that equal multisets compare and hash equal.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct CyclePartition {
    lengths: Vec<usize>,
    size: usize,
}

impl CyclePartition {
    pub fn new(mut lengths: Vec<usize>) -> Result<Self, LatinRectangleError> {
        if lengths.contains(&0) {
            return Err(LatinRectangleError::PartitionInvalid(
                PartitionDefect::NonPositiveLength,
            ));
        }

        lengths.sort_unstable();
        let size = lengths.iter().sum();

        Ok(CyclePartition { lengths, size })
    }

    /// Like [`CyclePartition::new`], but also checks the lengths sum to `n`.
    pub fn with_size(lengths: Vec<usize>, n: usize) -> Result<Self, LatinRectangleError> {
        let partition = Self::new(lengths)?;

        if partition.size != n {
            return Err(LatinRectangleError::PartitionInvalid(
                PartitionDefect::SumMismatch {
                    expected: n,
                    actual: partition.size,
                },
            ));
        }

        Ok(partition)
    }

    pub(crate) fn from_cycles(cycles: &[Cycle]) -> Self {
        let mut lengths: Vec<_> = cycles.iter().map(|c| c.len()).collect();
        lengths.sort_unstable();
        let size = lengths.iter().sum();

        CyclePartition { lengths, size }
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// The `n` of the permutation, i.e. the sum of all lengths.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn num_cycles(&self) -> usize {
        self.lengths.len()
    }

    pub fn has_fixed_point(&self) -> bool {
        self.lengths.first().is_some_and(|len| *len == 1)
    }
}

impl Display for CyclePartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.lengths)
    }
}

/// Generates all cycle structures of a permutation of size `n` with no fixed
/// points, in lexicographic order.
pub fn generate_cycle_structures(n: usize) -> Vec<CyclePartition> {
    fn extend(remaining: usize, min: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if remaining == 0 {
            out.push(current.clone());
            return;
        }

        for part in min..=remaining {
            let left = remaining - part;
            if left != 0 && left < part {
                continue;
            }

            current.push(part);
            extend(left, part, current, out);
            current.pop();
        }
    }

    let mut structures = Vec::new();
    extend(n, 2, &mut Vec::new(), &mut structures);

    structures
        .into_iter()
        .map(|lengths| CyclePartition { size: n, lengths })
        .collect()
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::{error::PermutationDefect, permutation::PermutationIter};
    use proptest::prelude::*;

    fn lengths(structures: Vec<CyclePartition>) -> Vec<Vec<usize>> {
        structures.into_iter().map(|c| c.lengths).collect()
    }

    #[test]
    fn decompose_test() {
        assert_eq!(
            decompose(&[0, 2, 3, 4, 5, 6, 1, 8, 7]).unwrap(),
            vec![vec![1, 2, 3, 4, 5, 6], vec![7, 8]]
        );
        assert_eq!(
            decompose(&[0, 3, 1, 2, 4]).unwrap(),
            vec![vec![1, 3, 2], vec![4]]
        );
        assert_eq!(decompose(&[0]).unwrap(), Vec::<Cycle>::new());
    }

    #[test]
    fn decompose_rejects_non_bijection() {
        assert_eq!(
            decompose(&[0, 2, 2, 1]),
            Err(LatinRectangleError::InvalidPermutation {
                n: 3,
                defect: PermutationDefect::Duplicate { value: 2 }
            })
        );
        assert!(matches!(
            decompose(&[0, 5, 1]),
            Err(LatinRectangleError::InvalidPermutation { .. })
        ));
        assert!(matches!(
            decompose(&[]),
            Err(LatinRectangleError::InvalidPermutation { .. })
        ));
    }

    #[test]
    fn partition_is_order_independent() {
        let a = CyclePartition::new(vec![4, 2, 3]).unwrap();
        let b = CyclePartition::new(vec![2, 3, 4]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.lengths(), &[2, 3, 4]);
        assert_eq!(a.size(), 9);
        assert_eq!(a.num_cycles(), 3);
        assert_eq!(a.to_string(), "[2, 3, 4]");
    }

    #[test]
    fn partition_rejects_bad_input() {
        assert_eq!(
            CyclePartition::new(vec![2, 0, 3]),
            Err(LatinRectangleError::PartitionInvalid(
                PartitionDefect::NonPositiveLength
            ))
        );
        assert_eq!(
            CyclePartition::with_size(vec![2, 3], 6),
            Err(LatinRectangleError::PartitionInvalid(
                PartitionDefect::SumMismatch {
                    expected: 6,
                    actual: 5
                }
            ))
        );
        assert!(CyclePartition::with_size(vec![3, 3], 6).is_ok());
        assert!(CyclePartition::new(vec![1, 2]).unwrap().has_fixed_point());
    }

    #[test]
    fn cycle_structures() {
        assert_eq!(lengths(generate_cycle_structures(0)), vec![Vec::<usize>::new()]);
        assert!(generate_cycle_structures(1).is_empty());
        assert_eq!(lengths(generate_cycle_structures(3)), vec![vec![3]]);
        assert_eq!(lengths(generate_cycle_structures(4)), vec![vec![2, 2], vec![4]]);
        assert_eq!(lengths(generate_cycle_structures(5)), vec![vec![2, 3], vec![5]]);
        assert_eq!(
            lengths(generate_cycle_structures(6)),
            vec![vec![2, 2, 2], vec![2, 4], vec![3, 3], vec![6]]
        );
        assert_eq!(
            lengths(generate_cycle_structures(8)),
            vec![
                vec![2, 2, 2, 2],
                vec![2, 2, 4],
                vec![2, 3, 3],
                vec![2, 6],
                vec![3, 5],
                vec![4, 4],
                vec![8]
            ]
        );
    }

    #[test]
    fn cycle_structures_match_derangements() {
        let mut seen: Vec<_> = PermutationIter::new(7)
            .filter(|p| p.is_derangement())
            .map(|p| p.cycle_type())
            .collect();
        seen.sort();
        seen.dedup();

        assert_eq!(seen, generate_cycle_structures(7));
    }

    proptest! {
        #[test]
        fn cycles_partition_and_recompose(
            images in Just((1..=12usize).collect::<Vec<_>>()).prop_shuffle()
        ) {
            let p = Permutation::from_images(&images).unwrap();
            let cycles = decompose(p.as_one_indexed()).unwrap();

            let mut all: Vec<usize> = cycles.iter().flatten().copied().collect();
            all.sort_unstable();
            prop_assert_eq!(all, (1..=12).collect::<Vec<_>>());

            let mut rebuilt = vec![0; 13];
            for cycle in &cycles {
                prop_assert_eq!(cycle[0], *cycle.iter().min().unwrap());
                for (j, &i) in cycle.iter().enumerate() {
                    rebuilt[i] = cycle[(j + 1) % cycle.len()];
                }
            }
            prop_assert_eq!(rebuilt.as_slice(), p.as_one_indexed());
        }
    }
}
