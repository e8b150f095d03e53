use std::fmt::{self, Display, Write};

use crate::{
    cycles::{self, Cycle, CyclePartition},
    error::{LatinRectangleError, PermutationDefect},
};

/// A permutation of `1..=n`.
///
/// Stored 1-indexed: slot 0 is unused and always holds 0, slot `i` holds `p(i)`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    pub fn identity(n: usize) -> Self {
        Permutation((0..=n).collect())
    }

    /// Takes a vector whose index 0 is ignored and whose entries `1..=n` must
    /// be a bijection on `1..=n`.
    pub fn from_one_indexed(mut elements: Vec<usize>) -> Result<Self, LatinRectangleError> {
        let Some(n) = elements.len().checked_sub(1) else {
            return Err(LatinRectangleError::InvalidPermutation {
                n: 0,
                defect: PermutationDefect::MissingSentinel,
            });
        };

        let mut seen = vec![false; n + 1];
        for (index, &value) in elements.iter().enumerate().skip(1) {
            if value == 0 || value > n {
                return Err(LatinRectangleError::InvalidPermutation {
                    n,
                    defect: PermutationDefect::OutOfRange { index, value },
                });
            }
            if seen[value] {
                return Err(LatinRectangleError::InvalidPermutation {
                    n,
                    defect: PermutationDefect::Duplicate { value },
                });
            }
            seen[value] = true;
        }

        elements[0] = 0;
        Ok(Permutation(elements))
    }

    pub(crate) fn from_one_indexed_unchecked(elements: Vec<usize>) -> Self {
        debug_assert!(Self::from_one_indexed(elements.clone()).is_ok());
        Permutation(elements)
    }

    /// Takes the images `p(1), ..., p(n)` without the unused slot.
    pub fn from_images(images: &[usize]) -> Result<Self, LatinRectangleError> {
        let mut elements = Vec::with_capacity(images.len() + 1);
        elements.push(0);
        elements.extend_from_slice(images);
        Self::from_one_indexed(elements)
    }

    /// The permutation taking each symbol of `top` to the symbol below it in
    /// `bottom`, i.e. `p(top[c]) = bottom[c]` for every column `c`.
    pub fn between_rows(top: &[usize], bottom: &[usize]) -> Result<Self, LatinRectangleError> {
        if top.len() != bottom.len() {
            return Err(LatinRectangleError::InvalidPermutation {
                n: top.len(),
                defect: PermutationDefect::RowLengthMismatch {
                    top: top.len(),
                    bottom: bottom.len(),
                },
            });
        }

        Self::from_images(top)?;
        Self::from_images(bottom)?;

        let mut elements = vec![0; top.len() + 1];
        for (t, b) in top.iter().zip(bottom) {
            elements[*t] = *b;
        }

        Ok(Permutation(elements))
    }

    /// The canonical permutation with the given cycle type: consecutive blocks,
    /// each rotated by one.
    pub fn from_cycle_type(partition: &CyclePartition) -> Self {
        let mut elements = Vec::with_capacity(partition.size() + 1);
        elements.push(0);

        let mut start = 1;
        for &len in partition.lengths() {
            for j in 0..len {
                elements.push(start + (j + 1) % len);
            }
            start += len;
        }

        Permutation(elements)
    }

    pub fn n(&self) -> usize {
        self.0.len() - 1
    }

    pub fn apply(&self, i: usize) -> usize {
        self.0[i]
    }

    pub fn as_one_indexed(&self) -> &[usize] {
        &self.0
    }

    pub fn images(&self) -> &[usize] {
        &self.0[1..]
    }

    pub fn fixed_points(&self) -> impl Iterator<Item = usize> + '_ {
        (1..=self.n()).filter(|&i| self.0[i] == i)
    }

    pub fn is_derangement(&self) -> bool {
        self.fixed_points().next().is_none()
    }

    pub fn inverse(&self) -> Self {
        let mut elements = vec![0; self.0.len()];
        for i in 1..=self.n() {
            elements[self.0[i]] = i;
        }
        Permutation(elements)
    }

    pub fn cycles(&self) -> Vec<Cycle> {
        cycles::decompose_valid(&self.0)
    }

    pub fn cycle_type(&self) -> CyclePartition {
        CyclePartition::from_cycles(&self.cycles())
    }
}

impl Display for Permutation {
    /// Cycle notation, fixed points included, e.g. `(1 2 3)(4)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cycles = self.cycles();
        if cycles.is_empty() {
            return f.write_str("()");
        }

        for cycle in cycles {
            f.write_char('(')?;
            for (i, element) in cycle.iter().enumerate() {
                if i != 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{element}")?;
            }
            f.write_char(')')?;
        }

        Ok(())
    }
}

/// Iterates over all permutations of `1..=n` in lexicographic order of images.
#[derive(Debug, Clone)]
pub struct PermutationIter {
    current: Option<Vec<usize>>,
}

impl PermutationIter {
    pub fn new(n: usize) -> Self {
        PermutationIter {
            current: Some((0..=n).collect()),
        }
    }
}

impl Iterator for PermutationIter {
    type Item = Permutation;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.as_mut()?;
        let item = Permutation(current.clone());

        let n = current.len() - 1;
        match (1..n).rev().find(|&i| current[i] < current[i + 1]) {
            Some(i) => {
                let mut j = n;
                while current[j] <= current[i] {
                    j -= 1;
                }
                current.swap(i, j);
                current[i + 1..].reverse();
            }
            None => self.current = None,
        }

        Some(item)
    }
}
