use log::{debug, trace};
use num::{BigUint, Zero};

use crate::{
    cycles::CyclePartition,
    error::{LatinRectangleError, PartitionDefect},
    permutation::Permutation,
    rook_polynomial::{factorials, RookPolynomial},
};

/// Counts the ways a two-row Latin rectangle `(id, p)` extends to three rows,
/// i.e. the permutations `q` with `q(i) != i` and `q(i) != p(i)` for all `i`.
///
/// The count only depends on the cycle type of `p`. The forbidden cells split
/// into one block per cycle, so the rook polynomial of the whole board is the
/// product of the per-cycle polynomials, and inclusion-exclusion gives
/// `sum_k (-1)^k r_k (n - k)!`.
///
/// By default a fixed point of `p` is rejected, since such a `p` cannot be the
/// second row of a Latin rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtensionCounter {
    allow_fixed_points: bool,
}

impl ExtensionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept fixed points and count with the single-cell board `1 + x` for each.
    pub fn allow_fixed_points(mut self, allow: bool) -> Self {
        self.allow_fixed_points = allow;
        self
    }

    pub fn allows_fixed_points(&self) -> bool {
        self.allow_fixed_points
    }

    fn check_partition(&self, partition: &CyclePartition) -> Result<(), LatinRectangleError> {
        if !self.allow_fixed_points && partition.has_fixed_point() {
            return Err(LatinRectangleError::PartitionInvalid(
                PartitionDefect::UnitCycle,
            ));
        }
        Ok(())
    }

    /// The rook polynomial of the whole forbidden board.
    pub fn rook_polynomial(
        &self,
        partition: &CyclePartition,
    ) -> Result<RookPolynomial, LatinRectangleError> {
        self.check_partition(partition)?;

        Ok(partition
            .lengths()
            .iter()
            .map(|&len| RookPolynomial::for_cycle(len))
            .product())
    }

    pub fn count_partition(
        &self,
        partition: &CyclePartition,
    ) -> Result<BigUint, LatinRectangleError> {
        let rook_polynomial = self.rook_polynomial(partition)?;
        let n = partition.size();
        let factorials = factorials(n);

        trace!(
            "rook polynomial of degree {} for {partition}",
            rook_polynomial.degree()
        );

        let mut positive = BigUint::zero();
        let mut negative = BigUint::zero();

        for (k, r) in rook_polynomial.coefficients().iter().enumerate() {
            let term = r * &factorials[n - k];
            if k % 2 == 0 {
                positive += term;
            } else {
                negative += term;
            }
        }

        // the sum counts permutations, it cannot be negative
        debug_assert!(positive >= negative);
        let count = positive - negative;

        debug!("{partition}: {count} extensions");

        Ok(count)
    }

    /// Counts from raw cycle lengths, which must be positive and sum to `n`.
    pub fn count_lengths(
        &self,
        lengths: &[usize],
        n: usize,
    ) -> Result<BigUint, LatinRectangleError> {
        let partition = CyclePartition::with_size(lengths.to_vec(), n)?;
        self.count_partition(&partition)
    }

    pub fn count_permutation(
        &self,
        permutation: &Permutation,
    ) -> Result<BigUint, LatinRectangleError> {
        if !self.allow_fixed_points {
            if let Some(i) = permutation.fixed_points().next() {
                return Err(LatinRectangleError::PartitionInvalid(
                    PartitionDefect::FixedPoint(i),
                ));
            }
        }

        self.count_partition(&permutation.cycle_type())
    }

    /// Counts the third rows of a rectangle given by two explicit rows.
    pub fn count_rows(
        &self,
        top: &[usize],
        bottom: &[usize],
    ) -> Result<BigUint, LatinRectangleError> {
        let permutation = Permutation::between_rows(top, bottom)?;
        self.count_permutation(&permutation)
    }
}

/// Counts the extensions of `(id, p)` for a derangement `p`.
pub fn count_extensions(permutation: &Permutation) -> Result<BigUint, LatinRectangleError> {
    ExtensionCounter::new().count_permutation(permutation)
}
