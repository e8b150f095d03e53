//! Counting the ways a two-row Latin rectangle extends to a third row.
//!
//! A rectangle with rows `id` and `p` extends by exactly the permutations `q`
//! with `q(i) != i` and `q(i) != p(i)`. Their number only depends on the cycle
//! type of `p` and is computed here from rook polynomials in polynomial time.

pub mod brute_force;
pub mod cache;
pub mod cycles;
pub mod derangement;
pub mod error;
pub mod extension_counter;
pub mod format;
pub mod permutation;
pub mod rook_polynomial;

pub use cache::ExtensionCache;
pub use cycles::{decompose, generate_cycle_structures, Cycle, CyclePartition};
pub use derangement::DerangementSampler;
pub use error::{LatinRectangleError, PartitionDefect, PermutationDefect};
pub use extension_counter::{count_extensions, ExtensionCounter};
pub use permutation::{Permutation, PermutationIter};
pub use rook_polynomial::RookPolynomial;
