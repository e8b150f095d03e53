use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LatinRectangleError {
    #[error("not a permutation of 1..={n}: {defect}")]
    InvalidPermutation { n: usize, defect: PermutationDefect },
    #[error("no derangement of size {0} exists")]
    InvalidSize(i64),
    #[error("invalid cycle partition: {0}")]
    PartitionInvalid(PartitionDefect),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutationDefect {
    #[error("missing the unused slot at index 0")]
    MissingSentinel,
    #[error("p({index}) = {value} is out of range")]
    OutOfRange { index: usize, value: usize },
    #[error("{value} appears more than once")]
    Duplicate { value: usize },
    #[error("rows have different lengths ({top} and {bottom})")]
    RowLengthMismatch { top: usize, bottom: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionDefect {
    #[error("cycle lengths must be positive")]
    NonPositiveLength,
    #[error("cycle lengths sum to {actual}, expected {expected}")]
    SumMismatch { expected: usize, actual: usize },
    #[error("contains a cycle of length 1")]
    UnitCycle,
    #[error("{0} is a fixed point, the second row repeats the first there")]
    FixedPoint(usize),
}
