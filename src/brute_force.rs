use num::BigUint;

use crate::permutation::Permutation;

/// Largest size the CLI is willing to check by exhaustive search.
pub const MAX_BRUTE_FORCE_N: usize = 12;

/// Fills the third row column by column, skipping symbols already used and the
/// two symbols above the current column.
fn fill<F>(permutation: &Permutation, row: &mut Vec<usize>, used: &mut [bool], visit: &mut F)
where
    F: FnMut(&[usize]),
{
    let n = permutation.n();
    let column = row.len();
    if column > n {
        visit(row.as_slice());
        return;
    }

    for value in 1..=n {
        if used[value] || value == column || value == permutation.apply(column) {
            continue;
        }

        used[value] = true;
        row.push(value);
        fill(permutation, row, used, visit);
        row.pop();
        used[value] = false;
    }
}

fn for_each_third_row<F>(permutation: &Permutation, mut visit: F)
where
    F: FnMut(&[usize]),
{
    let n = permutation.n();
    let mut row = Vec::with_capacity(n + 1);
    row.push(0);
    let mut used = vec![false; n + 1];

    fill(permutation, &mut row, &mut used, &mut visit);
}

/// All `q` with `q(i) != i` and `q(i) != p(i)`, in lexicographic order.
pub fn third_rows(permutation: &Permutation) -> Vec<Permutation> {
    let mut rows = Vec::new();
    for_each_third_row(permutation, |row| {
        rows.push(Permutation::from_one_indexed_unchecked(row.to_vec()));
    });
    rows
}

/// Counts third rows by exhaustive search. Exponential, only for small `n`.
pub fn count_extensions(permutation: &Permutation) -> BigUint {
    let mut count = 0u64;
    for_each_third_row(permutation, |_| count += 1);
    BigUint::from(count)
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::{
        cycles::generate_cycle_structures, extension_counter::ExtensionCounter,
        permutation::PermutationIter,
    };

    #[test]
    fn three_cycle_has_one_third_row() {
        let p = Permutation::from_images(&[2, 3, 1]).unwrap();
        let rows = third_rows(&p);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].images(), &[3, 1, 2]);
    }

    #[test]
    fn empty_rectangle() {
        let p = Permutation::identity(0);
        assert_eq!(count_extensions(&p), BigUint::from(1u32));
    }

    #[test]
    fn agrees_on_every_small_permutation() {
        let counter = ExtensionCounter::new().allow_fixed_points(true);
        for n in 0..=6 {
            for p in PermutationIter::new(n) {
                assert_eq!(
                    count_extensions(&p),
                    counter.count_permutation(&p).unwrap(),
                    "p = {p}"
                );
            }
        }
    }

    #[test]
    fn agrees_on_derangement_cycle_types() {
        let counter = ExtensionCounter::new();
        for n in 2..=9 {
            for partition in generate_cycle_structures(n) {
                let p = Permutation::from_cycle_type(&partition);
                assert_eq!(
                    count_extensions(&p),
                    counter.count_partition(&partition).unwrap(),
                    "{partition}"
                );
            }
        }
    }

    #[test]
    fn third_rows_are_valid() {
        let p = Permutation::from_images(&[2, 1, 4, 5, 3]).unwrap();
        let rows = third_rows(&p);
        assert_eq!(rows.len(), 12);
        for q in rows {
            assert!(q.is_derangement());
            assert!((1..=5).all(|i| q.apply(i) != p.apply(i)));
        }
    }
}
