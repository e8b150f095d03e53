use std::{iter::Product, ops::Mul};

use num::{BigUint, One, Zero};

/// Exact binomial coefficient, zero when `k > n`.
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);

    // each partial product is itself a binomial coefficient, so the division is exact
    (1..=k).fold(BigUint::one(), |acc, i| acc * (n - k + i) / i)
}

/// `0!, 1!, ..., n!`
pub fn factorials(n: usize) -> Vec<BigUint> {
    let mut factorials = Vec::with_capacity(n + 1);
    factorials.push(BigUint::one());
    for i in 1..=n {
        let next = &factorials[i - 1] * i;
        factorials.push(next);
    }
    factorials
}

/// A rook polynomial `r_0 + r_1 x + ... + r_d x^d`, where `r_k` counts the
/// placements of `k` non-attacking rooks on the forbidden cells of a board.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RookPolynomial {
    coefficients: Vec<BigUint>,
}

impl RookPolynomial {
    /// The rook polynomial of the empty board.
    pub fn one() -> Self {
        RookPolynomial {
            coefficients: vec![BigUint::one()],
        }
    }

    /// The board contributed by one cycle of `p` with length `len`.
    ///
    /// On the rows and columns of the cycle the cells `(i, i)` and `(i, p(i))`
    /// form a single closed chain of `2 * len` cells in which neighbours share a
    /// row or a column. Choosing `k` pairwise non-adjacent cells on a cycle of
    /// `m` cells can be done in `m / (m - k) * C(m - k, k)` ways, which equals
    /// `C(m - k, k) + C(m - k - 1, k - 1)`. A fixed point (`len == 1`) puts both
    /// cells on the same square and gives `1 + x`.
    pub fn for_cycle(len: usize) -> Self {
        match len {
            0 => Self::one(),
            1 => RookPolynomial {
                coefficients: vec![BigUint::one(), BigUint::one()],
            },
            _ => {
                let m = 2 * len;
                let coefficients = (0..=len)
                    .map(|k| match k {
                        0 => BigUint::one(),
                        _ => binomial(m - k, k) + binomial(m - k - 1, k - 1),
                    })
                    .collect();

                RookPolynomial { coefficients }
            }
        }
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficient(&self, k: usize) -> BigUint {
        self.coefficients.get(k).cloned().unwrap_or_default()
    }

    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }

    /// Polynomial product, i.e. the rook polynomial of two boards sharing no row
    /// and no column.
    pub fn convolve(&self, other: &RookPolynomial) -> RookPolynomial {
        let mut coefficients = vec![BigUint::zero(); self.degree() + other.degree() + 1];

        for (i, a) in self.coefficients.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coefficients.iter().enumerate() {
                coefficients[i + j] += a * b;
            }
        }

        RookPolynomial { coefficients }
    }
}

impl<'a, 'b> Mul<&'b RookPolynomial> for &'a RookPolynomial {
    type Output = RookPolynomial;

    fn mul(self, rhs: &'b RookPolynomial) -> RookPolynomial {
        self.convolve(rhs)
    }
}

impl Mul for RookPolynomial {
    type Output = RookPolynomial;

    fn mul(self, rhs: RookPolynomial) -> RookPolynomial {
        self.convolve(&rhs)
    }
}

impl Product for RookPolynomial {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, p| acc.convolve(&p))
    }
}
