//! Doolittle LU decomposition with a pre-computed row permutation.
//!
//! Produces `P·M = L·U` where `L` is unit lower triangular and `U` is upper
//! triangular. The permutation comes from [`pivot`](super::pivot) and is
//! applied once up front, so elimination itself never swaps rows.

use super::pivot;
use super::substitution::{backward_substitute, forward_substitute};
use mathkit_core::{DenseMatrix, MathkitCoreError, Matrix, Result, Scalar};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuMetadata<T: Scalar> {
    /// Row exchanges performed while building the permutation.
    pub row_exchanges: usize,
    /// Smallest pivot magnitude on the diagonal of U.
    pub min_pivot: T,
}

/// The factors `(P, L, U)` of a square matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition<T: Scalar> {
    p: DenseMatrix<T>,
    l: DenseMatrix<T>,
    u: DenseMatrix<T>,
    row_exchanges: usize,
}

fn is_singular<T: Scalar>(pivot: T, tolerance: T) -> bool {
    pivot.is_zero() || pivot.abs() < tolerance
}

impl<T: Scalar> LuDecomposition<T> {
    /// Factors `m`, failing with `SingularMatrix` as soon as a pivot falls below
    /// `tolerance`. No partial factorization is returned.
    ///
    /// For integer element types the divisions truncate, so `P·M = L·U` only
    /// holds when every multiplier divides exactly. Cast with
    /// [`DenseMatrix::try_cast`] to a float type for exact factors.
    pub fn decompose(m: &DenseMatrix<T>, tolerance: T) -> Result<Self> {
        if !m.is_square() {
            return Err(MathkitCoreError::DimensionMismatch(format!(
                "LU decomposition requires a square matrix, got {}",
                m.shape()
            )));
        }
        let n = m.rows();
        let (p, row_exchanges) = pivot::permutation(m)?;
        let pa = p.matmul(m)?;

        let mut l = DenseMatrix::new(n, n)?;
        let mut u = DenseMatrix::new(n, n)?;
        for j in 0..n {
            l[(j, j)] = T::one();

            for i in 0..=j {
                let s1 = (0..i).fold(T::zero(), |acc, k| acc + u[(k, j)] * l[(i, k)]);
                u[(i, j)] = pa[(i, j)] - s1;
            }

            let pivot = u[(j, j)];
            if is_singular(pivot, tolerance) {
                log::warn!(
                    "Pivot {} in column {} is below tolerance {}, matrix is singular",
                    pivot,
                    j,
                    tolerance
                );
                return Err(MathkitCoreError::SingularMatrix);
            }

            for i in j..n {
                let s2 = (0..j).fold(T::zero(), |acc, k| acc + u[(k, j)] * l[(i, k)]);
                l[(i, j)] = (pa[(i, j)] - s2) / pivot;
            }
            log::trace!("Column {} factored, pivot {}", j, pivot);
        }

        log::debug!(
            "LU decomposition of {} matrix finished ({} row exchanges)",
            m.shape(),
            row_exchanges
        );
        Ok(Self {
            p,
            l,
            u,
            row_exchanges,
        })
    }

    /// The row permutation P.
    pub fn p(&self) -> &DenseMatrix<T> {
        &self.p
    }

    /// The unit lower-triangular factor L.
    pub fn l(&self) -> &DenseMatrix<T> {
        &self.l
    }

    /// The upper-triangular factor U.
    pub fn u(&self) -> &DenseMatrix<T> {
        &self.u
    }

    pub fn into_parts(self) -> (DenseMatrix<T>, DenseMatrix<T>, DenseMatrix<T>) {
        (self.p, self.l, self.u)
    }

    pub fn row_exchanges(&self) -> usize {
        self.row_exchanges
    }

    pub fn min_pivot(&self) -> T {
        let n = self.u.rows();
        (1..n)
            .map(|i| self.u[(i, i)].abs())
            .fold(self.u[(0, 0)].abs(), |min, v| if v < min { v } else { min })
    }

    pub fn metadata(&self) -> LuMetadata<T> {
        LuMetadata {
            row_exchanges: self.row_exchanges,
            min_pivot: self.min_pivot(),
        }
    }

    /// Determinant of the factored matrix: the product of U's diagonal, negated
    /// once per row exchange.
    pub fn determinant(&self) -> T {
        let n = self.u.rows();
        let det = (0..n).fold(T::one(), |acc, i| acc * self.u[(i, i)]);
        if self.row_exchanges % 2 == 1 {
            -det
        } else {
            det
        }
    }

    /// Solves `M·X = B` reusing this factorization.
    pub fn solve(&self, b: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        let y = forward_substitute(&self.p, &self.l, b)?;
        backward_substitute(&self.u, &y)
    }
}
