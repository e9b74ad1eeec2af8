use mathkit_core::{argmax, DenseMatrix, MathkitCoreError, Matrix, Result, Scalar};

/// Builds the partial-pivoting permutation for a square matrix.
///
/// For each column `j` the row holding the largest-magnitude entry at or below
/// the diagonal of `m` is exchanged into position `j` of a running identity.
/// The search always reads the columns of `m` itself, not a partially
/// eliminated copy.
pub fn pivot_matrix<T: Scalar>(m: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
    permutation(m).map(|(p, _)| p)
}

/// Same as [`pivot_matrix`], also returning the number of row exchanges.
pub(crate) fn permutation<T: Scalar>(m: &DenseMatrix<T>) -> Result<(DenseMatrix<T>, usize)> {
    if !m.is_square() {
        return Err(MathkitCoreError::DimensionMismatch(format!(
            "pivoting requires a square matrix, got {}",
            m.shape()
        )));
    }
    let n = m.rows();
    let mut p = DenseMatrix::identity(n)?;
    let mut exchanges = 0;
    for j in 0..n {
        let column = m.column(j)?;
        let row = argmax(&column, j).unwrap_or(j);
        if row != j {
            log::trace!("Column {}: exchanging rows {} and {}", j, row, j);
            p = p.exchange_rows(row, j)?;
            exchanges += 1;
        }
    }
    log::debug!(
        "Pivot permutation for {} matrix built with {} row exchanges",
        m.shape(),
        exchanges
    );
    Ok((p, exchanges))
}

#[cfg(test)]
mod tests {
    use super::{permutation, pivot_matrix};
    use mathkit_core::{DenseMatrix, MathkitCoreError};

    #[test]
    fn test_pivot_moves_largest_entry_to_diagonal() {
        let m = DenseMatrix::from_rows(&[[0.0, 1.0, 0.0], [-8.0, 8.0, 1.0], [2.0, -2.0, 0.0]])
            .unwrap();
        let p = pivot_matrix(&m).unwrap();
        assert_eq!(
            p,
            DenseMatrix::from_rows(&[[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]).unwrap()
        );
    }

    #[test]
    fn test_diagonally_dominant_matrix_needs_no_pivoting() {
        let m = DenseMatrix::from_rows(&[[10, 1, 2], [1, 10, 3], [2, 3, 10]]).unwrap();
        let (p, exchanges) = permutation(&m).unwrap();
        assert_eq!(p, DenseMatrix::identity(3).unwrap());
        assert_eq!(exchanges, 0);
    }

    #[test]
    fn test_search_reads_original_columns() {
        // Column 0 swaps rows 0 and 2. Column 1 is then searched in `m` as
        // given, so row 2 (holding 9) wins although it was already moved up.
        let m = DenseMatrix::from_rows(&[[1.0, 0.0, 0.0], [0.0, 5.0, 0.0], [3.0, 9.0, 1.0]])
            .unwrap();
        let (p, exchanges) = permutation(&m).unwrap();
        assert_eq!(exchanges, 2);
        assert_eq!(
            p,
            DenseMatrix::from_rows(&[[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]).unwrap()
        );
    }

    #[test]
    fn test_pivot_requires_square_matrix() {
        let m = DenseMatrix::<f64>::new(3, 2).unwrap();
        assert!(matches!(
            pivot_matrix(&m),
            Err(MathkitCoreError::DimensionMismatch(_))
        ));
    }
}
