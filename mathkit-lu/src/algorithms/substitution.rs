use mathkit_core::{DenseMatrix, MathkitCoreError, Matrix, Result, Scalar};

/// Solves `L·Y = P·B` top-down, one column of B at a time.
pub fn forward_substitute<T: Scalar>(
    p: &DenseMatrix<T>,
    l: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>> {
    let n = l.rows();
    if !l.is_square() || p.rows() != n {
        return Err(MathkitCoreError::DimensionMismatch(format!(
            "cannot forward-substitute with P {} and L {}",
            p.shape(),
            l.shape()
        )));
    }
    let h = b.cols();
    let pb = p.matmul(b)?;
    let mut y = DenseMatrix::new(n, h)?;
    for c in 0..h {
        y[(0, c)] = pb[(0, c)] / l[(0, 0)];
        for i in 1..n {
            let s = (0..i).fold(T::zero(), |acc, k| acc + l[(i, k)] * y[(k, c)]);
            y[(i, c)] = (pb[(i, c)] - s) / l[(i, i)];
        }
    }
    Ok(y)
}

/// Solves `U·X = Y` bottom-up, one column of Y at a time.
pub fn backward_substitute<T: Scalar>(
    u: &DenseMatrix<T>,
    y: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>> {
    let n = u.rows();
    if !u.is_square() || y.rows() != n {
        return Err(MathkitCoreError::DimensionMismatch(format!(
            "cannot back-substitute {} against {}",
            y.shape(),
            u.shape()
        )));
    }
    let h = y.cols();
    let m = n - 1;
    let mut x = DenseMatrix::new(n, h)?;
    for c in 0..h {
        x[(m, c)] = y[(m, c)] / u[(m, m)];
        for i in (1..n).rev() {
            let s = (i..n).fold(T::zero(), |acc, k| acc + u[(i - 1, k)] * x[(k, c)]);
            x[(i - 1, c)] = (y[(i - 1, c)] - s) / u[(i - 1, i - 1)];
        }
    }
    Ok(x)
}
