use mathkit_lu::{
    lu, pivot_matrix, solve, DenseMatrix, LuSolver, MathkitCoreError, SolveAlgorithm,
};

// Helper for float comparison in tests
fn assert_approx_eq_matrix(a: &DenseMatrix<f64>, b: &DenseMatrix<f64>, tolerance: f64) {
    assert_eq!(a.shape(), b.shape(), "Matrix shapes differ");
    for (i, (x, y)) in a.data().iter().zip(b.data()).enumerate() {
        let diff = (x - y).abs();
        assert!(
            diff <= tolerance,
            "Verification failed at flat index {}: expected {}, got {}, diff {}",
            i,
            y,
            x,
            diff
        );
    }
}

/// Random n x n matrix whose diagonal dominates each column.
fn random_column_dominant(n: usize) -> DenseMatrix<f64> {
    let mut a = DenseMatrix::from_fn(n, n, |_, _| fastrand::f64() * 2.0 - 1.0).unwrap();
    for j in 0..n {
        let off_diagonal: f64 = (0..n).filter(|&i| i != j).map(|i| a[(i, j)].abs()).sum();
        a[(j, j)] = off_diagonal + 1.0;
    }
    a
}

#[test]
fn test_solve_reference_system() -> Result<(), MathkitCoreError> {
    let a = DenseMatrix::from_rows(&[[0.0, 1.0, 0.0], [-8.0, 8.0, 1.0], [2.0, -2.0, 0.0]])?;
    let b = DenseMatrix::from_rows(&[[1.0, 2.0], [2.0, 3.0], [4.0, 0.5]])?;

    let x = solve(&a, &b)?;

    let expected_x = DenseMatrix::from_rows(&[[3.0, 2.25], [1.0, 2.0], [18.0, 5.0]])?;
    assert_approx_eq_matrix(&x, &expected_x, 1e-12);
    assert_approx_eq_matrix(&a.matmul(&x)?, &b, 1e-12);
    Ok(())
}

#[test]
fn test_solve_with_nonzero_subdiagonal() -> Result<(), MathkitCoreError> {
    // No pivoting happens here and L has an entry at (2, 1), so every term of
    // the forward substitution sum contributes.
    let a = DenseMatrix::from_rows(&[[4.0, 1.0, 0.0], [2.0, 5.0, 1.0], [0.0, 3.0, 6.0]])?;
    let b = DenseMatrix::from_rows(&[[6.0], [15.0], [24.0]])?;

    let decomposition = lu(&a)?;
    assert_eq!(decomposition.p(), &DenseMatrix::<f64>::identity(3)?);
    assert!(decomposition.l()[(2, 1)].abs() > 0.1);

    let x = decomposition.solve(&b)?;
    assert_approx_eq_matrix(&x, &DenseMatrix::from_rows(&[[1.0], [2.0], [3.0]])?, 1e-12);
    Ok(())
}

#[test]
fn test_solve_random_dominant_systems() -> Result<(), MathkitCoreError> {
    fastrand::seed(7);
    for _ in 0..25 {
        let n = fastrand::usize(1..9);
        let h = fastrand::usize(1..4);
        let a = random_column_dominant(n);
        let b = DenseMatrix::from_fn(n, h, |_, _| fastrand::f64() * 10.0 - 5.0)?;

        assert_eq!(pivot_matrix(&a)?, DenseMatrix::<f64>::identity(n)?);

        let result = LuSolver::<f64>::default().solve(&a, &b)?;
        assert_eq!(result.metadata.row_exchanges, 0);
        assert_approx_eq_matrix(&a.matmul(&result.x)?, &b, 1e-9);
    }
    Ok(())
}

#[test]
fn test_identity_system_returns_rhs() -> Result<(), MathkitCoreError> {
    let b = DenseMatrix::from_rows(&[[1.5, -2.0], [0.0, 3.25], [7.0, 1.0]])?;
    let x = solve(&DenseMatrix::<f64>::identity(3)?, &b)?;
    assert_eq!(x, b);
    Ok(())
}

#[test]
fn test_solve_singular_system_fails() {
    let a = DenseMatrix::from_rows(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]]).unwrap();
    let b = DenseMatrix::from_rows(&[[1.0], [2.0], [3.0]]).unwrap();

    match solve(&a, &b) {
        Err(MathkitCoreError::SingularMatrix) => {}
        other => panic!("Expected SingularMatrix error, got {:?}", other),
    }
}

#[test]
fn test_solve_rejects_mismatched_rhs() {
    let a = DenseMatrix::<f64>::identity(3).unwrap();
    let b = DenseMatrix::new(2, 1).unwrap();
    assert!(matches!(
        solve(&a, &b),
        Err(MathkitCoreError::DimensionMismatch(_))
    ));
}

#[test]
fn test_custom_tolerance() -> Result<(), MathkitCoreError> {
    let a = DenseMatrix::from_rows(&[[1.0, 0.0], [0.0, 1e-8]])?;
    let b = DenseMatrix::from_rows(&[[1.0], [1e-8]])?;

    let x = LuSolver::with_params(1e-12).solve(&a, &b)?.x;
    assert_approx_eq_matrix(&x, &DenseMatrix::from_rows(&[[1.0], [1.0]])?, 1e-9);

    assert!(matches!(
        LuSolver::with_params(1e-6).solve(&a, &b),
        Err(MathkitCoreError::SingularMatrix)
    ));
    Ok(())
}
