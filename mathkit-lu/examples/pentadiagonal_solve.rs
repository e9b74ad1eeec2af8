use mathkit_lu::{DenseMatrix, LuSolver, SolveAlgorithm};
use std::time::Instant;

/// Creates a pentadiagonal matrix A of size n x n.
/// Diagonals:
/// - Main: 4.0
/// - Adjacent (+1, -1): -1.0
/// - Outer (+2, -2): -0.5
fn create_pentadiagonal_matrix(n: usize) -> DenseMatrix<f64> {
    DenseMatrix::from_fn(n, n, |r, c| match r.abs_diff(c) {
        0 => 4.0,
        1 => -1.0,
        2 => -0.5,
        _ => 0.0,
    })
    .expect("Failed to create pentadiagonal matrix")
}

/// Creates a column b of size n with b[i] = sin(i / n).
fn create_sin_column(n: usize) -> DenseMatrix<f64> {
    DenseMatrix::from_fn(n, 1, |i, _| (i as f64 / n as f64).sin())
        .expect("Failed to create right-hand side")
}

fn main() {
    // Initialize logging based on RUST_LOG environment variable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let n = 200;
    log::info!(
        "Setting up {}x{} pentadiagonal matrix A and sin vector b...",
        n,
        n
    );

    let a = create_pentadiagonal_matrix(n);
    let b = create_sin_column(n);

    let algorithm = LuSolver::with_params(1e-12);
    log::info!("Running dense LU solver...");
    log::info!("  Size: {}", n);
    log::info!("  Tolerance: {}", algorithm.tolerance);

    let start_time = Instant::now();
    let x_result = algorithm.solve(&a, &b);
    let duration = start_time.elapsed();

    match x_result {
        Ok(result) => {
            let residual = a
                .matmul(&result.x)
                .and_then(|ax| ax.checked_sub(&b))
                .map(|r| r.data().iter().fold(0.0_f64, |m, v| m.max(v.abs())));
            log::info!("Solver finished successfully!");
            log::info!("  Row exchanges: {}", result.metadata.row_exchanges);
            log::info!("  Smallest pivot: {:.6e}", result.metadata.min_pivot);
            match residual {
                Ok(residual) => log::info!("  Max residual: {:.6e}", residual),
                Err(e) => log::error!("Residual check failed: {}", e),
            }
            log::info!("  Time elapsed: {:?}", duration);
        }
        Err(e) => {
            log::error!("Solver failed: {:?}", e);
        }
    }
}
