//! `mathkit-lu`: dense linear system solving by LU decomposition.
//!
//! Partial pivoting picks a row permutation P, Doolittle's method factors
//! `P·A = L·U`, and forward/backward substitution recover X from `A·X = B`.

// Core modules
pub mod algorithms;

pub use algorithms::{
    backward_substitute, forward_substitute, lu, pivot_matrix, solve, LuDecomposition,
    LuMetadata, LuSolver, SolveAlgorithm, SolveResult, DEFAULT_TOLERANCE,
};

// Re-export from mathkit_core
pub use mathkit_core::{DenseMatrix, MathkitCoreError, Matrix, Scalar};

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Solves `A·X = B` for row-major `f64` buffers at the JS boundary.
/// `a` is n x n, `b` is n x h; the result is X, n x h, row-major.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn solve_flat(a: Vec<f64>, n: usize, b: Vec<f64>, h: usize) -> Result<Vec<f64>, JsValue> {
    let a = DenseMatrix::from_vec(a, n, n)?;
    let b = DenseMatrix::from_vec(b, n, h)?;
    Ok(solve(&a, &b)?.data().to_vec())
}
