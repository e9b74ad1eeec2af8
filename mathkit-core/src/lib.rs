//! # mathkit core
//!
//! Dense matrix and vector types shared by the mathkit solvers, the numeric
//! element trait they are generic over, and the common error type.

// Declare modules
pub mod dense_matrix;
pub mod error;
pub mod ops;
pub mod traits;
pub mod vector;

// Re-export public types
pub use dense_matrix::{argmax, DenseMatrix, Shape};
pub use error::{MathkitCoreError, Result};
pub use traits::{Matrix, Scalar, Vector};
pub use vector::DenseVector;
