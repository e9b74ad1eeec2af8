use mathkit_core::{DenseMatrix, MathkitCoreError, Matrix, Result, Scalar};
use num_traits::NumCast;

pub struct SolveResult<V: Scalar, M> {
    pub x: DenseMatrix<V>, // Solution, one column per right-hand side
    pub metadata: M,       // Metadata about the solve process
}

// --- Algorithm Trait Definition ---
/// Trait representing a specific linear system solving algorithm.
/// Generic over the Matrix type it supports.
pub trait SolveAlgorithm<M: Matrix> {
    /// The numeric type the algorithm operates on. Must match `M::Value`.
    type Value: Scalar;
    type Metadata: std::fmt::Debug;

    /// Solves the linear system AX = B for X.
    ///
    /// # Arguments
    ///
    /// * `a` - The square coefficient matrix A.
    /// * `b` - The right-hand sides B, one per column.
    fn solve(&self, a: &M, b: &M) -> Result<SolveResult<Self::Value, Self::Metadata>>;

    // Helper for input validation, can be called by implementations.
    fn validate_inputs(&self, a: &M, b: &M) -> Result<()> {
        let (rows, cols) = a.dims();
        if !a.is_square() {
            return Err(MathkitCoreError::DimensionMismatch(format!(
                "Matrix A must be square (dims: {}x{})",
                rows, cols
            )));
        }
        if rows != b.rows() {
            return Err(MathkitCoreError::DimensionMismatch(format!(
                "Matrix A rows ({}) must match right-hand side rows ({})",
                rows,
                b.rows()
            )));
        }
        Ok(())
    }
}

// --- Algorithm Implementations ---

pub mod lu;
pub mod pivot;
pub mod substitution;

pub use lu::{LuDecomposition, LuMetadata};
pub use pivot::pivot_matrix;
pub use substitution::{backward_substitute, forward_substitute};

/// Pivots whose magnitude falls below this are treated as zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-15;

/// Dense LU solver: partial pivoting, Doolittle factorization, then
/// forward and backward substitution.
#[derive(Debug, Clone)]
pub struct LuSolver<T: Scalar> {
    pub tolerance: T,
}

impl<T: Scalar> Default for LuSolver<T> {
    fn default() -> Self {
        // Integer element types truncate this to zero; exact zero pivots are still caught.
        Self {
            tolerance: <T as NumCast>::from(DEFAULT_TOLERANCE).unwrap_or_else(T::zero),
        }
    }
}

impl<T: Scalar> LuSolver<T> {
    /// Creates a new LU solver with the default tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new LU solver with the specified singularity tolerance.
    pub fn with_params(tolerance: T) -> Self {
        Self { tolerance }
    }

    /// Factors `m` as `P·M = L·U`.
    pub fn decompose(&self, m: &DenseMatrix<T>) -> Result<LuDecomposition<T>> {
        LuDecomposition::decompose(m, self.tolerance)
    }
}

impl<T: Scalar> SolveAlgorithm<DenseMatrix<T>> for LuSolver<T> {
    type Value = T;
    type Metadata = LuMetadata<T>;

    fn solve(
        &self,
        a: &DenseMatrix<T>,
        b: &DenseMatrix<T>,
    ) -> Result<SolveResult<Self::Value, Self::Metadata>> {
        self.validate_inputs(a, b)?;
        log::debug!(
            "Solving {} system with {} right-hand side(s)",
            a.shape(),
            b.cols()
        );

        let decomposition = self.decompose(a)?;
        let x = decomposition.solve(b)?;
        Ok(SolveResult {
            x,
            metadata: decomposition.metadata(),
        })
    }
}

/// LU decomposition of `m` with the default tolerance.
pub fn lu<T: Scalar>(m: &DenseMatrix<T>) -> Result<LuDecomposition<T>> {
    LuSolver::<T>::default().decompose(m)
}

/// Solves `A·X = B` with the default tolerance and returns X.
pub fn solve<T: Scalar>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
    LuSolver::<T>::default().solve(a, b).map(|result| result.x)
}
