use num_traits::{Num, NumCast, Signed};
use std::fmt::{Debug, Display};

/// Arithmetic capabilities required of a matrix or vector element.
///
/// `Num` supplies the four operations plus zero/one, `Signed` supplies `abs`,
/// and `NumCast` lets values be coerced between element types. Blanket
/// implemented, so every signed primitive (`f32`, `f64`, `i32`, `i64`, ...)
/// qualifies without further work.
pub trait Scalar:
    Num + Signed + NumCast + Copy + PartialOrd + Debug + Display + Send + Sync + 'static
{
}

impl<T> Scalar for T where
    T: Num + Signed + NumCast + Copy + PartialOrd + Debug + Display + Send + Sync + 'static
{
}

/// Generic trait representing a matrix.
/// Anything with a row/column shape and a uniform element type.
pub trait Matrix: Debug {
    /// The underlying numeric type of the matrix elements (e.g., f64, i32).
    type Value: Scalar;

    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (usize, usize);

    /// Returns the number of rows.
    fn rows(&self) -> usize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn cols(&self) -> usize {
        self.dims().1
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }
}

/// Generic trait representing a vector.
pub trait Vector: Debug {
    /// The underlying numeric type of the vector elements.
    type Value: Scalar;

    /// Returns the number of elements in the vector.
    fn len(&self) -> usize;

    /// Checks if the vector is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
