//! Operator overloads for [`DenseMatrix`] and [`DenseVector`].
//!
//! Shape-checked operators (`+`, `-`, matrix `*`) return a `Result` instead of
//! panicking, so `(&a + &b)?` reads like the checked method it forwards to.
//! Scalar multiplication cannot fail and works in either operand order for the
//! primitive element types.

use crate::dense_matrix::DenseMatrix;
use crate::error::Result;
use crate::traits::Scalar;
use crate::vector::DenseVector;
use std::ops::{Add, Mul, Neg, Sub};

macro_rules! checked_binop {
    ($ty:ident, $trait:ident, $fn:ident, $method:ident) => {
        impl<T: Scalar> $trait<&$ty<T>> for &$ty<T> {
            type Output = Result<$ty<T>>;

            fn $fn(self, rhs: &$ty<T>) -> Self::Output {
                self.$method(rhs)
            }
        }

        impl<T: Scalar> $trait<$ty<T>> for $ty<T> {
            type Output = Result<$ty<T>>;

            fn $fn(self, rhs: $ty<T>) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<T: Scalar> $trait<&$ty<T>> for $ty<T> {
            type Output = Result<$ty<T>>;

            fn $fn(self, rhs: &$ty<T>) -> Self::Output {
                self.$method(rhs)
            }
        }

        impl<T: Scalar> $trait<$ty<T>> for &$ty<T> {
            type Output = Result<$ty<T>>;

            fn $fn(self, rhs: $ty<T>) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

checked_binop!(DenseMatrix, Add, add, checked_add);
checked_binop!(DenseMatrix, Sub, sub, checked_sub);
checked_binop!(DenseMatrix, Mul, mul, matmul);
checked_binop!(DenseVector, Add, add, checked_add);

impl<T: Scalar> Neg for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn neg(self) -> Self::Output {
        self.scale(-T::one())
    }
}

impl<T: Scalar> Neg for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn neg(self) -> Self::Output {
        self.scale(-T::one())
    }
}

// Scalar products for concrete element types; a generic `T * Matrix<T>` impl
// is not expressible for foreign `T`.
macro_rules! scalar_mul {
    ($($t:ty),*) => {$(
        impl Mul<$t> for &DenseMatrix<$t> {
            type Output = DenseMatrix<$t>;

            fn mul(self, rhs: $t) -> Self::Output {
                self.scale(rhs)
            }
        }

        impl Mul<$t> for DenseMatrix<$t> {
            type Output = DenseMatrix<$t>;

            fn mul(self, rhs: $t) -> Self::Output {
                self.scale(rhs)
            }
        }

        impl Mul<&DenseMatrix<$t>> for $t {
            type Output = DenseMatrix<$t>;

            fn mul(self, rhs: &DenseMatrix<$t>) -> Self::Output {
                rhs.scale(self)
            }
        }

        impl Mul<DenseMatrix<$t>> for $t {
            type Output = DenseMatrix<$t>;

            fn mul(self, rhs: DenseMatrix<$t>) -> Self::Output {
                rhs.scale(self)
            }
        }

        impl Mul<$t> for &DenseVector<$t> {
            type Output = DenseVector<$t>;

            fn mul(self, rhs: $t) -> Self::Output {
                self.scale(rhs)
            }
        }

        impl Mul<&DenseVector<$t>> for $t {
            type Output = DenseVector<$t>;

            fn mul(self, rhs: &DenseVector<$t>) -> Self::Output {
                rhs.scale(self)
            }
        }
    )*};
}

scalar_mul!(f32, f64, i32, i64);
