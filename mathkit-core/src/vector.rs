use crate::error::{MathkitCoreError, Result};
use crate::traits::{Scalar, Vector};
use std::ops::Index;

/// A dense one-dimensional sequence of numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DenseVector<T: Scalar> {
    data: Vec<T>,
}

impl<T: Scalar> DenseVector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Creates a vector of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![T::zero(); len],
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn get(&self, index: usize) -> Result<T> {
        self.data.get(index).copied().ok_or_else(|| {
            MathkitCoreError::IndexOutOfRange(format!(
                "index {} out of range for vector of length {}",
                index,
                self.data.len()
            ))
        })
    }

    fn check_same_len(&self, other: &Self) -> Result<()> {
        if self.data.len() != other.data.len() {
            return Err(MathkitCoreError::ShapeMismatch(format!(
                "vector lengths differ: {} vs {}",
                self.data.len(),
                other.data.len()
            )));
        }
        Ok(())
    }

    /// Elementwise sum of two vectors of equal length.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.check_same_len(other)?;
        Ok(Self::new(
            self.data.iter().zip(&other.data).map(|(&a, &b)| a + b).collect(),
        ))
    }

    /// Adds `value` to every element.
    pub fn add_scalar(&self, value: T) -> Self {
        Self::new(self.data.iter().map(|&a| a + value).collect())
    }

    pub fn scale(&self, scalar: T) -> Self {
        Self::new(self.data.iter().map(|&a| a * scalar).collect())
    }

    /// Inner product, summed in index order.
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_same_len(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }
}

impl<T: Scalar> From<Vec<T>> for DenseVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: Scalar> Index<usize> for DenseVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar> PartialEq<[T]> for DenseVector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.data == other
    }
}

impl<T: Scalar> PartialEq<Vec<T>> for DenseVector<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.data == other
    }
}

impl<T: Scalar> Vector for DenseVector<T> {
    type Value = T;

    fn len(&self) -> usize {
        self.data.len()
    }
}
