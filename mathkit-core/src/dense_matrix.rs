use crate::error::{MathkitCoreError, Result};
use crate::traits::{Matrix, Scalar};
use crate::vector::DenseVector;
use num_traits::NumCast;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Returns the index (>= `from`) of the element with the greatest absolute value.
/// Ties go to the first occurrence. Returns None when `from` is past the end.
pub fn argmax<T: Scalar>(values: &[T], from: usize) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (i, v) in values.iter().enumerate().skip(from) {
        let magnitude = v.abs();
        if best.map_or(true, |(_, b)| magnitude > b) {
            best = Some((i, magnitude));
        }
    }
    best.map(|(i, _)| i)
}

/// The (rows, columns) pair describing a matrix's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, columns): (usize, usize)) -> Self {
        Self { rows, columns }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// Represents a dense matrix stored in row-major order.
///
/// The shape is fixed at construction; `data.len() == rows * cols` always holds.
/// Cloning yields a fully detached copy of the backing store.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T: Scalar> {
    rows: usize,
    cols: usize,
    data: Vec<T>, // Data stored row-major: data[row * cols + col]
}

fn check_shape(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(MathkitCoreError::InvalidInitializer(format!(
            "{} rows {} columns, both must be positive",
            rows, cols
        )));
    }
    Ok(())
}

impl<T: Scalar> DenseMatrix<T> {
    /// Creates a new matrix of the given shape with every entry zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_shape(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        })
    }

    /// Creates a matrix from a rectangular nested sequence, one inner sequence per row.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let first = rows.first().ok_or_else(|| {
            MathkitCoreError::InvalidInitializer("0 rows, at least one is required".to_string())
        })?;
        let cols = first.as_ref().len();
        if let Some((r, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != cols)
        {
            return Err(MathkitCoreError::InvalidInitializer(format!(
                "inconsistent row lengths: row 0 has {} columns, row {} has {}",
                cols,
                r,
                row.as_ref().len()
            )));
        }
        check_shape(rows.len(), cols)?;

        let data = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Creates a new matrix from a flat row-major sequence and explicit dimensions.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        check_shape(rows, cols)?;
        if data.len() != rows * cols {
            return Err(MathkitCoreError::InvalidInitializer(format!(
                "data length ({}) does not match dimensions ({}x{})",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix whose entry (r, c) is `f(r, c)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        check_shape(rows, cols)?;
        let data = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .map(|(r, c)| f(r, c))
            .collect();
        Ok(Self { rows, cols, data })
    }

    /// The n x n identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of elements (rows * columns).
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns a slice view of the underlying row-major data.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(MathkitCoreError::IndexOutOfRange(format!(
                "row index {} out of range for {} rows",
                row, self.rows
            )));
        }
        Ok(())
    }

    fn check_column(&self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(MathkitCoreError::IndexOutOfRange(format!(
                "column index {} out of range for {} columns",
                col, self.cols
            )));
        }
        Ok(())
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        self.check_row(row)?;
        self.check_column(col)?;
        Ok(row * self.cols + col)
    }

    fn check_same_shape(&self, other: &Self, op: &str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MathkitCoreError::ShapeMismatch(format!(
                "{} {} {}",
                self.shape(),
                op,
                other.shape()
            )));
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        Ok(self.data[self.offset(row, col)?])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let offset = self.offset(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Returns a copy of row `row`.
    pub fn row(&self, row: usize) -> Result<Vec<T>> {
        self.check_row(row)?;
        let start = row * self.cols;
        Ok(self.data[start..start + self.cols].to_vec())
    }

    /// Returns a copy of column `col` (a strided gather over the rows).
    pub fn column(&self, col: usize) -> Result<Vec<T>> {
        self.check_column(col)?;
        Ok(self
            .data
            .iter()
            .skip(col)
            .step_by(self.cols)
            .copied()
            .collect())
    }

    pub fn row_vector(&self, row: usize) -> Result<DenseVector<T>> {
        self.row(row).map(DenseVector::new)
    }

    pub fn column_vector(&self, col: usize) -> Result<DenseVector<T>> {
        self.column(col).map(DenseVector::new)
    }

    /// Replaces an entire row.
    pub fn set_row(&mut self, row: usize, values: &[T]) -> Result<()> {
        self.check_row(row)?;
        if values.len() != self.cols {
            return Err(MathkitCoreError::ShapeMismatch(format!(
                "row of length {} does not fit {} columns",
                values.len(),
                self.cols
            )));
        }
        let start = row * self.cols;
        self.data[start..start + self.cols].copy_from_slice(values);
        Ok(())
    }

    /// Iterates over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.cols)
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }

    pub fn transpose(&self) -> Self {
        let data = (0..self.cols)
            .flat_map(|c| (0..self.rows).map(move |r| self.data[r * self.cols + c]))
            .collect();
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Returns a copy with rows `r` and `s` exchanged, leaving `self` untouched.
    pub fn exchange_rows(&self, r: usize, s: usize) -> Result<Self> {
        self.check_row(r)?;
        self.check_row(s)?;
        let mut m = self.clone();
        if r != s {
            for c in 0..self.cols {
                m.data.swap(r * self.cols + c, s * self.cols + c);
            }
        }
        Ok(m)
    }

    fn zip_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(T, T) -> T,
    {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "+")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "-")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Multiplies every element by `scalar`.
    pub fn scale(&self, scalar: T) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| v * scalar).collect(),
        }
    }

    /// Matrix product `self * other`.
    ///
    /// Each entry is the inner product of a row of `self` and a column of
    /// `other`, summed plainly in index order.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MathkitCoreError::DimensionMismatch(format!(
                "cannot multiply {} by {}",
                self.shape(),
                other.shape()
            )));
        }
        let inner = self.cols;
        log::trace!("Multiplying {} by {}", self.shape(), other.shape());
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for r in 0..self.rows {
            for c in 0..other.cols {
                let sum = (0..inner).fold(T::zero(), |acc, i| {
                    acc + self.data[r * inner + i] * other.data[i * other.cols + c]
                });
                data.push(sum);
            }
        }
        Ok(Self {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    /// Converts every element to `U`.
    /// Fails with `TypeMismatch` on the first value `U` cannot represent.
    pub fn try_cast<U: Scalar>(&self) -> Result<DenseMatrix<U>> {
        let data = self
            .data
            .iter()
            .map(|&v| {
                <U as NumCast>::from(v).ok_or_else(|| {
                    MathkitCoreError::TypeMismatch(format!(
                        "value {} is not representable as {}",
                        v,
                        std::any::type_name::<U>()
                    ))
                })
            })
            .collect::<Result<Vec<U>>>()?;
        Ok(DenseMatrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}

impl<T: Scalar> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for {} matrix",
            row,
            col,
            self.shape()
        );
        &self.data[row * self.cols + col]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for {} matrix",
            row,
            col,
            self.shape()
        );
        &mut self.data[row * self.cols + col]
    }
}

impl<T: Scalar> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            write!(f, "{}[", if r == 0 { "[" } else { " " })?;
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
            if r + 1 == self.rows {
                write!(f, "]")?;
            } else {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Implement the generic Matrix trait
impl<T: Scalar> Matrix for DenseMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}
