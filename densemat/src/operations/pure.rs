//! Pure operations
//!
//! Each operation allocates a fresh dense result and leaves its operands
//! untouched. Operands may use any backend; results always use
//! [`DenseBackend`](crate::DenseBackend) and inherit the receiver's config.

use densemat_core::{
    validate_capacity, MatrixElement, MatrixError, Result, StorageReader, StorageWriter,
};

use crate::location::Location;
use crate::matrix::Matrix;
use crate::utils::are_same_dimensions;

impl<T: MatrixElement, B: StorageReader<T>> Matrix<T, B> {
    /// Element-wise sum into a new matrix
    ///
    /// Like every arithmetic operation here, integer overflow wraps.
    pub fn add<C: StorageReader<T>>(&self, other: &Matrix<T, C>) -> Result<Matrix<T>> {
        self.zip(other, T::wrapping_add)
    }

    /// Element-wise difference into a new matrix
    pub fn subtract<C: StorageReader<T>>(&self, other: &Matrix<T, C>) -> Result<Matrix<T>> {
        self.zip(other, T::wrapping_sub)
    }

    /// Element-wise product into a new matrix
    pub fn hadamard_product<C: StorageReader<T>>(
        &self,
        other: &Matrix<T, C>,
    ) -> Result<Matrix<T>> {
        self.zip(other, T::wrapping_mul)
    }

    /// Every cell multiplied by `c`, into a new matrix
    pub fn scalar_multiply(&self, c: T) -> Matrix<T> {
        let mut result = self.blank(self.rows, self.columns);

        for i in 0..self.rows {
            for j in 0..self.columns {
                let value = c.wrapping_mul(self.backend.read(i, j));
                result.backend.write(i, j, value);
            }
        }

        result
    }

    /// Matrix product
    ///
    /// Requires `self.columns() == other.rows()`. The result is
    /// `self.rows() x other.columns()`; each cell is accumulated from zero
    /// in the element type. Integer overflow wraps.
    pub fn multiply<C: StorageReader<T>>(&self, other: &Matrix<T, C>) -> Result<Matrix<T>> {
        if self.columns != other.rows {
            return Err(MatrixError::MultiplicationDimensionMismatch);
        }

        let mut result = self.blank(self.rows, other.columns);

        for i in 0..self.rows {
            for j in 0..other.columns {
                let mut sum = T::zero();
                for k in 0..self.columns {
                    let term = self.backend.read(i, k).wrapping_mul(other.backend.read(k, j));
                    sum = sum.wrapping_add(term);
                }
                result.backend.write(i, j, sum);
            }
        }

        Ok(result)
    }

    /// Swap rows and columns into a new `columns x rows` matrix
    pub fn transpose(&self) -> Matrix<T> {
        let mut result = self.blank(self.columns, self.rows);

        for i in 0..self.rows {
            for j in 0..self.columns {
                result.backend.write(j, i, self.backend.read(i, j));
            }
        }

        result
    }

    /// Find every cell equal to `value`
    ///
    /// With an index the stored coordinates are returned as-is, without
    /// re-reading the data. Without one every cell is scanned in row-major
    /// order. Both paths yield the same locations in the same order for
    /// the data the index was built from. Returns `None` when nothing
    /// matches.
    pub fn search(&self, value: T) -> Option<Vec<Location<T>>> {
        if let Some(index) = &self.index {
            let coordinates = index.lookup(value)?;
            return Some(
                coordinates
                    .iter()
                    .map(|&(row, column)| Location::new(row, column, value))
                    .collect(),
            );
        }

        let mut found = Vec::new();
        for i in 0..self.rows {
            for j in 0..self.columns {
                let cell = self.backend.read(i, j);
                if cell == value {
                    found.push(Location::new(i, j, cell));
                }
            }
        }

        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }

    /// All elements in row-major order
    pub fn flatten(&self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.size());

        for i in 0..self.rows {
            for j in 0..self.columns {
                result.push(self.backend.read(i, j));
            }
        }

        result
    }

    fn zip<C, F>(&self, other: &Matrix<T, C>, op: F) -> Result<Matrix<T>>
    where
        C: StorageReader<T>,
        F: Fn(T, T) -> T,
    {
        if !are_same_dimensions(self, other) {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut result = self.blank(self.rows, self.columns);

        for i in 0..self.rows {
            for j in 0..self.columns {
                let value = op(self.backend.read(i, j), other.backend.read(i, j));
                result.backend.write(i, j, value);
            }
        }

        Ok(result)
    }

    /// Zero-filled result carrying this matrix's config
    fn blank(&self, rows: usize, columns: usize) -> Matrix<T> {
        let mut result = Matrix::zeroed(rows, columns);
        result.config = self.config;
        result
    }
}

/// Expand a slice into a new `rows x columns` matrix in row-major order
///
/// Fails with `MatrixOverflow` if `values` does not fit. Cells past the end
/// of `values` stay zero.
pub fn expand_slice_to_matrix<T: MatrixElement>(
    values: &[T],
    rows: usize,
    columns: usize,
) -> Result<Matrix<T>> {
    validate_capacity(rows, columns, values.len())?;
    let mut result = Matrix::<T>::empty(rows, columns)?;

    for (h, &value) in values.iter().enumerate() {
        result.backend.write(h / columns, h % columns, value);
    }

    Ok(result)
}
