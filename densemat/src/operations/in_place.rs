//! In-place operations
//!
//! Each operation mutates the receiver through its backend's write
//! capability and hands the same matrix back for chaining. None of them
//! rebuild the value index; see [`StaleIndexPolicy`](crate::StaleIndexPolicy).

use densemat_core::{
    validate_position, MatrixElement, MatrixError, Result, StorageReader, StorageWriter,
};

use crate::matrix::Matrix;
use crate::utils::are_same_dimensions;

impl<T: MatrixElement, B: StorageWriter<T>> Matrix<T, B> {
    /// Overwrite the element at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<&mut Self> {
        validate_position(row, col, self.rows, self.columns)?;
        self.backend.write(row, col, value);
        self.mutated();
        Ok(self)
    }

    /// `self[i][j] = self[i][j] + other[i][j]`, wrapping on integer overflow
    pub fn add_in_place<C: StorageReader<T>>(&mut self, other: &Matrix<T, C>) -> Result<&mut Self> {
        self.zip_in_place(other, T::wrapping_add)
    }

    /// `self[i][j] = self[i][j] - other[i][j]`
    pub fn subtract_in_place<C: StorageReader<T>>(
        &mut self,
        other: &Matrix<T, C>,
    ) -> Result<&mut Self> {
        self.zip_in_place(other, T::wrapping_sub)
    }

    /// `self[i][j] = self[i][j] * other[i][j]`
    pub fn hadamard_product_in_place<C: StorageReader<T>>(
        &mut self,
        other: &Matrix<T, C>,
    ) -> Result<&mut Self> {
        self.zip_in_place(other, T::wrapping_mul)
    }

    /// `self[i][j] = self[i][j] * c`
    pub fn scalar_multiply_in_place(&mut self, c: T) -> &mut Self {
        self.map_in_place(|a| a.wrapping_mul(c))
    }

    fn zip_in_place<C, F>(&mut self, other: &Matrix<T, C>, op: F) -> Result<&mut Self>
    where
        C: StorageReader<T>,
        F: Fn(T, T) -> T,
    {
        if !are_same_dimensions(self, other) {
            return Err(MatrixError::DimensionMismatch);
        }

        for i in 0..self.rows {
            for j in 0..self.columns {
                let value = op(self.backend.read(i, j), other.backend.read(i, j));
                self.backend.write(i, j, value);
            }
        }

        self.mutated();
        Ok(self)
    }

    pub(crate) fn map_in_place<F: Fn(T) -> T>(&mut self, op: F) -> &mut Self {
        for i in 0..self.rows {
            for j in 0..self.columns {
                let value = op(self.backend.read(i, j));
                self.backend.write(i, j, value);
            }
        }

        self.mutated();
        self
    }
}
