//! Matrix utilities: dimension checks, fill, clone and identity test

use densemat_core::{MatrixElement, StorageReader, StorageWriter};

use crate::dense_backend::DenseBackend;
use crate::matrix::Matrix;

/// Check whether two matrices have the same dimensions
///
/// Both the cached shapes and the shapes their backends report must agree,
/// which catches a backend resized behind its matrix's back.
pub fn are_same_dimensions<T, A, B>(a: &Matrix<T, A>, b: &Matrix<T, B>) -> bool
where
    T: MatrixElement,
    A: StorageReader<T>,
    B: StorageReader<T>,
{
    if a.rows != b.rows || a.columns != b.columns {
        return false;
    }

    a.backend.shape() == b.backend.shape()
}

impl<T: MatrixElement, B: StorageWriter<T>> Matrix<T, B> {
    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: T) -> &mut Self {
        self.map_in_place(|_| value)
    }

    /// Overwrite every cell with zero
    pub fn zero(&mut self) -> &mut Self {
        self.fill(T::zero())
    }
}

impl<T: MatrixElement, B: StorageReader<T>> Matrix<T, B> {
    /// Deep copy into a new dense matrix
    ///
    /// The copy shares no storage with the source, keeps its config and
    /// starts without an index.
    pub fn clone_matrix(&self) -> Matrix<T> {
        let mut data: Vec<Vec<T>> = Vec::with_capacity(self.rows);
        for i in 0..self.rows {
            data.push((0..self.columns).map(|j| self.backend.read(i, j)).collect());
        }

        let backend = DenseBackend::from_rows(data);
        let mut clone = Matrix::assemble(self.rows, self.columns, backend);
        clone.config = self.config;
        clone
    }

    /// Whether this is a square matrix with ones on the diagonal and zeros
    /// everywhere else
    pub fn is_identity_matrix(&self) -> bool {
        if self.rows != self.columns {
            return false;
        }

        (0..self.rows).all(|i| {
            (0..self.columns).all(|j| {
                let cell = self.backend.read(i, j);
                if i == j {
                    cell.is_one()
                } else {
                    cell.is_zero()
                }
            })
        })
    }
}
