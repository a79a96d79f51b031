//! Storage backend capability traits
//!
//! A backend is split into a read capability, which every backend has, and
//! a write capability, which only mutable backends provide. These are pure
//! interfaces; concrete layouts live in the `densemat` crate or in the
//! embedding application.

use crate::error::{MatrixError, Result};
use crate::traits::element::MatrixElement;

/// Read capability of a storage backend
///
/// Backends assume valid coordinates. Bounds are checked by the matrix
/// before a call reaches `read`, so an implementation may panic on an
/// out-of-range coordinate.
pub trait StorageReader<T: MatrixElement> {
    /// Get the element at `(row, col)`
    fn read(&self, row: usize, col: usize) -> T;

    /// Get the backend shape as (rows, columns)
    ///
    /// Both are zero for an empty backend.
    fn shape(&self) -> (usize, usize);

    /// Check the backend is structurally sound
    ///
    /// The default rejects an empty shape. Backends with a layout that can
    /// be malformed (ragged rows, short buffers) should extend this.
    fn validate(&self) -> Result<()> {
        let (rows, columns) = self.shape();
        if rows == 0 || columns == 0 {
            return Err(MatrixError::RowColumnSize);
        }
        Ok(())
    }
}

/// Write capability of a storage backend
pub trait StorageWriter<T: MatrixElement>: StorageReader<T> {
    /// Overwrite the element at `(row, col)`
    fn write(&mut self, row: usize, col: usize, value: T);
}

impl<T: MatrixElement, B: StorageReader<T> + ?Sized> StorageReader<T> for &B {
    fn read(&self, row: usize, col: usize) -> T {
        (**self).read(row, col)
    }

    fn shape(&self) -> (usize, usize) {
        (**self).shape()
    }

    fn validate(&self) -> Result<()> {
        (**self).validate()
    }
}
