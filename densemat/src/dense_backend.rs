//! Dense in-memory backend
//!
//! The default storage for every matrix built from row data and for every
//! result of a pure operation. Elements live in one vector per row.

use densemat_core::{
    validate_dimensions, validate_rectangular, MatrixElement, Result, StorageReader,
    StorageWriter,
};

/// Row-major dense storage
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenseBackend<T> {
    data: Vec<Vec<T>>,
}

impl<T: MatrixElement> DenseBackend<T> {
    /// Wrap row data without checking it
    ///
    /// Use [`StorageReader::validate`] (or build a matrix from it) to reject
    /// ragged or empty data.
    pub fn from_rows(data: Vec<Vec<T>>) -> Self {
        Self { data }
    }

    /// Allocate a `rows x columns` backend with every cell at zero
    pub fn zeroed(rows: usize, columns: usize) -> Self {
        Self {
            data: vec![vec![T::zero(); columns]; rows],
        }
    }

    /// Get the rows as slices
    pub fn as_rows(&self) -> &[Vec<T>] {
        &self.data
    }

    /// Take the row data out of the backend
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.data
    }
}

impl<T: MatrixElement> StorageReader<T> for DenseBackend<T> {
    fn read(&self, row: usize, col: usize) -> T {
        self.data[row][col]
    }

    fn shape(&self) -> (usize, usize) {
        let columns = self.data.first().map_or(0, Vec::len);
        (self.data.len(), columns)
    }

    fn validate(&self) -> Result<()> {
        let (rows, columns) = self.shape();
        validate_dimensions(rows, columns)?;
        validate_rectangular::<T, _>(columns, self.data.as_slice())
    }
}

impl<T: MatrixElement> StorageWriter<T> for DenseBackend<T> {
    fn write(&mut self, row: usize, col: usize, value: T) {
        self.data[row][col] = value;
    }
}
