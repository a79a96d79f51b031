//! The matrix entity
//!
//! A [`Matrix`] owns its storage backend and caches the shape it was built
//! with. Every constructor funnels through shape validation, so a matrix
//! that exists is never empty.

use densemat_core::{
    validate_dimensions, validate_position, validate_rows, ElementKind, MatrixElement,
    MatrixError, MatrixView, Result, RowColumnAccess, StorageReader,
};
use log::{debug, trace};

use crate::config::MatrixConfig;
use crate::dense_backend::DenseBackend;
use crate::index::ValueIndex;

/// Two-dimensional numeric matrix over a pluggable storage backend
///
/// The backend defaults to [`DenseBackend`]. Mutating operations are only
/// available when the backend also implements
/// [`StorageWriter`](densemat_core::StorageWriter).
///
/// # Index staleness
///
/// An index built with [`Matrix::index`] is not updated by in-place
/// operations. Under the default [`StaleIndexPolicy::Keep`] it silently
/// goes stale and searches keep returning the old coordinates; use
/// [`StaleIndexPolicy::Drop`] to discard it on mutation instead.
///
/// [`StaleIndexPolicy::Keep`]: crate::StaleIndexPolicy::Keep
/// [`StaleIndexPolicy::Drop`]: crate::StaleIndexPolicy::Drop
#[derive(Debug)]
pub struct Matrix<T: MatrixElement, B = DenseBackend<T>> {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) index: Option<ValueIndex<T>>,
    pub(crate) config: MatrixConfig,
    pub(crate) backend: B,
}

impl<T: MatrixElement> Matrix<T> {
    /// Create a matrix from explicit dimensions and row data
    ///
    /// Fails with `RowColumnSize` for a zero dimension, `RowCountMismatch`
    /// when `data` does not have `rows` rows, and `ColumnCountMismatch`
    /// naming the first row that is not `columns` wide.
    pub fn new(rows: usize, columns: usize, data: Vec<Vec<T>>) -> Result<Self> {
        validate_rows::<T, _>(rows, columns, data.as_slice())?;
        Ok(Self::assemble(rows, columns, DenseBackend::from_rows(data)))
    }

    /// Create a zero-filled matrix of the given size
    pub fn empty(rows: usize, columns: usize) -> Result<Self> {
        validate_dimensions(rows, columns)?;
        Ok(Self::zeroed(rows, columns))
    }

    /// Allocate a zero-filled result for dimensions already known to be valid
    pub(crate) fn zeroed(rows: usize, columns: usize) -> Self {
        Self::assemble(rows, columns, DenseBackend::zeroed(rows, columns))
    }

    /// Take the row data out of the matrix
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.backend.into_rows()
    }
}

impl<T: MatrixElement, B: StorageReader<T>> Matrix<T, B> {
    /// Create a matrix over a caller-supplied backend
    ///
    /// The backend's own `validate` decides whether it is usable; the shape
    /// is read once here and cached for the life of the matrix.
    pub fn from_backend(backend: B) -> Result<Self> {
        backend.validate()?;
        let (rows, columns) = backend.shape();
        Ok(Self::assemble(rows, columns, backend))
    }

    pub(crate) fn assemble(rows: usize, columns: usize, backend: B) -> Self {
        trace!("matrix {rows}x{columns} of {} constructed", T::kind());
        Self {
            rows,
            columns,
            index: None,
            config: MatrixConfig::default(),
            backend,
        }
    }

    /// Attach a configuration
    ///
    /// With `eager_index` set, the index is built now unless one exists.
    pub fn with_config(mut self, config: MatrixConfig) -> Self {
        self.config = config;
        if config.eager_index && self.index.is_none() {
            self.build_index();
        }
        self
    }

    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the shape as (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Get the number of cells
    pub fn size(&self) -> usize {
        self.rows * self.columns
    }

    pub fn has_index(&self) -> bool {
        self.index.is_some()
    }

    /// Get the element kind this matrix holds
    pub fn element_kind(&self) -> ElementKind {
        T::kind()
    }

    /// Get the storage backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Release the storage backend
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Get the element at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        validate_position(row, col, self.rows, self.columns)?;
        Ok(self.backend.read(row, col))
    }

    /// Build the value index
    ///
    /// Scans every cell once. Fails with `IndexAlreadyExists` if an index
    /// is present; there is no rebuild in place.
    pub fn index(&mut self) -> Result<()> {
        if self.has_index() {
            return Err(MatrixError::IndexAlreadyExists);
        }
        self.build_index();
        Ok(())
    }

    fn build_index(&mut self) {
        let index = ValueIndex::build(&self.backend, self.rows, self.columns);
        debug!(
            "built index over {} cells with {} distinct values",
            index.cell_count(),
            index.distinct_values()
        );
        self.index = Some(index);
    }

    /// Apply the stale index policy after an in-place mutation
    pub(crate) fn mutated(&mut self) {
        if self.config.drops_stale_index() && self.index.take().is_some() {
            debug!("dropped stale index after in-place mutation");
        }
    }
}

impl<T: MatrixElement> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        self.clone_matrix()
    }
}

impl<T, B, C> PartialEq<Matrix<T, C>> for Matrix<T, B>
where
    T: MatrixElement,
    B: StorageReader<T>,
    C: StorageReader<T>,
{
    /// Matrices are equal when their shapes and every cell agree; index and
    /// config are not compared
    fn eq(&self, other: &Matrix<T, C>) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        (0..self.rows).all(|i| {
            (0..self.columns).all(|j| self.backend.read(i, j) == other.backend.read(i, j))
        })
    }
}

impl<T: MatrixElement, B: StorageReader<T>> MatrixView for Matrix<T, B> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.get(row, col).ok()
    }

    fn dimensions(&self) -> (usize, usize) {
        self.shape()
    }
}

impl<T: MatrixElement, B: StorageReader<T>> RowColumnAccess for Matrix<T, B> {
    fn get_row(&self, row_index: usize) -> Vec<T> {
        if row_index >= self.rows {
            return Vec::new();
        }
        (0..self.columns)
            .map(|j| self.backend.read(row_index, j))
            .collect()
    }

    fn get_col(&self, col_index: usize) -> Vec<T> {
        if col_index >= self.columns {
            return Vec::new();
        }
        (0..self.rows)
            .map(|i| self.backend.read(i, col_index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SliceBackend;

    #[test]
    fn test_new_matrix() {
        let m = Matrix::new(2, 3, vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.columns(), 3);
        assert_eq!(m.size(), 6);
        assert!(!m.has_index());
        assert_eq!(m.element_kind(), ElementKind::I32);
        assert_eq!(m.get(1, 2), Ok(6));
    }

    #[test]
    fn test_new_matrix_errors() {
        assert_eq!(
            Matrix::<u8>::new(0, 3, Vec::new()).unwrap_err(),
            MatrixError::RowColumnSize
        );
        assert_eq!(
            Matrix::new(3, 2, vec![vec![1u8, 2], vec![3, 4]]).unwrap_err(),
            MatrixError::RowCountMismatch {
                data_rows: 2,
                rows: 3
            }
        );
        assert_eq!(
            Matrix::new(3, 2, vec![vec![1u8, 2], vec![3], vec![5, 6, 7]]).unwrap_err(),
            MatrixError::ColumnCountMismatch { row: 1 }
        );
    }

    #[test]
    fn test_new_empty_matrix() {
        let got = Matrix::<i32>::empty(3, 3).unwrap();
        let want = Matrix::new(3, 3, vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 0]]).unwrap();
        assert_eq!(got, want);

        assert_eq!(
            Matrix::<i32>::empty(3, 0).unwrap_err(),
            MatrixError::RowColumnSize
        );
    }

    #[test]
    fn test_from_backend() {
        let m = Matrix::from_backend(DenseBackend::from_rows(vec![vec![1.0f32, 2.0]])).unwrap();
        assert_eq!(m.shape(), (1, 2));

        let ragged = DenseBackend::from_rows(vec![vec![1.0f32, 2.0], vec![3.0]]);
        assert_eq!(
            Matrix::from_backend(ragged).unwrap_err(),
            MatrixError::ColumnCountMismatch { row: 1 }
        );

        let empty = DenseBackend::<f32>::from_rows(Vec::new());
        assert_eq!(
            Matrix::from_backend(empty).unwrap_err(),
            MatrixError::RowColumnSize
        );
    }

    #[test]
    fn test_read_only_backend() {
        let data = [1u16, 2, 3, 4];
        let m = Matrix::from_backend(SliceBackend::new(&data, 2, 2).unwrap()).unwrap();
        let dense = Matrix::new(2, 2, vec![vec![1u16, 2], vec![3, 4]]).unwrap();

        assert_eq!(m, dense);
        assert_eq!(m.get(1, 0), Ok(3));
        assert_eq!(m.get(2, 0), Err(MatrixError::OutOfBounds { row: 2, column: 0 }));
    }

    #[test]
    fn test_index() {
        let mut m = Matrix::new(2, 2, vec![vec![1, 2], vec![2, 1]]).unwrap();
        assert!(m.index().is_ok());
        assert!(m.has_index());
        assert_eq!(m.index(), Err(MatrixError::IndexAlreadyExists));
    }

    #[test]
    fn test_eager_index_config() {
        let m = Matrix::<i64>::empty(2, 2)
            .unwrap()
            .with_config(MatrixConfig::default().with_eager_index(true));
        assert!(m.has_index());
    }

    #[test]
    fn test_view_traits() {
        let m = Matrix::new(2, 3, vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.dimensions(), (2, 3));
        assert_eq!(MatrixView::size(&m), 6);
        assert_eq!(m.get_element(0, 1), Some(2));
        assert_eq!(m.get_element(5, 1), None);
        assert_eq!(m.get_row(1), vec![4, 5, 6]);
        assert_eq!(m.get_col(2), vec![3, 6]);
        assert!(m.get_col(3).is_empty());
    }
}
