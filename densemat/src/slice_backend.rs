//! Borrowed read-only backend
//!
//! Views a contiguous row-major buffer owned by someone else, either as
//! typed elements or as raw bytes. There is no write capability, so a
//! matrix over this backend exposes only reads and pure operations.
//!
//! ```rust,compile_fail
//! use densemat::{Matrix, SliceBackend};
//!
//! let data = [1, 2, 3, 4];
//! let mut m = Matrix::from_backend(SliceBackend::new(&data, 2, 2).unwrap()).unwrap();
//! m.fill(0);
//! ```

use densemat_core::{
    checked_capacity, validate_dimensions, validate_typed_bytes, MatrixElement, MatrixError,
    Result, StorageReader,
};

/// Read-only view over a contiguous row-major slice
#[derive(Debug, Clone, Copy)]
pub struct SliceBackend<'a, T> {
    data: &'a [T],
    rows: usize,
    columns: usize,
}

impl<'a, T: MatrixElement> SliceBackend<'a, T> {
    /// Create a view of `data` shaped as `rows x columns`
    pub fn new(data: &'a [T], rows: usize, columns: usize) -> Result<Self> {
        let backend = Self {
            data,
            rows,
            columns,
        };
        backend.validate()?;
        Ok(backend)
    }

    /// Create a view of raw bytes holding native-endian elements
    ///
    /// The buffer must be aligned for `T` and exactly
    /// `rows * columns * size_of::<T>()` bytes long.
    pub fn from_bytes(bytes: &'a [u8], rows: usize, columns: usize) -> Result<Self> {
        validate_dimensions(rows, columns)?;
        let data = validate_typed_bytes::<T>(bytes, rows, columns)?;
        Ok(Self {
            data,
            rows,
            columns,
        })
    }

    /// Get the viewed elements
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<T: MatrixElement> StorageReader<T> for SliceBackend<'_, T> {
    fn read(&self, row: usize, col: usize) -> T {
        self.data[row * self.columns + col]
    }

    fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    fn validate(&self) -> Result<()> {
        validate_dimensions(self.rows, self.columns)?;

        let expected = checked_capacity(self.rows, self.columns)?;
        if self.data.len() != expected {
            let expected = expected
                .checked_mul(T::size_bytes())
                .ok_or(MatrixError::RowColumnSize)?;
            return Err(MatrixError::BufferLength {
                expected,
                actual: core::mem::size_of_val(self.data),
            });
        }
        Ok(())
    }
}
