//! Shape validation for matrix construction
//!
//! Pure checks on declared dimensions and supplied row data with no
//! allocation.

use crate::error::{MatrixError, Result};

/// Validate that both dimensions are non-zero
pub const fn validate_dimensions(rows: usize, columns: usize) -> Result<()> {
    if rows == 0 || columns == 0 {
        return Err(MatrixError::RowColumnSize);
    }
    Ok(())
}

/// Validate row data against declared dimensions
///
/// Checks, in order: non-zero dimensions, outer length equal to `rows`, and
/// every row exactly `columns` wide. The first ragged row is reported.
pub fn validate_rows<T, R: AsRef<[T]>>(rows: usize, columns: usize, data: &[R]) -> Result<()> {
    validate_dimensions(rows, columns)?;

    if data.len() != rows {
        return Err(MatrixError::RowCountMismatch {
            data_rows: data.len(),
            rows,
        });
    }

    validate_rectangular(columns, data)
}

/// Validate that every row is exactly `columns` wide
pub fn validate_rectangular<T, R: AsRef<[T]>>(columns: usize, data: &[R]) -> Result<()> {
    match data.iter().position(|row| row.as_ref().len() != columns) {
        Some(row) => Err(MatrixError::ColumnCountMismatch { row }),
        None => Ok(()),
    }
}

/// Compute `rows * columns` with overflow protection
pub const fn checked_capacity(rows: usize, columns: usize) -> Result<usize> {
    match rows.checked_mul(columns) {
        Some(capacity) => Ok(capacity),
        None => Err(MatrixError::RowColumnSize),
    }
}

/// Validate that `input_size` values fit into a `rows x columns` matrix
pub const fn validate_capacity(rows: usize, columns: usize, input_size: usize) -> Result<usize> {
    let capacity = match checked_capacity(rows, columns) {
        Ok(capacity) => capacity,
        Err(err) => return Err(err),
    };

    if input_size > capacity {
        return Err(MatrixError::MatrixOverflow {
            capacity,
            input_size,
        });
    }

    Ok(capacity)
}
