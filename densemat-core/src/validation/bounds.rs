//! Coordinate bounds and buffer validation
//!
//! Pure validation functions with no I/O dependencies.

use crate::error::{MatrixError, Result};
use crate::traits::MatrixElement;

/// Validate a coordinate against a matrix extent
pub const fn validate_position(row: usize, column: usize, rows: usize, columns: usize) -> Result<()> {
    if row >= rows || column >= columns {
        return Err(MatrixError::OutOfBounds { row, column });
    }
    Ok(())
}

/// View a byte buffer as `rows * columns` row-major elements
///
/// Checks alignment for `T` and that the buffer length is exactly the
/// number of bytes the shape needs.
pub fn validate_typed_bytes<T: MatrixElement>(
    bytes: &[u8],
    rows: usize,
    columns: usize,
) -> Result<&[T]> {
    let expected = rows
        .checked_mul(columns)
        .and_then(|cells| cells.checked_mul(T::size_bytes()))
        .ok_or(MatrixError::RowColumnSize)?;

    if bytes.len() != expected {
        return Err(MatrixError::BufferLength {
            expected,
            actual: bytes.len(),
        });
    }

    bytemuck::try_cast_slice(bytes).map_err(|err| match err {
        bytemuck::PodCastError::TargetAlignmentGreaterAndInputNotAligned => {
            MatrixError::BufferMisaligned
        }
        _ => MatrixError::BufferLength {
            expected,
            actual: bytes.len(),
        },
    })
}
