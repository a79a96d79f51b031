//! Error types for dense matrix operations

use thiserror::Error;

/// Errors that can occur during matrix construction and operations
///
/// Every variant is a permanent input-validation or precondition failure;
/// nothing here is transient or worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Either dimension is zero
    #[error("rows and columns must be greater than zero")]
    RowColumnSize,
    /// Outer length of the supplied data disagrees with the declared rows
    #[error("mismatch between data rows: {data_rows} and rows param: {rows}")]
    RowCountMismatch { data_rows: usize, rows: usize },
    /// First row whose width disagrees with the declared columns
    #[error("column count mismatch in row {row}")]
    ColumnCountMismatch { row: usize },
    /// Element-wise operands differ in shape
    #[error("matrixes must be the same dimensions")]
    DimensionMismatch,
    /// Left operand columns differ from right operand rows
    #[error("number of columns in the first matrix must equal the number of rows in the second")]
    MultiplicationDimensionMismatch,
    /// Coordinate exceeds the matrix extent
    #[error("provided position ({row}, {column}) exceeds matrix dimensions")]
    OutOfBounds { row: usize, column: usize },
    /// Input slice is longer than the target matrix can hold
    #[error("matrix has size: {capacity} cannot fit input size: {input_size}")]
    MatrixOverflow { capacity: usize, input_size: usize },
    /// An index has already been built for this matrix
    #[error("index already exists for this matrix")]
    IndexAlreadyExists,
    /// Byte buffer is not aligned for the element type
    #[error("buffer is not aligned for the element type")]
    BufferMisaligned,
    /// Byte buffer length does not match the requested shape
    #[error("buffer holds {actual} bytes but the shape needs {expected}")]
    BufferLength { expected: usize, actual: usize },
}

/// Coarse classification of [`MatrixError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Construction or operand shape problems
    Shape,
    /// Coordinate outside the matrix
    Bounds,
    /// Value index misuse
    Index,
    /// Raw buffer could not be viewed as elements
    Buffer,
}

impl MatrixError {
    /// Get the category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::RowColumnSize
            | MatrixError::RowCountMismatch { .. }
            | MatrixError::ColumnCountMismatch { .. }
            | MatrixError::DimensionMismatch
            | MatrixError::MultiplicationDimensionMismatch
            | MatrixError::MatrixOverflow { .. } => ErrorCategory::Shape,
            MatrixError::OutOfBounds { .. } => ErrorCategory::Bounds,
            MatrixError::IndexAlreadyExists => ErrorCategory::Index,
            MatrixError::BufferMisaligned | MatrixError::BufferLength { .. } => {
                ErrorCategory::Buffer
            }
        }
    }
}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
