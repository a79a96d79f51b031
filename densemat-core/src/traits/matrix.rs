//! Core matrix abstraction traits
//!
//! These traits describe read access to a shaped matrix independent of how
//! its storage is laid out.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::MatrixElement;

/// Read-only, bounds-checked view of a matrix
pub trait MatrixView {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get the number of cells
    fn size(&self) -> usize {
        let (rows, cols) = self.dimensions();
        rows * cols
    }
}

/// Extension trait for whole row/column extraction (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait RowColumnAccess: MatrixView {
    /// Get all elements in a row, in column order
    ///
    /// Returns an empty vector if the row is out of bounds.
    fn get_row(&self, row_index: usize) -> Vec<Self::Element>;

    /// Get all elements in a column, in row order
    ///
    /// Returns an empty vector if the column is out of bounds.
    fn get_col(&self, col_index: usize) -> Vec<Self::Element>;
}
