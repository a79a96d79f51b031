//! Search result entries

/// A matched cell: its zero-based (row, column) position and value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location<T> {
    position: (usize, usize),
    value: T,
}

impl<T: Copy> Location<T> {
    pub(crate) fn new(row: usize, column: usize, value: T) -> Self {
        Self {
            position: (row, column),
            value,
        }
    }

    /// Get the (row, column) position
    pub fn position(&self) -> (usize, usize) {
        self.position
    }

    pub fn row(&self) -> usize {
        self.position.0
    }

    pub fn column(&self) -> usize {
        self.position.1
    }

    /// Get the matched value
    pub fn value(&self) -> T {
        self.value
    }
}
