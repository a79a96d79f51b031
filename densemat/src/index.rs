//! Value index for accelerated search
//!
//! Maps each element value to every coordinate that holds it, so a search
//! becomes a hash lookup instead of a full scan.

use densemat_core::{MatrixElement, StorageReader};
use hashbrown::HashMap;

/// Mapping from element value to the coordinates holding it
///
/// Coordinates for each value are kept in row-major scan order, which is
/// the same order a full scan visits them. NaN cells are not recorded.
#[derive(Debug, Clone)]
pub struct ValueIndex<T: MatrixElement> {
    entries: HashMap<T::Key, Vec<(usize, usize)>>,
    cells: usize,
}

impl<T: MatrixElement> ValueIndex<T> {
    /// Build an index by scanning `rows x columns` cells of a backend
    pub fn build<B: StorageReader<T> + ?Sized>(backend: &B, rows: usize, columns: usize) -> Self {
        let mut entries: HashMap<T::Key, Vec<(usize, usize)>> = HashMap::new();
        let mut cells = 0;

        for i in 0..rows {
            for j in 0..columns {
                if let Some(key) = backend.read(i, j).index_key() {
                    entries.entry(key).or_default().push((i, j));
                    cells += 1;
                }
            }
        }

        Self { entries, cells }
    }

    /// Get every coordinate holding `value`
    pub fn lookup(&self, value: T) -> Option<&[(usize, usize)]> {
        let key = value.index_key()?;
        self.entries.get(&key).map(Vec::as_slice)
    }

    /// Get the number of distinct values indexed
    pub fn distinct_values(&self) -> usize {
        self.entries.len()
    }

    /// Get the number of cells indexed
    pub fn cell_count(&self) -> usize {
        self.cells
    }
}
