//! densemat - Generic dense matrix container
//!
//! This library provides a two-dimensional numeric matrix over pluggable
//! storage backends, with shape-checked construction, in-place and pure
//! algebra, and an optional value index for fast search.
//!
//! ## Architecture
//!
//! densemat follows a specification/implementation separation:
//!
//! - **densemat-core**: element constraint, storage capability traits,
//!   errors and validation (no allocation required)
//! - **densemat**: the matrix entity, concrete backends, the value index and
//!   the operation set
//!
//! ## Quick Start
//!
//! ```rust
//! use densemat::{expand_slice_to_matrix, Matrix, MatrixError};
//!
//! fn example() -> Result<(), MatrixError> {
//!     let mut a = Matrix::new(2, 2, vec![vec![1, 2], vec![3, 4]])?;
//!     let b = expand_slice_to_matrix(&[1, 0, 0, 1], 2, 2)?;
//!
//!     assert!(b.is_identity_matrix());
//!     assert_eq!(a.multiply(&b)?, a);
//!
//!     a.add_in_place(&b)?.scalar_multiply_in_place(2);
//!     assert_eq!(a.flatten(), vec![4, 4, 6, 10]);
//!
//!     a.index()?;
//!     let found = a.search(4).unwrap_or_default();
//!     assert_eq!(found.len(), 2);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Backends
//!
//! - [`DenseBackend`]: owned row vectors, readable and writable
//! - [`SliceBackend`]: borrowed contiguous slice or byte buffer, read-only
//!
//! Any type implementing [`StorageReader`] (and optionally
//! [`StorageWriter`]) can back a matrix. A read-only backend still supports
//! every pure operation; the in-place operations do not exist for it.

// Re-export core abstractions
pub use densemat_core::{
    // Core traits
    MatrixElement, MatrixView, RowColumnAccess, StorageReader, StorageWriter,
    // Element kinds
    ElementKind,
    // Error handling
    ErrorCategory, MatrixError, Result,
};

pub mod config;
pub mod dense_backend;
pub mod index;
pub mod location;
pub mod matrix;
pub mod operations;
pub mod slice_backend;
pub mod utils;

pub use config::{MatrixConfig, StaleIndexPolicy};
pub use dense_backend::DenseBackend;
pub use index::ValueIndex;
pub use location::Location;
pub use matrix::Matrix;
pub use operations::expand_slice_to_matrix;
pub use slice_backend::SliceBackend;
pub use utils::are_same_dimensions;
