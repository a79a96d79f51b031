//! Abstract interfaces for dense matrices
//!
//! Traits are pure interfaces - no concrete implementations beyond the
//! element impls for the primitive numeric types.

pub mod backend;
pub mod element;
pub mod matrix;

pub use backend::{StorageReader, StorageWriter};
pub use element::MatrixElement;
#[cfg(feature = "alloc")]
pub use matrix::RowColumnAccess;
pub use matrix::MatrixView;
