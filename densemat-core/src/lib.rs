#![no_std]

//! densemat core - element, storage capability and error definitions
//!
//! This crate provides the element constraint, the storage backend
//! capability traits and the validation helpers shared by every dense
//! matrix implementation. It performs no allocation unless the `alloc`
//! feature is enabled.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod kind;
pub mod traits;
pub mod validation;

pub use error::*;
pub use kind::ElementKind;
pub use traits::*;
pub use validation::*;
