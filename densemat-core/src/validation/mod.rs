//! Validation utilities for matrix shapes and coordinates
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;
pub mod shape;

pub use bounds::{validate_position, validate_typed_bytes};
pub use shape::{
    checked_capacity, validate_capacity, validate_dimensions, validate_rectangular, validate_rows,
};
