//! Algebraic operations on matrices
//!
//! Operations come in two flavors:
//!
//! - **in place**: mutate the receiver and return it for chaining; only
//!   available when the backend can be written
//! - **pure**: allocate a new dense result and leave operands unchanged

pub mod in_place;
pub mod pure;

pub use pure::expand_slice_to_matrix;
