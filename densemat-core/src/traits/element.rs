//! Matrix element type constraints
//!
//! This module defines the closed set of numeric primitives that can be
//! stored as matrix elements.

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{Add, Div, Mul, Sub};

use bytemuck::Pod;
use num_traits::{One, Zero};

use crate::kind::ElementKind;

mod sealed {
    pub trait Sealed {}
}

/// Trait for types that can be stored as matrix elements
///
/// Implemented for the signed and unsigned integers of every width and for
/// `f32`/`f64`; the set is sealed. All element types are:
/// - Pod: plain bytes, so borrowed buffers can be viewed as elements
/// - Zero/One: additive and multiplicative identities
/// - closed under `+`, `-`, `*` and `/`
///
/// Matrix arithmetic goes through [`wrapping_add`](Self::wrapping_add),
/// [`wrapping_sub`](Self::wrapping_sub) and [`wrapping_mul`](Self::wrapping_mul):
/// integers wrap at the boundary of their width in every build profile,
/// floats follow IEEE 754 rounding.
pub trait MatrixElement:
    sealed::Sealed
    + Copy
    + PartialEq
    + Debug
    + Pod
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Hashable stand-in for the value, used by the value index
    type Key: Copy + Eq + Hash + Debug;

    /// Get the kind tag for this element type
    fn kind() -> ElementKind;

    /// Map the value to its index key
    ///
    /// Two values that compare equal with `==` share a key. Returns `None`
    /// for values that are never equal to anything (NaN).
    fn index_key(self) -> Option<Self::Key>;

    /// Sum that wraps on integer overflow
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Difference that wraps on integer overflow
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Product that wraps on integer overflow
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }
}

macro_rules! impl_integer_element {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl MatrixElement for $ty {
                type Key = $ty;

                fn kind() -> ElementKind {
                    ElementKind::$kind
                }

                fn index_key(self) -> Option<Self::Key> {
                    Some(self)
                }

                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$ty>::wrapping_mul(self, rhs)
                }
            }
        )*
    };
}

impl_integer_element! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
}

impl sealed::Sealed for f32 {}

impl MatrixElement for f32 {
    type Key = u32;

    fn kind() -> ElementKind {
        ElementKind::F32
    }

    fn index_key(self) -> Option<Self::Key> {
        if self.is_nan() {
            return None;
        }
        // -0.0 == 0.0, so both must land on the same key
        let normalized = if self == 0.0 { 0.0f32 } else { self };
        Some(normalized.to_bits())
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }
}

impl sealed::Sealed for f64 {}

impl MatrixElement for f64 {
    type Key = u64;

    fn kind() -> ElementKind {
        ElementKind::F64
    }

    fn index_key(self) -> Option<Self::Key> {
        if self.is_nan() {
            return None;
        }
        let normalized = if self == 0.0 { 0.0f64 } else { self };
        Some(normalized.to_bits())
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_keys() {
        assert_eq!(7i32.index_key(), Some(7));
        assert_eq!(u8::MAX.index_key(), Some(255));
        assert_eq!(<i64 as MatrixElement>::kind(), ElementKind::I64);
        assert_eq!(<u16 as MatrixElement>::size_bytes(), 2);
    }

    #[test]
    fn test_float_keys_follow_equality() {
        assert_eq!((-0.0f64).index_key(), 0.0f64.index_key());
        assert_eq!((-0.0f32).index_key(), 0.0f32.index_key());
        assert_ne!(1.5f64.index_key(), (-1.5f64).index_key());
        assert_eq!(f64::NAN.index_key(), None);
        assert_eq!(f32::NAN.index_key(), None);
    }

    #[test]
    fn test_integer_arithmetic_wraps() {
        assert_eq!(MatrixElement::wrapping_add(200u8, 100), 44);
        assert_eq!(MatrixElement::wrapping_sub(0u32, 1), u32::MAX);
        assert_eq!(MatrixElement::wrapping_sub(i8::MIN, 1), i8::MAX);
        assert_eq!(MatrixElement::wrapping_mul(i16::MAX, 2), -2);
    }

    #[test]
    fn test_float_arithmetic_is_plain() {
        assert_eq!(MatrixElement::wrapping_add(f32::MAX, f32::MAX), f32::INFINITY);
        assert_eq!(MatrixElement::wrapping_mul(1.5f64, -2.0), -3.0);
        assert_eq!(MatrixElement::wrapping_sub(0.5f64, 0.25), 0.25);
    }

    #[test]
    fn test_identities() {
        assert_eq!(<f32 as Zero>::zero(), 0.0);
        assert_eq!(<u64 as One>::one(), 1);
    }
}
