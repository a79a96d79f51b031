//! Element kind definitions
//!
//! Each matrix is fixed to one numeric primitive at compile time; the kind
//! is only a descriptive tag for that choice.

/// Numeric primitive kinds a matrix can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ElementKind {
    I8 = 0,
    I16 = 1,
    I32 = 2,
    I64 = 3,
    Isize = 4,
    U8 = 5,
    U16 = 6,
    U32 = 7,
    U64 = 8,
    Usize = 9,
    F32 = 10,
    F64 = 11,
}

impl core::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ElementKind::I8 => "i8",
            ElementKind::I16 => "i16",
            ElementKind::I32 => "i32",
            ElementKind::I64 => "i64",
            ElementKind::Isize => "isize",
            ElementKind::U8 => "u8",
            ElementKind::U16 => "u16",
            ElementKind::U32 => "u32",
            ElementKind::U64 => "u64",
            ElementKind::Usize => "usize",
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
        };
        write!(f, "{name}")
    }
}

impl ElementKind {
    /// Get the size in bytes for this kind
    pub const fn size_bytes(&self) -> usize {
        match self {
            ElementKind::I8 | ElementKind::U8 => 1,
            ElementKind::I16 | ElementKind::U16 => 2,
            ElementKind::I32 | ElementKind::U32 | ElementKind::F32 => 4,
            ElementKind::I64 | ElementKind::U64 | ElementKind::F64 => 8,
            ElementKind::Isize | ElementKind::Usize => core::mem::size_of::<usize>(),
        }
    }

    /// Whether this kind is a floating point type
    pub const fn is_float(&self) -> bool {
        matches!(self, ElementKind::F32 | ElementKind::F64)
    }

    /// Whether this kind is a signed type
    pub const fn is_signed(&self) -> bool {
        !matches!(
            self,
            ElementKind::U8
                | ElementKind::U16
                | ElementKind::U32
                | ElementKind::U64
                | ElementKind::Usize
        )
    }
}
