//! Type kind tag for tag-driven dispatch.
//!
//! Each item in the pool has a `Tag` that determines how to interpret its
//! `data` field:
//! - 0-15: Primitives (data unused)
//! - 48-79: Complex types (data = index into `extra[]`)
//! - 80-95: Named types (data = name id)

use std::fmt;

/// Type kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Tag {
    // === Primitives (0-15) ===
    Int = 0,
    Float = 1,
    Bool = 2,
    Str = 3,
    Unit = 4,
    Never = 5,
    Error = 6,
    /// Receiver type inside a method.
    SelfType = 7,

    // === Complex Types (48-79) ===
    // data: index into extra[] with length prefix
    /// Function type `(P1, P2, ...) -> R`.
    ///
    /// Extra layout: `[flags, param_count, param0, ..., return_type]`.
    Function = 48,
    /// Tuple type `(T1, T2, ...)`.
    ///
    /// Extra layout: `[elem_count, elem0, ...]`.
    Tuple = 49,

    // === Named Types (80-95) ===
    /// Nominal type referenced by name (data = name id).
    Named = 80,
}

impl Tag {
    /// Check if this tag uses the extra array for data.
    #[inline]
    pub const fn uses_extra(self) -> bool {
        matches!(self, Self::Function | Self::Tuple)
    }

    /// Get the name of this tag as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Str => "str",
            Self::Unit => "()",
            Self::Never => "never",
            Self::Error => "<error>",
            Self::SelfType => "Self",
            Self::Function => "function",
            Self::Tuple => "tuple",
            Self::Named => "named",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(std::mem::size_of::<Tag>() == 1);

#[cfg(test)]
mod tests;
