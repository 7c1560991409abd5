//! Type index handle.
//!
//! All types live in a [`Pool`](crate::Pool) and are referenced by a 32-bit
//! index. Primitives occupy fixed slots so they can be named without a pool.

use std::fmt;

/// A 32-bit index into the type pool.
///
/// Types are compared by index equality, not structural comparison. The
/// pool deduplicates on interning, so structurally equal types share an index.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Primitive Types (indices 0-7) ===

    /// The `int` type.
    pub const INT: Self = Self(0);
    /// The `float` type.
    pub const FLOAT: Self = Self(1);
    /// The `bool` type.
    pub const BOOL: Self = Self(2);
    /// The `str` type.
    pub const STR: Self = Self(3);
    /// The unit type `()`.
    pub const UNIT: Self = Self(4);
    /// The never type.
    pub const NEVER: Self = Self(5);
    /// The error type.
    pub const ERROR: Self = Self(6);
    /// The `Self` type in a method context.
    pub const SELF_TYPE: Self = Self(7);

    /// Number of pre-interned primitive types.
    pub const PRIMITIVE_COUNT: u32 = 8;

    /// Sentinel value indicating no type.
    pub const NONE: Self = Self(u32::MAX);

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index into the pool's item table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Human-readable name for primitive types, `None` for pool-allocated ones.
    #[inline]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("int"),
            1 => Some("float"),
            2 => Some("bool"),
            3 => Some("str"),
            4 => Some("()"),
            5 => Some("never"),
            6 => Some("<error>"),
            7 => Some("Self"),
            _ => None,
        }
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Idx({name})"),
            None if self.is_none() => write!(f, "Idx::NONE"),
            None => write!(f, "Idx({})", self.0),
        }
    }
}

impl fmt::Display for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None if self.is_none() => f.write_str("<none>"),
            None => write!(f, "type#{}", self.0),
        }
    }
}

const _: () = assert!(std::mem::size_of::<Idx>() == 4);
