//! Session-lifetime storage for differentiation metadata.
//!
//! Parameter indices and associated function identifiers are allocated
//! once and referenced by 32-bit handles for the rest of the compilation
//! session. Values are never freed individually: there is no removal API,
//! and everything is dropped together with the arena.
//!
//! Access is single-writer by construction (`&mut self` to allocate or
//! mutate). Hosts that analyze functions in parallel give each worker its
//! own arena or wrap a shared one in a lock.

use std::fmt;

use crate::identifier::AssociatedFunctionIdentifier;
use crate::indices::ParameterIndices;

fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("autodiff arena overflow: too many {what}"))
}

/// Handle to [`ParameterIndices`] stored in an [`AutodiffArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct IndicesId(u32);

impl IndicesId {
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for IndicesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndicesId({})", self.0)
    }
}

/// Handle to an [`AssociatedFunctionIdentifier`] stored in an [`AutodiffArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct AssociatedFunctionId(u32);

impl AssociatedFunctionId {
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for AssociatedFunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssociatedFunctionId({})", self.0)
    }
}

/// Bump-style arena for autodiff metadata.
#[derive(Clone, Debug, Default)]
pub struct AutodiffArena {
    indices: Vec<ParameterIndices>,
    identifiers: Vec<AssociatedFunctionIdentifier>,
}

impl AutodiffArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store parameter indices, returning a handle valid for the arena's lifetime.
    pub fn alloc_indices(&mut self, indices: ParameterIndices) -> IndicesId {
        let id = IndicesId(to_u32(self.indices.len(), "parameter indices"));
        self.indices.push(indices);
        id
    }

    #[inline]
    pub fn indices(&self, id: IndicesId) -> &ParameterIndices {
        &self.indices[id.index()]
    }

    /// Mutable access for the explicit setters on [`ParameterIndices`].
    #[inline]
    pub fn indices_mut(&mut self, id: IndicesId) -> &mut ParameterIndices {
        &mut self.indices[id.index()]
    }

    /// Store an identifier, returning a handle valid for the arena's lifetime.
    pub fn alloc_identifier(&mut self, identifier: AssociatedFunctionIdentifier) -> AssociatedFunctionId {
        let id = AssociatedFunctionId(to_u32(self.identifiers.len(), "associated function identifiers"));
        self.identifiers.push(identifier);
        id
    }

    #[inline]
    pub fn identifier(&self, id: AssociatedFunctionId) -> &AssociatedFunctionIdentifier {
        &self.identifiers[id.index()]
    }

    /// Number of parameter indices allocated so far.
    pub fn num_indices(&self) -> usize {
        self.indices.len()
    }

    /// Number of identifiers allocated so far.
    pub fn num_identifiers(&self) -> usize {
        self.identifiers.len()
    }
}
