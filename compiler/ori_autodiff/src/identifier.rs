//! Associated function identifiers.
//!
//! Names one derivative function of a differentiable function: which kind,
//! which differentiation order, and with respect to which parameters.

use crate::arena::{AssociatedFunctionId, AutodiffArena, IndicesId};
use crate::kind::{associated_function_offset, checked_offset, AssociatedFunctionKind};

/// (kind, order, parameter subset) triple naming an associated function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct AssociatedFunctionIdentifier {
    kind: AssociatedFunctionKind,
    order: u32,
    parameter_indices: IndicesId,
}

impl AssociatedFunctionIdentifier {
    /// Allocate a new identifier in `arena`.
    ///
    /// Always allocates: an existing identifier with the same fields is not
    /// looked up or reused, so two calls with equal arguments return two
    /// distinct handles. Callers that need uniqueness cache the handle.
    pub fn get(
        kind: AssociatedFunctionKind,
        order: u32,
        parameter_indices: IndicesId,
        arena: &mut AutodiffArena,
    ) -> AssociatedFunctionId {
        assert!(order >= 1, "differentiation order must be at least 1");
        assert!(
            checked_offset(order, kind).is_some(),
            "differentiation order {order} overflows the associated function table"
        );
        let id = arena.alloc_identifier(Self {
            kind,
            order,
            parameter_indices,
        });
        tracing::debug!(
            %kind,
            order,
            indices = %arena.indices(parameter_indices),
            ?id,
            "allocated associated function identifier"
        );
        id
    }

    #[inline]
    pub fn kind(&self) -> AssociatedFunctionKind {
        self.kind
    }

    /// Differentiation order (1 for first derivatives).
    #[inline]
    pub fn order(&self) -> u32 {
        self.order
    }

    #[inline]
    pub fn parameter_indices(&self) -> IndicesId {
        self.parameter_indices
    }

    /// Slot of this function in the associated-function table.
    pub fn offset(&self) -> u32 {
        associated_function_offset(self.order, self.kind)
    }
}

#[cfg(test)]
mod tests;
