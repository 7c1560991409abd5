//! Differentiability descriptor attached to function declarations.
//!
//! Predates [`ParameterIndices`](crate::ParameterIndices): keeps the
//! receiver as a separate `wrt_self` flag and the non-self parameters and
//! results as plain bit vectors.

use crate::bits::IndexBits;
use crate::shape::{self, FunctionShapes};

/// Differentiation mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum AutodiffMode {
    Forward,
    Reverse,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Differentiability {
    mode: AutodiffMode,
    wrt_self: bool,
    parameter_indices: IndexBits,
    result_indices: IndexBits,
}

impl Differentiability {
    pub fn new(
        mode: AutodiffMode,
        wrt_self: bool,
        parameter_indices: IndexBits,
        result_indices: IndexBits,
    ) -> Self {
        Self {
            mode,
            wrt_self,
            parameter_indices,
            result_indices,
        }
    }

    /// Differentiate `func` with respect to everything.
    ///
    /// `wrt_self` follows whether `func` is a curried method; parameter
    /// bits cover the non-self parameter list. Functions are assumed to have
    /// exactly one result.
    pub fn for_function<S: FunctionShapes>(mode: AutodiffMode, shapes: &S, func: S::Ty) -> Self {
        let wrt_self = shapes.has_self_param(func);
        let params = shape::unwrap_self_parameter(shapes, func, wrt_self);
        Self {
            mode,
            wrt_self,
            parameter_indices: IndexBits::with_all_set(shapes.num_params(params)),
            result_indices: IndexBits::with_all_set(1),
        }
    }

    #[inline]
    pub fn mode(&self) -> AutodiffMode {
        self.mode
    }

    #[inline]
    pub fn wrt_self(&self) -> bool {
        self.wrt_self
    }

    #[inline]
    pub fn parameter_indices(&self) -> &IndexBits {
        &self.parameter_indices
    }

    #[inline]
    pub fn result_indices(&self) -> &IndexBits {
        &self.result_indices
    }
}
