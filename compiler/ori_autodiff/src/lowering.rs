//! Lowering of parameter indices to the flattened backend parameter list.
//!
//! The backend takes every function uncurried and with tuple parameters
//! exploded into their leaf components, receiver last:
//!
//! ```text
//! (A, B, C) -> R            with {A, C}       => 101
//! (Self) -> (A, B, C) -> R  with {Self, C}    => 0011   (lowered: (A, B, C, Self) -> R)
//! (A, (B, C), D) -> R       with {A, (B, C)}  => 1110   (lowered: (A, B, C, D) -> R)
//! ```
//!
//! # Algorithm
//!
//! 1. Compute the flattened width of each logical parameter: a tuple
//!    contributes the sum of its elements' widths, anything else 1.
//! 2. Walk the logical parameters with a cursor into the flattened list;
//!    for each selected parameter set `[cursor, cursor + width)`.
//!    The cursor advances whether or not the parameter is selected.

use smallvec::SmallVec;

use crate::bits::IndexBits;
use crate::indices::ParameterIndices;
use crate::shape::{self, FunctionShapes};

/// Stack space to keep free before recursing into nested tuples (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[cfg(not(target_arch = "wasm32"))]
#[inline]
fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[cfg(target_arch = "wasm32")]
#[inline]
fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Number of leaf (non-tuple) components `ty` explodes into.
///
/// `(A, (B, C))` has width 3; the empty tuple has width 0.
pub fn flattened_width<S: FunctionShapes>(shapes: &S, ty: S::Ty) -> usize {
    match shapes.tuple_elements(ty) {
        Some(elems) => with_stack(|| {
            elems
                .into_iter()
                .map(|elem| flattened_width(shapes, elem))
                .sum()
        }),
        None => 1,
    }
}

/// Flattened widths of a function's logical parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoweredLayout {
    widths: SmallVec<[usize; 8]>,
    total: usize,
}

impl LoweredLayout {
    /// Compute the layout for `func`.
    ///
    /// Logical parameters are those of the unwrapped function, followed by
    /// the receiver when `is_method && !self_uncurried`. A self-uncurried
    /// method already lists its receiver last.
    pub fn compute<S: FunctionShapes>(
        shapes: &S,
        func: S::Ty,
        is_method: bool,
        self_uncurried: bool,
    ) -> Self {
        let unwrapped = if self_uncurried {
            func
        } else {
            shape::unwrap_self_parameter(shapes, func, is_method)
        };

        let mut layout = Self {
            widths: SmallVec::new(),
            total: 0,
        };
        for i in 0..shapes.num_params(unwrapped) {
            layout.push(flattened_width(shapes, shapes.param_type(unwrapped, i)));
        }
        if is_method && !self_uncurried {
            layout.push(flattened_width(shapes, shape::receiver_type(shapes, func)));
        }
        layout
    }

    fn push(&mut self, width: usize) {
        self.widths.push(width);
        self.total += width;
    }

    /// Flattened width of each logical parameter, in order.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Total number of flattened parameters.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Flattened range covered by logical parameter `index`.
    pub fn range_of(&self, index: usize) -> std::ops::Range<usize> {
        let start: usize = self.widths[..index].iter().sum();
        start..start + self.widths[index]
    }
}

impl ParameterIndices {
    /// Bits for the flattened, uncurried backend parameters corresponding
    /// to this set. Tuples are exploded and the receiver goes last.
    ///
    /// Pass `self_uncurried` when `func` is a method whose receiver was
    /// already merged into the parameter list, as in `(A, B, C, Self) -> R`.
    #[tracing::instrument(level = "trace", skip_all, fields(indices = %self, self_uncurried = self_uncurried))]
    pub fn lowered<S: FunctionShapes>(
        &self,
        shapes: &S,
        func: S::Ty,
        self_uncurried: bool,
    ) -> IndexBits {
        let layout = LoweredLayout::compute(shapes, func, self.is_method(), self_uncurried);
        let bits = self.bits();
        assert_eq!(
            layout.widths().len(),
            bits.len(),
            "parameter indices {self} do not fit function {func:?}"
        );

        let mut result = IndexBits::new(layout.total());
        let mut cursor = 0;
        for (i, &width) in layout.widths().iter().enumerate() {
            if bits.get(i) {
                result.set_range(cursor..cursor + width);
            }
            cursor += width;
        }

        tracing::trace!(lowered = %result, "lowered parameter indices");
        result
    }
}
