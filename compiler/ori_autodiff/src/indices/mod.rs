//! Parameter indices: the subset of a function's parameters that a
//! derivative is taken with respect to.
//!
//! # Layout
//!
//! One bit per parameter of the first non-self parameter list, in
//! declaration order. For methods an extra final bit stands for the
//! receiver:
//!
//! ```text
//! (A, B, C) -> R             bits: [A, B, C]
//! (Self) -> (A, B, C) -> R   bits: [A, B, C, Self]
//! ```
//!
//! # Textual Form
//!
//! ```text
//! string := marker flag*
//! marker := 'F' | 'M'     ; free function | method
//! flag   := 'S' | 'U'     ; selected | not selected
//! ```
//!
//! `(Self) -> (A, B, C) -> R` with `Self` and `C` selected prints as `MUUSS`.
//! Parsing is the only fallible constructor; strings shorter than two
//! characters are rejected.

use std::fmt;
use std::str::FromStr;

use crate::arena::{AutodiffArena, IndicesId};
use crate::bits::IndexBits;
use crate::error::ParseIndicesError;
use crate::shape::{self, FunctionShapes};

/// Set of parameters (and possibly the receiver) to differentiate against.
///
/// Equality compares the method flag and the *set* bits only; trailing
/// unset bits are insignificant (see [`IndexBits`]).
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "cache",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawParameterIndices")
)]
pub struct ParameterIndices {
    indices: IndexBits,
    is_method: bool,
}

#[cfg(feature = "cache")]
#[derive(serde::Deserialize)]
struct RawParameterIndices {
    indices: IndexBits,
    is_method: bool,
}

#[cfg(feature = "cache")]
impl TryFrom<RawParameterIndices> for ParameterIndices {
    type Error = crate::error::DecodeError;

    fn try_from(raw: RawParameterIndices) -> Result<Self, Self::Error> {
        if raw.is_method && raw.indices.is_empty() {
            return Err(crate::error::DecodeError::MissingReceiverBit);
        }
        Ok(Self::from_bits(raw.indices, raw.is_method))
    }
}

impl ParameterIndices {
    /// Build from raw bits. For methods the last bit is the receiver.
    pub fn from_bits(indices: IndexBits, is_method: bool) -> Self {
        assert!(
            !is_method || !indices.is_empty(),
            "method parameter indices need a receiver bit"
        );
        Self { indices, is_method }
    }

    /// Empty (or, with `set_all`, full) indices sized for `func`.
    ///
    /// `is_method` treats `func` as a curried method and adds a receiver bit.
    ///
    /// # Panics
    ///
    /// If `is_method` is set but `func` is not a single-receiver curried
    /// wrapper around a function type.
    pub fn for_function<S: FunctionShapes>(
        shapes: &S,
        func: S::Ty,
        is_method: bool,
        set_all: bool,
    ) -> Self {
        let unwrapped = shape::unwrap_self_parameter(shapes, func, is_method);
        let num_bits = shapes.num_params(unwrapped) + usize::from(is_method);
        let indices = if set_all {
            IndexBits::with_all_set(num_bits)
        } else {
            IndexBits::new(num_bits)
        };
        tracing::debug!(?func, is_method, set_all, num_bits, "parameter indices for function");
        Self { indices, is_method }
    }

    /// Arena-allocating form of [`for_function`](Self::for_function).
    pub fn create<S: FunctionShapes>(
        arena: &mut AutodiffArena,
        shapes: &S,
        func: S::Ty,
        is_method: bool,
        set_all: bool,
    ) -> IndicesId {
        arena.alloc_indices(Self::for_function(shapes, func, is_method, set_all))
    }

    /// Decode the textual form, `None` if malformed.
    ///
    /// Use [`str::parse`] for the reason a string was rejected.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse()
            .inspect_err(|err| tracing::trace!(input = s, %err, "rejected parameter indices"))
            .ok()
    }

    /// Arena-allocating form of [`parse`](Self::parse).
    pub fn create_from_str(arena: &mut AutodiffArena, s: &str) -> Option<IndicesId> {
        Self::parse(s).map(|indices| arena.alloc_indices(indices))
    }

    /// Whether the last bit denotes a method receiver.
    #[inline]
    pub fn is_method(&self) -> bool {
        self.is_method
    }

    /// Raw bits, receiver last for methods.
    #[inline]
    pub fn bits(&self) -> &IndexBits {
        &self.indices
    }

    /// Number of parameters excluding the receiver.
    #[inline]
    pub fn num_non_self_parameters(&self) -> usize {
        self.indices.len() - usize::from(self.is_method)
    }

    /// Add a non-self parameter. Indices count from the first non-self
    /// parameter list: for `(Self) -> (A, B, C) -> R`, index 0 is `A`.
    pub fn set_non_self_parameter(&mut self, index: usize) {
        let count = self.num_non_self_parameters();
        assert!(
            index < count,
            "parameter index {index} out of bounds for {count} non-self parameters"
        );
        self.indices.set(index);
    }

    /// Add every non-self parameter.
    pub fn set_all_non_self_parameters(&mut self) {
        let count = self.num_non_self_parameters();
        self.indices.set_range(0..count);
    }

    /// Add the receiver. Only valid for methods.
    pub fn set_self_parameter(&mut self) {
        assert!(
            self.is_method,
            "cannot add self parameter to non-method parameter indices"
        );
        let last = self.indices.len() - 1;
        self.indices.set(last);
    }

    /// Whether the receiver is in the set. Always `false` for free functions.
    pub fn is_self_parameter_set(&self) -> bool {
        self.is_method && self.indices.get(self.indices.len() - 1)
    }

    /// Whether non-self parameter `index` is in the set.
    pub fn is_non_self_parameter_set(&self, index: usize) -> bool {
        let count = self.num_non_self_parameters();
        assert!(
            index < count,
            "parameter index {index} out of bounds for {count} non-self parameters"
        );
        self.indices.get(index)
    }

    /// Selected non-self parameter positions, ascending.
    pub fn non_self_parameters(&self) -> impl Iterator<Item = usize> + '_ {
        let count = self.num_non_self_parameters();
        self.indices.iter_ones().take_while(move |&i| i < count)
    }

    /// Types of the selected parameters, receiver first.
    ///
    /// ```text
    /// (A, B, C) -> R            with {A, C}     => [A, C]
    /// (Self) -> (A, B, C) -> R  with {Self, C}  => [Self, C]
    /// ```
    ///
    /// Pass `self_uncurried` when `func` is a method whose receiver was
    /// already merged into the parameter list as the last parameter, as in
    /// `(A, B, C, Self) -> R`.
    pub fn subset_parameter_types<S: FunctionShapes>(
        &self,
        shapes: &S,
        func: S::Ty,
        self_uncurried: bool,
    ) -> Vec<S::Ty> {
        let mut types = Vec::with_capacity(self.indices.count_ones());
        if self_uncurried && self.is_method {
            let num_params = shapes.num_params(func);
            assert_eq!(
                num_params,
                self.indices.len(),
                "parameter indices {self} do not fit uncurried method {func:?}"
            );
            if self.is_self_parameter_set() {
                types.push(shapes.param_type(func, num_params - 1));
            }
            types.extend(
                (0..num_params - 1)
                    .filter(|&i| self.indices.get(i))
                    .map(|i| shapes.param_type(func, i)),
            );
        } else {
            let unwrapped = shape::unwrap_self_parameter(shapes, func, self.is_method);
            let num_params = shapes.num_params(unwrapped);
            assert_eq!(
                num_params,
                self.num_non_self_parameters(),
                "parameter indices {self} do not fit function {func:?}"
            );
            if self.is_self_parameter_set() {
                types.push(shape::receiver_type(shapes, func));
            }
            types.extend(
                (0..num_params)
                    .filter(|&i| self.indices.get(i))
                    .map(|i| shapes.param_type(unwrapped, i)),
            );
        }
        types
    }
}

impl FromStr for ParameterIndices {
    type Err = ParseIndicesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let marker = chars.next();
        let flags = chars.as_str();
        let Some(marker) = marker.filter(|_| !flags.is_empty()) else {
            return Err(ParseIndicesError::TooShort {
                len: s.chars().count(),
            });
        };

        let is_method = match marker {
            'M' => true,
            'F' => false,
            found => return Err(ParseIndicesError::InvalidMarker { found }),
        };

        let mut indices = IndexBits::new(flags.chars().count());
        for (i, flag) in flags.chars().enumerate() {
            match flag {
                'S' => indices.set(i),
                'U' => {}
                found => {
                    return Err(ParseIndicesError::InvalidFlag {
                        position: i + 1,
                        found,
                    })
                }
            }
        }

        Ok(Self { indices, is_method })
    }
}

impl fmt::Display for ParameterIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_method { "M" } else { "F" })?;
        for i in 0..self.indices.len() {
            f.write_str(if self.indices.get(i) { "S" } else { "U" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for ParameterIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParameterIndices({self})")
    }
}
