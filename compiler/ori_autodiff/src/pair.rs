//! Lowered differentiation indices: "differentiate result `source` with
//! respect to `parameters`".
//!
//! Unlike [`ParameterIndices`](crate::ParameterIndices) these index a
//! flat, already-lowered parameter list, so there is no method flag.

use std::fmt;

use crate::bits::IndexBits;

/// A (result index, parameter subset) pair.
///
/// Equality requires the same source and the same set parameter bits;
/// vector lengths may differ.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicesPair {
    source: u32,
    parameters: IndexBits,
}

impl IndicesPair {
    /// Build from a source index and strictly ascending parameter indices.
    ///
    /// The parameter vector is sized to `max + 1` (empty for no parameters).
    ///
    /// # Panics
    ///
    /// If `parameters` is not strictly ascending.
    pub fn new(source: u32, parameters: &[u32]) -> Self {
        let len = parameters.iter().max().map_or(0, |&max| max as usize + 1);
        let mut bits = IndexBits::new(len);
        let mut last: Option<u32> = None;
        for &index in parameters {
            if let Some(prev) = last {
                assert!(
                    index > prev,
                    "parameter indices must be ascending: {index} follows {prev} in {parameters:?}"
                );
            }
            last = Some(index);
            bits.set(index as usize);
        }
        Self {
            source,
            parameters: bits,
        }
    }

    /// Build from an existing parameter bit vector.
    pub fn from_bits(source: u32, parameters: IndexBits) -> Self {
        Self { source, parameters }
    }

    /// Index of the differentiated result.
    #[inline]
    pub fn source(&self) -> u32 {
        self.source
    }

    /// Parameters differentiated against.
    #[inline]
    pub fn parameters(&self) -> &IndexBits {
        &self.parameters
    }

    /// Whether lowered parameter `index` is differentiated against.
    pub fn is_wrt_parameter(&self, index: usize) -> bool {
        index < self.parameters.len() && self.parameters.get(index)
    }
}

impl fmt::Display for IndicesPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(source: {}, parameters: {})",
            self.source, self.parameters
        )
    }
}

impl fmt::Debug for IndicesPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndicesPair{self}")
    }
}
