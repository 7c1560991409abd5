//! Errors for textual inputs.
//!
//! Only text is treated as untrusted. Misuse by compiler-internal callers
//! (out-of-range indices, a receiver bit on a free function, non-ascending
//! indices) panics instead.

use thiserror::Error;

/// Why a parameter indices string was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseIndicesError {
    /// Fewer than two characters: a marker plus at least one flag is required.
    #[error("parameter indices string must have at least 2 characters, found {len}")]
    TooShort { len: usize },
    /// First character is neither `F` nor `M`.
    #[error("invalid parameter indices marker `{found}`: expected `F` or `M`")]
    InvalidMarker { found: char },
    /// A flag character is neither `S` nor `U`.
    #[error("invalid parameter flag `{found}` at position {position}: expected `S` or `U`")]
    InvalidFlag { position: usize, found: char },
}

/// Unknown associated function kind name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown associated function kind `{0}`: expected `jvp` or `vjp`")]
pub struct ParseKindError(pub String);

/// Why a cached value was rejected on decode.
#[cfg(feature = "cache")]
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The word buffer does not match the declared bit length.
    #[error("bit vector of length {len} needs {expected} words, found {found}")]
    WordCount {
        len: usize,
        expected: usize,
        found: usize,
    },
    /// A bit at a position `>= len` is set.
    #[error("bit vector of length {len} has bits set past its end")]
    BitsPastEnd { len: usize },
    /// Method parameter indices without a receiver bit.
    #[error("method parameter indices need a receiver bit")]
    MissingReceiverBit,
}
