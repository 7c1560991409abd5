//! Differentiation parameter indices for the Ori compiler.
//!
//! This crate describes *which* parameters an automatic-differentiation
//! operation is taken with respect to, and translates that description
//! between a function's surface shape and the lowered backend shape:
//!
//! - **Parameter indices** ([`ParameterIndices`]): one bit per non-self
//!   parameter plus a receiver bit for methods, with a stable textual form
//!   (`FSUS`, `MUUSS`, ...).
//! - **Shape adapter** ([`FunctionShapes`], [`unwrap_self_parameter`]):
//!   the view of the type system the rest of the crate works against.
//! - **Lowering** ([`ParameterIndices::lowered`], [`LoweredLayout`]):
//!   explodes tuple parameters and moves the receiver last.
//! - **Lowered indices** ([`IndicesPair`]) and the legacy
//!   [`Differentiability`] descriptor.
//! - **Associated functions** ([`AssociatedFunctionKind`],
//!   [`associated_function_offset`], [`AssociatedFunctionIdentifier`]):
//!   naming and table addressing of JVP/VJP functions.
//! - **Arena** ([`AutodiffArena`]): session-lifetime storage; values are
//!   never freed individually.
//!
//! # Errors
//!
//! Text is the only untrusted input: parsing returns `Option`/`Result`.
//! Contract violations by compiler-internal callers (out-of-range indices,
//! a receiver bit on a free function, non-ascending indices, treating a
//! non-method as a method) panic.

mod arena;
mod bits;
mod differentiability;
mod error;
mod identifier;
mod indices;
mod kind;
mod lowering;
mod pair;
mod shape;

pub use arena::{AssociatedFunctionId, AutodiffArena, IndicesId};
pub use bits::IndexBits;
pub use differentiability::{AutodiffMode, Differentiability};
#[cfg(feature = "cache")]
pub use error::DecodeError;
pub use error::{ParseIndicesError, ParseKindError};
pub use identifier::AssociatedFunctionIdentifier;
pub use indices::ParameterIndices;
pub use kind::{associated_function_offset, num_associated_functions, AssociatedFunctionKind};
pub use lowering::{flattened_width, LoweredLayout};
pub use pair::IndicesPair;
pub use shape::{param_types, receiver_type, unwrap_self_parameter, FunctionShapes};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ori_autodiff=debug` or `RUST_LOG=ori_autodiff=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{AssociatedFunctionIdentifier, IndicesId};

    const _: () = assert!(std::mem::size_of::<IndicesId>() == 4);
    const _: () = assert!(std::mem::size_of::<AssociatedFunctionIdentifier>() == 12);
}
