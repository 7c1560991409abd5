//! Type pool for the Ori autodiff model.
//!
//! A deliberately small slice of the Ori type system: just enough structure
//! to describe function shapes the differentiation machinery works against.
//!
//! - [`Idx`]: 32-bit handle into the [`Pool`]; equality is index equality
//! - [`Tag`]: kind discriminant driving how an item's data is interpreted
//! - [`FnFlags`]: per-function metadata (e.g. curried method wrapper)
//!
//! # Curried Methods
//!
//! A method `(Self) -> (A, B) -> R` is represented as a function type with
//! exactly one parameter (the receiver) whose result is the inner function
//! type. The outer function carries [`FnFlags::HAS_SELF_PARAM`]. Build these
//! with [`Pool::method`].

mod flags;
mod idx;
mod pool;
mod tag;

pub use flags::FnFlags;
pub use idx::Idx;
pub use pool::Pool;
pub use tag::Tag;
