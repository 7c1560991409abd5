//! Associated function kinds and their slot addressing.
//!
//! Every differentiable function has, per differentiation order, one
//! associated function of each kind. The associated-function cache stores
//! them in a dense table indexed by order, then kind:
//!
//! ```text
//! order 1: [jvp, vjp]           offsets 0, 1
//! order 2: [jvp, vjp, ...]      offsets 4, 5, ...
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ParseKindError;

/// Direction of an associated derivative function.
///
/// The discriminant is the kind's slot within one differentiation order;
/// it is only meaningful for addressing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AssociatedFunctionKind {
    /// Jacobian-vector product (forward mode).
    Jvp = 0,
    /// Vector-Jacobian product (reverse mode).
    Vjp = 1,
}

impl AssociatedFunctionKind {
    /// All kinds, in slot order.
    pub const ALL: [Self; 2] = [Self::Jvp, Self::Vjp];

    /// Number of kinds, i.e. slots per differentiation order.
    pub const COUNT: u32 = 2;

    /// Slot of this kind within one differentiation order.
    #[inline]
    pub const fn raw_value(self) -> u32 {
        self as u32
    }

    /// Lowercase name, as written in attributes.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jvp => "jvp",
            Self::Vjp => "vjp",
        }
    }
}

impl FromStr for AssociatedFunctionKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jvp" => Ok(Self::Jvp),
            "vjp" => Ok(Self::Vjp),
            other => Err(ParseKindError(other.to_owned())),
        }
    }
}

impl fmt::Display for AssociatedFunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(AssociatedFunctionKind::ALL.len() == AssociatedFunctionKind::COUNT as usize);

/// Number of associated function slots for `order`: one per kind per order.
///
/// # Panics
///
/// If the slot count does not fit in a `u32`.
#[inline]
pub const fn num_associated_functions(order: u32) -> u32 {
    match order.checked_mul(AssociatedFunctionKind::COUNT) {
        Some(count) => count,
        None => panic!("differentiation order overflows the associated function table"),
    }
}

/// Slot of `kind` at `order`, or `None` if it does not fit in a `u32`.
pub(crate) fn checked_offset(order: u32, kind: AssociatedFunctionKind) -> Option<u32> {
    let slots = order.checked_mul(AssociatedFunctionKind::COUNT)?;
    order.checked_sub(1)?.checked_mul(slots)?.checked_add(kind.raw_value())
}

/// Dense, zero-based slot of the `kind` associated function of `order`.
///
/// # Panics
///
/// If `order` is 0 (differentiation orders start at 1), or if the slot
/// does not fit in a `u32`.
pub fn associated_function_offset(order: u32, kind: AssociatedFunctionKind) -> u32 {
    assert!(order >= 1, "differentiation order must be at least 1");
    checked_offset(order, kind).unwrap_or_else(|| {
        panic!("differentiation order {order} overflows the associated function table")
    })
}

#[cfg(test)]
mod tests;
