//! Function type metadata flags.
//!
//! Stored as the first word of a function type's extra data, so two
//! function types that differ only in flags intern to different indices.

use bitflags::bitflags;

bitflags! {
    /// Extended information attached to a function type.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
    pub struct FnFlags: u32 {
        /// The function is a curried method: its single parameter is the
        /// receiver and its result is the method's inner function type.
        const HAS_SELF_PARAM = 1 << 0;
    }
}

impl FnFlags {
    /// Check if this is a curried method wrapper.
    #[inline]
    pub const fn has_self_param(self) -> bool {
        self.contains(Self::HAS_SELF_PARAM)
    }
}
