//! Type construction helpers for the Pool.

use super::to_u32;
use crate::{FnFlags, Idx, Pool, Tag};

impl Pool {
    /// Create (or look up) a nominal type by name.
    pub fn named(&mut self, name: &str) -> Idx {
        let id = self.intern_name(name);
        self.intern(Tag::Named, id)
    }

    /// Create a tuple type `(elems...)`.
    ///
    /// Empty tuples return `Idx::UNIT`.
    pub fn tuple(&mut self, elems: &[Idx]) -> Idx {
        if elems.is_empty() {
            return Idx::UNIT;
        }

        // Layout: [elem_count, elem0, elem1, ...]
        let mut extra = Vec::with_capacity(elems.len() + 1);
        extra.push(to_u32(elems.len(), "tuple elements"));
        extra.extend(elems.iter().map(|e| e.raw()));

        self.intern_complex(Tag::Tuple, &extra)
    }

    /// Create a function type `(params...) -> ret`.
    pub fn function(&mut self, params: &[Idx], ret: Idx) -> Idx {
        self.function_with_flags(params, ret, FnFlags::empty())
    }

    /// Create a function type carrying extended flags.
    pub fn function_with_flags(&mut self, params: &[Idx], ret: Idx, flags: FnFlags) -> Idx {
        // Layout: [flags, param_count, param0, param1, ..., return_type]
        let mut extra = Vec::with_capacity(params.len() + 3);
        extra.push(flags.bits());
        extra.push(to_u32(params.len(), "function parameters"));
        extra.extend(params.iter().map(|p| p.raw()));
        extra.push(ret.raw());

        self.intern_complex(Tag::Function, &extra)
    }

    /// Create a curried method type `(receiver) -> (params...) -> ret`.
    ///
    /// The outer function is flagged with [`FnFlags::HAS_SELF_PARAM`].
    pub fn method(&mut self, receiver: Idx, params: &[Idx], ret: Idx) -> Idx {
        let inner = self.function(params, ret);
        self.function_with_flags(&[receiver], inner, FnFlags::HAS_SELF_PARAM)
    }

    /// Create the self-uncurried form of a method: `(params..., receiver) -> ret`.
    pub fn uncurried_method(&mut self, receiver: Idx, params: &[Idx], ret: Idx) -> Idx {
        let mut all = Vec::with_capacity(params.len() + 1);
        all.extend_from_slice(params);
        all.push(receiver);
        self.function(&all, ret)
    }
}
