//! Interning type pool.
//!
//! Every type is an `Item { tag, data }` stored in a flat table and
//! addressed by [`Idx`]. Variable-length payloads (function parameters,
//! tuple elements) live in a shared `extra` array; `data` points at their
//! start. Interning deduplicates structurally equal types.

use rustc_hash::FxHashMap;

use crate::{FnFlags, Idx, Tag};

mod construct;

/// A single pool entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Item {
    tag: Tag,
    data: u32,
}

/// Type pool: owns every type of a compilation session.
///
/// Types are never removed; an [`Idx`] stays valid as long as the pool lives.
#[derive(Clone, Debug)]
pub struct Pool {
    items: Vec<Item>,
    extra: Vec<u32>,
    /// Interned nominal type names (indexed by name id).
    names: Vec<String>,
    name_ids: FxHashMap<String, u32>,
    /// Structural dedup table: `(tag, payload)` to existing index.
    dedup: FxHashMap<(Tag, Vec<u32>), Idx>,
}

/// Primitive tags, in `Idx` order.
const PRIMITIVES: [Tag; Idx::PRIMITIVE_COUNT as usize] = [
    Tag::Int,
    Tag::Float,
    Tag::Bool,
    Tag::Str,
    Tag::Unit,
    Tag::Never,
    Tag::Error,
    Tag::SelfType,
];

fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("type pool overflow: too many {what}"))
}

impl Pool {
    /// Create a pool with all primitives pre-interned.
    pub fn new() -> Self {
        let items = PRIMITIVES.iter().map(|&tag| Item { tag, data: 0 }).collect();
        Self {
            items,
            extra: Vec::new(),
            names: Vec::new(),
            name_ids: FxHashMap::default(),
            dedup: FxHashMap::default(),
        }
    }

    /// Number of types in the pool (primitives included).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A pool always holds the primitives, so it is never empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the kind tag of a type.
    #[inline]
    pub fn tag(&self, idx: Idx) -> Tag {
        self.items[idx.index()].tag
    }

    #[inline]
    fn data(&self, idx: Idx) -> u32 {
        self.items[idx.index()].data
    }

    /// Intern a type whose payload lives in `extra`.
    fn intern_complex(&mut self, tag: Tag, payload: &[u32]) -> Idx {
        debug_assert!(tag.uses_extra());
        let key = (tag, payload.to_vec());
        if let Some(&idx) = self.dedup.get(&key) {
            return idx;
        }
        let data = to_u32(self.extra.len(), "extra words");
        self.extra.extend_from_slice(payload);
        self.push(tag, data, key)
    }

    /// Intern a type whose payload fits in `data`.
    fn intern(&mut self, tag: Tag, data: u32) -> Idx {
        let key = (tag, vec![data]);
        if let Some(&idx) = self.dedup.get(&key) {
            return idx;
        }
        self.push(tag, data, key)
    }

    fn push(&mut self, tag: Tag, data: u32, key: (Tag, Vec<u32>)) -> Idx {
        let idx = Idx::from_raw(to_u32(self.items.len(), "types"));
        self.items.push(Item { tag, data });
        self.dedup.insert(key, idx);
        idx
    }

    fn intern_name(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.name_ids.get(name) {
            return id;
        }
        let id = to_u32(self.names.len(), "type names");
        self.names.push(name.to_owned());
        self.name_ids.insert(name.to_owned(), id);
        id
    }

    // === Function Accessors ===

    /// Check if a type is a function type.
    #[inline]
    pub fn is_function(&self, idx: Idx) -> bool {
        self.tag(idx) == Tag::Function
    }

    /// Get the extended flags of a function type.
    pub fn function_flags(&self, idx: Idx) -> FnFlags {
        debug_assert_eq!(self.tag(idx), Tag::Function);
        FnFlags::from_bits_truncate(self.extra[self.data(idx) as usize])
    }

    /// Get the number of parameters of a function type.
    pub fn function_param_count(&self, idx: Idx) -> usize {
        debug_assert_eq!(self.tag(idx), Tag::Function);
        self.extra[self.data(idx) as usize + 1] as usize
    }

    /// Get the type of parameter `i` of a function type.
    pub fn function_param(&self, idx: Idx, i: usize) -> Idx {
        let count = self.function_param_count(idx);
        assert!(i < count, "parameter {i} out of bounds for {count}-ary function");
        Idx::from_raw(self.extra[self.data(idx) as usize + 2 + i])
    }

    /// Get all parameter types of a function type.
    pub fn function_params(&self, idx: Idx) -> Vec<Idx> {
        let start = self.data(idx) as usize + 2;
        let count = self.function_param_count(idx);
        self.extra[start..start + count]
            .iter()
            .map(|&raw| Idx::from_raw(raw))
            .collect()
    }

    /// Get the return type of a function type.
    pub fn function_return(&self, idx: Idx) -> Idx {
        let start = self.data(idx) as usize + 2;
        let count = self.function_param_count(idx);
        Idx::from_raw(self.extra[start + count])
    }

    // === Tuple Accessors ===

    /// Get the element types of a tuple type.
    pub fn tuple_elems(&self, idx: Idx) -> Vec<Idx> {
        debug_assert_eq!(self.tag(idx), Tag::Tuple);
        let start = self.data(idx) as usize;
        let count = self.extra[start] as usize;
        self.extra[start + 1..=start + count]
            .iter()
            .map(|&raw| Idx::from_raw(raw))
            .collect()
    }

    // === Named Accessors ===

    /// Get the name of a nominal type.
    pub fn named_str(&self, idx: Idx) -> &str {
        debug_assert_eq!(self.tag(idx), Tag::Named);
        &self.names[self.data(idx) as usize]
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}
