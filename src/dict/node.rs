//! HAMT node types and the [`Entry`] they carry.
//!
//! Four closed variants: a single-entry
//! [`Node::Leaf`], a sparse [`Node::Bitmap`] (population ≤ 16), a dense
//! [`Node::Array`] (used once population would exceed 16), and a
//! [`Node::Collision`] bucket for keys that share a full hash.

use std::sync::Arc;

use crate::bits::BRANCHING_FACTOR;

/// A single key-value binding with its precomputed hash.
pub(crate) struct Entry<K, V> {
    pub hash: u64,
    pub key: K,
    pub value: V,
}

impl<K: Clone, V: Clone> Clone for Entry<K, V> {
    fn clone(&self) -> Self {
        Self {
            hash: self.hash,
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}

/// HAMT trie node.
///
/// `Bitmap` and `Array` children are themselves `Node`s — a child slot may
/// be a `Leaf` (a single binding) or a deeper `Bitmap`/`Array`/`Collision`
/// subtree.
pub(crate) enum Node<K, V> {
    /// A single key-value binding.
    Leaf(Arc<Entry<K, V>>),
    /// Sparse node: `bitmap` marks which of the 32 digit slots are
    /// populated; `children[popcount(bitmap & (bit - 1))]` is that slot's
    /// child. Invariant: `popcount(bitmap) == children.len() <= 16`.
    Bitmap {
        bitmap: u32,
        children: Arc<[Node<K, V>]>,
    },
    /// Dense node: all 32 digit slots are present, `None` where empty.
    /// `size` is the number of non-`None` slots (kept for O(1) `len`-style
    /// bookkeeping during demotion decisions).
    Array {
        children: Arc<[Option<Node<K, V>>]>,
        size: usize,
    },
    /// Bucket for two or more distinct keys that hash identically (or
    /// whose hash digits are exhausted before they could be distinguished).
    /// Invariant: `entries.len() >= 2`, all sharing `hash`.
    Collision { hash: u64, entries: Arc<[Entry<K, V>]> },
}

impl<K, V> Clone for Node<K, V> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf(e) => Self::Leaf(Arc::clone(e)),
            Self::Bitmap { bitmap, children } => Self::Bitmap {
                bitmap: *bitmap,
                children: Arc::clone(children),
            },
            Self::Array { children, size } => Self::Array {
                children: Arc::clone(children),
                size: *size,
            },
            Self::Collision { hash, entries } => Self::Collision {
                hash: *hash,
                entries: Arc::clone(entries),
            },
        }
    }
}

impl<K, V> Node<K, V> {
    /// Number of live bindings directly reachable as a single unit of
    /// bookkeeping at this node (used only by array-node size tracking).
    pub(crate) fn array_size_of(children: &[Option<Node<K, V>>]) -> usize {
        children.iter().filter(|c| c.is_some()).count()
    }

    /// `true` if `a` and `b` are backed by the exact same allocation.
    ///
    /// Backs the identity-preserving fast path of a no-op `remove`:
    /// different variants are never equal, since a no-op leaves the node
    /// untouched.
    pub(crate) fn ptr_eq(a: &Self, b: &Self) -> bool {
        match (a, b) {
            (Self::Leaf(x), Self::Leaf(y)) => Arc::ptr_eq(x, y),
            (Self::Bitmap { children: x, .. }, Self::Bitmap { children: y, .. }) => {
                Arc::ptr_eq(x, y)
            }
            (Self::Array { children: x, .. }, Self::Array { children: y, .. }) => {
                Arc::ptr_eq(x, y)
            }
            (Self::Collision { entries: x, .. }, Self::Collision { entries: y, .. }) => {
                Arc::ptr_eq(x, y)
            }
            _ => false,
        }
    }
}

/// Compile-time sanity check that `BRANCHING_FACTOR` matches the fixed
/// width assumed by `Node::Array`.
const _: () = assert!(BRANCHING_FACTOR == 32);
