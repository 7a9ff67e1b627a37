//! Vector trie node type: two closed variants — a `Leaf` holding up to
//! `BRANCHING_FACTOR` elements, or a `Branch` holding up to
//! `BRANCHING_FACTOR` children.
//!
//! Unlike [`crate::dict::node::Node`], children arrays here are always
//! exactly sized to the number of elements actually present: only the
//! rightmost spine of the trie is ever partially filled (`append` always
//! extends a node's last slot or pushes a new one; `removeLast` always
//! shrinks the last slot or drops it), so there is never a gap to mark with
//! a bitmap or an `Option`.

use std::sync::Arc;

/// Vector trie node: a dense leaf of elements, or a dense branch of
/// subtrees.
pub(crate) enum Node<T> {
    /// Up to `BRANCHING_FACTOR` elements, in index order.
    Leaf(Arc<[T]>),
    /// Up to `BRANCHING_FACTOR` child subtrees, in index order.
    Branch(Arc<[Node<T>]>),
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf(elems) => Self::Leaf(Arc::clone(elems)),
            Self::Branch(children) => Self::Branch(Arc::clone(children)),
        }
    }
}

impl<T> Node<T> {
    /// An empty leaf: the sole root of an empty [`crate::vector::Vector`].
    pub(crate) fn empty_leaf() -> Self {
        Self::Leaf(Arc::from(Vec::new()))
    }

    /// `true` if this node currently holds zero elements/children.
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            Self::Leaf(elems) => elems.is_empty(),
            Self::Branch(children) => children.is_empty(),
        }
    }
}
