//! Update — COW path-copy replacing a single element.

use std::sync::Arc;

use crate::bits::{digit, BITS_PER_LEVEL};
use crate::vector::node::Node;

/// Returns a new tree identical to `node` except that `index` holds `value`.
/// Caller guarantees `index < length`.
pub(crate) fn update<T: Clone>(node: &Node<T>, index: u64, shift: u32, value: T) -> Node<T> {
    match node {
        Node::Leaf(elems) => {
            debug_assert_eq!(shift, 0);
            let mut new_elems: Vec<T> = elems.iter().cloned().collect();
            new_elems[digit(index, 0)] = value;
            Node::Leaf(Arc::from(new_elems))
        }
        Node::Branch(children) => {
            debug_assert!(shift > 0);
            let d = digit(index, shift);
            let mut new_children: Vec<Node<T>> = children.iter().cloned().collect();
            new_children[d] = update(&children[d], index, shift - BITS_PER_LEVEL, value);
            Node::Branch(Arc::from(new_children))
        }
    }
}
