//! Remove-last — path-copies to the rightmost leaf and clears its last
//! slot.
//!
//! No digit or shift arithmetic is needed: since `append` only ever grows
//! the rightmost spine, only the rightmost spine can ever be short of full,
//! so the element to drop is always the last slot of the last child, all
//! the way down.

use std::sync::Arc;

use crate::vector::node::Node;

/// Returns a new tree with the final element removed. Caller guarantees
/// `node` holds at least one element.
pub(crate) fn remove_last<T: Clone>(node: &Node<T>) -> Node<T> {
    match node {
        Node::Leaf(elems) => {
            debug_assert!(!elems.is_empty());
            Node::Leaf(Arc::from(elems[..elems.len() - 1].to_vec()))
        }
        Node::Branch(children) => {
            debug_assert!(!children.is_empty());
            let last = children.len() - 1;
            let shrunk = remove_last(&children[last]);

            if shrunk.is_empty() {
                Node::Branch(Arc::from(children[..last].to_vec()))
            } else {
                let mut new_children: Vec<Node<T>> = children[..last].to_vec();
                new_children.push(shrunk);
                Node::Branch(Arc::from(new_children))
            }
        }
    }
}
