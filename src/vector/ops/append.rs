//! Append — depth selection, root-doubling on saturation, and path-copy
//! growth of the rightmost spine.

use std::sync::Arc;

use crate::bits::{digit, BITS_PER_LEVEL};
use crate::vector::node::Node;

/// Appends `value` after the current last element.
///
/// Returns the new root and its depth. `length` and `depth` are the
/// pre-append values from the handle.
pub(crate) fn append<T: Clone>(root: &Node<T>, length: usize, depth: u32, value: T) -> (Node<T>, u32) {
    // B^depth, computed in u128 so this never overflows even at depths far
    // beyond what a usize-indexed collection could actually reach.
    let capacity: u128 = 1u128 << (u128::from(BITS_PER_LEVEL) * u128::from(depth));

    if length as u128 == capacity {
        let root_shift = BITS_PER_LEVEL * (depth - 1);
        let spine = build_spine(value, root_shift);
        let new_root = Node::Branch(Arc::from(vec![root.clone(), spine]));
        (new_root, depth + 1)
    } else {
        let shift = BITS_PER_LEVEL * (depth - 1);
        let new_root = append_path(root, length as u64, shift, value);
        (new_root, depth)
    }
}

/// Builds a brand-new subtree holding a single `value`, with `shift` levels
/// of `Branch` above the `Leaf` that holds it (`shift == 0` means the result
/// is itself the `Leaf`).
fn build_spine<T>(value: T, shift: u32) -> Node<T> {
    if shift == 0 {
        Node::Leaf(Arc::from(vec![value]))
    } else {
        Node::Branch(Arc::from(vec![build_spine(value, shift - BITS_PER_LEVEL)]))
    }
}

/// Extends the rightmost spine to place `value` at `index` (the new last
/// index). Every node up to and including the one gaining a new slot is
/// copied; nodes below a freshly created slot are built fresh via
/// [`build_spine`].
fn append_path<T: Clone>(node: &Node<T>, index: u64, shift: u32, value: T) -> Node<T> {
    match node {
        Node::Leaf(elems) => {
            debug_assert_eq!(shift, 0);
            let mut new_elems: Vec<T> = elems.iter().cloned().collect();
            new_elems.push(value);
            Node::Leaf(Arc::from(new_elems))
        }
        Node::Branch(children) => {
            debug_assert!(shift > 0);
            let d = digit(index, shift);
            let mut new_children: Vec<Node<T>> = children.iter().cloned().collect();
            if d < new_children.len() {
                new_children[d] = append_path(&children[d], index, shift - BITS_PER_LEVEL, value);
            } else {
                debug_assert_eq!(d, new_children.len());
                new_children.push(build_spine(value, shift - BITS_PER_LEVEL));
            }
            Node::Branch(Arc::from(new_children))
        }
    }
}
