//! Indexed read: descend `depth` levels, picking a child at each level by
//! the digits of the index.

use crate::bits::{digit, BITS_PER_LEVEL};
use crate::vector::node::Node;

/// Returns the element at `index`, descending from bit offset `shift`.
///
/// `shift == 0` means `node` is a `Leaf`; any positive `shift` means `node`
/// is a `Branch`. Caller guarantees `index < length`.
pub(crate) fn get<T>(node: &Node<T>, index: u64, shift: u32) -> &T {
    match node {
        Node::Leaf(elems) => {
            debug_assert_eq!(shift, 0);
            &elems[digit(index, 0)]
        }
        Node::Branch(children) => {
            debug_assert!(shift > 0);
            get(&children[digit(index, shift)], index, shift - BITS_PER_LEVEL)
        }
    }
}
