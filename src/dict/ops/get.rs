//! Lookup — routes a hash/key pair down through the four node variants.

use crate::bits::{bit_for, compact_index, digit, BITS_PER_LEVEL};
use crate::dict::node::Node;

/// Searches `node` for `key`, descending from bit offset `shift`.
pub(crate) fn get<'a, K, V>(node: &'a Node<K, V>, hash: u64, key: &K, shift: u32) -> Option<&'a V>
where
    K: Eq,
{
    match node {
        Node::Leaf(entry) => {
            if entry.hash == hash && entry.key == *key {
                Some(&entry.value)
            } else {
                None
            }
        }
        Node::Bitmap { bitmap, children } => {
            let d = digit(hash, shift);
            let bit = bit_for(d);
            if bitmap & bit == 0 {
                return None;
            }
            let pos = compact_index(*bitmap, bit);
            get(&children[pos], hash, key, shift + BITS_PER_LEVEL)
        }
        Node::Array { children, .. } => {
            let d = digit(hash, shift);
            match &children[d] {
                Some(child) => get(child, hash, key, shift + BITS_PER_LEVEL),
                None => None,
            }
        }
        Node::Collision { hash: node_hash, entries } => {
            if hash != *node_hash {
                return None;
            }
            entries
                .iter()
                .find(|e| e.key == *key)
                .map(|e| &e.value)
        }
    }
}
