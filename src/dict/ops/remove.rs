//! Remove — COW path-copy delete, including the optional `Array` → `Bitmap`
//! demotion and `Collision` → `Leaf` single-entry promotion.

use std::sync::Arc;

use crate::bits::{bit_for, compact_index, digit, BITS_PER_LEVEL};
use crate::dict::node::{Entry, Node};

/// An `ArrayNode` with `size` at or below this threshold demotes back to a
/// `Bitmap` node on removal. No single value is mandated; chosen here as
/// documented in `DESIGN.md` O3.
const ARRAY_DEMOTE_AT: usize = 8;

/// Outcome of a recursive remove.
pub(crate) enum RemoveOutcome<K, V> {
    /// The key was not present anywhere in this subtree.
    NotFound,
    /// The key was removed. `None` means the subtree is now empty.
    Removed(Option<Node<K, V>>),
}

pub(crate) fn remove<K, V>(node: &Node<K, V>, hash: u64, key: &K, shift: u32) -> RemoveOutcome<K, V>
where
    K: Eq + Clone,
    V: Clone,
{
    match node {
        Node::Leaf(entry) => {
            if entry.hash == hash && entry.key == *key {
                RemoveOutcome::Removed(None)
            } else {
                RemoveOutcome::NotFound
            }
        }
        Node::Bitmap { bitmap, children } => remove_from_bitmap(*bitmap, children, hash, key, shift),
        Node::Array { children, size } => remove_from_array(children, *size, hash, key, shift),
        Node::Collision { hash: node_hash, entries } => remove_from_collision(*node_hash, entries, hash, key),
    }
}

fn remove_from_bitmap<K, V>(
    bitmap: u32,
    children: &Arc<[Node<K, V>]>,
    hash: u64,
    key: &K,
    shift: u32,
) -> RemoveOutcome<K, V>
where
    K: Eq + Clone,
    V: Clone,
{
    let d = digit(hash, shift);
    let bit = bit_for(d);
    if bitmap & bit == 0 {
        return RemoveOutcome::NotFound;
    }

    let pos = compact_index(bitmap, bit);
    match remove(&children[pos], hash, key, shift + BITS_PER_LEVEL) {
        RemoveOutcome::NotFound => RemoveOutcome::NotFound,
        RemoveOutcome::Removed(Some(new_child)) => {
            let mut new_children: Vec<Node<K, V>> = children.iter().cloned().collect();
            new_children[pos] = new_child;
            RemoveOutcome::Removed(Some(Node::Bitmap {
                bitmap,
                children: Arc::from(new_children),
            }))
        }
        RemoveOutcome::Removed(None) => {
            let new_bitmap = bitmap & !bit;
            if new_bitmap == 0 {
                return RemoveOutcome::Removed(None);
            }
            let mut new_children: Vec<Node<K, V>> = Vec::with_capacity(children.len() - 1);
            new_children.extend(children[..pos].iter().cloned());
            new_children.extend(children[pos + 1..].iter().cloned());
            RemoveOutcome::Removed(Some(Node::Bitmap {
                bitmap: new_bitmap,
                children: Arc::from(new_children),
            }))
        }
    }
}

fn remove_from_array<K, V>(
    children: &Arc<[Option<Node<K, V>>]>,
    size: usize,
    hash: u64,
    key: &K,
    shift: u32,
) -> RemoveOutcome<K, V>
where
    K: Eq + Clone,
    V: Clone,
{
    let d = digit(hash, shift);
    let Some(child) = &children[d] else {
        return RemoveOutcome::NotFound;
    };

    match remove(child, hash, key, shift + BITS_PER_LEVEL) {
        RemoveOutcome::NotFound => RemoveOutcome::NotFound,
        RemoveOutcome::Removed(Some(new_child)) => {
            let mut new_children: Vec<Option<Node<K, V>>> = children.iter().cloned().collect();
            new_children[d] = Some(new_child);
            RemoveOutcome::Removed(Some(Node::Array {
                children: Arc::from(new_children),
                size,
            }))
        }
        RemoveOutcome::Removed(None) => {
            let new_size = size - 1;
            if new_size == 0 {
                return RemoveOutcome::Removed(None);
            }
            let mut new_children: Vec<Option<Node<K, V>>> = children.iter().cloned().collect();
            new_children[d] = None;

            if new_size <= ARRAY_DEMOTE_AT {
                let mut bitmap: u32 = 0;
                let mut compact: Vec<Node<K, V>> = Vec::with_capacity(new_size);
                for (slot, child) in new_children.iter().enumerate() {
                    if let Some(c) = child {
                        bitmap |= bit_for(slot);
                        compact.push(c.clone());
                    }
                }
                debug_assert_eq!(bitmap.count_ones() as usize, compact.len());
                return RemoveOutcome::Removed(Some(Node::Bitmap {
                    bitmap,
                    children: Arc::from(compact),
                }));
            }

            debug_assert_eq!(new_size, Node::array_size_of(&new_children));
            RemoveOutcome::Removed(Some(Node::Array {
                children: Arc::from(new_children),
                size: new_size,
            }))
        }
    }
}

fn remove_from_collision<K, V>(
    node_hash: u64,
    entries: &Arc<[Entry<K, V>]>,
    hash: u64,
    key: &K,
) -> RemoveOutcome<K, V>
where
    K: Eq + Clone,
    V: Clone,
{
    if hash != node_hash {
        return RemoveOutcome::NotFound;
    }

    let Some(pos) = entries.iter().position(|e| e.key == *key) else {
        return RemoveOutcome::NotFound;
    };

    if entries.len() == 2 {
        let remaining = &entries[1 - pos];
        return RemoveOutcome::Removed(Some(Node::Leaf(Arc::new(Entry {
            hash: remaining.hash,
            key: remaining.key.clone(),
            value: remaining.value.clone(),
        }))));
    }

    let mut new_entries: Vec<Entry<K, V>> = Vec::with_capacity(entries.len() - 1);
    for (i, e) in entries.iter().enumerate() {
        if i != pos {
            new_entries.push(e.clone());
        }
    }
    debug_assert!(new_entries.len() >= 2);
    RemoveOutcome::Removed(Some(Node::Collision {
        hash: node_hash,
        entries: Arc::from(new_entries),
    }))
}
