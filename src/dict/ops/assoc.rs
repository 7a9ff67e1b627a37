//! Associate — COW path-copy insert, including the Bitmap → Array promotion
//! and the Leaf/Collision node-splitting rules.

use std::hash::Hash;
use std::sync::Arc;

use crate::bits::{bit_for, compact_index, digit, BITS_PER_LEVEL, BRANCHING_FACTOR, MAX_SHIFT};
use crate::dict::node::{Entry, Node};

/// Maximum population of a `Bitmap` node before it promotes to an `Array`.
const BITMAP_PROMOTE_AT: u32 = 16;

/// Outcome of inserting an entry: the replacement node, and whether the key
/// was new (`true`) or an existing binding was overwritten (`false`).
pub(crate) struct AssocOutcome<K, V> {
    pub node: Node<K, V>,
    pub inserted: bool,
}

/// Builds the initial one-entry trie for an empty [`crate::dict::Dictionary`].
pub(crate) fn initial<K, V>(entry: Entry<K, V>) -> Node<K, V> {
    let bit = bit_for(digit(entry.hash, 0));
    Node::Bitmap {
        bitmap: bit,
        children: Arc::from(vec![Node::Leaf(Arc::new(entry))]),
    }
}

/// Inserts `entry` into the subtree rooted at `node`, descending from bit
/// offset `shift`.
pub(crate) fn assoc<K, V>(node: &Node<K, V>, entry: Entry<K, V>, shift: u32) -> AssocOutcome<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    match node {
        Node::Leaf(existing) => assoc_into_leaf(existing, entry, shift),
        Node::Bitmap { bitmap, children } => assoc_into_bitmap(*bitmap, children, entry, shift),
        Node::Array { children, size } => assoc_into_array(children, *size, entry, shift),
        Node::Collision { hash, entries } => assoc_into_collision(*hash, entries, entry, shift),
    }
}

fn assoc_into_leaf<K, V>(existing: &Arc<Entry<K, V>>, entry: Entry<K, V>, shift: u32) -> AssocOutcome<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    if existing.key == entry.key {
        return AssocOutcome {
            node: Node::Leaf(Arc::new(entry)),
            inserted: false,
        };
    }

    let old = Entry {
        hash: existing.hash,
        key: existing.key.clone(),
        value: existing.value.clone(),
    };

    let node = if old.hash == entry.hash || shift > MAX_SHIFT {
        Node::Collision {
            hash: entry.hash,
            entries: Arc::from(vec![old, entry]),
        }
    } else {
        create_subtree(old, entry, shift)
    };

    AssocOutcome { node, inserted: true }
}

fn assoc_into_bitmap<K, V>(
    bitmap: u32,
    children: &Arc<[Node<K, V>]>,
    entry: Entry<K, V>,
    shift: u32,
) -> AssocOutcome<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let d = digit(entry.hash, shift);
    let bit = bit_for(d);

    if bitmap & bit != 0 {
        let pos = compact_index(bitmap, bit);
        let outcome = assoc(&children[pos], entry, shift + BITS_PER_LEVEL);
        let mut new_children: Vec<Node<K, V>> = children.iter().cloned().collect();
        new_children[pos] = outcome.node;
        return AssocOutcome {
            node: Node::Bitmap {
                bitmap,
                children: Arc::from(new_children),
            },
            inserted: outcome.inserted,
        };
    }

    let population = bitmap.count_ones();
    if population < BITMAP_PROMOTE_AT {
        let new_bitmap = bitmap | bit;
        let pos = compact_index(new_bitmap, bit);
        let mut new_children: Vec<Node<K, V>> = Vec::with_capacity(children.len() + 1);
        new_children.extend(children[..pos].iter().cloned());
        new_children.push(Node::Leaf(Arc::new(entry)));
        new_children.extend(children[pos..].iter().cloned());
        debug_assert_eq!(new_bitmap.count_ones() as usize, new_children.len());
        AssocOutcome {
            node: Node::Bitmap {
                bitmap: new_bitmap,
                children: Arc::from(new_children),
            },
            inserted: true,
        }
    } else {
        // Promote to a dense ArrayNode.
        let mut array: Vec<Option<Node<K, V>>> = vec![None; BRANCHING_FACTOR];
        let mut existing = children.iter();
        for slot in 0..BRANCHING_FACTOR {
            if bitmap & bit_for(slot) != 0 {
                array[slot] = existing.next().cloned();
            }
        }
        array[d] = Some(Node::Leaf(Arc::new(entry)));
        let size = Node::array_size_of(&array);
        debug_assert!(array[d].is_some());
        debug_assert_eq!(size, array.iter().filter(|c| c.is_some()).count());
        AssocOutcome {
            node: Node::Array {
                children: Arc::from(array),
                size,
            },
            inserted: true,
        }
    }
}

fn assoc_into_array<K, V>(
    children: &Arc<[Option<Node<K, V>>]>,
    size: usize,
    entry: Entry<K, V>,
    shift: u32,
) -> AssocOutcome<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let d = digit(entry.hash, shift);
    let mut new_children: Vec<Option<Node<K, V>>> = children.iter().cloned().collect();

    match &children[d] {
        None => {
            new_children[d] = Some(Node::Leaf(Arc::new(entry)));
            let new_size = size + 1;
            debug_assert_eq!(new_size, Node::array_size_of(&new_children));
            AssocOutcome {
                node: Node::Array {
                    children: Arc::from(new_children),
                    size: new_size,
                },
                inserted: true,
            }
        }
        Some(child) => {
            let outcome = assoc(child, entry, shift + BITS_PER_LEVEL);
            new_children[d] = Some(outcome.node);
            debug_assert_eq!(size, Node::array_size_of(&new_children));
            AssocOutcome {
                node: Node::Array {
                    children: Arc::from(new_children),
                    size,
                },
                inserted: outcome.inserted,
            }
        }
    }
}

fn assoc_into_collision<K, V>(
    node_hash: u64,
    entries: &Arc<[Entry<K, V>]>,
    entry: Entry<K, V>,
    shift: u32,
) -> AssocOutcome<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    if entry.hash == node_hash {
        if let Some(pos) = entries.iter().position(|e| e.key == entry.key) {
            let mut new_entries: Vec<Entry<K, V>> = entries.iter().cloned().collect();
            new_entries[pos] = entry;
            return AssocOutcome {
                node: Node::Collision {
                    hash: node_hash,
                    entries: Arc::from(new_entries),
                },
                inserted: false,
            };
        }
        let mut new_entries: Vec<Entry<K, V>> = entries.iter().cloned().collect();
        new_entries.push(entry);
        debug_assert!(new_entries.len() >= 2);
        return AssocOutcome {
            node: Node::Collision {
                hash: node_hash,
                entries: Arc::from(new_entries),
            },
            inserted: true,
        };
    }

    // Different hash at this depth: wrap the collision bucket in a Bitmap
    // node at the current shift, then associate normally.
    let wrapped = Node::Bitmap {
        bitmap: bit_for(digit(node_hash, shift)),
        children: Arc::from(vec![Node::Collision {
            hash: node_hash,
            entries: Arc::clone(entries),
        }]),
    };
    assoc(&wrapped, entry, shift)
}

/// Builds a fresh subtree holding two entries whose hashes differ, starting
/// at bit offset `shift`. Descends level by level until the entries'
/// digits diverge, or forces a `Collision` once hash bits are exhausted.
fn create_subtree<K, V>(e1: Entry<K, V>, e2: Entry<K, V>, shift: u32) -> Node<K, V> {
    if shift > MAX_SHIFT {
        return Node::Collision {
            hash: e1.hash,
            entries: Arc::from(vec![e1, e2]),
        };
    }

    let f1 = digit(e1.hash, shift);
    let f2 = digit(e2.hash, shift);

    if f1 == f2 {
        let child = create_subtree(e1, e2, shift + BITS_PER_LEVEL);
        Node::Bitmap {
            bitmap: bit_for(f1),
            children: Arc::from(vec![child]),
        }
    } else {
        let (first, second) = if f1 < f2 { (e1, e2) } else { (e2, e1) };
        Node::Bitmap {
            bitmap: bit_for(f1) | bit_for(f2),
            children: Arc::from(vec![Node::Leaf(Arc::new(first)), Node::Leaf(Arc::new(second))]),
        }
    }
}
