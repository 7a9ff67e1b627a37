//! [`Dictionary`] — the public persistent HAMT handle.

use std::fmt;
use std::hash::Hash;

use crate::dict::iter::Iter;
use crate::dict::node::{Entry, Node};
use crate::dict::ops::assoc::{self, AssocOutcome};
use crate::dict::ops::get::get;
use crate::dict::ops::remove::{remove, RemoveOutcome};
use crate::hash::{entry_fingerprint, hash_one};

/// A persistent, immutable associative map backed by a 32-way HAMT.
///
/// Every mutating operation (`assoc`, `remove`, `merge`) returns a new
/// `Dictionary`; the receiver is left untouched and remains fully usable,
/// via shared ownership of unchanged subtrees through cheap `Arc` clones.
pub struct Dictionary<K, V> {
    root: Option<Node<K, V>>,
    size: usize,
    fingerprint: u64,
}

impl<K, V> Dictionary<K, V> {
    /// Creates an empty dictionary.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            root: None,
            size: 0,
            fingerprint: 0,
        }
    }

    /// Number of key-value bindings.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the dictionary holds no bindings.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if `self` and `other` are backed by the exact same
    /// root allocation — the identity fast path a no-op `remove` promises.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (None, None) => true,
            (Some(a), Some(b)) => Node::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Order-independent fingerprint over all `(key, value)` pairs.
    ///
    /// Two dictionaries with different fingerprints are certainly unequal;
    /// equal fingerprints are only a cheap pre-check, not a proof (this
    /// trie does not guarantee the canonical-form property that would make
    /// fingerprint equality sufficient on its own — see `DESIGN.md` O1).
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::empty()
    }
}

// ---------------------------------------------------------------------------
// Reads — K: Hash + Eq only; writes below need Clone too, to path-copy.
// ---------------------------------------------------------------------------

impl<K: Hash + Eq, V> Dictionary<K, V> {
    /// Returns a reference to the value bound to `key`, or `None`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        let root = self.root.as_ref()?;
        get(root, hash_one(key), key, 0)
    }

    /// Returns `true` if `key` is bound.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K, V> Dictionary<K, V> {
    /// Iterator over `(&K, &V)` pairs in this instance's traversal order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_ref())
    }

    /// Iterator over keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Iterator over values.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Invokes `f(k, v)` once per binding, in traversal order.
    pub fn for_each<F: FnMut(&K, &V)>(&self, mut f: F) {
        for (k, v) in self.iter() {
            f(k, v);
        }
    }
}

// ---------------------------------------------------------------------------
// Writes — K: Hash + Eq + Clone, V: Hash + Clone (fingerprint upkeep needs
// V: Hash so the fingerprint can be kept current on inserts/removes.
// ---------------------------------------------------------------------------

impl<K: Hash + Eq + Clone, V: Hash + Clone> Dictionary<K, V> {
    /// Builds a dictionary from an iterator of `(key, value)` pairs via
    /// repeated [`assoc`](Self::assoc); later pairs win on key collision.
    #[must_use]
    pub fn from_pairs_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut dict = Self::empty();
        for (k, v) in pairs {
            dict = dict.assoc(k, v);
        }
        dict
    }

    /// Builds a dictionary from parallel `keys`/`values` slices, stopping
    /// once either iterator is exhausted.
    #[must_use]
    pub fn from_pairs<IK, IV>(keys: IK, values: IV) -> Self
    where
        IK: IntoIterator<Item = K>,
        IV: IntoIterator<Item = V>,
    {
        Self::from_pairs_iter(keys.into_iter().zip(values))
    }

    /// Returns a new dictionary containing `key` bound to `value`.
    ///
    /// Size is unchanged if `key` already existed (its value is replaced);
    /// otherwise size increases by one.
    #[must_use]
    pub fn assoc(&self, key: K, value: V) -> Self {
        let hash = hash_one(&key);
        let new_contribution = entry_fingerprint(hash, hash_one(&value));

        let Some(root) = &self.root else {
            let entry = Entry { hash, key, value };
            return Self {
                root: Some(assoc::initial(entry)),
                size: 1,
                fingerprint: new_contribution,
            };
        };

        // Read the pre-image value (if any) so the fingerprint can be kept
        // order-independent: overwriting a key must first undo its old
        // contribution before adding the new one.
        let old_contribution =
            get(root, hash, &key, 0).map(|old_value| entry_fingerprint(hash, hash_one(old_value)));

        let entry = Entry { hash, key, value };
        let AssocOutcome { node, inserted } = assoc::assoc(root, entry, 0);

        let fingerprint = match old_contribution {
            Some(old) => self.fingerprint.wrapping_sub(old).wrapping_add(new_contribution),
            None => self.fingerprint.wrapping_add(new_contribution),
        };

        Self {
            root: Some(node),
            size: if inserted { self.size + 1 } else { self.size },
            fingerprint,
        }
    }

    /// Returns a new dictionary without `key`. If `key` is absent, returns
    /// a handle equal to `self` (identity-preserving fast path, usable with
    /// [`is_identical`](Self::is_identical) to detect "no change").
    #[must_use]
    pub fn remove(&self, key: &K) -> Self {
        let Some(root) = &self.root else {
            return self.clone();
        };
        let hash = hash_one(key);
        match remove(root, hash, key, 0) {
            RemoveOutcome::NotFound => self.clone(),
            RemoveOutcome::Removed(None) => Self::empty(),
            RemoveOutcome::Removed(Some(new_root)) => {
                let removed_value_hash = get(root, hash, key, 0).map(hash_one);
                let delta = removed_value_hash.map_or(0, |vh| entry_fingerprint(hash, vh));
                Self {
                    root: Some(new_root),
                    size: self.size - 1,
                    fingerprint: self.fingerprint.wrapping_sub(delta),
                }
            }
        }
    }

    /// Folds `other`'s bindings into `self` via [`assoc`](Self::assoc);
    /// `other`'s values win on key collision (`DESIGN.md` O4).
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut result = self.clone();
        for (k, v) in other.iter() {
            result = result.assoc(k.clone(), v.clone());
        }
        result
    }
}

impl<K, V> Clone for Dictionary<K, V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            size: self.size,
            fingerprint: self.fingerprint,
        }
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for Dictionary<K, V> {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        if self.fingerprint != other.fingerprint {
            return false;
        }
        self.iter().all(|(k, v)| other.get(k).is_some_and(|ov| ov == v))
    }
}

impl<K, V> fmt::Debug for Dictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("size", &self.size)
            .field("fingerprint", &format_args!("{:#018x}", self.fingerprint))
            .finish_non_exhaustive()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Dictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "()");
        }
        write!(f, "{{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        write!(f, "}}")
    }
}

impl<K: Hash + Eq + Clone, V: Hash + Clone> Extend<(K, V)> for Dictionary<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let mut result = std::mem::replace(self, Self::empty());
        for (k, v) in iter {
            result = result.assoc(k, v);
        }
        *self = result;
    }
}

impl<K: Hash + Eq + Clone, V: Hash + Clone> FromIterator<(K, V)> for Dictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs_iter(iter)
    }
}

impl<'a, K, V> IntoIterator for &'a Dictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}
