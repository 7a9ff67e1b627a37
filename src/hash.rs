//! Key hashing and the order-independent fingerprint used for a cheap
//! inequality pre-check ahead of full structural equality.
//!
//! An order-independent fingerprint `φ(S) = Σ f(k, v)` over all entries,
//! using wrapping arithmetic so the sum is commutative — insertion order
//! never affects the final fingerprint. Two mixing seeds keep the
//! contribution non-degenerate when a hash happens to be zero.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const SEED_1: u64 = 0x9E37_79B9_7F4A_7C15;
const SEED_2: u64 = 0x517C_C1B7_2722_0A95;

/// Computes the 64-bit hash of a value using the standard library's hasher.
#[must_use]
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Computes the fingerprint contribution of a single `(key_hash, value_hash)`
/// pair: `f(k, v) = key_hash · SEED₁ ⊕ value_hash · SEED₂`.
#[must_use]
pub const fn entry_fingerprint(key_hash: u64, value_hash: u64) -> u64 {
    key_hash.wrapping_mul(SEED_1) ^ value_hash.wrapping_mul(SEED_2)
}
