//! Persistent immutable collections: an indexed sequence ([`Vector`]) and an
//! associative map ([`Dictionary`]), both backed by 32-way bit-partitioned
//! tries.
//!
//! Every update returns a new handle while structurally sharing unchanged
//! subtrees with its predecessors (path copying); published handles and
//! every node reachable from them are never mutated in place.
//!
//! # Key properties
//!
//! - **Persistence**: old handles remain valid and unchanged after a write
//! - **Structural sharing**: only the path to an edit is copied
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! # References
//!
//! - Bagwell, 2001 — "Ideal Hash Trees"
//! - Clojure's `PersistentVector` and `PersistentHashMap`, for the
//!   bit-partitioned trie and HAMT designs this crate implements

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod bits;
mod dict;
mod error;
mod hash;
mod vector;

#[cfg(test)]
mod tests;

pub use dict::Dictionary;
pub use error::{Error, Result};
pub use vector::Vector;
