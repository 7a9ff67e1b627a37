//! Persistent dictionary: a 32-way HAMT, split into `node`, `ops`, `iter`,
//! and a public handle type.

pub(crate) mod iter;
pub(crate) mod node;
pub(crate) mod ops;

mod handle;

pub use handle::Dictionary;
pub use iter::Iter;
