//! Recursive trie operations, one module per verb — mirrors the shape of
//! [`crate::dict::ops`].

pub(crate) mod append;
pub(crate) mod get;
pub(crate) mod remove_last;
pub(crate) mod update;
