mod dict_basic;
mod dict_persistence;
mod traits;
mod vector_scale;
