//! Whole-tree operations assembled from the visitor family.

mod compare;
mod count;
mod reflect;

pub use compare::{DiffOptions, deep_compare};
pub use count::count_nodes;
pub use reflect::reflect_tree;
