//! Hierarchical stores the diff engine can walk.
//!
//! A tree is addressed by path-like references rooted at [`Tree::root`].
//! Interior nodes hold named children, leaves hold a JSON scalar. Two
//! backends are provided: [`FileSystemTree`], where directories are interior
//! nodes and files hold a JSON document, and [`MemoryTree`], a view over a
//! nested `serde_json` object shared with the caller.

mod filesystem_tree;
mod memory_tree;
mod tree;
pub(crate) mod tree_error;

pub use filesystem_tree::FileSystemTree;
pub use memory_tree::{MemoryTree, SharedDocument};
pub use tree::{NodeData, Tree};
pub use tree_error::TreeError;
