//! The six-bucket delta produced by
//! [`deep_compare`](crate::operations::deep_compare) and replayed by
//! [`patch_tree`].

mod apply;
mod observer;
mod patch;

pub use apply::{patch_tree, patch_tree_with};
pub use observer::PatchObserver;
pub use patch::{ChangeKind, Patch, PatchEntry, Scope};
