#![allow(clippy::enum_variant_names)]
#![allow(clippy::module_inception)]

//! Walks, diffs and patches hierarchical trees of JSON leaves.
//!
//! [`deep_compare`](operations::deep_compare) computes a [`Patch`](patch::Patch)
//! describing how one tree differs from a baseline, and
//! [`patch_tree`](patch::patch_tree) replays it. Both work on any
//! [`Tree`](tree::Tree) backend, including two views of the same store.

pub mod ext;
pub mod operations;
pub mod patch;
pub mod tree;
pub mod visitor;
pub mod walk;
