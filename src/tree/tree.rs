use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::ext::{normalize_path, relative_path};
use crate::tree::TreeError;

/// What a tree knows about a single node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Leaf(Value),
    Interior,
}

impl NodeData {
    pub fn is_leaf(&self) -> bool {
        matches!(self, NodeData::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&Value> {
        match self {
            NodeData::Leaf(value) => Some(value),
            NodeData::Interior => None,
        }
    }
}

/// Capability set shared by every backend.
///
/// All methods take `&self`: a tree is driven by a single thread, and
/// backends that keep state in memory use interior mutability so that a
/// walk over one view can write into another view of the same store.
///
/// References handed to a tree must have been produced by it, or remapped
/// into it through [`Tree::to_relative`] on the source tree followed by
/// [`Tree::to_absolute`] on this one.
pub trait Tree {
    fn root(&self) -> &Path;

    fn exists(&self, reference: &Path) -> bool;

    /// Fails with [`TreeError::NotFoundError`] when nothing lives at `reference`.
    fn node_data(&self, reference: &Path) -> Result<NodeData, TreeError>;

    fn is_leaf(&self, data: &NodeData) -> bool {
        data.is_leaf()
    }

    fn children(&self, reference: &Path, data: &NodeData) -> Result<Vec<PathBuf>, TreeError>;

    fn read(&self, reference: &Path) -> Result<Value, TreeError>;

    /// Stores a leaf, creating any missing ancestors first.
    ///
    /// Objects are interior nodes, never leaf values: writing one, or
    /// writing over an existing interior node, fails with
    /// [`TreeError::StructuralMismatchError`].
    fn write(&self, reference: &Path, value: &Value) -> Result<(), TreeError>;

    /// Creates an interior node and its ancestors. Creating an existing node is a no-op.
    fn make_node(&self, reference: &Path) -> Result<(), TreeError>;

    /// Recursively removes whatever lives at `reference`. Missing nodes are ignored.
    fn delete_node(&self, reference: &Path) -> Result<(), TreeError>;

    fn delete_leaf(&self, reference: &Path) -> Result<(), TreeError>;

    fn to_relative(&self, reference: &Path) -> PathBuf {
        relative_path(reference, self.root())
    }

    fn to_absolute(&self, relative: &Path) -> PathBuf {
        normalize_path(&self.root().join(relative))
    }
}
