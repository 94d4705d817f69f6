use std::cell::RefCell;
use std::path::{Component, Path, PathBuf};
use std::rc::Rc;

use serde_json::{Map, Value};
use snafu::OptionExt;

use crate::tree::tree_error::{NotFoundSnafu, StructuralMismatchSnafu};
use crate::tree::{NodeData, Tree, TreeError};

/// A nested JSON object owned jointly by the caller and every view onto it.
pub type SharedDocument = Rc<RefCell<Value>>;

/// Tree backed by a nested `serde_json` object.
///
/// Every component of a reference is a key, so a view rooted at `/root`
/// expects the document to look like `{"root": {...}}`. Objects are interior
/// nodes; any other value is a leaf. Children are listed in insertion order.
#[derive(Debug, Clone)]
pub struct MemoryTree {
    root: PathBuf,
    document: SharedDocument,
}

impl MemoryTree {
    pub fn new(root: impl Into<PathBuf>, document: Value) -> Self {
        Self::with_document(root, Rc::new(RefCell::new(document)))
    }

    pub fn with_document(root: impl Into<PathBuf>, document: SharedDocument) -> Self {
        Self {
            root: root.into(),
            document,
        }
    }

    /// Another tree over the same document, rooted elsewhere.
    pub fn view(&self, root: impl Into<PathBuf>) -> Self {
        Self::with_document(root, Rc::clone(&self.document))
    }

    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    pub fn snapshot(&self) -> Value {
        self.document.borrow().clone()
    }

    fn keys(reference: &Path) -> Vec<String> {
        reference
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect()
    }

    fn lookup<'v>(document: &'v Value, keys: &[String]) -> Option<&'v Value> {
        keys.iter()
            .try_fold(document, |node, key| node.as_object()?.get(key))
    }

    /// Descends along `keys`, creating empty objects for missing entries.
    fn ensure_node<'v>(
        document: &'v mut Value,
        keys: &[String],
        reference: &Path,
    ) -> Result<&'v mut Map<String, Value>, TreeError> {
        let mut current = document;
        for key in keys {
            let Value::Object(map) = current else {
                return StructuralMismatchSnafu { reference }.fail();
            };
            current = map
                .entry(key.clone())
                .or_insert_with(|| Value::Object(Map::new()));
        }
        match current {
            Value::Object(map) => Ok(map),
            _ => StructuralMismatchSnafu { reference }.fail(),
        }
    }

    fn split_leaf(reference: &Path) -> Result<(Vec<String>, String), TreeError> {
        let mut keys = Self::keys(reference);
        let name = keys
            .pop()
            .context(StructuralMismatchSnafu { reference })?;
        Ok((keys, name))
    }
}

impl Tree for MemoryTree {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, reference: &Path) -> bool {
        let document = self.document.borrow();
        Self::lookup(&document, &Self::keys(reference)).is_some()
    }

    fn node_data(&self, reference: &Path) -> Result<NodeData, TreeError> {
        let document = self.document.borrow();
        let node = Self::lookup(&document, &Self::keys(reference))
            .context(NotFoundSnafu { reference })?;
        Ok(match node {
            Value::Object(_) => NodeData::Interior,
            leaf => NodeData::Leaf(leaf.clone()),
        })
    }

    fn children(&self, reference: &Path, _data: &NodeData) -> Result<Vec<PathBuf>, TreeError> {
        let document = self.document.borrow();
        let node = Self::lookup(&document, &Self::keys(reference))
            .context(NotFoundSnafu { reference })?;
        let map = node
            .as_object()
            .context(StructuralMismatchSnafu { reference })?;
        Ok(map.keys().map(|name| reference.join(name)).collect())
    }

    fn read(&self, reference: &Path) -> Result<Value, TreeError> {
        match self.node_data(reference)? {
            NodeData::Leaf(value) => Ok(value),
            NodeData::Interior => StructuralMismatchSnafu { reference }.fail(),
        }
    }

    fn write(&self, reference: &Path, value: &Value) -> Result<(), TreeError> {
        if value.is_object() {
            return StructuralMismatchSnafu { reference }.fail();
        }
        let (parent_keys, name) = Self::split_leaf(reference)?;

        let mut document = self.document.borrow_mut();
        let parent = Self::ensure_node(&mut document, &parent_keys, reference)?;
        if matches!(parent.get(&name), Some(Value::Object(_))) {
            return StructuralMismatchSnafu { reference }.fail();
        }
        parent.insert(name, value.clone());
        Ok(())
    }

    fn make_node(&self, reference: &Path) -> Result<(), TreeError> {
        let mut document = self.document.borrow_mut();
        Self::ensure_node(&mut document, &Self::keys(reference), reference)?;
        Ok(())
    }

    fn delete_node(&self, reference: &Path) -> Result<(), TreeError> {
        let (parent_keys, name) = Self::split_leaf(reference)?;

        let mut document = self.document.borrow_mut();
        let parent = parent_keys
            .iter()
            .try_fold(&mut *document, |node, key| node.as_object_mut()?.get_mut(key))
            .and_then(Value::as_object_mut);
        if let Some(parent) = parent {
            parent.shift_remove(&name);
        }
        Ok(())
    }

    fn delete_leaf(&self, reference: &Path) -> Result<(), TreeError> {
        if !self.node_data(reference)?.is_leaf() {
            return StructuralMismatchSnafu { reference }.fail();
        }
        self.delete_node(reference)
    }
}
