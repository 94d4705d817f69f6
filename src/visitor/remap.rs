use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::tree::{Tree, TreeError};
use crate::visitor::Visitor;

/// Translates a reference produced by `source` into the structurally
/// equivalent reference inside `target`.
pub fn remap_reference(source: &dyn Tree, target: &dyn Tree, reference: &Path) -> PathBuf {
    target.to_absolute(&source.to_relative(reference))
}

/// Rewrites every reference from `source` into `target` before forwarding it.
pub struct Remap<'a, V> {
    source: &'a dyn Tree,
    target: &'a dyn Tree,
    inner: V,
}

impl<'a, V> Remap<'a, V> {
    pub fn new(source: &'a dyn Tree, target: &'a dyn Tree, inner: V) -> Self {
        Self {
            source,
            target,
            inner,
        }
    }

    pub fn reference(&self, reference: &Path) -> PathBuf {
        remap_reference(self.source, self.target, reference)
    }

    pub fn source(&self) -> &'a dyn Tree {
        self.source
    }

    pub fn target(&self) -> &'a dyn Tree {
        self.target
    }

    pub fn inner_mut(&mut self) -> &mut V {
        &mut self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Visitor for Remap<'_, V>
where
    V: Visitor,
{
    fn node(&mut self, reference: &Path) -> Result<(), TreeError> {
        let remapped = self.reference(reference);
        self.inner.node(&remapped)
    }

    fn leaf(&mut self, reference: &Path, value: &Value) -> Result<(), TreeError> {
        let remapped = self.reference(reference);
        self.inner.leaf(&remapped, value)
    }

    fn node_filter(&mut self, reference: &Path) -> bool {
        let remapped = self.reference(reference);
        self.inner.node_filter(&remapped)
    }

    fn leaf_filter(&mut self, reference: &Path) -> bool {
        let remapped = self.reference(reference);
        self.inner.leaf_filter(&remapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::tree::MemoryTree;
    use crate::visitor::{Bucket, Recorder};

    #[test]
    fn remap_reference_moves_between_roots() {
        let source = MemoryTree::new("/root", json!({"root": {}}));
        let target = MemoryTree::new("/backup/root", json!({"backup": {"root": {}}}));

        assert_eq!(
            remap_reference(&source, &target, Path::new("/root/A/f")),
            PathBuf::from("/backup/root/A/f")
        );
        assert_eq!(
            remap_reference(&target, &source, Path::new("/backup/root")),
            PathBuf::from("/root")
        );
    }

    #[test]
    fn remap_reference_into_a_nested_view_of_the_same_document() {
        let tree = MemoryTree::new("/root", json!({"root": {}}));
        let mirror = tree.view("/root/.mirror");

        assert_eq!(
            remap_reference(&tree, &mirror, Path::new("/root/A")),
            PathBuf::from("/root/.mirror/A")
        );
    }

    #[test]
    fn remap_forwards_translated_events() {
        let source = MemoryTree::new("/a", json!({"a": {}}));
        let target = MemoryTree::new("/b", json!({"b": {}}));
        let mut nodes = Bucket::new();
        let mut leaves = Bucket::new();

        {
            let mut remap = Remap::new(&source, &target, Recorder::new(&mut nodes, &mut leaves));
            remap.node(Path::new("/a/x")).unwrap();
            remap.leaf(Path::new("/a/x/y"), &json!("v")).unwrap();
        }

        assert!(nodes.contains_key(Path::new("/b/x")));
        assert_eq!(leaves.get(Path::new("/b/x/y")), Some(&json!("v")));
    }
}
