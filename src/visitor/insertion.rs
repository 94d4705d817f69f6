use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::tree::{Tree, TreeError};
use crate::visitor::{Remap, Visitor};

/// Reports leaves of the walked tree that have no counterpart in `other`.
///
/// With `reflect` unset the walked tree's reference is reported; with it set
/// the counterpart reference inside `other` is reported instead. Interior
/// nodes are never reported here: a node missing from the other side is
/// picked up by the reverse walk in [`DeletionScan`](crate::visitor::DeletionScan).
pub struct InsertionDetector<'a, V> {
    remap: Remap<'a, V>,
    reflect: bool,
}

impl<'a, V> InsertionDetector<'a, V> {
    pub fn new(walked: &'a dyn Tree, other: &'a dyn Tree, sink: V, reflect: bool) -> Self {
        Self {
            remap: Remap::new(walked, other, sink),
            reflect,
        }
    }

    pub fn counterpart(&self, reference: &Path) -> PathBuf {
        self.remap.reference(reference)
    }

    pub fn other(&self) -> &'a dyn Tree {
        self.remap.target()
    }

    pub fn sink(&mut self) -> &mut V {
        self.remap.inner_mut()
    }

    pub fn into_sink(self) -> V {
        self.remap.into_inner()
    }
}

impl<V> Visitor for InsertionDetector<'_, V>
where
    V: Visitor,
{
    fn leaf(&mut self, reference: &Path, value: &Value) -> Result<(), TreeError> {
        let counterpart = self.counterpart(reference);
        if self.other().exists(&counterpart) {
            return Ok(());
        }
        let reported = if self.reflect {
            counterpart.as_path()
        } else {
            reference
        };
        self.sink().leaf(reported, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::tree::MemoryTree;
    use crate::visitor::{Bucket, Recorder};
    use crate::walk::walk;

    fn trees() -> (MemoryTree, MemoryTree) {
        let current = MemoryTree::new("/root", json!({"root": {"X": {"f": 1, "g": 2}, "new": {"h": 3}}}));
        let baseline = MemoryTree::new("/base", json!({"base": {"X": {"f": 9}}}));
        (current, baseline)
    }

    #[test]
    fn detector_reports_leaves_missing_from_the_other_tree() {
        let (current, baseline) = trees();
        let mut nodes = Bucket::new();
        let mut leaves = Bucket::new();

        let mut detector =
            InsertionDetector::new(&current, &baseline, Recorder::new(&mut nodes, &mut leaves), false);
        walk(&current, current.root(), &mut detector).unwrap();

        assert!(nodes.is_empty());
        assert_eq!(
            leaves,
            Bucket::from([
                (PathBuf::from("/root/X/g"), json!(2)),
                (PathBuf::from("/root/new/h"), json!(3)),
            ])
        );
    }

    #[test]
    fn reflected_detector_reports_counterpart_references() {
        let (current, baseline) = trees();
        let mut nodes = Bucket::new();
        let mut leaves = Bucket::new();

        let mut detector =
            InsertionDetector::new(&current, &baseline, Recorder::new(&mut nodes, &mut leaves), true);
        walk(&current, current.root(), &mut detector).unwrap();

        assert_eq!(
            leaves.keys().collect::<Vec<_>>(),
            vec![Path::new("/base/X/g"), Path::new("/base/new/h")]
        );
    }
}
