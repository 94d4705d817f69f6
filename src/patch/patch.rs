use std::path::Path;

use derive_more::Display;
use serde_json::Value;

use crate::visitor::Bucket;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum ChangeKind {
    #[display("insert")]
    Insert,
    #[display("modify")]
    Modify,
    #[display("delete")]
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum Scope {
    #[display("leaf")]
    Leaf,
    #[display("node")]
    Node,
}

/// One entry of a [`Patch`], borrowed from its bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchEntry<'p> {
    pub kind: ChangeKind,
    pub scope: Scope,
    pub reference: &'p Path,
    pub value: &'p Value,
}

/// Delta between a current tree and a baseline.
///
/// Every bucket maps a reference of the current tree to a payload: the
/// current value for inserted and modified leaves, the baseline value for
/// deleted leaves and `null` for nodes. A deleted node stands for its whole
/// former subtree; its descendants are not listed. Node insertions and
/// modifications are never detected, so those buckets stay empty after a
/// diff, and writing the inserted leaves recreates any missing nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Patch {
    pub insert_leaves: Bucket,
    pub insert_nodes: Bucket,
    pub modify_leaves: Bucket,
    pub modify_nodes: Bucket,
    pub delete_leaves: Bucket,
    pub delete_nodes: Bucket,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets().iter().all(|(_, _, bucket)| bucket.is_empty())
    }

    pub fn len(&self) -> usize {
        self.buckets().iter().map(|(_, _, bucket)| bucket.len()).sum()
    }

    pub fn bucket(&self, kind: ChangeKind, scope: Scope) -> &Bucket {
        match (kind, scope) {
            (ChangeKind::Insert, Scope::Leaf) => &self.insert_leaves,
            (ChangeKind::Insert, Scope::Node) => &self.insert_nodes,
            (ChangeKind::Modify, Scope::Leaf) => &self.modify_leaves,
            (ChangeKind::Modify, Scope::Node) => &self.modify_nodes,
            (ChangeKind::Delete, Scope::Leaf) => &self.delete_leaves,
            (ChangeKind::Delete, Scope::Node) => &self.delete_nodes,
        }
    }

    /// All entries, grouped by bucket in the order they are applied.
    pub fn entries(&self) -> impl Iterator<Item = PatchEntry<'_>> {
        self.buckets()
            .into_iter()
            .flat_map(|(kind, scope, bucket)| {
                bucket.iter().map(move |(reference, value)| PatchEntry {
                    kind,
                    scope,
                    reference,
                    value,
                })
            })
    }

    fn buckets(&self) -> [(ChangeKind, Scope, &Bucket); 6] {
        [
            (ChangeKind::Insert, Scope::Node, &self.insert_nodes),
            (ChangeKind::Insert, Scope::Leaf, &self.insert_leaves),
            (ChangeKind::Modify, Scope::Node, &self.modify_nodes),
            (ChangeKind::Modify, Scope::Leaf, &self.modify_leaves),
            (ChangeKind::Delete, Scope::Leaf, &self.delete_leaves),
            (ChangeKind::Delete, Scope::Node, &self.delete_nodes),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use serde_json::json;

    #[test]
    fn new_patch_is_empty() {
        let patch = Patch::new();
        assert!(patch.is_empty());
        assert_eq!(patch.len(), 0);
        assert_eq!(patch.entries().count(), 0);
    }

    #[test]
    fn entries_follow_application_order() {
        let mut patch = Patch::new();
        patch.delete_nodes.insert(PathBuf::from("/r/gone"), Value::Null);
        patch.delete_leaves.insert(PathBuf::from("/r/old"), json!(1));
        patch.modify_leaves.insert(PathBuf::from("/r/changed"), json!(2));
        patch.insert_leaves.insert(PathBuf::from("/r/b"), json!(3));
        patch.insert_leaves.insert(PathBuf::from("/r/a"), json!(4));

        let entries = patch
            .entries()
            .map(|entry| format!("{} {} {}", entry.kind, entry.scope, entry.reference.display()))
            .collect::<Vec<_>>();

        assert_eq!(
            entries,
            vec![
                "insert leaf /r/a",
                "insert leaf /r/b",
                "modify leaf /r/changed",
                "delete leaf /r/old",
                "delete node /r/gone",
            ]
        );
        assert_eq!(patch.len(), 5);
        assert!(!patch.is_empty());
    }

    #[test]
    fn bucket_selects_by_kind_and_scope() {
        let mut patch = Patch::new();
        patch.delete_nodes.insert(PathBuf::from("/r/gone"), Value::Null);

        assert_eq!(patch.bucket(ChangeKind::Delete, Scope::Node).len(), 1);
        assert!(patch.bucket(ChangeKind::Delete, Scope::Leaf).is_empty());
    }
}
