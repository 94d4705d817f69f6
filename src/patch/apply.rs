use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::patch::Patch;
use crate::tree::{Tree, TreeError};

/// Replays `patch` onto `tree` using the references recorded in it.
pub fn patch_tree(tree: &dyn Tree, patch: &Patch) -> Result<(), TreeError> {
    patch_tree_with(tree, patch, |reference, value| {
        (reference.to_path_buf(), value.clone())
    })
}

/// Replays `patch` onto `tree`, passing every entry through `transform` first.
///
/// Entries are applied in a fixed order: inserted leaves are written, then
/// modified leaves are written, then deleted leaves are removed, then deleted
/// nodes are removed recursively. Deletions are transformed with a `null`
/// value. Missing interior nodes are created by [`Tree::write`], so node
/// insertions need no separate step.
///
/// The first failing operation aborts the replay and is returned; entries
/// applied before it stay applied.
pub fn patch_tree_with<F>(tree: &dyn Tree, patch: &Patch, mut transform: F) -> Result<(), TreeError>
where
    F: FnMut(&Path, &Value) -> (PathBuf, Value),
{
    for (reference, value) in patch.insert_leaves.iter().chain(&patch.modify_leaves) {
        let (target, value) = transform(reference, value);
        debug!("Writing {}", target.display());
        tree.write(&target, &value)?;
    }

    for reference in patch.delete_leaves.keys() {
        let (target, _) = transform(reference, &Value::Null);
        debug!("Removing leaf {}", target.display());
        tree.delete_leaf(&target)?;
    }

    for reference in patch.delete_nodes.keys() {
        let (target, _) = transform(reference, &Value::Null);
        debug!("Removing node {}", target.display());
        tree.delete_node(&target)?;
    }

    info!(
        "Applied patch to {}: {} written, {} leaves removed, {} nodes removed",
        tree.root().display(),
        patch.insert_leaves.len() + patch.modify_leaves.len(),
        patch.delete_leaves.len(),
        patch.delete_nodes.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::tree::MemoryTree;
    use crate::visitor::remap_reference;

    fn patch() -> Patch {
        let mut patch = Patch::new();
        patch
            .insert_leaves
            .insert(PathBuf::from("/root/new/deep/leaf"), json!("fresh"));
        patch.modify_leaves.insert(PathBuf::from("/root/X/f"), json!(2));
        patch.delete_leaves.insert(PathBuf::from("/root/X/g"), json!(7));
        patch.delete_nodes.insert(PathBuf::from("/root/gone"), Value::Null);
        patch
    }

    #[test]
    fn patch_tree_applies_every_bucket() {
        let tree = MemoryTree::new(
            "/root",
            json!({"root": {"X": {"f": 1, "g": 7}, "gone": {"a": {"b": 1}}}}),
        );

        patch_tree(&tree, &patch()).unwrap();

        assert_eq!(
            tree.snapshot(),
            json!({"root": {"X": {"f": 2}, "new": {"deep": {"leaf": "fresh"}}}})
        );
    }

    #[test]
    fn patch_tree_with_remaps_onto_another_root() {
        let source = MemoryTree::new("/root", json!({"root": {}}));
        let mirror = MemoryTree::new(
            "/mirror",
            json!({"mirror": {"X": {"f": 1, "g": 7}, "gone": {}}}),
        );

        patch_tree_with(&mirror, &patch(), |reference, value| {
            (remap_reference(&source, &mirror, reference), value.clone())
        })
        .unwrap();

        assert_eq!(
            mirror.snapshot(),
            json!({"mirror": {"X": {"f": 2}, "new": {"deep": {"leaf": "fresh"}}}})
        );
    }

    #[test]
    fn deletions_see_null_values() {
        let tree = MemoryTree::new(
            "/root",
            json!({"root": {"X": {"f": 1, "g": 7}, "gone": {}}}),
        );
        let mut seen = Vec::new();

        patch_tree_with(&tree, &patch(), |reference, value| {
            seen.push((reference.to_path_buf(), value.clone()));
            (reference.to_path_buf(), value.clone())
        })
        .unwrap();

        assert_eq!(
            seen,
            vec![
                (PathBuf::from("/root/new/deep/leaf"), json!("fresh")),
                (PathBuf::from("/root/X/f"), json!(2)),
                (PathBuf::from("/root/X/g"), Value::Null),
                (PathBuf::from("/root/gone"), Value::Null),
            ]
        );
    }

    #[test]
    fn missing_leaf_deletion_aborts_the_replay() {
        let tree = MemoryTree::new("/root", json!({"root": {"X": {"f": 1}, "gone": {}}}));

        let result = patch_tree(&tree, &patch());

        assert!(matches!(result, Err(TreeError::NotFoundError { .. })));
        assert!(tree.exists(Path::new("/root/gone")));
    }
}
