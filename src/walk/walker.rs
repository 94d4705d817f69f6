use std::path::Path;

use tracing::warn;

use crate::tree::tree_error::NotFoundSnafu;
use crate::tree::{NodeData, Tree, TreeError};
use crate::visitor::Visitor;

/// Pre-order depth-first traversal of `tree` starting at `reference`.
///
/// Leaves are reported through [`Visitor::leaf`] when [`Visitor::leaf_filter`]
/// accepts them. Interior nodes rejected by [`Visitor::node_filter`] are
/// pruned together with their whole subtree; accepted ones are reported
/// through [`Visitor::node`] before their children are walked in the order
/// the tree lists them.
///
/// Read faults below `reference` (missing, unreadable or undecodable nodes,
/// including those raised by the visitor while probing another tree) are
/// logged and abandon only the affected subtree. Every other error, such as
/// a failed write from a mirroring visitor, stops the walk and is returned.
///
/// The traversal recurses once per level, so the call stack grows with the
/// depth of the tree.
pub fn walk<V>(tree: &dyn Tree, reference: &Path, visitor: &mut V) -> Result<(), TreeError>
where
    V: Visitor + ?Sized,
{
    if !tree.exists(reference) {
        return NotFoundSnafu { reference }.fail();
    }
    descend(tree, reference, visitor)
}

fn descend<V>(tree: &dyn Tree, reference: &Path, visitor: &mut V) -> Result<(), TreeError>
where
    V: Visitor + ?Sized,
{
    let result = tree
        .node_data(reference)
        .and_then(|data| visit(tree, reference, data, visitor));

    match result {
        Err(e) if e.is_scan_fault() => {
            warn!("Failed to scan {}: {}", reference.display(), e);
            Ok(())
        }
        other => other,
    }
}

fn visit<V>(
    tree: &dyn Tree,
    reference: &Path,
    data: NodeData,
    visitor: &mut V,
) -> Result<(), TreeError>
where
    V: Visitor + ?Sized,
{
    if tree.is_leaf(&data) {
        if let NodeData::Leaf(value) = &data {
            if visitor.leaf_filter(reference) {
                visitor.leaf(reference, value)?;
            }
        }
        return Ok(());
    }

    if !visitor.node_filter(reference) {
        return Ok(());
    }

    visitor.node(reference)?;
    for child in tree.children(reference, &data)? {
        descend(tree, &child, visitor)?;
    }
    Ok(())
}
