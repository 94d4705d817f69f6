use crate::tree::{Tree, TreeError};
use crate::visitor::{Filtered, Filters, NodeCount};
use crate::walk::walk;

/// Counts the leaves and interior nodes of `tree` that pass `filters`.
///
/// A pruned node is not counted and neither is anything below it.
pub fn count_nodes(tree: &dyn Tree, filters: Filters) -> Result<NodeCount, TreeError> {
    let mut count = NodeCount::default();
    walk(tree, tree.root(), &mut Filtered::new(&mut count, filters))?;
    Ok(count)
}
