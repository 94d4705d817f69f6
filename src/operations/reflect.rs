use tracing::debug;

use crate::tree::{Tree, TreeError};
use crate::visitor::{Filtered, Filters, Remap, TreeBuilder};
use crate::walk::walk;

/// Copies every node and leaf of `source` that passes `filters` into `target`.
///
/// Existing content of `target` is kept; leaves present on both sides are
/// overwritten. `target` may be a view rooted inside `source` as long as a
/// node filter keeps the walk out of it.
pub fn reflect_tree(source: &dyn Tree, target: &dyn Tree, filters: Filters) -> Result<(), TreeError> {
    debug!(
        "Reflecting {} into {}",
        source.root().display(),
        target.root().display()
    );
    let builder = Remap::new(source, target, TreeBuilder::new(target));
    walk(source, source.root(), &mut Filtered::new(builder, filters))
}
