use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::patch::{Patch, PatchObserver};
use crate::tree::{Tree, TreeError};
use crate::visitor::{
    Callback, Compose, DeletionScan, Filtered, Filters, InsertionDetector, LeafEq,
    ModificationDetector, Recorder, values_equal,
};
use crate::walk::walk;

/// Strategies used by [`deep_compare`].
#[derive(Clone, Copy)]
pub struct DiffOptions<'a> {
    /// Evaluated against references of the current tree. Only the node
    /// filter is consulted while looking for deletions.
    pub filters: Filters<'a>,
    pub leaf_eq: LeafEq<'a>,
    pub observer: &'a dyn PatchObserver,
}

impl<'a> DiffOptions<'a> {
    pub fn with_filters(mut self, filters: Filters<'a>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_leaf_eq(mut self, leaf_eq: LeafEq<'a>) -> Self {
        self.leaf_eq = leaf_eq;
        self
    }

    pub fn with_observer(mut self, observer: &'a dyn PatchObserver) -> Self {
        self.observer = observer;
        self
    }
}

impl Default for DiffOptions<'_> {
    fn default() -> Self {
        Self {
            filters: Filters::default(),
            leaf_eq: &values_equal,
            observer: &(),
        }
    }
}

/// Records into `patch` how `current` differs from `baseline`.
///
/// The first pass walks `current`: leaves without a counterpart in
/// `baseline` are inserted, leaves whose counterpart differs according to
/// `leaf_eq` are modified. The second pass walks `baseline`: leaves without
/// a counterpart in `current` are deleted, and an interior node without a
/// counterpart is recorded once as a deleted node and not descended into.
/// Every key is a reference of `current`.
///
/// The node filter applies to both passes, evaluated against references of
/// `current`. The leaf filter only applies to the first pass: every leaf
/// missing from `current` is reported as deleted.
///
/// A pass whose root does not exist is skipped, so a missing baseline yields
/// only insertions and a missing current tree a single deletion of its root.
/// Read faults inside either tree only reduce coverage.
pub fn deep_compare(
    current: &dyn Tree,
    baseline: &dyn Tree,
    patch: &mut Patch,
    options: &DiffOptions,
) -> Result<(), TreeError> {
    let observer = options.observer;
    let Patch {
        insert_leaves,
        insert_nodes,
        modify_leaves,
        modify_nodes,
        delete_leaves,
        delete_nodes,
    } = patch;

    if current.exists(current.root()) {
        debug!(
            "Scanning {} for insertions and modifications",
            current.root().display()
        );
        let inserted = Compose::new(
            Recorder::new(insert_nodes, insert_leaves),
            Callback::new(
                |reference: &Path| observer.node_inserted(reference),
                |reference: &Path, value: &Value| observer.leaf_inserted(reference, value),
            ),
        );
        let modified = Compose::new(
            Recorder::new(modify_nodes, modify_leaves),
            Callback::new(
                |reference: &Path| observer.node_modified(reference),
                |reference: &Path, value: &Value| observer.leaf_modified(reference, value),
            ),
        );
        let mut forward = Filtered::new(
            Compose::new(
                InsertionDetector::new(current, baseline, inserted, false),
                ModificationDetector::new(current, baseline, modified, options.leaf_eq),
            ),
            options.filters,
        );
        walk(current, current.root(), &mut forward)?;
    }

    if baseline.exists(baseline.root()) {
        debug!("Scanning {} for deletions", baseline.root().display());
        let deleted = Compose::new(
            Recorder::new(delete_nodes, delete_leaves),
            Callback::new(
                |reference: &Path| observer.node_deleted(reference),
                |reference: &Path, value: &Value| observer.leaf_deleted(reference, value),
            ),
        );
        let mut reverse = DeletionScan::new(baseline, current, deleted, options.filters);
        walk(baseline, baseline.root(), &mut reverse)?;
        reverse.finish()?;
    }

    debug!("Diff finished with {} entries", patch.len());
    Ok(())
}
