use std::path::Path;

use serde_json::Value;

/// Hooks fired once for every entry recorded into a [`Patch`](crate::patch::Patch)
/// while it is being computed.
///
/// Hooks take `&self` because the insertion, modification and deletion
/// recorders of a single diff all hold the observer at once; stateful
/// observers keep their state in cells.
pub trait PatchObserver {
    fn leaf_inserted(&self, _reference: &Path, _value: &Value) {}

    fn node_inserted(&self, _reference: &Path) {}

    fn leaf_modified(&self, _reference: &Path, _value: &Value) {}

    fn node_modified(&self, _reference: &Path) {}

    fn leaf_deleted(&self, _reference: &Path, _value: &Value) {}

    fn node_deleted(&self, _reference: &Path) {}
}

impl PatchObserver for () {}
