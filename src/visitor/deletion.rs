use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::tree::{Tree, TreeError};
use crate::visitor::{Filters, InsertionDetector, Visitor};

/// Reverse pass of a diff: walks the baseline and reports what the current
/// tree no longer has, keyed by the reference the current tree would use.
///
/// An interior node whose counterpart is gone is reported once through the
/// sink's [`Visitor::node`] and pruned, so a removed subtree yields a single
/// record however many leaves it held. Leaves are reported through a
/// reflecting [`InsertionDetector`]. Only the caller's node filter is
/// consulted, against counterpart references; every leaf missing from the
/// current tree is reported.
///
/// A node record is made from inside the walk's node filter, which cannot
/// fail. If the sink rejects it, the scan stops descending and
/// [`DeletionScan::finish`] returns the error.
pub struct DeletionScan<'a, V> {
    detector: InsertionDetector<'a, V>,
    filters: Filters<'a>,
    failure: Option<TreeError>,
}

impl<'a, V> DeletionScan<'a, V> {
    pub fn new(baseline: &'a dyn Tree, current: &'a dyn Tree, sink: V, filters: Filters<'a>) -> Self {
        Self {
            detector: InsertionDetector::new(baseline, current, sink, true),
            filters,
            failure: None,
        }
    }

    /// Hands back the sink, or the first error it raised for a node record.
    pub fn finish(self) -> Result<V, TreeError> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(self.detector.into_sink()),
        }
    }
}

impl<V> Visitor for DeletionScan<'_, V>
where
    V: Visitor,
{
    fn node(&mut self, reference: &Path) -> Result<(), TreeError> {
        self.detector.node(reference)
    }

    fn leaf(&mut self, reference: &Path, value: &Value) -> Result<(), TreeError> {
        if self.failure.is_some() {
            return Ok(());
        }
        self.detector.leaf(reference, value)
    }

    fn node_filter(&mut self, reference: &Path) -> bool {
        if self.failure.is_some() {
            return false;
        }
        let counterpart = self.detector.counterpart(reference);
        if !(self.filters.node)(&counterpart) {
            return false;
        }
        if self.detector.other().exists(&counterpart) {
            return true;
        }

        debug!("{} was deleted with its whole subtree", counterpart.display());
        if let Err(e) = self.detector.sink().node(&counterpart) {
            self.failure = Some(e);
        }
        false
    }
}
