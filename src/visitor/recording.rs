use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::tree::TreeError;
use crate::visitor::Visitor;

/// Reference to payload mapping; one per patch bucket.
pub type Bucket = BTreeMap<PathBuf, Value>;

/// Stores every event it receives. Nodes carry no payload and are recorded as `null`.
pub struct Recorder<'p> {
    nodes: &'p mut Bucket,
    leaves: &'p mut Bucket,
}

impl<'p> Recorder<'p> {
    pub fn new(nodes: &'p mut Bucket, leaves: &'p mut Bucket) -> Self {
        Self { nodes, leaves }
    }
}

impl Visitor for Recorder<'_> {
    fn node(&mut self, reference: &Path) -> Result<(), TreeError> {
        self.nodes.insert(reference.to_path_buf(), Value::Null);
        Ok(())
    }

    fn leaf(&mut self, reference: &Path, value: &Value) -> Result<(), TreeError> {
        self.leaves.insert(reference.to_path_buf(), value.clone());
        Ok(())
    }
}
