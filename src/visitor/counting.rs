use std::path::Path;

use derive_more::Add;
use serde_json::Value;

use crate::tree::TreeError;
use crate::visitor::Visitor;

/// Tallies the leaves and interior nodes a traversal reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Add)]
pub struct NodeCount {
    pub leaves: usize,
    pub nodes: usize,
}

impl Visitor for NodeCount {
    fn node(&mut self, _reference: &Path) -> Result<(), TreeError> {
        self.nodes += 1;
        Ok(())
    }

    fn leaf(&mut self, _reference: &Path, _value: &Value) -> Result<(), TreeError> {
        self.leaves += 1;
        Ok(())
    }
}
