use std::path::Path;

use serde_json::Value;

use crate::tree::{Tree, TreeError};
use crate::visitor::Visitor;

/// Replicates every visited node and leaf into `target`.
///
/// References must already belong to `target`, which is what wrapping this
/// visitor in a [`Remap`](crate::visitor::Remap) provides.
pub struct TreeBuilder<'a> {
    target: &'a dyn Tree,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(target: &'a dyn Tree) -> Self {
        Self { target }
    }
}

impl Visitor for TreeBuilder<'_> {
    fn node(&mut self, reference: &Path) -> Result<(), TreeError> {
        self.target.make_node(reference)
    }

    fn leaf(&mut self, reference: &Path, value: &Value) -> Result<(), TreeError> {
        self.target.write(reference, value)
    }
}
