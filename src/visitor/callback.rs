use std::path::Path;

use serde_json::Value;

use crate::tree::TreeError;
use crate::visitor::Visitor;

/// Hands every event to a pair of closures.
pub struct Callback<N, L> {
    on_node: N,
    on_leaf: L,
}

impl<N, L> Callback<N, L>
where
    N: FnMut(&Path),
    L: FnMut(&Path, &Value),
{
    pub fn new(on_node: N, on_leaf: L) -> Self {
        Self { on_node, on_leaf }
    }
}

impl<N, L> Visitor for Callback<N, L>
where
    N: FnMut(&Path),
    L: FnMut(&Path, &Value),
{
    fn node(&mut self, reference: &Path) -> Result<(), TreeError> {
        (self.on_node)(reference);
        Ok(())
    }

    fn leaf(&mut self, reference: &Path, value: &Value) -> Result<(), TreeError> {
        (self.on_leaf)(reference, value);
        Ok(())
    }
}
