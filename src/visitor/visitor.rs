use std::path::Path;

use serde_json::Value;

use crate::tree::TreeError;

/// Receives the events of a traversal.
///
/// Every method has a default: events are ignored and both filters accept
/// everything. Filters take `&mut self` because some visitors record what
/// they reject.
pub trait Visitor {
    fn node(&mut self, _reference: &Path) -> Result<(), TreeError> {
        Ok(())
    }

    fn leaf(&mut self, _reference: &Path, _value: &Value) -> Result<(), TreeError> {
        Ok(())
    }

    fn node_filter(&mut self, _reference: &Path) -> bool {
        true
    }

    fn leaf_filter(&mut self, _reference: &Path) -> bool {
        true
    }
}

impl<V> Visitor for &mut V
where
    V: Visitor + ?Sized,
{
    fn node(&mut self, reference: &Path) -> Result<(), TreeError> {
        (**self).node(reference)
    }

    fn leaf(&mut self, reference: &Path, value: &Value) -> Result<(), TreeError> {
        (**self).leaf(reference, value)
    }

    fn node_filter(&mut self, reference: &Path) -> bool {
        (**self).node_filter(reference)
    }

    fn leaf_filter(&mut self, reference: &Path) -> bool {
        (**self).leaf_filter(reference)
    }
}
