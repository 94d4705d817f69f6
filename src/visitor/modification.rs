use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::tree::{NodeData, Tree, TreeError};
use crate::visitor::{Remap, Visitor};

/// Equality strategy for leaf values.
pub type LeafEq<'a> = &'a dyn Fn(&Value, &Value) -> bool;

pub fn values_equal(left: &Value, right: &Value) -> bool {
    left == right
}

/// Reports leaves whose counterpart in `other` holds a different value.
///
/// The walked tree's reference and value are forwarded. A counterpart that
/// is an interior node never compares equal. Interior nodes themselves are
/// not compared.
pub struct ModificationDetector<'a, V> {
    remap: Remap<'a, V>,
    leaf_eq: LeafEq<'a>,
}

impl<'a, V> ModificationDetector<'a, V> {
    pub fn new(walked: &'a dyn Tree, other: &'a dyn Tree, sink: V, leaf_eq: LeafEq<'a>) -> Self {
        Self {
            remap: Remap::new(walked, other, sink),
            leaf_eq,
        }
    }

    pub fn into_sink(self) -> V {
        self.remap.into_inner()
    }
}

impl<V> Visitor for ModificationDetector<'_, V>
where
    V: Visitor,
{
    fn leaf(&mut self, reference: &Path, value: &Value) -> Result<(), TreeError> {
        let counterpart = self.remap.reference(reference);
        let other = self.remap.target();
        if !other.exists(&counterpart) {
            return Ok(());
        }

        let unchanged = match other.node_data(&counterpart)? {
            NodeData::Leaf(other_value) => (self.leaf_eq)(value, &other_value),
            NodeData::Interior => {
                debug!(
                    "{} is a leaf but {} is an interior node",
                    reference.display(),
                    counterpart.display()
                );
                false
            }
        };

        if unchanged {
            return Ok(());
        }
        self.remap.inner_mut().leaf(reference, value)
    }
}
