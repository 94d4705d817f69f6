use std::path::Path;

use serde_json::Value;

use crate::tree::TreeError;
use crate::visitor::Visitor;

/// Predicate over node references.
pub type RefPredicate<'a> = &'a dyn Fn(&Path) -> bool;

pub fn accept_all(_reference: &Path) -> bool {
    true
}

/// Caller supplied node and leaf predicates. Both accept everything by default.
#[derive(Clone, Copy)]
pub struct Filters<'a> {
    pub node: RefPredicate<'a>,
    pub leaf: RefPredicate<'a>,
}

impl<'a> Filters<'a> {
    pub fn with_node(mut self, node: RefPredicate<'a>) -> Self {
        self.node = node;
        self
    }

    pub fn with_leaf(mut self, leaf: RefPredicate<'a>) -> Self {
        self.leaf = leaf;
        self
    }
}

impl Default for Filters<'_> {
    fn default() -> Self {
        Self {
            node: &accept_all,
            leaf: &accept_all,
        }
    }
}

/// Applies [`Filters`] in front of another visitor and forwards events unchanged.
pub struct Filtered<'a, V> {
    inner: V,
    filters: Filters<'a>,
}

impl<'a, V> Filtered<'a, V> {
    pub fn new(inner: V, filters: Filters<'a>) -> Self {
        Self { inner, filters }
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Visitor for Filtered<'_, V>
where
    V: Visitor,
{
    fn node(&mut self, reference: &Path) -> Result<(), TreeError> {
        self.inner.node(reference)
    }

    fn leaf(&mut self, reference: &Path, value: &Value) -> Result<(), TreeError> {
        self.inner.leaf(reference, value)
    }

    fn node_filter(&mut self, reference: &Path) -> bool {
        (self.filters.node)(reference)
    }

    fn leaf_filter(&mut self, reference: &Path) -> bool {
        (self.filters.leaf)(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::tree::MemoryTree;
    use crate::visitor::NodeCount;
    use crate::walk::walk;

    #[test]
    fn default_filters_accept_everything() {
        let mut filtered = Filtered::new(NodeCount::default(), Filters::default());

        assert!(filtered.node_filter(Path::new("/anything")));
        assert!(filtered.leaf_filter(Path::new("/anything/else")));
    }

    #[test]
    fn filtered_prunes_nodes_and_skips_leaves() {
        let tree = MemoryTree::new(
            "/root",
            json!({"root": {"keep": {"a": 1, "b.tmp": 2}, "drop": {"c": 3}}}),
        );
        let not_drop = |reference: &Path| !reference.ends_with("drop");
        let not_tmp = |reference: &Path| reference.extension().is_none_or(|ext| ext != "tmp");
        let filters = Filters::default().with_node(&not_drop).with_leaf(&not_tmp);
        let mut filtered = Filtered::new(NodeCount::default(), filters);

        walk(&tree, Path::new("/root"), &mut filtered).unwrap();

        assert_eq!(
            filtered.into_inner(),
            NodeCount {
                leaves: 1,
                nodes: 2
            }
        );
    }
}
