use std::path::Path;

use serde_json::Value;

use crate::tree::TreeError;
use crate::visitor::Visitor;

/// Delivers each event to `first`, then to `second`, before the walk moves on.
///
/// A node or leaf is visited only when both filters accept it. Both filters
/// are always consulted.
pub struct Compose<A, B> {
    first: A,
    second: B,
}

impl<A, B> Compose<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> Visitor for Compose<A, B>
where
    A: Visitor,
    B: Visitor,
{
    fn node(&mut self, reference: &Path) -> Result<(), TreeError> {
        self.first.node(reference)?;
        self.second.node(reference)
    }

    fn leaf(&mut self, reference: &Path, value: &Value) -> Result<(), TreeError> {
        self.first.leaf(reference, value)?;
        self.second.leaf(reference, value)
    }

    fn node_filter(&mut self, reference: &Path) -> bool {
        self.first.node_filter(reference) & self.second.node_filter(reference)
    }

    fn leaf_filter(&mut self, reference: &Path) -> bool {
        self.first.leaf_filter(reference) & self.second.leaf_filter(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use serde_json::json;

    use crate::visitor::{Callback, NodeCount};

    #[test]
    fn compose_runs_first_then_second_for_each_event() {
        let order = RefCell::new(Vec::new());
        let first = Callback::new(
            |reference: &Path| order.borrow_mut().push(format!("a node {}", reference.display())),
            |reference: &Path, _: &Value| {
                order.borrow_mut().push(format!("a leaf {}", reference.display()))
            },
        );
        let second = Callback::new(
            |reference: &Path| order.borrow_mut().push(format!("b node {}", reference.display())),
            |reference: &Path, _: &Value| {
                order.borrow_mut().push(format!("b leaf {}", reference.display()))
            },
        );
        let mut compose = Compose::new(first, second);

        compose.node(Path::new("/n")).unwrap();
        compose.leaf(Path::new("/n/l"), &json!(1)).unwrap();

        assert_eq!(
            *order.borrow(),
            vec!["a node /n", "b node /n", "a leaf /n/l", "b leaf /n/l"]
        );
    }

    #[test]
    fn compose_feeds_both_counters() {
        let mut compose = Compose::new(NodeCount::default(), NodeCount::default());

        compose.node(Path::new("/n")).unwrap();
        compose.leaf(Path::new("/n/l"), &json!(1)).unwrap();
        compose.leaf(Path::new("/n/m"), &json!(2)).unwrap();

        let (first, second) = compose.into_inner();
        assert_eq!(first, NodeCount { leaves: 2, nodes: 1 });
        assert_eq!(first, second);
    }
}
