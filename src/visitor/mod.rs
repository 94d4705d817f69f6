//! Event sinks driven by [`walk`](crate::walk::walk).
//!
//! Visitors are small and meant to be stacked: a [`Filtered`] visitor decides
//! what is visited, a [`Remap`] translates references into another tree, the
//! detectors look the translated references up, and [`Recorder`] or
//! [`Callback`] finally consume the events. [`Compose`] fans one event out
//! to two visitors so a single traversal can serve several purposes.

mod callback;
mod compose;
mod counting;
mod deletion;
mod filter;
mod insertion;
mod mirror;
mod modification;
mod recording;
mod remap;
mod visitor;

pub use callback::Callback;
pub use compose::Compose;
pub use counting::NodeCount;
pub use deletion::DeletionScan;
pub use filter::{Filtered, Filters, RefPredicate, accept_all};
pub use insertion::InsertionDetector;
pub use mirror::TreeBuilder;
pub use modification::{LeafEq, ModificationDetector, values_equal};
pub use recording::{Bucket, Recorder};
pub use remap::{Remap, remap_reference};
pub use visitor::Visitor;
