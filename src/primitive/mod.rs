//! Primitive-level vocabulary: topologies and provoking-vertex conventions.

pub mod provoking;
pub mod topology;

pub use provoking::{ProvokingVertex, Reorder, split_quad};
pub use topology::{AssembledTopology, Topology};
