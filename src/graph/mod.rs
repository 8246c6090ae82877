//! Attributed graphs : the vertex and arc data, the graph store on top of petgraph
//! and the bounded distance index the feature generation relies on.

/// Defines the data attached to vertices and arcs.
pub mod attributes;

/// Defines the graph store.
pub mod pgraph;

/// Bounded breadth first distances.
pub mod distance;

pub use attributes::*;
pub use pgraph::*;
pub use distance::DistanceIndex;
