//! This module implements the Neighborhood Subgraph Pairwise Distance Kernel (NSPDK) on attributed graphs.
//!
//! Each vertex is summarized by canonical hashes of its rooted neighborhoods of increasing radius.
//! Pairs of neighborhoods whose roots are at a given distance make up the features of a graph,
//! and the kernel between two graphs is the dot product of their sparse feature vectors.
//!
//! The main entry point is [generator::FeatureGenerator], configured by [params::FeatureParams] and a [policy::Variant].
//! Batch vectorization of a collection of graphs is in [gram].
//!
//! Some references :
//!
//! - Fast Neighborhood Subgraph Pairwise Distance Kernel. Costa-De Grave ICML 2010
//! - Graph Kernels : A survey. Nikolentzos-Siglidis-Vazirgiannis 2021
//
// The soft match variant replaces the exact neighborhood hash by a histogram of the attributes of the
// neighborhood, keeping only the root label as structural signature.

pub mod params;

pub mod policy;

pub mod histogram;

pub mod sparse;

pub mod debug;

pub mod direction;

pub mod encoder;

pub mod generator;

pub mod path;

pub mod abstraction;

pub mod gram;
