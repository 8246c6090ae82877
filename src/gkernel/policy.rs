//! Variants of the feature generation, expressed as policies of a single generator.
//!
//! A [Variant] names one of the standard configurations, it converts into a [VariantPolicy]
//! whose fields can also be combined freely.

use serde::{Serialize, Deserialize};


/// Which first endpoints of a pair are retained.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndpointFilter {
    /// viewpoint, kernel point and alive
    ViewpointKernelAlive,
    /// kernel point and alive
    KernelAlive,
}

/// How the ball of radius at least 2 around a root is encoded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallStrategy {
    /// the ball is induced as a graph and its distances recomputed
    Exact,
    /// distances of the whole graph are reused
    Approximate,
}

/// How a pair of signatures is aggregated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairKeyMode {
    /// one block per (radius, distance)
    Standard,
    /// as Standard plus a block keyed by the second endpoint signature alone
    Aliased,
    /// one block per radius, all distances merged
    Gapped,
}

/// What a call to generate_feature_vector builds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VectorMode {
    /// pairs of rooted neighborhoods
    Neighborhood,
    /// pairs of rooted neighborhoods plus products of the vectors of abstraction vertex neighbors
    Abstraction,
    /// sum of vectors of graphs induced by thick shortest paths
    UnionThickPath,
}


#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantPolicy {
    pub endpoints : EndpointFilter,
    pub ball : BallStrategy,
    pub pair_key : PairKeyMode,
    /// fold the agreement of neighborhood directions into pair keys, needs 3 coordinates per vertex
    pub directional : bool,
    /// viewpoint labels are prefixed by a viewpoint marker while encoding
    pub relational : bool,
    /// signatures persist across calls, keyed by graph id. Distances are not computed by the generator.
    pub memoized : bool,
    pub vector_mode : VectorMode,
} // end of VariantPolicy


impl Default for VariantPolicy {
    fn default() -> Self {
        VariantPolicy{endpoints : EndpointFilter::ViewpointKernelAlive, ball : BallStrategy::Exact, pair_key : PairKeyMode::Standard,
            directional : false, relational : false, memoized : false, vector_mode : VectorMode::Neighborhood}
    }
}


#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    Standard,
    Approximate,
    Memoized,
    Relational,
    Aliased,
    Gapped,
    Directional,
    Abstraction,
    UnionThickPath,
}


impl From<Variant> for VariantPolicy {
    fn from(variant : Variant) -> Self {
        let standard = VariantPolicy::default();
        match variant {
            Variant::Standard    => standard,
            Variant::Approximate => VariantPolicy{ball : BallStrategy::Approximate, ..standard},
            Variant::Memoized    => VariantPolicy{memoized : true, ..standard},
            Variant::Relational  => VariantPolicy{relational : true, ..standard},
            Variant::Aliased     => VariantPolicy{endpoints : EndpointFilter::KernelAlive, ball : BallStrategy::Approximate,
                                        pair_key : PairKeyMode::Aliased, ..standard},
            Variant::Gapped      => VariantPolicy{endpoints : EndpointFilter::KernelAlive, pair_key : PairKeyMode::Gapped, ..standard},
            Variant::Directional => VariantPolicy{endpoints : EndpointFilter::KernelAlive, ball : BallStrategy::Approximate,
                                        directional : true, ..standard},
            Variant::Abstraction => VariantPolicy{memoized : true, vector_mode : VectorMode::Abstraction, ..standard},
            Variant::UnionThickPath => VariantPolicy{vector_mode : VectorMode::UnionThickPath, ..standard},
        }
    }
} // end of impl From<Variant>
