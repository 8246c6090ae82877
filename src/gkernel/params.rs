//! Feature generation parameters
//!
//! The match type is checked once when parsed, see [MatchType].

use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::error::NspdkError;
use crate::tools::hash::bit_mask;


/// How neighborhoods are compared.
/// - Hard : the neighborhood signature is the exact canonical encoding of the ball, all symbolic attributes form the label.
/// - Soft : only the root label is encoded exactly, the ball contributes an attribute histogram giving partial credit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    Hard,
    Soft,
}

impl FromStr for MatchType {
    type Err = NspdkError;

    fn from_str(s : &str) -> Result<Self, Self::Err> {
        match s {
            "hard" => Ok(MatchType::Hard),
            "soft" => Ok(MatchType::Soft),
            _      => Err(NspdkError::UnknownMatchType(s.to_string())),
        }
    }
} // end of impl FromStr for MatchType


/// Parameters of the union of thick shortest paths variant.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathParams {
    /// radius of the neighborhood added around each shortest path vertex
    pub thickness : usize,
    /// largest endpoint distance explored
    pub thickness_distance : usize,
}

impl Default for PathParams {
    fn default() -> Self {
        PathParams{thickness : 1, thickness_distance : 2}
    }
}


/// Parameters of the abstraction variant.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbstractionParams {
    /// number of min hash values used to reduce each side vector, 0 to disable the reduction
    pub num_min_hash_functions : usize,
    /// radius used for neighbors of abstraction vertices
    pub relation_radius : usize,
    /// distance used for neighbors of abstraction vertices
    pub relation_distance : usize,
    /// factor applied to the features generated by abstraction vertices
    pub relation_weight : f64,
    /// factor applied to the features of the graph itself
    pub abstract_weight : f64,
}

impl Default for AbstractionParams {
    fn default() -> Self {
        AbstractionParams{num_min_hash_functions : 400, relation_radius : 0, relation_distance : 1, relation_weight : 1., abstract_weight : 1.}
    }
}


#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureParams {
    /// maximal radius of rooted neighborhoods
    pub radius : usize,
    /// maximal distance between the two roots of a feature
    pub distance : usize,
    ///
    pub match_type : MatchType,
    /// divide leaves so that each radius-distance block has unit norm
    pub normalization : bool,
    /// expand counts into unit features to approximate an intersection kernel
    pub min_kernel : bool,
    /// number of bits of feature indexes
    pub hash_bit_size : u32,
    /// above 0 the generator records plain text descriptions of features
    pub verbosity : usize,
    ///
    pub path : PathParams,
    ///
    pub abstraction : AbstractionParams,
} // end of FeatureParams


impl Default for FeatureParams {
    fn default() -> Self {
        FeatureParams{radius : 1, distance : 3, match_type : MatchType::Hard, normalization : true, min_kernel : false,
            hash_bit_size : 30, verbosity : 0, path : PathParams::default(), abstraction : AbstractionParams::default()}
    }
}


impl FeatureParams {
    pub fn new(radius : usize, distance : usize, match_type : MatchType, normalization : bool, min_kernel : bool, hash_bit_size : u32) -> Self {
        FeatureParams{radius, distance, match_type, normalization, min_kernel, hash_bit_size, ..Default::default()}
    }

    ///
    pub fn get_radius(&self) -> usize { self.radius }

    ///
    pub fn get_distance(&self) -> usize { self.distance }

    ///
    pub fn get_match_type(&self) -> MatchType { self.match_type }

    ///
    pub fn get_normalization(&self) -> bool { self.normalization }

    ///
    pub fn get_min_kernel(&self) -> bool { self.min_kernel }

    ///
    pub fn get_verbosity(&self) -> usize { self.verbosity }

    /// mask applied to final feature indexes, always consistent with hash_bit_size
    pub fn get_feature_mask(&self) -> u32 { bit_mask(self.hash_bit_size) }

    /// dimension of the feature space
    pub fn get_feature_space_dim(&self) -> usize { self.get_feature_mask() as usize + 1 }

    pub fn set_verbosity(&mut self, verbosity : usize) { self.verbosity = verbosity; }

    pub fn set_path_params(&mut self, path : PathParams) { self.path = path; }

    pub fn set_abstraction_params(&mut self, abstraction : AbstractionParams) { self.abstraction = abstraction; }
} // end of impl FeatureParams


//========================================================================================

// end of mod tests
