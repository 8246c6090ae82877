//! The feature generator : from an attributed graph to a sparse feature vector.
//!
//! For each radius r in [0, radius] and distance d in [0, distance], each first endpoint src is paired with every
//! kernel point found at distance d from it. The pair contributes the merge of the soft histograms of the two
//! neighborhoods of radius r, under a key built from the two signatures (order independent).
//! Features are thus organized in 4 levels :
//! - (radius, distance) block
//! - pair of signatures
//! - attribute predicate
//! - attribute bin
//!
//! and each path through the 4 levels is hashed into one feature index.
//!
//! The variants of the method are policies of the same generator, see [VariantPolicy].

use std::collections::{BTreeMap, HashMap};
use std::io::Write;

use indexmap::IndexMap;
use num_traits::cast::ToPrimitive;

use crate::error::{NspdkError, Result};
use crate::graph::AttributedGraph;
use crate::tools::hash::{hash_str, hash_list, hash_list_masked};

use super::debug::DebugInfo;
use super::direction::{Direction3, root_direction, direction_agreement};
use super::encoder::{CanonicalFormEncoder, Signature};
use super::histogram::{SecondOrderHistogram, ThirdOrderHistogram};
use super::params::FeatureParams;
use super::policy::*;
use super::sparse::SparseVector;


type SignatureCache = HashMap<(usize, usize), Signature, ahash::RandomState>;


pub struct FeatureGenerator {
    params : FeatureParams,
    policy : VariantPolicy,
    encoder : CanonicalFormEncoder,
    /// block key -> pair key -> predicate -> bin -> value
    feature_list : BTreeMap<u32, ThirdOrderHistogram>,
    /// (radius, vertex) -> signature, for the current call
    signatures : SignatureCache,
    /// graph id -> (radius, vertex) -> signature, kept across calls in memoized mode
    memoized : IndexMap<String, SignatureCache>,
    /// (radius, vertex) -> direction of the neighborhood
    directions : HashMap<(usize, usize), Direction3, ahash::RandomState>,
    /// (src, dest) -> vector of the thick path graph, union thick path mode
    pub(crate) path_vectors : HashMap<(usize, usize), SparseVector, ahash::RandomState>,
} // end of struct FeatureGenerator


impl FeatureGenerator {
    pub fn new(params : FeatureParams, variant : Variant) -> Self {
        FeatureGenerator::with_policy(params, VariantPolicy::from(variant))
    }

    pub fn with_policy(params : FeatureParams, policy : VariantPolicy) -> Self {
        log::debug!("FeatureGenerator::with_policy params : {:?}, policy : {:?}", params, policy);
        FeatureGenerator{params, policy,
            encoder : CanonicalFormEncoder::new(params.match_type, policy.ball, params.verbosity),
            feature_list : BTreeMap::new(),
            signatures : SignatureCache::default(),
            memoized : IndexMap::new(),
            directions : HashMap::<(usize, usize), Direction3, ahash::RandomState>::default(),
            path_vectors : HashMap::<(usize, usize), SparseVector, ahash::RandomState>::default()}
    }

    pub fn get_params(&self) -> &FeatureParams { &self.params }

    pub fn get_policy(&self) -> &VariantPolicy { &self.policy }

    pub fn get_debug_info(&self) -> &DebugInfo { self.encoder.get_debug_info() }

    /// resets what a call to generate_feature_vector builds. Memoized signatures are kept.
    pub fn clear(&mut self) {
        self.feature_list.clear();
        self.signatures.clear();
        self.directions.clear();
        self.encoder.clear();
        self.encoder.get_debug_info_mut().clear();
    }

    /// forgets memoized signatures of one graph
    pub fn clear_cache(&mut self, graph_id : &str) {
        self.memoized.shift_remove(graph_id);
    }

    /// forgets everything, memoized signatures included
    pub fn clear_all_caches(&mut self) {
        self.clear();
        self.memoized.clear();
        self.path_vectors.clear();
    }

    /// number of graphs with memoized signatures
    pub fn nb_memoized_graphs(&self) -> usize { self.memoized.len() }

    /// Vector of graph. An empty viewpoint list means all vertices flagged viewpoint.
    /// In memoized and abstraction modes distances must have been computed on graph beforehand.
    pub fn generate_feature_vector(&mut self, graph : &AttributedGraph, viewpoints : &[usize]) -> Result<SparseVector> {
        let x = match self.policy.vector_mode {
            VectorMode::Neighborhood   => self.neighborhood_feature_vector(graph, viewpoints)?,
            VectorMode::Abstraction    => self.abstraction_feature_vector(graph, viewpoints)?,
            VectorMode::UnionThickPath => self.union_thick_path_feature_vector(graph, viewpoints)?,
        };
        log::debug!("graph {:?} : feature vector nnz {}", graph.get_graph_id(), x.nnz());
        Ok(x)
    }

    /// dot product of the vectors of the two graphs
    pub fn compute_kernel(&mut self, g : &AttributedGraph, h : &AttributedGraph, g_viewpoints : &[usize], h_viewpoints : &[usize]) -> Result<f64> {
        let x = self.generate_feature_vector(g, g_viewpoints)?;
        let z = self.generate_feature_vector(h, h_viewpoints)?;
        Ok(x.dot(&z))
    }

    pub(crate) fn neighborhood_feature_vector(&mut self, graph : &AttributedGraph, viewpoints : &[usize]) -> Result<SparseVector> {
        self.clear();
        self.generate_features(graph, viewpoints)?;
        Ok(self.convert_to_sparse_vector())
    }

    // runs f with another radius, distance and first endpoint filter, restored afterwards
    pub(crate) fn with_scope<T, F>(&mut self, radius : usize, distance : usize, endpoints : EndpointFilter, f : F) -> Result<T>
        where F : FnOnce(&mut Self) -> Result<T> {
        let saved = (self.params.radius, self.params.distance, self.policy.endpoints);
        self.params.radius = radius;
        self.params.distance = distance;
        self.policy.endpoints = endpoints;
        let res = f(self);
        self.params.radius = saved.0;
        self.params.distance = saved.1;
        self.policy.endpoints = saved.2;
        res
    }

    /// viewpoints given, or all vertices flagged viewpoint
    pub(crate) fn first_endpoints(&self, graph : &AttributedGraph, viewpoints : &[usize]) -> Result<Vec<usize>> {
        if viewpoints.is_empty() {
            let mut endpoints = Vec::<usize>::new();
            for v in 0..graph.vertex_count() {
                if graph.is_vertex_viewpoint(v)? {
                    endpoints.push(v);
                }
            }
            Ok(endpoints)
        }
        else {
            for &v in viewpoints {
                graph.get_vertex_attributes(v)?;
            }
            Ok(viewpoints.to_vec())
        }
    } // end of first_endpoints

    fn generate_features(&mut self, graph : &AttributedGraph, viewpoints : &[usize]) -> Result<()> {
        let endpoints = self.first_endpoints(graph, viewpoints)?;
        if endpoints.is_empty() {
            return Err(NspdkError::EmptyEndpoints(graph.get_graph_id().to_string()));
        }
        log::debug!("generate_features graph {:?}, nb first endpoints : {}", graph.get_graph_id(), endpoints.len());
        if !self.policy.memoized {
            graph.compute_pairwise_distance_information(Some(self.params.distance), Some(self.params.radius), &endpoints)?;
        }
        graph.check()?;
        if self.policy.relational {
            for &v in &endpoints {
                self.encoder.mark_viewpoint(graph, v)?;
            }
        }
        for r in 0..=self.params.radius {
            for d in 0..=self.params.distance {
                self.generate_radius_distance_features(graph, d, r, &endpoints)?;
            }
        }
        if self.policy.relational {
            for &v in &endpoints {
                self.encoder.unmark_viewpoint(v);
            }
        }
        log::debug!("generate_features graph {:?}, nb blocks : {}", graph.get_graph_id(), self.feature_list.len());
        Ok(())
    } // end of generate_features

    fn is_active_first_endpoint(&self, graph : &AttributedGraph, v : usize) -> Result<bool> {
        let active = graph.is_vertex_kernel_point(v)? && graph.is_vertex_alive(v)?;
        match self.policy.endpoints {
            EndpointFilter::ViewpointKernelAlive => Ok(active && graph.is_vertex_viewpoint(v)?),
            EndpointFilter::KernelAlive          => Ok(active),
        }
    }

    // signature from the call cache or the memoized cache
    fn signature(&mut self, graph : &AttributedGraph, v : usize, radius : usize) -> Result<Signature> {
        let cache = if self.policy.memoized {
            self.memoized.entry(graph.get_graph_id().to_string()).or_insert_with(SignatureCache::default)
        }
        else {
            &mut self.signatures
        };
        if let Some(signature) = cache.get(&(radius, v)) {
            return Ok(signature.clone());
        }
        let signature = self.encoder.canonical_form(graph, v, radius)?;
        let cache = if self.policy.memoized {
            self.memoized.entry(graph.get_graph_id().to_string()).or_insert_with(SignatureCache::default)
        }
        else {
            &mut self.signatures
        };
        cache.insert((radius, v), signature.clone());
        Ok(signature)
    } // end of signature

    fn direction(&mut self, graph : &AttributedGraph, v : usize, radius : usize) -> Result<Direction3> {
        if let Some(direction) = self.directions.get(&(radius, v)) {
            return Ok(*direction);
        }
        let direction = root_direction(graph, v, radius)?;
        self.directions.insert((radius, v), direction);
        Ok(direction)
    }

    // order independent key of a pair of signatures
    fn pair_key(&mut self, graph : &AttributedGraph, src : (usize, u32), dest : (usize, u32), radius : usize) -> Result<u32> {
        let (low, high) = if src.1 <= dest.1 { (src.1, dest.1) } else { (dest.1, src.1) };
        let key = if self.policy.directional {
            let src_direction = self.direction(graph, src.0, radius)?;
            let dest_direction = self.direction(graph, dest.0, radius)?;
            hash_list(&[low, high, direction_agreement(&src_direction, &dest_direction)])
        }
        else {
            hash_list(&[low, high])
        };
        if self.params.verbosity > 0 {
            self.encoder.get_debug_info_mut().record_pair(key, &[low, high]);
        }
        Ok(key)
    } // end of pair_key

    fn block_name(&self, distance : usize, radius : usize) -> String {
        match self.policy.pair_key {
            PairKeyMode::Gapped => format!("d:* r:{}", radius),
            _                   => format!("d:{} r:{}", distance, radius),
        }
    }

    fn store_block(&mut self, name : String, block : ThirdOrderHistogram) {
        let key = hash_str(&name);
        log::trace!("block {} : {} pairs", name, block.size());
        if self.params.verbosity > 0 {
            self.encoder.get_debug_info_mut().record_block(key, name);
        }
        self.feature_list.entry(key).or_default().add(&block);
    }

    fn generate_radius_distance_features(&mut self, graph : &AttributedGraph, distance : usize, radius : usize, endpoints : &[usize]) -> Result<()> {
        let mut block = ThirdOrderHistogram::default();
        let mut alias_block = ThirdOrderHistogram::default();
        let aliased = self.policy.pair_key == PairKeyMode::Aliased;
        for &src in endpoints {
            if !self.is_active_first_endpoint(graph, src)? {
                continue;
            }
            let src_signature = self.signature(graph, src, radius)?;
            if distance == 0 {
                let key = hash_list(&[src_signature.hash]);
                block.add_at(key, &src_signature.soft);
                if aliased {
                    alias_block.add_at(key, &src_signature.soft);
                }
                if self.params.verbosity > 0 {
                    self.encoder.get_debug_info_mut().record_pair(key, &[src_signature.hash]);
                }
                continue;
            }
            for dest in graph.get_fixed_distance_vertex_list(src, distance) {
                if !(graph.is_vertex_kernel_point(dest)? && graph.is_vertex_alive(dest)?) {
                    continue;
                }
                let dest_signature = self.signature(graph, dest, radius)?;
                let key = self.pair_key(graph, (src, src_signature.hash), (dest, dest_signature.hash), radius)?;
                let mut soft : SecondOrderHistogram = src_signature.soft.clone();
                soft.add(&dest_signature.soft);
                block.add_at(key, &soft);
                if aliased {
                    alias_block.add_at(hash_list(&[dest_signature.hash]), &dest_signature.soft);
                }
            }
        }
        if !block.is_empty() {
            let name = self.block_name(distance, radius);
            self.store_block(name, block);
        }
        if !alias_block.is_empty() {
            self.store_block(format!("alias d:{} r:{}", distance, radius), alias_block);
        }
        Ok(())
    } // end of generate_radius_distance_features


    #[cfg_attr(doc, katexit::katexit)]
    /// Flattens the 4 levels into a sparse vector.
    /// The feature index of a leaf is the hash of its 4 keys and a fifth slot, masked to the feature space.
    ///
    /// In linear mode with normalization, a leaf value $v$ is divided by
    /// $\sqrt{n_0 \cdot n_1 \cdot n_2 \cdot \sum v^2}$ where $n_0$ is the number of blocks, $n_1$ the number of pairs
    /// of the block, $n_2$ the number of predicates of the pair and the sum runs over the bins of the predicate.
    /// Each block then has norm $1/\sqrt{n_0}$ and the vector has unit norm (up to hash collisions).
    ///
    /// In min kernel mode a bin of value $c$ expands into $\lceil c \rceil$ unit features distinguished by the fifth slot.
    pub fn convert_to_sparse_vector(&mut self) -> SparseVector {
        let mask = self.params.get_feature_mask();
        let verbosity = self.params.verbosity;
        let mut x = SparseVector::new();
        let n0 = self.feature_list.len() as f64;
        for (block_key, block) in &self.feature_list {
            let n1 = block.size() as f64;
            for (pair_key, pair) in block.iter() {
                let n2 = pair.size() as f64;
                for (predicate, bins) in pair.iter() {
                    let norm = if self.params.normalization && !self.params.min_kernel {
                        let sum_sq : f64 = bins.iter().map(|(_, v)| v * v).sum();
                        (n0 * n1 * n2 * sum_sq).sqrt()
                    }
                    else {
                        1.
                    };
                    for (bin, value) in bins.iter() {
                        let path = [*block_key, *pair_key, *predicate, *bin];
                        if self.params.min_kernel {
                            let count = value.ceil().to_u32().unwrap_or(0);
                            for z in 0..count {
                                let feature = hash_list_masked(&[path[0], path[1], path[2], path[3], z], mask);
                                x.add_to(feature, 1.);
                            }
                        }
                        else if norm > 0. {
                            let feature = hash_list_masked(&[path[0], path[1], path[2], path[3], 0], mask);
                            x.add_to(feature, value / norm);
                            if verbosity > 0 {
                                self.encoder.get_debug_info_mut().record_feature(feature, path);
                            }
                        }
                    }
                }
            }
        }
        x
    } // end of convert_to_sparse_vector

    /// writes parameters and policy, one per line
    pub fn output_parameters<W : Write>(&self, out : &mut W) -> std::io::Result<()> {
        writeln!(out, "radius : {}", self.params.radius)?;
        writeln!(out, "distance : {}", self.params.distance)?;
        writeln!(out, "match_type : {:?}", self.params.match_type)?;
        writeln!(out, "normalization : {}", self.params.normalization)?;
        writeln!(out, "min_kernel : {}", self.params.min_kernel)?;
        writeln!(out, "hash_bit_size : {}", self.params.hash_bit_size)?;
        writeln!(out, "verbosity : {}", self.params.verbosity)?;
        writeln!(out, "policy : {:?}", self.policy)?;
        Ok(())
    }

    /// writes the plain text description of the features of the last vector, needs verbosity above 0
    pub fn output_feature_map<W : Write>(&self, out : &mut W) -> std::io::Result<()> {
        self.encoder.get_debug_info().output_feature_map(out)
    }
} // end of impl FeatureGenerator


//========================================================================================

#[cfg(test)]
mod tests {

use super::*;
use crate::graph::Attributes;
use crate::gkernel::params::MatchType;

#[allow(unused)]
fn log_init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// undirected graph, every vertex kernel point and viewpoint, every edge labelled "-"
fn labelled_graph(graph_id : &str, labels : &[&str], edges : &[(usize, usize)]) -> AttributedGraph {
    let mut graph = AttributedGraph::new(graph_id.to_string());
    for label in labels {
        graph.insert_vertex_with_attributes(Attributes::new(vec![label.to_string()], Vec::new(), vec![true, false, true]));
    }
    for &(u, v) in edges {
        graph.insert_undirected_edge(u, v, Attributes::new(vec![String::from("-")], Vec::new(), Vec::new())).unwrap();
    }
    graph
}

fn abc() -> AttributedGraph {
    labelled_graph("abc", &["A", "B", "C"], &[(0, 1), (1, 2)])
}

fn value_sum(x : &SparseVector) -> f64 {
    x.iter().map(|(_, v)| *v).sum()
}


#[test]
fn test_abc_unit_features() {
    log_init_test();
    let graph = abc();
    let params = FeatureParams::new(0, 0, MatchType::Hard, false, false, 30);
    let mut generator = FeatureGenerator::new(params, Variant::Standard);
    let x = generator.generate_feature_vector(&graph, &[]).unwrap();
    assert_eq!(x.nnz(), 3);
    assert!(x.iter().all(|(_, v)| *v == 1.));
    // one block per radius
    let params = FeatureParams::new(1, 0, MatchType::Hard, false, false, 30);
    let mut generator = FeatureGenerator::new(params, Variant::Standard);
    let x = generator.generate_feature_vector(&graph, &[]).unwrap();
    assert_eq!(x.nnz(), 6);
    assert!(x.iter().all(|(_, v)| *v == 1.));
}


#[test]
fn test_normalization() {
    log_init_test();
    let graph = abc();
    let params = FeatureParams::new(1, 2, MatchType::Hard, true, false, 30);
    let mut generator = FeatureGenerator::new(params, Variant::Standard);
    let x = generator.generate_feature_vector(&graph, &[]).unwrap();
    assert!((x.norm() - 1.).abs() < 1.0e-10);
    assert!((generator.compute_kernel(&graph, &graph, &[], &[]).unwrap() - 1.).abs() < 1.0e-10);
}


#[test]
fn test_insertion_order_and_determinism() {
    log_init_test();
    let g1 = labelled_graph("g1", &["A", "B", "C", "D"], &[(0, 1), (1, 2), (2, 3), (1, 3)]);
    // same graph, vertices and edges inserted in another order
    let g2 = labelled_graph("g2", &["D", "C", "B", "A"], &[(0, 2), (3, 2), (1, 0), (2, 1)]);
    let params = FeatureParams::new(2, 3, MatchType::Hard, true, false, 30);
    let mut generator = FeatureGenerator::new(params, Variant::Standard);
    let x1 = generator.generate_feature_vector(&g1, &[]).unwrap();
    let x2 = generator.generate_feature_vector(&g2, &[]).unwrap();
    assert_eq!(x1, x2);
    // a fresh generator gives the same vector
    let mut other = FeatureGenerator::new(params, Variant::Standard);
    assert_eq!(other.generate_feature_vector(&g1, &[]).unwrap(), x1);
}


#[test]
fn test_self_kernel_dominates() {
    log_init_test();
    let g = labelled_graph("g", &["A", "B", "C", "A"], &[(0, 1), (1, 2), (2, 3)]);
    let h = labelled_graph("h", &["A", "B", "A"], &[(0, 1), (1, 2)]);
    let params = FeatureParams::new(1, 2, MatchType::Hard, true, false, 30);
    let mut generator = FeatureGenerator::new(params, Variant::Standard);
    let k_gg = generator.compute_kernel(&g, &g, &[], &[]).unwrap();
    let k_gh = generator.compute_kernel(&g, &h, &[], &[]).unwrap();
    assert!(k_gh > 0.);
    assert!(k_gg >= k_gh);
}


#[test]
fn test_dead_vertex_excluded() {
    log_init_test();
    let mut graph = abc();
    graph.set_vertex_dead(2).unwrap();
    let ab = labelled_graph("ab", &["A", "B"], &[(0, 1)]);
    let params = FeatureParams::new(1, 1, MatchType::Hard, true, false, 30);
    let mut generator = FeatureGenerator::new(params, Variant::Standard);
    let x = generator.generate_feature_vector(&graph, &[]).unwrap();
    assert_eq!(x, generator.generate_feature_vector(&ab, &[]).unwrap());
}


#[test]
fn test_endpoint_errors() {
    log_init_test();
    let mut graph = AttributedGraph::new(String::from("no viewpoint"));
    graph.insert_vertex();
    graph.insert_vertex();
    graph.insert_undirected_edge(0, 1, Attributes::default()).unwrap();
    let mut generator = FeatureGenerator::new(FeatureParams::default(), Variant::Standard);
    let err = generator.generate_feature_vector(&graph, &[]).unwrap_err();
    assert!(err.is_logic_error());
    let err = generator.generate_feature_vector(&abc(), &[5]).unwrap_err();
    assert!(err.is_range_error());
}


#[test]
fn test_explicit_viewpoints() {
    log_init_test();
    let graph = abc();
    let params = FeatureParams::new(0, 0, MatchType::Hard, false, false, 30);
    let mut generator = FeatureGenerator::new(params, Variant::Standard);
    let x = generator.generate_feature_vector(&graph, &[1]).unwrap();
    assert_eq!(x.nnz(), 1);
}


#[test]
fn test_single_viewpoint_radius_2() {
    log_init_test();
    let params = FeatureParams::new(2, 1, MatchType::Hard, true, false, 30);
    let graph = labelled_graph("abcd", &["A", "B", "C", "D"], &[(0, 1), (1, 2), (2, 3)]);
    for variant in [Variant::Standard, Variant::Approximate] {
        let mut generator = FeatureGenerator::new(params, variant);
        let x = generator.generate_feature_vector(&graph, &[0]).unwrap();
        assert!((x.norm() - 1.).abs() < 1.0e-10);
    }
    // only vertex 0 flagged viewpoint
    let mut graph = labelled_graph("abcd", &["A", "B", "C", "D"], &[(0, 1), (1, 2), (2, 3)]);
    for v in 1..4 {
        graph.set_vertex_viewpoint(v, false).unwrap();
    }
    let mut generator = FeatureGenerator::new(params, Variant::Standard);
    assert!(!generator.generate_feature_vector(&graph, &[]).unwrap().is_empty());
}


#[test]
fn test_pair_key_symmetric() {
    log_init_test();
    let graph = abc();
    graph.compute_pairwise_distance_information(Some(1), Some(1), &[]).unwrap();
    let mut generator = FeatureGenerator::new(FeatureParams::default(), Variant::Standard);
    let key = generator.pair_key(&graph, (0, 17), (1, 5), 1).unwrap();
    assert_eq!(key, generator.pair_key(&graph, (1, 5), (0, 17), 1).unwrap());
    assert_eq!(key, hash_list(&[5, 17]));
    // directional keys, with coordinates so that the two directions are anti parallel
    let mut line = AttributedGraph::new(String::from("line"));
    for (i, label) in ["A", "B", "C"].iter().enumerate() {
        line.insert_vertex_with_attributes(Attributes::new(vec![label.to_string()], vec![i as f64, 0., 0.], vec![true, false, true]));
    }
    line.insert_undirected_edge(0, 1, Attributes::default()).unwrap();
    line.insert_undirected_edge(1, 2, Attributes::default()).unwrap();
    line.compute_pairwise_distance_information(Some(2), Some(1), &[]).unwrap();
    let mut directional = FeatureGenerator::new(FeatureParams::default(), Variant::Directional);
    let key = directional.pair_key(&line, (0, 17), (2, 5), 1).unwrap();
    assert_eq!(key, directional.pair_key(&line, (2, 5), (0, 17), 1).unwrap());
    assert_eq!(key, hash_list(&[5, 17, crate::gkernel::direction::AGREEMENT_ANTI_PARALLEL]));
}


#[test]
fn test_pair_seen_from_either_end() {
    log_init_test();
    let graph = labelled_graph("ab", &["A", "B"], &[(0, 1)]);
    let params = FeatureParams::new(0, 1, MatchType::Hard, false, false, 30);
    let mut generator = FeatureGenerator::new(params, Variant::Standard);
    let x = generator.generate_feature_vector(&graph, &[0]).unwrap();
    let z = generator.generate_feature_vector(&graph, &[1]).unwrap();
    // distance 0 blocks differ, the distance 1 pair is shared
    assert_eq!(x.nnz(), 2);
    assert_eq!(z.nnz(), 2);
    assert_eq!(x.dot(&z), 1.);
}


#[test]
fn test_memoized_cache() {
    log_init_test();
    let graph = abc();
    let params = FeatureParams::new(1, 2, MatchType::Hard, true, false, 30);
    let mut standard = FeatureGenerator::new(params, Variant::Standard);
    let x = standard.generate_feature_vector(&graph, &[]).unwrap();
    //
    let mut memoized = FeatureGenerator::new(params, Variant::Memoized);
    graph.compute_pairwise_distance_information(Some(2), Some(1), &[]).unwrap();
    assert_eq!(memoized.generate_feature_vector(&graph, &[]).unwrap(), x);
    assert_eq!(memoized.nb_memoized_graphs(), 1);
    // second call served from the cache
    assert_eq!(memoized.generate_feature_vector(&graph, &[]).unwrap(), x);
    memoized.clear_cache("other");
    assert_eq!(memoized.nb_memoized_graphs(), 1);
    memoized.clear_cache("abc");
    assert_eq!(memoized.nb_memoized_graphs(), 0);
}


#[test]
fn test_relational() {
    log_init_test();
    let graph = abc();
    let params = FeatureParams::new(1, 1, MatchType::Hard, true, false, 30);
    let mut standard = FeatureGenerator::new(params, Variant::Standard);
    let mut relational = FeatureGenerator::new(params, Variant::Relational);
    let x = relational.generate_feature_vector(&graph, &[]).unwrap();
    assert_ne!(x, standard.generate_feature_vector(&graph, &[]).unwrap());
    // markers are removed after each call
    assert_eq!(relational.generate_feature_vector(&graph, &[]).unwrap(), x);
}


#[test]
fn test_aliased_adds_blocks() {
    log_init_test();
    let graph = abc();
    let params = FeatureParams::new(1, 1, MatchType::Hard, false, false, 30);
    let aliased_policy = VariantPolicy::from(Variant::Aliased);
    let plain_policy = VariantPolicy{pair_key : PairKeyMode::Standard, ..aliased_policy};
    let mut aliased = FeatureGenerator::with_policy(params, aliased_policy);
    let mut plain = FeatureGenerator::with_policy(params, plain_policy);
    let x = aliased.generate_feature_vector(&graph, &[]).unwrap();
    let z = plain.generate_feature_vector(&graph, &[]).unwrap();
    assert!(x.nnz() > z.nnz());
}


#[test]
fn test_gapped_merges_distances() {
    log_init_test();
    let graph = labelled_graph("g", &["A", "B", "C", "D"], &[(0, 1), (1, 2), (2, 3)]);
    let params = FeatureParams::new(1, 2, MatchType::Hard, false, false, 30);
    let gapped_policy = VariantPolicy::from(Variant::Gapped);
    let plain_policy = VariantPolicy{pair_key : PairKeyMode::Standard, ..gapped_policy};
    let x = FeatureGenerator::with_policy(params, gapped_policy).generate_feature_vector(&graph, &[]).unwrap();
    let z = FeatureGenerator::with_policy(params, plain_policy).generate_feature_vector(&graph, &[]).unwrap();
    assert_ne!(x, z);
    assert_eq!(value_sum(&x), value_sum(&z));
}


#[test]
fn test_directional() {
    log_init_test();
    let mut graph = AttributedGraph::new(String::from("line"));
    for (i, label) in ["A", "B", "C"].iter().enumerate() {
        graph.insert_vertex_with_attributes(Attributes::new(vec![label.to_string()], vec![i as f64, 0., 0.], vec![true, false, true]));
    }
    graph.insert_undirected_edge(0, 1, Attributes::default()).unwrap();
    graph.insert_undirected_edge(1, 2, Attributes::default()).unwrap();
    let params = FeatureParams::new(1, 1, MatchType::Hard, true, false, 30);
    let mut generator = FeatureGenerator::new(params, Variant::Directional);
    let x = generator.generate_feature_vector(&graph, &[]).unwrap();
    assert!((x.norm() - 1.).abs() < 1.0e-10);
    // coordinates are needed
    let err = generator.generate_feature_vector(&abc(), &[]).unwrap_err();
    assert_eq!(err, NspdkError::MissingCoordinates(0));
}


#[test]
fn test_min_kernel() {
    log_init_test();
    let graph = abc();
    let linear = FeatureParams::new(1, 2, MatchType::Hard, false, false, 30);
    let min_kernel = FeatureParams::new(1, 2, MatchType::Hard, true, true, 30);
    let z = FeatureGenerator::new(linear, Variant::Standard).generate_feature_vector(&graph, &[]).unwrap();
    let x = FeatureGenerator::new(min_kernel, Variant::Standard).generate_feature_vector(&graph, &[]).unwrap();
    // a pair seen from both ends counts 2 and expands into 2 unit features
    assert!(x.nnz() > z.nnz());
    assert_eq!(value_sum(&x), value_sum(&z));
}


#[test]
fn test_soft_match() {
    log_init_test();
    let g = labelled_graph("g", &["A", "B", "C"], &[(0, 1), (1, 2)]);
    let h = labelled_graph("h", &["A", "B", "D"], &[(0, 1), (1, 2)]);
    let params = FeatureParams::new(1, 1, MatchType::Soft, true, false, 30);
    let mut generator = FeatureGenerator::new(params, Variant::Standard);
    let x = generator.generate_feature_vector(&g, &[]).unwrap();
    assert!((x.norm() - 1.).abs() < 1.0e-10);
    let k_gh = generator.compute_kernel(&g, &h, &[], &[]).unwrap();
    assert!(k_gh > 0. && k_gh < 1.);
    let hard = FeatureParams::new(1, 1, MatchType::Hard, true, false, 30);
    assert_ne!(FeatureGenerator::new(hard, Variant::Standard).generate_feature_vector(&g, &[]).unwrap(), x);
}


#[test]
fn test_feature_map_output() {
    log_init_test();
    let graph = abc();
    let mut params = FeatureParams::new(1, 1, MatchType::Hard, true, false, 30);
    params.set_verbosity(1);
    let mut generator = FeatureGenerator::new(params, Variant::Standard);
    let x = generator.generate_feature_vector(&graph, &[]).unwrap();
    assert_eq!(generator.get_debug_info().nb_features(), x.nnz());
    let mut out = Vec::<u8>::new();
    generator.output_feature_map(&mut out).unwrap();
    let map = String::from_utf8(out).unwrap();
    assert_eq!(map.lines().count(), x.nnz());
    // pairs are shown as plain neighborhoods, roots starred
    assert!(map.contains("; A* ;"));
    assert!(map.contains("d:1 r:1"));
    let mut out = Vec::<u8>::new();
    generator.output_parameters(&mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().starts_with("radius : 1"));
}

} // end of mod tests
