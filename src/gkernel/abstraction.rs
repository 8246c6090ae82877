//! Abstraction layer.
//!
//! An abstraction vertex stands for a relation over other vertices. Its arcs flagged abstraction-of lead to the abstracted
//! vertices A, its arcs flagged part-of lead to the parts P. A and P are vectorized separately as first endpoint sets,
//! both vectors are reduced by min hashing and their cartesian product gives the features of the relation.
//!
//! The vector of the graph is the ordinary vector scaled by abstract_weight plus the sum of relation vectors scaled
//! by relation_weight.

use std::collections::HashMap;

use ahash::AHasher;
use probminhash::probminhasher::*;

use crate::error::Result;
use crate::graph::AttributedGraph;
use crate::tools::hash::hash_list_masked;

use super::generator::FeatureGenerator;
use super::policy::EndpointFilter;
use super::sparse::SparseVector;


impl FeatureGenerator {
    /// abstraction vertices among viewpoints, or all abstraction vertices if viewpoints is empty
    fn relation_endpoints(&self, graph : &AttributedGraph, viewpoints : &[usize]) -> Result<Vec<usize>> {
        let candidates : Vec<usize> = if viewpoints.is_empty() { (0..graph.vertex_count()).collect() } else { viewpoints.to_vec() };
        let mut relations = Vec::<usize>::new();
        for v in candidates {
            if graph.is_vertex_abstraction(v)? {
                relations.push(v);
            }
        }
        Ok(relations)
    }

    pub(crate) fn abstraction_feature_vector(&mut self, graph : &AttributedGraph, viewpoints : &[usize]) -> Result<SparseVector> {
        let params = *self.get_params();
        let abstraction = params.abstraction;
        let mut x = self.neighborhood_feature_vector(graph, viewpoints)?;
        x.scale(abstraction.abstract_weight);
        //
        let relations = self.relation_endpoints(graph, viewpoints)?;
        log::debug!("abstraction graph {:?} : {} relation vertices", graph.get_graph_id(), relations.len());
        let mut total = SparseVector::new();
        for &relation in &relations {
            let mut abstract_of = Vec::<usize>::new();
            let mut part_of = Vec::<usize>::new();
            for dest in graph.adjacent_vertices(relation)? {
                if graph.is_edge_abstraction_of(relation, dest)? {
                    abstract_of.push(dest);
                }
                if graph.is_edge_part_of(relation, dest)? {
                    part_of.push(dest);
                }
            }
            if abstract_of.is_empty() || part_of.is_empty() {
                continue;
            }
            let (abstract_z, part_z) = self.with_scope(abstraction.relation_radius, abstraction.relation_distance, EndpointFilter::KernelAlive,
                |generator| {
                    let abstract_z = generator.neighborhood_feature_vector(graph, &abstract_of)?;
                    let part_z = generator.neighborhood_feature_vector(graph, &part_of)?;
                    Ok((abstract_z, part_z))
                })?;
            total.add(&self.cartesian_product(&abstract_z, &part_z));
        }
        total.scale(abstraction.relation_weight);
        x.add(&total);
        Ok(x)
    } // end of abstraction_feature_vector

    /// keeps the components of x selected by a weighted min hash of size num_min_hash_functions
    pub fn min_hash(&self, x : &SparseVector) -> SparseVector {
        let nb_hash = self.get_params().abstraction.num_min_hash_functions;
        if nb_hash == 0 || x.is_empty() {
            return x.clone();
        }
        let mut v_k = HashMap::<usize, f64, ahash::RandomState>::default();
        for (feature, value) in x.iter() {
            if *value != 0. {
                v_k.insert(*feature as usize, value.abs());
            }
        }
        let mut probminhash3a = ProbMinHash3a::<usize, AHasher>::new(nb_hash, 0);
        probminhash3a.hash_weigthed_hashmap(&v_k);
        let mut y = SparseVector::new();
        for feature in probminhash3a.get_signature() {
            let feature = *feature as u32;
            y.set(feature, x.get(feature));
        }
        y
    } // end of min_hash

    /// features fx x fz with value vx * vz, after min hash reduction of both sides
    pub fn cartesian_product(&self, x : &SparseVector, z : &SparseVector) -> SparseVector {
        let mask = self.get_params().get_feature_mask();
        let x = self.min_hash(x);
        let z = self.min_hash(z);
        let mut y = SparseVector::new();
        for (fx, vx) in x.iter() {
            for (fz, vz) in z.iter() {
                y.add_to(hash_list_masked(&[*fx, *fz], mask), vx * vz);
            }
        }
        y
    } // end of cartesian_product
} // end of impl FeatureGenerator


//========================================================================================

#[cfg(test)]
mod tests {

use super::*;
use crate::graph::{Attributes, ABSTRACTION_ID};
use crate::gkernel::params::{AbstractionParams, FeatureParams, MatchType};
use crate::gkernel::policy::Variant;

#[allow(unused)]
fn log_init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// line A-B-C-D and a relation vertex abstracting A with parts C and D
fn relation_graph() -> AttributedGraph {
    let mut graph = AttributedGraph::new(String::from("relation"));
    for label in ["A", "B", "C", "D"] {
        graph.insert_vertex_with_attributes(Attributes::new(vec![label.to_string()], Vec::new(), vec![true, false, true]));
    }
    for v in 1..4 {
        graph.insert_undirected_edge(v - 1, v, Attributes::default()).unwrap();
    }
    let relation = graph.insert_vertex_with_attributes(Attributes::new(vec![String::from("R")], Vec::new(), Vec::new()));
    graph.set_vertex_status_attribute(relation, ABSTRACTION_ID, true).unwrap();
    graph.insert_edge(relation, 0).unwrap();
    graph.set_edge_abstraction_of(relation, 0, true).unwrap();
    for v in [2, 3] {
        graph.insert_edge(relation, v).unwrap();
        graph.set_edge_part_of(relation, v, true).unwrap();
    }
    graph
}


#[test]
fn test_abstraction_layer() {
    log_init_test();
    let graph = relation_graph();
    graph.compute_pairwise_distance_information(Some(2), Some(1), &[]).unwrap();
    let mut params = FeatureParams::new(1, 2, MatchType::Hard, true, false, 30);
    let concrete = FeatureGenerator::new(params, Variant::Memoized).generate_feature_vector(&graph, &[]).unwrap();
    //
    let mut generator = FeatureGenerator::new(params, Variant::Abstraction);
    let x = generator.generate_feature_vector(&graph, &[]).unwrap();
    assert!(x.nnz() > concrete.nnz());
    // the relation scope does not leak into the generator parameters
    assert_eq!(generator.get_params().get_radius(), 1);
    // without relation weight only the concrete part is left
    params.set_abstraction_params(AbstractionParams{relation_weight : 0., ..AbstractionParams::default()});
    let mut generator = FeatureGenerator::new(params, Variant::Abstraction);
    assert_eq!(generator.generate_feature_vector(&graph, &[]).unwrap(), concrete);
}


#[test]
fn test_min_hash_selection() {
    log_init_test();
    let mut x = SparseVector::new();
    for i in 0..50u32 {
        x.set(i * 7, 1. + i as f64);
    }
    let mut params = FeatureParams::default();
    params.set_abstraction_params(AbstractionParams{num_min_hash_functions : 5, ..AbstractionParams::default()});
    let generator = FeatureGenerator::new(params, Variant::Abstraction);
    let y = generator.min_hash(&x);
    assert!(!y.is_empty() && y.nnz() <= 5);
    for (feature, value) in y.iter() {
        assert_eq!(x.get(*feature), *value);
    }
    assert!(generator.min_hash(&SparseVector::new()).is_empty());
    // no hash function keeps everything
    params.set_abstraction_params(AbstractionParams{num_min_hash_functions : 0, ..AbstractionParams::default()});
    let generator = FeatureGenerator::new(params, Variant::Abstraction);
    assert_eq!(generator.min_hash(&x), x);
}


#[test]
fn test_cartesian_product() {
    let mut params = FeatureParams::default();
    params.set_abstraction_params(AbstractionParams{num_min_hash_functions : 0, ..AbstractionParams::default()});
    let generator = FeatureGenerator::new(params, Variant::Abstraction);
    let mut x = SparseVector::new();
    x.set(1, 2.);
    x.set(2, 3.);
    let mut z = SparseVector::new();
    z.set(5, 0.5);
    let y = generator.cartesian_product(&x, &z);
    assert_eq!(y.nnz(), 2);
    assert_eq!(y.get(hash_list_masked(&[1, 5], params.get_feature_mask())), 1.);
    assert_eq!(y.get(hash_list_masked(&[2, 5], params.get_feature_mask())), 1.5);
    assert!(generator.cartesian_product(&x, &SparseVector::new()).is_empty());
}

} // end of mod tests
