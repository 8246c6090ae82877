//! Batch vectorization and gram matrix of a collection of graphs.
//!
//! Graphs are vectorized in parallel, each rayon worker owning its own [FeatureGenerator].
//! A graph refreshes its distance cache while being vectorized, so the batch needs mutable (exclusive) access to the graphs.

use anyhow::{anyhow, Context};
use cpu_time::ProcessTime;
use std::time::SystemTime;

use ndarray::{Array2, Axis};
use rayon::prelude::*;

use crate::graph::AttributedGraph;

use super::generator::FeatureGenerator;
use super::params::FeatureParams;
use super::policy::Variant;
use super::sparse::SparseVector;


/// vectors of all graphs, each vectorized from its flagged viewpoints
pub fn feature_vectors(params : &FeatureParams, variant : Variant, graphs : &mut [AttributedGraph]) -> anyhow::Result<Vec<SparseVector>> {
    let cpu_start = ProcessTime::now();
    let sys_start = SystemTime::now();
    let res : Vec<Result<SparseVector, String>> = graphs.par_iter_mut().enumerate()
        .map_init(|| FeatureGenerator::new(*params, variant),
            |generator, (rank, graph)| {
                generator.generate_feature_vector(graph, &[])
                    .map_err(|e| format!("graph rank {} id {:?} : {}", rank, graph.get_graph_id(), e))
            })
        .collect();
    let mut vectors = Vec::<SparseVector>::with_capacity(res.len());
    for v in res {
        vectors.push(v.map_err(|e| anyhow!(e)).context("feature_vectors failed")?);
    }
    log::info!("feature_vectors : {} graphs, sys time(s) {:.2e} cpu time(s) {:.2e}", vectors.len(),
        sys_start.elapsed().map(|t| t.as_secs_f64()).unwrap_or(0.), cpu_start.elapsed().as_secs_f64());
    Ok(vectors)
} // end of feature_vectors


/// matrix of kernel values between vectors, symmetric
pub fn gram_from_vectors(vectors : &[SparseVector]) -> Array2<f64> {
    let nb = vectors.len();
    let mut gram = Array2::<f64>::zeros((nb, nb));
    gram.axis_iter_mut(Axis(0)).into_par_iter().enumerate().for_each(|(i, mut row)| {
        for j in 0..nb {
            row[j] = vectors[i].dot(&vectors[j]);
        }
    });
    gram
}


/// vectorizes all graphs and returns their gram matrix
pub fn gram_matrix(params : &FeatureParams, variant : Variant, graphs : &mut [AttributedGraph]) -> anyhow::Result<Array2<f64>> {
    let vectors = feature_vectors(params, variant, graphs)?;
    let cpu_start = ProcessTime::now();
    let gram = gram_from_vectors(&vectors);
    log::info!("gram_matrix : dim {}, cpu time(s) {:.2e}", gram.nrows(), cpu_start.elapsed().as_secs_f64());
    Ok(gram)
} // end of gram_matrix


//========================================================================================

// end of mod tests
