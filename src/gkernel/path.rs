//! Union of thick shortest paths.
//!
//! For each first endpoint src we look for the farthest distance dt in [2, thickness_distance] at which vertices exist.
//! For each dest at distance dt, the union of shortest paths between src and dest, thickened by the neighborhoods
//! of radius thickness of its vertices, is induced as a graph and vectorized.
//! The vector of the graph is the sum of these path vectors.

use std::collections::BTreeSet;

use crate::error::{NspdkError, Result};
use crate::graph::AttributedGraph;

use super::generator::FeatureGenerator;
use super::policy::Variant;
use super::sparse::SparseVector;


impl FeatureGenerator {
    pub(crate) fn union_thick_path_feature_vector(&mut self, graph : &AttributedGraph, viewpoints : &[usize]) -> Result<SparseVector> {
        let endpoints = self.first_endpoints(graph, viewpoints)?;
        if endpoints.is_empty() {
            return Err(NspdkError::EmptyEndpoints(graph.get_graph_id().to_string()));
        }
        let path = self.get_params().path;
        self.path_vectors.clear();
        // paths need distances from every vertex
        graph.compute_pairwise_distance_information(Some(path.thickness_distance), Some(path.thickness), &[])?;
        let mut inner = FeatureGenerator::new(*self.get_params(), Variant::Standard);
        let mut x = SparseVector::new();
        for &src in &endpoints {
            let mut z_vertex = SparseVector::new();
            for dt in (2..=path.thickness_distance).rev() {
                let dests = graph.get_fixed_distance_vertex_list(src, dt);
                for &dest in &dests {
                    if let Some(z) = self.path_vectors.get(&(src, dest)) {
                        z_vertex.add(z);
                        continue;
                    }
                    let vertices : BTreeSet<usize> = graph.get_union_thick_shortest_paths_vertex_list(src, dest, dt, path.thickness)
                        .into_iter().collect();
                    let (induced, root) = graph.induced_rooted_subgraph(&vertices, src)?;
                    log::trace!("thick path {} -> {} distance {} : {} vertices", src, dest, dt, induced.vertex_count());
                    let has_viewpoint = (0..induced.vertex_count()).any(|v| induced.is_vertex_viewpoint(v).unwrap_or(false));
                    let inner_viewpoints = if has_viewpoint { Vec::new() } else { vec![root] };
                    let z = inner.neighborhood_feature_vector(&induced, &inner_viewpoints)?;
                    z_vertex.add(&z);
                    self.path_vectors.insert((src, dest), z);
                }
                if !dests.is_empty() {
                    break;
                }
            }
            x.add(&z_vertex);
        }
        log::debug!("union thick path graph {:?} : {} path vectors", graph.get_graph_id(), self.path_vectors.len());
        Ok(x)
    } // end of union_thick_path_feature_vector
} // end of impl FeatureGenerator


//========================================================================================

// end of mod tests
