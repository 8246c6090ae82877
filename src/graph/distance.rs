//! Bounded breadth first distances between vertex pairs.
//!
//! The index stores, for each root vertex, the hop distance to every vertex reached within the bound
//! and for each (root, distance) the list of vertices found at exactly that distance.
//! Dead and abstraction vertices are never entered by the exploration.
//! The index is always rebuilt from scratch, both maps together.

use std::collections::{BTreeMap, VecDeque};

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use super::attributes::*;
use super::pgraph::PGraph;


// a vertex the exploration may enter or start from
pub(crate) fn is_traversable(graph : &PGraph, v : usize) -> bool {
    let attributes = graph[NodeIndex::new(v)].get_attributes();
    !attributes.status_or_default(DEAD_ID) && !attributes.status_or_default(ABSTRACTION_ID)
}


#[derive(Clone, Debug, Default)]
pub struct DistanceIndex {
    /// exploration bound used at construction
    bound : usize,
    /// roots explored, in the order they were given
    roots : Vec<usize>,
    /// (src, dest) -> distance
    src_dest_distance : BTreeMap<(usize, usize), usize>,
    /// (src, distance) -> vertices at distance, sorted by id
    src_distance_dest : BTreeMap<(usize, usize), Vec<usize>>,
} // end of struct DistanceIndex


impl DistanceIndex {
    /// explores from each traversable root up to bound hops
    pub(crate) fn compute(graph : &PGraph, roots : &[usize], bound : usize) -> Self {
        let mut index = DistanceIndex{bound, roots : roots.to_vec(), ..Default::default()};
        for &root in roots {
            if root < graph.node_count() && is_traversable(graph, root) {
                index.single_vertex_bfs(graph, root);
            }
        }
        log::debug!("distance index computed, nb roots : {}, bound : {}, nb pairs : {}",
                roots.len(), bound, index.src_dest_distance.len());
        index
    } // end of compute


    fn single_vertex_bfs(&mut self, graph : &PGraph, root : usize) {
        let mut dist = BTreeMap::<usize, usize>::new();
        let mut queue = VecDeque::<usize>::new();
        dist.insert(root, 0);
        queue.push_back(root);
        while let Some(u) = queue.pop_front() {
            let du = dist[&u];
            if du >= self.bound {
                continue;
            }
            for edge in graph.edges_directed(NodeIndex::new(u), Direction::Outgoing) {
                let v = edge.target().index();
                if !dist.contains_key(&v) && is_traversable(graph, v) {
                    dist.insert(v, du + 1);
                    queue.push_back(v);
                }
            }
        }
        for (v, d) in dist {
            self.src_dest_distance.insert((root, v), d);
            self.src_distance_dest.entry((root, d)).or_default().push(v);
        }
    } // end of single_vertex_bfs


    pub fn get_bound(&self) -> usize { self.bound }

    pub fn get_roots(&self) -> &[usize] { &self.roots }

    /// number of (src, dest) pairs recorded
    pub fn len(&self) -> usize { self.src_dest_distance.len() }

    pub fn is_empty(&self) -> bool { self.src_dest_distance.is_empty() }

    /// hop distance or None if dest was not reached from src
    pub fn distance(&self, src : usize, dest : usize) -> Option<usize> {
        self.src_dest_distance.get(&(src, dest)).copied()
    }

    /// vertices at exactly distance d from src, empty if none
    pub fn fixed_distance(&self, src : usize, d : usize) -> &[usize] {
        self.src_distance_dest.get(&(src, d)).map(|v| v.as_slice()).unwrap_or(&[])
    }
} // end of impl DistanceIndex
