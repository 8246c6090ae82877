//! The attributed graph store, on top of a petgraph directed graph.
//!
//! Vertices and edges are indexed densely in insertion order and are never removed,
//! a vertex is logically removed by setting its dead status.
//! One inserted edge is one directed arc. An undirected graph must hold both arcs,
//! [AttributedGraph::insert_undirected_edge] does that in one call.
//!
//! The graph owns a cache of bounded pairwise distances ([DistanceIndex]). The cache is rebuilt
//! when the topology changed (vertex or edge inserted, status modified) or when a different bound or root set is requested.
//! Distance queries refresh a stale cache themselves, so the cache lives in a `RefCell`
//! and a graph must not be shared between threads while features are generated from it.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

use petgraph::graph::{Graph, NodeIndex, EdgeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};

use crate::error::{NspdkError, Result};

use super::attributes::*;
use super::distance::*;

/// The petgraph structure we store vertices and arcs in.
pub type PGraph = Graph<Vweight, Eweight, Directed, u32>;


#[derive(Clone, Debug)]
pub struct AttributedGraph {
    /// identity used by memoized feature generation
    graph_id : String,
    graph : PGraph,
    /// set by insertions and status modifications, reset by a distance computation
    topology_changed : Cell<bool>,
    /// last max distance requested
    max_distance : Cell<usize>,
    /// last max radius requested
    max_radius : Cell<usize>,
    distances : RefCell<DistanceIndex>,
} // end of struct AttributedGraph


impl Default for AttributedGraph {
    fn default() -> Self {
        AttributedGraph::new(String::new())
    }
}


impl AttributedGraph {
    /// an empty graph. Distance bounds are unlimited until a computation sets them.
    pub fn new(graph_id : String) -> Self {
        AttributedGraph{graph_id, graph : PGraph::default(), topology_changed : Cell::new(true),
            max_distance : Cell::new(usize::MAX), max_radius : Cell::new(usize::MAX),
            distances : RefCell::new(DistanceIndex::default())}
    }

    pub fn get_graph_id(&self) -> &str { &self.graph_id }

    pub fn set_graph_id(&mut self, graph_id : String) { self.graph_id = graph_id; }

    pub fn get_pgraph(&self) -> &PGraph { &self.graph }

    pub fn vertex_count(&self) -> usize { self.graph.node_count() }

    pub fn edge_count(&self) -> usize { self.graph.edge_count() }

    pub fn is_empty(&self) -> bool { self.graph.node_count() == 0 }

    pub fn is_topology_changed(&self) -> bool { self.topology_changed.get() }

    fn check_vertex(&self, id : usize) -> Result<NodeIndex<u32>> {
        if id >= self.graph.node_count() {
            return Err(NspdkError::VertexOutOfRange{id, nb_vertex : self.graph.node_count()});
        }
        Ok(NodeIndex::new(id))
    }

    fn check_edge(&self, id : usize) -> Result<EdgeIndex<u32>> {
        if id >= self.graph.edge_count() {
            return Err(NspdkError::EdgeOutOfRange{id, nb_edge : self.graph.edge_count()});
        }
        Ok(EdgeIndex::new(id))
    }

    //========================================================
    // insertion
    //========================================================

    /// inserts a vertex without attributes and returns its id
    pub fn insert_vertex(&mut self) -> usize {
        self.insert_vertex_with_attributes(Attributes::default())
    }

    pub fn insert_vertex_with_attributes(&mut self, attributes : Attributes) -> usize {
        let id = self.graph.node_count();
        self.graph.add_node(Vweight::new(id.to_string(), attributes));
        self.topology_changed.set(true);
        id
    }

    /// inserts an arc from src to dest and returns its edge id
    pub fn insert_edge(&mut self, src : usize, dest : usize) -> Result<usize> {
        self.insert_edge_with_attributes(src, dest, Attributes::default())
    }

    pub fn insert_edge_with_attributes(&mut self, src : usize, dest : usize, attributes : Attributes) -> Result<usize> {
        let src_idx = self.check_vertex(src)?;
        let dest_idx = self.check_vertex(dest)?;
        let edge = self.graph.add_edge(src_idx, dest_idx, Eweight::new(attributes));
        self.topology_changed.set(true);
        Ok(edge.index())
    }

    /// inserts both arcs u->v and v->u with the same attributes, returns the two edge ids
    pub fn insert_undirected_edge(&mut self, u : usize, v : usize, attributes : Attributes) -> Result<(usize, usize)> {
        let forward = self.insert_edge_with_attributes(u, v, attributes.clone())?;
        let backward = self.insert_edge_with_attributes(v, u, attributes)?;
        Ok((forward, backward))
    }

    //========================================================
    // topology access
    //========================================================

    /// destinations of arcs leaving id that are not dead, in arc insertion order
    pub fn adjacent_vertices(&self, id : usize) -> Result<Vec<usize>> {
        let idx = self.check_vertex(id)?;
        let mut adjacent : Vec<usize> = self.graph.edges_directed(idx, Direction::Outgoing)
            .map(|e| e.target().index())
            .filter(|v| !self.graph[NodeIndex::new(*v)].get_attributes().status_or_default(DEAD_ID))
            .collect();
        // petgraph yields most recent arcs first
        adjacent.reverse();
        Ok(adjacent)
    } // end of adjacent_vertices

    /// id of the first inserted arc from src to dest
    pub fn get_edge_id(&self, src : usize, dest : usize) -> Result<usize> {
        let src_idx = self.check_vertex(src)?;
        self.check_vertex(dest)?;
        self.graph.edges_directed(src_idx, Direction::Outgoing)
            .filter(|e| e.target().index() == dest)
            .last()
            .map(|e| e.id().index())
            .ok_or(NspdkError::MissingArc{src, dest})
    } // end of get_edge_id

    pub fn is_edge(&self, src : usize, dest : usize) -> bool {
        self.get_edge_id(src, dest).is_ok()
    }

    pub fn get_edge_source(&self, edge : usize) -> Result<usize> {
        let e = self.check_edge(edge)?;
        self.graph.edge_endpoints(e).map(|(s, _)| s.index()).ok_or(NspdkError::EdgeOutOfRange{id : edge, nb_edge : self.edge_count()})
    }

    pub fn get_edge_destination(&self, edge : usize) -> Result<usize> {
        let e = self.check_edge(edge)?;
        self.graph.edge_endpoints(e).map(|(_, d)| d.index()).ok_or(NspdkError::EdgeOutOfRange{id : edge, nb_edge : self.edge_count()})
    }

    //========================================================
    // vertex attributes
    //========================================================

    pub fn get_vertex_attributes(&self, id : usize) -> Result<&Attributes> {
        let idx = self.check_vertex(id)?;
        Ok(self.graph[idx].get_attributes())
    }

    fn get_vertex_attributes_mut(&mut self, id : usize) -> Result<&mut Attributes> {
        let idx = self.check_vertex(id)?;
        Ok(self.graph[idx].get_attributes_mut())
    }

    pub fn get_vertex_symbolic_id(&self, id : usize) -> Result<&str> {
        let idx = self.check_vertex(id)?;
        Ok(self.graph[idx].get_symbolic_id())
    }

    pub fn set_vertex_symbolic_id(&mut self, id : usize, symbolic_id : String) -> Result<()> {
        let idx = self.check_vertex(id)?;
        self.graph[idx].set_symbolic_id(symbolic_id);
        Ok(())
    }

    pub fn get_vertex_symbolic_attribute_list(&self, id : usize) -> Result<&[String]> {
        Ok(self.get_vertex_attributes(id)?.get_symbolic())
    }

    pub fn get_vertex_numeric_attribute_list(&self, id : usize) -> Result<&[f64]> {
        Ok(self.get_vertex_attributes(id)?.get_numeric())
    }

    pub fn get_vertex_status_attribute_list(&self, id : usize) -> Result<&[bool]> {
        Ok(self.get_vertex_attributes(id)?.get_status())
    }

    pub fn get_vertex_symbolic_attribute(&self, id : usize, attribute : usize) -> Result<&str> {
        self.get_vertex_attributes(id)?.get_symbolic().get(attribute).map(|s| s.as_str())
            .ok_or(NspdkError::AttributeOutOfRange{id, attribute})
    }

    pub fn get_vertex_numeric_attribute(&self, id : usize, attribute : usize) -> Result<f64> {
        self.get_vertex_attributes(id)?.get_numeric().get(attribute).copied()
            .ok_or(NspdkError::AttributeOutOfRange{id, attribute})
    }

    pub fn get_vertex_status_attribute(&self, id : usize, attribute : usize) -> Result<bool> {
        self.get_vertex_attributes(id)?.get_status().get(attribute).copied()
            .ok_or(NspdkError::AttributeOutOfRange{id, attribute})
    }

    pub fn set_vertex_symbolic_attribute_list(&mut self, id : usize, list : Vec<String>) -> Result<()> {
        self.get_vertex_attributes_mut(id)?.set_symbolic_list(list);
        Ok(())
    }

    pub fn set_vertex_numeric_attribute_list(&mut self, id : usize, list : Vec<f64>) -> Result<()> {
        self.get_vertex_attributes_mut(id)?.set_numeric_list(list);
        Ok(())
    }

    pub fn set_vertex_status_attribute_list(&mut self, id : usize, list : Vec<bool>) -> Result<()> {
        self.get_vertex_attributes_mut(id)?.set_status_list(list);
        self.topology_changed.set(true);
        Ok(())
    }

    pub fn set_vertex_symbolic_attribute(&mut self, id : usize, attribute : usize, value : String) -> Result<()> {
        self.get_vertex_attributes_mut(id)?.set_symbolic(attribute, value);
        Ok(())
    }

    pub fn set_vertex_numeric_attribute(&mut self, id : usize, attribute : usize, value : f64) -> Result<()> {
        self.get_vertex_attributes_mut(id)?.set_numeric(attribute, value);
        Ok(())
    }

    pub fn set_vertex_status_attribute(&mut self, id : usize, attribute : usize, value : bool) -> Result<()> {
        self.get_vertex_attributes_mut(id)?.set_status(attribute, value);
        self.topology_changed.set(true);
        Ok(())
    }

    //========================================================
    // edge attributes, by edge id
    //========================================================

    pub fn get_edge_attributes(&self, edge : usize) -> Result<&Attributes> {
        let e = self.check_edge(edge)?;
        Ok(self.graph[e].get_attributes())
    }

    fn get_edge_attributes_mut(&mut self, edge : usize) -> Result<&mut Attributes> {
        let e = self.check_edge(edge)?;
        Ok(self.graph[e].get_attributes_mut())
    }

    pub fn get_edge_symbolic_attribute_list(&self, edge : usize) -> Result<&[String]> {
        Ok(self.get_edge_attributes(edge)?.get_symbolic())
    }

    pub fn get_edge_numeric_attribute_list(&self, edge : usize) -> Result<&[f64]> {
        Ok(self.get_edge_attributes(edge)?.get_numeric())
    }

    pub fn get_edge_status_attribute_list(&self, edge : usize) -> Result<&[bool]> {
        Ok(self.get_edge_attributes(edge)?.get_status())
    }

    pub fn set_edge_symbolic_attribute_list(&mut self, edge : usize, list : Vec<String>) -> Result<()> {
        self.get_edge_attributes_mut(edge)?.set_symbolic_list(list);
        Ok(())
    }

    pub fn set_edge_numeric_attribute_list(&mut self, edge : usize, list : Vec<f64>) -> Result<()> {
        self.get_edge_attributes_mut(edge)?.set_numeric_list(list);
        Ok(())
    }

    pub fn set_edge_status_attribute_list(&mut self, edge : usize, list : Vec<bool>) -> Result<()> {
        self.get_edge_attributes_mut(edge)?.set_status_list(list);
        self.topology_changed.set(true);
        Ok(())
    }

    pub fn set_edge_symbolic_attribute(&mut self, edge : usize, attribute : usize, value : String) -> Result<()> {
        self.get_edge_attributes_mut(edge)?.set_symbolic(attribute, value);
        Ok(())
    }

    pub fn set_edge_numeric_attribute(&mut self, edge : usize, attribute : usize, value : f64) -> Result<()> {
        self.get_edge_attributes_mut(edge)?.set_numeric(attribute, value);
        Ok(())
    }

    pub fn set_edge_status_attribute(&mut self, edge : usize, attribute : usize, value : bool) -> Result<()> {
        self.get_edge_attributes_mut(edge)?.set_status(attribute, value);
        self.topology_changed.set(true);
        Ok(())
    }

    //========================================================
    // labels and semantic status
    //========================================================

    /// symbolic attribute 0, empty if never set
    pub fn get_vertex_label(&self, id : usize) -> Result<&str> {
        Ok(self.get_vertex_attributes(id)?.label())
    }

    pub fn set_vertex_label(&mut self, id : usize, label : &str) -> Result<()> {
        self.set_vertex_symbolic_attribute(id, LABEL_ATTRIBUTE_ID, label.to_string())
    }

    /// label of the arc src -> dest, empty if never set
    pub fn get_edge_label(&self, src : usize, dest : usize) -> Result<&str> {
        let edge = self.get_edge_id(src, dest)?;
        Ok(self.get_edge_attributes(edge)?.label())
    }

    pub fn set_edge_label(&mut self, src : usize, dest : usize, label : &str) -> Result<()> {
        let edge = self.get_edge_id(src, dest)?;
        self.set_edge_symbolic_attribute(edge, LABEL_ATTRIBUTE_ID, label.to_string())
    }

    fn vertex_flag(&self, id : usize, flag : usize) -> Result<bool> {
        Ok(self.get_vertex_attributes(id)?.status_or_default(flag))
    }

    fn edge_flag(&self, src : usize, dest : usize, flag : usize) -> Result<bool> {
        let edge = self.get_edge_id(src, dest)?;
        Ok(self.get_edge_attributes(edge)?.status_or_default(flag))
    }

    pub fn is_vertex_kernel_point(&self, id : usize) -> Result<bool> { self.vertex_flag(id, KERNEL_POINT_ID) }

    pub fn is_vertex_kind(&self, id : usize) -> Result<bool> { self.vertex_flag(id, KIND_ID) }

    pub fn is_vertex_viewpoint(&self, id : usize) -> Result<bool> { self.vertex_flag(id, VIEWPOINT_ID) }

    pub fn is_vertex_dead(&self, id : usize) -> Result<bool> { self.vertex_flag(id, DEAD_ID) }

    pub fn is_vertex_alive(&self, id : usize) -> Result<bool> { Ok(!self.vertex_flag(id, DEAD_ID)?) }

    pub fn is_vertex_abstraction(&self, id : usize) -> Result<bool> { self.vertex_flag(id, ABSTRACTION_ID) }

    pub fn is_edge_abstraction_of(&self, src : usize, dest : usize) -> Result<bool> { self.edge_flag(src, dest, EDGE_ABSTRACTION_OF_ID) }

    pub fn is_edge_part_of(&self, src : usize, dest : usize) -> Result<bool> { self.edge_flag(src, dest, EDGE_PART_OF_ID) }

    pub fn set_vertex_kernel_point(&mut self, id : usize, value : bool) -> Result<()> { self.set_vertex_status_attribute(id, KERNEL_POINT_ID, value) }

    pub fn set_vertex_kind(&mut self, id : usize, value : bool) -> Result<()> { self.set_vertex_status_attribute(id, KIND_ID, value) }

    pub fn set_vertex_viewpoint(&mut self, id : usize, value : bool) -> Result<()> { self.set_vertex_status_attribute(id, VIEWPOINT_ID, value) }

    pub fn set_vertex_dead(&mut self, id : usize) -> Result<()> { self.set_vertex_status_attribute(id, DEAD_ID, true) }

    pub fn set_vertex_alive(&mut self, id : usize) -> Result<()> { self.set_vertex_status_attribute(id, DEAD_ID, false) }

    pub fn set_vertex_abstraction(&mut self, id : usize, value : bool) -> Result<()> { self.set_vertex_status_attribute(id, ABSTRACTION_ID, value) }

    pub fn set_edge_abstraction_of(&mut self, src : usize, dest : usize, value : bool) -> Result<()> {
        let edge = self.get_edge_id(src, dest)?;
        self.set_edge_status_attribute(edge, EDGE_ABSTRACTION_OF_ID, value)
    }

    pub fn set_edge_part_of(&mut self, src : usize, dest : usize, value : bool) -> Result<()> {
        let edge = self.get_edge_id(src, dest)?;
        self.set_edge_status_attribute(edge, EDGE_PART_OF_ID, value)
    }

    /// marks dead every vertex whose label is label, returns the number of vertices killed
    pub fn kill_vertices(&mut self, label : &str) -> usize {
        let to_kill : Vec<usize> = self.graph.node_indices()
            .filter(|idx| self.graph[*idx].get_attributes().label() == label)
            .map(|idx| idx.index())
            .collect();
        for &v in &to_kill {
            self.graph[NodeIndex::new(v)].get_attributes_mut().set_status(DEAD_ID, true);
        }
        if !to_kill.is_empty() {
            self.topology_changed.set(true);
        }
        log::debug!("kill_vertices label {:?} : {} vertices", label, to_kill.len());
        to_kill.len()
    } // end of kill_vertices

    //========================================================
    // distances
    //========================================================

    // roots the exploration actually starts from
    fn candidate_roots(&self, viewpoints : &[usize]) -> Vec<usize> {
        if viewpoints.is_empty() {
            (0..self.vertex_count()).filter(|v| is_traversable(&self.graph, *v)).collect()
        }
        else {
            viewpoints.iter().copied().filter(|v| is_traversable(&self.graph, *v)).collect()
        }
    }

    fn rebuild_distances(&self, roots : &[usize]) {
        let bound = self.max_distance.get().max(self.max_radius.get());
        let index = DistanceIndex::compute(&self.graph, roots, bound);
        *self.distances.borrow_mut() = index;
        self.topology_changed.set(false);
    }

    /// Computes distances from each live, non abstraction viewpoint up to max(max_distance, max_radius).
    /// An empty viewpoint list means every vertex. A bound given as None keeps the previous one.
    /// Nothing is done if the cached index was built with the same roots and bound on an unchanged topology.
    pub fn compute_pairwise_distance_information(&self, max_distance : Option<usize>, max_radius : Option<usize>,
                viewpoints : &[usize]) -> Result<()> {
        self.update_distance_request(max_distance, max_radius, viewpoints)?;
        let roots = self.candidate_roots(viewpoints);
        let bound = self.max_distance.get().max(self.max_radius.get());
        let stale = {
            let index = self.distances.borrow();
            self.topology_changed.get() || index.get_bound() != bound || index.get_roots() != roots.as_slice()
        };
        if stale {
            self.rebuild_distances(&roots);
        }
        Ok(())
    } // end of compute_pairwise_distance_information

    /// same as [Self::compute_pairwise_distance_information] but always rebuilds
    pub fn force_pairwise_distance_information(&self, max_distance : Option<usize>, max_radius : Option<usize>,
                viewpoints : &[usize]) -> Result<()> {
        self.update_distance_request(max_distance, max_radius, viewpoints)?;
        let roots = self.candidate_roots(viewpoints);
        self.rebuild_distances(&roots);
        Ok(())
    }

    fn update_distance_request(&self, max_distance : Option<usize>, max_radius : Option<usize>, viewpoints : &[usize]) -> Result<()> {
        for &v in viewpoints {
            self.check_vertex(v)?;
        }
        if let Some(d) = max_distance {
            self.max_distance.set(d);
        }
        if let Some(r) = max_radius {
            self.max_radius.set(r);
        }
        Ok(())
    }

    // a query on a stale index recomputes from every vertex with the stored bounds
    fn refresh_if_stale(&self) {
        if self.topology_changed.get() {
            log::trace!("graph {:?} distance index stale, recomputing", self.graph_id);
            let roots = self.candidate_roots(&[]);
            self.rebuild_distances(&roots);
        }
    }

    /// vertices at exactly distance d from src, sorted by id. Empty if none or src was not explored.
    pub fn get_fixed_distance_vertex_list(&self, src : usize, d : usize) -> Vec<usize> {
        self.refresh_if_stale();
        self.distances.borrow().fixed_distance(src, d).to_vec()
    }

    /// hop distance from src to dest, None if not recorded
    pub fn pairwise_distance(&self, src : usize, dest : usize) -> Option<usize> {
        self.refresh_if_stale();
        self.distances.borrow().distance(src, dest)
    }

    /// number of (src, dest) pairs in the distance index
    pub fn distance_index_len(&self) -> usize {
        self.distances.borrow().len()
    }

    /// vertices within radius of src, sorted
    pub fn get_neighborhood_vertex_list(&self, src : usize, radius : usize) -> Vec<usize> {
        self.refresh_if_stale();
        let index = self.distances.borrow();
        let set : BTreeSet<usize> = (0..=radius).flat_map(|d| index.fixed_distance(src, d).iter().copied()).collect();
        set.into_iter().collect()
    }

    /// vertices lying on some shortest path of length distance between src and dest.
    /// Needs both src and dest among the explored roots.
    pub fn get_union_shortest_paths_vertex_list(&self, src : usize, dest : usize, distance : usize) -> Vec<usize> {
        self.refresh_if_stale();
        let index = self.distances.borrow();
        let mut set = BTreeSet::<usize>::new();
        for i in 0..=distance {
            let from_dest : BTreeSet<usize> = index.fixed_distance(dest, distance - i).iter().copied().collect();
            set.extend(index.fixed_distance(src, i).iter().filter(|v| from_dest.contains(v)));
        }
        set.into_iter().collect()
    } // end of get_union_shortest_paths_vertex_list

    /// union of the neighborhoods of radius thickness of the vertices on shortest paths between src and dest
    pub fn get_union_thick_shortest_paths_vertex_list(&self, src : usize, dest : usize, distance : usize, thickness : usize) -> Vec<usize> {
        let path = self.get_union_shortest_paths_vertex_list(src, dest, distance);
        let set : BTreeSet<usize> = path.iter().flat_map(|v| self.get_neighborhood_vertex_list(*v, thickness)).collect();
        set.into_iter().collect()
    }

    //========================================================
    // derived graphs and diagnostics
    //========================================================

    /// Builds the graph induced by vertices, copying attributes and the arcs between them.
    /// New ids follow the increasing order of old ids. Returns the graph and the new id of root.
    pub fn induced_rooted_subgraph(&self, vertices : &BTreeSet<usize>, root : usize) -> Result<(AttributedGraph, usize)> {
        for &v in vertices {
            self.check_vertex(v)?;
        }
        let new_root = vertices.iter().position(|v| *v == root)
            .ok_or_else(|| NspdkError::GraphCheck(format!("root {} not in induced vertex set", root)))?;
        let mut induced = AttributedGraph::new(self.graph_id.clone());
        let old_ids : Vec<usize> = vertices.iter().copied().collect();
        for &v in &old_ids {
            induced.graph.add_node(self.graph[NodeIndex::new(v)].clone());
        }
        for (new_src, &old_src) in old_ids.iter().enumerate() {
            let mut arcs : Vec<(usize, Eweight)> = self.graph.edges_directed(NodeIndex::new(old_src), Direction::Outgoing)
                .filter_map(|e| vertices.iter().position(|v| *v == e.target().index()).map(|new_dest| (new_dest, e.weight().clone())))
                .collect();
            arcs.reverse();
            for (new_dest, weight) in arcs {
                induced.graph.add_edge(NodeIndex::new(new_src), NodeIndex::new(new_dest), weight);
            }
        }
        Ok((induced, new_root))
    } // end of induced_rooted_subgraph

    /// structural soundness needed before feature generation
    pub fn check(&self) -> Result<()> {
        if self.is_empty() {
            return Err(NspdkError::GraphCheck(format!("graph {:?} has no vertex", self.graph_id)));
        }
        if self.distances.borrow().is_empty() {
            return Err(NspdkError::GraphCheck(format!("graph {:?} has no distance information", self.graph_id)));
        }
        Ok(())
    }

    /// plain text dump, one line per vertex then one line per arc
    pub fn serialize(&self) -> String {
        let mut s = format!("graph {:?} vertices {} edges {}\n", self.graph_id, self.vertex_count(), self.edge_count());
        for idx in self.graph.node_indices() {
            let w = &self.graph[idx];
            s.push_str(&format!("v {} {} ; {}\n", idx.index(), w.get_symbolic_id(), w.get_attributes().serialize()));
        }
        for edge in self.graph.edge_references() {
            s.push_str(&format!("e {} {} ; {}\n", edge.source().index(), edge.target().index(), edge.weight().get_attributes().serialize()));
        }
        s
    } // end of serialize
} // end of impl AttributedGraph


//========================================================================================

#[cfg(test)]
mod tests {

use super::*;

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

#[allow(unused)]
fn log_init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// labelled undirected path, every vertex viewpoint and kernel point
fn labelled_path(labels : &[&str]) -> AttributedGraph {
    let mut graph = AttributedGraph::new(String::from("path"));
    for l in labels {
        let v = graph.insert_vertex();
        graph.set_vertex_label(v, l).unwrap();
        graph.set_vertex_kernel_point(v, true).unwrap();
        graph.set_vertex_viewpoint(v, true).unwrap();
    }
    for v in 1..labels.len() {
        graph.insert_undirected_edge(v-1, v, Attributes::default()).unwrap();
    }
    graph
}

#[test]
fn test_insert_and_access() {
    log_init_test();
    let mut graph = AttributedGraph::new(String::from("g"));
    let a = graph.insert_vertex();
    let b = graph.insert_vertex();
    assert_eq!((a, b), (0, 1));
    let e = graph.insert_edge(a, b).unwrap();
    assert_eq!(e, 0);
    assert!(graph.insert_edge(a, 5).unwrap_err().is_range_error());
    assert_eq!(graph.get_edge_id(a, b).unwrap(), 0);
    assert_eq!(graph.get_edge_id(b, a).unwrap_err(), NspdkError::MissingArc{src : 1, dest : 0});
    assert_eq!(graph.get_edge_source(e).unwrap(), a);
    assert_eq!(graph.get_edge_destination(e).unwrap(), b);
    //
    graph.set_vertex_numeric_attribute(a, 2, 3.0).unwrap();
    assert_eq!(graph.get_vertex_numeric_attribute_list(a).unwrap(), &[0., 0., 3.]);
    assert!(graph.get_vertex_symbolic_attribute(a, 0).is_err());
    assert_eq!(graph.get_vertex_label(a).unwrap(), "");
    assert!(!graph.is_vertex_viewpoint(a).unwrap());
    assert!(graph.is_vertex_alive(a).unwrap());
    graph.set_edge_label(a, b, "single").unwrap();
    assert_eq!(graph.get_edge_label(a, b).unwrap(), "single");
    assert!(graph.get_vertex_label(7).is_err());
} // end of test_insert_and_access


#[test]
fn test_adjacency_order_and_dead() {
    log_init_test();
    let mut graph = AttributedGraph::default();
    for _ in 0..4 {
        graph.insert_vertex();
    }
    graph.insert_edge(0, 2).unwrap();
    graph.insert_edge(0, 1).unwrap();
    graph.insert_edge(0, 3).unwrap();
    assert_eq!(graph.adjacent_vertices(0).unwrap(), vec![2, 1, 3]);
    graph.set_vertex_dead(1).unwrap();
    assert_eq!(graph.adjacent_vertices(0).unwrap(), vec![2, 3]);
    assert_eq!(graph.kill_vertices(""), 4);
}


#[test]
fn test_distances_path() {
    log_init_test();
    let graph = labelled_path(&["a", "b", "c", "d"]);
    graph.compute_pairwise_distance_information(Some(3), Some(1), &[]).unwrap();
    assert_eq!(graph.pairwise_distance(0, 3), Some(3));
    assert_eq!(graph.get_fixed_distance_vertex_list(1, 1), vec![0, 2]);
    assert!(graph.get_fixed_distance_vertex_list(1, 5).is_empty());
    assert_eq!(graph.get_neighborhood_vertex_list(0, 2), vec![0, 1, 2]);
    assert_eq!(graph.get_union_shortest_paths_vertex_list(0, 3, 3), vec![0, 1, 2, 3]);
    assert_eq!(graph.get_union_thick_shortest_paths_vertex_list(0, 2, 2, 1), vec![0, 1, 2, 3]);
    graph.check().unwrap();
}


#[test]
fn test_distance_bound_and_dead() {
    log_init_test();
    let mut graph = labelled_path(&["a", "b", "c", "d"]);
    graph.compute_pairwise_distance_information(Some(1), Some(1), &[0]).unwrap();
    assert_eq!(graph.pairwise_distance(0, 1), Some(1));
    assert_eq!(graph.pairwise_distance(0, 2), None);
    // not a root
    assert_eq!(graph.pairwise_distance(1, 0), None);
    //
    graph.set_vertex_dead(1).unwrap();
    assert!(graph.is_topology_changed());
    graph.compute_pairwise_distance_information(Some(3), None, &[]).unwrap();
    assert!(graph.get_fixed_distance_vertex_list(0, 1).is_empty());
    assert!(graph.get_fixed_distance_vertex_list(2, 1).contains(&3));
    assert_eq!(graph.pairwise_distance(0, 2), None);
    // out of range viewpoint
    assert!(graph.compute_pairwise_distance_information(None, None, &[10]).unwrap_err().is_range_error());
}


#[test]
fn test_viewpoint_filter_by_id() {
    log_init_test();
    let mut graph = labelled_path(&["a", "b", "c"]);
    graph.set_vertex_abstraction(0, true).unwrap();
    // vertex 0 is filtered out by its own status, 2 is kept whatever its position in the list
    graph.compute_pairwise_distance_information(Some(2), Some(0), &[2, 0]).unwrap();
    assert_eq!(graph.pairwise_distance(2, 1), Some(1));
    assert!(graph.get_fixed_distance_vertex_list(0, 0).is_empty());
    // exploration does not enter abstraction vertices
    assert!(graph.get_fixed_distance_vertex_list(2, 2).is_empty());
}


#[test]
fn test_distance_symmetry_random() {
    log_init_test();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(4664397);
    for _ in 0..10 {
        let mut graph = AttributedGraph::default();
        let nb_vertex = 12;
        for _ in 0..nb_vertex {
            graph.insert_vertex();
        }
        for _ in 0..18 {
            let u = rng.gen_range(0..nb_vertex);
            let v = rng.gen_range(0..nb_vertex);
            if u != v {
                graph.insert_undirected_edge(u, v, Attributes::default()).unwrap();
            }
        }
        graph.compute_pairwise_distance_information(Some(4), Some(2), &[]).unwrap();
        for u in 0..nb_vertex {
            for v in 0..nb_vertex {
                assert_eq!(graph.pairwise_distance(u, v), graph.pairwise_distance(v, u));
            }
        }
    }
} // end of test_distance_symmetry_random


#[test]
fn test_induced_subgraph() {
    log_init_test();
    let graph = labelled_path(&["a", "b", "c", "d"]);
    let set : BTreeSet<usize> = [1, 2, 3].into_iter().collect();
    let (induced, root) = graph.induced_rooted_subgraph(&set, 2).unwrap();
    assert_eq!(root, 1);
    assert_eq!(induced.vertex_count(), 3);
    assert_eq!(induced.edge_count(), 4);
    assert_eq!(induced.get_vertex_label(0).unwrap(), "b");
    assert!(induced.is_vertex_viewpoint(0).unwrap());
    assert!(induced.is_topology_changed());
    assert!(graph.induced_rooted_subgraph(&set, 0).unwrap_err().is_logic_error());
    assert!(induced.serialize().contains("v 0 1"));
}

} // end of mod tests
