//! Canonical encoding of rooted neighborhoods.
//!
//! For a root vertex and a radius the encoder produces a [Signature] : a hash code meant to be identical
//! for structurally equivalent rooted neighborhoods, and a soft attribute histogram used for partial credit.
//!
//! - radius 0 : hash of the root label.
//! - radius 1 : hash of the root label followed by the sorted "child label-edge label" strings of its alive neighbors.
//! - radius k >= 2 : each ball vertex gets a signature hashing its distance to the root and the sorted hashes
//!   of (distance, label) of all ball vertices as seen from it. Each arc inside the ball gets the hash of
//!   its two end signatures (smaller first) and of its label. The ball code is the hash of the sorted arc signatures.
//!
//! This is not an isomorphism test : distinct neighborhoods can collide, equivalent neighborhoods cannot differ.

use std::collections::{BTreeSet, HashMap};

use crate::error::Result;
use crate::graph::{AttributedGraph, Attributes};
use crate::tools::hash::{hash_str, hash_list};

use super::debug::DebugInfo;
use super::histogram::SecondOrderHistogram;
use super::params::MatchType;
use super::policy::BallStrategy;

/// label prefix of viewpoints in relational mode
pub const VIEWPOINT_MARKER : &str = "viewpoint";


/// Encoding of a rooted neighborhood.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Signature {
    /// exact code of the neighborhood
    pub hash : u32,
    /// attribute histogram of the neighborhood
    pub soft : SecondOrderHistogram,
}


/// What depends on the match type : how labels are read and how a signature is assembled.
pub trait MatchPolicy : Send + Sync {
    /// label of a vertex from its attributes
    fn vertex_label(&self, attributes : &Attributes) -> String;

    /// label of an arc from its attributes
    fn edge_label(&self, attributes : &Attributes) -> String;

    /// label given to a viewpoint in relational mode
    fn viewpoint_label(&self, attributes : &Attributes) -> String;

    /// signature of the neighborhood of radius around root
    fn canonical_form(&self, encoder : &mut CanonicalFormEncoder, graph : &AttributedGraph, root : usize, radius : usize) -> Result<Signature>;
} // end of trait MatchPolicy


/// All symbolic attributes make the label, the ball is encoded exactly.
pub struct HardMatch;

impl MatchPolicy for HardMatch {
    fn vertex_label(&self, attributes : &Attributes) -> String {
        attributes.joined_symbolic()
    }

    fn edge_label(&self, attributes : &Attributes) -> String {
        attributes.joined_symbolic()
    }

    fn viewpoint_label(&self, attributes : &Attributes) -> String {
        let mut label = String::from(VIEWPOINT_MARKER);
        for s in attributes.get_symbolic() {
            label.push('.');
            label.push_str(s);
        }
        label
    }

    fn canonical_form(&self, encoder : &mut CanonicalFormEncoder, graph : &AttributedGraph, root : usize, radius : usize) -> Result<Signature> {
        let hash = encoder.hard_encoding(graph, root, radius)?;
        let mut soft = SecondOrderHistogram::default();
        soft.insert(1, 1);
        Ok(Signature{hash, soft})
    }
} // end of impl MatchPolicy for HardMatch


/// Only the root label is encoded exactly, the ball contributes its attributes histogram.
pub struct SoftMatch;

impl MatchPolicy for SoftMatch {
    fn vertex_label(&self, attributes : &Attributes) -> String {
        attributes.label().to_string()
    }

    fn edge_label(&self, attributes : &Attributes) -> String {
        attributes.label().to_string()
    }

    fn viewpoint_label(&self, attributes : &Attributes) -> String {
        format!("{}{}", VIEWPOINT_MARKER, attributes.label())
    }

    fn canonical_form(&self, encoder : &mut CanonicalFormEncoder, graph : &AttributedGraph, root : usize, radius : usize) -> Result<Signature> {
        let hash = encoder.hard_encoding(graph, root, 0)?;
        let soft = encoder.soft_encoding(graph, root, radius)?;
        Ok(Signature{hash, soft})
    }
} // end of impl MatchPolicy for SoftMatch


impl MatchType {
    pub fn policy(&self) -> &'static dyn MatchPolicy {
        match self {
            MatchType::Hard => &HardMatch,
            MatchType::Soft => &SoftMatch,
        }
    }
}


// distances not recorded are rendered as -1 in encodings
fn distance_code(d : Option<usize>) -> i64 {
    d.map_or(-1, |d| d as i64)
}


pub struct CanonicalFormEncoder {
    match_type : MatchType,
    ball : BallStrategy,
    verbosity : usize,
    /// vertex id -> label, holds relational overrides
    vertex_labels : HashMap<usize, String, ahash::RandomState>,
    /// (src, dest) -> arc label
    edge_labels : HashMap<(usize, usize), String, ahash::RandomState>,
    debug : DebugInfo,
} // end of struct CanonicalFormEncoder


impl CanonicalFormEncoder {
    pub fn new(match_type : MatchType, ball : BallStrategy, verbosity : usize) -> Self {
        CanonicalFormEncoder{match_type, ball, verbosity,
            vertex_labels : HashMap::<usize, String, ahash::RandomState>::default(),
            edge_labels : HashMap::<(usize, usize), String, ahash::RandomState>::default(),
            debug : DebugInfo::default()}
    }

    pub fn get_match_type(&self) -> MatchType { self.match_type }

    /// resets label caches, overrides included
    pub fn clear(&mut self) {
        self.vertex_labels.clear();
        self.edge_labels.clear();
    }

    pub fn get_debug_info(&self) -> &DebugInfo { &self.debug }

    pub fn get_debug_info_mut(&mut self) -> &mut DebugInfo { &mut self.debug }

    /// gives vertex the viewpoint label until the next clear
    pub fn mark_viewpoint(&mut self, graph : &AttributedGraph, v : usize) -> Result<()> {
        let label = self.match_type.policy().viewpoint_label(graph.get_vertex_attributes(v)?);
        self.vertex_labels.insert(v, label);
        Ok(())
    }

    /// removes the viewpoint label of vertex
    pub fn unmark_viewpoint(&mut self, v : usize) {
        self.vertex_labels.remove(&v);
    }

    pub fn vertex_label(&mut self, graph : &AttributedGraph, v : usize) -> Result<String> {
        if let Some(label) = self.vertex_labels.get(&v) {
            return Ok(label.clone());
        }
        let label = self.match_type.policy().vertex_label(graph.get_vertex_attributes(v)?);
        self.vertex_labels.insert(v, label.clone());
        Ok(label)
    }

    pub fn edge_label(&mut self, graph : &AttributedGraph, src : usize, dest : usize) -> Result<String> {
        if let Some(label) = self.edge_labels.get(&(src, dest)) {
            return Ok(label.clone());
        }
        let edge = graph.get_edge_id(src, dest)?;
        let label = self.match_type.policy().edge_label(graph.get_edge_attributes(edge)?);
        self.edge_labels.insert((src, dest), label.clone());
        Ok(label)
    }

    /// signature of the neighborhood of radius around root
    pub fn canonical_form(&mut self, graph : &AttributedGraph, root : usize, radius : usize) -> Result<Signature> {
        let signature = self.match_type.policy().canonical_form(self, graph, root, radius)?;
        log::trace!("signature root {} radius {} : {}", root, radius, signature.hash);
        Ok(signature)
    }

    // vertices within radius of root, root included
    fn ball(graph : &AttributedGraph, root : usize, radius : usize) -> BTreeSet<usize> {
        (0..=radius).flat_map(|d| graph.get_fixed_distance_vertex_list(root, d)).collect()
    }

    /// exact code of the neighborhood of radius around root
    pub fn hard_encoding(&mut self, graph : &AttributedGraph, root : usize, radius : usize) -> Result<u32> {
        let hash = match radius {
            0 => hash_str(&self.vertex_label(graph, root)?),
            1 => self.radius_1_encoding(graph, root)?,
            _ => match self.ball {
                BallStrategy::Exact       => self.radius_k_exact_encoding(graph, root, radius)?,
                BallStrategy::Approximate => self.radius_k_approximate_encoding(graph, root, radius)?,
            },
        };
        if self.verbosity > 0 {
            self.record_plain_neighborhood(graph, root, radius, hash)?;
        }
        Ok(hash)
    } // end of hard_encoding

    fn record_plain_neighborhood(&mut self, graph : &AttributedGraph, root : usize, radius : usize, hash : u32) -> Result<()> {
        let ball = Self::ball(graph, root, radius);
        if ball.is_empty() {
            return Ok(());
        }
        let (mut induced, new_root) = graph.induced_rooted_subgraph(&ball, root)?;
        let root_label = format!("{}*", induced.get_vertex_label(new_root)?);
        induced.set_vertex_label(new_root, &root_label)?;
        let text = format!("graph_id: {} vertex_id: {} radius: {}\n{}", graph.get_graph_id(), root, radius, induced.serialize());
        self.debug.record_signature(hash, text);
        Ok(())
    }

    // sorted "child label-edge label" strings of the alive neighbors of root, with child ids
    fn sorted_children(&mut self, graph : &AttributedGraph, root : usize) -> Result<Vec<(String, usize)>> {
        let mut children = Vec::<(String, usize)>::new();
        for child in graph.adjacent_vertices(root)? {
            let text = format!("{}-{}", self.vertex_label(graph, child)?, self.edge_label(graph, root, child)?);
            children.push((text, child));
        }
        children.sort();
        Ok(children)
    }

    fn radius_1_encoding(&mut self, graph : &AttributedGraph, root : usize) -> Result<u32> {
        let children : Vec<String> = self.sorted_children(graph, root)?.into_iter().map(|(s, _)| s).collect();
        let encoding = format!("{}:{}", self.vertex_label(graph, root)?, children.join("."));
        Ok(hash_str(&encoding))
    }

    // vertex signatures then arc signatures, distance given by dist, arcs by arcs
    fn ball_hash<D, A>(&mut self, graph : &AttributedGraph, ball : &[usize], root : usize, dist : D, arcs : A) -> Result<u32>
        where D : Fn(usize, usize) -> Option<usize>,
              A : Fn(usize) -> Result<Vec<usize>> {
        let mut labels = Vec::<String>::with_capacity(ball.len());
        for &v in ball {
            labels.push(self.vertex_label(graph, v)?);
        }
        let mut vertex_signatures = HashMap::<usize, u32, ahash::RandomState>::default();
        for (i, &u) in ball.iter().enumerate() {
            let mut codes : Vec<u32> = ball.iter().enumerate()
                .map(|(j, &v)| hash_str(&format!("{}{}", distance_code(dist(u, v)), labels[j])))
                .collect();
            codes.sort_unstable();
            let mut list = Vec::<u32>::with_capacity(codes.len() + 1);
            list.push(distance_code(dist(root, u)) as u32);
            list.extend(codes);
            let signature = hash_list(&list);
            log::trace!("ball of root {} vertex {} label {:?} signature {}", root, u, labels[i], signature);
            vertex_signatures.insert(u, signature);
        }
        let mut edge_signatures = Vec::<u32>::new();
        for &u in ball {
            for v in arcs(u)? {
                if let Some(&sv) = vertex_signatures.get(&v) {
                    let su = vertex_signatures[&u];
                    let edge_label = self.edge_label(graph, u, v)?;
                    edge_signatures.push(hash_list(&[su.min(sv), su.max(sv), hash_str(&edge_label)]));
                }
            }
        }
        edge_signatures.sort_unstable();
        Ok(hash_list(&edge_signatures))
    } // end of ball_hash

    /// induces the ball and recomputes its own distances
    fn radius_k_exact_encoding(&mut self, graph : &AttributedGraph, root : usize, radius : usize) -> Result<u32> {
        let ball_set = Self::ball(graph, root, radius);
        // root not explored by the distance index : empty ball, no arc
        if ball_set.is_empty() {
            return Ok(hash_list(&[]));
        }
        let ball : Vec<usize> = ball_set.iter().copied().collect();
        let (induced, new_root) = graph.induced_rooted_subgraph(&ball_set, root)?;
        induced.compute_pairwise_distance_information(Some(2 * radius), Some(2 * radius), &[])?;
        // induced ids follow the order of ball
        let to_new = |v : usize| ball.binary_search(&v).ok();
        let dist = |u : usize, v : usize| match (to_new(u), to_new(v)) {
            (Some(nu), Some(nv)) => induced.pairwise_distance(nu, nv),
            _ => None,
        };
        log::trace!("exact ball root {} (induced root {}) size {}", root, new_root, ball.len());
        let arcs = |u : usize| -> Result<Vec<usize>> {
            match to_new(u) {
                Some(nu) => Ok(induced.adjacent_vertices(nu)?.into_iter().map(|nv| ball[nv]).collect()),
                None => Ok(Vec::new()),
            }
        };
        self.ball_hash(graph, &ball, root, dist, arcs)
    } // end of radius_k_exact_encoding

    /// reuses distances of the whole graph
    fn radius_k_approximate_encoding(&mut self, graph : &AttributedGraph, root : usize, radius : usize) -> Result<u32> {
        let ball : Vec<usize> = Self::ball(graph, root, radius).into_iter().collect();
        let dist = |u : usize, v : usize| graph.pairwise_distance(u, v);
        let arcs = |u : usize| -> Result<Vec<usize>> {
            Ok(graph.adjacent_vertices(u)?.into_iter().filter(|v| ball.binary_search(v).is_ok()).collect())
        };
        self.ball_hash(graph, &ball, root, dist, arcs)
    } // end of radius_k_approximate_encoding

    //========================================================
    // soft encoding
    //========================================================

    /// attribute histogram of the neighborhood of radius around root
    pub fn soft_encoding(&mut self, graph : &AttributedGraph, root : usize, radius : usize) -> Result<SecondOrderHistogram> {
        let mut histo = SecondOrderHistogram::default();
        match radius {
            0 => {
                let label = self.vertex_label(graph, root)?;
                self.insert_feature(graph, &label, root, &mut histo)?;
            },
            1 => {
                for (_, child) in self.sorted_children(graph, root)? {
                    let label = self.vertex_label(graph, child)?;
                    self.insert_feature(graph, &label, child, &mut histo)?;
                }
                let label = format!("{}+r", self.vertex_label(graph, root)?);
                self.insert_feature(graph, &label, root, &mut histo)?;
            },
            _ => {
                for v in Self::ball(graph, root, radius) {
                    let label = self.vertex_label(graph, v)?;
                    self.insert_feature(graph, &label, v, &mut histo)?;
                }
            },
        }
        Ok(histo)
    } // end of soft_encoding

    /// one bin per symbolic attribute (count 1) and per numeric attribute (value added), under predicates built from label
    fn insert_feature(&mut self, graph : &AttributedGraph, label : &str, v : usize, histo : &mut SecondOrderHistogram) -> Result<()> {
        let attributes = graph.get_vertex_attributes(v)?;
        let predicate = format!("predicate:{}", label);
        let hash_predicate = hash_str(&predicate);
        for (k, value) in attributes.get_symbolic().iter().enumerate() {
            let bin = format!("bin:{}_value:{}", k, value);
            let hash_bin = hash_str(&bin);
            histo.insert(hash_predicate, hash_bin);
            if self.verbosity > 0 {
                self.debug.record_attribute(hash_bin, bin);
            }
        }
        let numeric_predicate = format!("numeric_predicate:{}", label);
        let hash_numeric_predicate = hash_str(&numeric_predicate);
        for (k, value) in attributes.get_numeric().iter().enumerate() {
            let bin = format!("numeric_bin:{}", k);
            let hash_bin = hash_str(&bin);
            histo.insert_value(hash_numeric_predicate, hash_bin, *value);
            if self.verbosity > 0 {
                self.debug.record_attribute(hash_bin, bin);
            }
        }
        if self.verbosity > 0 {
            self.debug.record_attribute(hash_predicate, predicate);
            self.debug.record_attribute(hash_numeric_predicate, numeric_predicate);
        }
        Ok(())
    } // end of insert_feature
} // end of impl CanonicalFormEncoder


//========================================================================================

// end of mod tests
