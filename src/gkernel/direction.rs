//! Directions of rooted neighborhoods for graphs embedded in 3D space.
//!
//! The first 3 numeric attributes of a vertex are its coordinates.
//! The direction of a ball is the average of the vectors from ball vertices to the root.
//! It is zeroed when it is small relative to the vectors it averages (the ball surrounds its root).
//! Two directions are compared through a discrete agreement code folded into pair keys.

use crate::error::{NspdkError, Result};
use crate::graph::AttributedGraph;

pub type Direction3 = [f64; 3];

/// fraction of the largest contributing norm below which an average direction is zeroed
const DIRECTION_THRESHOLD : f64 = 0.05;

/// both directions null
pub const AGREEMENT_BOTH_NULL : u32 = 1;
/// exactly one direction null
pub const AGREEMENT_ONE_NULL : u32 = 2;
/// cosine above 0.5
pub const AGREEMENT_PARALLEL : u32 = 3;
/// cosine below -0.5
pub const AGREEMENT_ANTI_PARALLEL : u32 = 4;
/// anything else
pub const AGREEMENT_ORTHOGONAL : u32 = 5;


fn norm(v : &Direction3) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

fn coordinates(graph : &AttributedGraph, v : usize) -> Result<Direction3> {
    let numeric = graph.get_vertex_numeric_attribute_list(v)?;
    if numeric.len() < 3 {
        return Err(NspdkError::MissingCoordinates(v));
    }
    Ok([numeric[0], numeric[1], numeric[2]])
}


/// average direction of the ball of radius around root, root excluded. Null for radius 0.
pub fn root_direction(graph : &AttributedGraph, root : usize, radius : usize) -> Result<Direction3> {
    if radius == 0 {
        return Ok([0.; 3]);
    }
    let root_coord = coordinates(graph, root)?;
    let mut directions = Vec::<Direction3>::new();
    for d in 1..=radius {
        for v in graph.get_fixed_distance_vertex_list(root, d) {
            let c = coordinates(graph, v)?;
            directions.push([root_coord[0] - c[0], root_coord[1] - c[1], root_coord[2] - c[2]]);
        }
    }
    Ok(average_direction(&directions))
} // end of root_direction


pub fn average_direction(directions : &[Direction3]) -> Direction3 {
    if directions.is_empty() {
        return [0.; 3];
    }
    let mut average = [0.; 3];
    let mut max_norm = 0.;
    for dir in directions {
        max_norm = f64::max(max_norm, norm(dir));
        for j in 0..3 {
            average[j] += dir[j];
        }
    }
    average.iter_mut().for_each(|x| *x /= directions.len() as f64);
    if max_norm == 0. || norm(&average) / max_norm < DIRECTION_THRESHOLD {
        return [0.; 3];
    }
    average
} // end of average_direction


/// discrete agreement code of two directions, symmetric in its arguments
pub fn direction_agreement(src : &Direction3, dest : &Direction3) -> u32 {
    let src_norm = norm(src);
    let dest_norm = norm(dest);
    match (src_norm == 0., dest_norm == 0.) {
        (true, true) => AGREEMENT_BOTH_NULL,
        (true, false) | (false, true) => AGREEMENT_ONE_NULL,
        (false, false) => {
            let cosine = (0..3).map(|i| src[i] * dest[i]).sum::<f64>() / (src_norm * dest_norm);
            if cosine > 0.5 {
                AGREEMENT_PARALLEL
            }
            else if cosine < -0.5 {
                AGREEMENT_ANTI_PARALLEL
            }
            else {
                AGREEMENT_ORTHOGONAL
            }
        }
    }
} // end of direction_agreement


//========================================================================================

// end of mod tests
