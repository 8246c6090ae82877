//! Errors raised by graph construction and feature generation.
//!
//! Errors fall in two families:
//! - range errors : an id or attribute index out of bounds, a missing arc, an unknown match type.
//! - logic errors : a call made on a graph that cannot support it (no viewpoint, no distance information,
//!   missing coordinates).
//!
//! Answers that are simply absent (no vertex at a given distance, no recorded distance) are not errors,
//! they are returned as empty vectors or `None`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NspdkError {
    #[error("vertex id {id} out of range, graph has {nb_vertex} vertices")]
    VertexOutOfRange { id : usize, nb_vertex : usize },

    #[error("edge id {id} out of range, graph has {nb_edge} edges")]
    EdgeOutOfRange { id : usize, nb_edge : usize },

    #[error("attribute {attribute} out of range for element {id}")]
    AttributeOutOfRange { id : usize, attribute : usize },

    #[error("no arc from vertex {src} to vertex {dest}")]
    MissingArc { src : usize, dest : usize },

    #[error("unknown match type {0:?}, expecting \"hard\" or \"soft\"")]
    UnknownMatchType(String),

    #[error("no first endpoint available in graph {0:?}")]
    EmptyEndpoints(String),

    #[error("graph check failed : {0}")]
    GraphCheck(String),

    #[error("insufficient coordinate information for vertex {0}, need 3 numeric attributes")]
    MissingCoordinates(usize),
} // end of enum NspdkError


impl NspdkError {
    /// true for out of bounds accesses and invalid configuration values
    pub fn is_range_error(&self) -> bool {
        matches!(self, NspdkError::VertexOutOfRange { .. } | NspdkError::EdgeOutOfRange { .. }
                | NspdkError::AttributeOutOfRange { .. } | NspdkError::MissingArc { .. }
                | NspdkError::UnknownMatchType(_))
    }

    /// true for errors due to a graph state that does not support the requested operation
    pub fn is_logic_error(&self) -> bool {
        !self.is_range_error()
    }
} // end of impl NspdkError


pub type Result<T> = std::result::Result<T, NspdkError>;


//========================================================================================

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn test_error_families() {
    let err = NspdkError::MissingArc{ src : 0, dest : 3};
    assert!(err.is_range_error());
    assert!(!err.is_logic_error());
    let err = NspdkError::EmptyEndpoints(String::from("g1"));
    assert!(err.is_logic_error());
    assert!(NspdkError::UnknownMatchType("fuzzy".into()).to_string().contains("fuzzy"));
} // end of test_error_families

} // end of mod tests
