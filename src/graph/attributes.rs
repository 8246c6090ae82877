//! This module describes the data we attach to nodes and edges in petgraph.
//! Each vertex and each edge carries three independent attribute lists :
//! - symbolic attributes : strings, index 0 being the label.
//! - numeric attributes : reals, for example 3D coordinates.
//! - status attributes : booleans addressed by the small ids defined below.
//!
//! Setting an attribute by index beyond the current length extends the list with defaults.

use serde::{Serialize, Deserialize};

/// index of the label among symbolic attributes
pub const LABEL_ATTRIBUTE_ID : usize = 0;

/// vertex status : vertex can anchor a neighborhood signature
pub const KERNEL_POINT_ID : usize = 0;
/// vertex status : true for entity vertices, false for relation vertices
pub const KIND_ID : usize = 1;
/// vertex status : vertex is a valid root for feature extraction
pub const VIEWPOINT_ID : usize = 2;
/// vertex status : vertex is logically removed
pub const DEAD_ID : usize = 3;
/// vertex status : vertex stands for an aggregation relation over other vertices
pub const ABSTRACTION_ID : usize = 4;

/// edge status : arc links an abstraction vertex to an abstracted vertex
pub const EDGE_ABSTRACTION_OF_ID : usize = 0;
/// edge status : arc links an abstraction vertex to a part vertex
pub const EDGE_PART_OF_ID : usize = 1;


// sets value at rank, growing the list with default values if needed
fn set_extending<T : Clone + Default>(list : &mut Vec<T>, rank : usize, value : T) {
    if rank >= list.len() {
        list.resize(rank + 1, T::default());
    }
    list[rank] = value;
}


/// The attribute lists of a graph element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    symbolic : Vec<String>,
    numeric : Vec<f64>,
    status : Vec<bool>,
} // end of struct Attributes


impl Attributes {
    pub fn new(symbolic : Vec<String>, numeric : Vec<f64>, status : Vec<bool>) -> Self {
        Attributes{symbolic, numeric, status}
    }

    pub fn get_symbolic(&self) -> &[String] { &self.symbolic }

    pub fn get_numeric(&self) -> &[f64] { &self.numeric }

    pub fn get_status(&self) -> &[bool] { &self.status }

    pub fn set_symbolic_list(&mut self, list : Vec<String>) { self.symbolic = list; }

    pub fn set_numeric_list(&mut self, list : Vec<f64>) { self.numeric = list; }

    pub fn set_status_list(&mut self, list : Vec<bool>) { self.status = list; }

    pub fn set_symbolic(&mut self, rank : usize, value : String) {
        set_extending(&mut self.symbolic, rank, value);
    }

    pub fn set_numeric(&mut self, rank : usize, value : f64) {
        set_extending(&mut self.numeric, rank, value);
    }

    pub fn set_status(&mut self, rank : usize, value : bool) {
        set_extending(&mut self.status, rank, value);
    }

    /// a status never set reads as false
    pub fn status_or_default(&self, rank : usize) -> bool {
        self.status.get(rank).copied().unwrap_or(false)
    }

    /// the label or an empty string if none was set
    pub fn label(&self) -> &str {
        self.symbolic.get(LABEL_ATTRIBUTE_ID).map(|s| s.as_str()).unwrap_or("")
    }

    /// all symbolic attributes joined by '.'
    pub fn joined_symbolic(&self) -> String {
        self.symbolic.join(".")
    }

    /// one line plain text encoding : symbolic ; numeric ; status
    pub fn serialize(&self) -> String {
        let num : Vec<String> = self.numeric.iter().map(|x| format!("{}", x)).collect();
        let status : Vec<&str> = self.status.iter().map(|b| if *b { "1" } else { "0" }).collect();
        format!("{} ; {} ; {}", self.symbolic.join(" "), num.join(" "), status.join(" "))
    }
} // end of impl Attributes


/// Data associated to a vertex. petgraph calls the data attached to a node its weight.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vweight {
    /// identifier given by the collaborator that built the graph
    symbolic_id : String,
    attributes : Attributes,
}

impl Vweight {
    pub fn new(symbolic_id : String, attributes : Attributes) -> Self {
        Vweight{symbolic_id, attributes}
    }

    pub fn get_symbolic_id(&self) -> &str { &self.symbolic_id }

    pub fn set_symbolic_id(&mut self, id : String) { self.symbolic_id = id; }

    pub fn get_attributes(&self) -> &Attributes { &self.attributes }

    pub fn get_attributes_mut(&mut self) -> &mut Attributes { &mut self.attributes }
} // end of Vweight


/// Data associated to an arc.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Eweight {
    attributes : Attributes,
}

impl Eweight {
    pub fn new(attributes : Attributes) -> Self {
        Eweight{attributes}
    }

    pub fn get_attributes(&self) -> &Attributes { &self.attributes }

    pub fn get_attributes_mut(&mut self) -> &mut Attributes { &mut self.attributes }
} // end of Eweight


//========================================================================================

// end of mod tests
