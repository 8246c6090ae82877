//! Sparse feature vectors indexed by hashed feature ids.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde::{Serialize, Deserialize};
use sprs::CsVecI;


/// Feature index -> weight. Only non zero entries are stored, iteration is in increasing index order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    entries : BTreeMap<u32, f64>,
}


impl SparseVector {
    pub fn new() -> Self {
        SparseVector::default()
    }

    /// sets the weight of index, a null weight removes the entry
    pub fn set(&mut self, index : u32, value : f64) {
        if value == 0. {
            self.entries.remove(&index);
        }
        else {
            self.entries.insert(index, value);
        }
    }

    /// adds value to the weight of index
    pub fn add_to(&mut self, index : u32, value : f64) {
        let v = self.get(index) + value;
        self.set(index, v);
    }

    /// weight of index, 0 if absent
    pub fn get(&self, index : u32) -> f64 {
        self.entries.get(&index).copied().unwrap_or(0.)
    }

    pub fn add(&mut self, other : &SparseVector) {
        for (index, value) in &other.entries {
            self.add_to(*index, *value);
        }
    }

    pub fn scale(&mut self, factor : f64) {
        if factor == 0. {
            self.entries.clear();
        }
        else {
            self.entries.values_mut().for_each(|v| *v *= factor);
        }
    }

    pub fn dot(&self, other : &SparseVector) -> f64 {
        // iterate on the smaller one
        let (small, large) = if self.nnz() <= other.nnz() { (self, other) } else { (other, self) };
        small.entries.iter().map(|(i, v)| v * large.get(*i)).sum()
    }

    pub fn norm(&self) -> f64 {
        self.entries.values().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// number of non zero entries
    pub fn nnz(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> btree_map::Iter<'_, u32, f64> { self.entries.iter() }

    /// conversion to a sprs vector of dimension dim. Indexes must be below dim.
    pub fn to_csvec(&self, dim : usize) -> CsVecI<f64, usize> {
        let indices : Vec<usize> = self.entries.keys().map(|i| *i as usize).collect();
        let data : Vec<f64> = self.entries.values().copied().collect();
        CsVecI::new(dim, indices, data)
    }
} // end of impl SparseVector


/// index:value pairs separated by a blank, the format linear learners read.
impl fmt::Display for SparseVector {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (index, value) in &self.entries {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", index, value)?;
            first = false;
        }
        Ok(())
    }
} // end of impl Display for SparseVector


//========================================================================================

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn test_sparse_ops() {
    let mut x = SparseVector::new();
    x.set(3, 1.);
    x.add_to(5, 2.);
    x.add_to(5, 1.);
    let mut y = SparseVector::new();
    y.set(5, 2.);
    y.set(9, 4.);
    assert_eq!(x.dot(&y), 6.);
    assert_eq!(y.dot(&x), 6.);
    assert_eq!(x.nnz(), 2);
    x.add(&y);
    assert_eq!(x.get(5), 5.);
    assert_eq!(x.get(9), 4.);
    x.add_to(3, -1.);
    assert_eq!(x.nnz(), 2);
    y.scale(0.5);
    assert_eq!(y.norm(), 5f64.sqrt());
    assert_eq!(y.to_string(), "5:1 9:2");
    let csvec = y.to_csvec(16);
    assert_eq!(csvec.dim(), 16);
    assert_eq!(csvec.nnz(), 2);
} // end of test_sparse_ops

} // end of mod tests
