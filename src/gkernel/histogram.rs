//! Nested histograms accumulating mass under hash keys.
//!
//! A [Histogram] maps a key to an accumulated real, a [SecondOrderHistogram] maps a key to a Histogram
//! and a [ThirdOrderHistogram] maps a key to a SecondOrderHistogram.
//! Keys are kept ordered so that flattening is deterministic. Merging two histograms sums values key by key at every level.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Serialize, Deserialize};


#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    bins : BTreeMap<u32, f64>,
}

impl Histogram {
    /// counts one occurrence of key
    pub fn insert(&mut self, key : u32) {
        self.insert_value(key, 1.);
    }

    /// adds value to the bin of key
    pub fn insert_value(&mut self, key : u32, value : f64) {
        *self.bins.entry(key).or_insert(0.) += value;
    }

    pub fn add(&mut self, other : &Histogram) {
        for (key, value) in &other.bins {
            self.insert_value(*key, *value);
        }
    }

    pub fn get(&self, key : u32) -> Option<f64> {
        self.bins.get(&key).copied()
    }

    /// number of bins
    pub fn size(&self) -> usize { self.bins.len() }

    pub fn is_empty(&self) -> bool { self.bins.is_empty() }

    pub fn iter(&self) -> btree_map::Iter<'_, u32, f64> { self.bins.iter() }
} // end of impl Histogram


#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SecondOrderHistogram {
    bins : BTreeMap<u32, Histogram>,
}

impl SecondOrderHistogram {
    pub fn insert(&mut self, key : u32, sub_key : u32) {
        self.bins.entry(key).or_default().insert(sub_key);
    }

    pub fn insert_value(&mut self, key : u32, sub_key : u32, value : f64) {
        self.bins.entry(key).or_default().insert_value(sub_key, value);
    }

    pub fn add(&mut self, other : &SecondOrderHistogram) {
        for (key, histo) in &other.bins {
            self.bins.entry(*key).or_default().add(histo);
        }
    }

    pub fn get(&self, key : u32) -> Option<&Histogram> {
        self.bins.get(&key)
    }

    pub fn size(&self) -> usize { self.bins.len() }

    pub fn is_empty(&self) -> bool { self.bins.is_empty() }

    pub fn iter(&self) -> btree_map::Iter<'_, u32, Histogram> { self.bins.iter() }
} // end of impl SecondOrderHistogram


#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThirdOrderHistogram {
    bins : BTreeMap<u32, SecondOrderHistogram>,
}

impl ThirdOrderHistogram {
    pub fn insert(&mut self, key : u32, sub_key : u32, sub_sub_key : u32) {
        self.bins.entry(key).or_default().insert(sub_key, sub_sub_key);
    }

    pub fn insert_value(&mut self, key : u32, sub_key : u32, sub_sub_key : u32, value : f64) {
        self.bins.entry(key).or_default().insert_value(sub_key, sub_sub_key, value);
    }

    /// merges histo in the bin of key
    pub fn add_at(&mut self, key : u32, histo : &SecondOrderHistogram) {
        self.bins.entry(key).or_default().add(histo);
    }

    pub fn add(&mut self, other : &ThirdOrderHistogram) {
        for (key, histo) in &other.bins {
            self.add_at(*key, histo);
        }
    }

    pub fn get(&self, key : u32) -> Option<&SecondOrderHistogram> {
        self.bins.get(&key)
    }

    pub fn size(&self) -> usize { self.bins.len() }

    pub fn is_empty(&self) -> bool { self.bins.is_empty() }

    pub fn iter(&self) -> btree_map::Iter<'_, u32, SecondOrderHistogram> { self.bins.iter() }
} // end of impl ThirdOrderHistogram


//========================================================================================

// end of mod tests
