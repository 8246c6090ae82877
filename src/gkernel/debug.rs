//! Plain text descriptions of hash codes, recorded when verbosity is above 0.
//!
//! This is a diagnostic aid : it maps each feature index back to the radius-distance block,
//! the pair of signatures and the attribute bin it was built from.

use std::collections::BTreeMap;
use std::io::Write;


#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    /// signature hash -> encoded neighborhood
    signatures : BTreeMap<u32, String>,
    /// pair key -> signature hashes of the pair
    pairs : BTreeMap<u32, Vec<u32>>,
    /// block key -> radius and distance
    blocks : BTreeMap<u32, String>,
    /// predicate and bin hashes -> their string
    attributes : BTreeMap<u32, String>,
    /// feature index -> plain path
    features : BTreeMap<u32, String>,
} // end of struct DebugInfo


impl DebugInfo {
    pub fn record_signature(&mut self, hash : u32, text : String) {
        self.signatures.entry(hash).or_insert(text);
    }

    pub fn record_pair(&mut self, key : u32, signatures : &[u32]) {
        self.pairs.entry(key).or_insert_with(|| signatures.to_vec());
    }

    pub fn record_block(&mut self, key : u32, text : String) {
        self.blocks.entry(key).or_insert(text);
    }

    pub fn record_attribute(&mut self, hash : u32, text : String) {
        self.attributes.entry(hash).or_insert(text);
    }

    // plain neighborhood of a signature on one line, the hash itself if not recorded
    fn plain_signature(&self, hash : u32) -> String {
        match self.signatures.get(&hash) {
            Some(text) => format!("{{{}}}", text.lines().collect::<Vec<&str>>().join(" / ")),
            None       => hash.to_string(),
        }
    }

    /// builds the plain path of a feature from the codes of its four levels
    pub fn record_feature(&mut self, feature : u32, path : [u32; 4]) {
        let lookup = |map : &BTreeMap<u32, String>, key : u32| map.get(&key).cloned().unwrap_or_else(|| key.to_string());
        let pair = match self.pairs.get(&path[1]) {
            Some(signatures) => signatures.iter().map(|h| self.plain_signature(*h)).collect::<Vec<String>>().join(" "),
            None             => path[1].to_string(),
        };
        let text = format!("[{}] [{}] [{}] [{}]", lookup(&self.blocks, path[0]), pair,
                    lookup(&self.attributes, path[2]), lookup(&self.attributes, path[3]));
        self.features.insert(feature, text);
    }

    pub fn get_feature_text(&self, feature : u32) -> Option<&str> {
        self.features.get(&feature).map(|s| s.as_str())
    }

    pub fn get_signature_text(&self, hash : u32) -> Option<&str> {
        self.signatures.get(&hash).map(|s| s.as_str())
    }

    pub fn nb_features(&self) -> usize { self.features.len() }

    pub fn clear(&mut self) {
        *self = DebugInfo::default();
    }

    /// one line per feature : index then plain path
    pub fn output_feature_map<W : Write>(&self, out : &mut W) -> std::io::Result<()> {
        for (feature, text) in &self.features {
            writeln!(out, "{} {}", feature, text)?;
        }
        Ok(())
    }

    /// dumps every recorded signature encoding
    pub fn output_signatures<W : Write>(&self, out : &mut W) -> std::io::Result<()> {
        for (hash, text) in &self.signatures {
            writeln!(out, "signature {}", hash)?;
            writeln!(out, "{}", text)?;
        }
        Ok(())
    }
} // end of impl DebugInfo


//========================================================================================

#[cfg(test)]
mod tests {

use super::*;

#[allow(unused)]
fn log_init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}


#[test]
fn test_feature_text_resolves_signatures() {
    log_init_test();
    let mut debug = DebugInfo::default();
    debug.record_signature(11, String::from("v 0 0 ; A*\nv 1 1 ; B"));
    debug.record_block(1, String::from("d:1 r:1"));
    debug.record_pair(2, &[11, 12]);
    debug.record_attribute(3, String::from("predicate:A"));
    debug.record_feature(100, [1, 2, 3, 4]);
    assert_eq!(debug.get_feature_text(100), Some("[d:1 r:1] [{v 0 0 ; A* / v 1 1 ; B} 12] [predicate:A] [4]"));
    assert_eq!(debug.get_feature_text(101), None);
    assert_eq!(debug.nb_features(), 1);
    //
    let mut out = Vec::<u8>::new();
    debug.output_signatures(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "signature 11\nv 0 0 ; A*\nv 1 1 ; B\n");
    debug.clear();
    assert_eq!(debug.nb_features(), 0);
    assert!(debug.get_signature_text(11).is_none());
}

} // end of mod tests
