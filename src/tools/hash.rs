//! Deterministic hashing of strings and integer lists.
//!
//! Feature indexes must not depend on the process that computed them (vectors from different runs
//! are compared with a dot product), so we cannot use a randomly keyed hasher here.
//! We use the AP hash by Arash Partow, which alternates two mixing steps on even and odd positions.
//!
//! Intermediate codes (labels, signatures, keys) are masked with [HASH_MASK] to 31 bits,
//! final feature indexes are masked with the feature mask deduced from the configured bit size.

/// mask applied to all intermediate hash codes
pub const HASH_MASK : u32 = 2147483647;

const AP_SEED : u32 = 0xAAAAAAAA;

#[inline]
fn ap_step(hash : u32, i : usize, c : u32) -> u32 {
    if i & 1 == 0 {
        hash ^ ((hash << 7) ^ c.wrapping_mul(hash >> 3))
    }
    else {
        hash ^ !((hash << 11).wrapping_add(c) ^ (hash >> 5))
    }
} // end of ap_step


/// hash of the bytes of a string, masked with mask
pub fn hash_str_masked(s : &str, mask : u32) -> u32 {
    let hash = s.bytes().enumerate().fold(AP_SEED, |hash, (i,c)| ap_step(hash, i, c as u32));
    hash & mask
}

/// hash of a string masked with [HASH_MASK]
pub fn hash_str(s : &str) -> u32 {
    hash_str_masked(s, HASH_MASK)
}

/// hash of a list of integer codes, masked with mask. Order matters.
pub fn hash_list_masked(list : &[u32], mask : u32) -> u32 {
    let hash = list.iter().enumerate().fold(AP_SEED, |hash, (i,c)| ap_step(hash, i, *c));
    hash & mask
}

/// hash of a list of integer codes masked with [HASH_MASK]
pub fn hash_list(list : &[u32]) -> u32 {
    hash_list_masked(list, HASH_MASK)
}

/// mask keeping the nb_bits lowest bits, at most 32
pub fn bit_mask(nb_bits : u32) -> u32 {
    if nb_bits >= 32 {
        u32::MAX
    }
    else {
        (1u32 << nb_bits) - 1
    }
} // end of bit_mask


//========================================================================================

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn test_hash_deterministic() {
    assert_eq!(hash_str("abc"), hash_str("abc"));
    assert_ne!(hash_str("abc"), hash_str("acb"));
    assert_eq!(hash_list(&[1,2,3]), hash_list(&[1,2,3]));
    assert_ne!(hash_list(&[1,2,3]), hash_list(&[3,2,1]));
    assert!(hash_str("some label") <= HASH_MASK);
    // empty input gives the masked seed
    assert_eq!(hash_list(&[]), AP_SEED & HASH_MASK);
}

#[test]
fn test_bit_mask() {
    assert_eq!(bit_mask(1), 1);
    assert_eq!(bit_mask(10), 1023);
    assert_eq!(bit_mask(32), u32::MAX);
    assert!(hash_str_masked("label", bit_mask(8)) < 256);
}

} // end of mod tests
