//! Small utilities shared by graph and kernel modules.

/// deterministic string and integer list hashing.
pub mod hash;
