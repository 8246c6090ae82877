//! lib target
//!
//! Feature vectors and kernels on attributed graphs, see [gkernel].


pub mod error;

pub mod tools;

pub mod graph;

pub mod gkernel;

pub mod prelude;

pub use error::{NspdkError, Result};
