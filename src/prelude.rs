//! To ease access to most frequently items
//!

pub use crate::error::{NspdkError, Result};

pub use crate::graph::*;

pub use crate::gkernel::params::*;
pub use crate::gkernel::policy::{Variant, VariantPolicy};
pub use crate::gkernel::sparse::SparseVector;
pub use crate::gkernel::generator::FeatureGenerator;
pub use crate::gkernel::gram::{feature_vectors, gram_matrix};
