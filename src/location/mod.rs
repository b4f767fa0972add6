//! Distribution location layer
//!
//! - [`partition`]: Cloud partition selection from the instance region
//! - [`builder`]: Manifest and package URL construction

pub mod builder;
pub mod partition;
