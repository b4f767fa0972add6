//! Component request model
//!
//! - [`types`]: `ComponentRequest`, `ComponentAction`, and `InstanceContext`
//! - [`names`]: Canonical manifest and package file names
//! - [`error`]: Request validation errors

pub mod error;
pub mod names;
pub mod types;
