//! Candidate source implementations

pub mod manifest;

pub use manifest::ManifestRegistry;
