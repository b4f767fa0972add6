//! Version resolution layer
//!
//! Decides which component version an install or uninstall acts on.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────────┐     ┌─────────────────┐
//! │ CandidateSource │────▶│ VersionResolver │◀────│ InstalledState  │
//! │ (list versions) │     │ (target version)│     │ (current)       │
//! └─────────────────┘     └─────────────────┘     └─────────────────┘
//!        │                        │
//!        ▼                        ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │   Registries    │     │    Selector     │
//! │ (manifest feed) │     │ (strict latest) │
//! └─────────────────┘     └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`selector`]: Strict `int.int.int` latest version selection
//! - [`registry`]: Candidate source trait for published versions
//! - [`registries`]: Concrete candidate sources (manifest feed)
//! - [`installed`]: Installed-state trait and marker file implementation
//! - [`resolver`]: Target version resolution for a request
//! - [`error`]: Error types for listing and resolution

pub mod error;
pub mod installed;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod selector;
