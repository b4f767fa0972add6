//! Version resolution and distribution location for component installs
//!
//! - [`component`]: Request and instance context types, artifact names
//! - [`version`]: Target version resolution
//! - [`location`]: Manifest and package URLs per cloud partition
//! - [`staging`]: Local staging folders
//! - [`plan`]: One-request coordination of the above

pub mod component;
pub mod config;
pub mod location;
pub mod logging;
pub mod plan;
pub mod staging;
pub mod version;
