//! Local package staging
//!
//! - [`fs`]: Filesystem capability injected into the stager
//! - [`stager`]: Per-version staging folders under the `components` root
//! - [`error`]: Staging failures with the filesystem cause preserved

pub mod error;
pub mod fs;
pub mod stager;
