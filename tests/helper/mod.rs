#![allow(dead_code)]

pub mod fs;
pub mod registry;

pub use fs::FailingFileSystem;
pub use registry::{MockRegistry, test_context};
