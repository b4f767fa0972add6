//! Filesystem test utilities

use std::io;
use std::path::Path;

use component_resolver::staging::fs::FileSystem;

/// FileSystem where every write operation fails with `kind`
pub struct FailingFileSystem {
    kind: io::ErrorKind,
}

impl FailingFileSystem {
    pub fn new(kind: io::ErrorKind) -> Self {
        Self { kind }
    }
}

impl FileSystem for FailingFileSystem {
    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Err(io::Error::from(self.kind))
    }

    fn is_dir(&self, _path: &Path) -> bool {
        false
    }

    fn read_dir_names(&self, _path: &Path) -> io::Result<Vec<String>> {
        Err(io::Error::from(self.kind))
    }

    fn read_to_string(&self, _path: &Path) -> io::Result<String> {
        Err(io::Error::from(self.kind))
    }

    fn write(&self, _path: &Path, _contents: &str) -> io::Result<()> {
        Err(io::Error::from(self.kind))
    }

    fn remove_file(&self, _path: &Path) -> io::Result<()> {
        Err(io::Error::from(self.kind))
    }
}
