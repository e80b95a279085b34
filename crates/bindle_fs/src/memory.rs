use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::FileSystem;

/// In-memory file tree, used by tests to exercise graph construction without
/// touching the disk.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
  files: FxHashMap<PathBuf, String>,
}

impl MemoryFileSystem {
  pub fn new(files: impl IntoIterator<Item = (impl Into<PathBuf>, impl Into<String>)>) -> Self {
    Self { files: files.into_iter().map(|(path, source)| (path.into(), source.into())).collect() }
  }

  pub fn add_file(&mut self, path: impl Into<PathBuf>, source: impl Into<String>) {
    self.files.insert(path.into(), source.into());
  }
}

impl FileSystem for MemoryFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    self.files.get(path).cloned().ok_or_else(|| {
      io::Error::new(io::ErrorKind::NotFound, format!("No such file: {}", path.display()))
    })
  }

  fn exists(&self, path: &Path) -> bool {
    self.files.contains_key(path)
  }
}
