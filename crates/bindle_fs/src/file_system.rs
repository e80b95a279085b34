use std::io;
use std::path::Path;

/// Read-only view over module sources. The bundler never writes through this
/// boundary; emitting the artifact is the frontend's concern.
pub trait FileSystem: Send + Sync + std::fmt::Debug {
  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  fn exists(&self, path: &Path) -> bool;
}
