use std::fmt;

use arcstr::ArcStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetErrorKind {
  /// The source file could not be read at all.
  Read,
  /// The file was read, but the source processor rejected its content.
  Processing,
}

/// Failure to turn one file into an asset. Carries the offending path so the
/// caller can decide whether the failure is fatal (entry) or degradable
/// (dependency).
#[derive(Debug)]
pub struct AssetError {
  pub path: ArcStr,
  pub kind: AssetErrorKind,
  cause: anyhow::Error,
}

impl AssetError {
  pub fn read(path: ArcStr, cause: impl Into<anyhow::Error>) -> Self {
    Self { path, kind: AssetErrorKind::Read, cause: cause.into() }
  }

  pub fn processing(path: ArcStr, cause: impl Into<anyhow::Error>) -> Self {
    Self { path, kind: AssetErrorKind::Processing, cause: cause.into() }
  }

  pub fn cause(&self) -> &anyhow::Error {
    &self.cause
  }
}

impl fmt::Display for AssetError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.kind {
      AssetErrorKind::Read => write!(f, "Could not read {} - {}", self.path, self.cause),
      AssetErrorKind::Processing => {
        write!(f, "Could not process {} - {}", self.path, self.cause)
      }
    }
  }
}

impl std::error::Error for AssetError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    Some(self.cause.as_ref())
  }
}
