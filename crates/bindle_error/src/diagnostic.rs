use std::fmt;

use arcstr::ArcStr;

use crate::AssetError;

/// A non-fatal problem discovered during a build. Diagnostics are collected
/// on the build output instead of being printed, so the frontend decides how
/// to surface them and strict callers can promote them to hard errors.
#[derive(Debug)]
pub enum BuildDiagnostic {
  /// A dependency specifier could not be turned into an asset. The specifier
  /// stays absent from the importer's mapping, so the generated program only
  /// fails if it actually requires it.
  ResolutionFailure { importer: ArcStr, specifier: String, cause: AssetError },
}

impl BuildDiagnostic {
  pub fn resolution_failure(importer: ArcStr, specifier: String, cause: AssetError) -> Self {
    Self::ResolutionFailure { importer, specifier, cause }
  }
}

impl fmt::Display for BuildDiagnostic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::ResolutionFailure { importer, specifier, cause } => {
        write!(f, "Could not resolve \"{specifier}\" (imported by {importer}) - {cause}")
      }
    }
  }
}

impl std::error::Error for BuildDiagnostic {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::ResolutionFailure { cause, .. } => Some(cause),
    }
  }
}
