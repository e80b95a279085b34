pub mod normalized_bundler_options;

use std::path::PathBuf;

#[derive(Default, Debug, Clone)]
pub struct BundlerOptions {
  /// Path of the entry module, resolved against `cwd`.
  pub input: Option<String>,
  pub cwd: Option<PathBuf>,

  /// Extension appended to extensionless specifiers during resolution.
  pub default_extension: Option<String>,

  /// Turn unresolved dependencies into fatal build errors instead of
  /// warnings on the output.
  pub fail_on_unresolved: Option<bool>,
}
