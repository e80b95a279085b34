use std::path::PathBuf;

#[derive(Debug)]
pub struct NormalizedBundlerOptions {
  pub input: String,
  pub cwd: PathBuf,
  pub default_extension: String,
  pub fail_on_unresolved: bool,
}
