use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub struct InputArgs {
  /// Path of the entry module, resolved against the working directory.
  #[clap(default_value = "./entry.js")]
  pub entry: String,

  #[clap(long)]
  pub cwd: Option<PathBuf>,

  /// Extension assumed for extensionless import specifiers.
  #[clap(long)]
  pub default_extension: Option<String>,
}

#[derive(Args)]
pub struct OutputArgs {
  /// Write the bundle to a file instead of stdout.
  #[clap(long, short = 'o')]
  pub file: Option<PathBuf>,

  /// Treat unresolved dependencies as errors instead of warnings.
  #[clap(long)]
  pub strict: bool,
}
