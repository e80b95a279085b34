use bindle_common::{BundlerOptions, NormalizedBundlerOptions};

pub fn normalize_options(raw_options: BundlerOptions) -> NormalizedBundlerOptions {
  NormalizedBundlerOptions {
    input: raw_options.input.unwrap_or_else(|| "./entry.js".to_string()),
    cwd: raw_options
      .cwd
      .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current dir")),
    default_extension: raw_options.default_extension.unwrap_or_else(|| "js".to_string()),
    fail_on_unresolved: raw_options.fail_on_unresolved.unwrap_or(false),
  }
}
