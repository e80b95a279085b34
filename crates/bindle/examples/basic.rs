use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use bindle::{Bundler, BundlerOptions};
use bindle_ecmascript::EcmaProcessor;

fn main() {
  let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("examples/basic");

  let mut bundler = Bundler::new(
    BundlerOptions {
      input: Some("./entry.js".to_string()),
      cwd: Some(root),
      ..Default::default()
    },
    Arc::new(EcmaProcessor),
  );

  match bundler.build() {
    Ok(output) => {
      for warning in &output.warnings {
        eprintln!("warning: {warning}");
      }
      let _ = std::io::stdout().write_all(output.code.as_bytes());
    }
    Err(errors) => eprintln!("{errors}"),
  }
}
