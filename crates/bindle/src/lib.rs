mod bundler;
mod stages;
mod types;
mod utils;

pub use crate::{
  bundler::Bundler, stages::scan::ScanStageOutput, types::bundle_output::BundleOutput,
};
pub use bindle_common::*;
pub use bindle_error::{BuildDiagnostic, BuildError, BuildResult};
