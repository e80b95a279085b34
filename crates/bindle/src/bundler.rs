use std::sync::Arc;

use bindle_common::BundlerOptions;
use bindle_error::BuildResult;
use bindle_fs::OsFileSystem;

use crate::{
  stages::{
    generate::GenerateStage,
    scan::{ScanStage, ScanStageOutput},
  },
  types::{bundle_output::BundleOutput, SharedFileSystem, SharedOptions, SharedProcessor},
  utils::normalize_options::normalize_options,
};

pub struct Bundler {
  fs: SharedFileSystem,
  options: SharedOptions,
  processor: SharedProcessor,
}

impl Bundler {
  pub fn new(options: BundlerOptions, processor: SharedProcessor) -> Self {
    Self::with_file_system(options, processor, Arc::new(OsFileSystem))
  }

  pub fn with_file_system(
    options: BundlerOptions,
    processor: SharedProcessor,
    fs: SharedFileSystem,
  ) -> Self {
    let options = normalize_options(options);
    Self { fs, options: Arc::new(options), processor }
  }

  /// Discover every module reachable from the entry. Only an unusable entry
  /// module fails the scan; dependency failures come back as warnings.
  pub fn scan(&mut self) -> BuildResult<ScanStageOutput> {
    let scan_stage = ScanStage::new(
      Arc::clone(&self.fs),
      Arc::clone(&self.options),
      Arc::clone(&self.processor),
    );
    scan_stage.scan()
  }

  /// Run both stages: scan, then encode the graph into the self-hosted
  /// loader text.
  pub fn build(&mut self) -> BuildResult<BundleOutput> {
    let scan_output = self.scan()?;

    let code = GenerateStage::new(&scan_output.graph).render();

    Ok(BundleOutput { code, warnings: scan_output.warnings })
  }

  pub fn options(&self) -> &SharedOptions {
    &self.options
  }
}
