pub mod asset_factory;

use std::collections::VecDeque;
use std::path::Path;

use bindle_common::{AssetGraph, AssetIdx, ModuleId, ENTRY_ASSET_IDX};
use bindle_error::{BuildDiagnostic, BuildResult};
use rustc_hash::FxHashMap;
use sugar_path::SugarPath;

use crate::{
  stages::scan::asset_factory::AssetFactory,
  types::{SharedFileSystem, SharedOptions, SharedProcessor},
  utils::resolve_specifier::resolve_specifier,
};

pub struct ScanStageOutput {
  pub graph: AssetGraph,
  pub warnings: Vec<BuildDiagnostic>,
}

pub struct ScanStage {
  options: SharedOptions,
  factory: AssetFactory,
}

impl ScanStage {
  pub fn new(fs: SharedFileSystem, options: SharedOptions, processor: SharedProcessor) -> Self {
    Self { factory: AssetFactory::new(fs, processor), options }
  }

  /// Breadth-first worklist over the dependency graph.
  ///
  /// `seen` maps every canonical path to the index of the one asset built
  /// for it, so diamonds collapse to a single asset and cycles terminate:
  /// a path enters the queue at most once. Specifiers that hit `seen` only
  /// fill the importer's mapping from the existing index.
  pub fn scan(mut self) -> BuildResult<ScanStageOutput> {
    let entry_id =
      resolve_specifier(&self.options.cwd, &self.options.input, &self.options.default_extension);

    // The entry module is the one dependency the build cannot degrade on.
    let entry = self.factory.create_asset(&entry_id).map_err(|err| {
      anyhow::Error::new(err).context(format!(
        "Failed to create asset for entry {}",
        entry_id.stabilize(&self.options.cwd)
      ))
    })?;
    debug_assert_eq!(entry.idx, ENTRY_ASSET_IDX);

    let mut graph = AssetGraph::default();
    let mut warnings = Vec::new();
    let mut seen: FxHashMap<ModuleId, AssetIdx> = FxHashMap::default();
    let mut queue: VecDeque<AssetIdx> = VecDeque::new();

    seen.insert(entry.id.clone(), entry.idx);
    queue.push_back(graph.assets.push(entry));

    while let Some(importer_idx) = queue.pop_front() {
      let importer_dir = graph.assets[importer_idx]
        .id
        .as_path()
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
      let dependencies = graph.assets[importer_idx].dependencies.clone();

      for specifier in dependencies {
        let resolved =
          resolve_specifier(&importer_dir, &specifier, &self.options.default_extension);

        // Dedup step: a path already turned into an asset is never
        // reprocessed, the later importer reuses the existing index.
        if let Some(&existing_idx) = seen.get(&resolved) {
          graph.assets[importer_idx].mapping.insert(specifier, existing_idx);
          continue;
        }

        match self.factory.create_asset(&resolved) {
          Ok(asset) => {
            let idx = asset.idx;
            seen.insert(asset.id.clone(), idx);
            graph.assets[importer_idx].mapping.insert(specifier, idx);
            let pushed_idx = graph.assets.push(asset);
            debug_assert_eq!(pushed_idx, idx);
            queue.push_back(idx);
          }
          Err(cause) => {
            // The specifier stays absent from the mapping; the generated
            // program only fails if it actually requires it.
            warnings.push(BuildDiagnostic::resolution_failure(
              graph.assets[importer_idx].stable_id(&self.options.cwd).into(),
              specifier,
              cause,
            ));
          }
        }
      }
    }

    if self.options.fail_on_unresolved && !warnings.is_empty() {
      return Err(warnings.into_iter().map(anyhow::Error::from).collect::<Vec<_>>().into());
    }

    Ok(ScanStageOutput { graph, warnings })
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use bindle_common::BundlerOptions;
  use bindle_ecmascript::EcmaProcessor;
  use bindle_error::AssetErrorKind;
  use bindle_fs::MemoryFileSystem;

  use super::*;
  use crate::utils::normalize_options::normalize_options;

  fn scan_with(files: &[(&str, &str)]) -> BuildResult<ScanStageOutput> {
    let fs = MemoryFileSystem::new(files.iter().copied());
    let options =
      normalize_options(BundlerOptions { cwd: Some("/app".into()), ..Default::default() });
    ScanStage::new(Arc::new(fs), Arc::new(options), Arc::new(EcmaProcessor)).scan()
  }

  #[test]
  fn entry_is_always_index_zero() {
    let output = scan_with(&[("/app/entry.js", "export const x = 1;")]).unwrap();
    assert_eq!(output.graph.entry().unwrap().idx, ENTRY_ASSET_IDX);
    assert_eq!(output.graph.len(), 1);
  }

  #[test]
  fn failed_dependency_does_not_burn_an_index() {
    let output = scan_with(&[
      ("/app/entry.js", "import './gone.js';\nimport './real.js';"),
      ("/app/real.js", "export const r = 1;"),
    ])
    .unwrap();

    assert_eq!(output.warnings.len(), 1);
    // `real.js` takes index 1 even though `gone.js` failed first.
    assert_eq!(output.graph.entry().unwrap().mapping["./real.js"].index(), 1);
    assert!(!output.graph.entry().unwrap().mapping.contains_key("./gone.js"));
  }

  #[test]
  fn unreadable_and_unprocessable_dependencies_are_distinct_kinds() {
    let output = scan_with(&[
      ("/app/entry.js", "import './gone.js';\nimport './broken.js';"),
      ("/app/broken.js", "import {\n  multiline\n} from './x.js';"),
    ])
    .unwrap();

    let kinds: Vec<_> = output
      .warnings
      .iter()
      .map(|warning| match warning {
        BuildDiagnostic::ResolutionFailure { cause, .. } => cause.kind,
      })
      .collect();
    assert_eq!(kinds, [AssetErrorKind::Read, AssetErrorKind::Processing]);
  }
}
