use std::path::Path;

use bindle_utils::indexmap::FxIndexMap;

use crate::{AssetIdx, ModuleId};

/// One processed source module.
///
/// Everything except `mapping` is fixed at creation time. `mapping` fills in
/// while the graph traversal resolves this asset's dependencies and is
/// immutable afterwards.
#[derive(Debug)]
pub struct Asset {
  /// Discovery-order index, unique within a build. Never reused, even when
  /// two specifiers resolve to the same file; the later reference reuses
  /// the existing asset instead of minting a new index.
  pub idx: AssetIdx,
  pub id: ModuleId,
  /// Raw specifiers exactly as written, in source order, duplicates kept.
  pub dependencies: Vec<String>,
  /// Transformed source, opaque to the bundler.
  pub code: String,
  /// Raw specifier -> dependency asset. Keys are a subset of
  /// `dependencies`; a missing key records a resolution failure.
  pub mapping: FxIndexMap<String, AssetIdx>,
}

impl Asset {
  pub fn stable_id(&self, cwd: &Path) -> String {
    self.id.stabilize(cwd)
  }
}
