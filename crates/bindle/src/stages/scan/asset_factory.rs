use bindle_common::{Asset, AssetIdx, ModuleId};
use bindle_error::AssetError;
use bindle_utils::indexmap::FxIndexMap;
use sugar_path::SugarPath;

use crate::types::{SharedFileSystem, SharedProcessor};

/// Turns resolved paths into assets. Owns the index counter for one build;
/// indices are handed out in creation order and only for successful
/// creations, so a failed dependency never burns one.
pub struct AssetFactory {
  fs: SharedFileSystem,
  processor: SharedProcessor,
  next_idx: AssetIdx,
}

impl AssetFactory {
  pub fn new(fs: SharedFileSystem, processor: SharedProcessor) -> Self {
    Self { fs, processor, next_idx: AssetIdx::from_usize(0) }
  }

  pub fn create_asset(&mut self, id: &ModuleId) -> Result<Asset, AssetError> {
    let path = id.as_path();

    let source = self
      .fs
      .read_to_string(path)
      .map_err(|err| AssetError::read(id.inner().clone(), err))?;

    let processed = self
      .processor
      .process(path, &source)
      .map_err(|err| AssetError::processing(id.inner().clone(), err))?;

    let idx = self.next_idx;
    self.next_idx = AssetIdx::from_usize(idx.index() + 1);

    Ok(Asset {
      idx,
      id: id.clone(),
      dependencies: processed.dependencies,
      code: processed.code,
      mapping: FxIndexMap::default(),
    })
  }
}
