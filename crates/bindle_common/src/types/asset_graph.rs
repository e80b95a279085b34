use oxc_index::IndexVec;

use crate::{Asset, AssetIdx, ENTRY_ASSET_IDX};

/// All assets reachable from the entry, in breadth-first discovery order.
/// The entry asset is always first. The graph only lives for one build.
#[derive(Debug, Default)]
pub struct AssetGraph {
  pub assets: IndexVec<AssetIdx, Asset>,
}

impl AssetGraph {
  pub fn entry(&self) -> Option<&Asset> {
    self.assets.get(ENTRY_ASSET_IDX)
  }

  pub fn iter(&self) -> impl Iterator<Item = &Asset> {
    self.assets.iter()
  }

  pub fn len(&self) -> usize {
    self.assets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.assets.is_empty()
  }
}
