oxc_index::define_index_type! {
  #[derive(Default)]
  pub struct AssetIdx = u32;
}

/// The entry module always occupies slot 0 of the graph, and the generated
/// loader boots by requiring it.
pub const ENTRY_ASSET_IDX: AssetIdx = AssetIdx::from_usize_unchecked(0);
