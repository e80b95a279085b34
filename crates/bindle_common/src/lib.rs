mod bundler_options;
mod source_processor;
mod types;

pub use bundler_options::{
  normalized_bundler_options::NormalizedBundlerOptions, BundlerOptions,
};

pub use crate::{
  source_processor::{ProcessedSource, SourceProcessor},
  types::{
    asset::Asset,
    asset_graph::AssetGraph,
    module_id::ModuleId,
    raw_idx::{AssetIdx, ENTRY_ASSET_IDX},
    source::Source,
    source_joiner::SourceJoiner,
  },
};
