pub mod asset;
pub mod asset_graph;
pub mod module_id;
pub mod raw_idx;
pub mod source;
pub mod source_joiner;
