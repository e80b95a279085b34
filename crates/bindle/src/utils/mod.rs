pub mod normalize_options;
pub mod resolve_specifier;
