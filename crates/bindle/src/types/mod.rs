pub mod bundle_output;

use std::sync::Arc;

use bindle_common::{NormalizedBundlerOptions, SourceProcessor};
use bindle_fs::FileSystem;

pub type SharedOptions = Arc<NormalizedBundlerOptions>;
pub type SharedProcessor = Arc<dyn SourceProcessor>;
pub type SharedFileSystem = Arc<dyn FileSystem>;
