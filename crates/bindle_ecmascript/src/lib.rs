mod transform;

use std::path::Path;

use bindle_common::{ProcessedSource, SourceProcessor};

use crate::transform::transform_module;

/// Statement-level ESM frontend for the bundler.
///
/// Recognizes the import/export statement subset that the generated loader
/// can express through `require`, `module` and `exports`:
///
/// - `import name from "spec";`
/// - `import { a, b as c } from "spec";`
/// - `import * as ns from "spec";`
/// - `import "spec";`
/// - `export default <expr>;`
/// - `export const|let|var name = <expr>;`
/// - `export function|class name ...`
/// - `export { a, b as c };`
///
/// Imports and exports must be single-line statements; anything else that
/// starts an `import`/`export` statement is a processing error rather than
/// silently passed through to the runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct EcmaProcessor;

impl SourceProcessor for EcmaProcessor {
  fn process(&self, _path: &Path, source: &str) -> anyhow::Result<ProcessedSource> {
    transform_module(source)
  }
}
