use std::path::Path;

/// Result of processing one module's source text.
#[derive(Debug)]
pub struct ProcessedSource {
  /// Raw import specifiers in source order. Duplicates are preserved here
  /// and collapse later when the graph fills the specifier mapping.
  pub dependencies: Vec<String>,
  /// Code runnable inside the generated loader, i.e. it only reaches the
  /// outside world through `require`, `module` and `exports`.
  pub code: String,
}

/// External collaborator that parses a module into its dependency list and
/// transforms it for the generated loader. The bundler treats the returned
/// code as opaque text and never reparses it.
pub trait SourceProcessor: Send + Sync {
  fn process(&self, path: &Path, source: &str) -> anyhow::Result<ProcessedSource>;
}
