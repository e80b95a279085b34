use bindle_error::BuildDiagnostic;

/// The single artifact of a build plus everything non-fatal that went wrong
/// while producing it.
#[derive(Debug)]
pub struct BundleOutput {
  pub code: String,
  pub warnings: Vec<BuildDiagnostic>,
}
