use std::path::Path;

use bindle_common::ModuleId;
use bindle_utils::path_ext::PathExt;
use sugar_path::SugarPath;

/// Resolve a raw specifier against the importing module's directory into a
/// canonical absolute path. Extensionless specifiers get the default module
/// extension appended, mirroring how the emitted `require` looks modules up
/// by the specifier exactly as written.
pub fn resolve_specifier(base_dir: &Path, specifier: &str, default_extension: &str) -> ModuleId {
  let mut resolved = specifier.as_path().absolutize_with(base_dir);

  if resolved.extension().is_none() {
    resolved.set_extension(default_extension);
  }

  ModuleId::new(dunce::simplified(&resolved).expect_to_str())
}

#[test]
fn test_resolves_against_importer_dir() {
  let dir = Path::new("/project/src");
  assert_eq!(&*resolve_specifier(dir, "./a.js", "js"), "/project/src/a.js");
  assert_eq!(&*resolve_specifier(dir, "../shared/b.js", "js"), "/project/shared/b.js");
}

#[test]
fn test_appends_default_extension() {
  let dir = Path::new("/project");
  assert_eq!(&*resolve_specifier(dir, "./util", "js"), "/project/util.js");
  // An explicit extension is left alone.
  assert_eq!(&*resolve_specifier(dir, "./data.json", "js"), "/project/data.json");
}

#[test]
fn test_extensionless_and_explicit_specifiers_collide() {
  let dir = Path::new("/project");
  assert_eq!(resolve_specifier(dir, "./util", "js"), resolve_specifier(dir, "./util.js", "js"));
}
