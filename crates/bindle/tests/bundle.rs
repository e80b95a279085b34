use std::path::Path;
use std::sync::Arc;

use bindle::{AssetIdx, Bundler, BundlerOptions};
use bindle_ecmascript::EcmaProcessor;

fn write_fixture(dir: &Path, files: &[(&str, &str)]) {
  for (name, source) in files {
    std::fs::write(dir.join(name), source).unwrap();
  }
}

fn bundler_in(dir: &Path) -> Bundler {
  let options = BundlerOptions {
    input: Some("./entry.js".to_string()),
    cwd: Some(dir.to_path_buf()),
    ..Default::default()
  };
  Bundler::new(options, Arc::new(EcmaProcessor))
}

fn stable_ids(output: &bindle::ScanStageOutput, cwd: &Path) -> Vec<String> {
  output.graph.iter().map(|asset| asset.stable_id(cwd)).collect()
}

#[test]
fn discovery_order_is_breadth_first() {
  let dir = tempfile::tempdir().unwrap();
  write_fixture(
    dir.path(),
    &[
      ("entry.js", "import { a } from './a.js';\nimport { b } from './b.js';\nconsole.log(a, b);"),
      ("a.js", "import { b } from './b.js';\nexport const a = b + 1;"),
      ("b.js", "export const b = 2;"),
    ],
  );

  let output = bundler_in(dir.path()).scan().unwrap();

  assert_eq!(stable_ids(&output, dir.path()), ["entry.js", "a.js", "b.js"]);

  // `./b.js` is discovered during the entry's own dependency walk, before
  // `a.js` is popped from the queue; `a.js` then maps it from `seen`.
  let entry = output.graph.entry().unwrap();
  assert_eq!(entry.mapping["./a.js"].index(), 1);
  assert_eq!(entry.mapping["./b.js"].index(), 2);
  assert_eq!(output.graph.assets[AssetIdx::from_usize(1)].mapping["./b.js"].index(), 2);
  assert!(output.warnings.is_empty());
}

#[test]
fn diamond_dependency_is_deduplicated() {
  let dir = tempfile::tempdir().unwrap();
  write_fixture(
    dir.path(),
    &[
      ("entry.js", "import './a.js';\nimport './b.js';"),
      ("a.js", "import { value } from './shared.js';\nexport const a = value;"),
      ("b.js", "import { value } from './shared.js';\nexport const b = value;"),
      ("shared.js", "export const value = 1;"),
    ],
  );

  let output = bundler_in(dir.path()).scan().unwrap();

  assert_eq!(stable_ids(&output, dir.path()), ["entry.js", "a.js", "b.js", "shared.js"]);

  // Both importers share the one asset built for the common path.
  let a = &output.graph.assets[AssetIdx::from_usize(1)];
  let b = &output.graph.assets[AssetIdx::from_usize(2)];
  assert_eq!(a.mapping["./shared.js"], b.mapping["./shared.js"]);

  // Indices stay unique across the whole graph.
  let mut indices: Vec<_> = output.graph.iter().map(|asset| asset.idx.index()).collect();
  indices.dedup();
  assert_eq!(indices, [0, 1, 2, 3]);
}

#[test]
fn dependency_cycle_terminates() {
  let dir = tempfile::tempdir().unwrap();
  write_fixture(
    dir.path(),
    &[
      ("entry.js", "import { pong } from './other.js';\nexport const ping = 'ping';"),
      ("other.js", "import { ping } from './entry.js';\nexport const pong = 'pong';"),
    ],
  );

  let output = bundler_in(dir.path()).scan().unwrap();

  assert_eq!(output.graph.len(), 2);
  let entry = output.graph.entry().unwrap();
  let other = &output.graph.assets[AssetIdx::from_usize(1)];
  assert_eq!(entry.mapping["./other.js"].index(), 1);
  assert_eq!(other.mapping["./entry.js"].index(), 0);
}

#[test]
fn duplicate_specifiers_collapse_to_one_mapping_entry() {
  let dir = tempfile::tempdir().unwrap();
  write_fixture(
    dir.path(),
    &[
      ("entry.js", "import { a } from './x.js';\nimport { b } from './x.js';"),
      ("x.js", "export const a = 1;\nexport const b = 2;"),
    ],
  );

  let output = bundler_in(dir.path()).scan().unwrap();

  let entry = output.graph.entry().unwrap();
  assert_eq!(entry.dependencies, ["./x.js", "./x.js"]);
  assert_eq!(entry.mapping.len(), 1);
  assert_eq!(output.graph.len(), 2);
}

#[test]
fn extensionless_specifier_reuses_explicit_one() {
  let dir = tempfile::tempdir().unwrap();
  write_fixture(
    dir.path(),
    &[
      ("entry.js", "import './util';\nimport './util.js';"),
      ("util.js", "export const u = 1;"),
    ],
  );

  let output = bundler_in(dir.path()).scan().unwrap();

  let entry = output.graph.entry().unwrap();
  assert_eq!(output.graph.len(), 2);
  assert_eq!(entry.mapping["./util"], entry.mapping["./util.js"]);
}

#[test]
fn missing_dependency_degrades_to_warning() {
  let dir = tempfile::tempdir().unwrap();
  write_fixture(
    dir.path(),
    &[("entry.js", "import { gone } from './missing.js';\nexport const ok = true;")],
  );

  let output = bundler_in(dir.path()).build().unwrap();

  assert_eq!(output.warnings.len(), 1);
  let rendered = output.warnings[0].to_string();
  assert!(rendered.contains("./missing.js"), "warning should name the specifier: {rendered}");
  assert!(rendered.contains("entry.js"), "warning should name the importer: {rendered}");

  // The bundle is still emitted; the loader throws only if the broken
  // specifier is actually required.
  assert!(output.code.contains("Cannot find module"));
  assert!(output.code.contains("0: [function(require, module, exports) {"));
  assert!(output.code.contains(", {}],"));
}

#[test]
fn missing_entry_fails_the_build() {
  let dir = tempfile::tempdir().unwrap();

  let result = bundler_in(dir.path()).build();

  let errors = result.err().unwrap();
  assert_eq!(errors.len(), 1);
  assert!(errors[0].to_string().contains("Failed to create asset for entry"));
}

#[test]
fn strict_mode_promotes_unresolved_to_errors() {
  let dir = tempfile::tempdir().unwrap();
  write_fixture(dir.path(), &[("entry.js", "import './missing.js';")]);

  let options = BundlerOptions {
    input: Some("./entry.js".to_string()),
    cwd: Some(dir.path().to_path_buf()),
    fail_on_unresolved: Some(true),
    ..Default::default()
  };
  let result = Bundler::new(options, Arc::new(EcmaProcessor)).build();

  let errors = result.err().unwrap();
  assert_eq!(errors.len(), 1);
  assert!(errors[0].to_string().contains("./missing.js"));
}

#[test]
fn unprocessable_entry_fails_the_build() {
  let dir = tempfile::tempdir().unwrap();
  write_fixture(dir.path(), &[("entry.js", "import {\n  broken\n} from './x.js';")]);

  let result = bundler_in(dir.path()).build();
  assert!(result.is_err());
}

#[test]
fn bundle_has_loader_registry_and_bootstrap() {
  let dir = tempfile::tempdir().unwrap();
  write_fixture(
    dir.path(),
    &[
      ("entry.js", "import answer from './answer.js';\nconsole.log(answer);"),
      ("answer.js", "export default 42;"),
    ],
  );

  let output = bundler_in(dir.path()).build().unwrap();
  let code = &output.code;

  assert!(code.starts_with("(function(modules) {"));
  assert!(code.trim_end().ends_with("});"));
  assert!(code.contains("  require(0);"));

  // Registry entries carry the transformed code and the specifier table.
  assert!(code.contains("0: [function(require, module, exports) {"));
  assert!(code.contains("const answer = require(\"./answer.js\").default;"));
  assert!(code.contains(", {\"./answer.js\":1}],"));
  assert!(code.contains("1: [function(require, module, exports) {"));
  assert!(code.contains("module.exports.default = 42;"));

  // Evaluation-once: the module object is cached before its factory runs,
  // so re-entrant requires see the partial exports instead of recursing.
  let cache_at = code.find("cache[id] = module;").unwrap();
  let factory_at = code.find("factory(localRequire, module, module.exports);").unwrap();
  assert!(cache_at < factory_at);
  assert!(code.contains("return cache[id].exports;"));
}
