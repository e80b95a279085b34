use std::sync::LazyLock;

use anyhow::bail;
use bindle_common::ProcessedSource;
use bindle_utils::concat_string;
use regex::Regex;

static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"^\s*import\s+(?:(?P<bindings>.+?)\s+from\s+)?["'](?P<spec>[^"']+)["']\s*;?\s*$"#)
    .unwrap()
});

static IMPORT_START_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*import\b").unwrap());

static NAMESPACE_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\*\s*as\s+(?P<name>[A-Za-z_$][A-Za-z0-9_$]*)$").unwrap());

static IDENT_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

static EXPORT_DEFAULT_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(?P<indent>\s*)export\s+default\s+(?P<rest>.*)$").unwrap());

static EXPORT_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"^(?P<indent>\s*)export\s+(?P<kw>const|let|var)\s+(?P<name>[A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(?P<init>.*)$",
  )
  .unwrap()
});

static EXPORT_HOISTED_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"^(?P<indent>\s*)export\s+(?P<kw>function|class)\s+(?P<name>[A-Za-z_$][A-Za-z0-9_$]*)(?P<rest>.*)$",
  )
  .unwrap()
});

static EXPORT_LIST_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\s*export\s*\{(?P<list>[^}]*)\}\s*;?\s*$").unwrap());

static EXPORT_START_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*export\b").unwrap());

/// Scan one module for its import specifiers and rewrite it into code that
/// only talks to the loader through `require`, `module` and `exports`.
pub fn transform_module(source: &str) -> anyhow::Result<ProcessedSource> {
  let mut dependencies = Vec::new();
  let mut hoisted_exports = Vec::new();
  let mut lines = Vec::new();

  for line in source.lines() {
    if let Some(caps) = IMPORT_RE.captures(line) {
      let specifier = &caps["spec"];
      let require_call = concat_string!("require(", quote(specifier), ")");

      let rewritten = match caps.name("bindings") {
        None => concat_string!(require_call, ";"),
        Some(bindings) => render_import_bindings(bindings.as_str().trim(), &require_call, line)?,
      };

      dependencies.push(specifier.to_string());
      lines.push(rewritten);
    } else if IMPORT_START_RE.is_match(line) {
      bail!("Unsupported import statement: `{}`", line.trim());
    } else if let Some(caps) = EXPORT_DEFAULT_RE.captures(line) {
      lines.push(concat_string!(&caps["indent"], "module.exports.default = ", &caps["rest"]));
    } else if let Some(caps) = EXPORT_DECL_RE.captures(line) {
      let name = &caps["name"];
      lines.push(concat_string!(
        &caps["indent"],
        &caps["kw"],
        " ",
        name,
        " = module.exports.",
        name,
        " = ",
        &caps["init"]
      ));
    } else if let Some(caps) = EXPORT_HOISTED_RE.captures(line) {
      let name = &caps["name"];
      lines.push(concat_string!(&caps["indent"], &caps["kw"], " ", name, &caps["rest"]));
      hoisted_exports.push(concat_string!("module.exports.", name, " = ", name, ";"));
    } else if let Some(caps) = EXPORT_LIST_RE.captures(line) {
      let mut rewritten = Vec::new();
      for (local, exported) in parse_binding_list(&caps["list"], line)? {
        rewritten.push(concat_string!("module.exports.", exported, " = ", local, ";"));
      }
      lines.push(rewritten.join(" "));
    } else if EXPORT_START_RE.is_match(line) {
      bail!("Unsupported export statement: `{}`", line.trim());
    } else {
      lines.push(line.to_string());
    }
  }

  lines.extend(hoisted_exports);

  Ok(ProcessedSource { dependencies, code: lines.join("\n") })
}

fn render_import_bindings(
  bindings: &str,
  require_call: &str,
  line: &str,
) -> anyhow::Result<String> {
  if IDENT_RE.is_match(bindings) {
    // Default imports pair with `export default`, which lands on `.default`.
    return Ok(concat_string!("const ", bindings, " = ", require_call, ".default;"));
  }

  if let Some(caps) = NAMESPACE_RE.captures(bindings) {
    return Ok(concat_string!("const ", &caps["name"], " = ", require_call, ";"));
  }

  if let Some(list) = bindings.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
    let mut patterns = Vec::new();
    for (imported, local) in parse_binding_list(list, line)? {
      if imported == local {
        patterns.push(imported);
      } else {
        patterns.push(concat_string!(imported, ": ", local));
      }
    }
    return Ok(concat_string!("const { ", patterns.join(", "), " } = ", require_call, ";"));
  }

  bail!("Unsupported import bindings: `{}`", line.trim());
}

/// Parse `a, b as c` into `(a, a)` and `(b, c)` pairs.
fn parse_binding_list(list: &str, line: &str) -> anyhow::Result<Vec<(String, String)>> {
  let mut ret = Vec::new();

  for item in list.split(',') {
    let item = item.trim();
    if item.is_empty() {
      continue;
    }

    let (left, right) = match item.split_once(" as ") {
      Some((left, right)) => (left.trim(), right.trim()),
      None => (item, item),
    };

    if !IDENT_RE.is_match(left) || !IDENT_RE.is_match(right) {
      bail!("Unsupported binding `{}` in `{}`", item, line.trim());
    }

    ret.push((left.to_string(), right.to_string()));
  }

  Ok(ret)
}

fn quote(specifier: &str) -> String {
  let escaped = specifier.replace('\\', "\\\\").replace('"', "\\\"");
  concat_string!("\"", escaped, "\"")
}

#[test]
fn test_import_forms() {
  let source = [
    "import \"./setup.js\";",
    "import util from './util.js';",
    "import { a, b as c } from \"./named.js\";",
    "import * as ns from './ns.js';",
  ]
  .join("\n");

  let processed = transform_module(&source).unwrap();
  assert_eq!(processed.dependencies, ["./setup.js", "./util.js", "./named.js", "./ns.js"]);
  assert_eq!(
    processed.code,
    [
      "require(\"./setup.js\");",
      "const util = require(\"./util.js\").default;",
      "const { a, b: c } = require(\"./named.js\");",
      "const ns = require(\"./ns.js\");",
    ]
    .join("\n")
  );
}

#[test]
fn test_duplicate_specifiers_are_preserved() {
  let source = "import { a } from './x.js';\nimport { b } from './x.js';";
  let processed = transform_module(source).unwrap();
  assert_eq!(processed.dependencies, ["./x.js", "./x.js"]);
}

#[test]
fn test_export_forms() {
  let source = [
    "export default 42;",
    "export const answer = 1 + 1;",
    "export function greet(name) { return name; }",
    "export { greet as hello };",
  ]
  .join("\n");

  let processed = transform_module(&source).unwrap();
  assert!(processed.dependencies.is_empty());
  assert_eq!(
    processed.code,
    [
      "module.exports.default = 42;",
      "const answer = module.exports.answer = 1 + 1;",
      "function greet(name) { return name; }",
      "module.exports.hello = greet;",
      "module.exports.greet = greet;",
    ]
    .join("\n")
  );
}

#[test]
fn test_unsupported_import_is_rejected() {
  assert!(transform_module("import {\n  a\n} from './x.js';").is_err());
  assert!(transform_module("import './unterminated").is_err());
}

#[test]
fn test_plain_code_passes_through() {
  let source = "const x = 1;\nconsole.log(x);";
  let processed = transform_module(source).unwrap();
  assert!(processed.dependencies.is_empty());
  assert_eq!(processed.code, source);
}
