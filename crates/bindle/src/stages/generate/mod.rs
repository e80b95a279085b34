use bindle_common::{Asset, AssetGraph, SourceJoiner};
use bindle_utils::{concat_string, indexmap::FxIndexMap};

/// The self-hosted loader wrapped around the module registry.
///
/// `require` caches the module object *before* running its factory, so every
/// module's top level runs exactly once and circular requires observe a
/// partially populated exports object instead of recursing forever.
/// `localRequire` refuses specifiers missing from the mapping instead of
/// producing an undefined lookup, which is how recorded resolution failures
/// surface at runtime.
const RUNTIME: &str = r#"  var cache = {};
  function require(id) {
    if (Object.prototype.hasOwnProperty.call(cache, id)) {
      return cache[id].exports;
    }
    if (!Object.prototype.hasOwnProperty.call(modules, id)) {
      throw new Error("Unknown module id: " + id);
    }
    var factory = modules[id][0];
    var mapping = modules[id][1];
    function localRequire(specifier) {
      if (!Object.prototype.hasOwnProperty.call(mapping, specifier)) {
        throw new Error("Cannot find module '" + specifier + "'");
      }
      return require(mapping[specifier]);
    }
    var module = { exports: {} };
    cache[id] = module;
    factory(localRequire, module, module.exports);
    return module.exports;
  }"#;

/// Serializes an asset graph into one executable text. Pure; the graph is
/// not touched again after this stage consumes it.
pub struct GenerateStage<'graph> {
  graph: &'graph AssetGraph,
}

impl<'graph> GenerateStage<'graph> {
  pub fn new(graph: &'graph AssetGraph) -> Self {
    Self { graph }
  }

  pub fn render(&self) -> String {
    let mut source_joiner = SourceJoiner::default();

    source_joiner.append_source("(function(modules) {");
    source_joiner.append_source(RUNTIME);
    // Boot by requiring the entry asset, exactly once.
    source_joiner.append_source("  require(0);");
    source_joiner.append_source("})({");

    for asset in self.graph.iter() {
      source_joiner.append_source(render_registry_entry(asset));
    }

    source_joiner.append_source("});");

    source_joiner.join()
  }
}

/// One registry entry: `<id>: [factory, mapping]`. The factory closes the
/// asset's code over `require`, `module` and `exports`; the mapping is the
/// specifier-to-id table the loader dispatches `localRequire` through.
fn render_registry_entry(asset: &Asset) -> String {
  let mut id_buffer = itoa::Buffer::new();
  let id = id_buffer.format(asset.idx.index());

  let mapping: FxIndexMap<&str, usize> =
    asset.mapping.iter().map(|(specifier, idx)| (specifier.as_str(), idx.index())).collect();
  let mapping_json =
    serde_json::to_string(&mapping).expect("Specifier mapping should serialize to JSON");

  concat_string!(
    "  ",
    id,
    ": [function(require, module, exports) {\n",
    &asset.code,
    "\n  }, ",
    mapping_json,
    "],"
  )
}
