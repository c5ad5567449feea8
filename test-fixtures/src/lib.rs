//! Fixture loader for tessera golden datasets.
//!
//! Fixtures are JSON files under `test-fixtures/`, found by walking up from
//! the manifest directory of whichever crate is running its tests.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// A small temporal graph plus the templates and canned embeddings that go with it.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphFixture {
    #[serde(default)]
    pub description: String,
    pub nodes: Vec<NodeFixture>,
    pub edges: Vec<EdgeFixture>,
    pub node_template: String,
    pub edge_template: String,
    /// Document text → vector. Texts missing here are an error for the provider.
    pub embeddings: BTreeMap<String, Vec<f32>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeFixture {
    pub time: i64,
    pub name: String,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EdgeFixture {
    pub time: i64,
    pub src: String,
    pub dst: String,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl GraphFixture {
    /// Vector for `text`, if the fixture defines one.
    pub fn embedding(&self, text: &str) -> Option<Vec<f32>> {
        self.embeddings.get(text).cloned()
    }
}

/// The four-node graph most integration tests run against.
pub fn four_node_graph() -> GraphFixture {
    load_fixture("golden/four_node_graph.json")
}
