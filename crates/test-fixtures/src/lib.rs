//! Test fixture loader for fraudscan golden datasets.
//!
//! Provides typed deserialization of fixture JSON files and helper functions
//! for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
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

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// One golden detection scenario.
///
/// `expected_keywords_contains` is a lower bound; `expected_keywords`, when
/// present, is the exact ordered list. Categories and cases are exact.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionScenario {
    pub id: String,
    pub input: String,
    #[serde(default)]
    pub expected_keywords: Option<Vec<String>>,
    #[serde(default)]
    pub expected_keywords_contains: Vec<String>,
    pub expected_categories: Vec<String>,
    /// Case descriptions, in repository order.
    pub expected_cases: Vec<String>,
}

/// A golden file: a named list of scenarios.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionGolden {
    pub description: String,
    pub scenarios: Vec<DetectionScenario>,
}

/// Load every golden detection file.
pub fn load_detection_goldens() -> Vec<DetectionGolden> {
    list_fixtures("golden/detection")
        .iter()
        .map(|path| {
            let relative = path
                .strip_prefix(fixtures_root())
                .unwrap_or_else(|_| panic!("fixture outside root: {}", path.display()));
            load_fixture(&relative.to_string_lossy())
        })
        .collect()
}
