//! Canned page snapshots for integration tests, loaded from the workspace
//! `fixtures/` directory via a small manifest.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    pages: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

/// Raw snapshot JSON for a named page fixture.
pub fn page_snapshot_json(name: &str) -> Result<String> {
    let rel = MANIFEST
        .pages
        .get(name)
        .ok_or_else(|| anyhow!("unknown page fixture: {name}"))?;
    let path = fixtures_root().join(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

/// Names of all page fixtures in the manifest.
pub fn page_names() -> Vec<String> {
    let mut names: Vec<String> = MANIFEST.pages.keys().cloned().collect();
    names.sort();
    names
}
