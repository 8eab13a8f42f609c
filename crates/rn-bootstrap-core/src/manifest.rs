//! Generated-project manifest finalization
//!
//! Merges the fixed convenience-script mapping into the generated project's
//! `package.json`. Only the recognized script names are replaced; every
//! other script and every unrelated top-level field rides along untouched.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Convenience scripts merged into every generated manifest.
pub const CONVENIENCE_SCRIPTS: &[(&str, &str)] = &[
    ("type-check", "tsc --noEmit"),
    ("lint:fix", "eslint . --fix"),
    ("test:watch", "jest --watch"),
    ("test:coverage", "jest --coverage"),
    ("clean", "react-native clean"),
    ("clean:android", "cd android && ./gradlew clean && cd .."),
    ("clean:ios", "cd ios && xcodebuild clean && cd .."),
    ("pod-install", "cd ios && pod install && cd .."),
];

/// The slice of package.json this tool touches; everything else is carried
/// through the round trip verbatim.
#[derive(Debug, Serialize, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    scripts: Map<String, Value>,

    #[serde(flatten)]
    rest: Map<String, Value>,
}

/// Merge the convenience scripts into `package.json` under `project_dir`
/// and rewrite it pretty-printed.
///
/// A missing or unparseable manifest is fatal: the project would otherwise
/// be left half-configured.
pub fn finalize_manifest(project_dir: &Path) -> Result<()> {
    let path = project_dir.join("package.json");
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut manifest: PackageManifest = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    for (name, command) in CONVENIENCE_SCRIPTS {
        manifest
            .scripts
            .insert((*name).to_string(), Value::String((*command).to_string()));
    }

    let serialized =
        serde_json::to_string_pretty(&manifest).context("failed to serialize package.json")?;
    fs::write(&path, serialized + "\n")
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
