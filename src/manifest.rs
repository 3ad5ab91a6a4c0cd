//! Base version lookup from the project manifest
//!
//! The manifest declares a bare `X.Y.Z` version (no `v` prefix) that anchors
//! feature/fix bumps. A missing file, a manifest without a version field, or
//! an unparsable value all degrade to the conventional `0.1.0` base rather
//! than aborting the run.

use crate::domain::SemanticVersion;
use std::fs;
use std::path::Path;

/// Conventional base when the manifest yields no usable version
fn fallback() -> SemanticVersion {
    SemanticVersion::new(0, 1, 0)
}

/// Read the declared base version from a TOML manifest
///
/// Looks for `[package].version` first (Cargo layout), then a top-level
/// `version` key.
pub fn base_version<P: AsRef<Path>>(manifest_path: P) -> SemanticVersion {
    let text = match fs::read_to_string(manifest_path) {
        Ok(text) => text,
        Err(_) => return fallback(),
    };

    let value: toml::Value = match toml::from_str(&text) {
        Ok(value) => value,
        Err(_) => return fallback(),
    };

    let declared = value
        .get("package")
        .and_then(|pkg| pkg.get("version"))
        .or_else(|| value.get("version"))
        .and_then(|v| v.as_str());

    declared
        .and_then(SemanticVersion::parse)
        .unwrap_or_else(fallback)
}
