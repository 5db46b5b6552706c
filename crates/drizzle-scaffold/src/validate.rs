//! Target project validation
//!
//! A target qualifies when it has a parsable `package.json` that depends on
//! `next` (either dependency section) and carries a Next.js config file under
//! one of the recognized names. All-or-nothing; any I/O or parse failure is a
//! plain `false`.

use serde_json::Value;
use std::path::Path;

/// Recognized Next.js config file names, checked in order
const NEXT_CONFIG_FILES: &[&str] = &["next.config.js", "next.config.mjs", "next.config.ts"];

/// Dependency that marks the target as a Next.js project
const REQUIRED_DEPENDENCY: &str = "next";

/// Check whether `dir` looks like a Next.js project we can scaffold into.
pub fn is_valid_target(dir: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(dir.join("package.json")) else {
        return false;
    };
    let Ok(manifest) = serde_json::from_str::<Value>(&content) else {
        return false;
    };

    let has_next = ["dependencies", "devDependencies"].iter().any(|section| {
        manifest
            .get(section)
            .and_then(|deps| deps.get(REQUIRED_DEPENDENCY))
            .is_some()
    });
    if !has_next {
        return false;
    }

    NEXT_CONFIG_FILES.iter().any(|name| dir.join(name).exists())
}

/// Read the `next` version requirement from the target manifest, if present.
/// Used only for the advisory version warning; `None` never blocks the run.
pub fn next_version_requirement(dir: &Path) -> Option<String> {
    let content = std::fs::read_to_string(dir.join("package.json")).ok()?;
    let manifest: Value = serde_json::from_str(&content).ok()?;

    ["dependencies", "devDependencies"].iter().find_map(|section| {
        manifest
            .get(section)?
            .get(REQUIRED_DEPENDENCY)?
            .as_str()
            .map(str::to_string)
    })
}
