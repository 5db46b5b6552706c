//! package.json scripts patching
//!
//! Shallow merge of the fixed `db:*` script map into the target manifest.
//! Colliding names are overwritten by ours; every other script and every
//! unrelated manifest field is preserved, in original key order
//! (serde_json's `preserve_order` feature).

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::path::Path;

/// Scripts merged into the target manifest
pub const SCRIPTS: &[(&str, &str)] = &[
    ("db:generate", "drizzle-kit generate"),
    ("db:push", "drizzle-kit push"),
    ("db:studio", "drizzle-kit studio"),
    ("db:seed", "tsx src/server/db/seed.ts"),
];

/// Merge [`SCRIPTS`] into `target/package.json` and write it back with
/// 2-space indentation. Idempotent under repeated invocation.
pub fn patch_scripts(target: &Path) -> Result<()> {
    let manifest_path = target.join("package.json");
    let content = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
    let mut manifest: Value =
        serde_json::from_str(&content).context("Failed to parse package.json")?;

    let root = manifest
        .as_object_mut()
        .context("package.json is not a JSON object")?;

    let scripts = root
        .entry("scripts")
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .context("package.json \"scripts\" is not a JSON object")?;

    for (name, command) in SCRIPTS {
        scripts.insert((*name).to_string(), Value::String((*command).to_string()));
    }

    write_manifest(&manifest_path, &manifest)
}

fn write_manifest(path: &Path, manifest: &Value) -> Result<()> {
    let mut serialized =
        serde_json::to_string_pretty(manifest).context("Failed to serialize package.json")?;
    serialized.push('\n');
    std::fs::write(path, serialized)
        .with_context(|| format!("Failed to write {}", path.display()))
}
