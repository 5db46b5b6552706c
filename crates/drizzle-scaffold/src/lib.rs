//! Drizzle Scaffold - Core library for the `drizzle-tools` CLI
//!
//! This library retrofits Drizzle ORM (PostgreSQL flavor) into an existing
//! Next.js project. The CLI binary is a thin wrapper; everything testable
//! lives here.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions for target validation,
//!   template rendering/writing, and manifest patching
//! - **Layer 2: Workflow Orchestration** - The sequential init flow with a
//!   returned [`RunOutcome`] instead of process-level side effects
//! - **Layer 3: CLI/TUI Interface** - cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module

pub mod config;
pub mod error;
pub mod manifest;
pub mod pm;
pub mod templates;
pub mod validate;
pub mod version;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{DatabaseConfig, DEFAULT_DATABASE_URL};
pub use error::{RunOutcome, StepError};
pub use manifest::{patch_scripts, SCRIPTS};
pub use pm::PackageManager;
pub use templates::{generate, registry, TemplateFile};
pub use validate::is_valid_target;

#[cfg(feature = "tui")]
pub use tui::{run, InitArgs};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // End-to-end over a tempdir fixture, skipping only the package-manager
    // invocation: every template path exists afterwards and the manifest
    // gains exactly the four db:* scripts on top of what was there.
    #[tokio::test]
    async fn scaffold_then_patch_full_fixture() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{
  "name": "demo-app",
  "version": "0.1.0",
  "scripts": {
    "dev": "next dev",
    "build": "next build"
  },
  "dependencies": {
    "next": "14.0.0"
  }
}"#,
        )
        .unwrap();
        fs::write(dir.path().join("next.config.js"), "module.exports = {};\n").unwrap();

        assert!(is_valid_target(dir.path()));

        let db = DatabaseConfig {
            database_url: Some("postgres://demo:demo@db:5432/demo".to_string()),
        };
        let written = generate(dir.path(), &db).await.unwrap();
        assert_eq!(written.len(), registry().len());
        for template in registry() {
            assert!(
                dir.path().join(template.path).is_file(),
                "missing {}",
                template.path
            );
        }

        patch_scripts(dir.path()).unwrap();
        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("package.json")).unwrap())
                .unwrap();
        let scripts = manifest["scripts"].as_object().unwrap();
        assert_eq!(scripts["dev"], "next dev");
        assert_eq!(scripts["build"], "next build");
        assert_eq!(scripts["db:generate"], "drizzle-kit generate");
        assert_eq!(scripts["db:seed"], "tsx src/server/db/seed.ts");
        assert_eq!(scripts.len(), 2 + SCRIPTS.len());

        let env_example =
            fs::read_to_string(dir.path().join(".env.example")).unwrap();
        assert!(env_example.contains("postgres://demo:demo@db:5432/demo"));
    }

    #[test]
    fn invalid_target_is_rejected_without_writes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"dependencies": {"react": "18.0.0"}}"#,
        )
        .unwrap();

        assert!(!is_valid_target(dir.path()));
        // The orchestrator gates on the validator, so nothing below runs;
        // the target stays untouched.
        assert!(!dir.path().join("drizzle.config.ts").exists());
    }
}
