//! Package manager detection and dependency installation
//!
//! The manager is picked from the target's lockfile, not from what happens to
//! be on PATH: the scaffold must not mix a second lockfile into the project.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

/// Runtime dependencies added to the target project
pub const DEPENDENCIES: &[&str] = &["drizzle-orm", "postgres", "zod"];

/// Development dependencies added to the target project
pub const DEV_DEPENDENCIES: &[&str] = &["drizzle-kit", "dotenv", "tsx"];

/// Supported package managers, detected by lockfile marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Detect the manager from lockfiles in `dir`, defaulting to npm
    pub fn detect(dir: &Path) -> Self {
        if dir.join("pnpm-lock.yaml").exists() {
            PackageManager::Pnpm
        } else if dir.join("yarn.lock").exists() {
            PackageManager::Yarn
        } else if dir.join("bun.lockb").exists() || dir.join("bun.lock").exists() {
            PackageManager::Bun
        } else {
            PackageManager::Npm
        }
    }

    /// Binary name to invoke
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Arguments for installing `packages`, as dev dependencies when `dev`
    fn install_args(&self, packages: &[&str], dev: bool) -> Vec<String> {
        let mut args: Vec<String> = match self {
            PackageManager::Npm => vec!["install".into()],
            PackageManager::Pnpm | PackageManager::Yarn | PackageManager::Bun => {
                vec!["add".into()]
            }
        };
        if dev {
            args.push(match self {
                PackageManager::Npm => "--save-dev".into(),
                PackageManager::Bun => "--dev".into(),
                PackageManager::Pnpm | PackageManager::Yarn => "-D".into(),
            });
        }
        args.extend(packages.iter().map(|p| p.to_string()));
        args
    }

    /// Run one install invocation in `dir`, surfacing stderr on failure
    async fn run_install(&self, dir: &Path, packages: &[&str], dev: bool) -> Result<()> {
        let args = self.install_args(packages, dev);
        let output = Command::new(self.command())
            .args(&args)
            .current_dir(dir)
            .output()
            .await
            .with_context(|| format!("Failed to run {}", self.command()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "{} {} exited with {}: {}",
                self.command(),
                args.join(" "),
                output.status.code().unwrap_or(-1),
                stderr.trim()
            );
        }
        Ok(())
    }

    /// Install the fixed dependency and dev-dependency sets into `dir`.
    /// Opaque blocking step; no timeout, no retry.
    pub async fn install_all(&self, dir: &Path) -> Result<()> {
        self.run_install(dir, DEPENDENCIES, false).await?;
        self.run_install(dir, DEV_DEPENDENCIES, true).await?;
        Ok(())
    }
}
