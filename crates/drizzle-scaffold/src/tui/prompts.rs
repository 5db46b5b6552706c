//! Charm-style CLI prompts using cliclack

use crate::config::{DatabaseConfig, DEFAULT_DATABASE_URL};
use crate::error::{RunOutcome, StepError};
use crate::manifest;
use crate::pm::PackageManager;
use crate::templates;
use crate::validate;
use crate::version;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// CLI arguments for the init command
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Target project directory; defaults to the current directory
    pub dir: Option<PathBuf>,

    /// Skip the confirmation prompt and the connection-string prompt
    pub yes: bool,
}

/// Run the init flow: Validate -> [Confirm] -> InstallDeps -> WriteTemplates
/// -> PatchManifest. Strictly sequential, no retries; the first failing step
/// propagates as the matching [`StepError`].
pub async fn run(args: InitArgs) -> Result<RunOutcome> {
    cliclack::intro("drizzle-tools")?;

    let target = resolve_target_dir(&args);
    cliclack::log::info(format!("Target project: {}", target.display()))?;

    // Step 1: Validate the target
    if !validate::is_valid_target(&target) {
        cliclack::log::error(
            "This doesn't look like a Next.js project.\n\
             Expected a package.json depending on `next` and a next.config.{js,mjs,ts} file.",
        )?;
        cliclack::outro("Nothing was changed.")?;
        return Ok(RunOutcome::InvalidTarget);
    }
    cliclack::log::success("Next.js project detected")?;

    if let Some(requirement) = validate::next_version_requirement(&target) {
        if let Some(warning) = version::check_next_compatibility(&requirement) {
            cliclack::log::warning(warning.lines().next().unwrap_or(&warning))?;
        }
    }

    // Step 2: Confirm (skipped with --yes)
    if !args.yes {
        let confirm: bool = cliclack::confirm(
            "Set up Drizzle ORM in this project? This installs packages and writes files.",
        )
        .initial_value(true)
        .interact()?;

        if !confirm {
            cliclack::outro("Setup cancelled.")?;
            return Ok(RunOutcome::Declined);
        }
    }

    // Step 3: Collect the connection string (skipped with --yes)
    let db_config = if args.yes {
        DatabaseConfig::default()
    } else {
        collect_database_config()?
    };

    // Step 4: Install dependencies
    let manager = PackageManager::detect(&target);
    let spinner = cliclack::spinner();
    spinner.start(format!(
        "Installing dependencies with {}...",
        manager.command()
    ));
    match manager.install_all(&target).await {
        Ok(()) => spinner.stop("Dependencies installed"),
        Err(e) => {
            spinner.stop("Dependency installation failed");
            return Err(StepError::Install(e).into());
        }
    }

    // Step 5: Write template files
    let spinner = cliclack::spinner();
    spinner.start("Writing template files...");
    match templates::generate(&target, &db_config).await {
        Ok(written) => spinner.stop(format!(
            "Wrote {} files under {}",
            written.len(),
            target.display()
        )),
        Err(e) => {
            spinner.stop("Template writing failed");
            return Err(StepError::Templates(e).into());
        }
    }

    // Step 6: Patch package.json scripts
    let spinner = cliclack::spinner();
    spinner.start("Updating package.json scripts...");
    match manifest::patch_scripts(&target) {
        Ok(()) => spinner.stop(format!(
            "Added {} scripts to package.json",
            manifest::SCRIPTS.len()
        )),
        Err(e) => {
            spinner.stop("package.json update failed");
            return Err(StepError::Manifest(e).into());
        }
    }

    print_next_steps()?;

    Ok(RunOutcome::Completed)
}

/// Resolve the target directory from the --dir flag, defaulting to cwd
fn resolve_target_dir(args: &InitArgs) -> PathBuf {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    match &args.dir {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    }
}

fn collect_database_config() -> Result<DatabaseConfig> {
    let input: String = cliclack::input("Postgres connection string (enter to use a placeholder)")
        .placeholder(DEFAULT_DATABASE_URL)
        .default_input(DEFAULT_DATABASE_URL)
        .interact()?;

    Ok(DatabaseConfig {
        database_url: Some(input),
    })
}

/// Static follow-up instructions; independent of anything that happened
/// during the run.
fn print_next_steps() -> Result<()> {
    println!();
    println!("  Next steps");
    println!();
    println!("  1.  {} {}", "cp".dimmed(), ".env.example .env");
    println!("  2.  Edit DATABASE_URL in .env to point at your database");
    println!("  3.  {} {}", "npm run".dimmed(), "db:push");
    println!("  4.  {} {}", "npm run".dimmed(), "db:seed");
    println!("  5.  Open /examples in your app to see the generated page");

    cliclack::outro("Happy coding!")?;

    Ok(())
}
