//! Drizzle Tools - Scaffold Drizzle ORM into an existing Next.js project

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use drizzle_scaffold::{InitArgs, RunOutcome};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "drizzle-tools")]
#[command(about = "Scaffold Drizzle ORM into an existing Next.js project")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set up Drizzle ORM in a Next.js project
    Init(CliInitArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CliInitArgs {
    /// Target project directory (defaults to the current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliInitArgs> for InitArgs {
    fn from(args: CliInitArgs) -> Self {
        InitArgs {
            dir: args.dir,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    // No subcommand defaults to init (interactive mode)
    let init_args = match args.command {
        Some(Command::Init(init_args)) => init_args,
        None => CliInitArgs::default(),
    };

    let result = drizzle_scaffold::run(init_args.into()).await;
    let _ = console::Term::stderr().show_cursor();

    std::process::exit(exit_code(result));
}

/// Map the run outcome to a process exit code: a declined confirmation is a
/// neutral exit, validation failure and step failures are not.
fn exit_code(result: Result<RunOutcome>) -> i32 {
    match result {
        Ok(RunOutcome::Completed) | Ok(RunOutcome::Declined) => 0,
        Ok(RunOutcome::InvalidTarget) => 1,
        Err(e) => {
            // One line: step label plus the underlying cause chain
            eprintln!("{} {:#}", "Error:".red(), e);
            1
        }
    }
}
