//! Charm-style CLI interface for the init flow (feature `tui`)
//!
//! This module provides:
//! - `InitArgs` - resolved CLI flags for one run
//! - `run` - the sequential orchestrator, returning a [`crate::RunOutcome`]
//!   instead of exiting the process

pub mod prompts;

pub use prompts::{run, InitArgs};
