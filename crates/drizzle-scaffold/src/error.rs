//! Step failure taxonomy and run outcomes
//!
//! Validation failure and a declined confirmation are outcomes, not errors:
//! the orchestrator returns them so the hosting entry point decides the exit
//! code without the library ever calling `process::exit` itself.

use thiserror::Error;

/// A failure in one of the three work steps of the init flow.
///
/// Each variant wraps the underlying cause; the binary prints the full chain
/// as a single diagnostic line.
#[derive(Debug, Error)]
pub enum StepError {
    #[error("Failed to install dependencies")]
    Install(#[source] anyhow::Error),

    #[error("Failed to write template files")]
    Templates(#[source] anyhow::Error),

    #[error("Failed to update package.json")]
    Manifest(#[source] anyhow::Error),
}

/// Terminal state of an init run that did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All steps finished
    Completed,
    /// Target failed validation; maps to a failure exit code
    InvalidTarget,
    /// User declined the confirmation prompt; a neutral exit, not a failure
    Declined,
}
