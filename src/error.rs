//! Error types for the dispatch layer.
//!
//! Unknown commands and near-misses are *not* errors -- the router resolves
//! them by notifying the actor and returning `Ok`. Only the conditions below
//! cross the crate boundary.

/// Failures the dispatch layer reports to the host.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// A no-argument invocation found no `"help"` entry to fall back to.
    /// Configuration defect, not user error: the host decides what generic
    /// usage text to show.
    #[error("no 'help' command registered for the empty-input fallback")]
    NoHelpCommand,

    /// Closest-match selection was invoked with zero candidates. The router
    /// guards against this; seeing it means a caller bypassed the guard.
    #[error("candidate set for suggestion matching is empty")]
    EmptyCandidateSet,

    /// A matched subcommand's `execute` returned an error.
    #[error("subcommand execution failed: {0:#}")]
    Execution(anyhow::Error),
}
