//! Core dispatch contracts: the [`Subcommand`] trait, the [`Actor`]
//! abstraction, and the [`CommandContext`] handed to handlers.
//!
//! Every registrable subcommand implements [`Subcommand`], which provides
//! identity (name + aliases), a privilege gate, help metadata, and the
//! `execute`/`complete` behavior. The host supplies an [`Actor`] per
//! invocation: an opaque identity answering exactly one authorization query
//! and carrying the notification channel through which all user-facing text
//! is delivered.

use anyhow::Result;

/// The entity issuing a command invocation.
///
/// The dispatcher never inspects who the actor is; it only asks whether they
/// hold elevated privilege (gating visibility and invocability of privileged
/// subcommands) and sends them feedback text.
pub trait Actor {
    /// Whether this actor may see and invoke privilege-gated subcommands.
    fn has_elevated_privilege(&self) -> bool;

    /// Deliver a line of user-facing text to this actor.
    fn notify(&self, text: &str);
}

/// Invocation context passed to [`Subcommand::execute`] and
/// [`Subcommand::complete`].
///
/// Borrowed rather than owned: the router assembles one per dispatch from the
/// host's arguments, and handlers only ever read it.
pub struct CommandContext<'a> {
    /// The actor performing the invocation.
    pub actor: &'a dyn Actor,
    /// The top-level command label as the user typed it. Display
    /// pass-through only; the dispatcher never interprets it.
    pub label: &'a str,
    /// The token that matched this subcommand -- its name or one of its
    /// aliases, exactly as typed.
    pub invoked_as: &'a str,
    /// Arguments following the subcommand token.
    pub args: &'a [String],
}

/// A registrable subcommand.
///
/// Implementations are created once at host startup, registered into exactly
/// one [`crate::CommandRegistry`], and live for the process lifetime.
/// Matching is exact and case-sensitive: `Help` does not resolve an entry
/// named `help` (it yields a suggestion instead).
pub trait Subcommand: Send + Sync {
    /// Canonical identifier, unique within a registry by convention (the
    /// registry does not enforce it; first registration wins on lookup).
    fn name(&self) -> &str;

    /// Alternative tokens resolving to this subcommand.
    fn aliases(&self) -> Vec<&str> {
        vec![]
    }

    /// Whether invocation (and visibility in suggestions, completion, and
    /// help) requires an actor with elevated privilege.
    fn requires_privilege(&self) -> bool {
        false
    }

    /// One-line description shown in help listings.
    fn description(&self) -> &str;

    /// Usage pattern shown in detailed help (e.g. `"swap <player>"`).
    fn usage(&self) -> &str;

    /// True iff `token` equals the name or any alias, byte-for-byte.
    fn matches(&self, token: &str) -> bool {
        self.name() == token || self.aliases().iter().any(|a| *a == token)
    }

    /// Run the subcommand. Output goes through `ctx.actor.notify`; an error
    /// return surfaces to the host as
    /// [`crate::DispatchError::Execution`].
    fn execute(&self, ctx: &CommandContext<'_>) -> Result<()>;

    /// Tab-completion candidates for `ctx.args`. An empty Vec means this
    /// subcommand has nothing to offer, never a failure.
    fn complete(&self, ctx: &CommandContext<'_>) -> Vec<String> {
        let _ = ctx;
        Vec::new()
    }
}
