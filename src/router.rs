//! Command router: resolves a raw argument list to a registered subcommand,
//! or falls back to a "did you mean" suggestion.
//!
//! The router is the host's entry point. For each input line the front end
//! splits into tokens, [`CommandRouter::resolve`] either executes a matching
//! subcommand, answers an empty invocation with the `help` entry, or notifies
//! the actor with suggestion/unknown-command text. [`CommandRouter::complete`]
//! aggregates tab-completion candidates the same privilege-filtered way.
//!
//! Every dependency is injected: the router owns the registry it was built
//! with, and all user-facing text flows through the actor's notification
//! channel. There is no ambient global state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::command::{Actor, CommandContext};
use crate::distance::{closest_match, distance};
use crate::error::DispatchError;
use crate::registry::CommandRegistry;

/// Default edit-distance cutoff below which a near-miss earns a
/// "did you mean" suggestion instead of the generic unknown-command text.
pub const DEFAULT_SUGGESTION_THRESHOLD: usize = 5;

/// Tunable dispatch policy. Serde-derived so hosts can embed it in their own
/// configuration files; every field defaults sensibly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
    /// Suggestions are shown when the closest candidate is strictly closer
    /// than this many edits.
    pub suggestion_threshold: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            suggestion_threshold: DEFAULT_SUGGESTION_THRESHOLD,
        }
    }
}

/// Dispatches argument lists against a [`CommandRegistry`].
pub struct CommandRouter {
    registry: CommandRegistry,
    config: RouterConfig,
}

impl CommandRouter {
    /// Create a router over a fully populated registry with default policy.
    pub fn new(registry: CommandRegistry) -> Self {
        Self::with_config(registry, RouterConfig::default())
    }

    /// Create a router with explicit policy.
    pub fn with_config(registry: CommandRegistry, config: RouterConfig) -> Self {
        Self { registry, config }
    }

    /// Read access to the underlying registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Resolve one invocation.
    ///
    /// `label` is the top-level command label as typed, passed through for
    /// display. `args` are the tokens after it: `args[0]` selects the
    /// subcommand, the rest become that subcommand's arguments.
    ///
    /// Every outcome that produced user-facing feedback returns `Ok(())`:
    /// a matched execution, a suggestion, or unknown-command text. The only
    /// unhandled condition is an empty `args` with no `"help"` entry
    /// registered, reported as [`DispatchError::NoHelpCommand`] so the host
    /// can print its own generic usage.
    pub fn resolve(
        &self,
        actor: &dyn Actor,
        label: &str,
        args: &[String],
    ) -> Result<(), DispatchError> {
        let Some((key, rest)) = args.split_first() else {
            // Bare invocation: the help entry answers, whatever its gate.
            let help = self
                .registry
                .find_unfiltered("help")
                .ok_or(DispatchError::NoHelpCommand)?;
            let ctx = CommandContext {
                actor,
                label,
                invoked_as: label,
                args: &[],
            };
            return help.execute(&ctx).map_err(DispatchError::Execution);
        };

        let privileged = actor.has_elevated_privilege();

        if let Some(cmd) = self.registry.find(key, privileged) {
            debug!(command = cmd.name(), invoked_as = %key, "dispatching subcommand");
            let ctx = CommandContext {
                actor,
                label,
                invoked_as: key,
                args: rest,
            };
            return cmd.execute(&ctx).map_err(DispatchError::Execution);
        }

        self.suggest(actor, label, key, privileged)?;
        Ok(())
    }

    /// Unknown-command fallback: notify the actor, suggesting the closest
    /// visible name when one is near enough.
    fn suggest(
        &self,
        actor: &dyn Actor,
        label: &str,
        key: &str,
        privileged: bool,
    ) -> Result<(), DispatchError> {
        let pool = self.registry.visible_names_and_aliases(privileged);
        if pool.is_empty() {
            actor.notify(&format!("Unknown command '{key}'. No commands are available."));
            return Ok(());
        }

        let closest = closest_match(key, &pool)?;
        let d = distance(key, closest);
        debug!(input = %key, closest = %closest, distance = d, "no matching subcommand");

        if d < self.config.suggestion_threshold {
            actor.notify(&format!(
                "Unknown command '{key}'. Did you mean '{label} {closest}'?"
            ));
        } else {
            actor.notify(&format!(
                "Unknown command '{key}'. Type '{label} help' for available commands."
            ));
        }
        Ok(())
    }

    /// Tab-completion candidates for a partial input.
    ///
    /// With at most one token the user is still typing the subcommand name:
    /// the result is the canonical name of every visible entry, in
    /// registration order (aliases are never offered). With more tokens,
    /// every visible entry matching `args[0]` contributes its own
    /// completions for the remaining tokens -- all matches, concatenated,
    /// because overlapping aliases can make several entries answer to the
    /// same key. An entry with nothing to offer contributes nothing.
    pub fn complete(&self, actor: &dyn Actor, label: &str, args: &[String]) -> Vec<String> {
        let privileged = actor.has_elevated_privilege();

        if args.len() <= 1 {
            return self.registry.visible_names(privileged);
        }

        let key = &args[0];
        let rest = &args[1..];
        let mut candidates = Vec::new();
        for cmd in self.registry.visible(privileged) {
            if cmd.matches(key) {
                let ctx = CommandContext {
                    actor,
                    label,
                    invoked_as: key,
                    args: rest,
                };
                candidates.extend(cmd.complete(&ctx));
            }
        }
        candidates
    }
}
