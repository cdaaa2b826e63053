//! Stock subcommands. Currently just `help`, which the router's empty-input
//! fallback depends on.
//!
//! [`HelpCommand`] snapshots the registry's metadata at construction time, so
//! the host builds it last, after every domain subcommand is registered:
//!
//! ```no_run
//! use subswitch::{CommandRegistry, HelpCommand};
//!
//! let mut registry = CommandRegistry::new();
//! // registry.register(...domain commands...);
//! let help = HelpCommand::from_registry(&registry);
//! registry.register(Box::new(help));
//! ```
//!
//! The snapshot keeps registry ownership simple (the router holds it
//! exclusively) at the cost of not reflecting commands registered after the
//! snapshot -- which never happens, since registration completes at startup.

use anyhow::Result;

use crate::command::{CommandContext, Subcommand};
use crate::registry::CommandRegistry;

/// One snapshotted registry entry.
#[derive(Debug, Clone)]
struct HelpEntry {
    name: String,
    description: String,
    usage: String,
    privileged: bool,
}

/// Lists available subcommands, or shows detail for one of them.
///
/// The listing is filtered by the invoking actor's privilege, exactly like
/// resolution and completion: an unprivileged actor never learns that gated
/// commands exist.
pub struct HelpCommand {
    entries: Vec<HelpEntry>,
}

impl HelpCommand {
    /// Snapshot every entry registered so far, plus `help` itself.
    pub fn from_registry(registry: &CommandRegistry) -> Self {
        let mut entries: Vec<HelpEntry> = registry
            .iter()
            .map(|cmd| HelpEntry {
                name: cmd.name().to_string(),
                description: cmd.description().to_string(),
                usage: cmd.usage().to_string(),
                privileged: cmd.requires_privilege(),
            })
            .collect();
        entries.push(HelpEntry {
            name: "help".to_string(),
            description: "List available commands or show help for one command".to_string(),
            usage: "help [command]".to_string(),
            privileged: false,
        });
        Self { entries }
    }

    fn visible(&self, privileged: bool) -> impl Iterator<Item = &HelpEntry> {
        self.entries
            .iter()
            .filter(move |e| privileged || !e.privileged)
    }
}

impl Subcommand for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn aliases(&self) -> Vec<&str> {
        vec!["?"]
    }

    fn description(&self) -> &str {
        "List available commands or show help for one command"
    }

    fn usage(&self) -> &str {
        "help [command]"
    }

    fn execute(&self, ctx: &CommandContext<'_>) -> Result<()> {
        let privileged = ctx.actor.has_elevated_privilege();

        if let Some(target) = ctx.args.first() {
            match self.visible(privileged).find(|e| e.name == *target) {
                Some(entry) => ctx.actor.notify(&format!(
                    "{} - {}\n  Usage: {} {}",
                    entry.name, entry.description, ctx.label, entry.usage
                )),
                None => ctx
                    .actor
                    .notify(&format!("No help available for '{target}'.")),
            }
            return Ok(());
        }

        let mut text = String::from("Available commands:");
        for entry in self.visible(privileged) {
            text.push_str(&format!("\n  {} - {}", entry.name, entry.description));
        }
        ctx.actor.notify(&text);
        Ok(())
    }

    fn complete(&self, ctx: &CommandContext<'_>) -> Vec<String> {
        // `help <partial-command-name>`
        if ctx.args.len() == 1 {
            self.visible(ctx.actor.has_elevated_privilege())
                .map(|e| e.name.clone())
                .collect()
        } else {
            Vec::new()
        }
    }
}
