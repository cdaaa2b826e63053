//! Subcommand dispatch for interactive command-line front ends.
//!
//! A host application owns a single top-level command; users type a subcommand
//! token plus arguments after it. This crate resolves that token against a
//! registry of [`Subcommand`] implementations, enforces per-command privilege
//! gating, and -- when nothing matches -- suggests the closest known name by
//! Levenshtein distance ("did you mean ...?").
//!
//! # Architecture
//!
//! - [`command`]: the [`Subcommand`] contract, the [`Actor`] abstraction, and
//!   the [`CommandContext`] passed to handlers.
//! - [`registry`]: [`CommandRegistry`], an insertion-ordered store with
//!   privilege-filtered lookup.
//! - [`router`]: [`CommandRouter`], the entry point -- resolution, suggestion
//!   fallback, and tab-completion aggregation.
//! - [`distance`]: edit distance and closest-match selection.
//! - [`builtins`]: the stock `help` subcommand the empty-input fallback
//!   depends on.
//!
//! # Example
//!
//! ```no_run
//! use subswitch::{CommandRegistry, CommandRouter, HelpCommand};
//!
//! let mut registry = CommandRegistry::new();
//! // registry.register(Box::new(MyCommand)); ...
//! let help = HelpCommand::from_registry(&registry);
//! registry.register(Box::new(help));
//! let router = CommandRouter::new(registry);
//! // router.resolve(&actor, "myapp", &args)?;
//! ```
//!
//! The registry is populated once at host startup and never mutated
//! afterwards; dispatch itself is synchronous and single-threaded per
//! interactive session.

pub mod builtins;
pub mod command;
pub mod distance;
pub mod error;
pub mod registry;
pub mod router;

pub use builtins::HelpCommand;
pub use command::{Actor, CommandContext, Subcommand};
pub use error::DispatchError;
pub use registry::CommandRegistry;
pub use router::{CommandRouter, RouterConfig, DEFAULT_SUGGESTION_THRESHOLD};
