//! Command registry: an insertion-ordered store of [`Subcommand`]
//! implementations.
//!
//! Registration order is authoritative: lookups scan entries in the order
//! they were registered and return the first match, and the suggestion pool
//! preserves the same order (each entry's name before its aliases). No
//! uniqueness check is performed at registration; a later entry sharing a
//! name or alias with an earlier one is simply unreachable through that
//! token. Matching is exact and case-sensitive throughout.

use crate::command::Subcommand;

/// Ordered collection of registered subcommands.
///
/// Populated once at host startup, then owned (and only read) by the
/// [`crate::CommandRouter`] that dispatches against it.
pub struct CommandRegistry {
    entries: Vec<Box<dyn Subcommand>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a subcommand. Duplicate names or aliases are not rejected;
    /// the first-registered entry wins every lookup through that token.
    pub fn register(&mut self, cmd: Box<dyn Subcommand>) {
        self.entries.push(cmd);
    }

    /// First entry matching `token`, skipping privilege-gated entries when
    /// the actor is not privileged.
    pub fn find(&self, token: &str, privileged: bool) -> Option<&dyn Subcommand> {
        self.entries
            .iter()
            .filter(|cmd| privileged || !cmd.requires_privilege())
            .find(|cmd| cmd.matches(token))
            .map(|cmd| cmd.as_ref())
    }

    /// First entry matching `token`, ignoring the privilege gate. Exists for
    /// the implicit `"help"` fallback, which must stay reachable so the
    /// dispatcher can always answer an empty invocation with usage text.
    pub fn find_unfiltered(&self, token: &str) -> Option<&dyn Subcommand> {
        self.entries
            .iter()
            .find(|cmd| cmd.matches(token))
            .map(|cmd| cmd.as_ref())
    }

    /// Canonical names of all entries visible to the actor, in registration
    /// order. Aliases are excluded; this feeds top-level tab completion.
    pub fn visible_names(&self, privileged: bool) -> Vec<String> {
        self.visible(privileged)
            .map(|cmd| cmd.name().to_string())
            .collect()
    }

    /// Every name and alias visible to the actor: registration order, each
    /// entry's name before its aliases. This is the suggestion candidate
    /// pool, so its order fixes tie-breaking.
    pub fn visible_names_and_aliases(&self, privileged: bool) -> Vec<String> {
        let mut pool = Vec::new();
        for cmd in self.visible(privileged) {
            pool.push(cmd.name().to_string());
            pool.extend(cmd.aliases().iter().map(|a| a.to_string()));
        }
        pool
    }

    /// Entries visible to the actor, in registration order.
    pub fn visible(&self, privileged: bool) -> impl Iterator<Item = &dyn Subcommand> {
        self.entries
            .iter()
            .filter(move |cmd| privileged || !cmd.requires_privilege())
            .map(|cmd| cmd.as_ref())
    }

    /// All entries in registration order, regardless of privilege.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Subcommand> {
        self.entries.iter().map(|cmd| cmd.as_ref())
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandContext;
    use anyhow::Result;

    struct Fixed {
        name: &'static str,
        aliases: Vec<&'static str>,
        privileged: bool,
    }

    impl Fixed {
        fn new(name: &'static str, aliases: &[&'static str], privileged: bool) -> Box<Self> {
            Box::new(Self {
                name,
                aliases: aliases.to_vec(),
                privileged,
            })
        }
    }

    impl Subcommand for Fixed {
        fn name(&self) -> &str {
            self.name
        }
        fn aliases(&self) -> Vec<&str> {
            self.aliases.clone()
        }
        fn requires_privilege(&self) -> bool {
            self.privileged
        }
        fn description(&self) -> &str {
            "fixture"
        }
        fn usage(&self) -> &str {
            self.name
        }
        fn execute(&self, _ctx: &CommandContext<'_>) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_find_by_name_and_alias() {
        let mut reg = CommandRegistry::new();
        reg.register(Fixed::new("reload", &["rl"], false));

        assert_eq!(reg.find("reload", false).unwrap().name(), "reload");
        assert_eq!(reg.find("rl", false).unwrap().name(), "reload");
        assert!(reg.find("restart", false).is_none());
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let mut reg = CommandRegistry::new();
        reg.register(Fixed::new("help", &[], false));

        assert!(reg.find("help", false).is_some());
        assert!(reg.find("Help", false).is_none());
        assert!(reg.find("HELP", false).is_none());
    }

    #[test]
    fn test_find_skips_privileged_entries_for_unprivileged_actors() {
        let mut reg = CommandRegistry::new();
        reg.register(Fixed::new("ban", &[], true));
        reg.register(Fixed::new("help", &[], false));

        assert!(reg.find("ban", false).is_none());
        assert_eq!(reg.find("ban", true).unwrap().name(), "ban");
        assert!(reg.find("help", false).is_some());
    }

    #[test]
    fn test_find_unfiltered_ignores_privilege() {
        let mut reg = CommandRegistry::new();
        reg.register(Fixed::new("help", &[], true));

        assert!(reg.find("help", false).is_none());
        assert_eq!(reg.find_unfiltered("help").unwrap().name(), "help");
    }

    #[test]
    fn test_duplicate_alias_resolves_to_first_registered() {
        let mut reg = CommandRegistry::new();
        reg.register(Fixed::new("start", &["go"], false));
        reg.register(Fixed::new("resume", &["go"], false));

        // Shadowing is silent and deterministic: first registration wins.
        assert_eq!(reg.find("go", false).unwrap().name(), "start");
        assert_eq!(reg.find_unfiltered("go").unwrap().name(), "start");
    }

    #[test]
    fn test_duplicate_name_resolves_to_first_registered() {
        let mut reg = CommandRegistry::new();
        reg.register(Fixed::new("swap", &["s"], false));
        reg.register(Fixed::new("swap", &["sw"], false));

        assert_eq!(reg.len(), 2);
        assert_eq!(reg.find("swap", false).unwrap().usage(), "swap");
        // The shadowed entry stays reachable through its own alias.
        assert_eq!(reg.find("sw", false).unwrap().aliases(), vec!["sw"]);
    }

    #[test]
    fn test_visible_names_preserves_registration_order() {
        let mut reg = CommandRegistry::new();
        reg.register(Fixed::new("start", &[], false));
        reg.register(Fixed::new("stop", &[], false));
        reg.register(Fixed::new("reload", &[], false));

        assert_eq!(reg.visible_names(false), vec!["start", "stop", "reload"]);
    }

    #[test]
    fn test_visible_names_filters_privileged() {
        let mut reg = CommandRegistry::new();
        reg.register(Fixed::new("ban", &[], true));
        reg.register(Fixed::new("help", &[], false));

        assert_eq!(reg.visible_names(false), vec!["help"]);
        assert_eq!(reg.visible_names(true), vec!["ban", "help"]);
    }

    #[test]
    fn test_pool_has_name_before_aliases_in_entry_order() {
        let mut reg = CommandRegistry::new();
        reg.register(Fixed::new("teleport", &["tp", "warp"], false));
        reg.register(Fixed::new("help", &["?"], false));

        assert_eq!(
            reg.visible_names_and_aliases(false),
            vec!["teleport", "tp", "warp", "help", "?"]
        );
    }

    #[test]
    fn test_pool_excludes_privileged_entries_entirely() {
        let mut reg = CommandRegistry::new();
        reg.register(Fixed::new("ban", &["b"], true));
        reg.register(Fixed::new("help", &[], false));

        let pool = reg.visible_names_and_aliases(false);
        assert!(!pool.contains(&"ban".to_string()));
        assert!(!pool.contains(&"b".to_string()));
        assert_eq!(pool, vec!["help"]);
    }

    #[test]
    fn test_empty_registry() {
        let reg = CommandRegistry::default();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
        assert!(reg.find("anything", true).is_none());
        assert!(reg.visible_names_and_aliases(true).is_empty());
    }
}
