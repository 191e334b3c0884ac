//! Ability registry for command lookup.
//!
//! Maps a card's key to its `AbilityCommand`. Cards without an entry get
//! the no-op command and fall back to the default rules.

use rustc_hash::FxHashMap;

use super::command::AbilityCommand;
use super::tables;
use crate::cards::CardKey;

static NOOP: AbilityCommand = AbilityCommand::NOOP;

/// Registry of ability commands.
///
/// ## Example
///
/// ```
/// use castle_ccg::abilities::{builders, AbilityRegistry};
///
/// let mut registry = AbilityRegistry::new();
/// registry.register("Santa Isabel de Portugal", builders::heal_all(3));
///
/// assert!(registry.lookup("santa isabel de portugal").on_played.is_some());
/// assert!(!registry.lookup("Unknown Card").has_hooks());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AbilityRegistry {
    commands: FxHashMap<CardKey, AbilityCommand>,
}

impl AbilityRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under a card title. Re-registering replaces.
    pub fn register(&mut self, title: &str, command: AbilityCommand) {
        self.commands.insert(CardKey::from_title(title), command);
    }

    /// Builder form of [`AbilityRegistry::register`].
    #[must_use]
    pub fn with(mut self, title: &str, command: AbilityCommand) -> Self {
        self.register(title, command);
        self
    }

    /// Command for a key, or the no-op command.
    #[must_use]
    pub fn get(&self, key: &CardKey) -> &AbilityCommand {
        self.commands.get(key).unwrap_or(&NOOP)
    }

    #[must_use]
    pub fn lookup(&self, title: &str) -> &AbilityCommand {
        self.get(&CardKey::from_title(title))
    }

    #[must_use]
    pub fn contains(&self, key: &CardKey) -> bool {
        self.commands.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands for the shipped roster.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for (title, command) in tables::kings::commands()
            .into_iter()
            .chain(tables::saints::commands())
            .chain(tables::units::commands())
            .chain(tables::support::commands())
        {
            registry.register(title, command);
        }
        registry
    }
}
