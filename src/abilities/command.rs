//! Ability commands: the hook set registered for a card.

use super::effect::{AttackEffect, MovedEffect, PlayedEffect};

/// Up to three hooks plus the one-shot flag.
///
/// A command with no hooks is a no-op: the card fights and moves with the
/// default rules only.
///
/// ```
/// use castle_ccg::abilities::{AbilityCommand, AttackEffect, PlayedEffect};
///
/// let command = AbilityCommand::played(PlayedEffect::Draw(1))
///     .with_attack(AttackEffect::IgnoreDefense);
///
/// assert!(command.on_played.is_some());
/// assert!(command.on_moved.is_none());
/// assert!(!AbilityCommand::NOOP.has_hooks());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbilityCommand {
    pub on_played: Option<PlayedEffect>,
    pub on_moved: Option<MovedEffect>,
    pub on_attack: Option<AttackEffect>,
    /// The card is spent (hp set to 0) once its `onPlayed` resolves.
    pub consumed: bool,
}

impl AbilityCommand {
    /// Command without hooks.
    pub const NOOP: AbilityCommand = AbilityCommand {
        on_played: None,
        on_moved: None,
        on_attack: None,
        consumed: false,
    };

    /// Command with an activation effect.
    #[must_use]
    pub fn played(effect: PlayedEffect) -> Self {
        Self {
            on_played: Some(effect),
            ..Self::NOOP
        }
    }

    /// Command with only a movement hook.
    #[must_use]
    pub fn moved(effect: MovedEffect) -> Self {
        Self {
            on_moved: Some(effect),
            ..Self::NOOP
        }
    }

    /// Command with only an attack hook.
    #[must_use]
    pub fn attack(effect: AttackEffect) -> Self {
        Self {
            on_attack: Some(effect),
            ..Self::NOOP
        }
    }

    #[must_use]
    pub fn with_moved(mut self, effect: MovedEffect) -> Self {
        self.on_moved = Some(effect);
        self
    }

    #[must_use]
    pub fn with_attack(mut self, effect: AttackEffect) -> Self {
        self.on_attack = Some(effect);
        self
    }

    /// Mark as a one-shot spell.
    #[must_use]
    pub fn consumed(mut self) -> Self {
        self.consumed = true;
        self
    }

    #[must_use]
    pub fn has_hooks(&self) -> bool {
        self.on_played.is_some() || self.on_moved.is_some() || self.on_attack.is_some()
    }
}
