use async_trait::async_trait;

use super::{CustomAction, MediaError, PlayerSnapshot, resolve_current};

/// What the presentation surface should currently show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresentationState {
    /// Current player, `None` when no player is active
    pub player: Option<PlayerSnapshot>,
    /// Whether more than one player is active
    pub multiple_players: bool,
}

impl PresentationState {
    /// Derive the state from the active list and the selected index.
    pub fn resolve(active: &[PlayerSnapshot], index: usize) -> Self {
        Self {
            player: resolve_current(active, index),
            multiple_players: active.len() > 1,
        }
    }

    /// Custom actions the surface should offer for this state.
    ///
    /// Switching is only offered with several active players; shuffle and
    /// repeat need a current player with a queue.
    pub fn custom_actions(&self) -> Vec<CustomAction> {
        let mut actions = Vec::new();

        if self.multiple_players {
            actions.push(CustomAction::SwitchPlayer);
        }

        if self
            .player
            .as_ref()
            .is_some_and(|player| player.queue.is_some())
        {
            actions.push(CustomAction::ToggleShuffle);
            actions.push(CustomAction::ToggleRepeat);
        }

        actions
    }
}

/// External "now playing" surface kept in sync with the current player.
///
/// Both calls must be safe to repeat with the same value.
#[async_trait]
pub trait PresentationSurface: Send + Sync {
    /// Update the session-style playback state.
    ///
    /// # Errors
    /// Returns error if the surface cannot apply the update
    async fn update_playback_state(&self, state: &PresentationState) -> Result<(), MediaError>;

    /// Render the persistent notification for the current player.
    ///
    /// # Errors
    /// Returns error if the notification cannot be published
    async fn publish_notification(&self, player: Option<&PlayerSnapshot>)
    -> Result<(), MediaError>;
}
