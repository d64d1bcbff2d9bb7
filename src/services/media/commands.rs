use std::{fmt, str::FromStr, sync::Arc};

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::services::common::Property;

use super::{
    MediaError, PlayerAction, PlayerId, PlayerSelection, PlayerSnapshot, resolve_current,
};

/// Transport-control intent received from the platform surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportIntent {
    /// Play button
    Play,

    /// Pause button
    Pause,

    /// Skip to next button
    SkipToNext,

    /// Skip to previous button
    SkipToPrevious,

    /// String-keyed custom action
    Custom(String),
}

/// Custom actions understood by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomAction {
    /// Select the next active player
    SwitchPlayer,

    /// Toggle shuffle on the current player
    ToggleShuffle,

    /// Toggle repeat on the current player
    ToggleRepeat,
}

impl CustomAction {
    /// Action name as used by the platform surface.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SwitchPlayer => "ACTION_SWITCH_PLAYER",
            Self::ToggleShuffle => "ACTION_TOGGLE_SHUFFLE",
            Self::ToggleRepeat => "ACTION_TOGGLE_REPEAT",
        }
    }
}

impl fmt::Display for CustomAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomAction {
    type Err = MediaError;

    fn from_str(action: &str) -> Result<Self, Self::Err> {
        match action {
            "ACTION_SWITCH_PLAYER" => Ok(Self::SwitchPlayer),
            "ACTION_TOGGLE_SHUFFLE" => Ok(Self::ToggleShuffle),
            "ACTION_TOGGLE_REPEAT" => Ok(Self::ToggleRepeat),
            _ => Err(MediaError::UnknownAction(action.to_string())),
        }
    }
}

/// Delivers actions to players.
///
/// Fire-and-forget from the router's point of view: errors are logged
/// and otherwise ignored.
#[async_trait]
pub trait PlayerActionDispatcher: Send + Sync {
    /// Send an action to a player.
    ///
    /// # Errors
    /// Returns error if the action cannot be delivered
    async fn dispatch(&self, player_id: &PlayerId, action: PlayerAction) -> Result<(), MediaError>;
}

/// Routes transport intents to player actions or selection changes.
pub(crate) struct CommandRouter {
    active_players: Property<Vec<PlayerSnapshot>>,
    selection: PlayerSelection,
    dispatcher: Arc<dyn PlayerActionDispatcher>,
}

impl CommandRouter {
    pub(crate) fn new(
        active_players: Property<Vec<PlayerSnapshot>>,
        selection: PlayerSelection,
        dispatcher: Arc<dyn PlayerActionDispatcher>,
    ) -> Self {
        Self {
            active_players,
            selection,
            dispatcher,
        }
    }

    /// Resolve the current player from the latest inputs.
    pub(crate) fn current_player(&self) -> Option<PlayerSnapshot> {
        resolve_current(&self.active_players.get(), self.selection.get())
    }

    /// Advance the selection using the active count at call time.
    pub(crate) fn switch_player(&self) -> usize {
        let active_count = self.active_players.get().len();
        self.selection.switch(active_count)
    }

    #[instrument(skip(self))]
    pub(crate) async fn handle(&self, intent: TransportIntent) {
        match intent {
            TransportIntent::Play | TransportIntent::Pause => {
                self.dispatch_to_current(|_| Some(PlayerAction::TogglePlayPause))
                    .await;
            }
            TransportIntent::SkipToNext => {
                self.dispatch_to_current(|_| Some(PlayerAction::Next)).await;
            }
            TransportIntent::SkipToPrevious => {
                self.dispatch_to_current(|_| Some(PlayerAction::Previous))
                    .await;
            }
            TransportIntent::Custom(name) => match name.parse::<CustomAction>() {
                Ok(CustomAction::SwitchPlayer) => {
                    self.switch_player();
                }
                Ok(CustomAction::ToggleShuffle) => {
                    self.dispatch_to_current(|player| {
                        player.queue.as_ref().map(|queue| PlayerAction::ToggleShuffle {
                            current: queue.shuffle_enabled,
                        })
                    })
                    .await;
                }
                Ok(CustomAction::ToggleRepeat) => {
                    self.dispatch_to_current(|player| {
                        player
                            .queue
                            .as_ref()
                            .map(|queue| PlayerAction::ToggleRepeatMode {
                                current: queue.repeat_mode,
                            })
                    })
                    .await;
                }
                Err(e) => debug!("Ignoring intent: {e}"),
            },
        }
    }

    async fn dispatch_to_current<F>(&self, action_for: F)
    where
        F: FnOnce(&PlayerSnapshot) -> Option<PlayerAction>,
    {
        let Some(player) = self.current_player() else {
            debug!("No active player, dropping intent");
            return;
        };

        let Some(action) = action_for(&player) else {
            debug!("Player {} has no queue, dropping intent", player.id);
            return;
        };

        if let Err(e) = self.dispatcher.dispatch(&player.id, action).await {
            warn!("Failed to dispatch {:?} to {}: {}", action, player.id, e);
        }
    }
}
