use super::PlayerId;

/// Errors reported by media collaborators
///
/// None of these leave the session service: the pipeline logs them and
/// carries on with the next update.
#[derive(thiserror::Error, Debug)]
pub enum MediaError {
    /// The dispatcher's backend does not know the player
    #[error("Player {0:?} not found")]
    PlayerNotFound(PlayerId),

    /// The dispatcher could not deliver an action to a player
    #[error("Failed to dispatch action to player {player}: {reason}")]
    DispatchFailed {
        /// Player the action was meant for
        player: PlayerId,
        /// Why the dispatch failed
        reason: String,
    },

    /// The presentation surface rejected an update
    #[error("Failed to update presentation: {0}")]
    PresentationFailed(String),

    /// A custom transport action name is not recognized
    #[error("Unknown custom action: {0}")]
    UnknownAction(String),
}
