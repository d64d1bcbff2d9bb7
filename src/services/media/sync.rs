use std::sync::Arc;

use futures::{Stream, StreamExt};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::{PresentationState, PresentationSurface};

/// Pushes every presentation change to the external surface.
pub(crate) struct PresentationSync;

impl PresentationSync {
    /// Spawn the sync loop.
    ///
    /// `updates` must yield the current state first; each item results in
    /// one playback state update followed by one notification.
    pub(crate) fn spawn<S>(updates: S, surface: Arc<dyn PresentationSurface>) -> JoinHandle<()>
    where
        S: Stream<Item = PresentationState> + Send + 'static,
    {
        tokio::spawn(async move {
            let mut updates = Box::pin(updates);

            while let Some(state) = updates.next().await {
                Self::push(surface.as_ref(), &state).await;
            }

            debug!("Presentation updates ended");
        })
    }

    async fn push(surface: &dyn PresentationSurface, state: &PresentationState) {
        debug!(
            player = ?state.player.as_ref().map(|player| &player.id),
            multiple_players = state.multiple_players,
            "Syncing presentation"
        );

        if let Err(e) = surface.update_playback_state(state).await {
            warn!("Failed to update playback state: {e}");
        }

        if let Err(e) = surface.publish_notification(state.player.as_ref()).await {
            warn!("Failed to publish notification: {e}");
        }
    }
}
