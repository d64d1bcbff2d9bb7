use std::sync::Arc;

use futures::{
    Stream, StreamExt,
    stream::{self, BoxStream},
};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use crate::config::MediaConfig;
use crate::services::common::{ComputedProperty, Property};

use super::{
    PlayerActionDispatcher, PlayerFeed, PlayerSelection, PlayerSnapshot, PresentationState,
    PresentationSurface, TransportIntent, active_players,
    commands::CommandRouter,
    filter::without_ignored,
    resolve_current,
    sync::PresentationSync,
};

/// Selects one active player and keeps the presentation surface in sync with it.
///
/// Consumes a [`PlayerFeed`], exposes the current player reactively, routes
/// transport intents, and pushes every presentation change to a
/// [`PresentationSurface`]. Nothing here returns an error: an absent player,
/// a stale selection or an unknown intent all mean "do nothing this time".
///
/// Only [`MediaSessionService::stop`] guarantees the surface receives no further
/// updates; dropping the service aborts its tasks without waiting for them.
pub struct MediaSessionService {
    active_players: Property<Vec<PlayerSnapshot>>,
    selection: PlayerSelection,
    current_player: ComputedProperty<Option<PlayerSnapshot>>,
    presentation: ComputedProperty<PresentationState>,
    router: CommandRouter,
    feed_task: JoinHandle<()>,
    sync_task: JoinHandle<()>,
}

impl MediaSessionService {
    /// Start the session service.
    ///
    /// Subscribes to `feed`, starts the presentation sync loop and pushes the
    /// initial state to `surface` right away. Must be called from within a
    /// tokio runtime.
    #[instrument(skip_all)]
    pub fn start(
        config: MediaConfig,
        feed: Arc<dyn PlayerFeed>,
        dispatcher: Arc<dyn PlayerActionDispatcher>,
        surface: Arc<dyn PresentationSurface>,
    ) -> Self {
        info!("Starting media session service");

        let ignored_patterns = config.ignored_players;
        let active = active_players(&without_ignored(feed.players(), &ignored_patterns));
        let active_players = Property::new(active);
        let selection = PlayerSelection::new();

        let current_player = {
            let active_players = active_players.clone();
            let selection = selection.clone();
            ComputedProperty::new(
                resolve_current(&active_players.get(), selection.get()),
                Self::selection_inputs(&active_players, &selection),
                move || resolve_current(&active_players.get(), selection.get()),
            )
        };

        let presentation = {
            let active_players = active_players.clone();
            let selection = selection.clone();
            ComputedProperty::new(
                PresentationState::resolve(&active_players.get(), selection.get()),
                Self::selection_inputs(&active_players, &selection),
                move || PresentationState::resolve(&active_players.get(), selection.get()),
            )
        };

        let feed_task = Self::spawn_feed_monitoring(
            feed.players_monitored(),
            active_players.clone(),
            ignored_patterns,
        );
        let sync_task = PresentationSync::spawn(presentation.watch(), surface);

        let router = CommandRouter::new(active_players.clone(), selection.clone(), dispatcher);

        Self {
            active_players,
            selection,
            current_player,
            presentation,
            router,
            feed_task,
            sync_task,
        }
    }

    /// Stop the service.
    ///
    /// Every pipeline task is aborted and awaited, so the surface receives no
    /// further updates once this returns.
    #[instrument(skip_all)]
    pub async fn stop(mut self) {
        self.sync_task.abort();
        let _ = (&mut self.sync_task).await;

        self.feed_task.abort();
        let _ = (&mut self.feed_task).await;

        self.presentation.stop().await;
        self.current_player.stop().await;

        info!("Media session service stopped");
    }

    /// Get the active players in registry order.
    pub fn active_players(&self) -> Vec<PlayerSnapshot> {
        self.active_players.get()
    }

    /// Get a stream of active player lists.
    pub fn active_players_monitored(&self) -> impl Stream<Item = Vec<PlayerSnapshot>> + Send {
        self.active_players.watch()
    }

    /// Get the current player, resolved from the latest active list and selection.
    pub fn current_player(&self) -> Option<PlayerSnapshot> {
        self.router.current_player()
    }

    /// Get a stream that emits whenever the current player changes.
    ///
    /// The current value is emitted first.
    pub fn current_player_monitored(
        &self,
    ) -> impl Stream<Item = Option<PlayerSnapshot>> + Send {
        self.current_player.watch()
    }

    /// Get the selected index, which may be past the end of the active list.
    pub fn selection_index(&self) -> usize {
        self.selection.get()
    }

    /// Get what the presentation surface currently shows.
    pub fn presentation(&self) -> PresentationState {
        self.presentation.get()
    }

    /// Get a stream of presentation states.
    pub fn presentation_monitored(&self) -> impl Stream<Item = PresentationState> + Send {
        self.presentation.watch()
    }

    /// Select the next active player. Returns the new index.
    pub fn switch_player(&self) -> usize {
        self.router.switch_player()
    }

    /// Handle a transport intent from the platform surface.
    ///
    /// Intents that need a player are dropped while no player is active.
    pub async fn handle_intent(&self, intent: TransportIntent) {
        self.router.handle(intent).await;
    }

    fn selection_inputs(
        active_players: &Property<Vec<PlayerSnapshot>>,
        selection: &PlayerSelection,
    ) -> impl Stream<Item = ()> + Send + use<> {
        stream::select(
            active_players.watch().map(|_| ()),
            selection.watch().map(|_| ()),
        )
    }

    fn spawn_feed_monitoring(
        mut updates: BoxStream<'static, Vec<PlayerSnapshot>>,
        active: Property<Vec<PlayerSnapshot>>,
        ignored_patterns: Vec<String>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            while let Some(players) = updates.next().await {
                let next = active_players(&without_ignored(players, &ignored_patterns));
                debug!("{} active players", next.len());
                active.set(next);
            }

            debug!("Player feed ended");
        })
    }
}

impl Drop for MediaSessionService {
    fn drop(&mut self) {
        self.sync_task.abort();
        self.feed_task.abort();
    }
}
