use futures::stream::{BoxStream, StreamExt};
use tracing::debug;

use crate::services::common::Property;

use super::{PlayerId, PlayerSnapshot};

/// Source of player snapshots consumed by the session service.
///
/// Implementations own the connection to whatever reports player state.
/// The session service only reads the latest list and follows changes.
pub trait PlayerFeed: Send + Sync {
    /// Get the latest reported player list.
    fn players(&self) -> Vec<PlayerSnapshot>;

    /// Get a stream of player lists.
    ///
    /// The stream yields the current list first, then every later list.
    fn players_monitored(&self) -> BoxStream<'static, Vec<PlayerSnapshot>>;
}

/// In-process player registry.
///
/// Keeps players in registration order; updating a known player replaces
/// its snapshot in place.
#[derive(Clone, Debug)]
pub struct PlayerRegistry {
    players: Property<Vec<PlayerSnapshot>>,
}

impl PlayerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            players: Property::new(Vec::new()),
        }
    }

    /// Insert a new player or replace the snapshot of a known one.
    pub fn upsert(&self, snapshot: PlayerSnapshot) {
        let player_id = snapshot.id.clone();

        self.players.update(move |current| {
            let mut next = current.clone();
            match next.iter_mut().find(|player| player.id == snapshot.id) {
                Some(existing) => *existing = snapshot,
                None => next.push(snapshot),
            }
            next
        });

        debug!("Player {} updated", player_id);
    }

    /// Remove a player.
    ///
    /// Returns false if the player was not registered.
    pub fn remove(&self, player_id: &PlayerId) -> bool {
        let mut removed = false;

        self.players.update(|current| {
            let next: Vec<PlayerSnapshot> = current
                .iter()
                .filter(|player| player.id != *player_id)
                .cloned()
                .collect();
            removed = next.len() != current.len();
            next
        });

        if removed {
            debug!("Player {} removed", player_id);
        }

        removed
    }

    /// Replace the whole player list.
    pub fn replace_all(&self, players: Vec<PlayerSnapshot>) {
        self.players.set(players);
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerFeed for PlayerRegistry {
    fn players(&self) -> Vec<PlayerSnapshot> {
        self.players.get()
    }

    fn players_monitored(&self) -> BoxStream<'static, Vec<PlayerSnapshot>> {
        self.players.watch().boxed()
    }
}
