use futures::Stream;
use tracing::debug;

use crate::services::common::Property;

/// Index of the selected player within the active player list.
///
/// Starts at 0 and only moves through [`PlayerSelection::switch`]. The index
/// is never clamped when the active list shrinks; the resolver falls back to
/// the first player instead, so the position survives a list that regrows.
#[derive(Clone, Debug)]
pub struct PlayerSelection {
    index: Property<usize>,
}

impl PlayerSelection {
    /// Create a selection pointing at the first active player.
    pub fn new() -> Self {
        Self {
            index: Property::new(0),
        }
    }

    /// Get the selected index.
    pub fn get(&self) -> usize {
        self.index.get()
    }

    /// Watch the selected index.
    pub fn watch(&self) -> impl Stream<Item = usize> + Send + use<> {
        self.index.watch()
    }

    /// Advance to the next active player, wrapping at the end.
    ///
    /// `active_count` is the size of the active list at call time. The
    /// advance is a single read-modify-write, so concurrent switches are
    /// never lost. Returns the new index.
    pub fn switch(&self, active_count: usize) -> usize {
        let index = self
            .index
            .update(|current| next_index(*current, active_count));

        debug!(index, active_count, "Switched player selection");
        index
    }
}

impl Default for PlayerSelection {
    fn default() -> Self {
        Self::new()
    }
}

/// Round-robin successor of `index` in a list of `active_count` players.
///
/// With fewer than two players the selection resets to 0.
pub fn next_index(index: usize, active_count: usize) -> usize {
    if active_count > 1 {
        (index + 1) % active_count
    } else {
        0
    }
}
