use super::PlayerSnapshot;

/// Pick the current player from the active list.
///
/// A stale index falls back to the first player, so some player is shown
/// whenever at least one is active.
pub fn resolve_current(active: &[PlayerSnapshot], index: usize) -> Option<PlayerSnapshot> {
    active.get(index).or_else(|| active.first()).cloned()
}
