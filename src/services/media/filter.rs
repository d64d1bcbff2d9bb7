use super::PlayerSnapshot;

/// Keep the players engaged in playback of a queue.
///
/// Relative order is preserved. An empty input gives an empty output.
pub fn active_players(players: &[PlayerSnapshot]) -> Vec<PlayerSnapshot> {
    players
        .iter()
        .filter(|player| player.is_active())
        .cloned()
        .collect()
}

/// Drop players whose id contains any of the ignored patterns.
pub(crate) fn without_ignored(
    players: Vec<PlayerSnapshot>,
    ignored_patterns: &[String],
) -> Vec<PlayerSnapshot> {
    if ignored_patterns.is_empty() {
        return players;
    }

    players
        .into_iter()
        .filter(|player| !should_ignore(player.id.as_str(), ignored_patterns))
        .collect()
}

fn should_ignore(player_id: &str, ignored_patterns: &[String]) -> bool {
    ignored_patterns
        .iter()
        .any(|pattern| player_id.contains(pattern.as_str()))
}
