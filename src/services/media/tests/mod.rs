#![allow(clippy::panic, clippy::unwrap_used)]

use crate::services::media::{
    CustomAction, MediaError, PlaybackState, PlayerFeed, PlayerId, PlayerRegistry,
    PlayerSelection, PlayerSnapshot, PresentationState, QueueInfo, QueueItem, RepeatMode,
    active_players, filter::without_ignored, next_index, resolve_current,
};

fn idle(id: &str) -> PlayerSnapshot {
    PlayerSnapshot::new(id, id.to_uppercase()).with_queue(QueueInfo::default())
}

fn playing(id: &str) -> PlayerSnapshot {
    PlayerSnapshot::new(id, id.to_uppercase())
        .with_playback_state(PlaybackState::Playing)
        .with_queue(QueueInfo::playing(QueueItem::new(
            format!("{id}-item"),
            format!("{id} track"),
        )))
}

fn ids(players: &[PlayerSnapshot]) -> Vec<&str> {
    players.iter().map(|player| player.id.as_str()).collect()
}

mod filter {
    use super::*;

    #[test]
    fn keeps_only_players_with_a_current_item() {
        let no_queue = PlayerSnapshot::new("d", "D");
        let players = vec![idle("a"), playing("b"), no_queue, playing("c")];

        let active = active_players(&players);

        assert_eq!(ids(&active), vec!["b", "c"]);
    }

    #[test]
    fn preserves_registry_order() {
        let players = vec![playing("z"), idle("y"), playing("a"), playing("m")];

        assert_eq!(ids(&active_players(&players)), vec!["z", "a", "m"]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(active_players(&[]).is_empty());
    }

    #[test]
    fn paused_player_with_current_item_is_active() {
        let paused = playing("p").with_playback_state(PlaybackState::Paused);

        assert!(paused.is_active());
    }

    #[test]
    fn ignored_patterns_match_by_substring() {
        let players = vec![playing("browser.tab1"), playing("kitchen"), playing("browser")];
        let patterns = vec!["browser".to_string()];

        let kept = without_ignored(players, &patterns);

        assert_eq!(ids(&kept), vec!["kitchen"]);
    }

    #[test]
    fn no_patterns_keeps_everything() {
        let players = vec![playing("a"), idle("b")];

        assert_eq!(without_ignored(players, &[]).len(), 2);
    }
}

mod selection {
    use super::*;

    #[test]
    fn advances_round_robin_with_several_players() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(1, 3), 2);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn stale_index_wraps_against_current_count() {
        assert_eq!(next_index(4, 2), 1);
        assert_eq!(next_index(5, 2), 0);
    }

    #[test]
    fn resets_with_one_or_no_player() {
        assert_eq!(next_index(3, 1), 0);
        assert_eq!(next_index(3, 0), 0);
    }

    #[test]
    fn switch_reads_count_per_call() {
        let selection = PlayerSelection::new();

        assert_eq!(selection.switch(3), 1);
        assert_eq!(selection.switch(3), 2);
        assert_eq!(selection.switch(2), 1);
        assert_eq!(selection.switch(1), 0);
        assert_eq!(selection.get(), 0);
    }
}

mod resolver {
    use super::*;

    #[test]
    fn picks_selected_player() {
        let active = vec![playing("b"), playing("c")];

        assert_eq!(resolve_current(&active, 1), Some(playing("c")));
    }

    #[test]
    fn stale_index_falls_back_to_first() {
        let active = vec![playing("b")];

        assert_eq!(resolve_current(&active, 1), Some(playing("b")));
    }

    #[test]
    fn empty_list_resolves_to_none() {
        assert_eq!(resolve_current(&[], 0), None);
        assert_eq!(resolve_current(&[], 7), None);
    }

    #[test]
    fn repeated_resolution_is_stable() {
        let active = vec![playing("b"), playing("c")];

        let first = resolve_current(&active, 5);
        for _ in 0..3 {
            assert_eq!(resolve_current(&active, 5), first);
        }
    }
}

mod presentation {
    use super::*;

    #[test]
    fn several_players_offer_switching() {
        let state = PresentationState::resolve(&[playing("b"), playing("c")], 0);

        assert!(state.multiple_players);
        assert_eq!(
            state.custom_actions(),
            vec![
                CustomAction::SwitchPlayer,
                CustomAction::ToggleShuffle,
                CustomAction::ToggleRepeat
            ]
        );
    }

    #[test]
    fn single_player_offers_queue_actions_only() {
        let state = PresentationState::resolve(&[playing("b")], 3);

        assert!(!state.multiple_players);
        assert_eq!(state.player, Some(playing("b")));
        assert_eq!(
            state.custom_actions(),
            vec![CustomAction::ToggleShuffle, CustomAction::ToggleRepeat]
        );
    }

    #[test]
    fn no_player_offers_nothing() {
        let state = PresentationState::resolve(&[], 0);

        assert_eq!(state, PresentationState::default());
        assert!(state.custom_actions().is_empty());
    }
}

mod types {
    use super::*;

    #[test]
    fn custom_actions_parse_from_platform_names() {
        for action in [
            CustomAction::SwitchPlayer,
            CustomAction::ToggleShuffle,
            CustomAction::ToggleRepeat,
        ] {
            assert_eq!(action.as_str().parse::<CustomAction>().unwrap(), action);
        }
    }

    #[test]
    fn unknown_custom_action_is_rejected() {
        let err = "ACTION_EJECT".parse::<CustomAction>().unwrap_err();

        assert!(matches!(err, MediaError::UnknownAction(name) if name == "ACTION_EJECT"));
    }

    #[test]
    fn repeat_mode_cycles() {
        assert_eq!(RepeatMode::Off.next(), RepeatMode::One);
        assert_eq!(RepeatMode::One.next(), RepeatMode::All);
        assert_eq!(RepeatMode::All.next(), RepeatMode::Off);
    }

    #[test]
    fn repeat_mode_parses_wire_names() {
        assert_eq!(RepeatMode::from("all"), RepeatMode::All);
        assert_eq!(RepeatMode::from("bogus"), RepeatMode::Off);
        let name: &str = RepeatMode::One.into();
        assert_eq!(name, "one");
    }

    #[test]
    fn playback_state_parses_wire_names() {
        assert_eq!(PlaybackState::from("playing"), PlaybackState::Playing);
        assert_eq!(PlaybackState::from("paused"), PlaybackState::Paused);
        assert_eq!(PlaybackState::from("idle"), PlaybackState::Idle);
        assert_eq!(PlaybackState::from("buffering"), PlaybackState::Idle);
    }
}

mod registry {
    use super::*;

    #[test]
    fn upsert_replaces_in_place() {
        let registry = PlayerRegistry::new();
        registry.upsert(playing("a"));
        registry.upsert(playing("b"));
        registry.upsert(idle("a"));

        let players = registry.players();
        assert_eq!(ids(&players), vec!["a", "b"]);
        assert!(!players[0].is_active());
    }

    #[test]
    fn remove_reports_whether_player_existed() {
        let registry = PlayerRegistry::new();
        registry.upsert(playing("a"));

        assert!(registry.remove(&PlayerId::from("a")));
        assert!(!registry.remove(&PlayerId::from("a")));
        assert!(registry.players().is_empty());
    }

    #[test]
    fn replace_all_swaps_the_list() {
        let registry = PlayerRegistry::new();
        registry.upsert(playing("a"));
        registry.replace_all(vec![playing("x"), playing("y")]);

        assert_eq!(ids(&registry.players()), vec!["x", "y"]);
    }
}
