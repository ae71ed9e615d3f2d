//! Property tests for engine invariants.
//!
//! Generated seeds, container counts and probe sequences check that:
//! - the item location is always a valid container
//! - the miss count equals the number of checked containers
//! - a hit awards `N - misses`, or a strike when that is 1
//! - strikes never outlive the reset that reaches the threshold

use proptest::prelude::*;
use shell_game::core::{ContainerId, EngineConfig, GameRng};
use shell_game::engine::ShellGame;
use shell_game::events::{EngineEvent, EventKind};

fn journaled(seed: u64, containers: usize, strikes: u32) -> ShellGame<GameRng> {
    let config = EngineConfig::new(containers, strikes).with_event_journal();
    let mut game = ShellGame::with_config(GameRng::new(seed), config).unwrap();
    game.drain_events();
    game
}

proptest! {
    #[test]
    fn location_always_valid(seed in any::<u64>(), containers in 1usize..16, resets in 0usize..32) {
        let mut game = journaled(seed, containers, 3);
        prop_assert!(game.item_location().is_valid(containers));
        for _ in 0..resets {
            game.reset_round();
            prop_assert!(game.item_location().is_valid(containers));
        }
    }

    #[test]
    fn probe_bookkeeping_holds(
        seed in any::<u64>(),
        containers in 2usize..10,
        probes in prop::collection::vec(0u32..10, 1..40),
    ) {
        let mut game = journaled(seed, containers, 3);

        for raw in probes {
            let id = ContainerId::new(raw % containers as u32);
            let location = game.item_location();
            let misses = game.missed_count();
            let strikes = game.strikes();

            let hit = game.probe(id).unwrap();
            prop_assert_eq!(hit, id == location);

            let events = game.drain_events();
            prop_assert_eq!(events[0], EngineEvent::CheckingItem { id });

            if hit {
                let score = containers - misses;
                if score == 1 {
                    let strike = EngineEvent::MatchNotMade { is_strike: true };
                    prop_assert!(events.contains(&strike));
                    prop_assert_eq!(game.strikes(), strikes + 1);
                } else {
                    let made = EngineEvent::MatchMade { id, score };
                    prop_assert!(events.contains(&made));
                    prop_assert_eq!(game.strikes(), strikes);
                }
                prop_assert_eq!(events.last(), Some(&EngineEvent::StartTurn));
                prop_assert!(game.snapshot().checked.is_empty());
                game.reset_round();
                game.drain_events();
            } else {
                prop_assert!(game.missed_count() < containers);
                prop_assert_eq!(game.snapshot().checked.len(), game.missed_count());
            }
        }
    }

    #[test]
    fn strikes_bounded_by_threshold(
        seed in any::<u64>(),
        total_strikes in 1u32..4,
        rounds in 1usize..20,
    ) {
        // Two containers: probing the wrong one first always forces a strike.
        let mut game = journaled(seed, 2, total_strikes);

        for _ in 0..rounds {
            let wrong = ContainerId::new(1 - game.item_location().raw());
            game.probe(wrong).unwrap();
            game.probe(game.item_location()).unwrap();
            prop_assert!(game.strikes() <= total_strikes);

            let before = game.strikes();
            game.drain_events();
            game.reset_round();
            let game_overs = game
                .drain_events()
                .iter()
                .filter(|e| e.kind() == EventKind::GameOver)
                .count();

            if before >= total_strikes {
                prop_assert_eq!(game_overs, 1);
                prop_assert_eq!(game.strikes(), 0);
            } else {
                prop_assert_eq!(game_overs, 0);
                prop_assert_eq!(game.strikes(), before);
            }
        }
    }
}
