//! Property tests.
//!
//! Random pair counts, seeds, and tap/clock sequences must keep every board
//! invariant, and the counters must never go backwards.

use std::time::Duration;

use memory_match::{GameConfig, MemoryGame, SelectOutcome, Symbol};
use proptest::prelude::*;
use rustc_hash::FxHashMap;

#[derive(Clone, Debug)]
enum Step {
    Tap(usize),
    Advance(u64),
    Restart,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => (0usize..20).prop_map(Step::Tap),
        3 => (0u64..1000).prop_map(Step::Advance),
        1 => Just(Step::Restart),
    ]
}

proptest! {
    /// A fresh deal has 2 * pairs cards, each symbol twice, all face-down.
    #[test]
    fn prop_fresh_deal(seed in any::<u64>(), pairs in 0u32..=20) {
        let mut game = MemoryGame::new(GameConfig::new().with_seed(seed)).unwrap();
        game.start_new_game(pairs).unwrap();

        let expected_pairs = pairs.max(2) as usize;
        let state = game.state();
        prop_assert_eq!(state.len(), expected_pairs * 2);

        let mut counts: FxHashMap<&Symbol, usize> = FxHashMap::default();
        for card in state.cards() {
            prop_assert!(!card.face_up);
            prop_assert!(!card.matched);
            *counts.entry(&card.symbol).or_insert(0) += 1;
        }
        prop_assert_eq!(counts.len(), expected_pairs);
        prop_assert!(counts.values().all(|&n| n == 2));
        prop_assert!(state.check_invariants().is_ok());
    }

    /// Repeated deals each fully replace the last one.
    #[test]
    fn prop_repeated_deals(seed in any::<u64>(), counts in prop::collection::vec(0u32..=8, 1..6)) {
        let mut game = MemoryGame::new(GameConfig::new().with_seed(seed)).unwrap();
        for pairs in counts {
            game.select_card(0);
            game.select_card(1);
            game.start_new_game(pairs).unwrap();

            let state = game.state();
            prop_assert_eq!(state.pair_count(), pairs.max(2));
            prop_assert_eq!(state.moves(), 0);
            prop_assert_eq!(state.matched_pairs(), 0);
            prop_assert!(game.pending_resolution().is_none());
            prop_assert!(state.check_invariants().is_ok());
        }
    }

    /// Any interleaving of taps, time, and restarts keeps the invariants and
    /// monotonic counters within a game.
    #[test]
    fn prop_random_play(
        seed in any::<u64>(),
        pairs in 2u32..=8,
        steps in prop::collection::vec(step(), 0..200),
    ) {
        let mut game = MemoryGame::new(GameConfig::new().with_seed(seed)).unwrap();
        game.start_new_game(pairs).unwrap();

        for step in steps {
            let before = game.snapshot();
            match step {
                Step::Tap(index) => {
                    let outcome = game.select_card(index);
                    if before.is_evaluating() || before.card(index).map_or(true, |c| c.matched) {
                        prop_assert!(outcome.is_ignored());
                    }
                    if outcome.is_ignored() {
                        prop_assert_eq!(&game.snapshot(), &before);
                    }
                    if let SelectOutcome::PairPending(ticket) = outcome {
                        prop_assert_ne!(ticket.first, ticket.second);
                    }
                }
                Step::Advance(ms) => {
                    game.advance(Duration::from_millis(ms));
                }
                Step::Restart => {
                    game.restart().unwrap();
                }
            }

            let after = game.state();
            prop_assert!(after.check_invariants().is_ok());
            if after.generation() == before.generation() {
                prop_assert!(after.moves() >= before.moves());
                prop_assert!(after.matched_pairs() >= before.matched_pairs());
            }
            prop_assert_eq!(
                after.is_won(),
                after.matched_pairs() == after.pair_count()
            );
        }
    }

    /// Playing with perfect memory always wins in exactly `pairs` moves.
    #[test]
    fn prop_perfect_play_wins(seed in any::<u64>(), pairs in 2u32..=8) {
        let mut game = MemoryGame::new(GameConfig::new().with_seed(seed)).unwrap();
        game.start_new_game(pairs).unwrap();

        let cards = game.state().cards().clone();
        let mut positions: FxHashMap<Symbol, Vec<usize>> = FxHashMap::default();
        for (index, card) in cards.iter().enumerate() {
            positions.entry(card.symbol.clone()).or_default().push(index);
        }

        for indices in positions.values() {
            prop_assert!(!game.select_card(indices[0]).is_ignored());
            prop_assert!(game.select_card(indices[1]).ticket().is_some());
            prop_assert!(game.resolve_pending().unwrap().is_match());
        }

        prop_assert!(game.is_won());
        prop_assert_eq!(game.state().moves(), pairs);
    }
}
