//! Event subscription tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use memory_match::{GameConfig, GameEvent, Generation, MemoryGame, Symbol};

const DELAY: Duration = Duration::from_millis(650);

fn recording_game() -> (MemoryGame, Rc<RefCell<Vec<GameEvent>>>) {
    let mut game = MemoryGame::new(GameConfig::new().with_seed(1)).unwrap();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    game.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    (game, log)
}

/// A full two-pair game emits events in order.
#[test]
fn test_full_game_event_order() {
    let (mut game, log) = recording_game();
    game.start_with_layout(["A", "B", "A", "B"].map(Symbol::new)).unwrap();

    game.select_card(0);
    game.select_card(1);
    game.advance(DELAY);
    game.select_card(0);
    game.select_card(2);
    game.advance(DELAY);
    game.select_card(1);
    game.select_card(3);
    game.advance(DELAY);

    let kinds: Vec<_> = log.borrow().iter().map(GameEvent::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "game_started",
            "card_revealed",
            "card_revealed",
            "pair_attempted",
            "pair_mismatched",
            "card_revealed",
            "card_revealed",
            "pair_attempted",
            "pair_matched",
            "card_revealed",
            "card_revealed",
            "pair_attempted",
            "pair_matched",
            "game_won",
        ]
    );

    assert_eq!(log.borrow().last(), Some(&GameEvent::GameWon { moves: 3 }));
}

/// Event payloads carry the state after the change.
#[test]
fn test_event_payloads() {
    let (mut game, log) = recording_game();
    game.start_with_layout(["A", "A", "B", "B"].map(Symbol::new)).unwrap();
    game.select_card(0);
    game.select_card(1);
    game.advance(DELAY);

    let log = log.borrow();
    assert_eq!(
        log[0],
        GameEvent::GameStarted {
            generation: Generation(1),
            pair_count: 2,
        }
    );
    match &log[1] {
        GameEvent::CardRevealed { index, card } => {
            assert_eq!(*index, 0);
            assert!(card.face_up);
            assert_eq!(card.symbol, Symbol::new("A"));
        }
        other => panic!("expected CardRevealed, got {:?}", other),
    }
    assert_eq!(
        log[3],
        GameEvent::PairAttempted {
            first: 0,
            second: 1,
            moves: 1,
        }
    );
    assert_eq!(
        log[4],
        GameEvent::PairMatched {
            first: 0,
            second: 1,
            matched_pairs: 1,
        }
    );
}

/// Ignored taps and stale resolutions emit nothing.
#[test]
fn test_no_events_for_no_ops() {
    let (mut game, log) = recording_game();
    game.start_with_layout(["A", "B", "A", "B"].map(Symbol::new)).unwrap();
    game.select_card(0);
    let ticket = *game.select_card(1).ticket().unwrap();
    let emitted = log.borrow().len();

    game.select_card(2);
    game.select_card(9);
    assert_eq!(log.borrow().len(), emitted);

    game.restart().unwrap();
    let emitted = log.borrow().len();
    game.resolve(&ticket);
    game.advance(DELAY);
    assert_eq!(log.borrow().len(), emitted);
}

/// Unsubscribed listeners stop receiving events.
#[test]
fn test_unsubscribe() {
    let mut game = MemoryGame::new(GameConfig::new().with_seed(1)).unwrap();
    let count = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&count);
    let id = game.subscribe(move |_| *counter.borrow_mut() += 1);

    game.restart().unwrap();
    assert!(game.unsubscribe(id));
    game.restart().unwrap();

    assert_eq!(*count.borrow(), 1);
}
