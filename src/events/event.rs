//! Game events.
//!
//! Events describe every visible change the manager makes, in the order it
//! makes them. Renderers can subscribe instead of diffing snapshots.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::entity::Generation;

/// Something that happened on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new board was dealt.
    GameStarted {
        generation: Generation,
        pair_count: u32,
    },

    /// A card was turned face-up by a tap.
    CardRevealed { index: usize, card: Card },

    /// A second card was revealed; the pair will resolve after the delay.
    PairAttempted {
        first: usize,
        second: usize,
        moves: u32,
    },

    /// The open pair matched and stays face-up.
    PairMatched {
        first: usize,
        second: usize,
        matched_pairs: u32,
    },

    /// The open pair did not match and was turned back down.
    PairMismatched { first: usize, second: usize },

    /// Every pair has been found.
    GameWon { moves: u32 },
}

impl GameEvent {
    /// Short name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::GameStarted { .. } => "game_started",
            GameEvent::CardRevealed { .. } => "card_revealed",
            GameEvent::PairAttempted { .. } => "pair_attempted",
            GameEvent::PairMatched { .. } => "pair_matched",
            GameEvent::PairMismatched { .. } => "pair_mismatched",
            GameEvent::GameWon { .. } => "game_won",
        }
    }
}
