//! Card instances - runtime card state.
//!
//! A `Card` is one face-down/face-up tile on the board. Its `id` is only
//! identity for renderers; the rules compare `symbol`s.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::core::entity::CardId;

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity for this card instance.
    pub id: CardId,

    /// Face value; exactly one other card in the game shares it.
    pub symbol: Symbol,

    /// Is the symbol currently visible?
    pub face_up: bool,

    /// Has this card been resolved as part of a found pair?
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
        }
    }

    /// Turn the card face-up.
    pub fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Turn the card face-down. Matched cards stay up.
    pub fn hide(&mut self) {
        if !self.matched {
            self.face_up = false;
        }
    }

    /// Mark as part of a found pair. Matched cards are always face-up.
    pub fn mark_matched(&mut self) {
        self.face_up = true;
        self.matched = true;
    }

    /// Face-up and waiting for its pair to resolve.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.face_up && !self.matched
    }

    /// Can a tap on this card do anything?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.face_up && !self.matched
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{}", self.symbol)
        } else {
            f.write_str("?")
        }
    }
}
