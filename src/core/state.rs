//! Game state: the board, the open selection, and progress counters.
//!
//! ## GameState
//!
//! - Cards in deal order (persistent `im::Vector`, O(1) clone)
//! - The pending first selection and the evaluating lock
//! - Move and matched-pair counters
//! - The generation the board was dealt in
//!
//! Renderers get read-only access; only the game manager mutates state.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::config::PairCount;
use super::entity::Generation;
use crate::cards::{Card, Symbol};

/// Complete state of one dealt game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    cards: Vector<Card>,
    pending_first: Option<usize>,
    evaluating: bool,
    moves: u32,
    matched_pairs: u32,
    pair_count: u32,
    generation: Generation,
}

impl GameState {
    /// State before any game has been dealt: no cards, no pairs.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fresh state for a newly dealt board of `pairs` pairs.
    pub(crate) fn dealt(cards: Vector<Card>, pairs: PairCount, generation: Generation) -> Self {
        Self {
            cards,
            pending_first: None,
            evaluating: false,
            moves: 0,
            matched_pairs: 0,
            pair_count: pairs.get(),
            generation,
        }
    }

    /// Fresh state for a hand-laid board, sized from the layout itself.
    ///
    /// Rejects layouts smaller than [`PairCount::MIN`] pairs; the caller
    /// still runs `check_invariants` for pairing.
    pub(crate) fn laid_out(
        cards: Vector<Card>,
        generation: Generation,
    ) -> Result<Self, InvariantViolation> {
        let pairs = u32::try_from(cards.len() / 2)
            .map_err(|_| InvariantViolation::TooManyCards { cards: cards.len() })?;
        if pairs < PairCount::MIN {
            return Err(InvariantViolation::TooFewPairs { cards: cards.len() });
        }
        Ok(Self::dealt(cards, PairCount::clamped(pairs), generation))
    }

    // === Read access ===

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Card at `index`, if it exists.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True before the first deal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of the first card of the currently open pair.
    #[must_use]
    pub fn pending_first(&self) -> Option<usize> {
        self.pending_first
    }

    /// True while a selected pair is waiting to resolve.
    #[must_use]
    pub fn is_evaluating(&self) -> bool {
        self.evaluating
    }

    /// Completed pair attempts.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    /// Pairs dealt in this game.
    #[must_use]
    pub fn pair_count(&self) -> u32 {
        self.pair_count
    }

    /// Epoch this board belongs to.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// All pairs found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.pair_count > 0 && self.matched_pairs == self.pair_count
    }

    /// Counters for a status line.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        GameStats {
            moves: self.moves,
            matched_pairs: self.matched_pairs,
            pair_count: self.pair_count,
        }
    }

    /// Indices of cards that are face-up but not yet matched.
    #[must_use]
    pub fn open_indices(&self) -> SmallVec<[usize; 2]> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_open())
            .map(|(index, _)| index)
            .collect()
    }

    // === Mutation (game manager only) ===

    pub(crate) fn reveal(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.reveal();
        }
    }

    pub(crate) fn open_first(&mut self, index: usize) {
        self.reveal(index);
        self.pending_first = Some(index);
    }

    /// Reveal the second card and lock the board. Returns the new move count.
    pub(crate) fn open_second(&mut self, index: usize) -> u32 {
        self.reveal(index);
        self.moves += 1;
        self.evaluating = true;
        self.moves
    }

    /// Settle an open pair. Returns true if the symbols matched.
    pub(crate) fn settle(&mut self, first: usize, second: usize) -> bool {
        let matched = match (self.cards.get(first), self.cards.get(second)) {
            (Some(a), Some(b)) => a.symbol == b.symbol,
            _ => false,
        };

        for index in [first, second] {
            if let Some(card) = self.cards.get_mut(index) {
                if matched {
                    card.mark_matched();
                } else {
                    card.hide();
                }
            }
        }

        if matched {
            self.matched_pairs += 1;
        }
        self.pending_first = None;
        self.evaluating = false;
        matched
    }

    // === Invariants ===

    /// Check every board invariant, reporting the first that fails.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.cards.len() != self.pair_count as usize * 2 {
            return Err(InvariantViolation::CardCount {
                cards: self.cards.len(),
                pair_count: self.pair_count,
            });
        }

        let mut counts: FxHashMap<&Symbol, usize> = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(&card.symbol).or_insert(0) += 1;
        }
        if let Some((symbol, &count)) = counts.iter().find(|(_, count)| **count != 2) {
            return Err(InvariantViolation::SymbolCount {
                symbol: (*symbol).clone(),
                count,
            });
        }

        if let Some(index) = self.cards.iter().position(|c| c.matched && !c.face_up) {
            return Err(InvariantViolation::MatchedFaceDown { index });
        }

        let matched_cards = self.cards.iter().filter(|c| c.matched).count();
        if matched_cards != self.matched_pairs as usize * 2 {
            return Err(InvariantViolation::MatchedCount {
                matched_cards,
                matched_pairs: self.matched_pairs,
            });
        }

        let open = self.open_indices().len();
        let expected = match (self.pending_first, self.evaluating) {
            (_, true) => 2,
            (Some(_), false) => 1,
            (None, false) => 0,
        };
        if open != expected {
            return Err(InvariantViolation::OpenCards { open, expected });
        }

        if let Some(first) = self.pending_first {
            if !self.cards.get(first).is_some_and(Card::is_open) {
                return Err(InvariantViolation::PendingNotOpen { index: first });
            }
        }

        Ok(())
    }
}

/// Counters shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Completed pair attempts.
    pub moves: u32,
    /// Pairs found.
    pub matched_pairs: u32,
    /// Pairs dealt.
    pub pair_count: u32,
}

impl GameStats {
    /// Message shown once every pair is found, `None` before that.
    #[must_use]
    pub fn completion_message(&self) -> Option<String> {
        (self.pair_count > 0 && self.matched_pairs == self.pair_count)
            .then(|| format!("You matched all pairs in {} moves!", self.moves))
    }
}

impl std::fmt::Display for GameStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Moves: {}  Matches: {}/{}",
            self.moves, self.matched_pairs, self.pair_count
        )
    }
}

/// A broken board invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{cards} cards on the board for {pair_count} pairs")]
    CardCount { cards: usize, pair_count: u32 },

    #[error("{cards} cards is fewer than the minimum of {} pairs", PairCount::MIN)]
    TooFewPairs { cards: usize },

    #[error("{cards} cards is more than a board can hold")]
    TooManyCards { cards: usize },

    #[error("symbol {symbol} appears {count} times")]
    SymbolCount { symbol: Symbol, count: usize },

    #[error("card {index} is matched but face-down")]
    MatchedFaceDown { index: usize },

    #[error("{matched_cards} matched cards for {matched_pairs} matched pairs")]
    MatchedCount { matched_cards: usize, matched_pairs: u32 },

    #[error("{open} open cards, expected {expected}")]
    OpenCards { open: usize, expected: usize },

    #[error("pending first selection {index} is not an open card")]
    PendingNotOpen { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::CardId;

    fn board(symbols: &[&str]) -> GameState {
        let cards = symbols
            .iter()
            .enumerate()
            .map(|(i, s)| Card::new(CardId::new(i as u32), Symbol::new(s)))
            .collect();
        GameState::laid_out(cards, Generation(1)).unwrap()
    }

    #[test]
    fn test_empty_state() {
        let state = GameState::empty();
        assert!(state.is_empty());
        assert_eq!(state.pair_count(), 0);
        assert!(!state.is_won());
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_dealt_state() {
        let state = board(&["A", "B", "A", "B"]);
        assert_eq!(state.len(), 4);
        assert_eq!(state.pair_count(), 2);
        assert_eq!(state.generation(), Generation(1));
        assert_eq!(state.pending_first(), None);
        assert!(!state.is_evaluating());
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_open_and_settle_mismatch() {
        let mut state = board(&["A", "B", "A", "B"]);

        state.open_first(0);
        assert_eq!(state.pending_first(), Some(0));
        assert!(state.check_invariants().is_ok());

        assert_eq!(state.open_second(1), 1);
        assert!(state.is_evaluating());
        assert_eq!(state.open_indices().as_slice(), &[0, 1]);
        assert!(state.check_invariants().is_ok());

        assert!(!state.settle(0, 1));
        assert!(state.open_indices().is_empty());
        assert_eq!(state.matched_pairs(), 0);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_open_and_settle_match() {
        let mut state = board(&["A", "B", "A", "B"]);

        state.open_first(0);
        state.open_second(2);
        assert!(state.settle(0, 2));

        assert_eq!(state.matched_pairs(), 1);
        assert!(state.card(0).unwrap().matched);
        assert!(state.card(2).unwrap().matched);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_laid_out_too_few_pairs() {
        let one_pair: Vector<Card> = ["A", "A"]
            .iter()
            .enumerate()
            .map(|(i, s)| Card::new(CardId::new(i as u32), Symbol::new(s)))
            .collect();

        assert_eq!(
            GameState::laid_out(Vector::new(), Generation(1)),
            Err(InvariantViolation::TooFewPairs { cards: 0 })
        );
        assert_eq!(
            GameState::laid_out(one_pair, Generation(1)),
            Err(InvariantViolation::TooFewPairs { cards: 2 })
        );
    }

    #[test]
    fn test_detects_bad_symbol_count() {
        let state = board(&["A", "A", "A", "B"]);
        assert!(matches!(
            state.check_invariants(),
            Err(InvariantViolation::SymbolCount { .. })
        ));
    }

    #[test]
    fn test_detects_stray_open_card() {
        let mut state = board(&["A", "B", "A", "B"]);
        state.reveal(3);
        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::OpenCards { open: 1, expected: 0 })
        );
    }

    #[test]
    fn test_stats_display() {
        let stats = GameStats {
            moves: 7,
            matched_pairs: 3,
            pair_count: 4,
        };
        assert_eq!(stats.to_string(), "Moves: 7  Matches: 3/4");
        assert_eq!(stats.completion_message(), None);

        let done = GameStats {
            matched_pairs: 4,
            ..stats
        };
        assert_eq!(
            done.completion_message().as_deref(),
            Some("You matched all pairs in 7 moves!")
        );
    }

    #[test]
    fn test_snapshot_serde() {
        let mut state = board(&["A", "B", "A", "B"]);
        state.open_first(1);

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }
}
