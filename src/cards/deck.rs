//! Dealing a board.
//!
//! Picks `pair_count` distinct symbols uniformly without replacement, makes
//! two cards of each, then shuffles the whole board.

use im::Vector;

use super::card::Card;
use super::symbol::SymbolAlphabet;
use crate::core::config::PairCount;
use crate::core::entity::CardIdAllocator;
use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;

/// Deal a shuffled board of `pairs` pairs.
///
/// Fails with `GameError::Configuration` if the alphabet is too small.
pub fn deal(
    alphabet: &SymbolAlphabet,
    pairs: PairCount,
    rng: &mut GameRng,
    ids: &mut CardIdAllocator,
) -> Result<Vector<Card>> {
    alphabet.check_supports(pairs)?;

    let picked = rng
        .sample_indices(alphabet.len(), pairs.get() as usize)
        .ok_or_else(|| GameError::Configuration {
            requested: pairs.get(),
            available: alphabet.len(),
        })?;

    let mut cards = Vec::with_capacity(pairs.card_count());
    for symbol in picked.into_iter().filter_map(|i| alphabet.get(i)) {
        cards.push(Card::new(ids.alloc(), symbol.clone()));
        cards.push(Card::new(ids.alloc(), symbol.clone()));
    }
    rng.shuffle(&mut cards);

    Ok(cards.into_iter().collect())
}
