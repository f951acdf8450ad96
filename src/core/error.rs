//! Error types.
//!
//! Only configuration problems are errors. Taps that the rules ignore
//! (matched card, face-up card, evaluation in progress, bad index) are
//! reported through `SelectOutcome::Ignored`, not through `GameError`.

use thiserror::Error;

use super::state::InvariantViolation;
use crate::cards::Symbol;

/// Errors raised while configuring or starting a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The symbol alphabet is too small for the requested pair count.
    #[error("cannot deal {requested} pairs from an alphabet of {available} symbols")]
    Configuration {
        /// Pair count that was asked for (after clamping).
        requested: u32,
        /// Distinct symbols in the alphabet.
        available: usize,
    },

    /// An alphabet was built with no symbols.
    #[error("symbol alphabet is empty")]
    EmptyAlphabet,

    /// An alphabet was built with the same symbol twice.
    #[error("symbol {0} appears more than once in the alphabet")]
    DuplicateSymbol(Symbol),

    /// The config offers no pair counts to choose from.
    #[error("at least one pair count must be offered")]
    InvalidOfferedPairCounts,

    /// A hand-laid board breaks a board invariant.
    #[error("invalid board layout: {0}")]
    InvalidLayout(#[from] InvariantViolation),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
