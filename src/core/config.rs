//! Game configuration types.
//!
//! - `PairCount`: number of pairs on the board, clamped to at least 2
//! - `GameConfig`: pair count, offered pair counts, reveal delay, seed
//!
//! Configs are plain data built with builder methods and validated against
//! a `SymbolAlphabet` before a game is created.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::cards::SymbolAlphabet;

/// Number of pairs dealt in one game.
///
/// Always at least [`PairCount::MIN`]; smaller requests are clamped up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct PairCount(u32);

impl PairCount {
    /// Smallest playable board.
    pub const MIN: u32 = 2;

    /// Create a pair count, clamping anything below [`PairCount::MIN`].
    #[must_use]
    pub const fn clamped(count: u32) -> Self {
        if count < Self::MIN {
            Self(Self::MIN)
        } else {
            Self(count)
        }
    }

    /// Get the raw count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Number of cards on the board (two per pair).
    #[must_use]
    pub const fn card_count(self) -> usize {
        self.0 as usize * 2
    }
}

impl Default for PairCount {
    fn default() -> Self {
        Self(4)
    }
}

impl From<u32> for PairCount {
    fn from(count: u32) -> Self {
        Self::clamped(count)
    }
}

impl From<PairCount> for u32 {
    fn from(count: PairCount) -> Self {
        count.0
    }
}

impl std::fmt::Display for PairCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Pairs", self.0)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pair count used by `restart`.
    pub pair_count: PairCount,

    /// Pair counts a front end offers in its picker.
    pub offered_pair_counts: Vec<u32>,

    /// How long a revealed pair stays visible before it resolves.
    pub resolve_delay: Duration,

    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: PairCount::default(),
            offered_pair_counts: vec![2, 4, 6, 8],
            resolve_delay: Duration::from_millis(650),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pair count (clamped to at least 2).
    #[must_use]
    pub fn with_pair_count(mut self, count: u32) -> Self {
        self.pair_count = PairCount::clamped(count);
        self
    }

    /// Set the pair counts offered to the player.
    #[must_use]
    pub fn with_offered_pair_counts(mut self, counts: impl Into<Vec<u32>>) -> Self {
        self.offered_pair_counts = counts.into();
        self
    }

    /// Set the reveal delay.
    #[must_use]
    pub fn with_resolve_delay(mut self, delay: Duration) -> Self {
        self.resolve_delay = delay;
        self
    }

    /// Use a fixed seed for deterministic deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Largest pair count this config can ask for.
    #[must_use]
    pub fn max_pair_count(&self) -> PairCount {
        self.offered_pair_counts
            .iter()
            .copied()
            .map(PairCount::clamped)
            .chain(std::iter::once(self.pair_count))
            .max()
            .unwrap_or(self.pair_count)
    }

    /// Check that `alphabet` can deal every pair count this config offers.
    pub fn validate(&self, alphabet: &SymbolAlphabet) -> Result<()> {
        if self.offered_pair_counts.is_empty() {
            return Err(GameError::InvalidOfferedPairCounts);
        }
        alphabet.check_supports(self.max_pair_count())
    }
}
