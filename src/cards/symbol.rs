//! Symbols and the alphabet they are drawn from.
//!
//! A `Symbol` is what appears on a card's face. A `SymbolAlphabet` is the
//! ordered pool of distinct symbols a game deals from; it must hold at least
//! as many symbols as the largest pair count on offer.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::config::PairCount;
use crate::core::error::{GameError, Result};

/// The face value of a card.
///
/// Cheap to clone: the text is shared.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Create a symbol from its display text.
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(Arc::from(text.as_ref()))
    }

    /// The display text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Emoji pool used when no alphabet is supplied.
const DEFAULT_SYMBOLS: [&str; 20] = [
    "🍎", "🚗", "🐶", "🌟", "🎈", "🍩", "🎧", "🧩", "⚽️", "🦋", "🎮", "🌈", "🍀", "🛼", "🍕",
    "📸", "🧸", "🪄", "🪁", "🎲",
];

/// Ordered set of distinct symbols.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{Symbol, SymbolAlphabet};
///
/// let alphabet = SymbolAlphabet::new(["A", "B", "C"].map(Symbol::new)).unwrap();
/// assert_eq!(alphabet.len(), 3);
///
/// // Duplicates are rejected
/// assert!(SymbolAlphabet::new(["A", "A"].map(Symbol::new)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SymbolAlphabet {
    symbols: Vec<Symbol>,
}

impl SymbolAlphabet {
    /// Build an alphabet, rejecting empty input and duplicates.
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Result<Self> {
        let symbols: Vec<Symbol> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(GameError::EmptyAlphabet);
        }

        let mut seen = FxHashSet::default();
        for symbol in &symbols {
            if !seen.insert(symbol) {
                return Err(GameError::DuplicateSymbol(symbol.clone()));
            }
        }

        Ok(Self { symbols })
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; construction rejects empty alphabets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    /// Iterate over symbols in order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Fail with `GameError::Configuration` if `pairs` cannot be dealt.
    pub fn check_supports(&self, pairs: PairCount) -> Result<()> {
        if (pairs.get() as usize) > self.symbols.len() {
            return Err(GameError::Configuration {
                requested: pairs.get(),
                available: self.symbols.len(),
            });
        }
        Ok(())
    }
}

impl Default for SymbolAlphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(Symbol::new).collect(),
        }
    }
}

impl<'de> Deserialize<'de> for SymbolAlphabet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            symbols: Vec<Symbol>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.symbols).map_err(serde::de::Error::custom)
    }
}
