//! Card system: symbols, the alphabet, and card instances.
//!
//! ## Key Types
//!
//! - `Symbol`: face value of a card
//! - `SymbolAlphabet`: distinct symbols a game deals from
//! - `Card`: one card on the board (identity, symbol, face-up, matched)
//! - `deal`: builds a shuffled board from an alphabet

pub mod card;
pub mod deck;
pub mod symbol;

pub use card::Card;
pub use deck::deal;
pub use symbol::{Symbol, SymbolAlphabet};
