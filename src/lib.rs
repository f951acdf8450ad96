//! # memory-match
//!
//! Game state core for a single-screen memory matching card game.
//!
//! A grid of face-down cards is revealed two at a time. Matching pairs stay
//! face-up; mismatches turn back down after a short delay. The game counts
//! moves and ends when every pair is found.
//!
//! ## Design Principles
//!
//! 1. **State Without Presentation**: The crate owns the rules and the board.
//!    Rendering, layout, and animation belong to whoever embeds it.
//!
//! 2. **Explicit Time**: The reveal delay is a scheduled ticket on a game
//!    clock the host advances. No threads, no ambient timers.
//!
//! 3. **Generations**: Every deal starts a new epoch. Resolutions from an
//!    earlier epoch never touch the current board.
//!
//! 4. **Deterministic Under Test**: Seeded ChaCha8 RNG for deals; hand-laid
//!    boards for exact scenarios.
//!
//! ## Modules
//!
//! - `core`: Card ids, generations, configuration, errors, RNG, game state
//! - `cards`: Symbols, alphabets, card instances, dealing
//! - `events`: Change events and subscriptions
//! - `game`: The `MemoryGame` manager and timed resolution

pub mod cards;
pub mod core;
pub mod events;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CardId, Generation,
    GameConfig, PairCount,
    GameError, Result,
    GameRng, GameRngState,
    GameState, GameStats, InvariantViolation,
};

pub use crate::cards::{Card, Symbol, SymbolAlphabet};

pub use crate::events::{EventBus, GameEvent, SubscriptionId};

pub use crate::game::{
    IgnoreReason, MemoryGame, ResolutionOutcome, ResolutionTicket, SelectOutcome,
};
