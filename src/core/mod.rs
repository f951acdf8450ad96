//! Core types: identities, configuration, errors, RNG, and game state.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{GameConfig, PairCount};
pub use entity::{CardId, CardIdAllocator, Generation};
pub use error::{GameError, Result};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, GameStats, InvariantViolation};
