//! The game state manager and its timed pair resolution.
//!
//! - `MemoryGame`: deals boards, processes taps, resolves pairs
//! - `SelectOutcome` / `IgnoreReason`: what a tap did
//! - `ResolutionTicket` / `ResolutionOutcome`: the delayed resolution step
//! - `ResolutionTimer`: game clock holding the one pending resolution

pub mod manager;
pub mod outcome;
pub mod timer;

pub use manager::MemoryGame;
pub use outcome::{IgnoreReason, ResolutionOutcome, ResolutionTicket, SelectOutcome};
pub use timer::ResolutionTimer;
