//! Results of taps and resolutions.
//!
//! A tap either reveals a card, opens a pair (handing back the ticket for
//! its delayed resolution), or is ignored with a reason. None of these are
//! errors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::entity::Generation;

/// Why a tap did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No card at that index (includes taps before the first deal).
    OutOfRange,
    /// A pair is waiting to resolve.
    Busy,
    /// The card is already part of a found pair.
    AlreadyMatched,
    /// The card is the pending first selection.
    SameCard,
    /// The card is already showing its symbol.
    AlreadyFaceUp,
}

/// What a tap did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// The tap was ignored; state is unchanged.
    Ignored(IgnoreReason),
    /// First card of a pair revealed.
    Revealed { index: usize },
    /// Second card revealed; the pair resolves when the ticket comes due.
    PairPending(ResolutionTicket),
}

impl SelectOutcome {
    /// True if the tap changed nothing.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }

    /// The scheduled resolution, if this tap opened a pair.
    #[must_use]
    pub fn ticket(&self) -> Option<&ResolutionTicket> {
        match self {
            SelectOutcome::PairPending(ticket) => Some(ticket),
            _ => None,
        }
    }
}

/// A scheduled pair resolution.
///
/// Carries the generation of the board it was opened on; once a new game
/// is dealt the ticket no longer applies to anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionTicket {
    /// Board epoch the pair belongs to.
    pub generation: Generation,
    /// Index of the first card.
    pub first: usize,
    /// Index of the second card.
    pub second: usize,
    /// Game-clock time at which the pair resolves.
    pub due: Duration,
}

/// What a resolution did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionOutcome {
    /// Symbols matched; `won` is set if that was the last pair.
    Matched {
        first: usize,
        second: usize,
        won: bool,
    },
    /// Symbols differed; both cards are face-down again.
    Mismatched { first: usize, second: usize },
    /// The ticket belongs to a discarded board or was already resolved.
    Stale,
}

impl ResolutionOutcome {
    /// True if the pair matched.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, ResolutionOutcome::Matched { .. })
    }
}
