//! Game clock and the single pending resolution.
//!
//! Time only moves when the host calls `advance`, so the delay is
//! deterministic under test and needs no threads.

use std::time::Duration;

use super::outcome::ResolutionTicket;
use crate::core::entity::Generation;

/// Holds at most one scheduled resolution and the clock it is measured on.
#[derive(Clone, Debug, Default)]
pub struct ResolutionTimer {
    now: Duration,
    pending: Option<ResolutionTicket>,
}

impl ResolutionTimer {
    /// Create a timer at time zero with nothing scheduled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The scheduled resolution, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&ResolutionTicket> {
        self.pending.as_ref()
    }

    /// Schedule a resolution `delay` from now, replacing any previous one.
    pub fn schedule(
        &mut self,
        generation: Generation,
        first: usize,
        second: usize,
        delay: Duration,
    ) -> ResolutionTicket {
        let ticket = ResolutionTicket {
            generation,
            first,
            second,
            due: self.now.saturating_add(delay),
        };
        self.pending = Some(ticket);
        ticket
    }

    /// Move the clock forward. Returns the pending ticket if it came due.
    pub fn advance(&mut self, elapsed: Duration) -> Option<ResolutionTicket> {
        self.now = self.now.saturating_add(elapsed);
        match self.pending {
            Some(ticket) if ticket.due <= self.now => self.pending.take(),
            _ => None,
        }
    }

    /// Remove the pending ticket if it is exactly `ticket`.
    pub fn take_matching(&mut self, ticket: &ResolutionTicket) -> Option<ResolutionTicket> {
        if self.pending.as_ref() == Some(ticket) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Remove the pending ticket regardless of its due time.
    pub fn take(&mut self) -> Option<ResolutionTicket> {
        self.pending.take()
    }

    /// Drop whatever is scheduled.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
