// SPDX-License-Identifier: MPL-2.0
//! Generation outcome state machine.
//!
//! Exactly one [`Outcome`] holds at any time and only the generation
//! lifecycle (or a reset) moves it. Every dispatch mints a [`RequestTicket`];
//! a completion carrying a ticket that is no longer current — because the
//! user reset while the request was in flight — is rejected instead of
//! clobbering state.

use crate::generation::port::{GeneratedIcon, GenerationError};
use iced::widget::image::Handle;

/// Identifies one dispatched generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Current position in the generate/display lifecycle.
#[derive(Debug, Clone, Default)]
pub enum Outcome {
    /// Nothing generated yet, or state was reset.
    #[default]
    Idle,
    /// A request is out; its ticket is the only one a completion may redeem.
    InFlight(RequestTicket),
    /// The service returned an icon.
    Ready {
        icon: GeneratedIcon,
        /// Pre-built handle so the view does not re-upload bytes each frame.
        handle: Handle,
    },
    /// The request failed.
    Failed(GenerationError),
}

/// Owns the [`Outcome`] and enforces its transitions.
#[derive(Debug, Default)]
pub struct Tracker {
    outcome: Outcome,
    last_ticket: u64,
}

impl Tracker {
    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        matches!(self.outcome, Outcome::InFlight(_))
    }

    /// Starts a new request, returning its ticket.
    ///
    /// Returns `None` while another request is in flight: generation is
    /// serialized, a second dispatch is ignored rather than queued.
    pub fn begin(&mut self) -> Option<RequestTicket> {
        if self.is_in_flight() {
            return None;
        }
        self.last_ticket += 1;
        let ticket = RequestTicket(self.last_ticket);
        self.outcome = Outcome::InFlight(ticket);
        Some(ticket)
    }

    /// Applies a completed request.
    ///
    /// Returns `false` (leaving state untouched) when the ticket is stale:
    /// the outcome moved on since the request was dispatched.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: Result<GeneratedIcon, GenerationError>,
    ) -> bool {
        if !matches!(self.outcome, Outcome::InFlight(current) if current == ticket) {
            return false;
        }
        self.outcome = match result {
            Ok(icon) => {
                let handle = Handle::from_bytes(icon.bytes.clone());
                Outcome::Ready { icon, handle }
            }
            Err(error) => Outcome::Failed(error),
        };
        true
    }

    /// Returns to `Idle` from any state. An in-flight ticket becomes stale.
    pub fn reset(&mut self) {
        self.outcome = Outcome::Idle;
    }
}
