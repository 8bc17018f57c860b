// SPDX-License-Identifier: MPL-2.0
//! Media load status and load request tagging.
//!
//! Every load request carries a [`LoadTicket`]. Callbacks arriving with a
//! ticket other than the viewer's current one belong to superseded media and
//! are discarded.

use std::fmt;

/// Load status of the media currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Waiting for the load callback.
    #[default]
    Loading,
    /// The media is painted and interactive.
    Loaded,
    /// The media failed to load; terminal for the current URL.
    Error,
}

impl LoadState {
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_loaded(self) -> bool {
        matches!(self, Self::Loaded)
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Identifies one load request.
///
/// `session` changes every time a project is opened; `sequence` changes
/// every time the viewer switches URL within that session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    session: u64,
    sequence: u32,
}

impl LoadTicket {
    /// First ticket of a viewer session.
    #[must_use]
    pub fn first(session: ViewerSession) -> Self {
        Self {
            session: session.0,
            sequence: 0,
        }
    }

    /// The ticket that supersedes this one within the same session.
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            session: self.session,
            sequence: self.sequence.wrapping_add(1),
        }
    }

    /// The viewer session this ticket was issued in.
    #[must_use]
    pub fn session(self) -> ViewerSession {
        ViewerSession(self.session)
    }
}

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.session, self.sequence)
    }
}

/// Identifier of one opening of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewerSession(u64);

/// Monotonic source of viewer sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionCounter {
    next: u64,
}

impl SessionCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a session never issued before by this counter.
    pub fn issue(&mut self) -> ViewerSession {
        let session = ViewerSession(self.next);
        self.next = self.next.wrapping_add(1);
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_loading() {
        assert_eq!(LoadState::default(), LoadState::Loading);
        assert!(LoadState::Loading.is_loading());
        assert!(LoadState::Loaded.is_loaded());
        assert!(LoadState::Error.is_error());
    }

    #[test]
    fn sessions_are_unique() {
        let mut counter = SessionCounter::new();
        let a = counter.issue();
        let b = counter.issue();
        assert_ne!(a, b);
        assert_ne!(LoadTicket::first(a), LoadTicket::first(b));
    }

    #[test]
    fn next_ticket_supersedes_within_session() {
        let mut counter = SessionCounter::new();
        let first = LoadTicket::first(counter.issue());
        let second = first.next();
        assert_ne!(first, second);
        assert_eq!(first.session(), second.session());
    }

    #[test]
    fn ticket_display_shows_session_and_sequence() {
        let mut counter = SessionCounter::new();
        counter.issue();
        let ticket = LoadTicket::first(counter.issue()).next();
        assert_eq!(ticket.to_string(), "1.1");
    }
}
