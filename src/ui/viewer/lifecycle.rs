// SPDX-License-Identifier: MPL-2.0
//! Media lifecycle sub-component: load status, fallback substitution and
//! stale-callback rejection.
//!
//! Each URL switch issues a new [`LoadTicket`]. Only callbacks carrying the
//! current ticket may change the load status.

use crate::domain::viewer::{LoadState, LoadTicket, ViewerSession};
use crate::error::MediaLoadError;

/// What kind of resource a load request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// A still image to fetch and decode.
    Image,
    /// A video source to probe.
    Video,
}

/// A request for the host to load `url` and report back with `ticket`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub url: String,
    pub kind: MediaKind,
}

/// Media lifecycle state.
#[derive(Debug, Clone)]
pub struct State {
    ticket: LoadTicket,
    status: LoadState,
    url: String,
    kind: MediaKind,
    /// Substitute for `url`, consumed by the first failure.
    fallback: Option<String>,
    error: Option<MediaLoadError>,
}

/// Effects produced by load callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The callback belongs to superseded media and was ignored.
    Stale(LoadTicket),
    /// The current media finished loading.
    Ready,
    /// The current media failed and the fallback is being loaded instead.
    Retry(LoadRequest),
    /// The current media failed with no recourse left.
    Failed(MediaLoadError),
    /// The callback matched but changed nothing (e.g. a repeated success).
    Unchanged,
}

impl State {
    /// Starts the lifecycle of a freshly opened viewer.
    #[must_use]
    pub fn start(
        session: ViewerSession,
        url: String,
        kind: MediaKind,
        fallback: Option<String>,
    ) -> (Self, LoadRequest) {
        let ticket = LoadTicket::first(session);
        let state = Self {
            ticket,
            status: LoadState::Loading,
            url,
            kind,
            fallback: fallback.filter(|f| !f.trim().is_empty()),
            error: None,
        };
        let request = state.request();
        (state, request)
    }

    /// Switches to another URL, invalidating every pending callback.
    ///
    /// The fallback allowance is reset: an error is final only until the
    /// displayed media changes.
    pub fn switch_to(&mut self, url: String, fallback: Option<String>) -> LoadRequest {
        self.ticket = self.ticket.next();
        self.status = LoadState::Loading;
        self.url = url;
        self.fallback = fallback.filter(|f| !f.trim().is_empty());
        self.error = None;
        self.request()
    }

    /// Handles a success callback.
    pub fn succeed(&mut self, ticket: LoadTicket) -> Effect {
        if ticket != self.ticket {
            return Effect::Stale(ticket);
        }
        if self.status.is_loading() {
            self.status = LoadState::Loaded;
            Effect::Ready
        } else {
            Effect::Unchanged
        }
    }

    /// Handles a failure callback.
    pub fn fail(&mut self, ticket: LoadTicket, error: MediaLoadError) -> Effect {
        if ticket != self.ticket {
            return Effect::Stale(ticket);
        }
        if !self.status.is_loading() {
            return Effect::Unchanged;
        }

        if let Some(fallback) = self.fallback.take() {
            self.ticket = self.ticket.next();
            self.url = fallback;
            return Effect::Retry(self.request());
        }

        self.status = LoadState::Error;
        self.error = Some(error.clone());
        Effect::Failed(error)
    }

    /// Returns `true` if `ticket` identifies the media currently displayed.
    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket == self.ticket
    }

    #[must_use]
    pub fn status(&self) -> LoadState {
        self.status
    }

    #[must_use]
    pub fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    /// The URL currently displayed (after any fallback substitution).
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn error(&self) -> Option<&MediaLoadError> {
        self.error.as_ref()
    }

    fn request(&self) -> LoadRequest {
        LoadRequest {
            ticket: self.ticket,
            url: self.url.clone(),
            kind: self.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::viewer::SessionCounter;

    fn started(fallback: Option<&str>) -> (State, LoadRequest) {
        let mut sessions = SessionCounter::new();
        State::start(
            sessions.issue(),
            "primary.jpg".into(),
            MediaKind::Image,
            fallback.map(String::from),
        )
    }

    #[test]
    fn start_issues_request_for_url() {
        let (state, request) = started(None);
        assert!(state.status().is_loading());
        assert_eq!(request.url, "primary.jpg");
        assert_eq!(request.ticket, state.ticket());
        assert_eq!(request.kind, MediaKind::Image);
    }

    #[test]
    fn matching_success_marks_loaded() {
        let (mut state, request) = started(None);
        assert_eq!(state.succeed(request.ticket), Effect::Ready);
        assert!(state.status().is_loaded());
        assert_eq!(state.succeed(request.ticket), Effect::Unchanged);
    }

    #[test]
    fn superseded_success_is_stale() {
        let (mut state, old) = started(None);
        let new = state.switch_to("other.jpg".into(), None);

        assert_eq!(state.succeed(old.ticket), Effect::Stale(old.ticket));
        assert!(state.status().is_loading());
        assert_eq!(state.succeed(new.ticket), Effect::Ready);
    }

    #[test]
    fn failure_without_fallback_is_terminal() {
        let (mut state, request) = started(None);
        let effect = state.fail(request.ticket, MediaLoadError::Http(404));
        assert_eq!(effect, Effect::Failed(MediaLoadError::Http(404)));
        assert!(state.status().is_error());
        assert_eq!(state.error(), Some(&MediaLoadError::Http(404)));

        // A late success for the failed URL does not revive it.
        assert_eq!(state.succeed(request.ticket), Effect::Unchanged);
        assert!(state.status().is_error());
    }

    #[test]
    fn failure_substitutes_fallback_exactly_once() {
        let (mut state, request) = started(Some("fallback.jpg"));

        let retry = match state.fail(request.ticket, MediaLoadError::Http(500)) {
            Effect::Retry(retry) => retry,
            other => panic!("expected retry, got {other:?}"),
        };
        assert_eq!(retry.url, "fallback.jpg");
        assert_ne!(retry.ticket, request.ticket);
        assert!(state.status().is_loading());
        assert_eq!(state.url(), "fallback.jpg");

        let effect = state.fail(retry.ticket, MediaLoadError::Decode("bad".into()));
        assert!(matches!(effect, Effect::Failed(MediaLoadError::Decode(_))));
        assert!(state.status().is_error());
    }

    #[test]
    fn switching_resets_error_and_fallback() {
        let (mut state, request) = started(Some("fallback.jpg"));
        state.fail(request.ticket, MediaLoadError::Http(500));
        let request = state.switch_to("primary.jpg".into(), Some("fallback.jpg".into()));

        assert!(state.error().is_none());
        assert!(matches!(
            state.fail(request.ticket, MediaLoadError::Http(500)),
            Effect::Retry(_)
        ));
    }

    #[test]
    fn blank_fallback_is_ignored() {
        let (mut state, request) = started(Some("  "));
        assert!(matches!(
            state.fail(request.ticket, MediaLoadError::Http(404)),
            Effect::Failed(_)
        ));
    }
}
