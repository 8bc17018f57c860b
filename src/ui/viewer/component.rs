// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating the state of one opened project.
//!
//! The component owns three sub-components ([`magnifier`], [`lifecycle`] and
//! [`playback`]) and enforces the rules that cross them: zoom is only
//! available on a loaded image, clicks on a video toggle playback, and
//! switching the displayed variant resets zoom and reloads.
//!
//! The component never performs I/O. Loads are requested through
//! [`Effect::LoadMedia`] and answered with ticketed callbacks.

use crate::domain::catalog::{Project, ProjectId};
use crate::domain::viewer::{
    FocusPoint, LoadState, LoadTicket, MediaMode, Playback, Pointer, ProgressFraction, Rect,
    ViewerSession,
};
use crate::error::MediaLoadError;
use crate::ui::viewer::lifecycle::{self, LoadRequest, MediaKind};
use crate::ui::viewer::{magnifier, playback};

/// Messages handled by an opened viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Switch between the primary and the "before" image.
    ToggleVariant,
    /// Click on the media surface.
    MediaPressed { pointer: Pointer, bounds: Rect },
    PointerMoved { pointer: Pointer, bounds: Rect },
    MediaLoaded(LoadTicket),
    MediaFailed {
        ticket: LoadTicket,
        error: MediaLoadError,
    },
    /// The video source answered its probe. Containers are not parsed, so
    /// the duration comes from the catalog.
    MetadataLoaded(LoadTicket),
    TimeUpdate {
        ticket: LoadTicket,
        current_secs: f64,
        duration_secs: f64,
    },
    TogglePlayback,
    ToggleMute,
    Seek(f64),
    SeekPreview(f64),
    SeekCommit,
}

/// Effects the host must act upon.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Fetch the media described by the request and answer with its ticket.
    LoadMedia(LoadRequest),
    /// Zoom toggled or focus moved.
    ZoomChanged,
    MediaReady,
    MediaFailed(MediaLoadError),
    /// A callback arrived for media that is no longer displayed.
    StaleCallback(LoadTicket),
    PlaybackChanged {
        is_playing: bool,
    },
    MuteChanged {
        is_muted: bool,
    },
    SeekTo {
        position_secs: f64,
    },
    ProgressChanged(ProgressFraction),
}

/// State of the opened project's viewer.
#[derive(Debug, Clone)]
pub struct State {
    project_id: ProjectId,
    mode: MediaMode,
    showing_alternate: bool,
    /// Substitute for the primary image.
    fallback: Option<String>,
    /// Duration from the catalog; `0` when absent.
    nominal_duration_secs: f64,

    magnifier: magnifier::State,
    /// Last pointer position over the media surface, relative to it.
    last_pointer: Option<Pointer>,
    lifecycle: lifecycle::State,
    /// Present in video mode only.
    playback: Option<playback::State>,
}

impl State {
    /// Builds a fresh viewer for `project` and the request loading its
    /// initial media.
    #[must_use]
    pub fn open(project: &Project, session: ViewerSession) -> (Self, LoadRequest) {
        let mode = MediaMode::for_project(project);
        let fallback = project
            .fallback_media_url
            .clone()
            .filter(|url| !url.trim().is_empty());

        let kind = if mode.is_video() {
            MediaKind::Video
        } else {
            MediaKind::Image
        };
        let initial_fallback = if mode.is_video() {
            None
        } else {
            fallback.clone()
        };
        let (lifecycle, request) =
            lifecycle::State::start(session, mode.url(false).to_string(), kind, initial_fallback);

        let playback = mode.is_video().then(playback::State::default);

        let state = Self {
            project_id: project.id,
            mode,
            showing_alternate: false,
            fallback,
            nominal_duration_secs: project.video_duration_secs.unwrap_or(0.0),
            magnifier: magnifier::State::default(),
            last_pointer: None,
            lifecycle,
            playback,
        };
        (state, request)
    }

    /// Handle a viewer message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::ToggleVariant => self.toggle_variant(),
            Message::MediaPressed { pointer, bounds } => self.click(pointer, bounds),
            Message::PointerMoved { pointer, bounds } => self.pointer_move(pointer, bounds),
            Message::MediaLoaded(ticket) => self.on_load(ticket),
            Message::MediaFailed { ticket, error } => self.on_error(ticket, error),
            Message::MetadataLoaded(ticket) => self.on_metadata(ticket),
            Message::TimeUpdate {
                ticket,
                current_secs,
                duration_secs,
            } => self.on_time_update(ticket, current_secs, duration_secs),
            Message::TogglePlayback => self.toggle_play(),
            Message::ToggleMute => self.toggle_mute(),
            Message::Seek(fraction) => self.seek(fraction),
            Message::SeekPreview(fraction) => {
                self.with_playback(playback::Message::SeekPreview(fraction))
            }
            Message::SeekCommit => self.with_playback(playback::Message::SeekCommit),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // OPERATIONS
    // ═══════════════════════════════════════════════════════════════════════

    /// Flips between primary and alternate images.
    ///
    /// Only meaningful in before/after mode; resets the load status and the
    /// zoom, then requests the other image under a new ticket.
    pub fn toggle_variant(&mut self) -> Effect {
        if !self.mode.has_variants() {
            return Effect::None;
        }
        self.showing_alternate = !self.showing_alternate;
        self.magnifier.handle(magnifier::Message::Reset);

        let fallback = if self.showing_alternate {
            None
        } else {
            self.fallback.clone()
        };
        let url = self.mode.url(self.showing_alternate).to_string();
        Effect::LoadMedia(self.lifecycle.switch_to(url, fallback))
    }

    /// Click on the media surface.
    ///
    /// Toggles playback in video mode, toggles zoom on a loaded image, and
    /// does nothing while loading or after an error.
    pub fn click(&mut self, pointer: Pointer, bounds: Rect) -> Effect {
        if self.mode.is_video() {
            return self.toggle_play();
        }
        if !self.zoom_enabled() {
            return Effect::None;
        }
        map_magnifier(
            self.magnifier
                .handle(magnifier::Message::Click { pointer, bounds }),
        )
    }

    /// Pointer moved over the media surface.
    pub fn pointer_move(&mut self, pointer: Pointer, bounds: Rect) -> Effect {
        self.last_pointer = Some(pointer);
        if !self.zoom_enabled() {
            return Effect::None;
        }
        map_magnifier(
            self.magnifier
                .handle(magnifier::Message::PointerMoved { pointer, bounds }),
        )
    }

    /// The media identified by `ticket` finished loading.
    pub fn on_load(&mut self, ticket: LoadTicket) -> Effect {
        if self.mode.is_video() {
            return self.on_metadata(ticket);
        }
        map_lifecycle(self.lifecycle.succeed(ticket))
    }

    /// The media identified by `ticket` failed to load.
    pub fn on_error(&mut self, ticket: LoadTicket, error: MediaLoadError) -> Effect {
        let effect = map_lifecycle(self.lifecycle.fail(ticket, error));
        if matches!(effect, Effect::MediaFailed(_)) {
            if let Some(playback) = self.playback.as_mut() {
                playback.pause();
            }
        }
        effect
    }

    fn on_metadata(&mut self, ticket: LoadTicket) -> Effect {
        let effect = map_lifecycle(self.lifecycle.succeed(ticket));
        if effect == Effect::MediaReady {
            let duration_secs = self.nominal_duration_secs;
            if let Some(playback) = self.playback.as_mut() {
                playback.handle(playback::Message::MetadataLoaded { duration_secs });
            }
        }
        effect
    }

    /// The player reported its position.
    pub fn on_time_update(
        &mut self,
        ticket: LoadTicket,
        current_secs: f64,
        duration_secs: f64,
    ) -> Effect {
        if !self.lifecycle.is_current(ticket) {
            return Effect::StaleCallback(ticket);
        }
        self.with_playback(playback::Message::TimeUpdate {
            current_secs,
            duration_secs,
        })
    }

    pub fn toggle_play(&mut self) -> Effect {
        if !self.lifecycle.status().is_loaded() {
            return Effect::None;
        }
        self.with_playback(playback::Message::TogglePlay)
    }

    pub fn toggle_mute(&mut self) -> Effect {
        self.with_playback(playback::Message::ToggleMute)
    }

    /// Jumps to `fraction` of the video, clamped to `[0, 1]`.
    pub fn seek(&mut self, fraction: f64) -> Effect {
        self.with_playback(playback::Message::Seek(fraction))
    }

    fn with_playback(&mut self, message: playback::Message) -> Effect {
        match self.playback.as_mut() {
            Some(playback) => map_playback(playback.handle(message)),
            None => Effect::None,
        }
    }

    fn zoom_enabled(&self) -> bool {
        self.mode.supports_zoom() && self.lifecycle.status().is_loaded()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Where a press on the media surface lands: the last tracked pointer,
    /// or the center of `bounds` before the pointer has moved.
    #[must_use]
    pub fn press_position(&self, bounds: Rect) -> Pointer {
        self.last_pointer.unwrap_or(Pointer::new(
            bounds.left + bounds.width / 2.0,
            bounds.top + bounds.height / 2.0,
        ))
    }

    #[must_use]
    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    #[must_use]
    pub fn mode(&self) -> &MediaMode {
        &self.mode
    }

    #[must_use]
    pub fn showing_alternate(&self) -> bool {
        self.showing_alternate
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.magnifier.is_zoomed()
    }

    #[must_use]
    pub fn zoom_focus(&self) -> FocusPoint {
        self.magnifier.focus()
    }

    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.lifecycle.status()
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&MediaLoadError> {
        self.lifecycle.error()
    }

    /// URL of the media currently displayed.
    #[must_use]
    pub fn current_url(&self) -> &str {
        self.lifecycle.url()
    }

    #[must_use]
    pub fn current_ticket(&self) -> LoadTicket {
        self.lifecycle.ticket()
    }

    #[must_use]
    pub fn playback(&self) -> Option<Playback> {
        self.playback.as_ref().map(playback::State::playback)
    }

    /// Scrubber progress, including an in-flight drag.
    #[must_use]
    pub fn displayed_progress(&self) -> Option<ProgressFraction> {
        self.playback
            .as_ref()
            .map(playback::State::displayed_progress)
    }

    #[must_use]
    pub fn duration_secs(&self) -> Option<f64> {
        self.playback.as_ref().map(playback::State::duration_secs)
    }
}

fn map_magnifier(effect: magnifier::Effect) -> Effect {
    match effect {
        magnifier::Effect::None => Effect::None,
        magnifier::Effect::ZoomChanged => Effect::ZoomChanged,
    }
}

fn map_lifecycle(effect: lifecycle::Effect) -> Effect {
    match effect {
        lifecycle::Effect::Stale(ticket) => Effect::StaleCallback(ticket),
        lifecycle::Effect::Ready => Effect::MediaReady,
        lifecycle::Effect::Retry(request) => Effect::LoadMedia(request),
        lifecycle::Effect::Failed(error) => Effect::MediaFailed(error),
        lifecycle::Effect::Unchanged => Effect::None,
    }
}

fn map_playback(effect: playback::Effect) -> Effect {
    match effect {
        playback::Effect::None => Effect::None,
        playback::Effect::PlaybackChanged { is_playing } => Effect::PlaybackChanged { is_playing },
        playback::Effect::MuteChanged { is_muted } => Effect::MuteChanged { is_muted },
        playback::Effect::SeekTo { position_secs } => Effect::SeekTo { position_secs },
        playback::Effect::ProgressChanged(progress) => Effect::ProgressChanged(progress),
    }
}
