// SPDX-License-Identifier: MPL-2.0
//! Video playback sub-component: play/pause, mute and scrubbing.
//!
//! Playback is only driven once the video source has been confirmed
//! reachable (`MetadataLoaded`); before that, play requests are ignored.

use crate::domain::viewer::{Playback, ProgressFraction};

/// Video playback state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    playback: Playback,
    /// Known media duration in seconds; `0` until metadata arrives.
    duration_secs: f64,
    ready: bool,

    // ═══════════════════════════════════════════════════════════════════════
    // SEEK STATE
    // ═══════════════════════════════════════════════════════════════════════
    /// Slider position while the user drags, committed on release.
    seek_preview: Option<ProgressFraction>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            playback: Playback::default(),
            duration_secs: 0.0,
            ready: false,
            seek_preview: None,
        }
    }
}

/// Messages for the playback sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    TogglePlay,
    ToggleMute,
    /// Jump to a fraction of the duration.
    Seek(f64),
    /// Slider dragged; the jump happens on [`Message::SeekCommit`].
    SeekPreview(f64),
    SeekCommit,
    /// The player reported its position.
    TimeUpdate { current_secs: f64, duration_secs: f64 },
    /// The video source is reachable and its duration is known.
    MetadataLoaded { duration_secs: f64 },
}

/// Effects produced by playback changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Play/pause flipped.
    PlaybackChanged { is_playing: bool },
    MuteChanged { is_muted: bool },
    /// The player must jump to `position_secs`.
    SeekTo { position_secs: f64 },
    ProgressChanged(ProgressFraction),
}

impl State {
    /// Handle a playback message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::TogglePlay => {
                if !self.ready {
                    return Effect::None;
                }
                self.playback.is_playing = !self.playback.is_playing;
                Effect::PlaybackChanged {
                    is_playing: self.playback.is_playing,
                }
            }
            Message::ToggleMute => {
                self.playback.is_muted = !self.playback.is_muted;
                Effect::MuteChanged {
                    is_muted: self.playback.is_muted,
                }
            }
            Message::Seek(fraction) => self.seek_to(ProgressFraction::new(fraction)),
            Message::SeekPreview(fraction) => {
                self.seek_preview = Some(ProgressFraction::new(fraction));
                Effect::None
            }
            Message::SeekCommit => match self.seek_preview.take() {
                Some(fraction) => self.seek_to(fraction),
                None => Effect::None,
            },
            Message::TimeUpdate {
                current_secs,
                duration_secs,
            } => {
                if duration_secs.is_finite() && duration_secs > 0.0 {
                    self.duration_secs = duration_secs;
                }
                let progress = ProgressFraction::from_position(current_secs, duration_secs);
                if progress == self.playback.progress {
                    return Effect::None;
                }
                self.playback.progress = progress;
                Effect::ProgressChanged(progress)
            }
            Message::MetadataLoaded { duration_secs } => {
                self.ready = true;
                if duration_secs.is_finite() && duration_secs > 0.0 {
                    self.duration_secs = duration_secs;
                }
                Effect::None
            }
        }
    }

    fn seek_to(&mut self, fraction: ProgressFraction) -> Effect {
        self.seek_preview = None;
        self.playback.progress = fraction;
        Effect::SeekTo {
            position_secs: fraction.position_in(self.duration_secs),
        }
    }

    /// Pauses without emitting an effect, e.g. when the viewer closes.
    pub fn pause(&mut self) {
        self.playback.is_playing = false;
    }

    #[must_use]
    pub fn playback(&self) -> Playback {
        self.playback
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playback.is_playing
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.playback.is_muted
    }

    /// Progress shown by the scrubber, preferring an in-flight drag.
    #[must_use]
    pub fn displayed_progress(&self) -> ProgressFraction {
        self.seek_preview.unwrap_or(self.playback.progress)
    }

    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }
}
