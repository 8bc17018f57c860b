// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::viewer::LoadTicket;
use crate::error::MediaLoadError;
use crate::media::{ImageData, VideoProbe};
use crate::ui::gallery::selection;
use crate::ui::notifications;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages or carry the results of load tasks.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(selection::Message),
    Notification(notifications::NotificationMessage),
    /// A grid thumbnail finished loading.
    ThumbnailLoaded {
        url: String,
        result: Result<ImageData, MediaLoadError>,
    },
    /// The viewer image requested under `ticket` finished loading.
    ImageLoaded {
        ticket: LoadTicket,
        result: Result<ImageData, MediaLoadError>,
    },
    /// The video source requested under `ticket` was probed.
    VideoProbed {
        ticket: LoadTicket,
        result: Result<VideoProbe, MediaLoadError>,
    },
    /// Advance the playback clock of the opened video.
    PlaybackTick,
    Shortcut(Shortcut),
}

/// Keyboard shortcuts of the gallery and the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// `Escape`
    CloseProject,
    /// `Space`
    TogglePlayback,
    /// `B`
    ToggleVariant,
    /// `M`
    ToggleMute,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Catalog file to show instead of the built-in one.
    pub catalog: Option<PathBuf>,
    /// Category selected at startup (slug or `all`).
    pub category: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FOLIO_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
