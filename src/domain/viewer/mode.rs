// SPDX-License-Identifier: MPL-2.0
//! Display mode of an opened project.

use crate::domain::catalog::Project;

/// How an opened project is presented, decided once when it opens.
///
/// Video takes precedence over before/after, which takes precedence over a
/// single image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaMode {
    /// Video playback with a scrubber; zoom is unavailable.
    Video { url: String },
    /// Toggleable comparison between the edited and the original image.
    BeforeAfter { primary: String, alternate: String },
    /// A single image.
    Single { primary: String },
}

impl MediaMode {
    /// Selects the mode from the project's populated media fields.
    #[must_use]
    pub fn for_project(project: &Project) -> Self {
        if let Some(url) = non_empty(project.video_url.as_deref()) {
            return MediaMode::Video {
                url: url.to_string(),
            };
        }
        if let Some(alternate) = non_empty(project.alternate_media_url.as_deref()) {
            return MediaMode::BeforeAfter {
                primary: project.primary_media_url.clone(),
                alternate: alternate.to_string(),
            };
        }
        MediaMode::Single {
            primary: project.primary_media_url.clone(),
        }
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        matches!(self, MediaMode::Video { .. })
    }

    /// Returns `true` for the modes that support click-to-zoom.
    #[must_use]
    pub fn supports_zoom(&self) -> bool {
        !self.is_video()
    }

    /// Returns `true` if the before/after toggle is reachable.
    #[must_use]
    pub fn has_variants(&self) -> bool {
        matches!(self, MediaMode::BeforeAfter { .. })
    }

    /// The URL shown for the given variant selection.
    ///
    /// `showing_alternate` is ignored outside before/after mode.
    #[must_use]
    pub fn url(&self, showing_alternate: bool) -> &str {
        match self {
            MediaMode::Video { url } => url,
            MediaMode::BeforeAfter { alternate, .. } if showing_alternate => alternate,
            MediaMode::BeforeAfter { primary, .. } | MediaMode::Single { primary } => primary,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
