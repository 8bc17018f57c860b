// SPDX-License-Identifier: MPL-2.0
//! Portfolio project records.

use super::Category;
use std::fmt;

/// Unique identifier of a catalog project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An immutable entry of the static portfolio catalog.
///
/// Which optional media fields are populated decides how the project opens:
/// see [`MediaMode`](crate::domain::viewer::MediaMode).
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: Category,
    /// Short description shown under the grid tile.
    pub description: String,
    /// Long description for the detail view.
    pub full_description: Option<String>,
    /// Default image, shown in the grid and as the "after" view.
    pub primary_media_url: String,
    /// "Before" variant; enables the before/after toggle.
    pub alternate_media_url: Option<String>,
    /// Video source; takes precedence over every image mode.
    pub video_url: Option<String>,
    /// Substituted once when the primary image fails to load.
    pub fallback_media_url: Option<String>,
    /// Nominal video length in seconds, used by the playback clock.
    pub video_duration_secs: Option<f64>,
    pub year: String,
    pub client: Option<String>,
    pub tags: Vec<String>,
}

impl Project {
    /// Creates a single-image project with empty metadata.
    #[must_use]
    pub fn new(
        id: u32,
        title: impl Into<String>,
        category: Category,
        primary_media_url: impl Into<String>,
    ) -> Self {
        Self {
            id: ProjectId(id),
            title: title.into(),
            category,
            description: String::new(),
            full_description: None,
            primary_media_url: primary_media_url.into(),
            alternate_media_url: None,
            video_url: None,
            fallback_media_url: None,
            video_duration_secs: None,
            year: String::new(),
            client: None,
            tags: Vec::new(),
        }
    }

    /// Sets the "before" variant.
    #[must_use]
    pub fn with_alternate(mut self, url: impl Into<String>) -> Self {
        self.alternate_media_url = Some(url.into());
        self
    }

    /// Sets the video source.
    #[must_use]
    pub fn with_video(mut self, url: impl Into<String>, duration_secs: Option<f64>) -> Self {
        self.video_url = Some(url.into());
        self.video_duration_secs = duration_secs;
        self
    }

    /// Sets the fallback image.
    #[must_use]
    pub fn with_fallback(mut self, url: impl Into<String>) -> Self {
        self.fallback_media_url = Some(url.into());
        self
    }

    /// Text for the "about the project" section, falling back to the short
    /// description.
    #[must_use]
    pub fn long_text(&self) -> &str {
        self.full_description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_text_prefers_full_description() {
        let mut project = Project::new(1, "Brew", Category::CafeBeverage, "brew.jpg");
        project.description = "short".into();
        assert_eq!(project.long_text(), "short");

        project.full_description = Some("long".into());
        assert_eq!(project.long_text(), "long");

        project.full_description = Some("   ".into());
        assert_eq!(project.long_text(), "short");
    }

    #[test]
    fn builders_populate_optional_media() {
        let project = Project::new(2, "Plate", Category::Food, "after.jpg")
            .with_alternate("before.jpg")
            .with_fallback("fallback.jpg")
            .with_video("clip.mp4", Some(12.0));

        assert_eq!(project.alternate_media_url.as_deref(), Some("before.jpg"));
        assert_eq!(project.fallback_media_url.as_deref(), Some("fallback.jpg"));
        assert_eq!(project.video_url.as_deref(), Some("clip.mp4"));
        assert_eq!(project.video_duration_secs, Some(12.0));
    }

    #[test]
    fn project_id_displays_with_hash() {
        assert_eq!(ProjectId(7).to_string(), "#7");
    }
}
