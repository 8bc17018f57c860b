// SPDX-License-Identifier: MPL-2.0
//! Loading of the portfolio catalog from TOML.
//!
//! A catalog file is a list of `[[project]]` tables:
//!
//! ```toml
//! [[project]]
//! id = 1
//! title = "Artisan Chemex Brew"
//! category = "cafe-beverage"
//! primary_media = "https://example.com/chemex.jpg"
//! alternate_media = "https://example.com/chemex-raw.jpg"   # optional
//! video = "https://example.com/chemex.mp4"                # optional
//! video_duration_secs = 12.5                              # optional
//! fallback_media = "https://example.com/chemex-small.jpg" # optional
//! year = "2024"
//! ```
//!
//! Relative media paths are resolved against the directory of the catalog
//! file, so the loader returns that directory alongside the catalog.

use crate::domain::catalog::{Catalog, Category, Project};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

/// File name of the built-in catalog inside `assets/catalog/`.
const EMBEDDED_CATALOG: &str = "catalog.toml";

/// Notification key shown when a user catalog could not be used.
pub const CATALOG_LOAD_WARNING: &str = "notification-catalog-load-error";

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "project")]
    projects: Vec<ProjectEntry>,
}

#[derive(Debug, Deserialize)]
struct ProjectEntry {
    id: u32,
    title: String,
    category: String,
    primary_media: String,
    #[serde(default)]
    alternate_media: Option<String>,
    #[serde(default)]
    video: Option<String>,
    #[serde(default)]
    video_duration_secs: Option<f64>,
    #[serde(default)]
    fallback_media: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    full_description: Option<String>,
    #[serde(default)]
    year: String,
    #[serde(default)]
    client: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// A parsed catalog and the directory its relative media paths refer to.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    /// `None` for the embedded catalog, whose media are all absolute URLs.
    pub base_dir: Option<PathBuf>,
}

/// Parses catalog TOML text.
///
/// # Errors
///
/// Returns [`Error::Catalog`] when the text is not valid TOML, or when a
/// project has a duplicate id, an unknown category, an empty title, an empty
/// primary media field or an invalid video duration.
pub fn parse(text: &str) -> Result<Catalog> {
    let file: CatalogFile =
        toml::from_str(text).map_err(|err| Error::Catalog(err.to_string()))?;

    let mut seen = HashSet::new();
    let mut projects = Vec::with_capacity(file.projects.len());
    for entry in file.projects {
        if !seen.insert(entry.id) {
            return Err(Error::Catalog(format!("duplicate project id {}", entry.id)));
        }
        projects.push(entry.into_project()?);
    }
    Ok(Catalog::new(projects))
}

/// Reads and parses a catalog file from disk.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and
/// [`Error::Catalog`] when it cannot be parsed.
pub fn load_from_path(path: &Path) -> Result<LoadedCatalog> {
    let text = fs::read_to_string(path)?;
    let catalog = parse(&text)?;
    log::info!(
        "loaded {} project(s) from {}",
        catalog.len(),
        path.display()
    );
    Ok(LoadedCatalog {
        catalog,
        base_dir: path.parent().map(Path::to_path_buf),
    })
}

/// Returns the catalog bundled with the application.
///
/// # Errors
///
/// Returns [`Error::Catalog`] if the embedded asset is missing or invalid,
/// which only happens with a broken build.
pub fn embedded() -> Result<LoadedCatalog> {
    let asset = Asset::get(EMBEDDED_CATALOG)
        .ok_or_else(|| Error::Catalog(format!("missing embedded {EMBEDDED_CATALOG}")))?;
    let text = String::from_utf8_lossy(asset.data.as_ref());
    Ok(LoadedCatalog {
        catalog: parse(&text)?,
        base_dir: None,
    })
}

/// Loads the catalog for startup.
///
/// Uses `path` when given and falls back to the embedded catalog when that
/// file cannot be used. The second element is a notification key to show
/// when the fallback happened.
pub fn load_or_embedded(path: Option<&Path>) -> (LoadedCatalog, Option<&'static str>) {
    let mut warning = None;
    if let Some(path) = path {
        match load_from_path(path) {
            Ok(loaded) => return (loaded, None),
            Err(err) => {
                log::warn!("cannot use catalog {}: {err}", path.display());
                warning = Some(CATALOG_LOAD_WARNING);
            }
        }
    }

    match embedded() {
        Ok(loaded) => (loaded, warning),
        Err(err) => {
            log::error!("embedded catalog unusable: {err}");
            (
                LoadedCatalog {
                    catalog: Catalog::default(),
                    base_dir: None,
                },
                Some(CATALOG_LOAD_WARNING),
            )
        }
    }
}

impl ProjectEntry {
    fn into_project(self) -> Result<Project> {
        let invalid = |what: &str| Error::Catalog(format!("project {}: {what}", self.id));

        let category: Category = self
            .category
            .parse()
            .map_err(|err| invalid(&format!("{err}")))?;
        if self.title.trim().is_empty() {
            return Err(invalid("empty title"));
        }
        if self.primary_media.trim().is_empty() {
            return Err(invalid("empty primary_media"));
        }
        if let Some(duration) = self.video_duration_secs {
            if !duration.is_finite() || duration < 0.0 {
                return Err(invalid("video_duration_secs must be a non-negative number"));
            }
        }

        let mut project = Project::new(self.id, self.title, category, self.primary_media);
        if let Some(url) = non_blank(self.alternate_media) {
            project = project.with_alternate(url);
        }
        if let Some(url) = non_blank(self.video) {
            project = project.with_video(url, self.video_duration_secs);
        }
        if let Some(url) = non_blank(self.fallback_media) {
            project = project.with_fallback(url);
        }
        project.description = self.description;
        project.full_description = self.full_description;
        project.year = self.year;
        project.client = non_blank(self.client);
        project.tags = self.tags;
        Ok(project)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{CategoryFilter, ProjectId};
    use std::io::Write;
    use tempfile::tempdir;

    const TWO_PROJECTS: &str = r#"
        [[project]]
        id = 1
        title = "Cake"
        category = "cafe-beverage"
        primary_media = "cake.jpg"
        alternate_media = "cake-raw.jpg"

        [[project]]
        id = 2
        title = "Reel"
        category = "food"
        primary_media = "poster.jpg"
        video = "reel.mp4"
        video_duration_secs = 30.0
        client = ""
    "#;

    #[test]
    fn parses_projects_in_file_order() {
        let catalog = parse(TWO_PROJECTS).unwrap();
        let ids: Vec<u32> = catalog.projects().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2]);

        let cake = catalog.find(ProjectId(1)).unwrap();
        assert_eq!(cake.category, Category::CafeBeverage);
        assert_eq!(cake.alternate_media_url.as_deref(), Some("cake-raw.jpg"));

        let reel = catalog.find(ProjectId(2)).unwrap();
        assert_eq!(reel.video_url.as_deref(), Some("reel.mp4"));
        assert_eq!(reel.video_duration_secs, Some(30.0));
        assert_eq!(reel.client, None);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let text = r#"
            [[project]]
            id = 1
            title = "A"
            category = "food"
            primary_media = "a.jpg"

            [[project]]
            id = 1
            title = "B"
            category = "food"
            primary_media = "b.jpg"
        "#;
        let err = parse(text).unwrap_err();
        assert!(matches!(err, Error::Catalog(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn rejects_unknown_category() {
        let text = r#"
            [[project]]
            id = 1
            title = "A"
            category = "wedding"
            primary_media = "a.jpg"
        "#;
        assert!(matches!(parse(text), Err(Error::Catalog(_))));
    }

    #[test]
    fn rejects_blank_primary_media() {
        let text = r#"
            [[project]]
            id = 1
            title = "A"
            category = "food"
            primary_media = "  "
        "#;
        assert!(matches!(parse(text), Err(Error::Catalog(msg)) if msg.contains("primary_media")));
    }

    #[test]
    fn rejects_negative_video_duration() {
        let text = r#"
            [[project]]
            id = 1
            title = "A"
            category = "food"
            primary_media = "a.jpg"
            video = "a.mp4"
            video_duration_secs = -1.0
        "#;
        assert!(parse(text).is_err());
    }

    #[test]
    fn empty_file_is_an_empty_catalog() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn load_from_path_reports_base_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(TWO_PROJECTS.as_bytes()).unwrap();

        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded.catalog.len(), 2);
        assert_eq!(loaded.base_dir.as_deref(), Some(dir.path()));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = load_from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn embedded_catalog_is_valid() {
        let loaded = embedded().unwrap();
        assert!(!loaded.catalog.is_empty());
        assert!(loaded.base_dir.is_none());
        assert!(loaded
            .catalog
            .filtered(CategoryFilter::Only(Category::CafeBeverage))
            .next()
            .is_some());
    }

    #[test]
    fn unusable_user_catalog_falls_back_with_warning() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[[project]]\nid = \"not a number\"").unwrap();

        let (loaded, warning) = load_or_embedded(Some(&path));
        assert_eq!(warning, Some(CATALOG_LOAD_WARNING));
        assert_eq!(loaded.catalog.len(), embedded().unwrap().catalog.len());
    }

    #[test]
    fn no_path_uses_embedded_without_warning() {
        let (loaded, warning) = load_or_embedded(None);
        assert!(warning.is_none());
        assert!(!loaded.catalog.is_empty());
    }
}
