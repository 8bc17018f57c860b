// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Category shown at startup and image cache budget
//! - `[viewer]` - Magnifier factor
//! - `[network]` - Remote media timeout and download limit
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `FOLIO_LENS_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! Out-of-range values are kept as written and clamped by the accessors on
//! [`Config`].
//!
//! # Examples
//!
//! ```no_run
//! use folio_lens::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::catalog::CategoryFilter;
use crate::domain::viewer::Magnification;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Category selected at startup (`all` or a category slug).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,

    /// Decoded image cache budget in megabytes.
    #[serde(
        default = "default_thumbnail_cache_mb",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_cache_mb: Option<u32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            default_category: None,
            thumbnail_cache_mb: default_thumbnail_cache_mb(),
        }
    }
}

/// Project viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Magnifier factor applied on click-to-zoom.
    #[serde(
        default = "default_magnification",
        skip_serializing_if = "Option::is_none"
    )]
    pub magnification: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            magnification: default_magnification(),
        }
    }
}

/// Remote media settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfig {
    /// Timeout of one request in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,

    /// Largest media file accepted, in megabytes.
    #[serde(
        default = "default_max_download_mb",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_download_mb: Option<u32>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            max_download_mb: default_max_download_mb(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub network: NetworkConfig,
}

impl Config {
    /// Category filter selected at startup. Unknown slugs fall back to `All`.
    #[must_use]
    pub fn default_filter(&self) -> CategoryFilter {
        match self.gallery.default_category.as_deref() {
            None => CategoryFilter::All,
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                log::warn!("Ignoring configured default category: {err}");
                CategoryFilter::All
            }),
        }
    }

    /// Cache budget, clamped to the supported range.
    #[must_use]
    pub fn thumbnail_cache_mb(&self) -> u32 {
        self.gallery
            .thumbnail_cache_mb
            .unwrap_or(DEFAULT_THUMBNAIL_CACHE_MB)
            .clamp(MIN_THUMBNAIL_CACHE_MB, MAX_THUMBNAIL_CACHE_MB)
    }

    #[must_use]
    pub fn magnification(&self) -> Magnification {
        Magnification::new(self.viewer.magnification.unwrap_or(DEFAULT_MAGNIFICATION))
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .network
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    #[must_use]
    pub fn max_download_bytes(&self) -> u64 {
        let mb = self
            .network
            .max_download_mb
            .unwrap_or(DEFAULT_MAX_DOWNLOAD_MB)
            .clamp(MIN_MAX_DOWNLOAD_MB, MAX_MAX_DOWNLOAD_MB);
        u64::from(mb) * 1024 * 1024
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_thumbnail_cache_mb() -> Option<u32> {
    Some(DEFAULT_THUMBNAIL_CACHE_MB)
}

fn default_magnification() -> Option<f32> {
    Some(DEFAULT_MAGNIFICATION)
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_max_download_mb() -> Option<u32> {
    Some(DEFAULT_MAX_DOWNLOAD_MB)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Failed to load {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
