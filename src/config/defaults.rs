// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Thumbnail cache budget
//! - **Viewer**: Magnifier factor
//! - **Network**: Remote media request limits

use crate::domain::viewer::geometry::magnification_bounds;
use crate::media::cache;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default decoded-image cache budget in megabytes.
pub const DEFAULT_THUMBNAIL_CACHE_MB: u32 = cache::DEFAULT_CACHE_MB;

/// Minimum cache budget in megabytes.
pub const MIN_THUMBNAIL_CACHE_MB: u32 = cache::MIN_CACHE_MB;

/// Maximum cache budget in megabytes.
pub const MAX_THUMBNAIL_CACHE_MB: u32 = cache::MAX_CACHE_MB;

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Default magnifier factor.
pub const DEFAULT_MAGNIFICATION: f32 = magnification_bounds::DEFAULT;

/// Minimum magnifier factor.
pub const MIN_MAGNIFICATION: f32 = magnification_bounds::MIN;

/// Maximum magnifier factor.
pub const MAX_MAGNIFICATION: f32 = magnification_bounds::MAX;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Default timeout of one remote media request (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 2;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Default download limit per media file (in megabytes).
pub const DEFAULT_MAX_DOWNLOAD_MB: u32 = 64;

/// Minimum download limit (in megabytes).
pub const MIN_MAX_DOWNLOAD_MB: u32 = 1;

/// Maximum download limit (in megabytes).
pub const MAX_MAX_DOWNLOAD_MB: u32 = 512;
