// SPDX-License-Identifier: MPL-2.0
//! Resolution of catalog media URLs into fetchable sources.

use crate::error::MediaLoadError;
use std::path::{Path, PathBuf};

/// Where a media URL points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// An `http://` or `https://` URL.
    Remote(String),
    /// A file on disk, from a `file://` URL or a plain path.
    Local(PathBuf),
}

impl MediaSource {
    /// Resolves `url`.
    ///
    /// Relative paths are resolved against `base_dir` (the directory of the
    /// catalog file) when one is given. Schemes other than `http`, `https`
    /// and `file` are rejected.
    pub fn resolve(url: &str, base_dir: Option<&Path>) -> Result<Self, MediaLoadError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(MediaLoadError::UnsupportedSource(String::new()));
        }

        let lower = url.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Self::Remote(url.to_string()));
        }
        if lower.starts_with("file://") {
            return Ok(Self::Local(PathBuf::from(&url["file://".len()..])));
        }
        if has_scheme(url) {
            return Err(MediaLoadError::UnsupportedSource(url.to_string()));
        }

        let path = Path::new(url);
        match base_dir {
            Some(base) if path.is_relative() => Ok(Self::Local(base.join(path))),
            _ => Ok(Self::Local(path.to_path_buf())),
        }
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

/// `scheme:` prefix per RFC 3986, excluding single-letter drive prefixes.
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once(':') else {
        return false;
    };
    scheme.len() > 1
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
