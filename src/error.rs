// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(String),
    Media(MediaLoadError),
}

/// Reasons a media URL failed to load.
/// Used to pick a user-facing, localized message for the error affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaLoadError {
    /// The request could not reach the server (DNS, TLS, timeout...)
    Network(String),

    /// The server answered with a non-success status code
    Http(u16),

    /// Local file could not be read
    Io(String),

    /// The payload is not a decodable image
    Decode(String),

    /// The URL scheme is not supported (e.g. `ftp://`)
    UnsupportedSource(String),

    /// The payload exceeds the configured download limit
    TooLarge {
        /// Configured limit in bytes
        limit: u64,
    },
}

impl MediaLoadError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MediaLoadError::Network(_) => "error-media-network",
            MediaLoadError::Http(_) => "error-media-http",
            MediaLoadError::Io(_) => "error-media-io",
            MediaLoadError::Decode(_) => "error-media-decode",
            MediaLoadError::UnsupportedSource(_) => "error-media-unsupported",
            MediaLoadError::TooLarge { .. } => "error-media-too-large",
        }
    }
}

impl fmt::Display for MediaLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaLoadError::Network(msg) => write!(f, "Network error: {}", msg),
            MediaLoadError::Http(status) => write!(f, "HTTP status {}", status),
            MediaLoadError::Io(msg) => write!(f, "I/O error: {}", msg),
            MediaLoadError::Decode(msg) => write!(f, "Decoding failed: {}", msg),
            MediaLoadError::UnsupportedSource(url) => {
                write!(f, "Unsupported media source: {}", url)
            }
            MediaLoadError::TooLarge { limit } => {
                write!(f, "Media exceeds download limit of {} bytes", limit)
            }
        }
    }
}

impl std::error::Error for MediaLoadError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MediaLoadError> for Error {
    fn from(err: MediaLoadError) -> Self {
        Error::Media(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
