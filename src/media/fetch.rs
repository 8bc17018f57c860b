// SPDX-License-Identifier: MPL-2.0
//! Media fetching over HTTP(S) and from the local filesystem.
//!
//! Remote media is downloaded with `reqwest` and streamed so that the
//! download limit is enforced without buffering oversized payloads. Local
//! media is read with `tokio::fs`. Decoding runs on the blocking pool.

use crate::error::{Error, MediaLoadError};
use crate::media::image::ImageData;
use crate::media::source::MediaSource;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Maximum number of redirects followed for remote media.
const MAX_REDIRECTS: usize = 10;

const USER_AGENT: &str = concat!("FolioLens/", env!("CARGO_PKG_VERSION"));

/// Default download limit in bytes.
pub const DEFAULT_MAX_DOWNLOAD_BYTES: u64 = crate::config::DEFAULT_MAX_DOWNLOAD_MB as u64 * 1024 * 1024;

/// Settings shared by every fetch.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Overall timeout of one remote request.
    pub timeout: Duration,
    /// Payloads larger than this are rejected.
    pub max_bytes: u64,
    /// Directory relative media paths are resolved against.
    pub base_dir: Option<PathBuf>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(crate::config::DEFAULT_REQUEST_TIMEOUT_SECS),
            max_bytes: DEFAULT_MAX_DOWNLOAD_BYTES,
            base_dir: None,
        }
    }
}

/// Result of probing a video source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoProbe {
    /// Size announced by the server or read from disk, if known.
    pub size_bytes: Option<u64>,
}

/// Cloneable handle used by load tasks.
#[derive(Debug, Clone)]
pub struct MediaFetcher {
    client: reqwest::Client,
    config: Arc<FetchConfig>,
}

impl MediaFetcher {
    /// Builds a fetcher with its HTTP client.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(format!("HTTP client: {e}")))?;
        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    fn resolve(&self, url: &str) -> Result<MediaSource, MediaLoadError> {
        MediaSource::resolve(url, self.config.base_dir.as_deref())
    }

    /// Downloads or reads the raw bytes behind `url`.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, MediaLoadError> {
        match self.resolve(url)? {
            MediaSource::Remote(url) => self.download(&url).await,
            MediaSource::Local(path) => read_local(&path, self.config.max_bytes).await,
        }
    }

    /// Fetches and decodes the image behind `url`.
    pub async fn load_image(&self, url: &str) -> Result<ImageData, MediaLoadError> {
        let bytes = self.fetch_bytes(url).await?;
        tokio::task::spawn_blocking(move || ImageData::decode(&bytes))
            .await
            .map_err(|e| MediaLoadError::Decode(e.to_string()))?
    }

    /// Fetches `url` and downsizes it for the gallery grid.
    pub async fn load_thumbnail(
        &self,
        url: &str,
        max_edge: u32,
    ) -> Result<ImageData, MediaLoadError> {
        let bytes = self.fetch_bytes(url).await?;
        tokio::task::spawn_blocking(move || {
            ImageData::decode(&bytes).map(|image| image.thumbnail(max_edge))
        })
        .await
        .map_err(|e| MediaLoadError::Decode(e.to_string()))?
    }

    /// Checks that the video behind `url` is reachable without downloading it.
    pub async fn probe_video(&self, url: &str) -> Result<VideoProbe, MediaLoadError> {
        match self.resolve(url)? {
            MediaSource::Remote(url) => self.probe_remote(&url).await,
            MediaSource::Local(path) => {
                let metadata = tokio::fs::metadata(&path)
                    .await
                    .map_err(|e| io_error(&path, &e))?;
                if !metadata.is_file() {
                    return Err(MediaLoadError::Io(format!(
                        "{} is not a file",
                        path.display()
                    )));
                }
                Ok(VideoProbe {
                    size_bytes: Some(metadata.len()),
                })
            }
        }
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, MediaLoadError> {
        use futures_util::StreamExt;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MediaLoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MediaLoadError::Http(status.as_u16()));
        }

        let limit = self.config.max_bytes;
        let announced = response.content_length().unwrap_or(0);
        if announced > limit {
            return Err(MediaLoadError::TooLarge { limit });
        }

        let capacity = usize::try_from(announced).unwrap_or(0);
        let mut bytes = Vec::with_capacity(capacity);
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| MediaLoadError::Network(e.to_string()))?;
            if bytes.len() as u64 + chunk.len() as u64 > limit {
                return Err(MediaLoadError::TooLarge { limit });
            }
            bytes.extend_from_slice(&chunk);
        }

        Ok(bytes)
    }

    async fn probe_remote(&self, url: &str) -> Result<VideoProbe, MediaLoadError> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| MediaLoadError::Network(e.to_string()))?;

        // Some hosts refuse HEAD; the headers of a GET answer the same question.
        let response = if response.status() == reqwest::StatusCode::METHOD_NOT_ALLOWED {
            self.client
                .get(url)
                .send()
                .await
                .map_err(|e| MediaLoadError::Network(e.to_string()))?
        } else {
            response
        };

        let status = response.status();
        if !status.is_success() {
            return Err(MediaLoadError::Http(status.as_u16()));
        }
        Ok(VideoProbe {
            size_bytes: response.content_length(),
        })
    }
}

async fn read_local(path: &Path, limit: u64) -> Result<Vec<u8>, MediaLoadError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| io_error(path, &e))?;
    if metadata.len() > limit {
        return Err(MediaLoadError::TooLarge { limit });
    }
    tokio::fs::read(path).await.map_err(|e| io_error(path, &e))
}

fn io_error(path: &Path, error: &std::io::Error) -> MediaLoadError {
    MediaLoadError::Io(format!("{}: {error}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let buffer =
            image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([9, 8, 7, 255]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        buffer
            .write_to(&mut bytes, image_rs::ImageFormat::Png)
            .expect("png encoding");
        bytes.into_inner()
    }

    fn fetcher(base_dir: &Path, max_bytes: u64) -> MediaFetcher {
        MediaFetcher::new(FetchConfig {
            max_bytes,
            base_dir: Some(base_dir.to_path_buf()),
            ..FetchConfig::default()
        })
        .expect("client builds")
    }

    #[tokio::test]
    async fn loads_relative_local_image() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("cover.png"), png_bytes(6, 3)).expect("write");

        let image = fetcher(dir.path(), DEFAULT_MAX_DOWNLOAD_BYTES)
            .load_image("cover.png")
            .await
            .expect("image loads");
        assert_eq!((image.width, image.height), (6, 3));
    }

    #[tokio::test]
    async fn thumbnail_is_downscaled() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("wide.png"), png_bytes(40, 20)).expect("write");

        let thumb = fetcher(dir.path(), DEFAULT_MAX_DOWNLOAD_BYTES)
            .load_thumbnail("wide.png", 10)
            .await
            .expect("thumbnail loads");
        assert_eq!((thumb.width, thumb.height), (10, 5));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let err = fetcher(dir.path(), DEFAULT_MAX_DOWNLOAD_BYTES)
            .load_image("absent.jpg")
            .await
            .unwrap_err();
        assert!(matches!(err, MediaLoadError::Io(_)));
    }

    #[tokio::test]
    async fn oversized_file_is_rejected() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("big.bin"), vec![0_u8; 2048]).expect("write");

        let err = fetcher(dir.path(), 1024)
            .fetch_bytes("big.bin")
            .await
            .unwrap_err();
        assert_eq!(err, MediaLoadError::TooLarge { limit: 1024 });
    }

    #[tokio::test]
    async fn undecodable_file_is_decode_error() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("page.jpg"), b"<html>404</html>").expect("write");

        let err = fetcher(dir.path(), DEFAULT_MAX_DOWNLOAD_BYTES)
            .load_image("page.jpg")
            .await
            .unwrap_err();
        assert!(matches!(err, MediaLoadError::Decode(_)));
    }

    #[tokio::test]
    async fn probe_reports_local_video_size() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("clip.mp4"), vec![1_u8; 300]).expect("write");

        let fetcher = fetcher(dir.path(), DEFAULT_MAX_DOWNLOAD_BYTES);
        assert_eq!(
            fetcher.probe_video("clip.mp4").await,
            Ok(VideoProbe {
                size_bytes: Some(300)
            })
        );
        assert!(matches!(
            fetcher.probe_video(".").await,
            Err(MediaLoadError::Io(_))
        ));
    }

    #[tokio::test]
    async fn unsupported_scheme_fails_before_io() {
        let dir = tempdir().expect("temp dir");
        let err = fetcher(dir.path(), DEFAULT_MAX_DOWNLOAD_BYTES)
            .load_image("ftp://example.com/a.jpg")
            .await
            .unwrap_err();
        assert!(matches!(err, MediaLoadError::UnsupportedSource(_)));
    }
}
