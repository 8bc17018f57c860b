// SPDX-License-Identifier: MPL-2.0
//! Media handling for the gallery and the project viewer.
//!
//! This module resolves catalog URLs, fetches and decodes images, probes
//! video sources, caches decoded pixels and keeps the nominal playback clock
//! of videos.

pub mod cache;
pub mod clock;
pub mod fetch;
pub mod image;
pub mod source;

pub use cache::ImageCache;
pub use clock::PlaybackClock;
pub use fetch::{FetchConfig, MediaFetcher, VideoProbe};
pub use image::ImageData;
pub use source::MediaSource;
