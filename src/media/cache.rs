// SPDX-License-Identifier: MPL-2.0
//! Decoded image cache shared by grid thumbnails and the project viewer.
//!
//! - **LRU eviction**: least recently used images are evicted first
//! - **Memory-bounded**: total decoded size is capped
//! - **URL-keyed**: entries are indexed by the catalog URL
//! - **Lazy**: callers claim the URLs they need; each URL is requested once
//!   until it lands in the cache or fails

use crate::domain::catalog::Project;
use crate::media::image::ImageData;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Default cache budget in megabytes.
pub const DEFAULT_CACHE_MB: u32 = 96;

/// Minimum cache budget in megabytes.
pub const MIN_CACHE_MB: u32 = 16;

/// Maximum cache budget in megabytes.
pub const MAX_CACHE_MB: u32 = 512;

/// Upper bound on the number of entries, whatever their size.
const MAX_ENTRIES: usize = 256;

#[derive(Debug, Clone)]
struct CacheEntry {
    image: ImageData,
    size_bytes: usize,
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
}

/// LRU cache of decoded images.
pub struct ImageCache {
    cache: LruCache<String, CacheEntry>,
    max_bytes: usize,
    current_bytes: usize,
    /// URLs with a load in flight.
    pending: HashSet<String>,
    /// URLs whose last load failed; not requested again.
    failed: HashSet<String>,
    stats: CacheStats,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("entries", &self.cache.len())
            .field("current_bytes", &self.current_bytes)
            .field("max_bytes", &self.max_bytes)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl ImageCache {
    /// Creates a cache holding at most `budget_mb` megabytes of pixels.
    #[must_use]
    pub fn new(budget_mb: u32) -> Self {
        let budget_mb = budget_mb.clamp(MIN_CACHE_MB, MAX_CACHE_MB) as usize;
        let capacity = NonZeroUsize::new(MAX_ENTRIES).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            max_bytes: budget_mb * 1024 * 1024,
            current_bytes: 0,
            pending: HashSet::new(),
            failed: HashSet::new(),
            stats: CacheStats::default(),
        }
    }

    /// Returns the URLs among `urls` that should be requested now, and marks
    /// them pending.
    ///
    /// Cached, in-flight and failed URLs are skipped, as are duplicates.
    pub fn claim_missing<'a, I>(&mut self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut claimed = Vec::new();
        for url in urls {
            if url.trim().is_empty()
                || self.cache.contains(url)
                || self.pending.contains(url)
                || self.failed.contains(url)
            {
                continue;
            }
            self.pending.insert(url.to_string());
            claimed.push(url.to_string());
        }
        claimed
    }

    /// Stores a decoded image.
    ///
    /// Returns `false` if the image alone exceeds half the budget; it is
    /// then not cached, but the URL is no longer pending.
    pub fn insert(&mut self, url: String, image: ImageData) -> bool {
        self.pending.remove(&url);
        self.failed.remove(&url);

        let size_bytes = image.size_bytes();
        if size_bytes > self.max_bytes / 2 {
            return false;
        }

        if let Some(existing) = self.cache.pop(&url) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        while self.current_bytes + size_bytes > self.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                self.stats.evictions += 1;
            }
        }

        if let Some((_, evicted)) = self.cache.push(url, CacheEntry { image, size_bytes }) {
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
            self.stats.evictions += 1;
        }
        self.current_bytes += size_bytes;
        self.stats.insertions += 1;
        true
    }

    /// Records that loading `url` failed.
    pub fn mark_failed(&mut self, url: &str) {
        self.pending.remove(url);
        self.failed.insert(url.to_string());
    }

    /// Looks up `url`, refreshing its LRU position.
    pub fn get(&mut self, url: &str) -> Option<&ImageData> {
        match self.cache.get(url) {
            Some(entry) => {
                self.stats.hits += 1;
                Some(&entry.image)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Looks up `url` without touching LRU order; used by views.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&ImageData> {
        self.cache.peek(url).map(|entry| &entry.image)
    }

    /// URL of the image standing for `project` in the grid and as video
    /// poster: its fallback once the primary image failed, the primary
    /// otherwise.
    #[must_use]
    pub fn cover_url<'a>(&self, project: &'a Project) -> &'a str {
        let primary = project.primary_media_url.as_str();
        match project.fallback_media_url.as_deref() {
            Some(fallback) if !fallback.trim().is_empty() && self.failed.contains(primary) => {
                fallback
            }
            _ => primary,
        }
    }

    #[must_use]
    pub fn has_failed(&self, url: &str) -> bool {
        self.failed.contains(url)
    }

    #[must_use]
    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.contains(url)
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_MB)
    }
}
