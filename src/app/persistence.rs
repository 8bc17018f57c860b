// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Saves the gallery preferences that change while browsing, so the next
//! launch reopens on them.

use crate::config::{self, Config};
use crate::domain::catalog::CategoryFilter;

/// Notification key shown when the settings file cannot be written.
pub const SAVE_WARNING: &str = "notification-config-save-error";

/// Records `filter` as the startup category and writes the config to disk.
///
/// Returns the key of a warning to show when saving failed. Disk writes
/// are skipped under unit tests; callers still see the updated `config`.
pub fn persist_category(config: &mut Config, filter: CategoryFilter) -> Option<&'static str> {
    config.gallery.default_category = Some(filter.slug().to_string());

    if cfg!(test) {
        return None;
    }

    match config::save(config) {
        Ok(()) => None,
        Err(error) => {
            log::warn!("Failed to save config: {error}");
            Some(SAVE_WARNING)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Category;

    #[test]
    fn persist_category_updates_config() {
        let mut config = Config::default();
        let warning = persist_category(&mut config, CategoryFilter::Only(Category::Portrait));

        assert!(warning.is_none());
        assert_eq!(config.gallery.default_category.as_deref(), Some("portrait"));
        assert_eq!(
            config.default_filter(),
            CategoryFilter::Only(Category::Portrait)
        );
    }

    #[test]
    fn persist_all_round_trips() {
        let mut config = Config::default();
        persist_category(&mut config, CategoryFilter::All);
        assert_eq!(config.default_filter(), CategoryFilter::All);
    }
}
