// SPDX-License-Identifier: MPL-2.0
//! `folio_lens` is a portfolio gallery viewer built with the Iced GUI framework.
//!
//! It shows a filterable grid of photography projects and a detail view per
//! project, with a before/after toggle, a pointer-tracking magnifier and a
//! video scrubber. Strings are localized with Fluent and preferences are
//! persisted as TOML.

#![doc(html_root_url = "https://docs.rs/folio_lens/0.1.0")]

pub mod app;
pub mod catalog_loader;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod ui;
