// SPDX-License-Identifier: MPL-2.0
//! Logger setup.
//!
//! `RUST_LOG` overrides the default filter, e.g.
//! `RUST_LOG=folio_lens=debug folio_lens`.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "folio_lens=info";

/// Installs the global logger. Later calls are no-ops.
pub fn init() {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.filter_module("wgpu", LevelFilter::Warn);
    builder.filter_module("naga", LevelFilter::Warn);
    builder.filter_module("cosmic_text", LevelFilter::Warn);
    let _ = builder.try_init();
}
