// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`catalog`]: Portfolio catalog ([`Catalog`](catalog::Catalog),
//!   [`Project`](catalog::Project), [`CategoryFilter`](catalog::CategoryFilter))
//! - [`viewer`]: Viewer value objects ([`MediaMode`](viewer::MediaMode),
//!   [`FocusPoint`](viewer::FocusPoint), [`LoadTicket`](viewer::LoadTicket),
//!   [`ProgressFraction`](viewer::ProgressFraction))

pub mod catalog;
pub mod viewer;
