// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `State`, handles its `Message`s and reports `Effect`s to the
//! application, which performs the I/O.
//!
//! - [`gallery`] - Category filtering, project cards, the detail sheet
//! - [`viewer`] - Media panel of the opened project (zoom, variants, video)
//! - [`notifications`] - Toasts for warnings and errors
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod viewer;
