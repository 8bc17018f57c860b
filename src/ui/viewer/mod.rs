// SPDX-License-Identifier: MPL-2.0
//! Project viewer: the media panel of an opened project.
//!
//! [`component`] holds the state machine; [`magnifier`], [`lifecycle`] and
//! [`playback`] are its sub-components, and [`view`] with
//! [`video_controls`] render it.

pub mod component;
pub mod lifecycle;
pub mod magnifier;
pub mod playback;
pub mod video_controls;
pub mod view;

pub use component::{Effect, Message, State};
pub use lifecycle::{LoadRequest, MediaKind};
pub use view::{panel_bounds, ViewContext};
