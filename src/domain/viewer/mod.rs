// SPDX-License-Identifier: MPL-2.0
//! Viewer domain types.
//!
//! Value objects used by the project viewer, independent of any
//! presentation framework.

pub mod geometry;
pub mod load;
pub mod mode;
pub mod playback;

pub use geometry::{
    magnified_region, FocusPoint, Magnification, PixelRegion, Pointer, Rect,
};
pub use load::{LoadState, LoadTicket, SessionCounter, ViewerSession};
pub use mode::MediaMode;
pub use playback::{Playback, ProgressFraction};
