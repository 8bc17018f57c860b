// SPDX-License-Identifier: MPL-2.0
//! Portfolio gallery: category filtering, project cards and the detail
//! sheet of the opened project.

pub mod details;
pub mod grid;
pub mod scroll_lock;
pub mod selection;

pub use scroll_lock::{ScrollGuard, ScrollHost, ScrollLock};
pub use selection::{Effect, Message, State};
