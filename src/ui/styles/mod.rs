// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles for the gallery and the viewer.

pub mod button;
pub mod container;
pub mod slider;
