// SPDX-License-Identifier: MPL-2.0
//! Magnifier sub-component: click-to-zoom with a pointer-tracked focus.

use crate::domain::viewer::{FocusPoint, Pointer, Rect};

/// Magnifier state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    is_zoomed: bool,
    focus: FocusPoint,
}

/// Messages for the magnifier sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Click on the media surface: zoom in at the pointer, or zoom out.
    Click { pointer: Pointer, bounds: Rect },
    /// Pointer moved over the media surface.
    PointerMoved { pointer: Pointer, bounds: Rect },
    /// Drop the zoom, e.g. because the displayed media changed.
    Reset,
}

/// Effects produced by magnifier changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Zoom toggled or focus moved; the magnified view must be refreshed.
    ZoomChanged,
}

impl State {
    /// Handle a magnifier message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Click { pointer, bounds } => {
                if self.is_zoomed {
                    self.is_zoomed = false;
                } else {
                    self.focus = FocusPoint::from_pointer(pointer, bounds);
                    self.is_zoomed = true;
                }
                Effect::ZoomChanged
            }
            Message::PointerMoved { pointer, bounds } => {
                if !self.is_zoomed {
                    return Effect::None;
                }
                let focus = FocusPoint::from_pointer(pointer, bounds);
                if focus == self.focus {
                    Effect::None
                } else {
                    self.focus = focus;
                    Effect::ZoomChanged
                }
            }
            Message::Reset => {
                let was_zoomed = self.is_zoomed;
                *self = Self::default();
                if was_zoomed {
                    Effect::ZoomChanged
                } else {
                    Effect::None
                }
            }
        }
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.is_zoomed
    }

    #[must_use]
    pub fn focus(&self) -> FocusPoint {
        self.focus
    }
}
