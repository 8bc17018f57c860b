// SPDX-License-Identifier: MPL-2.0
//! Pure geometry for the pointer-tracking magnifier.
//!
//! The viewer only owns the normalized focus point. How the renderer applies
//! the magnification is up to the presentation layer; [`magnified_region`]
//! is provided for renderers that crop the source image.

// =============================================================================
// Magnification Bounds
// =============================================================================

/// Magnification factor bounds (1.5x to 5x).
pub mod magnification_bounds {
    /// Minimum magnification factor.
    pub const MIN: f32 = 1.5;
    /// Maximum magnification factor.
    pub const MAX: f32 = 5.0;
    /// Default magnification factor.
    pub const DEFAULT: f32 = 2.5;
}

/// A pointer position in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// On-screen rectangle of the media container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rectangle anchored at the origin, for pointer positions that are
    /// already relative to the container.
    #[must_use]
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

// =============================================================================
// FocusPoint
// =============================================================================

/// Normalized focal point, guaranteed to lie within `[0,1]×[0,1]`.
///
/// `(0, 0)` is the top-left corner of the media, `(1, 1)` the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusPoint {
    x: f32,
    y: f32,
}

impl FocusPoint {
    /// The center of the media.
    pub const CENTER: FocusPoint = FocusPoint { x: 0.5, y: 0.5 };

    /// Creates a focus point, clamping each axis into `[0, 1]`.
    ///
    /// Non-finite values resolve to the center on that axis.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: normalize_axis(x),
            y: normalize_axis(y),
        }
    }

    /// Computes the focus for a pointer over `rect`.
    ///
    /// Pointers outside the rectangle clamp to its nearest edge. A rectangle
    /// with a zero, negative or non-finite extent yields the center on that
    /// axis.
    #[must_use]
    pub fn from_pointer(pointer: Pointer, rect: Rect) -> Self {
        Self {
            x: axis_fraction(pointer.x, rect.left, rect.width),
            y: axis_fraction(pointer.y, rect.top, rect.height),
        }
    }

    #[must_use]
    pub fn x(self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> f32 {
        self.y
    }

    /// Transform origin as percentages, e.g. `(25.0, 80.0)`.
    #[must_use]
    pub fn as_percent(self) -> (f32, f32) {
        (self.x * 100.0, self.y * 100.0)
    }
}

impl Default for FocusPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

fn axis_fraction(position: f32, start: f32, extent: f32) -> f32 {
    if !extent.is_finite() || extent <= 0.0 {
        return 0.5;
    }
    normalize_axis((position - start) / extent)
}

fn normalize_axis(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.5
    }
}

// =============================================================================
// Magnification
// =============================================================================

/// Magnifier zoom factor, guaranteed to be within valid range (1.5x–5x).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnification(f32);

impl Magnification {
    /// Creates a new magnification factor, clamping to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self::default();
        }
        Self(factor.clamp(magnification_bounds::MIN, magnification_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Magnification {
    fn default() -> Self {
        Self(magnification_bounds::DEFAULT)
    }
}

// =============================================================================
// Magnified Region
// =============================================================================

/// A rectangle of source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Returns the source region that, scaled up by `factor`, fills the
/// container with `focus` as the transform origin.
///
/// The region keeps the image aspect ratio, covers `1/factor` of each
/// dimension and is shifted so it never leaves the image. Empty images
/// yield an empty region.
#[must_use]
pub fn magnified_region(
    focus: FocusPoint,
    image_width: u32,
    image_height: u32,
    factor: Magnification,
) -> PixelRegion {
    if image_width == 0 || image_height == 0 {
        return PixelRegion {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        };
    }

    let (x, width) = region_axis(focus.x(), image_width, factor.value());
    let (y, height) = region_axis(focus.y(), image_height, factor.value());

    PixelRegion {
        x,
        y,
        width,
        height,
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn region_axis(focus: f32, extent: u32, factor: f32) -> (u32, u32) {
    let extent_f = extent as f32;
    let length = (extent_f / factor).round().clamp(1.0, extent_f);

    // With transform-origin scaling, the origin pixel stays fixed on screen:
    // the visible window starts at focus * (extent - length).
    let start = (focus * (extent_f - length)).round();
    let start = start.clamp(0.0, extent_f - length);

    (start as u32, length as u32)
}
