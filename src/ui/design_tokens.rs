// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the gallery and the project viewer.

## Organization

- **Palette**: Base colors (neutral stone scale, warm accent)
- **Opacity**: Overlay levels for badges and hover veils
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Card, panel and control sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use folio_lens::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let veil = Color {
    a: opacity::VEIL,
    ..palette::BLACK
};
let gap = spacing::MD;
assert!(gap > 0.0 && veil.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Neutral stone scale
    pub const STONE_950: Color = Color::from_rgb(0.047, 0.043, 0.039);
    pub const STONE_900: Color = Color::from_rgb(0.11, 0.098, 0.09);
    pub const STONE_800: Color = Color::from_rgb(0.16, 0.145, 0.141);
    pub const STONE_600: Color = Color::from_rgb(0.341, 0.325, 0.306);
    pub const STONE_400: Color = Color::from_rgb(0.659, 0.635, 0.62);
    pub const STONE_200: Color = Color::from_rgb(0.906, 0.898, 0.894);
    pub const STONE_100: Color = Color::from_rgb(0.961, 0.961, 0.957);
    pub const STONE_50: Color = Color::from_rgb(0.98, 0.98, 0.976);

    // Warm accent used for the active chip and the progress track
    pub const ACCENT_400: Color = Color::from_rgb(0.984, 0.749, 0.141);
    pub const ACCENT_500: Color = Color::from_rgb(0.961, 0.62, 0.043);
    pub const ACCENT_600: Color = Color::from_rgb(0.851, 0.467, 0.024);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Hover veil over a gallery card.
    pub const VEIL: f32 = 0.35;
    /// Badge and control bar backgrounds over media.
    pub const OVERLAY: f32 = 0.6;
    /// Modal backdrop behind the project details.
    pub const BACKDROP: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Gallery
    pub const CARD_WIDTH: f32 = 300.0;
    /// 4:5 portrait tiles.
    pub const CARD_IMAGE_HEIGHT: f32 = 375.0;
    pub const GRID_COLUMNS: usize = 3;

    // Viewer media panel. The panel has a fixed size so pointer positions
    // map onto a known rectangle.
    pub const MEDIA_PANEL_WIDTH: f32 = 640.0;
    pub const MEDIA_PANEL_HEIGHT: f32 = 800.0;
    pub const DETAILS_WIDTH: f32 = 360.0;

    // Controls
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const SCRUBBER_THUMB: f32 = 12.0;
    pub const TIMELINE_TRACK: f32 = 4.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Gallery heading.
    pub const DISPLAY: f32 = 40.0;
    /// Project title in the detail view.
    pub const TITLE_LG: f32 = 30.0;
    /// Card titles.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    /// Uppercase labels such as the category line and badges.
    pub const CAPTION: f32 = 11.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::VEIL < opacity::OVERLAY);
    assert!(opacity::OVERLAY < opacity::BACKDROP);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::MEDIA_PANEL_WIDTH > 0.0 && sizing::MEDIA_PANEL_HEIGHT > 0.0);
};
