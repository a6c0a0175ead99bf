// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, including the map surface colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes (buttons, icons, map markers)
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use pinroute::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create an overlay color
let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    /// Accent used for button foregrounds and route overlays.
    pub const TINT: Color = Color::from_rgb(0.0, 0.48, 1.0);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);

    // Map surface
    pub const MAP_STANDARD_LAND: Color = Color::from_rgb(0.95, 0.94, 0.91);
    pub const MAP_STANDARD_GRID: Color = Color::from_rgb(0.85, 0.83, 0.78);
    pub const MAP_SATELLITE_LAND: Color = Color::from_rgb(0.16, 0.22, 0.16);
    pub const MAP_SATELLITE_GRID: Color = Color::from_rgb(0.27, 0.33, 0.26);

    /// Pin head fill.
    pub const PIN: Color = ERROR_500;
    /// User location marker.
    pub const LOCATION: Color = TINT;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Icon inside an icon-only action button.
    pub const ACTION_ICON_WIDTH: f32 = 25.0;
    pub const ACTION_ICON_HEIGHT: f32 = 30.0;

    /// Square icon buttons (rails, locate, remove pins).
    pub const ICON_BUTTON: f32 = 44.0;

    /// Glyph inside a segmented control cell.
    pub const SEGMENT_ICON: f32 = 22.0;

    pub const BUTTON_HEIGHT: f32 = 44.0;
    pub const PROMPT_WIDTH: f32 = 300.0;

    /// Pin head radius, and the hit radius around it.
    pub const PIN_RADIUS: f32 = 8.0;
    pub const PIN_HIT_RADIUS: f32 = 22.0;
    pub const PIN_STEM: f32 = 12.0;

    /// Route overlay stroke width.
    pub const ROUTE_LINE_WIDTH: f32 = 4.0;

    /// User location marker (arrow glyph side, or dot radius).
    pub const LOCATION_ARROW: f32 = 28.0;
    pub const LOCATION_DOT_RADIUS: f32 = 7.0;

    /// Spacing of the background graticule, in logical pixels.
    pub const GRID_STEP: f32 = 64.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - Dialog titles
    pub const TITLE_MD: f32 = 20.0;

    /// Large body - Button labels, form inputs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text
    pub const BODY: f32 = 14.0;

    /// Caption - Pin titles on the map
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    /// Icon-only action buttons.
    pub const ICON_BUTTON: f32 = 5.0;
    pub const MD: f32 = 8.0;
    /// Text-label action buttons.
    pub const LABEL_BUTTON: f32 = 10.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.35,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::ICON_BUTTON > sizing::ACTION_ICON_HEIGHT);
    assert!(sizing::PIN_HIT_RADIUS > sizing::PIN_RADIUS);
    assert!(sizing::ROUTE_LINE_WIDTH > 0.0);

    // Typography validation
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Radius validation
    assert!(radius::LABEL_BUTTON > radius::ICON_BUTTON);
};
