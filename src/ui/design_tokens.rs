// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the colors, spacing, sizes and type scale every screen
//! draws from.
//!
//! Widgets never hard-code a length or a color; they pick the nearest token
//! so that the viewer, the editor and the dialogs stay visually aligned.
//! Spacing follows an 8 px grid.
//!
//! ```
//! use iced_folio::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let shade = Color { a: opacity::OVERLAY_MEDIUM, ..palette::BLACK };
//! let gap = spacing::XS;
//! # let _ = (shade, gap);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand blue, also the selection ring of tools and swatches.
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Toast accents
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background for floating panels.
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const TOOLBAR_HEIGHT: f32 = 52.0;

    // Component widths
    pub const DRAWER_WIDTH: f32 = 300.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const PROMPT_WIDTH: f32 = 380.0;
    pub const SETTINGS_WIDTH: f32 = 520.0;
    pub const JUMP_INPUT_WIDTH: f32 = 72.0;

    /// Edge of a color swatch button.
    pub const SWATCH: f32 = 24.0;

    /// Rendered edge of a crop thumb.
    pub const CROP_THUMB: f32 = 20.0;
}

pub mod typography {
    //! Font size scale.
    //!
    //! Titles head screens and dialogs, body is used for most text and
    //! captions for secondary information.

    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::TOOLBAR_HEIGHT > sizing::BUTTON_HEIGHT);
    assert!(sizing::SWATCH <= sizing::ICON_MD);
    assert!(sizing::DRAWER_WIDTH < sizing::SETTINGS_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
