//! Game-wide configuration constants.

use tabula_engine::assets::image::Color;

pub const TITLE: &str = "tabula cardgame";
pub const DISPLAY_SIZE: (u32, u32) = (1200, 750);
pub const FPS: u32 = 60;

pub const CARD_SIZE: (i32, i32) = (100, 150);
pub const ZONE_SIZE: (i32, i32) = (120, 170);
pub const BUTTON_SIZE: (i32, i32) = (160, 60);

/// Asset directory containing `images/` and `sounds/`.
pub const ASSET_ROOT: &str = "assets";
/// Optional label font; hosts without it fall back to block labels.
pub const FONT_PATH: &str = "assets/fonts/label.ttf";

pub const BACKGROUND: Color = Color::rgb(12, 16, 24);
pub const BUTTON_FACE: Color = Color::rgb(58, 74, 108);
pub const CARD_FACE: Color = Color::rgb(148, 38, 52);
pub const ZONE_FACE: Color = Color::rgb(24, 64, 44);
pub const HIGHLIGHT: Color = Color::rgb(212, 175, 55);
pub const HIGHLIGHT_WIDTH: i32 = 4;
