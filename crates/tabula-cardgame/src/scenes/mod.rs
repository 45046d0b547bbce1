//! The game's screens.
//!
//! `StartScene` → `CardgameScene`, with `MenuScene` as the escape overlay.
//! All art is generated at construction time, so the game runs without any
//! bundled asset files.

mod cardgame;
mod menu;
mod start;

pub use cardgame::CardgameScene;
pub use menu::MenuScene;
pub use start::StartScene;
