//! Tabula engine crate.
//!
//! A small 2D component/scene framework for card-game style applications:
//! component registry + pointer interaction (click, drag, drop), asset
//! registry, and the scene / scene-transition state machine.
//!
//! Raw input polling, audio playback and final pixel output are collaborator
//! concerns — the host feeds [`input::EventToken`]s in and consumes the
//! ordered `(image, position)` rendering context out.

pub mod assets;
pub mod components;
pub mod coords;
pub mod input;
pub mod logging;
pub mod scene;

/// Everything a scene implementation typically needs.
pub mod prelude {
    pub use crate::assets::image::{Color, Image};
    pub use crate::assets::registry::AssetRegistry;
    pub use crate::assets::text::{BlockLabels, TextRasterizer, TextStyle};
    pub use crate::components::button::{Button, ButtonAction};
    pub use crate::components::component::{Component, Tag};
    pub use crate::components::dragable::Dragable;
    pub use crate::components::manager::ComponentManager;
    pub use crate::components::textfield::Textfield;
    pub use crate::components::zone::Zone;
    pub use crate::coords::{Point, Rect};
    pub use crate::input::{EventToken, InputSample, InputSource};
    pub use crate::scene::{Scene, SceneCore, SceneCtx, SceneManager};
}
