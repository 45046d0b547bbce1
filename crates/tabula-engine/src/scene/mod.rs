//! Scenes and scene transitions.
//!
//! Responsibilities:
//! - per-scene state: component manager + asset registry + frame bookkeeping
//! - the `Scene` trait implemented by concrete screens
//! - the `SceneManager` state machine (menu overlay, next-scene hand-off)

mod core;
mod manager;

pub use self::core::{SceneCore, SceneCtx};
pub use self::manager::SceneManager;

use crate::coords::Point;
use crate::input::EventToken;

/// A screen of the application: one component tree plus its assets.
///
/// Concrete scenes embed a [`SceneCore`] and add construction plus optional
/// per-frame behavior. The provided [`update`](Scene::update) always runs
/// the base core update before the scene-specific [`tick`](Scene::tick), so
/// hooks observe a fully updated component tree.
pub trait Scene {
    fn core(&self) -> &SceneCore;
    fn core_mut(&mut self) -> &mut SceneCore;

    /// Invoked exactly once each time the scene becomes active, including
    /// reactivation after a menu overlay is dismissed.
    fn start(&mut self) {}

    /// Scene-specific per-frame behavior; runs after the base update.
    fn tick(&mut self, _token: &EventToken, _pointer: Point) {}

    fn update(&mut self, token: &EventToken, pointer: Point) {
        self.core_mut().update(token, pointer);
        self.tick(token, pointer);
    }
}
