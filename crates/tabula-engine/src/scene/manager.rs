use crate::assets::image::Image;
use crate::coords::Point;
use crate::input::EventToken;

use super::Scene;

/// Holds the active scene and drives transitions.
///
/// State machine:
/// - construction activates the start scene and calls `start()` on it
/// - the open-menu code toggles the menu overlay: with the overlay active
///   (previous slot populated) it restores the saved scene; otherwise a
///   menu-accessible active scene is pushed into the depth-1 previous slot
///   and the singleton menu takes over
/// - independent of the menu check, a pending next-scene reference swaps in
///   after every update
///
/// Every activation — initial, overlay, restore, transition — re-invokes
/// `start()` on the scene becoming active.
pub struct SceneManager {
    active: Box<dyn Scene>,
    /// Populated only while the menu overlay is active.
    previous: Option<Box<dyn Scene>>,
    /// The singleton menu scene, parked here while not overlaid.
    menu: Option<Box<dyn Scene>>,
}

impl SceneManager {
    pub fn new(mut start: Box<dyn Scene>, menu: Box<dyn Scene>) -> Self {
        start.start();
        Self { active: start, previous: None, menu: Some(menu) }
    }

    /// Runs one tick: menu toggle, active-scene update, pending transition.
    pub fn update(&mut self, token: &EventToken, pointer: Point) {
        if token.escape() {
            self.toggle_menu();
        }

        self.active.update(token, pointer);

        if let Some(next) = self.active.core_mut().take_next_scene() {
            log::info!("scene transition");
            self.active = next;
            self.active.start();
        }
    }

    fn toggle_menu(&mut self) {
        if self.previous.is_some() {
            // Dismiss the overlay: park the menu, restore the saved scene.
            if let Some(saved) = self.previous.take() {
                let menu = std::mem::replace(&mut self.active, saved);
                self.menu = Some(menu);
                self.active.start();
                log::debug!("menu overlay dismissed");
            }
        } else if self.active.core().menu_accessible() {
            if let Some(menu) = self.menu.take() {
                let saved = std::mem::replace(&mut self.active, menu);
                self.previous = Some(saved);
                self.active.start();
                log::debug!("menu overlay opened");
            }
        }
    }

    /// Mirrors the active scene's stop request for the host loop.
    #[inline]
    pub fn stop(&self) -> bool {
        self.active.core().stop_requested()
    }

    pub fn rendering_context(&self) -> Vec<(Image, Point)> {
        self.active.core().rendering_context()
    }

    #[inline]
    pub fn active(&self) -> &dyn Scene {
        self.active.as_ref()
    }

    #[inline]
    pub fn active_mut(&mut self) -> &mut dyn Scene {
        self.active.as_mut()
    }
}
