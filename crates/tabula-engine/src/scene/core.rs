use crate::assets::image::Image;
use crate::assets::registry::{AssetError, AssetRegistry};
use crate::components::component::Component;
use crate::components::manager::ComponentManager;
use crate::coords::Point;
use crate::input::EventToken;

use super::Scene;

/// The slice of scene state button actions may touch.
pub struct SceneCtx {
    /// Pending scene transition; the scene manager takes it after every
    /// update.
    pub next_scene: Option<Box<dyn Scene>>,
    /// Set when the scene asks the host loop to terminate.
    pub stop: bool,
}

impl SceneCtx {
    pub fn new() -> Self {
        Self { next_scene: None, stop: false }
    }
}

impl Default for SceneCtx {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-scene state shared by every concrete scene.
///
/// Owns the component manager and the asset registry exclusively; both are
/// dropped with the scene when a transition replaces it.
pub struct SceneCore {
    manager: ComponentManager,
    assets: AssetRegistry,
    ctx: SceneCtx,
    frame: u64,
    last_event: String,
    menu_accessible: bool,
    interaction_enabled: bool,
}

impl SceneCore {
    pub fn new(assets: AssetRegistry) -> Self {
        Self {
            manager: ComponentManager::new(),
            assets,
            ctx: SceneCtx::new(),
            frame: 0,
            last_event: String::new(),
            menu_accessible: false,
            interaction_enabled: true,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn manager(&self) -> &ComponentManager {
        &self.manager
    }

    #[inline]
    pub fn manager_mut(&mut self) -> &mut ComponentManager {
        &mut self.manager
    }

    #[inline]
    pub fn assets(&self) -> &AssetRegistry {
        &self.assets
    }

    #[inline]
    pub fn assets_mut(&mut self) -> &mut AssetRegistry {
        &mut self.assets
    }

    /// Whether the open-menu event may overlay this scene.
    #[inline]
    pub fn menu_accessible(&self) -> bool {
        self.menu_accessible
    }

    pub fn set_menu_accessible(&mut self, accessible: bool) {
        self.menu_accessible = accessible;
    }

    #[inline]
    pub fn interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    pub fn set_interaction_enabled(&mut self, enabled: bool) {
        self.interaction_enabled = enabled;
    }

    /// Frames processed since construction.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Raw stream of the last non-empty event token.
    #[inline]
    pub fn last_event(&self) -> &str {
        &self.last_event
    }

    #[inline]
    pub fn stop_requested(&self) -> bool {
        self.ctx.stop
    }

    /// Asks the host loop to terminate.
    pub fn request_stop(&mut self) {
        self.ctx.stop = true;
    }

    /// Schedules a transition; the scene manager activates `scene` after
    /// the current update.
    pub fn request_scene(&mut self, scene: Box<dyn Scene>) {
        self.ctx.next_scene = Some(scene);
    }

    pub(crate) fn take_next_scene(&mut self) -> Option<Box<dyn Scene>> {
        self.ctx.next_scene.take()
    }

    // ── component registration ────────────────────────────────────────────

    pub fn register_component(&mut self, component: Component) {
        self.manager.register(component);
    }

    /// Registers a textfield and publishes its generated label image.
    pub fn register_textfield(&mut self, mut textfield: Component) {
        if let Some(image) = textfield.image() {
            self.assets.insert_image(textfield.image_key().to_string(), image.clone());
        }
        textfield.clear_dirty();
        self.manager.register(textfield);
    }

    /// Registers a button and publishes its label's generated image.
    pub fn register_button(&mut self, mut button: Component) {
        let label_sync = button.as_button_mut().and_then(|b| {
            let label = b.label_mut();
            let pair = label.image().map(|img| (label.image_key().to_string(), img.clone()));
            label.clear_dirty();
            pair
        });
        if let Some((key, image)) = label_sync {
            self.assets.insert_image(key, image);
        }
        self.manager.register(button);
    }

    /// Loads an asset by descriptor; an unrecognized extension is fatal to
    /// the caller.
    pub fn load_asset(&mut self, descriptor: &str) -> Result<(), AssetError> {
        self.assets.load(descriptor)
    }

    pub fn get_component(&self, id: &str) -> Option<&Component> {
        self.manager.get(id)
    }

    pub fn get_component_mut(&mut self, id: &str) -> Option<&mut Component> {
        self.manager.get_mut(id)
    }

    // ── per-frame ─────────────────────────────────────────────────────────

    /// Base per-frame update: records the last non-empty token, bumps the
    /// frame counter, runs the component manager and applies every synced
    /// generated image to the asset registry.
    pub fn update(&mut self, token: &EventToken, pointer: Point) {
        if !token.is_empty() {
            self.last_event = token.as_str().to_string();
        }
        self.frame += 1;
        let synced =
            self.manager.update(self.interaction_enabled, token, pointer, &mut self.ctx);
        for (id, image) in synced {
            self.assets.update_image(&id, image);
        }
    }

    /// Paint-ordered `(image, location)` pairs with ids resolved through
    /// the asset registry. Entries whose image is absent are skipped.
    pub fn rendering_context(&self) -> Vec<(Image, Point)> {
        self.manager
            .rendering_context()
            .into_iter()
            .filter_map(|e| {
                self.assets.get_image(&e.image_id).map(|img| (img.clone(), e.location))
            })
            .collect()
    }
}
