//! Escape-key overlay: pauses whatever scene allowed it, echoes the last
//! event token into a textfield and offers a QUIT button.

use std::sync::Arc;

use tabula_engine::prelude::*;

use crate::config;

pub struct MenuScene {
    core: SceneCore,
}

impl MenuScene {
    pub fn new(labels: Arc<dyn TextRasterizer>) -> Self {
        let mut core = SceneCore::new(AssetRegistry::new(config::ASSET_ROOT));

        let title = Textfield::component(
            "menu_title",
            "PAUSED",
            80,
            80,
            TextStyle::new(40.0, Color::WHITE),
            labels.clone(),
        );
        core.register_textfield(title);

        // Diagnostic echo of the most recent event stream.
        let echo = Textfield::component(
            "echo",
            "-",
            80,
            200,
            TextStyle::new(20.0, Color::WHITE),
            labels.clone(),
        );
        core.register_textfield(echo);

        let (bw, bh) = config::BUTTON_SIZE;
        core.assets_mut().insert_image(
            "button_face",
            Image::solid(bw as u32, bh as u32, config::BUTTON_FACE),
        );
        let label = Textfield::component(
            "quit_label",
            "QUIT",
            0,
            0,
            TextStyle::new(20.0, Color::WHITE),
            labels,
        );
        let quit = Button::component(
            "quit",
            (config::DISPLAY_SIZE.0 as i32 - bw) / 2,
            420,
            bw,
            bh,
            label,
            Box::new(|ctx| ctx.stop = true),
        )
        .with_image_id("button_face");
        core.register_button(quit);

        Self { core }
    }
}

impl Scene for MenuScene {
    fn core(&self) -> &SceneCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SceneCore {
        &mut self.core
    }

    fn start(&mut self) {
        log::info!("menu overlay active");
    }

    fn tick(&mut self, token: &EventToken, _pointer: Point) {
        if token.is_empty() {
            return;
        }
        let last = self.core.last_event().to_string();
        if let Some(echo) = self.core.get_component_mut("echo") {
            if echo.text() != Some(last.as_str()) {
                echo.set_text(&last);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Arc<dyn TextRasterizer> {
        Arc::new(BlockLabels::new(8))
    }

    #[test]
    fn echo_tracks_the_last_event_token() {
        let mut scene = MenuScene::new(labels());
        scene.update(&EventToken::from_raw("ab//d"), Point::zero());
        assert_eq!(scene.core().get_component("echo").unwrap().text(), Some("ab//d"));

        // quiet ticks leave the echo alone
        scene.update(&EventToken::new(), Point::zero());
        assert_eq!(scene.core().get_component("echo").unwrap().text(), Some("ab//d"));
    }

    #[test]
    fn quit_button_requests_a_stop() {
        let mut scene = MenuScene::new(labels());
        let press = scene.core().get_component("quit").unwrap().rect().center();
        scene.update(&EventToken::from_raw("//d"), press);
        scene.update(&EventToken::from_raw("//u"), press);
        assert!(scene.core().stop_requested());
    }
}
