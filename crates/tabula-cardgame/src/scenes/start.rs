//! Title screen. Not overlayable by the menu; its only exit is the START
//! button, which schedules the cardgame scene.

use std::sync::Arc;

use tabula_engine::prelude::*;

use crate::config;

use super::CardgameScene;

pub struct StartScene {
    core: SceneCore,
}

impl StartScene {
    pub fn new(labels: Arc<dyn TextRasterizer>) -> Self {
        let mut core = SceneCore::new(AssetRegistry::new(config::ASSET_ROOT));

        let title = Textfield::component(
            "title",
            config::TITLE,
            80,
            80,
            TextStyle::new(48.0, Color::WHITE),
            labels.clone(),
        );
        core.register_textfield(title);

        let (bw, bh) = config::BUTTON_SIZE;
        core.assets_mut().insert_image(
            "button_face",
            Image::solid(bw as u32, bh as u32, config::BUTTON_FACE),
        );

        let label = Textfield::component(
            "start_label",
            "START",
            0,
            0,
            TextStyle::new(20.0, Color::WHITE),
            labels.clone(),
        );
        let action: ButtonAction = {
            let labels = labels.clone();
            Box::new(move |ctx| {
                ctx.next_scene = Some(Box::new(CardgameScene::new(labels.clone())));
            })
        };
        let start = Button::component(
            "start",
            (config::DISPLAY_SIZE.0 as i32 - bw) / 2,
            420,
            bw,
            bh,
            label,
            action,
        )
        .with_image_id("button_face");
        core.register_button(start);

        Self { core }
    }
}

impl Scene for StartScene {
    fn core(&self) -> &SceneCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SceneCore {
        &mut self.core
    }

    fn start(&mut self) {
        log::info!("title screen active");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Arc<dyn TextRasterizer> {
        Arc::new(BlockLabels::new(8))
    }

    #[test]
    fn menu_cannot_overlay_the_title_screen() {
        let scene = StartScene::new(labels());
        assert!(!scene.core().menu_accessible());
    }

    #[test]
    fn start_button_schedules_the_cardgame() {
        let mut scenes = SceneManager::new(
            Box::new(StartScene::new(labels())),
            Box::new(super::super::MenuScene::new(labels())),
        );
        let button = scenes.active().core().get_component("start").unwrap();
        assert_eq!(button.tag(), Tag::Button);
        let press = button.rect().center();

        scenes.update(&EventToken::from_raw("//d"), press);
        scenes.update(&EventToken::from_raw("//u"), press);

        // the cardgame scene is active now
        assert!(scenes.active().core().get_component("stack").is_some());
        assert!(scenes.active().core().menu_accessible());
    }
}
