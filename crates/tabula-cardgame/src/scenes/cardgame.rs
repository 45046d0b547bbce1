//! The table: two cards, a locking stack zone and a free hand zone.
//!
//! Cards drop into either zone; the stack locks them in place, the hand
//! keeps them draggable. The menu overlay is reachable from here.

use std::sync::Arc;

use tabula_engine::prelude::*;

use crate::config;

pub struct CardgameScene {
    core: SceneCore,
}

impl CardgameScene {
    pub fn new(labels: Arc<dyn TextRasterizer>) -> Self {
        let mut core = SceneCore::new(AssetRegistry::new(config::ASSET_ROOT));
        core.set_menu_accessible(true);

        let title = Textfield::component(
            "table_title",
            "TABLE",
            40,
            20,
            TextStyle::new(32.0, Color::WHITE),
            labels,
        );
        core.register_textfield(title);

        let (zw, zh) = config::ZONE_SIZE;
        core.assets_mut()
            .insert_image("zone_face", Image::solid(zw as u32, zh as u32, config::ZONE_FACE));

        let mut stack = Zone::component("stack", 780, 290, zw, zh).with_image_id("zone_face");
        stack.create_highlight(config::HIGHLIGHT, config::HIGHLIGHT_WIDTH);
        core.register_component(stack);

        let mut hand = Zone::component("hand", 200, 540, zw, zh).with_image_id("zone_face");
        hand.create_highlight(config::HIGHLIGHT, config::HIGHLIGHT_WIDTH);
        core.register_component(hand);

        let (cw, ch) = config::CARD_SIZE;
        core.assets_mut()
            .insert_image("card_face", Image::solid(cw as u32, ch as u32, config::CARD_FACE));

        for (i, id) in ["card_a", "card_b"].into_iter().enumerate() {
            let mut card = Dragable::component(id, 120 + i as i32 * (cw + 40), 120, cw, ch)
                .with_image_id("card_face");
            if let Some(d) = card.as_dragable_mut() {
                d.register_zone("stack", true);
                d.register_zone("hand", false);
            }
            core.register_component(card);
        }

        Self { core }
    }
}

impl Scene for CardgameScene {
    fn core(&self) -> &SceneCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SceneCore {
        &mut self.core
    }

    fn start(&mut self) {
        log::info!("cardgame table active");
    }
}
