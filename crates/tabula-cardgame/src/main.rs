//! Headless demo binary.
//!
//! Builds the scene stack (title → table, menu overlay), drives it with a
//! scripted input session and writes the final composited frame to a PNG.

mod config;
mod gameloop;
mod input;
mod render;
mod scenes;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use tabula_engine::assets::text::{BlockLabels, FontLabels, TextRasterizer};
use tabula_engine::coords::Point;
use tabula_engine::input::EventCode;
use tabula_engine::logging;
use tabula_engine::scene::SceneManager;

use crate::gameloop::Gameloop;
use crate::input::ScriptedInput;
use crate::render::Compositor;

fn main() -> Result<()> {
    logging::init_logging(None);
    log::info!("{} {}x{}", config::TITLE, config::DISPLAY_SIZE.0, config::DISPLAY_SIZE.1);

    let labels = load_labels();
    let scenes = SceneManager::new(
        Box::new(scenes::StartScene::new(labels.clone())),
        Box::new(scenes::MenuScene::new(labels)),
    );
    let compositor =
        Compositor::new(config::DISPLAY_SIZE.0, config::DISPLAY_SIZE.1, config::BACKGROUND);
    let mut game = Gameloop::new(scenes, demo_script(), compositor, config::FPS);

    let ticks = game.run();
    log::info!("demo session finished after {ticks} ticks");

    let out = Path::new("tabula-frame.png");
    game.compositor().save_png(out)?;
    log::info!("final frame written to {}", out.display());
    Ok(())
}

/// Loads the label font, falling back to block labels when it is missing.
fn load_labels() -> Arc<dyn TextRasterizer> {
    match std::fs::read(config::FONT_PATH) {
        Ok(bytes) => match FontLabels::from_bytes(&bytes) {
            Ok(font) => return Arc::new(font),
            Err(err) => log::warn!("{err}; using block labels"),
        },
        Err(err) => {
            log::warn!("no font at {}: {err}; using block labels", config::FONT_PATH);
        }
    }
    Arc::new(BlockLabels::default())
}

/// A short recorded session: start the game, stack a card, open the menu,
/// type a little, quit.
fn demo_script() -> ScriptedInput {
    let mut script = ScriptedInput::new();

    // press START (button centered at x, y = 420..480)
    let start = Point::new(config::DISPLAY_SIZE.0 as i32 / 2, 450);
    script.click(start);

    // drag card_a from the deal row onto the stack zone
    script.press(Point::new(170, 195));
    script.quiet(Point::new(500, 300));
    script.release(Point::new(840, 375));

    // open the menu, type into the echo field, quit
    script.code(EventCode::Escape, Point::zero());
    script.text("gg", Point::zero());
    let quit = Point::new(config::DISPLAY_SIZE.0 as i32 / 2, 450);
    script.click(quit);

    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_engine::prelude::*;

    fn labels() -> Arc<dyn TextRasterizer> {
        Arc::new(BlockLabels::new(8))
    }

    fn demo_game() -> Gameloop<ScriptedInput> {
        let scenes = SceneManager::new(
            Box::new(scenes::StartScene::new(labels())),
            Box::new(scenes::MenuScene::new(labels())),
        );
        let compositor =
            Compositor::new(config::DISPLAY_SIZE.0, config::DISPLAY_SIZE.1, config::BACKGROUND);
        Gameloop::new(scenes, demo_script(), compositor, 1000)
    }

    #[test]
    fn demo_session_runs_to_the_quit_click() {
        let mut game = demo_game();
        let ticks = game.run();
        assert_eq!(ticks, 9); // every scripted tick, ending on the quit release
        assert!(game.scenes().stop());

        // the quit happened on the menu overlay; the echo field tracked the
        // final event (the quit release)
        let core = game.scenes().active().core();
        assert!(core.get_component("quit").is_some());
        assert_eq!(core.get_component("echo").unwrap().text(), Some("//u"));
    }

    #[test]
    fn demo_session_locks_a_card_on_the_stack() {
        let mut scenes = SceneManager::new(
            Box::new(scenes::StartScene::new(labels())),
            Box::new(scenes::MenuScene::new(labels())),
        );
        let mut script = demo_script();
        loop {
            let sample = script.poll();
            if !sample.running {
                break;
            }
            scenes.update(&sample.token, sample.pointer);
        }
        // dismiss the menu to inspect the table underneath
        scenes.update(&EventToken::from_raw("//?"), Point::zero());

        let core = scenes.active().core();
        let stack = core.get_component("stack").unwrap();
        assert_eq!(stack.as_zone().unwrap().occupant(), Some("card_a"));
        assert!(core.get_component("card_a").unwrap().as_dragable().unwrap().is_locked());
    }

    #[test]
    fn demo_frame_is_not_just_background() {
        let mut game = demo_game();
        game.run();
        let bg = config::BACKGROUND.to_rgba();
        let painted =
            game.compositor().surface().pixels().filter(|px| px.0 != bg).count();
        assert!(painted > 0);
    }
}
