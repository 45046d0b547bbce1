//! The host loop: poll input, update scenes, composite, pace.

use std::time::Duration;

use tabula_engine::input::InputSource;
use tabula_engine::scene::SceneManager;

use crate::render::Compositor;

pub struct Gameloop<I: InputSource> {
    scenes: SceneManager,
    input: I,
    compositor: Compositor,
    frame_time: Duration,
}

impl<I: InputSource> Gameloop<I> {
    pub fn new(scenes: SceneManager, input: I, compositor: Compositor, fps: u32) -> Self {
        let frame_time = Duration::from_millis(u64::from(1000 / fps.max(1)));
        Self { scenes, input, compositor, frame_time }
    }

    /// Runs until the input source stops delivering or a scene requests a
    /// stop. Returns the number of ticks processed.
    pub fn run(&mut self) -> u64 {
        let mut ticks = 0;
        loop {
            let sample = self.input.poll();
            if !sample.running {
                log::info!("input source finished after {ticks} ticks");
                break;
            }
            self.scenes.update(&sample.token, sample.pointer);
            let context = self.scenes.rendering_context();
            self.compositor.run(&context);
            ticks += 1;
            if self.scenes.stop() {
                log::info!("stop requested after {ticks} ticks");
                break;
            }
            std::thread::sleep(self.frame_time);
        }
        ticks
    }

    #[inline]
    pub fn scenes(&self) -> &SceneManager {
        &self.scenes
    }

    #[inline]
    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::input::ScriptedInput;
    use std::sync::Arc;
    use tabula_engine::assets::registry::AssetRegistry;
    use tabula_engine::assets::text::{BlockLabels, TextStyle};
    use tabula_engine::components::button::Button;
    use tabula_engine::components::textfield::Textfield;
    use tabula_engine::coords::Point;
    use tabula_engine::scene::{Scene, SceneCore};

    struct Quit {
        core: SceneCore,
    }

    impl Quit {
        fn new() -> Box<Self> {
            let mut core = SceneCore::new(AssetRegistry::new("assets"));
            let labels = Arc::new(BlockLabels::new(4));
            let label =
                Textfield::component("quit_label", "x", 0, 0, TextStyle::default(), labels);
            let button = Button::component(
                "quit",
                10,
                10,
                40,
                20,
                label,
                Box::new(|ctx| ctx.stop = true),
            );
            core.register_button(button);
            Box::new(Self { core })
        }
    }

    impl Scene for Quit {
        fn core(&self) -> &SceneCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut SceneCore {
            &mut self.core
        }
    }

    fn loop_with(script: ScriptedInput) -> Gameloop<ScriptedInput> {
        let scenes = SceneManager::new(Quit::new(), Quit::new());
        let compositor = Compositor::new(64, 64, config::BACKGROUND);
        Gameloop::new(scenes, script, compositor, 1000)
    }

    #[test]
    fn stops_when_the_script_runs_out() {
        let mut script = ScriptedInput::new();
        script.quiet(Point::zero());
        script.quiet(Point::zero());

        let mut game = loop_with(script);
        assert_eq!(game.run(), 2);
        assert_eq!(game.scenes().active().core().frame(), 2);
    }

    #[test]
    fn stops_when_a_scene_requests_it() {
        let mut script = ScriptedInput::new();
        script.click(Point::new(20, 20)); // the quit button
        script.quiet(Point::zero());
        script.quiet(Point::zero());

        let mut game = loop_with(script);
        assert_eq!(game.run(), 2); // press + release, then the loop exits
        assert!(game.scenes().stop());
    }
}
