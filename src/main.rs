//! Neon Boost entry point
//!
//! Browser: drives the game from `requestAnimationFrame` and paints a 2D
//! canvas. Native: runs a headless autopilot demo and logs it.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent};

    use neon_boost::persistence::LocalStorageStore;
    use neon_boost::render::{CanvasRenderer, Hud, HudUpdate, Overlay, RenderSink};
    use neon_boost::{Game, Settings};

    /// Browser-side state around the game
    struct App {
        game: Game<LocalStorageStore>,
        renderer: CanvasRenderer,
        hud: Hud,
    }

    impl App {
        /// One display frame: simulate, draw, refresh widgets
        fn frame(&mut self) {
            self.game.frame();
            let snapshot = self.game.snapshot();
            self.renderer.draw(&snapshot);
            let updates = self.hud.update(&snapshot);
            if !updates.is_empty() {
                apply_hud(&updates);
            }
        }

        /// Step to the next quality preset and remember it
        fn cycle_quality(&mut self) {
            let current = self.game.settings().clone();
            let mut settings = Settings::from_preset(current.quality.next());
            settings.particles = current.particles;
            settings.reduced_motion = current.reduced_motion;
            log::info!("Quality preset: {}", settings.quality.as_str());

            settings.save();
            self.renderer.set_settings(settings.clone());
            self.game.set_settings(settings);
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if hidden {
                classes.add_1("hidden")
            } else {
                classes.remove_1("hidden")
            };
        }
    }

    /// Push widget changes into the DOM
    fn apply_hud(updates: &[HudUpdate]) {
        let Some(document) = document() else { return };

        for update in updates {
            match update {
                HudUpdate::Score(text) => set_text(&document, "scoreDisplay", text),
                HudUpdate::HighScore(text) => set_text(&document, "highScoreDisplay", text),
                HudUpdate::Difficulty(label) => set_text(&document, "difficultyDisplay", label),
                HudUpdate::Overlay(overlay) => {
                    set_hidden(&document, "startScreen", *overlay != Overlay::Start);
                    match overlay {
                        Overlay::GameOver(summary) => {
                            set_text(&document, "finalScore", &summary.final_score.to_string());
                            set_text(&document, "finalHighScore", &summary.high_score.to_string());
                            set_hidden(&document, "newHighScore", !summary.new_high_score);
                            set_hidden(&document, "gameOverScreen", false);
                        }
                        _ => set_hidden(&document, "gameOverScreen", true),
                    }
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger unavailable: {e}").into());
        }

        log::info!("Neon Boost starting...");

        let Some(document) = document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #gameCanvas element");
            return;
        };

        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("2D canvas context unavailable");
            return;
        };

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Game::new(seed, LocalStorageStore::new(), settings.clone());
        canvas.set_width(game.session.tuning.world_width as u32);
        canvas.set_height(game.session.tuning.world_height as u32);

        let app = Rc::new(RefCell::new(App {
            game,
            renderer: CanvasRenderer::new(ctx, settings),
            hud: Hud::new(),
        }));

        setup_input_handlers(&document, app.clone());
        request_animation_frame(app);

        log::info!("Neon Boost running!");
    }

    fn setup_input_handlers(document: &Document, app: Rc<RefCell<App>>) {
        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let is_boost_key = matches!(event.code().as_str(), "Space" | "ArrowUp")
                    || matches!(event.key().as_str(), "w" | "W");
                if is_boost_key {
                    event.prevent_default();
                    app.borrow_mut().game.boost();
                } else if matches!(event.key().as_str(), "q" | "Q") {
                    app.borrow_mut().cycle_quality();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().game.boost();
            });
            let _ = document
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start; non-passive so the tap does not also scroll or zoom
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                app.borrow_mut().game.boost();
            });
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;

    use neon_boost::persistence::FileStore;
    use neon_boost::render::{LogSink, RenderSink};
    use neon_boost::sim::{SimEvent, Tuning, autopilot};
    use neon_boost::{Game, QualityPreset, Settings};

    /// Headless Neon Boost demo flown by the autopilot
    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    pub struct Options {
        /// Simulation seed
        #[arg(long, default_value_t = 1)]
        pub seed: u64,

        /// Frames to simulate
        #[arg(long, default_value_t = 3600)]
        pub frames: u64,

        /// Gameplay tuning JSON file
        #[arg(long)]
        pub tuning: Option<PathBuf>,

        /// Settings JSON file
        #[arg(long)]
        pub settings: Option<PathBuf>,

        /// Quality preset (low, medium, high), overrides the settings file
        #[arg(long, value_parser = parse_quality)]
        pub quality: Option<QualityPreset>,

        /// Directory holding the high score file
        #[arg(long)]
        pub data_dir: Option<PathBuf>,
    }

    fn parse_quality(s: &str) -> Result<QualityPreset, String> {
        QualityPreset::parse(s).ok_or_else(|| format!("unknown quality preset '{s}'"))
    }

    fn load_tuning(options: &Options) -> Tuning {
        let Some(path) = &options.tuning else {
            return Tuning::default();
        };
        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
        parsed.unwrap_or_else(|e| {
            log::warn!("Ignoring tuning file {}: {}", path.display(), e);
            Tuning::default()
        })
    }

    /// Fly the autopilot for the requested number of frames
    pub fn run(options: Options) {
        let mut settings = options
            .settings
            .as_deref()
            .map(Settings::load_from)
            .unwrap_or_default();
        if let Some(preset) = options.quality {
            settings.apply_preset(preset);
        }
        let store = options
            .data_dir
            .as_ref()
            .map(FileStore::new)
            .unwrap_or_else(FileStore::in_default_dir);
        log::info!("High score file: {}", store.path().display());

        let mut game = Game::with_tuning(options.seed, store, settings, load_tuning(&options));
        let mut sink = LogSink::new(120);
        let mut runs = 0u32;

        for _ in 0..options.frames {
            if autopilot::wants_boost(&game.session) {
                game.boost();
            }
            for event in game.frame() {
                if let SimEvent::GameOver { summary, .. } = event {
                    runs += 1;
                    println!(
                        "Run {}: score {} (best {}){}",
                        runs,
                        summary.final_score,
                        summary.high_score,
                        if summary.new_high_score { "  NEW HIGH SCORE" } else { "" }
                    );
                    // Straight into the next run
                    game.boost();
                }
            }
            sink.draw(&game.snapshot());
        }

        println!(
            "Demo finished after {} frames: {} crashed runs, current score {}, best {}",
            sink.frames(),
            runs,
            game.session.score,
            game.session.high_score
        );
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    let options = native::Options::parse();

    env_logger::init();
    log::info!("Neon Boost (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` for the web version");

    native::run(options);
}
