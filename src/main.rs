//! Flappy Bee entry point
//!
//! Native builds run in the terminal; the wasm build attaches to a canvas and
//! is driven by `requestAnimationFrame`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use flappy_bee::Game;
    use flappy_bee::platform::{FixedStep, clock_seed, map_key_name, map_pointer};
    use flappy_bee::renderer::CanvasRenderer;
    use flappy_bee::settings::Settings;
    use flappy_bee::sim::Action;

    /// Browser session: the game plus its canvas and frame clock
    struct App {
        game: Game,
        renderer: CanvasRenderer,
        step: FixedStep,
    }

    impl App {
        fn on_action(&mut self, action: Option<Action>) {
            if let Some(action) = action {
                self.game.handle(action);
            }
        }

        /// Run however many ticks the elapsed time asks for, then draw
        fn update(&mut self, time: f64) {
            let steps = self.step.advance(time);
            for _ in 0..steps {
                self.game.frame();
            }
            self.renderer.fit_to_client();
            self.renderer.draw(&self.game);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Bee starting...");

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(clock_seed);

        let renderer = match CanvasRenderer::attach("canvas") {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Canvas setup failed: {:?}", e);
                return;
            }
        };
        renderer.fit_to_client();
        let canvas = renderer.canvas().clone();

        let app = Rc::new(RefCell::new(App {
            game: Game::from_settings(&settings, seed),
            renderer,
            step: FixedStep::default(),
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, app.clone());
        request_animation_frame(app);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                let mut a = app.borrow_mut();
                let action = map_key_name(&event.key(), a.game.phase());
                if action.is_some() {
                    event.prevent_default();
                }
                a.on_action(action);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse, touch and pen: one pointerdown per press
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                if !event.is_primary() {
                    return;
                }
                event.prevent_default();
                let mut a = app.borrow_mut();
                let action = map_pointer(a.game.phase());
                a.on_action(action);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().update(time);
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
mod cli {
    use std::path::PathBuf;

    use clap::Parser;
    use flappy_bee::settings::Settings;
    use flappy_bee::ui::Theme;

    /// Flappy Bee in the terminal
    #[derive(Debug, Parser)]
    #[command(name = "flappy-bee", version, about)]
    pub struct Cli {
        /// High score endpoint (GET and POST)
        #[arg(long, value_name = "URL")]
        pub api_url: Option<String>,

        /// Never contact the high score endpoint
        #[arg(long)]
        pub offline: bool,

        /// Local high score file
        #[arg(long, value_name = "PATH")]
        pub highscore_file: Option<PathBuf>,

        /// Visual variant: classic or gensyn
        #[arg(long, value_parser = parse_theme)]
        pub theme: Option<Theme>,

        /// Fixed seed for the pipe sequence
        #[arg(long)]
        pub seed: Option<u64>,

        /// Frames per second
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=240))]
        pub fps: Option<u32>,

        /// Text-art logo frames for the title screen
        #[arg(long, value_name = "PATH")]
        pub logo: Option<PathBuf>,
    }

    fn parse_theme(s: &str) -> Result<Theme, String> {
        Theme::from_str(s).ok_or_else(|| format!("unknown theme '{}'", s))
    }

    impl Cli {
        /// Flags win over the environment
        pub fn apply(self, settings: &mut Settings) {
            if let Some(url) = self.api_url {
                settings.api_url = url;
            }
            if self.offline {
                settings.remote = false;
            }
            if let Some(path) = self.highscore_file {
                settings.highscore_path = path;
            }
            if let Some(theme) = self.theme {
                settings.theme = theme;
            }
            if self.seed.is_some() {
                settings.seed = self.seed;
            }
            if let Some(fps) = self.fps {
                settings.fps = fps;
            }
            if self.logo.is_some() {
                settings.logo_path = self.logo;
            }
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::stdout;
    use std::time::Duration;

    use clap::Parser;
    use crossterm::event::{self, Event};
    use crossterm::terminal;
    use flappy_bee::Game;
    use flappy_bee::platform::{FramePacer, clock_seed, map_terminal_event};
    use flappy_bee::renderer::{TerminalGuard, TerminalRenderer};
    use flappy_bee::settings::Settings;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut settings = Settings::from_env();
    cli::Cli::parse().apply(&mut settings);

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Flappy Bee (native) starting with seed {}", seed);

    // Loads the high score before the screen is taken over
    let mut game = Game::from_settings(&settings, seed);

    let mut term = TerminalGuard::enter(stdout())?;
    let (cols, rows) = terminal::size()?;
    let mut renderer = TerminalRenderer::new(cols, rows);
    let mut pacer = FramePacer::new(settings.frame_duration());

    while !game.quit_requested() {
        pacer.begin();

        // Input
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Resize(c, r) => renderer.resize(c, r),
                ev => {
                    if let Some(action) = map_terminal_event(&ev, game.phase()) {
                        game.handle(action);
                    }
                }
            }
        }

        // Update
        game.frame();

        // Render
        renderer.draw(&game, term.out())?;

        pacer.wait();
    }

    drop(term);
    log::info!("Bye");
    Ok(())
}
