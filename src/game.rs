//! Session context
//!
//! Owns everything a running game needs (simulation state, the high score
//! record and its store, theme and logo) so frontends only feed actions in,
//! call [`Game::frame`] once per frame and draw what they read back.

use crate::consts::SIM_DT;
use crate::highscores::HighScore;
use crate::persistence::FallbackStore;
use crate::settings::Settings;
use crate::sim::{Action, GameEvent, GamePhase, GameState, TickInput, tick};
use crate::ui::{LogoAnimation, TextLine, Theme, screen_text};

pub struct Game {
    pub state: GameState,
    pub high_score: HighScore,
    pub theme: Theme,
    pub logo: LogoAnimation,
    store: FallbackStore,
    input: TickInput,
    quit: bool,
}

impl Game {
    /// Create a session and load the current high score from the store
    pub fn new(seed: u64, theme: Theme, store: FallbackStore) -> Self {
        let high_score = store.load_or_default();
        Self {
            state: GameState::new(seed),
            high_score,
            theme,
            logo: LogoAnimation::builtin(),
            store,
            input: TickInput::default(),
            quit: false,
        }
    }

    /// Create a session from runtime settings (store, theme, seed, logo)
    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        let store = FallbackStore::from_settings(settings);
        let mut game = Self::new(seed, settings.theme, store);
        if let Some(path) = &settings.logo_path {
            game.logo = LogoAnimation::load(path);
        }
        game
    }

    /// Queue an action for the next frame
    pub fn handle(&mut self, action: Action) {
        if action == Action::Quit {
            log::info!("Quit requested");
            self.quit = true;
            return;
        }
        self.input.push(action);
    }

    /// Run one frame: apply queued actions, tick, resolve events
    pub fn frame(&mut self) {
        tick(&mut self.state, &self.input);
        self.input.clear();

        for event in self.state.drain_events() {
            self.on_event(event);
        }

        if self.state.phase == GamePhase::Start && self.theme.has_logo() {
            self.logo.advance(SIM_DT);
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Text overlay for the current screen
    pub fn text(&self) -> Vec<TextLine> {
        screen_text(&self.state, &self.high_score, self.theme)
    }

    fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Crashed { score } => {
                log::info!("Game over with {} point(s)", score);
            }
            GameEvent::NameCommitted { name, score } => {
                if self.high_score.submit(&name, score) {
                    log::info!("New high score {} by {}", score, name);
                    self.store.save_best_effort(&self.high_score);
                }
            }
            GameEvent::Scored { score } => log::trace!("Score {}", score),
            GameEvent::Started | GameEvent::Restarted | GameEvent::Flapped => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    fn game_with(stored: Option<HighScore>) -> (Game, MemoryStore) {
        let local = match stored {
            Some(record) => MemoryStore::with_record(record),
            None => MemoryStore::default(),
        };
        let store = FallbackStore::local_only(Box::new(local.clone()));
        (Game::new(11, Theme::Classic, store), local)
    }

    #[test]
    fn test_loads_high_score_on_start() {
        let (game, _) = game_with(Some(HighScore::new("Ada", 3)));
        assert_eq!(game.high_score, HighScore::new("Ada", 3));

        let (game, _) = game_with(None);
        assert_eq!(game.high_score, HighScore::default());
    }

    #[test]
    fn test_quit_is_not_queued() {
        let (mut game, _) = game_with(None);
        game.handle(Action::Quit);
        game.frame();
        assert!(game.quit_requested());
        assert_eq!(game.phase(), GamePhase::Start);
    }

    #[test]
    fn test_logo_animates_only_on_title() {
        let (mut game, _) = game_with(None);
        game.theme = Theme::Gensyn;
        for _ in 0..20 {
            game.frame();
        }
        assert_eq!(game.logo.current_index(), 1);

        game.handle(Action::Primary);
        game.frame();
        let index = game.logo.current_index();
        for _ in 0..60 {
            game.frame();
        }
        assert_eq!(game.logo.current_index(), index);
    }
}
