//! Flappy Bee - a gravity and pipes arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bee physics, pipe stream, collisions, phases)
//! - `game`: Session context tying the simulation to the high score record
//! - `highscores`: The single best (name, score) record
//! - `persistence`: Remote/local/in-memory high score stores with fallback
//! - `platform`: Input mapping and frame pacing
//! - `renderer`: Terminal (native) and canvas (web) drawing
//! - `settings`: Runtime configuration
//! - `ui`: Theme and title logo animation

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::Game;
pub use highscores::HighScore;
pub use settings::{Deployment, Settings};
pub use ui::Theme;

/// Game configuration constants
pub mod consts {
    /// Logical canvas size
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Target frame rate; one simulation tick per frame
    pub const FPS: u32 = 60;
    /// Fixed simulation timestep (seconds)
    pub const SIM_DT: f32 = 1.0 / FPS as f32;
    /// Maximum substeps per animation frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Downward acceleration added to the bee's velocity every tick
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a flap (negative is up)
    pub const JUMP_VELOCITY: f32 = -8.0;

    /// Bee defaults
    pub const BEE_X: f32 = 50.0;
    pub const BEE_START_Y: f32 = SCREEN_HEIGHT / 2.0;
    pub const BEE_RADIUS: f32 = 20.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 200.0;
    pub const PIPE_SPEED: f32 = 3.0;
    /// Minimum distance between the gap and the top/bottom edge
    pub const PIPE_MARGIN: u32 = 100;
    /// A new pipe spawns once the newest one is this far from the right edge
    pub const SPAWN_DISTANCE: f32 = 200.0;
    /// Extra distance for the first pipe of a session
    pub const FIRST_PIPE_OFFSET: f32 = 100.0;

    /// Name entry
    pub const MAX_NAME_LEN: usize = 15;
    pub const DEFAULT_NAME: &str = "Anonymous";
}
