//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::name_entry::NameEntry;
use super::stream::PipeStream;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first primary action
    Start,
    /// Active gameplay
    Running,
    /// Run ended, waiting for restart
    GameOver,
    /// Run ended, capturing the player's name before resolving the high score
    NameEntry,
}

/// Something the session context may want to react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Flapped,
    Scored { score: u32 },
    Crashed { score: u32 },
    NameCommitted { name: String, score: u32 },
    Restarted,
}

/// The player-controlled bee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bee {
    /// Center position; x never changes during a session
    pub pos: Vec2,
    /// Vertical velocity (pixels per tick, positive is down)
    pub vel: f32,
    /// Collision half-extent
    pub radius: f32,
}

impl Default for Bee {
    fn default() -> Self {
        Self::new()
    }
}

impl Bee {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(BEE_X, BEE_START_Y),
            vel: 0.0,
            radius: BEE_RADIUS,
        }
    }

    /// Flap: replaces the current velocity with the jump impulse
    pub fn jump(&mut self) {
        self.vel = JUMP_VELOCITY;
    }

    /// Integrate gravity for one tick
    pub fn tick(&mut self) {
        self.vel += GRAVITY;
        self.pos.y += self.vel;
    }

    /// Square hit box enclosing the bee
    pub fn bounds(&self) -> Rect {
        Rect::centered_square(self.pos, self.radius)
    }

    /// Past the top or bottom edge
    pub fn out_of_bounds(&self, height: f32) -> bool {
        super::collision::bee_out_of_bounds(self, height)
    }
}

/// A pair of pipes with a passable gap between them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Top of the gap (bottom of the upper pipe)
    pub gap_start: f32,
    /// Set once the bee has flown past; guards against double scoring
    pub passed: bool,
}

impl Pipe {
    /// Create a pipe at `x` with a gap drawn uniformly from the allowed range
    pub fn new<R: Rng + ?Sized>(x: f32, rng: &mut R) -> Self {
        let max_start = SCREEN_HEIGHT as u32 - PIPE_GAP as u32 - PIPE_MARGIN;
        let gap_start = rng.random_range(PIPE_MARGIN..=max_start) as f32;
        Self::with_gap(x, gap_start)
    }

    /// Create a pipe with a fixed gap position
    pub fn with_gap(x: f32, gap_start: f32) -> Self {
        Self {
            x,
            gap_start,
            passed: false,
        }
    }

    pub fn tick(&mut self) {
        self.x -= PIPE_SPEED;
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Fully past the left edge of the screen
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }

    /// Mark the pipe passed the first time its right edge is behind the bee.
    /// Returns true exactly once per pipe.
    pub fn check_passed(&mut self, bee_x: f32) -> bool {
        if !self.passed && self.right() < bee_x {
            self.passed = true;
            return true;
        }
        false
    }

    pub fn upper_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, PIPE_WIDTH, self.gap_start)
    }

    pub fn lower_rect(&self) -> Rect {
        let top = self.gap_start + PIPE_GAP;
        Rect::new(self.x, top, PIPE_WIDTH, SCREEN_HEIGHT - top)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed of the current run
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    /// Ticks simulated while running (reset on restart)
    pub time_ticks: u64,
    pub bee: Bee,
    pub pipes: PipeStream,
    /// Name buffer, only meaningful in `NameEntry`
    pub name_entry: NameEntry,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new session on the title screen
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let pipes = PipeStream::new(&mut rng);
        Self {
            seed,
            phase: GamePhase::Start,
            score: 0,
            time_ticks: 0,
            bee: Bee::new(),
            pipes,
            name_entry: NameEntry::default(),
            events: Vec::new(),
            rng,
        }
    }

    /// Put a fresh bee, a fresh pipe stream and a zero score in place.
    /// The RNG keeps running so consecutive runs get different pipes.
    pub fn reset_run(&mut self) {
        self.bee = Bee::new();
        self.pipes = PipeStream::new(&mut self.rng);
        self.score = 0;
        self.time_ticks = 0;
        self.name_entry.clear();
    }

    /// Spawn a pipe if the stream asks for one
    pub fn maybe_spawn_pipe(&mut self) -> bool {
        self.pipes.maybe_spawn(&mut self.rng)
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_sets_velocity_exactly() {
        let mut bee = Bee::new();
        assert_eq!(bee.vel, 0.0);
        bee.jump();
        assert_eq!(bee.vel, JUMP_VELOCITY);

        // No accumulation
        bee.jump();
        assert_eq!(bee.vel, JUMP_VELOCITY);

        // Falling fast does not matter either
        bee.vel = 12.0;
        bee.jump();
        assert_eq!(bee.vel, JUMP_VELOCITY);
    }

    #[test]
    fn test_bee_tick_integrates_velocity_first() {
        let mut bee = Bee::new();
        bee.tick();
        assert_eq!(bee.vel, GRAVITY);
        assert_eq!(bee.pos.y, BEE_START_Y + GRAVITY);
        assert_eq!(bee.pos.x, BEE_X);
    }

    #[test]
    fn test_bee_bounds() {
        let bee = Bee::new();
        let b = bee.bounds();
        assert_eq!(b, Rect::new(BEE_X - 20.0, BEE_START_Y - 20.0, 40.0, 40.0));
    }

    #[test]
    fn test_pipe_offscreen_after_154_ticks() {
        let mut pipe = Pipe::with_gap(400.0, 200.0);
        for _ in 0..153 {
            pipe.tick();
            assert!(!pipe.is_offscreen());
        }
        pipe.tick();
        assert!(pipe.is_offscreen());
    }

    #[test]
    fn test_pipe_rects() {
        let pipe = Pipe::with_gap(120.0, 150.0);
        assert_eq!(pipe.upper_rect(), Rect::new(120.0, 0.0, PIPE_WIDTH, 150.0));
        assert_eq!(
            pipe.lower_rect(),
            Rect::new(120.0, 350.0, PIPE_WIDTH, SCREEN_HEIGHT - 350.0)
        );
    }

    #[test]
    fn test_check_passed_once() {
        let mut pipe = Pipe::with_gap(BEE_X - PIPE_WIDTH, 200.0);
        // Right edge equals bee x: not passed yet
        assert!(!pipe.check_passed(BEE_X));
        pipe.tick();
        assert!(pipe.check_passed(BEE_X));
        assert!(!pipe.check_passed(BEE_X));
        pipe.tick();
        assert!(!pipe.check_passed(BEE_X));
    }

    #[test]
    fn test_reset_run() {
        let mut state = GameState::new(7);
        state.score = 9;
        state.bee.pos.y = 10.0;
        state.pipes.clear();
        state.reset_run();
        assert_eq!(state.score, 0);
        assert_eq!(state.bee.pos.y, BEE_START_Y);
        assert_eq!(state.pipes.len(), 1);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn velocity_and_height_follow_closed_form(n in 0u32..200, v0 in -8.0f32..8.0) {
                let mut bee = Bee::new();
                bee.vel = v0;
                let y0 = bee.pos.y;
                for _ in 0..n {
                    bee.tick();
                }
                let n_f = n as f32;
                let expected_vel = v0 + n_f * GRAVITY;
                let expected_y = y0 + n_f * v0 + GRAVITY * n_f * (n_f + 1.0) / 2.0;
                prop_assert!((bee.vel - expected_vel).abs() < 1e-2);
                prop_assert!((bee.pos.y - expected_y).abs() < 1e-4 * expected_y.abs().max(100.0));
                prop_assert_eq!(bee.pos.x, BEE_X);
            }

            #[test]
            fn pipe_moves_by_speed_and_is_removed_only_when_offscreen(start in 0u32..1000) {
                let mut pipe = Pipe::with_gap(start as f32, 200.0);
                let mut prev = pipe.x;
                while !pipe.is_offscreen() {
                    pipe.tick();
                    prop_assert_eq!(prev - pipe.x, PIPE_SPEED);
                    prev = pipe.x;
                }
                prop_assert!(pipe.x + PIPE_WIDTH < 0.0);
                prop_assert!(pipe.x + PIPE_SPEED + PIPE_WIDTH >= 0.0);
            }

            #[test]
            fn gap_stays_in_range(seed in any::<u64>()) {
                let mut rng = Pcg32::seed_from_u64(seed);
                for _ in 0..32 {
                    let pipe = Pipe::new(SCREEN_WIDTH, &mut rng);
                    prop_assert!(pipe.gap_start >= PIPE_MARGIN as f32);
                    prop_assert!(pipe.gap_start <= SCREEN_HEIGHT - PIPE_GAP - PIPE_MARGIN as f32);
                    prop_assert_eq!(pipe.gap_start.fract(), 0.0);
                }
            }

            #[test]
            fn each_pipe_scores_once(start in 60u32..600, extra in 0u32..400) {
                let mut pipe = Pipe::with_gap(start as f32, 200.0);
                let mut count = 0;
                for _ in 0..(start / 3 + 60 + extra) {
                    pipe.tick();
                    if pipe.check_passed(BEE_X) {
                        count += 1;
                    }
                }
                prop_assert_eq!(count, 1);
                prop_assert!(pipe.passed);
            }
        }
    }
}
