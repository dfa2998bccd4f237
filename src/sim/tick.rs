//! Fixed timestep simulation tick
//!
//! One call to [`tick`] is one frame: queued actions are applied first, then
//! the world advances once if a run is in progress.

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Discrete player input, already mapped from keys/pointer by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Jump, start, restart or confirm the name, depending on phase
    Primary,
    /// Printable character typed during name entry
    Char(char),
    /// Delete the last character of the name
    Backspace,
    /// Leave the game (handled by the frontend)
    Quit,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub actions: Vec<Action>,
}

impl TickInput {
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn primary() -> Self {
        Self {
            actions: vec![Action::Primary],
        }
    }
}

/// Apply one discrete action to the state machine
pub fn apply_action(state: &mut GameState, action: Action) {
    match (state.phase, action) {
        (GamePhase::Start, Action::Primary) => {
            state.phase = GamePhase::Running;
            state.push_event(GameEvent::Started);
            log::debug!("Run started (seed {})", state.seed);
        }
        (GamePhase::Running, Action::Primary) => {
            state.bee.jump();
            state.push_event(GameEvent::Flapped);
        }
        (GamePhase::NameEntry, Action::Char(c)) => {
            state.name_entry.push(c);
        }
        (GamePhase::NameEntry, Action::Backspace) => {
            state.name_entry.pop();
        }
        (GamePhase::NameEntry, Action::Primary) => {
            let name = state.name_entry.commit();
            let score = state.score;
            state.phase = GamePhase::GameOver;
            log::info!("{} finished with {} point(s)", name, score);
            state.push_event(GameEvent::NameCommitted { name, score });
        }
        (GamePhase::GameOver, Action::Primary) => {
            state.reset_run();
            state.phase = GamePhase::Running;
            state.push_event(GameEvent::Restarted);
            log::debug!("Run restarted");
        }
        _ => {}
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    for &action in &input.actions {
        apply_action(state, action);
    }

    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;
    state.bee.tick();

    state.maybe_spawn_pipe();
    let passed = state.pipes.tick_all(state.bee.pos.x);
    if passed > 0 {
        state.score += passed;
        state.push_event(GameEvent::Scored { score: state.score });
    }

    if state.bee.out_of_bounds(SCREEN_HEIGHT) || state.pipes.collides(&state.bee) {
        // Game over goes straight into name capture
        state.phase = GamePhase::NameEntry;
        state.name_entry.clear();
        state.push_event(GameEvent::Crashed { score: state.score });
        log::debug!(
            "Crashed after {} ticks at y={:.1}",
            state.time_ticks,
            state.bee.pos.y
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Pipe;

    /// Steer the bee through the middle of every gap by flapping whenever
    /// it sinks below the center of the nearest upcoming pipe's gap.
    fn autopilot(state: &GameState) -> TickInput {
        let target = state
            .pipes
            .iter()
            .find(|p| p.right() >= state.bee.pos.x - state.bee.radius)
            .map(|p| p.gap_start + PIPE_GAP / 2.0 + 20.0)
            .unwrap_or(SCREEN_HEIGHT / 2.0);
        if state.bee.pos.y > target && state.bee.vel >= 0.0 {
            TickInput::primary()
        } else {
            TickInput::default()
        }
    }

    #[test]
    fn test_tick_start_to_running() {
        let mut state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Start);

        // Ticking on the title screen does nothing
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.time_ticks, 0);

        tick(&mut state, &TickInput::primary());
        assert_eq!(state.phase, GamePhase::Running);
        // Starting does not flap
        assert_eq!(state.bee.vel, GRAVITY);
        assert_eq!(state.drain_events(), vec![GameEvent::Started]);
    }

    #[test]
    fn test_jump_before_tick() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Running;
        apply_action(&mut state, Action::Primary);
        assert_eq!(state.bee.vel, JUMP_VELOCITY);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.bee.vel, JUMP_VELOCITY + GRAVITY);
    }

    #[test]
    fn test_falling_bee_crashes_into_name_entry() {
        let mut state = GameState::new(3);
        tick(&mut state, &TickInput::primary());
        for _ in 0..200 {
            tick(&mut state, &TickInput::default());
            if state.phase != GamePhase::Running {
                break;
            }
        }
        assert_eq!(state.phase, GamePhase::NameEntry);
        assert!(state.bee.pos.y + state.bee.radius > SCREEN_HEIGHT);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::Crashed { score: 0 })
        );

        // Frozen while the name is typed
        let y = state.bee.pos.y;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.bee.pos.y, y);
    }

    #[test]
    fn test_pipe_collision_ends_run() {
        let mut state = GameState::new(3);
        state.phase = GamePhase::Running;
        state.pipes.clear();
        // Gap far below the bee, pipe right on top of it
        state.pipes.push(Pipe::with_gap(BEE_X - 10.0, 400.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::NameEntry);
    }

    #[test]
    fn test_name_entry_commit_and_restart() {
        let mut state = GameState::new(5);
        state.phase = GamePhase::NameEntry;
        state.score = 4;

        let input = TickInput {
            actions: vec![
                Action::Char('A'),
                Action::Char('-'),
                Action::Char('b'),
                Action::Char('c'),
                Action::Backspace,
                Action::Primary,
            ],
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::NameCommitted {
                name: "Ab".to_string(),
                score: 4
            }]
        );

        tick(&mut state, &TickInput::primary());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.pipes.len(), 1);
    }

    #[test]
    fn test_empty_name_commits_default() {
        let mut state = GameState::new(5);
        state.phase = GamePhase::NameEntry;
        tick(&mut state, &TickInput::primary());
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::NameCommitted {
                name: DEFAULT_NAME.to_string(),
                score: 0
            }]
        );
    }

    #[test]
    fn test_autopilot_scores() {
        let mut state = GameState::new(2024);
        tick(&mut state, &TickInput::primary());
        for _ in 0..1500 {
            let input = autopilot(&state);
            tick(&mut state, &input);
            if state.phase != GamePhase::Running {
                break;
            }
        }
        assert!(state.score >= 1, "autopilot never scored");

        let scored: Vec<u32> = state
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                GameEvent::Scored { score } => Some(score),
                _ => None,
            })
            .collect();
        // One event per point, each exactly one higher than the last
        assert!(scored.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput::primary(),
            TickInput::default(),
            TickInput::primary(),
            TickInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.bee.pos, state2.bee.pos);
        let gaps1: Vec<f32> = state1.pipes.iter().map(|p| p.gap_start).collect();
        let gaps2: Vec<f32> = state2.pipes.iter().map(|p| p.gap_start).collect();
        assert_eq!(gaps1, gaps2);
    }
}
