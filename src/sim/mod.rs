//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame
//! - Seeded RNG only
//! - Pipes processed oldest-first, never reordered
//! - No rendering, persistence or platform dependencies

pub mod collision;
pub mod name_entry;
pub mod state;
pub mod stream;
pub mod tick;

pub use collision::{Rect, bee_out_of_bounds, bee_pipe_collision};
pub use name_entry::NameEntry;
pub use state::{Bee, GameEvent, GamePhase, GameState, Pipe};
pub use stream::PipeStream;
pub use tick::{Action, TickInput, apply_action, tick};
