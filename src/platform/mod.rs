//! Platform abstraction layer
//!
//! Handles native/browser differences for:
//! - Input events (mapped onto [`crate::sim::Action`])
//! - Frame timing

pub mod input;
pub mod time;

pub use input::{map_key_name, map_pointer};
pub use time::{FixedStep, FramePacer, clock_seed};

#[cfg(not(target_arch = "wasm32"))]
pub use input::map_terminal_event;
