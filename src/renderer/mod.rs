//! Rendering
//!
//! The scene is described once as logical [`shapes`] and drawn by one backend
//! per target: truecolor half-block cells in a terminal, or a 2D canvas in the
//! browser.

pub mod pixels;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

pub use pixels::{PixelBuf, Viewport};
pub use shapes::{Shape, scene};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
#[cfg(not(target_arch = "wasm32"))]
pub use terminal::{TerminalGuard, TerminalRenderer};
