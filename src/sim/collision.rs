//! Axis-aligned collision primitives
//!
//! Everything in the game collides as a box: the bee uses the square that
//! encloses its circle, pipes are two rectangles around the gap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Bee, Pipe};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `2 * half` centered on `center`
    pub fn centered_square(center: Vec2, half: f32) -> Self {
        Self::new(center.x - half, center.y - half, half * 2.0, half * 2.0)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test. Rectangles that only share an edge do not
    /// intersect, and empty rectangles never intersect anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w <= 0.0 || self.h <= 0.0 || other.w <= 0.0 || other.h <= 0.0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Check if the bee left the playfield vertically
pub fn bee_out_of_bounds(bee: &Bee, screen_height: f32) -> bool {
    bee.pos.y - bee.radius < 0.0 || bee.pos.y + bee.radius > screen_height
}

/// Check if the bee's box overlaps either half of a pipe
pub fn bee_pipe_collision(bee: &Bee, pipe: &Pipe) -> bool {
    let bounds = bee.bounds();
    bounds.intersects(&pipe.upper_rect()) || bounds.intersects(&pipe.lower_rect())
}
