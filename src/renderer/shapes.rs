//! Shape generation for 2D primitives
//!
//! The world is described as a flat list of filled shapes in logical
//! coordinates (400x600, y down). Each backend only needs to know how to fill
//! a rectangle and a circle.

use glam::Vec2;

use crate::consts::{PIPE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::Game;
use crate::sim::{Bee, GamePhase, Pipe, Rect};
use crate::ui::{AvatarStyle, PIPE_CAP_HEIGHT, Rgb, Theme};

/// Number of horizontal bands the background gradient is split into
const BACKGROUND_BANDS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect { rect: Rect, color: Rgb },
    Circle { center: Vec2, radius: f32, color: Rgb },
}

/// Vertical gradient between the theme's two background colors
pub fn background(theme: Theme) -> Vec<Shape> {
    let band_h = SCREEN_HEIGHT / BACKGROUND_BANDS as f32;
    (0..BACKGROUND_BANDS)
        .map(|i| {
            let t = (i * 256 / BACKGROUND_BANDS.max(1)) as u16;
            Shape::Rect {
                rect: Rect::new(0.0, i as f32 * band_h, SCREEN_WIDTH, band_h),
                color: Rgb::lerp(theme.background(), theme.background_low(), t),
            }
        })
        .collect()
}

/// Upper and lower pipe with a cap band on the gap side of each
pub fn pipe(pipe: &Pipe, theme: Theme) -> Vec<Shape> {
    let upper = pipe.upper_rect();
    let lower = pipe.lower_rect();
    let cap_h = PIPE_CAP_HEIGHT.min(upper.h).min(lower.h);
    vec![
        Shape::Rect {
            rect: upper,
            color: theme.pipe(),
        },
        Shape::Rect {
            rect: Rect::new(pipe.x, upper.bottom() - cap_h, PIPE_WIDTH, cap_h),
            color: theme.pipe_cap(),
        },
        Shape::Rect {
            rect: lower,
            color: theme.pipe(),
        },
        Shape::Rect {
            rect: Rect::new(pipe.x, lower.y, PIPE_WIDTH, cap_h),
            color: theme.pipe_cap(),
        },
    ]
}

/// The bee; `frame` drives the wing flap of the sprite style
pub fn bee(bee: &Bee, theme: Theme, frame: u64) -> Vec<Shape> {
    let c = bee.pos;
    let r = bee.radius;
    let body = Shape::Circle {
        center: c,
        radius: r,
        color: theme.bee(),
    };

    match theme.avatar() {
        AvatarStyle::Circle => vec![body],
        AvatarStyle::Sprite => {
            let stripe = theme.bee_stripe();
            let wing_lift = if frame % 8 < 4 { 0.0 } else { r * 0.2 };
            vec![
                // Wing behind the body
                Shape::Circle {
                    center: c + Vec2::new(-r * 0.2, -r * 0.8 + wing_lift),
                    radius: r * 0.5,
                    color: Rgb(230, 240, 255),
                },
                body,
                Shape::Rect {
                    rect: Rect::new(c.x - r * 0.45, c.y - r * 0.8, r * 0.2, r * 1.6),
                    color: stripe,
                },
                Shape::Rect {
                    rect: Rect::new(c.x + 0.05 * r, c.y - r * 0.85, r * 0.2, r * 1.7),
                    color: stripe,
                },
                // Stinger
                Shape::Rect {
                    rect: Rect::new(c.x - r * 1.2, c.y - r * 0.1, r * 0.25, r * 0.2),
                    color: stripe,
                },
                // Eye
                Shape::Circle {
                    center: c + Vec2::new(r * 0.55, -r * 0.25),
                    radius: r * 0.15,
                    color: stripe,
                },
            ]
        }
    }
}

/// Everything under the text overlay for the current phase. The title screen
/// shows only the background; the logo is drawn as text.
pub fn scene(game: &Game) -> Vec<Shape> {
    let mut shapes = background(game.theme);
    if game.phase() == GamePhase::Start {
        return shapes;
    }
    for p in &game.state.pipes {
        shapes.extend(pipe(p, game.theme));
    }
    shapes.extend(bee(&game.state.bee, game.theme, game.state.time_ticks));
    shapes
}
