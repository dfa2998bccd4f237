//! Software pixel buffer
//!
//! Shapes in logical coordinates are scaled into a buffer whose aspect ratio
//! is preserved by letterboxing. The terminal backend turns pairs of rows into
//! half-block characters.

use glam::Vec2;

use super::shapes::Shape;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::ui::Rgb;

/// Color outside the playfield
pub const LETTERBOX: Rgb = Rgb(0, 0, 0);

/// Mapping from logical coordinates to buffer pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset: Vec2,
}

impl Viewport {
    /// Largest uniform scale that fits the logical screen into `w` x `h`
    pub fn fit(w: usize, h: usize) -> Self {
        let scale = (w as f32 / SCREEN_WIDTH).min(h as f32 / SCREEN_HEIGHT);
        let offset = Vec2::new(
            ((w as f32 - SCREEN_WIDTH * scale) / 2.0).floor(),
            ((h as f32 - SCREEN_HEIGHT * scale) / 2.0).floor(),
        );
        Self { scale, offset }
    }

    #[inline]
    pub fn to_pixels(&self, p: Vec2) -> Vec2 {
        self.offset + p * self.scale
    }

    /// Playfield size in pixels
    pub fn size(&self) -> Vec2 {
        Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT) * self.scale
    }
}

pub struct PixelBuf {
    w: usize,
    h: usize,
    px: Vec<Rgb>,
    view: Viewport,
}

impl PixelBuf {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![LETTERBOX; w * h],
            view: Viewport::fit(w, h),
        }
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.resize(w * h, LETTERBOX);
        self.view = Viewport::fit(w, h);
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn viewport(&self) -> Viewport {
        self.view
    }

    pub fn clear(&mut self) {
        self.px.fill(LETTERBOX);
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    /// Pixel-space rectangle, clipped to the buffer
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    /// Pixel-space disc, clipped to the buffer
    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, c: Rgb) {
        let r2 = r * r;
        let (x0, x1) = ((cx - r).floor() as i32, (cx + r).ceil() as i32);
        let (y0, y1) = ((cy - r).floor() as i32, (cy + r).ceil() as i32);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.set(x, y, c);
                }
            }
        }
    }

    /// Rasterize logical shapes, clipped to the playfield
    pub fn draw_shapes(&mut self, shapes: &[Shape]) {
        let view = self.view;
        let field_min = view.offset;
        let field_max = view.offset + view.size();

        for shape in shapes {
            match *shape {
                Shape::Rect { rect, color } => {
                    let min = view
                        .to_pixels(Vec2::new(rect.x, rect.y))
                        .max(field_min)
                        .round();
                    let max = view
                        .to_pixels(Vec2::new(rect.right(), rect.bottom()))
                        .min(field_max)
                        .round();
                    if max.x > min.x && max.y > min.y {
                        self.fill_rect(
                            min.x as i32,
                            min.y as i32,
                            (max.x - min.x) as i32,
                            (max.y - min.y) as i32,
                            color,
                        );
                    }
                }
                Shape::Circle {
                    center,
                    radius,
                    color,
                } => {
                    let c = view.to_pixels(center);
                    self.fill_circle(c.x, c.y, (radius * view.scale).max(0.5), color);
                }
            }
        }
    }
}
