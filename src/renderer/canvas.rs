//! Canvas backend
//!
//! Draws the same logical shapes as the terminal backend with a 2D context,
//! letterboxed into whatever size the canvas element has.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::pixels::Viewport;
use super::shapes::{Shape, scene};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::Game;
use crate::sim::GamePhase;
use crate::ui::TextLine;
use crate::ui::hud::{LOGO_CENTER_Y, TEXT_CENTER_X};

const FONT_LARGE: &str = "bold 36px sans-serif";
const FONT_SMALL: &str = "18px sans-serif";
const FONT_LOGO: &str = "20px monospace";
const LOGO_LINE_HEIGHT: f64 = 22.0;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Attach to the canvas with the given element id
    pub fn attach(id: &str) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;
        Ok(Self { canvas, ctx })
    }

    /// Element input listeners attach to
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Match the backing store to the element's CSS size
    pub fn fit_to_client(&self) {
        let w = self.canvas.client_width().max(1) as u32;
        let h = self.canvas.client_height().max(1) as u32;
        if self.canvas.width() != w || self.canvas.height() != h {
            self.canvas.set_width(w);
            self.canvas.set_height(h);
        }
    }

    pub fn draw(&self, game: &Game) {
        let ctx = &self.ctx;
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        let view = Viewport::fit(w as usize, h as usize);

        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
        ctx.set_fill_style_str("#000000");
        ctx.fill_rect(0.0, 0.0, w, h);

        let scale = view.scale as f64;
        ctx.set_transform(scale, 0.0, 0.0, scale, view.offset.x as f64, view.offset.y as f64)
            .ok();
        ctx.save();
        ctx.begin_path();
        ctx.rect(0.0, 0.0, SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64);
        ctx.clip();

        for shape in scene(game) {
            self.fill_shape(&shape);
        }

        if game.phase() == GamePhase::Start && game.theme.has_logo() {
            let lines = &game.logo.frame().lines;
            let top = LOGO_CENTER_Y as f64 - (lines.len() as f64 - 1.0) * LOGO_LINE_HEIGHT / 2.0;
            ctx.set_font(FONT_LOGO);
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            ctx.set_fill_style_str(&game.theme.accent().css());
            for (i, line) in lines.iter().enumerate() {
                ctx.fill_text(line, TEXT_CENTER_X as f64, top + i as f64 * LOGO_LINE_HEIGHT)
                    .ok();
            }
        }

        for line in game.text() {
            self.fill_line(&line);
        }

        ctx.restore();
    }

    fn fill_shape(&self, shape: &Shape) {
        let ctx = &self.ctx;
        match shape {
            Shape::Rect { rect, color } => {
                ctx.set_fill_style_str(&color.css());
                ctx.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
            }
            Shape::Circle {
                center,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(&color.css());
                ctx.begin_path();
                ctx.arc(
                    center.x as f64,
                    center.y as f64,
                    *radius as f64,
                    0.0,
                    std::f64::consts::TAU,
                )
                .ok();
                ctx.fill();
            }
        }
    }

    fn fill_line(&self, line: &TextLine) {
        let ctx = &self.ctx;
        ctx.set_font(if line.large { FONT_LARGE } else { FONT_SMALL });
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(&line.color.css());
        ctx.fill_text(&line.text, TEXT_CENTER_X as f64, line.y as f64).ok();
    }
}
