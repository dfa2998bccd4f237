//! Terminal backend
//!
//! Each character cell shows two vertical pixels using the upper half block
//! (foreground is the top pixel, background the bottom one). Text is printed
//! over the pixels afterwards.

use std::io::{self, Write};

use crossterm::{
    cursor, event, execute, queue,
    style::{self, Attribute, Color as CColor},
    terminal,
};
use glam::Vec2;

use super::pixels::PixelBuf;
use super::shapes::scene;
use crate::game::Game;
use crate::sim::GamePhase;
use crate::ui::hud::{LOGO_CENTER_Y, TEXT_CENTER_X};
use crate::ui::{Rgb, TextLine};

fn color(c: Rgb) -> CColor {
    CColor::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

/// Raw mode and alternate screen for as long as the guard lives
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(mut out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            event::EnableMouseCapture,
        )?;
        Ok(Self { out })
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let restored = execute!(
            self.out,
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        if let Err(e) = restored.and_then(|_| terminal::disable_raw_mode()) {
            log::error!("Failed to restore terminal: {}", e);
        }
    }
}

/// Draws a [`Game`] into a grid of `cols` x `rows` character cells
pub struct TerminalRenderer {
    buf: PixelBuf,
}

impl TerminalRenderer {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            buf: PixelBuf::new(cols as usize, rows as usize * 2),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.buf.resize(cols as usize, rows as usize * 2);
    }

    pub fn cols(&self) -> usize {
        self.buf.width()
    }

    pub fn rows(&self) -> usize {
        self.buf.height() / 2
    }

    pub fn draw(&mut self, game: &Game, out: &mut impl Write) -> io::Result<()> {
        self.buf.clear();
        self.buf.draw_shapes(&scene(game));
        self.present(out)?;

        if game.phase() == GamePhase::Start && game.theme.has_logo() {
            let lines = &game.logo.frame().lines;
            let top = self.row_of(LOGO_CENTER_Y) as i32 - lines.len() as i32 / 2;
            let accent = game.theme.accent();
            for (i, line) in lines.iter().enumerate() {
                let row = top + i as i32;
                if row >= 0 {
                    self.print_centered(out, line, row as usize, accent, false)?;
                }
            }
        }

        for line in game.text() {
            self.print_line(out, &line)?;
        }

        queue!(out, style::ResetColor)?;
        out.flush()
    }

    /// Terminal row for a logical y coordinate
    fn row_of(&self, y: f32) -> usize {
        let view = self.buf.viewport();
        (view.to_pixels(Vec2::new(0.0, y)).y / 2.0).max(0.0) as usize
    }

    fn print_line(&self, out: &mut impl Write, line: &TextLine) -> io::Result<()> {
        self.print_centered(out, &line.text, self.row_of(line.y), line.color, line.large)
    }

    fn print_centered(
        &self,
        out: &mut impl Write,
        text: &str,
        row: usize,
        fg: Rgb,
        bold: bool,
    ) -> io::Result<()> {
        if row >= self.rows() || self.cols() == 0 {
            return Ok(());
        }
        let center = self
            .buf
            .viewport()
            .to_pixels(Vec2::new(TEXT_CENTER_X, 0.0))
            .x as usize;
        let chars: Vec<char> = text.chars().collect();
        // Crop long lines to the terminal width, keeping them centered
        let visible = chars.len().min(self.cols());
        let skip = (chars.len() - visible) / 2;
        let col = center.saturating_sub(visible / 2).min(self.cols() - visible);
        let bg = self.buf.get(col, row * 2 + 1);

        queue!(
            out,
            cursor::MoveTo(col as u16, row as u16),
            style::SetForegroundColor(color(fg)),
            style::SetBackgroundColor(color(bg)),
        )?;
        if bold {
            queue!(out, style::SetAttribute(Attribute::Bold))?;
        }
        let visible_text: String = chars[skip..skip + visible].iter().collect();
        queue!(out, style::Print(visible_text))?;
        if bold {
            queue!(out, style::SetAttribute(Attribute::NormalIntensity))?;
        }
        Ok(())
    }

    fn present(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.rows();
        let mut prev_fg = Rgb(0, 0, 0);
        let mut prev_bg = Rgb(0, 0, 0);
        let mut need_fg = true;
        let mut need_bg = true;

        for row in 0..rows {
            for col in 0..self.cols() {
                let top = self.buf.get(col, row * 2);
                let bot = self.buf.get(col, row * 2 + 1);

                if top == bot {
                    if need_bg || prev_bg != top {
                        queue!(out, style::SetBackgroundColor(color(top)))?;
                        prev_bg = top;
                        need_bg = false;
                    }
                    queue!(out, style::Print(' '))?;
                } else {
                    if need_fg || prev_fg != top {
                        queue!(out, style::SetForegroundColor(color(top)))?;
                        prev_fg = top;
                        need_fg = false;
                    }
                    if need_bg || prev_bg != bot {
                        queue!(out, style::SetBackgroundColor(color(bot)))?;
                        prev_bg = bot;
                        need_bg = false;
                    }
                    queue!(out, style::Print('\u{2580}'))?;
                }
            }
            if row + 1 < rows {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                need_fg = true;
                need_bg = true;
            }
        }
        queue!(out, style::ResetColor)
    }
}
