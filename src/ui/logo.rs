//! Animated title logo
//!
//! A logo is a list of text-art frames, each shown for its own duration.
//! Frames can be loaded from a file where every frame starts with a separator
//! line `---` optionally followed by the frame duration in milliseconds:
//!
//! ```text
//! --- 120
//!  (\_/)
//! --- 80
//!  (/_\)
//! ```
//!
//! Lines before the first separator form a frame with the default duration.

use std::path::Path;

/// Default frame duration (seconds) when the source gives none
pub const DEFAULT_FRAME_SECS: f32 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct LogoFrame {
    pub lines: Vec<String>,
    /// Seconds this frame stays on screen
    pub duration: f32,
}

impl LogoFrame {
    pub fn new(lines: &[&str], duration: f32) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            duration,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogoAnimation {
    frames: Vec<LogoFrame>,
    current: usize,
    timer: f32,
}

impl Default for LogoAnimation {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LogoAnimation {
    /// Animation over the given frames; an empty list becomes the placeholder
    pub fn new(frames: Vec<LogoFrame>) -> Self {
        if frames.is_empty() {
            return Self::placeholder();
        }
        Self {
            frames,
            current: 0,
            timer: 0.0,
        }
    }

    /// Two-frame flapping bee shipped with the game
    pub fn builtin() -> Self {
        Self::new(vec![
            LogoFrame::new(&[r"  \  /  ", r"  (oo)  ", r" <(##)> ", r"   ''   "], 0.25),
            LogoFrame::new(&[r"  _  _  ", r"  (oo)  ", r" /(##)\ ", r"   ''   "], 0.25),
        ])
    }

    /// Single-frame stand-in used when the logo asset cannot be loaded
    pub fn placeholder() -> Self {
        Self {
            frames: vec![LogoFrame::new(&["[ LOGO ]"], DEFAULT_FRAME_SECS)],
            current: 0,
            timer: 0.0,
        }
    }

    /// Parse the separator format described in the module docs
    pub fn parse(source: &str) -> Self {
        let mut frames = Vec::new();
        let mut lines: Vec<String> = Vec::new();
        let mut duration = DEFAULT_FRAME_SECS;
        let mut started = false;

        for line in source.lines() {
            if let Some(rest) = line.strip_prefix("---") {
                if started || !lines.is_empty() {
                    frames.push(LogoFrame {
                        lines: std::mem::take(&mut lines),
                        duration,
                    });
                }
                started = true;
                duration = rest
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|ms| *ms > 0)
                    .map(|ms| ms as f32 / 1000.0)
                    .unwrap_or(DEFAULT_FRAME_SECS);
            } else {
                lines.push(line.to_string());
            }
        }
        if started || !lines.is_empty() {
            frames.push(LogoFrame { lines, duration });
        }
        frames.retain(|f| !f.lines.is_empty());
        Self::new(frames)
    }

    /// Load frames from a file, falling back to the placeholder on failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(source) => {
                let logo = Self::parse(&source);
                log::info!("Loaded logo with {} frame(s) from {}", logo.len(), path.display());
                logo
            }
            Err(e) => {
                log::warn!("Error loading logo {}: {}", path.display(), e);
                Self::placeholder()
            }
        }
    }

    /// Advance by `dt` seconds; moves at most one frame per call and restarts
    /// the frame timer on each change.
    pub fn advance(&mut self, dt: f32) {
        self.timer += dt;
        if self.timer >= self.frames[self.current].duration {
            self.current = (self.current + 1) % self.frames.len();
            self.timer = 0.0;
        }
    }

    pub fn frame(&self) -> &LogoFrame {
        &self.frames[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
