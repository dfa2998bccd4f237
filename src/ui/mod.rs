//! Presentation data shared by every frontend
//!
//! The two visual variants of the game are expressed as a [`Theme`]; the
//! renderers only read colors, labels and the avatar style from it.

pub mod hud;
pub mod logo;

pub use hud::screen_text;
pub use logo::{LogoAnimation, LogoFrame};

use serde::{Deserialize, Serialize};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear blend, `t_256` in 0..=256
    pub const fn lerp(a: Rgb, b: Rgb, t_256: u16) -> Rgb {
        let t = t_256 as i32;
        Rgb(
            (a.0 as i32 + (b.0 as i32 - a.0 as i32) * t / 256) as u8,
            (a.1 as i32 + (b.1 as i32 - a.1 as i32) * t / 256) as u8,
            (a.2 as i32 + (b.2 as i32 - a.2 as i32) * t / 256) as u8,
        )
    }

    /// CSS color string for canvas fill styles
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.0, self.1, self.2)
    }
}

pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const YELLOW: Rgb = Rgb(255, 255, 0);

/// How the bee is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarStyle {
    /// Plain filled circle
    Circle,
    /// Striped bee sprite with wings
    Sprite,
}

/// Visual variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    /// Sky background, green pipes, circle avatar
    #[default]
    Classic,
    /// Dark background, white pipes with pink caps, bee sprite and animated logo
    Gensyn,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Gensyn => "gensyn",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "plain" => Some(Theme::Classic),
            "gensyn" | "bee" => Some(Theme::Gensyn),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Theme::Classic => "Flappy Bee",
            Theme::Gensyn => "Flappy Bee: Gensyn AI Edition",
        }
    }

    /// Prefix of the live score line
    pub fn score_label(&self) -> &'static str {
        match self {
            Theme::Classic => "Score",
            Theme::Gensyn => "Models Trained",
        }
    }

    /// Extra lines under the title and game-over text
    pub fn credits(&self) -> &'static [&'static str] {
        match self {
            Theme::Classic => &[],
            Theme::Gensyn => &["Powered by boogyman", "@gensynai"],
        }
    }

    pub fn avatar(&self) -> AvatarStyle {
        match self {
            Theme::Classic => AvatarStyle::Circle,
            Theme::Gensyn => AvatarStyle::Sprite,
        }
    }

    /// Whether the title screen shows the animated logo
    pub fn has_logo(&self) -> bool {
        matches!(self, Theme::Gensyn)
    }

    pub fn background(&self) -> Rgb {
        match self {
            Theme::Classic => Rgb(112, 197, 206),
            Theme::Gensyn => Rgb(35, 8, 0),
        }
    }

    /// Lower part of the background gradient
    pub fn background_low(&self) -> Rgb {
        match self {
            Theme::Classic => Rgb(190, 232, 245),
            Theme::Gensyn => Rgb(35, 8, 0),
        }
    }

    pub fn pipe(&self) -> Rgb {
        match self {
            Theme::Classic => Rgb(100, 170, 40),
            Theme::Gensyn => WHITE,
        }
    }

    /// Band drawn at the gap side of each pipe
    pub fn pipe_cap(&self) -> Rgb {
        match self {
            Theme::Classic => Rgb(60, 100, 20),
            Theme::Gensyn => Rgb(250, 215, 209),
        }
    }

    pub fn bee(&self) -> Rgb {
        match self {
            Theme::Classic => Rgb(245, 200, 66),
            Theme::Gensyn => Rgb(255, 200, 40),
        }
    }

    pub fn bee_stripe(&self) -> Rgb {
        Rgb(30, 20, 10)
    }

    pub fn text(&self) -> Rgb {
        WHITE
    }

    /// Title and highlighted text
    pub fn accent(&self) -> Rgb {
        match self {
            Theme::Classic => Rgb(245, 200, 66),
            Theme::Gensyn => Rgb(250, 215, 209),
        }
    }
}

/// Text lines of one screen, top to bottom, with their vertical position in
/// logical pixels. Both renderers draw these the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub y: f32,
    pub color: Rgb,
    pub large: bool,
}

impl TextLine {
    pub fn new(text: impl Into<String>, y: f32, color: Rgb, large: bool) -> Self {
        Self {
            text: text.into(),
            y,
            color,
            large,
        }
    }
}

/// Height of the cap band on each pipe
pub const PIPE_CAP_HEIGHT: f32 = 20.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_str() {
        assert_eq!(Theme::from_str("Gensyn"), Some(Theme::Gensyn));
        assert_eq!(Theme::from_str(" classic "), Some(Theme::Classic));
        assert_eq!(Theme::from_str("neon"), None);
        for theme in [Theme::Classic, Theme::Gensyn] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn test_rgb_lerp_endpoints() {
        let a = Rgb(0, 100, 200);
        let b = Rgb(200, 100, 0);
        assert_eq!(Rgb::lerp(a, b, 0), a);
        assert_eq!(Rgb::lerp(a, b, 256), b);
        assert_eq!(Rgb::lerp(a, b, 128), Rgb(100, 100, 100));
    }

    #[test]
    fn test_css() {
        assert_eq!(Rgb(1, 2, 3).css(), "rgb(1,2,3)");
    }
}
