//! Text layout for each screen

use super::{TextLine, Theme, YELLOW};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::highscores::HighScore;
use crate::sim::{GamePhase, GameState};

/// Horizontal center all text is aligned on
pub const TEXT_CENTER_X: f32 = SCREEN_WIDTH / 2.0;
/// Vertical center of the logo on the title screen
pub const LOGO_CENTER_Y: f32 = SCREEN_HEIGHT / 2.0 - 100.0;

/// Every text line to draw over the playfield for the current phase
pub fn screen_text(state: &GameState, high: &HighScore, theme: Theme) -> Vec<TextLine> {
    let mid = SCREEN_HEIGHT / 2.0;
    let mut lines = Vec::new();

    match state.phase {
        GamePhase::Start => {
            lines.push(TextLine::new(theme.title(), mid - 50.0, theme.accent(), true));
            lines.push(TextLine::new(
                "Tap the screen or press SPACE to start!",
                mid,
                theme.text(),
                false,
            ));
            push_credits(&mut lines, theme, mid + 30.0);
        }
        GamePhase::Running | GamePhase::GameOver => {
            push_scoreboard(&mut lines, state, high, theme);
            if state.phase == GamePhase::Running {
                lines.push(TextLine::new(
                    "Tap screen or press SPACE to flap!",
                    SCREEN_HEIGHT - 30.0,
                    theme.text(),
                    false,
                ));
            } else {
                lines.push(TextLine::new("Game Over!", mid - 50.0, YELLOW, true));
                lines.push(TextLine::new(
                    format!("Final Score: {}", state.score),
                    mid,
                    theme.text(),
                    false,
                ));
                push_credits(&mut lines, theme, mid + 30.0);
                lines.push(TextLine::new(
                    "Tap screen or press SPACE to restart",
                    SCREEN_HEIGHT - 50.0,
                    theme.text(),
                    false,
                ));
            }
        }
        GamePhase::NameEntry => {
            lines.push(TextLine::new("Enter Your Name:", mid - 50.0, theme.text(), true));
            lines.push(TextLine::new(
                format!("{}_", state.name_entry.as_str()),
                mid,
                theme.accent(),
                true,
            ));
            lines.push(TextLine::new(
                "Press ENTER to submit",
                mid + 50.0,
                theme.text(),
                false,
            ));
        }
    }

    lines
}

fn push_scoreboard(lines: &mut Vec<TextLine>, state: &GameState, high: &HighScore, theme: Theme) {
    lines.push(TextLine::new(
        format!("{}: {}", theme.score_label(), state.score),
        50.0,
        theme.text(),
        true,
    ));
    lines.push(TextLine::new(high.label(), 80.0, theme.text(), false));
}

/// Credits alternate accent and text colors, 30px apart
fn push_credits(lines: &mut Vec<TextLine>, theme: Theme, top: f32) {
    for (i, credit) in theme.credits().iter().enumerate() {
        let color = if i % 2 == 0 { theme.accent() } else { theme.text() };
        lines.push(TextLine::new(*credit, top + i as f32 * 30.0, color, false));
    }
}
