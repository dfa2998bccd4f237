//! High score record
//!
//! A single global best (name, score) pair, not a leaderboard. Stored as JSON
//! `{"name": ..., "score": ...}` by every persistence backend.

use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::DEFAULT_NAME;

/// The best run seen so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighScore {
    /// Player's name
    #[serde(deserialize_with = "name_or_default")]
    pub name: String,
    /// Pipes passed
    #[serde(deserialize_with = "score_or_zero")]
    pub score: u32,
}

/// `null` or a blank name reads as the default holder
fn name_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let name = Option::<String>::deserialize(d)?;
    Ok(name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string()))
}

fn score_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(d)?.unwrap_or(0))
}

impl Default for HighScore {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            score: 0,
        }
    }
}

impl HighScore {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Check if a finished run beats the record. Ties never qualify.
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.score
    }

    /// Replace the record if the run qualifies. Returns true if it did.
    pub fn submit(&mut self, name: &str, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.name = if name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            name.to_string()
        };
        self.score = score;
        true
    }

    /// HUD line, e.g. "High Score: 12 by Maya"
    pub fn label(&self) -> String {
        format!("High Score: {} by {}", self.score, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sentinel() {
        let hs = HighScore::default();
        assert_eq!(hs.name, "Anonymous");
        assert_eq!(hs.score, 0);
    }

    #[test]
    fn test_strictly_greater_only() {
        let mut hs = HighScore::new("Ada", 3);
        assert!(!hs.submit("Bob", 2));
        assert!(!hs.submit("Bob", 3));
        assert_eq!(hs, HighScore::new("Ada", 3));

        assert!(hs.submit("Bob", 4));
        assert_eq!(hs, HighScore::new("Bob", 4));
    }

    #[test]
    fn test_zero_never_beats_default() {
        let mut hs = HighScore::default();
        assert!(!hs.submit("Ada", 0));
        assert!(hs.submit("Ada", 1));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&HighScore::new("Ada", 7)).unwrap();
        assert_eq!(json, r#"{"name":"Ada","score":7}"#);
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let hs: HighScore = serde_json::from_str(r#"{"score": 9}"#).unwrap();
        assert_eq!(hs, HighScore::new("Anonymous", 9));

        let hs: HighScore = serde_json::from_str("{}").unwrap();
        assert_eq!(hs, HighScore::default());
    }

    #[test]
    fn test_null_and_blank_fields_fall_back() {
        let hs: HighScore = serde_json::from_str(r#"{"name":null,"score":42}"#).unwrap();
        assert_eq!(hs, HighScore::new("Anonymous", 42));

        let hs: HighScore = serde_json::from_str(r#"{"name":"","score":5}"#).unwrap();
        assert_eq!(hs, HighScore::new("Anonymous", 5));
        assert_eq!(hs.label(), "High Score: 5 by Anonymous");

        let hs: HighScore = serde_json::from_str(r#"{"name":"Ada","score":null}"#).unwrap();
        assert_eq!(hs, HighScore::new("Ada", 0));
    }

    #[test]
    fn test_label() {
        assert_eq!(HighScore::new("Ada", 7).label(), "High Score: 7 by Ada");
    }
}
