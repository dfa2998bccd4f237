//! Player name capture after a crash

use crate::consts::{DEFAULT_NAME, MAX_NAME_LEN};

/// Text buffer for the name-entry screen.
///
/// Only ASCII letters and digits are accepted, up to `MAX_NAME_LEN`
/// characters. Committing an empty buffer yields `DEFAULT_NAME`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameEntry {
    buffer: String,
}

impl NameEntry {
    /// Append a character. Returns false if it was rejected.
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_ascii_alphanumeric() || self.buffer.len() >= MAX_NAME_LEN {
            return false;
        }
        self.buffer.push(c);
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.buffer.pop()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Take the name out of the buffer, substituting the default when empty
    pub fn commit(&mut self) -> String {
        let name = std::mem::take(&mut self.buffer);
        if name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            name
        }
    }
}
