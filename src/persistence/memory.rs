//! In-process high score store
//!
//! Clones share the same record, so a caller can keep a handle to a store it
//! handed off and inspect what was written.

use std::cell::RefCell;
use std::rc::Rc;

use super::{HighScoreStore, PersistenceError};
use crate::highscores::HighScore;

#[derive(Debug, Default)]
struct Inner {
    record: Option<HighScore>,
    saves: u32,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStore {
    pub fn with_record(record: HighScore) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().record = Some(record);
        store
    }

    /// Current record, if any was stored
    pub fn record(&self) -> Option<HighScore> {
        self.inner.borrow().record.clone()
    }

    /// Number of successful `save` calls
    pub fn saves(&self) -> u32 {
        self.inner.borrow().saves
    }
}

impl HighScoreStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn load(&self) -> Result<HighScore, PersistenceError> {
        self.inner
            .borrow()
            .record
            .clone()
            .ok_or(PersistenceError::NotFound)
    }

    fn save(&self, record: &HighScore) -> Result<(), PersistenceError> {
        let mut inner = self.inner.borrow_mut();
        inner.record = Some(record.clone());
        inner.saves += 1;
        Ok(())
    }
}
