//! High score record in browser LocalStorage

use web_sys::Storage;

use super::{HighScoreStore, PersistenceError};
use crate::highscores::HighScore;

pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "flappy_bee_highscore";

    pub fn open() -> Result<Self, PersistenceError> {
        let storage = web_sys::window()
            .ok_or_else(|| PersistenceError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|e| PersistenceError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| PersistenceError::Unavailable("LocalStorage disabled".into()))?;
        Ok(Self { storage })
    }
}

impl HighScoreStore for LocalStorageStore {
    fn name(&self) -> &'static str {
        "local storage"
    }

    fn load(&self) -> Result<HighScore, PersistenceError> {
        let json = self
            .storage
            .get_item(Self::STORAGE_KEY)
            .map_err(|e| PersistenceError::Unavailable(format!("{:?}", e)))?
            .ok_or(PersistenceError::NotFound)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn save(&self, record: &HighScore) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(record)?;
        self.storage
            .set_item(Self::STORAGE_KEY, &json)
            .map_err(|e| PersistenceError::Unavailable(format!("{:?}", e)))
    }
}
