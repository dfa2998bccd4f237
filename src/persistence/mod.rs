//! High score persistence
//!
//! One strategy trait with interchangeable backends:
//! - `HttpStore`: remote endpoint (`GET`/`POST` of a JSON record)
//! - `FileStore`: JSON file on disk (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm)
//! - `MemoryStore`: in-process record
//!
//! `FallbackStore` chains a remote backend in front of a local one. Every
//! call is a single synchronous attempt per backend; failures are logged and
//! never reach the player.

pub mod http;
pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

use thiserror::Error;

use crate::highscores::HighScore;
use crate::settings::Settings;

pub use http::HttpStore;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Why a backend could not load or save the record
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("malformed high score record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no stored high score")]
    NotFound,
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A place the high score record can be read from and written to
pub trait HighScoreStore {
    /// Short backend name for log lines
    fn name(&self) -> &'static str;

    fn load(&self) -> Result<HighScore, PersistenceError>;

    fn save(&self, record: &HighScore) -> Result<(), PersistenceError>;
}

/// Remote-first store with a local fallback
pub struct FallbackStore {
    remote: Option<Box<dyn HighScoreStore>>,
    local: Box<dyn HighScoreStore>,
}

impl FallbackStore {
    pub fn new(remote: Option<Box<dyn HighScoreStore>>, local: Box<dyn HighScoreStore>) -> Self {
        Self { remote, local }
    }

    /// Local backend only (remote disabled or not configured)
    pub fn local_only(local: Box<dyn HighScoreStore>) -> Self {
        Self::new(None, local)
    }

    /// Build the store described by the runtime settings
    pub fn from_settings(settings: &Settings) -> Self {
        let remote: Option<Box<dyn HighScoreStore>> = if settings.remote_enabled() {
            Some(Box::new(HttpStore::new(
                settings.api_url.clone(),
                settings.http_timeout(),
            )))
        } else {
            log::info!("Remote high score disabled");
            None
        };
        Self::new(remote, local_store(settings))
    }

    /// Remote, then local, then the default record
    pub fn load_or_default(&self) -> HighScore {
        if let Some(remote) = &self.remote {
            match remote.load() {
                Ok(record) => {
                    log::info!(
                        "Loaded high score {} by {} from {}",
                        record.score,
                        record.name,
                        remote.name()
                    );
                    return record;
                }
                Err(e) => log::warn!("Could not load high score from {}: {}", remote.name(), e),
            }
        }

        match self.local.load() {
            Ok(record) => {
                log::info!(
                    "Loaded high score {} by {} from {}",
                    record.score,
                    record.name,
                    self.local.name()
                );
                record
            }
            Err(PersistenceError::NotFound) => {
                log::info!("No high score found, starting fresh");
                HighScore::default()
            }
            Err(e) => {
                log::warn!("Could not load high score from {}: {}", self.local.name(), e);
                HighScore::default()
            }
        }
    }

    /// Remote, falling back to local on failure. Returns true if any backend
    /// accepted the record.
    pub fn save_best_effort(&self, record: &HighScore) -> bool {
        if let Some(remote) = &self.remote {
            match remote.save(record) {
                Ok(()) => {
                    log::info!("High score saved to {}", remote.name());
                    return true;
                }
                Err(e) => log::warn!("Could not save high score to {}: {}", remote.name(), e),
            }
        }

        match self.local.save(record) {
            Ok(()) => {
                log::info!("High score saved to {}", self.local.name());
                true
            }
            Err(e) => {
                log::warn!("Could not save high score to {}: {}", self.local.name(), e);
                false
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn local_store(settings: &Settings) -> Box<dyn HighScoreStore> {
    Box::new(FileStore::new(settings.highscore_path.clone()))
}

#[cfg(target_arch = "wasm32")]
fn local_store(_settings: &Settings) -> Box<dyn HighScoreStore> {
    match LocalStorageStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("LocalStorage unavailable ({}), keeping high score in memory", e);
            Box::new(MemoryStore::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that fails every call
    struct Broken;

    impl HighScoreStore for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn load(&self) -> Result<HighScore, PersistenceError> {
            Err(PersistenceError::Http("connection refused".into()))
        }

        fn save(&self, _record: &HighScore) -> Result<(), PersistenceError> {
            Err(PersistenceError::Status(503))
        }
    }

    #[test]
    fn test_load_prefers_remote() {
        let remote = MemoryStore::with_record(HighScore::new("Remote", 10));
        let local = MemoryStore::with_record(HighScore::new("Local", 4));
        let store = FallbackStore::new(Some(Box::new(remote)), Box::new(local));
        assert_eq!(store.load_or_default(), HighScore::new("Remote", 10));
    }

    #[test]
    fn test_load_falls_back_to_local() {
        let local = MemoryStore::with_record(HighScore::new("Local", 4));
        let store = FallbackStore::new(Some(Box::new(Broken)), Box::new(local));
        assert_eq!(store.load_or_default(), HighScore::new("Local", 4));
    }

    #[test]
    fn test_load_defaults_when_everything_fails() {
        let store = FallbackStore::new(Some(Box::new(Broken)), Box::new(MemoryStore::default()));
        assert_eq!(store.load_or_default(), HighScore::default());

        let store = FallbackStore::local_only(Box::new(Broken));
        assert_eq!(store.load_or_default(), HighScore::default());
    }

    #[test]
    fn test_save_remote_success_skips_local() {
        let remote = MemoryStore::default();
        let local = MemoryStore::default();
        let store = FallbackStore::new(Some(Box::new(remote.clone())), Box::new(local.clone()));

        assert!(store.save_best_effort(&HighScore::new("Ada", 5)));
        assert_eq!(remote.saves(), 1);
        assert_eq!(local.saves(), 0);
    }

    #[test]
    fn test_save_falls_back_to_local() {
        let local = MemoryStore::default();
        let store = FallbackStore::new(Some(Box::new(Broken)), Box::new(local.clone()));

        assert!(store.save_best_effort(&HighScore::new("Ada", 5)));
        assert_eq!(local.saves(), 1);
        assert_eq!(local.record(), Some(HighScore::new("Ada", 5)));
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let store = FallbackStore::new(Some(Box::new(Broken)), Box::new(Broken));
        assert!(!store.save_best_effort(&HighScore::new("Ada", 5)));
    }
}
