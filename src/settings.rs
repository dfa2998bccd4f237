//! Runtime configuration
//!
//! Defaults, overridden by `FLAPPY_BEE_*` environment variables on native
//! builds (command-line flags are applied on top by the binary), or by a JSON
//! object in LocalStorage in the browser.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::FPS;
use crate::ui::Theme;

/// Remote endpoint used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/highscore";
/// Local record file used when nothing else is configured
pub const DEFAULT_HIGHSCORE_FILE: &str = "flappy_bee_highscore.json";

pub const ENV_API_URL: &str = "FLAPPY_BEE_API_URL";
pub const ENV_REMOTE: &str = "FLAPPY_BEE_REMOTE";
pub const ENV_HIGHSCORE_FILE: &str = "FLAPPY_BEE_HIGHSCORE_FILE";
pub const ENV_THEME: &str = "FLAPPY_BEE_THEME";

/// Where the game is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deployment {
    /// Terminal binary
    Native,
    /// wasm build embedded in a web page
    Browser,
}

impl Deployment {
    pub fn detect() -> Self {
        if cfg!(target_arch = "wasm32") {
            Deployment::Browser
        } else {
            Deployment::Native
        }
    }

    pub fn is_browser(&self) -> bool {
        *self == Deployment::Browser
    }
}

impl Default for Deployment {
    fn default() -> Self {
        Self::detect()
    }
}

/// Whether the remote endpoint is tried is decided by `remote` (and a
/// non-empty `api_url`) on every deployment; both the terminal and the
/// browser build use it by default. `deployment` only picks defaults such as
/// the theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// High score endpoint (`GET` and `POST`)
    pub api_url: String,
    /// Whether to try the endpoint at all
    pub remote: bool,
    /// Detected at startup, never read from storage. Does not gate the
    /// endpoint.
    #[serde(skip)]
    pub deployment: Deployment,
    /// Local fallback record (native only)
    pub highscore_path: PathBuf,
    pub theme: Theme,
    /// Frame rate of the native loop
    pub fps: u32,
    /// Fixed RNG seed; random per launch when unset
    pub seed: Option<u64>,
    /// Connect/read timeout for the endpoint
    pub http_timeout_ms: u64,
    /// Text-art logo frames for the title screen; built-in logo when unset
    pub logo_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        let deployment = Deployment::detect();
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            remote: true,
            deployment,
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_FILE),
            // The browser build is the logo edition
            theme: if deployment.is_browser() {
                Theme::Gensyn
            } else {
                Theme::Classic
            },
            fps: FPS,
            seed: None,
            http_timeout_ms: 3000,
            logo_path: None,
        }
    }
}

impl Settings {
    /// Defaults plus process environment
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        settings.apply_env(|key| std::env::var(key).ok());
        settings
    }

    /// Apply overrides from an environment-like lookup. Unparseable values
    /// are logged and ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_url = url.trim().to_string();
        }
        if let Some(value) = lookup(ENV_REMOTE) {
            match parse_flag(&value) {
                Some(remote) => self.remote = remote,
                None => log::warn!("Ignoring {}={:?}", ENV_REMOTE, value),
            }
        }
        if let Some(path) = lookup(ENV_HIGHSCORE_FILE) {
            if !path.trim().is_empty() {
                self.highscore_path = PathBuf::from(path.trim());
            }
        }
        if let Some(value) = lookup(ENV_THEME) {
            match Theme::from_str(&value) {
                Some(theme) => self.theme = theme,
                None => log::warn!("Ignoring {}={:?}", ENV_THEME, value),
            }
        }
    }

    /// The endpoint is only tried when enabled and configured
    pub fn remote_enabled(&self) -> bool {
        self.remote && !self.api_url.is_empty()
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms)
    }

    /// Frame budget of the native loop
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flappy_bee_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<Settings>(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native: defaults plus environment
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::from_env()
    }
}

/// Parse a boolean-ish environment value
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
