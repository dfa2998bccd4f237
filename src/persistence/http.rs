//! Remote high score endpoint
//!
//! `GET <url>` returns `{"name": string, "score": integer}`; `POST <url>` with
//! the same JSON body overwrites it. Missing, `null` or blank fields in the
//! response fall back to the default record's values.

use std::time::Duration;

use super::{HighScoreStore, PersistenceError};
use crate::highscores::HighScore;

#[derive(Debug, Clone)]
pub struct HttpStore {
    url: String,
    timeout: Duration,
}

impl HttpStore {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpStore {
    fn agent(&self) -> ureq::Agent {
        ureq::AgentBuilder::new().timeout(self.timeout).build()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_ureq_error(err: ureq::Error) -> PersistenceError {
    match err {
        ureq::Error::Status(code, _) => PersistenceError::Status(code),
        ureq::Error::Transport(t) => PersistenceError::Http(t.to_string()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HighScoreStore for HttpStore {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn load(&self) -> Result<HighScore, PersistenceError> {
        let body = self
            .agent()
            .get(&self.url)
            .set("Accept", "application/json")
            .call()
            .map_err(map_ureq_error)?
            .into_string()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn save(&self, record: &HighScore) -> Result<(), PersistenceError> {
        self.agent()
            .post(&self.url)
            .send_json(record)
            .map_err(map_ureq_error)?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> PersistenceError {
    PersistenceError::Http(format!("{:?}", err))
}

/// Synchronous XMLHttpRequest; the browser ignores `timeout` for blocking
/// requests made from the window context.
#[cfg(target_arch = "wasm32")]
impl HttpStore {
    fn request(&self, method: &str, body: Option<&str>) -> Result<String, PersistenceError> {
        let xhr = web_sys::XmlHttpRequest::new().map_err(js_error)?;
        xhr.open_with_async(method, &self.url, false)
            .map_err(js_error)?;
        if body.is_some() {
            xhr.set_request_header("Content-Type", "application/json")
                .map_err(js_error)?;
        }
        xhr.send_with_opt_str(body).map_err(js_error)?;

        let status = xhr.status().map_err(js_error)?;
        if !(200..300).contains(&status) {
            return Err(PersistenceError::Status(status));
        }
        Ok(xhr.response_text().map_err(js_error)?.unwrap_or_default())
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for HttpStore {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn load(&self) -> Result<HighScore, PersistenceError> {
        let body = self.request("GET", None)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn save(&self, record: &HighScore) -> Result<(), PersistenceError> {
        let body = serde_json::to_string(record)?;
        self.request("POST", Some(&body))?;
        Ok(())
    }
}
