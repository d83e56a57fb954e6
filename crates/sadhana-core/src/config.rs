//! Welcome gate configuration.
//!
//! Loaded from an optional `welcome.json` in the data directory. Any field
//! left out keeps its default.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{WelcomeError, WelcomeResult};

/// File name looked up inside the data directory
pub const CONFIG_FILE_NAME: &str = "welcome.json";

/// Default delay before the popup is revealed
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WelcomeConfig {
    /// Durable key recording that the popup was shown
    pub shown_flag_key: String,

    /// Session-scoped key holding the session marker
    pub session_key: String,

    /// Milliseconds to wait before revealing
    pub reveal_delay_ms: u64,
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            shown_flag_key: "welcomePopupShownInBrowser".to_string(),
            session_key: "currentBrowserSession".to_string(),
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
        }
    }
}

impl WelcomeConfig {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Parse a JSON document.
    pub fn from_json(json: &str) -> WelcomeResult<Self> {
        serde_json::from_str(json).map_err(|e| WelcomeError::Config(e.to_string()))
    }

    /// Load `welcome.json` from `data_dir`, or defaults if it does not exist.
    pub fn load_from_dir(data_dir: impl AsRef<Path>) -> WelcomeResult<Self> {
        let path = data_dir.as_ref().join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(&path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded welcome config");
        Ok(config)
    }
}
