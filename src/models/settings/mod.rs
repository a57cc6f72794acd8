// Settings module
// Application configuration read from config.toml

use serde::{Deserialize, Serialize};

use crate::models::room::Room;

pub const DEFAULT_SERVICE_URL: &str =
    "https://functions.poehali.dev/9740880a-0495-4c81-8d54-e9128221b101";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;
pub const MIN_POLL_INTERVAL_MS: u64 = 500;

/// How a pointer gesture turns into a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// A click on a free cell selects that one slot and opens the dialog
    Single,
    /// Press, drag along one day column, release
    Drag,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Booking service URL cannot be empty")]
    EmptyServiceUrl,
    #[error("Booking service URL must start with http:// or https://")]
    UnsupportedScheme,
    #[error("Poll interval must be at least 500 ms")]
    PollIntervalTooShort,
    #[error("Request timeout must be greater than 0 seconds")]
    ZeroTimeout,
    #[error("Unknown default room '{0}'")]
    UnknownRoom(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub service_url: String,
    pub poll_interval_ms: u64,
    pub request_timeout_secs: u64,
    pub selection_mode: SelectionMode,
    pub default_room: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            request_timeout_secs: 10,
            selection_mode: SelectionMode::Drag,
            default_room: Room::default_room().id.to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.service_url.trim();
        if url.is_empty() {
            return Err(ConfigError::EmptyServiceUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme);
        }
        if self.poll_interval_ms < MIN_POLL_INTERVAL_MS {
            return Err(ConfigError::PollIntervalTooShort);
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if Room::by_id(&self.default_room).is_none() {
            return Err(ConfigError::UnknownRoom(self.default_room.clone()));
        }
        Ok(())
    }

    /// Room selected at startup; falls back to the first room.
    pub fn initial_room(&self) -> &'static Room {
        Room::by_id(&self.default_room).unwrap_or_else(Room::default_room)
    }
}
