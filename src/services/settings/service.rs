use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const SERVICE_URL_ENV: &str = "ROOM_BOOKING_SERVICE_URL";

/// Loads application settings from a TOML file plus environment overrides.
pub struct SettingsService {
    path: Option<PathBuf>,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Settings file in the platform config directory. Falls back to
    /// defaults-only when no home directory can be resolved.
    pub fn from_project_dirs() -> Self {
        let path = ProjectDirs::from("dev", "SmartMotion", "RoomBooking")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME));
        if path.is_none() {
            log::warn!("Could not resolve a config directory, using built-in settings");
        }
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read, apply overrides and validate.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn get(&self) -> Result<Settings> {
        let mut settings = match &self.path {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read settings from {}", path.display()))?;
                toml::from_str::<Settings>(&raw)
                    .with_context(|| format!("Failed to parse settings in {}", path.display()))?
            }
            _ => Settings::default(),
        };

        apply_env_overrides(&mut settings);
        settings.validate().context("Invalid settings")?;
        Ok(settings)
    }

    /// Like `get`, but logs the failure and returns defaults. The environment
    /// override still applies on top of the defaults when it is valid.
    pub fn load_or_default(&self) -> Settings {
        match self.get() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                let mut settings = Settings::default();
                apply_env_overrides(&mut settings);
                match settings.validate() {
                    Ok(()) => settings,
                    Err(err) => {
                        log::warn!("Ignoring {}: {}", SERVICE_URL_ENV, err);
                        Settings::default()
                    }
                }
            }
        }
    }
}

fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(url) = std::env::var(SERVICE_URL_ENV) {
        if !url.trim().is_empty() {
            log::info!("Using booking service URL from {}", SERVICE_URL_ENV);
            settings.service_url = url.trim().to_string();
        }
    }
}
