mod service;

pub use service::{SettingsService, CONFIG_FILE_NAME, SERVICE_URL_ENV};
