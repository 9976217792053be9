//! Shortener endpoint configuration
//!
//! Defaults to the local shortener service. A value saved in LocalStorage
//! overrides the default for this browser.
use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

/// Where the form posts when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000";

const STORAGE_KEY: &str = "linkshort_settings";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ShortenerSettings {
    pub endpoint: String,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Global settings state
pub static SETTINGS: GlobalSignal<ShortenerSettings> = Signal::global(ShortenerSettings::default);

/// Accept only absolute http(s) URLs. Returns the trimmed endpoint.
pub fn validate_endpoint(endpoint: &str) -> Result<String, String> {
    let endpoint = endpoint.trim();
    let parsed = url::Url::parse(endpoint).map_err(|e| format!("Invalid endpoint: {}", e))?;

    match parsed.scheme() {
        "http" | "https" => Ok(endpoint.to_string()),
        other => Err(format!("Unsupported endpoint scheme: {}", other)),
    }
}

/// Replace an unusable stored endpoint with the default
fn sanitize(settings: ShortenerSettings) -> ShortenerSettings {
    match validate_endpoint(&settings.endpoint) {
        Ok(endpoint) => ShortenerSettings { endpoint },
        Err(e) => {
            log::warn!("Ignoring stored endpoint {:?}: {}", settings.endpoint, e);
            ShortenerSettings::default()
        }
    }
}

/// Load settings from LocalStorage, falling back to the defaults
pub fn init_settings() {
    let settings = match LocalStorage::get::<ShortenerSettings>(STORAGE_KEY) {
        Ok(stored) => sanitize(stored),
        Err(_) => ShortenerSettings::default(),
    };

    log::info!("Shortener endpoint: {}", settings.endpoint);
    *SETTINGS.write() = settings;
}

/// Validate, apply and persist a new endpoint
pub fn set_endpoint(endpoint: &str) -> Result<(), String> {
    let settings = ShortenerSettings {
        endpoint: validate_endpoint(endpoint)?,
    };

    LocalStorage::set(STORAGE_KEY, &settings)
        .map_err(|e| format!("Failed to save settings: {}", e))?;

    log::info!("Shortener endpoint changed to: {}", settings.endpoint);
    *SETTINGS.write() = settings;
    Ok(())
}

/// Drop the override and go back to the default endpoint
pub fn reset_endpoint() {
    LocalStorage::delete(STORAGE_KEY);
    *SETTINGS.write() = ShortenerSettings::default();
    log::info!("Shortener endpoint reset to default");
}

/// Current endpoint
pub fn get_endpoint() -> String {
    SETTINGS.read().endpoint.clone()
}
