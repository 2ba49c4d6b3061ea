use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::debug;
use url::Url;

pub const DEFAULT_ENDPOINT_URL: &str = "https://thumbsywaitlist.onrender.com/api/waitlist";
pub const SETTINGS_FILE_NAME: &str = "waitlist.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.into(),
        }
    }
}

impl Settings {
    /// Applies a command-line override on top of file and environment values.
    pub fn with_endpoint_override(mut self, endpoint_url: Option<&str>) -> Result<Self> {
        if let Some(raw) = endpoint_url {
            self.endpoint_url = validate_endpoint_url(raw)?;
        }
        Ok(self)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    endpoint_url: Option<String>,
}

/// Defaults, then `./waitlist.toml`, then `WAITLIST_ENDPOINT_URL` /
/// `APP__ENDPOINT_URL`.
pub fn load_settings() -> Result<Settings> {
    load_settings_from(Path::new(SETTINGS_FILE_NAME), |name| {
        std::env::var(name).ok()
    })
}

/// Same layering as [`load_settings`] with an explicit file and environment.
/// A missing file is not an error; an unreadable or invalid one is.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Settings> {
    let mut settings = Settings::default();

    if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
        let file_cfg: FileSettings = toml::from_str(&raw)
            .with_context(|| format!("invalid settings file '{}'", path.display()))?;
        if let Some(v) = file_cfg.endpoint_url {
            debug!(path = %path.display(), "endpoint url taken from settings file");
            settings.endpoint_url = v;
        }
    }

    if let Some(v) = env("WAITLIST_ENDPOINT_URL") {
        settings.endpoint_url = v;
    }
    if let Some(v) = env("APP__ENDPOINT_URL") {
        settings.endpoint_url = v;
    }

    settings.endpoint_url = validate_endpoint_url(&settings.endpoint_url)?;
    Ok(settings)
}

pub fn validate_endpoint_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed)
        .with_context(|| format!("waitlist endpoint '{trimmed}' is not a valid URL"))?;
    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => bail!("waitlist endpoint must use http or https, got '{other}'"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
