//! Persisted settings and configuration layering.
//!
//! Values are resolved from, lowest to highest precedence: the settings
//! file, the environment, and command-line flags.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use pexels_asset_source::PexelsAssetSourceOptions;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "PEXELS_API_KEY";

/// Environment variable holding the proxy URL.
pub const PROXY_ENV: &str = "PEXELS_PROXY";

/// Contents of `config.json`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_notice_template: Option<String>,
}

/// Values given on the command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub proxy: Option<String>,
    pub base_url: Option<String>,
}

impl Settings {
    /// Merge with the process environment and `overrides`.
    pub fn resolve(self, overrides: &Overrides) -> PexelsAssetSourceOptions {
        self.resolve_with(overrides, |name| std::env::var(name).ok())
    }

    fn resolve_with(
        self,
        overrides: &Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> PexelsAssetSourceOptions {
        let access_key = layer(self.api_key, env(API_KEY_ENV), overrides.api_key.clone());
        let proxy = layer(self.proxy, env(PROXY_ENV), overrides.proxy.clone());

        PexelsAssetSourceOptions {
            access_key: access_key.unwrap_or_default(),
            proxy,
            copyright_notice_template: self.copyright_notice_template.unwrap_or_default(),
            default_search_term: self.default_search_term.unwrap_or_default(),
            ..Default::default()
        }
    }
}

// Blank values do not shadow lower layers.
fn layer(file: Option<String>, env: Option<String>, flag: Option<String>) -> Option<String> {
    [flag, env, file]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

/// Mask all but the first characters of a secret for display.
pub fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}

/// Get the settings file path.
pub fn settings_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "pexels").context("Could not determine config directory")?;

    let config_dir = dirs.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config directory")?;

    Ok(config_dir.join("config.json"))
}

/// Load settings from disk; a missing file yields defaults.
pub fn load() -> Result<Settings> {
    let path = settings_path()?;

    if !path.exists() {
        return Ok(Settings::default());
    }

    let json = fs::read_to_string(&path).context("Failed to read settings file")?;
    serde_json::from_str(&json).context("Invalid settings file")
}

/// Save settings to disk.
pub fn save(settings: &Settings) -> Result<PathBuf> {
    let path = settings_path()?;
    let json = serde_json::to_string_pretty(settings)?;

    fs::write(&path, &json).context("Failed to write settings file")?;

    // The file holds the API key
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    fn file_settings() -> Settings {
        Settings {
            api_key: Some("from-file".to_string()),
            proxy: Some("http://file-proxy:3128".to_string()),
            default_search_term: Some("nature".to_string()),
            copyright_notice_template: Some("Photo by {user.name}".to_string()),
        }
    }

    #[test]
    fn file_values_apply_without_overrides() {
        let options = file_settings().resolve_with(&Overrides::default(), env_of(&[]));

        assert_eq!(options.access_key, "from-file");
        assert_eq!(options.proxy.as_deref(), Some("http://file-proxy:3128"));
        assert_eq!(options.default_search_term, "nature");
        assert_eq!(options.copyright_notice_template, "Photo by {user.name}");
    }

    #[test]
    fn environment_beats_file() {
        let options = file_settings().resolve_with(
            &Overrides::default(),
            env_of(&[("PEXELS_API_KEY", "from-env"), ("PEXELS_PROXY", "tcp://env:8080")]),
        );

        assert_eq!(options.access_key, "from-env");
        assert_eq!(options.proxy.as_deref(), Some("tcp://env:8080"));
    }

    #[test]
    fn flags_beat_environment() {
        let overrides = Overrides {
            api_key: Some("from-flag".to_string()),
            ..Default::default()
        };
        let options = file_settings()
            .resolve_with(&overrides, env_of(&[("PEXELS_API_KEY", "from-env")]));

        assert_eq!(options.access_key, "from-flag");
    }

    #[test]
    fn blank_values_fall_through() {
        let overrides = Overrides {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        let options =
            file_settings().resolve_with(&overrides, env_of(&[("PEXELS_API_KEY", "")]));

        assert_eq!(options.access_key, "from-file");
    }

    #[test]
    fn nothing_configured_is_empty() {
        let options = Settings::default().resolve_with(&Overrides::default(), env_of(&[]));

        assert_eq!(options.access_key, "");
        assert!(options.proxy.is_none());
    }

    #[test]
    fn settings_file_format() {
        let settings: Settings =
            serde_json::from_str(r#"{"api_key": "abc", "default_search_term": "sea"}"#).unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("abc"));
        assert!(settings.proxy.is_none());

        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn mask_hides_secret() {
        assert_eq!(mask("abcdefgh"), "abcd****");
        assert_eq!(mask("abc"), "****");
    }
}
