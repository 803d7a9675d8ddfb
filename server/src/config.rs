//! Configuration management

use featured_badges_core::{BadgeOptions, BadgeTarget, Error, Platform, Result, Theme};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Application configuration
///
/// Holds the defaults applied to every badge request before the request's
/// own parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme used when a request does not pick one
    pub default_theme: Theme,

    /// Featured text used when a request does not set one
    pub featured_text: String,

    /// Whether badges link out by default
    pub link_enabled: bool,

    /// Default link URL per badge target id (`hackernews`, `generic`, ...)
    pub link_urls: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_theme: Theme::Light,
            featured_text: BadgeOptions::default().featured_text,
            link_enabled: true,
            link_urls: HashMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from file or environment
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            Self::load_from_file(p)
        } else {
            Self::load_from_env()
        }
    }

    /// Load from configuration file
    fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("Failed to read config: {}", e)))?;

        Self::from_toml(&content)
    }

    fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Load from environment variables
    fn load_from_env() -> Result<Self> {
        Self::from_vars(get_secret)
    }

    /// Build the configuration from a variable lookup
    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(theme) = lookup("BADGES_DEFAULT_THEME") {
            config.default_theme = Theme::from(theme);
        }

        if let Some(text) = lookup("BADGES_FEATURED_TEXT") {
            config.featured_text = text;
        }

        if let Some(raw) = lookup("BADGES_LINK_ENABLED") {
            config.link_enabled = parse_bool(&raw).ok_or_else(|| {
                Error::ConfigError(format!("Invalid BADGES_LINK_ENABLED value: {}", raw))
            })?;
        }

        let ids = Platform::ALL
            .iter()
            .map(Platform::id)
            .chain(std::iter::once("generic"));
        for id in ids {
            let var = format!("BADGES_LINK_URL_{}", id.to_ascii_uppercase());
            if let Some(url) = lookup(&var).filter(|u| !u.trim().is_empty()) {
                config.link_urls.insert(id.to_string(), url.trim().to_string());
            }
        }

        Ok(config)
    }

    /// Options a request for `target` starts from
    pub fn base_options(&self, target: &BadgeTarget) -> BadgeOptions {
        BadgeOptions {
            theme: self.default_theme,
            featured_text: self.featured_text.clone(),
            link_enabled: self.link_enabled,
            link_url: self.link_urls.get(target.id()).cloned(),
            ..BadgeOptions::default()
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Get secret from environment variable or file
///
/// Supports both direct environment variables and file-based secrets (Docker/Kubernetes pattern).
/// If `VAR_NAME` is not found, tries `VAR_NAME_FILE` which should point to a file containing the secret.
///
/// # Examples
///
/// ```no_run
/// // Direct environment variable
/// std::env::set_var("BADGES_LINK_URL_GITHUB", "https://github.com/acme/widget");
/// let url = get_secret("BADGES_LINK_URL_GITHUB");
/// assert!(url.is_some());
///
/// // File-based secret (Docker/K8s)
/// std::env::set_var("BADGES_LINK_URL_GITHUB_FILE", "/run/secrets/github_url");
/// let url = get_secret("BADGES_LINK_URL_GITHUB");
/// assert!(url.is_some());
/// ```
pub fn get_secret(var_name: &str) -> Option<String> {
    // Try environment variable first
    if let Ok(value) = std::env::var(var_name) {
        return Some(value);
    }

    // Try file-based secret (Docker secrets / Kubernetes)
    let file_var = format!("{}_FILE", var_name);
    if let Ok(path) = std::env::var(&file_var) {
        if let Ok(contents) = std::fs::read_to_string(&path) {
            return Some(contents.trim().to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_env_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.featured_text, "FEATURED ON");
        assert!(config.link_enabled);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_vars(vars(&[
            ("BADGES_DEFAULT_THEME", "dark"),
            ("BADGES_FEATURED_TEXT", "LAUNCHED ON"),
            ("BADGES_LINK_ENABLED", "false"),
            ("BADGES_LINK_URL_HACKERNEWS", " https://news.ycombinator.com/item?id=1 "),
            ("BADGES_LINK_URL_GENERIC", "https://example.com"),
            ("BADGES_LINK_URL_GITHUB", ""),
        ]))
        .unwrap();

        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.featured_text, "LAUNCHED ON");
        assert!(!config.link_enabled);
        assert_eq!(
            config.link_urls.get("hackernews").map(String::as_str),
            Some("https://news.ycombinator.com/item?id=1")
        );
        assert!(config.link_urls.contains_key("generic"));
        assert!(!config.link_urls.contains_key("github"));
    }

    #[test]
    fn test_env_rejects_bad_bool() {
        let err = Config::from_vars(vars(&[("BADGES_LINK_ENABLED", "maybe")])).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_unknown_theme_falls_back_to_light() {
        let config = Config::from_vars(vars(&[("BADGES_DEFAULT_THEME", "sepia")])).unwrap();
        assert_eq!(config.default_theme, Theme::Light);
    }

    #[test]
    fn test_from_toml() {
        let config = Config::from_toml(
            r#"
            default_theme = "dark"
            link_enabled = false

            [link_urls]
            github = "https://github.com/acme/widget"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_theme, Theme::Dark);
        assert!(!config.link_enabled);
        assert_eq!(config.featured_text, "FEATURED ON");
        assert_eq!(config.link_urls.len(), 1);
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(matches!(
            Config::from_toml("link_enabled = \"sometimes\""),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_base_options() {
        let mut config = Config {
            default_theme: Theme::Dark,
            ..Config::default()
        };
        config
            .link_urls
            .insert("github".to_string(), "https://github.com/acme/widget".to_string());

        let options = config.base_options(&Platform::GitHub.into());
        assert_eq!(options.theme, Theme::Dark);
        assert_eq!(options.link_url.as_deref(), Some("https://github.com/acme/widget"));

        let options = config.base_options(&Platform::Reddit.into());
        assert!(options.link_url.is_none());
    }
}
