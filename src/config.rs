//! Configuration file parser for ~/.config/blogdeck/config.toml.
//!
//! The config file is optional. A missing or empty file yields
//! `Config::default()`; unknown keys are accepted but logged as warnings.
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Search debounce used when the config does not set one.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Upper bound for `search_debounce_ms`.
const MAX_SEARCH_DEBOUNCE_MS: u64 = 5_000;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

// ============================================================================
// Configuration Struct
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme variant name ("dark" or "light").
    pub theme: String,

    /// Catalog file to browse instead of the built-in sample.
    /// The `--catalog` flag takes precedence.
    pub catalog_path: Option<PathBuf>,

    /// Base URL that relative post URLs are resolved against.
    pub base_url: Option<String>,

    /// Quiet period after the last search keystroke before the listing updates.
    pub search_debounce_ms: u64,

    /// Start on the full listing instead of the featured posts.
    pub start_in_all_view: bool,

    /// Custom keybinding overrides. Keys are action names, values are key strings.
    pub keybindings: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            catalog_path: None,
            base_url: None,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            start_in_all_view: false,
            keybindings: HashMap::new(),
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 6] = [
        "theme",
        "catalog_path",
        "base_url",
        "search_debounce_ms",
        "start_in_all_view",
        "keybindings",
    ];

    /// Load and validate a config file.
    ///
    /// A missing or blank file gives `Config::default()`. Bad TOML, wrong
    /// types and out-of-range values are errors; unknown keys only warn.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let Some(content) = Self::read_if_present(path)? else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        };

        let config = Self::parse(&content)?;
        tracing::info!(
            path = %path.display(),
            theme = %config.theme,
            overrides = config.keybindings.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// File contents, or `None` when the file does not exist.
    fn read_if_present(path: &Path) -> Result<Option<String>, ConfigError> {
        let size = match std::fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if size > Self::MAX_FILE_SIZE {
            return Err(ConfigError::TooLarge(format!(
                "{} is {} bytes (max {} bytes)",
                path.display(),
                size,
                Self::MAX_FILE_SIZE
            )));
        }

        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            // Removed between the metadata check and the read.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        if let Ok(table) = content.parse::<toml::Table>() {
            table
                .keys()
                .filter(|key| !Self::KNOWN_KEYS.contains(&key.as_str()))
                .for_each(|key| tracing::warn!(key = %key, "Ignoring unknown config key"));
        }

        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.search_debounce_ms > MAX_SEARCH_DEBOUNCE_MS {
            return Err(ConfigError::InvalidValue {
                key: "search_debounce_ms",
                reason: format!(
                    "{} exceeds the maximum of {} ms",
                    self.search_debounce_ms, MAX_SEARCH_DEBOUNCE_MS
                ),
            });
        }

        if let Some(base) = &self.base_url {
            let parsed = url::Url::parse(base).map_err(|e| ConfigError::InvalidValue {
                key: "base_url",
                reason: format!("'{}' is not an absolute URL ({})", base, e),
            })?;
            if !matches!(parsed.scheme(), "http" | "https" | "file") {
                return Err(ConfigError::InvalidValue {
                    key: "base_url",
                    reason: format!("scheme '{}' is not http, https or file", parsed.scheme()),
                });
            }
        }

        Ok(())
    }

    /// The search debounce window as a `Duration`.
    pub fn search_debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.search_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Write a config file into its own temp dir; returns (dir, file).
    fn write_config(name: &str, content: &str) -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir().join(format!("blogdeck_config_test_{}", name));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.base_url, None);
        assert_eq!(config.search_debounce(), std::time::Duration::from_millis(300));
        assert!(!config.start_in_all_view);
        assert!(config.keybindings.is_empty());
    }

    #[test]
    fn test_missing_or_blank_file_gives_defaults() {
        let missing = std::env::temp_dir().join("blogdeck_config_test_missing/none.toml");
        assert_eq!(Config::load(&missing).unwrap().theme, "dark");

        let (dir, path) = write_config("blank", "   \n  \n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.search_debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_single_key_keeps_other_defaults() {
        let config = Config::parse("start_in_all_view = true\n").unwrap();
        assert!(config.start_in_all_view);
        assert_eq!(config.theme, "dark");
        assert_eq!(config.search_debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
    }

    #[test]
    fn test_every_key_from_file() {
        let content = r#"
theme = "light"
catalog_path = "/srv/blog/posts.toml"
base_url = "https://blog.example.com/"
search_debounce_ms = 150
start_in_all_view = true

[keybindings]
quit = "Ctrl+q"
next_page = "PageDown"
"#;
        let (dir, path) = write_config("every_key", content);
        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(
            config.catalog_path.as_deref(),
            Some(Path::new("/srv/blog/posts.toml"))
        );
        assert_eq!(config.base_url.as_deref(), Some("https://blog.example.com/"));
        assert_eq!(config.search_debounce(), std::time::Duration::from_millis(150));
        assert!(config.start_in_all_view);
        assert_eq!(config.keybindings.len(), 2);
        assert_eq!(config.keybindings["next_page"], "PageDown");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_parse_errors() {
        let err = Config::parse("theme = [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid TOML"));

        assert!(matches!(
            Config::parse("search_debounce_ms = \"fast\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_keys_only_warn() {
        let config = Config::parse("theme = \"light\"\nrefresh_interval_minutes = 5\n").unwrap();
        assert_eq!(config.theme, "light");
    }

    #[test]
    fn test_debounce_bounds() {
        assert!(matches!(
            Config::parse("search_debounce_ms = 60000\n"),
            Err(ConfigError::InvalidValue {
                key: "search_debounce_ms",
                ..
            })
        ));
        assert!(Config::parse("search_debounce_ms = 5000\n").is_ok());
        assert!(Config::parse("search_debounce_ms = 0\n").is_ok());
    }

    #[test]
    fn test_base_url_validation() {
        for bad in ["blog/posts", "ftp://example.com/"] {
            let content = format!("base_url = \"{}\"\n", bad);
            assert!(
                matches!(
                    Config::parse(&content),
                    Err(ConfigError::InvalidValue { key: "base_url", .. })
                ),
                "{bad}"
            );
        }
        assert!(Config::parse("base_url = \"file:///home/me/site/\"\n").is_ok());
    }

    #[test]
    fn test_oversized_file_rejected() {
        let (dir, path) = write_config("oversized", &"#".repeat(1_048_577));
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge(_)));
        std::fs::remove_dir_all(&dir).ok();
    }
}
