// Configuration loading and parsing (config/lanepick.toml).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "lanepick.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub source: SourceConfig,
    pub prompt: PromptConfig,
    pub draw: DrawConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// INI file holding unowned champions and pick stats.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("cfg.ini"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: lanepick_opgg::DEFAULT_URL.to_string(),
            user_agent: lanepick_opgg::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PromptConfig {
    /// Consecutive invalid answers tolerated before the session ends.
    pub max_attempts: u32,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            max_attempts: lanepick_core::session::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DrawConfig {
    /// Fixed RNG seed; draws use OS entropy when absent.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/lanepick.toml` under `base_dir`.
///
/// A missing file yields the built-in defaults. Relative paths in the file
/// are resolved against `base_dir`.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let mut config = if path.exists() {
        let text = read_file(&path)?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?
    } else {
        Config::default()
    };

    if config.store.path.is_relative() {
        config.store.path = base_dir.join(&config.store.path);
    }
    if config.logging.dir.is_relative() {
        config.logging.dir = base_dir.join(&config.logging.dir);
    }

    validate(&config)?;
    Ok(config)
}

/// Copy `defaults/lanepick.toml` to `config/` if the latter is missing.
/// Returns the copied path, if any.
pub fn ensure_config_file(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let source = base_dir.join("defaults").join(CONFIG_FILE);
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.exists() || !source.is_file() {
        return Ok(None);
    }

    std::fs::create_dir_all(base_dir.join("config")).map_err(|e| {
        ConfigError::DefaultsCopyError {
            message: format!("failed to create config directory: {e}"),
        }
    })?;
    std::fs::copy(&source, &target).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to copy {}: {e}", source.display()),
    })?;
    Ok(Some(target))
}

/// Convenience wrapper: ensure defaults are in place, then load.
pub fn load_config(base_dir: &Path) -> Result<Config, ConfigError> {
    ensure_config_file(base_dir)?;
    load_config_from(base_dir)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.prompt.max_attempts == 0 {
        return Err(ConfigError::ValidationError {
            field: "prompt.max_attempts".into(),
            message: "must be greater than 0".into(),
        });
    }

    if !(config.source.url.starts_with("http://") || config.source.url.starts_with("https://")) {
        return Err(ConfigError::ValidationError {
            field: "source.url".into(),
            message: format!("must be an http(s) URL, got {:?}", config.source.url),
        });
    }

    if config.store.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "store.path".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(base: &Path, text: &str) {
        let dir = base.join("config");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE), text).unwrap();
    }

    #[test]
    fn missing_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = load_config_from(tmp.path()).unwrap();
        assert_eq!(config.store.path, tmp.path().join("cfg.ini"));
        assert_eq!(config.source.url, "https://euw.op.gg/champion/statistics");
        assert_eq!(config.prompt.max_attempts, 3);
        assert_eq!(config.draw.seed, None);
        assert_eq!(config.logging.dir, tmp.path().join("logs"));
    }

    #[test]
    fn partial_file_overrides_some_fields() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(
            tmp.path(),
            r#"
            [store]
            path = "/var/lib/lanepick/picks.ini"

            [draw]
            seed = 42
            "#,
        );
        let config = load_config_from(tmp.path()).unwrap();
        assert_eq!(config.store.path, PathBuf::from("/var/lib/lanepick/picks.ini"));
        assert_eq!(config.draw.seed, Some(42));
        assert_eq!(config.prompt.max_attempts, 3);
    }

    #[test]
    fn zero_attempts_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), "[prompt]\nmax_attempts = 0\n");
        let err = load_config_from(tmp.path()).unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { ref field, .. } if field == "prompt.max_attempts")
        );
    }

    #[test]
    fn non_http_url_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), "[source]\nurl = \"ftp://example.com\"\n");
        let err = load_config_from(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("source.url"));
    }

    #[test]
    fn invalid_toml_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), "[store\npath = 1");
        let err = load_config_from(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn defaults_are_copied_once() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("defaults")).unwrap();
        fs::write(
            tmp.path().join("defaults").join(CONFIG_FILE),
            "[prompt]\nmax_attempts = 5\n",
        )
        .unwrap();

        let copied = ensure_config_file(tmp.path()).unwrap();
        assert_eq!(copied, Some(tmp.path().join("config").join(CONFIG_FILE)));
        assert_eq!(ensure_config_file(tmp.path()).unwrap(), None);

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.prompt.max_attempts, 5);
    }

    #[test]
    fn shipped_defaults_parse() {
        let text = include_str!("../../../defaults/lanepick.toml");
        let config: Config = toml::from_str(text).unwrap();
        assert_eq!(config.store.path, PathBuf::from("cfg.ini"));
        assert_eq!(config.prompt.max_attempts, 3);
    }
}
