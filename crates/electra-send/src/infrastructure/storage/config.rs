//! TOML-based configuration for the sender.
//!
//! The file is looked up, in order, at:
//! 1. the path given as the first command-line argument,
//! 2. the path in the `ELECTRA_SEND_CONFIG` environment variable,
//! 3. `electra-send.toml` in the working directory.
//!
//! A missing file is not an error: every field has a default.
//!
//! ```toml
//! [dispatch]
//! inter_frame_gap_ms = 100
//! remotes = ["orange", "green"]
//!
//! [logging]
//! log_level = "info"
//!
//! [settings]
//! power = true
//! mode = "cool"
//! fan = "low"
//! temperature = 24
//! swing = false
//! sleep = false
//! ```
//!
//! # Serde default values
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return value
//! of `some_fn()` when the field is absent from the TOML file, so a file
//! containing only `[settings]` is enough.

use std::path::{Path, PathBuf};
use std::time::Duration;

use electra_core::{AcSettings, Remote, SettingsError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::dispatch::{DispatchConfig, DEFAULT_INTER_FRAME_GAP};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "ELECTRA_SEND_CONFIG";

/// File name used when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "electra-send.toml";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The `[settings]` table holds values the remotes cannot send.
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] SettingsError),

    /// `remotes` is empty, so nothing would ever be transmitted.
    #[error("no remotes configured")]
    NoRemotes,
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub dispatch: DispatchSection,
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub settings: AcSettings,
}

/// Transmission order and timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DispatchSection {
    /// Pause between two packets in milliseconds.
    #[serde(default = "default_inter_frame_gap_ms")]
    pub inter_frame_gap_ms: u64,
    /// Remotes to send, in order.
    #[serde(default = "default_remotes")]
    pub remotes: Vec<Remote>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSection {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    /// `RUST_LOG`, when set, takes precedence.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_inter_frame_gap_ms() -> u64 {
    DEFAULT_INTER_FRAME_GAP.as_millis() as u64
}
fn default_remotes() -> Vec<Remote> {
    Remote::ALL.to_vec()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DispatchSection {
    fn default() -> Self {
        Self {
            inter_frame_gap_ms: default_inter_frame_gap_ms(),
            remotes: default_remotes(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl DispatchSection {
    /// Converts the on-disk section into the dispatcher's configuration.
    pub fn to_dispatch_config(&self) -> DispatchConfig {
        DispatchConfig {
            remotes: self.remotes.clone(),
            inter_frame_gap: Duration::from_millis(self.inter_frame_gap_ms),
        }
    }
}

impl AppConfig {
    /// Checks the parts of the file that would otherwise fail silently.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSettings`] for an out-of-range
    /// temperature and [`ConfigError::NoRemotes`] for an empty remote list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.settings.validate()?;
        if self.dispatch.remotes.is_empty() {
            return Err(ConfigError::NoRemotes);
        }
        Ok(())
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Resolves which config file to use.
///
/// `explicit` (usually the first CLI argument) wins over the environment
/// variable, which wins over [`DEFAULT_CONFIG_FILE`].
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Loads `AppConfig` from `path`, returning `AppConfig::default()` if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use electra_core::{Fan, Mode};

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("electra-send-config-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_default_sends_both_remotes_with_100ms_gap() {
        // Arrange / Act
        let cfg = AppConfig::default();

        // Assert
        assert_eq!(cfg.dispatch.inter_frame_gap_ms, 100);
        assert_eq!(cfg.dispatch.remotes, vec![Remote::Orange, Remote::Green]);
        assert_eq!(cfg.logging.log_level, "info");
        assert_eq!(cfg.settings, AcSettings::default());
    }

    #[test]
    fn test_to_dispatch_config_converts_milliseconds() {
        let section = DispatchSection {
            inter_frame_gap_ms: 250,
            remotes: vec![Remote::Green],
        };

        let config = section.to_dispatch_config();

        assert_eq!(config.inter_frame_gap, Duration::from_millis(250));
        assert_eq!(config.remotes, vec![Remote::Green]);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        // Arrange
        let text = r#"
            [settings]
            mode = "heat"
            temperature = 27
        "#;

        // Act
        let cfg: AppConfig = toml::from_str(text).expect("parse");

        // Assert
        assert_eq!(cfg.dispatch, DispatchSection::default());
        assert_eq!(cfg.settings.mode, Mode::Heat);
        assert_eq!(cfg.settings.temperature, 27);
        assert_eq!(cfg.settings.fan, Fan::Auto);
    }

    #[test]
    fn test_app_config_serializes_and_deserializes_round_trip() {
        // Arrange
        let mut cfg = AppConfig::default();
        cfg.dispatch.inter_frame_gap_ms = 40;
        cfg.dispatch.remotes = vec![Remote::Green, Remote::Orange];
        cfg.settings = AcSettings::new(false, Mode::Dry, Fan::High, 19, true, true);

        // Act
        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: AppConfig = toml::from_str(&toml_str).expect("deserialize");

        // Assert
        assert_eq!(cfg, restored);
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let mut cfg = AppConfig::default();
        cfg.settings.temperature = 35;
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidSettings(_))));
    }

    #[test]
    fn test_validate_rejects_empty_remote_list() {
        let mut cfg = AppConfig::default();
        cfg.dispatch.remotes.clear();
        assert!(matches!(cfg.validate(), Err(ConfigError::NoRemotes)));
    }

    #[test]
    fn test_unknown_remote_name_is_a_parse_error() {
        let result: Result<AppConfig, _> = toml::from_str("[dispatch]\nremotes = [\"blue\"]");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let cfg = load_config_from(&scratch_path("does-not-exist.toml")).expect("load");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_save_then_load_round_trips_through_disk() {
        // Arrange
        let path = scratch_path("round-trip/electra-send.toml");
        let mut cfg = AppConfig::default();
        cfg.logging.log_level = "debug".to_string();
        cfg.settings.sleep = true;

        // Act
        save_config_to(&path, &cfg).expect("save");
        let loaded = load_config_from(&path).expect("load");

        // Assert
        assert_eq!(loaded, cfg);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let path = scratch_path("malformed.toml");
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).expect("create dir");
        }
        std::fs::write(&path, "[dispatch\ninter_frame_gap_ms = ").expect("write");

        let result = load_config_from(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_config_path(Some(PathBuf::from("/etc/electra.toml")));
        assert_eq!(path, PathBuf::from("/etc/electra.toml"));
    }
}
