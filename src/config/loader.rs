//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "APEXLOG_CONFIG";

/// Environment variable overriding the output format.
pub const FORMAT_ENV_VAR: &str = "APEXLOG_FORMAT";

const APP_DIR: &str = "apexlog";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// How the analyzed log is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Interactive terminal browser.
    #[default]
    Tui,
    /// Plain-text summary on stdout.
    Summary,
    /// JSON report on stdout.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tui" => Ok(OutputFormat::Tui),
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/apexlog/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Output format (`tui`, `summary` or `json`).
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Remember the analyzed log as the current log.
    #[serde(default)]
    pub persist: Option<bool>,

    /// Where the current log is stored.
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// List empty categories in the browser.
    #[serde(default)]
    pub show_empty_categories: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Store analyzed logs.
    pub persist: bool,
    /// Current-log store file.
    pub store_path: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// List empty categories in the browser.
    pub show_empty_categories: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Tui,
            persist: true,
            store_path: default_store_path(),
            log_file_path: default_log_path(),
            show_empty_categories: false,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/apexlog/apexlog.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join(APP_DIR).join("apexlog.log")
    } else {
        PathBuf::from("apexlog.log")
    }
}

/// Resolve default current-log store path.
///
/// Returns `~/.local/share/apexlog/current_log.json` on Unix-like systems.
/// Falls back to the current directory like `default_log_path`.
pub fn default_store_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join(APP_DIR).join("current_log.json")
    } else {
        PathBuf::from("apexlog-current_log.json")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/apexlog/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `APEXLOG_CONFIG` environment variable
/// 3. Default path `~/.config/apexlog/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `APEXLOG_FORMAT`: Override output format (unrecognized values are ignored)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(format) = std::env::var(FORMAT_ENV_VAR)
        .ok()
        .and_then(|value| value.parse().ok())
    {
        config.format = format;
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        format: config.format.unwrap_or(defaults.format),
        persist: config.persist.unwrap_or(defaults.persist),
        store_path: config.store_path.unwrap_or(defaults.store_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        show_empty_categories: config
            .show_empty_categories
            .unwrap_or(defaults.show_empty_categories),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults, file, and env vars)
/// * `format_override` - Optional format from `--format`
/// * `persist_override` - `Some(false)` when `--no-store` was given
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    format_override: Option<OutputFormat>,
    persist_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(format) = format_override {
        config.format = format;
    }

    if let Some(persist) = persist_override {
        config.persist = persist;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

#[cfg(test)]
mod path_tests {
    use super::*;

    #[test]
    fn default_log_path_ends_with_apexlog_log() {
        let path = default_log_path();
        assert!(
            path.to_string_lossy().ends_with("apexlog.log"),
            "Default log path should end with 'apexlog.log', got: {:?}",
            path
        );
    }

    #[test]
    fn default_store_path_is_json_under_apexlog() {
        let path = default_store_path();
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("apexlog") && path_str.ends_with(".json"),
            "Default store path should be a json file under apexlog, got: {:?}",
            path
        );
    }

    #[test]
    fn config_file_log_path_overrides_default() {
        let custom_path = PathBuf::from("/custom/path/to/app.log");
        let config_file = ConfigFile {
            log_file_path: Some(custom_path.clone()),
            ..ConfigFile::default()
        };

        let resolved = merge_config(Some(config_file));
        assert_eq!(
            resolved.log_file_path, custom_path,
            "Config file log_file_path should override default"
        );
    }

    #[test]
    fn missing_config_file_log_path_uses_default() {
        let resolved = merge_config(Some(ConfigFile::default()));
        assert_eq!(
            resolved.log_file_path,
            default_log_path(),
            "Missing log_file_path in config should use default"
        );
    }
}
