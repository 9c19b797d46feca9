//! Configuration file loading with precedence handling.

use super::CarouselConfig;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a regular file).
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

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/cardreel/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Cells between adjacent cards.
    #[serde(default)]
    pub gap: Option<u32>,

    /// Drag distance in cells a swipe must exceed.
    #[serde(default)]
    pub swipe_threshold: Option<u32>,

    /// Resize debounce in milliseconds.
    #[serde(default)]
    pub resize_debounce_ms: Option<u64>,

    /// Deferred layout delay after startup in milliseconds.
    #[serde(default)]
    pub load_delay_ms: Option<u64>,

    /// Wrap around at the first and last card.
    #[serde(default)]
    pub looping: Option<bool>,

    /// Active card width as a percentage of the viewport.
    #[serde(default)]
    pub active_width_percent: Option<u16>,

    /// Inactive card width as a percentage of the viewport.
    #[serde(default)]
    pub inactive_width_percent: Option<u16>,

    /// Draw the previous/next controls.
    #[serde(default)]
    pub show_controls: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
/// Distances are terminal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Cells between adjacent cards.
    pub gap: u32,
    /// Swipe dead-zone in cells.
    pub swipe_threshold: u32,
    /// Resize debounce.
    pub resize_debounce: Duration,
    /// Deferred layout delay after startup.
    pub load_delay: Duration,
    /// Wrap-around navigation.
    pub looping: bool,
    /// Active card width, percent of viewport (1..=100).
    pub active_width_percent: u16,
    /// Inactive card width, percent of viewport (1..=100).
    pub inactive_width_percent: u16,
    /// Draw previous/next controls.
    pub show_controls: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            gap: 2,
            swipe_threshold: 6,
            resize_debounce: Duration::from_millis(120),
            load_delay: Duration::from_millis(60),
            looping: false,
            active_width_percent: 60,
            inactive_width_percent: 40,
            show_controls: true,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Controller tuning derived from this configuration.
    pub fn carousel(&self) -> CarouselConfig {
        CarouselConfig {
            gap: self.gap,
            swipe_threshold: self.swipe_threshold,
            resize_debounce: self.resize_debounce,
            load_delay: self.load_delay,
            looping: self.looping,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/cardreel/cardreel.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("cardreel").join("cardreel.log")
    } else {
        PathBuf::from("cardreel.log")
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
/// Returns `~/.config/cardreel/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cardreel").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CARDREEL_CONFIG` environment variable
/// 3. Default path `~/.config/cardreel/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed,
/// or if `CARDREEL_CONFIG` is not valid unicode.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var("CARDREEL_CONFIG") {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CARDREEL_LOOP`: `1`/`true`/`yes` enables looping, `0`/`false`/`no` disables it.
///   Other values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("CARDREEL_LOOP") {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => config.looping = true,
            "0" | "false" | "no" => config.looping = false,
            _ => {}
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
/// Width percentages are clamped into `1..=100`.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        gap: config.gap.unwrap_or(defaults.gap),
        swipe_threshold: config.swipe_threshold.unwrap_or(defaults.swipe_threshold),
        resize_debounce: config
            .resize_debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.resize_debounce),
        load_delay: config
            .load_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.load_delay),
        looping: config.looping.unwrap_or(defaults.looping),
        active_width_percent: config
            .active_width_percent
            .unwrap_or(defaults.active_width_percent)
            .clamp(1, 100),
        inactive_width_percent: config
            .inactive_width_percent
            .unwrap_or(defaults.inactive_width_percent)
            .clamp(1, 100),
        show_controls: config.show_controls.unwrap_or(defaults.show_controls),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    looping_override: Option<bool>,
    controls_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(looping) = looping_override {
        config.looping = looping;
    }

    if let Some(show) = controls_override {
        config.show_controls = show;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
