//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

use std::time::Duration;

/// Tuning for the carousel controller.
///
/// Units are whatever the view measures widths in: pixels for a browser-like
/// view, cells for the terminal view. [`CarouselConfig::default`] carries the
/// pixel tuning; the terminal front end builds its own from [`ResolvedConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Space between adjacent slides.
    pub gap: u32,
    /// Horizontal drag distance a swipe must exceed to navigate.
    pub swipe_threshold: u32,
    /// Quiet period after the last resize before the layout pass runs.
    pub resize_debounce: Duration,
    /// Delay between load and the first deferred layout pass.
    pub load_delay: Duration,
    /// Whether next/prev wrap around at the ends.
    pub looping: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            gap: 12,
            swipe_threshold: 40,
            resize_debounce: Duration::from_millis(120),
            load_delay: Duration::from_millis(60),
            looping: false,
        }
    }
}
