//! Card, indicator and control styling.

use ratatui::style::{Color, Modifier, Style};

/// Muted text color for hints and secondary information.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, bypassing the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== CardStyles =====

/// Styles for the carousel's moving parts.
///
/// With colors disabled only modifiers (bold, dim, reversed) distinguish
/// active from inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyles {
    /// Border and title of the active card.
    pub active_border: Style,
    /// Body text of the active card.
    pub active_body: Style,
    /// Border, title and body of inactive cards.
    pub inactive: Style,
    /// Indicator for the active card.
    pub indicator_active: Style,
    /// Indicators for other cards.
    pub indicator_inactive: Style,
    /// Previous/next controls.
    pub control: Style,
}

impl CardStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                active_border: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                active_body: Style::new(),
                inactive: Style::new().fg(Color::Gray).add_modifier(Modifier::DIM),
                indicator_active: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
                indicator_inactive: Style::new().fg(Color::DarkGray),
                control: Style::new().fg(Color::Black).bg(Color::Cyan),
            }
        } else {
            Self {
                active_border: Style::new().add_modifier(Modifier::BOLD),
                active_body: Style::new(),
                inactive: Style::new().add_modifier(Modifier::DIM),
                indicator_active: Style::new().add_modifier(Modifier::BOLD),
                indicator_inactive: Style::new().add_modifier(Modifier::DIM),
                control: Style::new().add_modifier(Modifier::REVERSED),
            }
        }
    }
}

impl Default for CardStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::new(true))
    }
}
