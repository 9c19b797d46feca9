//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values.

/// Height of the indicator row under the track.
pub const INDICATOR_ROW_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Rows trimmed from the top and bottom of inactive cards, when the track is
/// at least [`MIN_TRACK_HEIGHT_FOR_INSET`] tall.
pub const INACTIVE_CARD_INSET: u16 = 1;

/// Shortest track that still insets inactive cards.
pub const MIN_TRACK_HEIGHT_FOR_INSET: u16 = 6;

/// Width of a previous/next control hit box (` ‹ `).
pub const CONTROL_WIDTH: u16 = 3;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Event poll interval when no deferred layout is pending.
pub const IDLE_POLL_INTERVAL_MS: u64 = 500;
