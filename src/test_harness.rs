//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.
//!
//! Time is simulated: the harness keeps its own clock, advanced explicitly
//! with [`AcceptanceTestHarness::advance`], so debounce behavior is
//! deterministic.

use crate::config::ResolvedConfig;
use crate::model::AppError;
use crate::parser::parse_deck;
use crate::state::AppState;
use crate::view::{TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    now: Instant,
}

impl AcceptanceTestHarness {
    /// Parse deck text into a test app with default terminal size (80x24)
    pub fn from_deck_text(text: &str) -> Result<Self, TuiError> {
        Self::from_deck_text_with_size(text, 80, 24)
    }

    /// Parse deck text with custom terminal size
    ///
    /// # Returns
    /// * `Ok(Self)` - Initialized harness with the deck loaded
    /// * `Err(TuiError)` - If the deck cannot be parsed
    pub fn from_deck_text_with_size(text: &str, width: u16, height: u16) -> Result<Self, TuiError> {
        Self::from_deck_text_with_config(text, width, height, &ResolvedConfig::default())
    }

    /// Parse deck text with custom terminal size and configuration
    pub fn from_deck_text_with_config(
        text: &str,
        width: u16,
        height: u16,
        config: &ResolvedConfig,
    ) -> Result<Self, TuiError> {
        let slides = parse_deck(text).map_err(AppError::from)?;

        // Create test backend and terminal
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;

        let app = TuiApp::new_for_test(terminal, slides, config);

        Ok(Self {
            app,
            now: Instant::now(),
        })
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: KeyCode) {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) {
        if !self.is_running() {
            return; // Already quit
        }
        self.app.handle_key_test(KeyEvent::new(key, mods));
    }

    /// Send a sequence of keys
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Get reference to current app state
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Index of the active card, `None` for an empty deck
    pub fn cursor(&self) -> Option<usize> {
        self.state().carousel().map(|c| c.cursor())
    }

    /// Number of layout passes the controller has run
    pub fn layout_passes(&self) -> Option<u64> {
        self.state().carousel().map(|c| c.layout_passes())
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        !self.state().should_quit()
    }

    /// Deliver the startup load event at the current simulated time
    pub fn load(&mut self) {
        let now = self.now;
        self.app.app_state_mut().load(now);
    }

    /// Advance the simulated clock and run any deferred layout now due.
    ///
    /// Returns true if a layout pass ran.
    pub fn advance(&mut self, by: Duration) -> bool {
        self.now += by;
        self.app.tick_test(self.now)
    }

    /// Poll timeout the event loop would use right now
    pub fn poll_timeout(&self) -> Duration {
        self.app.poll_timeout_test(self.now)
    }

    /// Resize the terminal and deliver the resize event
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.app.handle_resize_test(width, height, self.now);
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }

    /// Send a mouse click event at the specified coordinates
    ///
    /// Renders first so the hit areas match what is on screen.
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.render_to_string();
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row);
    }

    /// Press on the track at `from`, drag, and release at `to` on `row`
    pub fn drag(&mut self, from: u16, to: u16, row: u16) {
        self.render_to_string();
        self.mouse(MouseEventKind::Down(MouseButton::Left), from, row);
        self.mouse(MouseEventKind::Drag(MouseButton::Left), to, row);
        self.mouse(MouseEventKind::Up(MouseButton::Left), to, row);
    }

    /// Screen rectangle of the indicator for `index`, from the last render
    pub fn indicator_position(&mut self, index: usize) -> Option<(u16, u16)> {
        self.render_to_string();
        self.app
            .hit_areas()
            .indicators
            .get(index)
            .map(|rect| (rect.x, rect.y))
    }

    /// Screen position of a visible control from the last render
    pub fn control_position(&mut self, next: bool) -> Option<(u16, u16)> {
        self.render_to_string();
        let areas = self.app.hit_areas();
        let rect = if next { areas.next } else { areas.prev };
        rect.map(|r| (r.x + 1, r.y))
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        let event = MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        self.app.handle_mouse_test(event, self.now);
    }
}
