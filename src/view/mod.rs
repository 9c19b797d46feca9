//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod indicators;
mod layout;
mod styles;
mod track;

pub use help::render_help_overlay;
pub use indicators::render_indicators;
pub use layout::{calculate_screen_areas, render_layout, ScreenAreas};
pub use styles::{CardStyles, ColorConfig};
pub use track::{render_controls, render_track, ControlAreas};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, Slide};
use crate::state::{handle_mouse, AppState};
use crate::view_state::HitAreas;
use constants::IDLE_POLL_INTERVAL_MS;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: CardStyles,
    /// Clickable regions from the last render
    hit_areas: HitAreas,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(slides: Vec<Slide>, config: &ResolvedConfig, styles: CardStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, slides, config, styles))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. The poll timeout is the time left until
    /// the next deferred layout, so debounced passes run on schedule without
    /// busy-waiting.
    pub fn run(&mut self) -> Result<(), TuiError> {
        // The deck is loaded by the time the loop starts
        self.app_state.load(Instant::now());

        // Initial render - screen has content immediately
        self.draw()?;

        while !self.app_state.should_quit() {
            let timeout = self.poll_timeout(Instant::now());

            if event::poll(timeout)? {
                let event = event::read()?;
                let now = Instant::now();
                match event {
                    Event::Key(key) => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse, now),
                    Event::Resize(width, height) => self.handle_resize(width, height, now),
                    _ => continue,
                }
                // A stream of events must not starve a due layout
                self.app_state.tick(now);
                self.draw()?;
            } else if self.app_state.tick(Instant::now()) {
                self.draw()?;
            }
        }

        Ok(())
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Wrap an already initialized terminal.
    fn with_terminal(
        terminal: Terminal<B>,
        slides: Vec<Slide>,
        config: &ResolvedConfig,
        styles: CardStyles,
    ) -> Self {
        let width = match terminal.size() {
            Ok(size) if size.width > 0 => size.width,
            _ => 80, // Fallback for errors OR zero width
        };
        let app_state = AppState::new(slides, config, width);

        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles,
            hit_areas: HitAreas::default(),
        }
    }

    /// How long to wait for input before checking deferred work.
    fn poll_timeout(&self, now: Instant) -> Duration {
        let idle = Duration::from_millis(IDLE_POLL_INTERVAL_MS);
        match self.app_state.time_until_layout(now) {
            Some(remaining) => remaining.min(idle),
            None => idle,
        }
    }

    /// Handle a single keyboard event
    fn handle_key(&mut self, key: KeyEvent) {
        // Some platforms report releases too; act on presses only
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Escape closes help overlay if visible (before key binding dispatch)
        if key.code == KeyCode::Esc && self.app_state.help_visible() {
            self.app_state.close_help();
            return;
        }

        match self.key_bindings.get(key) {
            Some(action) => {
                debug!(?action, "Key action");
                self.app_state.handle_key_action(action);
            }
            None => debug!(code = ?key.code, "Unbound key"),
        }
    }

    /// Handle a single mouse event against the last rendered hit areas
    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        handle_mouse(&mut self.app_state, mouse, &self.hit_areas, now);
    }

    /// Terminal resized: the track spans the full width.
    fn handle_resize(&mut self, width: u16, height: u16, now: Instant) {
        debug!("Handling resize to {}x{}", width, height);
        // Guard against zero width from resize events
        let width = if width > 0 { width } else { 80 };
        self.app_state.resize(width, now);
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        let key_bindings = &self.key_bindings;
        let mut hit_areas = HitAreas::default();

        self.terminal.draw(|frame| {
            hit_areas = render_layout(frame, state, styles, key_bindings);
        })?;

        self.hit_areas = hit_areas;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing and benchmarking within the crate.
// They are gated with cfg to ensure they're not accessible from outside the crate.
//
// DO NOT use these in production code.

#[cfg(any(test, feature = "bench-internals"))]
#[allow(dead_code)] // Not all helpers used in every context (tests vs benchmarks)
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// This allows tests to construct TuiApp directly without going through
    /// terminal initialization. Used by acceptance test harness.
    pub(crate) fn new_for_test(terminal: Terminal<B>, slides: Vec<Slide>, config: &ResolvedConfig) -> Self {
        Self::with_terminal(terminal, slides, config, CardStyles::default())
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Get mutable reference to app state (test-only accessor)
    pub(crate) fn app_state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) {
        self.handle_key(key)
    }

    /// Handle a single mouse event at `now` (test-only accessor)
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent, now: Instant) {
        self.handle_mouse(mouse, now)
    }

    /// Resize the backing terminal and deliver the resize event (test-only accessor)
    pub(crate) fn handle_resize_test(&mut self, width: u16, height: u16, now: Instant) {
        self.handle_resize(width, height, now)
    }

    /// Run due deferred work at `now` (test-only accessor)
    pub(crate) fn tick_test(&mut self, now: Instant) -> bool {
        self.app_state.tick(now)
    }

    /// Poll timeout at `now` (test-only accessor)
    pub(crate) fn poll_timeout_test(&self, now: Instant) -> Duration {
        self.poll_timeout(now)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Hit areas from the last render (test-only accessor)
    pub(crate) fn hit_areas(&self) -> &HitAreas {
        &self.hit_areas
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Get mutable reference to terminal (test-only accessor)
    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

#[cfg(feature = "bench-internals")]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for benchmarking (benchmark-only constructor)
    ///
    /// Delegates to new_for_test. Only available with bench-internals feature.
    pub fn new_for_bench(terminal: Terminal<B>, slides: Vec<Slide>, config: &ResolvedConfig) -> Self {
        Self::new_for_test(terminal, slides, config)
    }

    /// Handle a single keyboard event (benchmark-only accessor)
    pub fn handle_key_bench(&mut self, key: KeyEvent) {
        self.handle_key_test(key)
    }

    /// Render a single frame (benchmark-only accessor)
    pub fn render_bench(&mut self) -> Result<(), TuiError> {
        self.render_test()
    }
}

/// Initialize and run the TUI for a parsed deck
///
/// Handles terminal setup, jumps to `start` (zero-based, clamped), runs the
/// event loop, and restores the terminal on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_deck(
    slides: Vec<Slide>,
    config: &ResolvedConfig,
    styles: CardStyles,
    start: usize,
) -> Result<(), TuiError> {
    info!(slides = slides.len(), start, "Starting carousel");
    let mut app = TuiApp::new(slides, config, styles)?;
    app.app_state.go_to(start);

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
