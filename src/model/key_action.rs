//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Navigation
    /// Move to the previous card. Default: h/←/p
    Prev,
    /// Move to the next card. Default: l/→/n/Space
    Next,
    /// Jump to the first card. Default: g/Home
    First,
    /// Jump to the last card. Default: G/End
    Last,
    /// Jump to a card by zero-based index. Default: digits 1-9
    GoTo(usize),

    // Application
    /// Show or hide the key binding overlay. Default: ?
    ToggleHelp,
    /// Exit the application. Default: q/Esc/Ctrl+c
    Quit,
}

impl KeyAction {
    /// True for actions that move the carousel cursor.
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            KeyAction::Prev | KeyAction::Next | KeyAction::First | KeyAction::Last | KeyAction::GoTo(_)
        )
    }
}
