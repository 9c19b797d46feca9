//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay listing the active key bindings.
//! Triggered by '?' key, dismissed by '?' again.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use crate::config::KeyBindings;
use crate::model::KeyAction;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, key_bindings: &KeyBindings) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(key_bindings))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        super::styles::MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = scale(area.width, percent_x);
    let popup_height = scale(area.height, percent_y);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn scale(length: u16, percent: u16) -> u16 {
    let scaled = u32::from(length) * u32::from(percent.min(100)) / 100;
    u16::try_from(scaled).unwrap_or(length)
}

/// Display order of actions in the overlay. Digit jumps are folded into a
/// single "Go to card" row after "Last card".
const ACTION_ORDER: [(KeyAction, &str); 6] = [
    (KeyAction::Prev, "Previous card"),
    (KeyAction::Next, "Next card"),
    (KeyAction::First, "First card"),
    (KeyAction::Last, "Last card"),
    (KeyAction::ToggleHelp, "Toggle help"),
    (KeyAction::Quit, "Quit"),
];

/// Build one line per action: its bound keys followed by a description.
fn build_help_content(key_bindings: &KeyBindings) -> Vec<Line<'static>> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let described = key_bindings.describe();

    let mut rows: Vec<(String, &str)> = ACTION_ORDER
        .iter()
        .map(|(action, label)| (keys_for(&described, |a| a == action), *label))
        .collect();
    rows.insert(4, (digit_range(&described), "Go to card"));
    rows.retain(|(keys, _)| !keys.is_empty());

    let key_column = rows.iter().map(|(keys, _)| keys.chars().count()).max().unwrap_or(0) + 2;

    rows.into_iter()
        .map(|(keys, label)| {
            Line::from(vec![
                Span::styled(format!("  {:<width$}", keys, width = key_column), key_style),
                Span::styled(label.to_string(), desc_style),
            ])
        })
        .collect()
}

/// Comma-separated keys bound to actions matching `predicate`.
fn keys_for<F>(described: &[(KeyAction, String)], predicate: F) -> String
where
    F: Fn(&KeyAction) -> bool,
{
    described
        .iter()
        .filter(|(action, _)| predicate(action))
        .map(|(_, key)| key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// "1-9" style summary of the digit jump bindings.
fn digit_range(described: &[(KeyAction, String)]) -> String {
    let mut digits: Vec<&str> = described
        .iter()
        .filter(|(action, _)| matches!(action, KeyAction::GoTo(_)))
        .map(|(_, key)| key.as_str())
        .collect();
    digits.sort_unstable();
    match (digits.first(), digits.last()) {
        (Some(first), Some(last)) if first != last => format!("{}-{}", first, last),
        (Some(only), _) => (*only).to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
