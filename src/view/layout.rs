//! Screen layout rendering.
//!
//! Splits the frame into track, indicator row and status bar, renders each,
//! and records the clickable regions for mouse hit-testing.

use super::constants::{INDICATOR_ROW_HEIGHT, STATUS_BAR_HEIGHT};
use super::help::render_help_overlay;
use super::indicators::render_indicators;
use super::styles::{CardStyles, MUTED_TEXT};
use super::track::{render_controls, render_track};
use crate::config::KeyBindings;
use crate::state::AppState;
use crate::view_state::HitAreas;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

const STATUS_HINT: &str = "?: help  q: quit";
const EMPTY_DECK_MESSAGE: &str = "No slides";

/// Regions of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Slide track.
    pub track: Rect,
    /// Indicator strip.
    pub indicators: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Split the frame: track on top, then indicators, then status bar.
pub fn calculate_screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(INDICATOR_ROW_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        track: chunks[0],
        indicators: chunks[1],
        status: chunks[2],
    }
}

/// Render the whole screen and return where the clickable parts landed.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    styles: &CardStyles,
    key_bindings: &KeyBindings,
) -> HitAreas {
    let areas = calculate_screen_areas(frame.area());

    let hit_areas = match state.carousel() {
        Some(carousel) => {
            let presentation = carousel.view();
            let buf = frame.buffer_mut();
            render_track(
                buf,
                areas.track,
                state.slides(),
                presentation,
                carousel.config().gap,
                styles,
            );
            let controls = render_controls(buf, areas.track, presentation, styles);
            let indicators =
                render_indicators(buf, areas.indicators, presentation.indicators(), styles);

            HitAreas {
                track: areas.track,
                indicators,
                prev: controls.prev,
                next: controls.next,
            }
        }
        None => {
            render_empty_deck(frame, areas.track);
            HitAreas::default()
        }
    };

    render_status_bar(frame, areas.status, state);

    if state.help_visible() {
        render_help_overlay(frame, key_bindings);
    }

    hit_areas
}

fn render_empty_deck(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    let message = Paragraph::new(Line::from(Span::styled(EMPTY_DECK_MESSAGE, MUTED_TEXT)))
        .alignment(Alignment::Center);
    frame.render_widget(message, middle);
}

/// Position and title on the left, key hints on the right.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let position = match (state.carousel(), state.current_slide()) {
        (Some(carousel), Some(slide)) => {
            format!(" Card {}/{} · {}", carousel.cursor() + 1, carousel.slide_count(), slide.title())
        }
        _ => format!(" {}", EMPTY_DECK_MESSAGE),
    };

    let width = usize::from(area.width);
    let hint_width = STATUS_HINT.width() + 1;
    let position = truncate_to_width(&position, width.saturating_sub(hint_width + 1));
    let padding = width.saturating_sub(position.width() + hint_width);

    let line = Line::from(vec![
        Span::styled(position, Style::default().fg(Color::White)),
        Span::raw(" ".repeat(padding)),
        Span::styled(STATUS_HINT, Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Cut `text` to at most `max` display columns.
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
