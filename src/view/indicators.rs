//! Indicator strip: one dot per slide under the track.

use super::styles::CardStyles;
use crate::view_state::IndicatorState;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";

/// Draw the indicator strip centered in `area`.
///
/// Dots are separated by a space when the row is wide enough, packed
/// otherwise. When even packed dots do not fit, a `current/total` counter is
/// drawn instead and no dot is clickable.
///
/// Returns one rectangle per indicator, in slide order, or an empty list when
/// the counter fallback was used.
pub fn render_indicators(
    buf: &mut Buffer,
    area: Rect,
    indicators: &[IndicatorState],
    styles: &CardStyles,
) -> Vec<Rect> {
    if area.is_empty() || indicators.is_empty() {
        return Vec::new();
    }

    let count = indicators.len();
    let width = usize::from(area.width);
    let spaced = count * 2 - 1;
    let stride = if spaced <= width {
        2
    } else if count <= width {
        1
    } else {
        render_counter(buf, area, indicators, styles);
        return Vec::new();
    };

    let used = count * stride - (stride - 1);
    let start = area.x + u16::try_from((width - used) / 2).unwrap_or(0);

    let mut rects = Vec::with_capacity(count);
    for (i, indicator) in indicators.iter().enumerate() {
        let x = start + u16::try_from(i * stride).unwrap_or(u16::MAX);
        let (dot, style) = dot_for(indicator, styles);
        buf.set_string(x, area.y, dot, style);
        rects.push(Rect::new(x, area.y, 1, 1));
    }
    rects
}

fn dot_for(indicator: &IndicatorState, styles: &CardStyles) -> (&'static str, Style) {
    if indicator.active {
        (ACTIVE_DOT, styles.indicator_active)
    } else {
        (INACTIVE_DOT, styles.indicator_inactive)
    }
}

fn render_counter(buf: &mut Buffer, area: Rect, indicators: &[IndicatorState], styles: &CardStyles) {
    let current = indicators.iter().position(|i| i.active).map_or(0, |i| i + 1);
    let text = format!("{}/{}", current, indicators.len());
    let len = u16::try_from(text.len()).unwrap_or(u16::MAX);
    let x = area.x + area.width.saturating_sub(len) / 2;
    buf.set_stringn(x, area.y, &text, usize::from(area.width), styles.indicator_active);
}
