//! Slide track rendering.
//!
//! Each visible card is rendered into its own scratch buffer at full card
//! width, then the columns that fall inside the track area after translation
//! are copied onto the frame. Cards partially off either edge are clipped.

use super::constants::{CONTROL_WIDTH, INACTIVE_CARD_INSET, MIN_TRACK_HEIGHT_FOR_INSET};
use super::styles::CardStyles;
use crate::model::Slide;
use crate::state::{CarouselView, NavControl, SlideState};
use crate::view_state::geometry::slide_offsets;
use crate::view_state::Presentation;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

/// Clickable control rectangles drawn by [`render_controls`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlAreas {
    /// Previous control, when visible.
    pub prev: Option<Rect>,
    /// Next control, when visible.
    pub next: Option<Rect>,
}

/// Draw every card that intersects `area`, shifted by the presentation's
/// translation.
pub fn render_track(
    buf: &mut Buffer,
    area: Rect,
    slides: &[Slide],
    presentation: &Presentation,
    gap: u32,
    styles: &CardStyles,
) {
    if area.is_empty() || presentation.is_empty() {
        return;
    }

    let offsets = slide_offsets(presentation.len(), gap, |i| presentation.slide_width(i));
    let origin = i64::from(area.x) + presentation.translation();
    let left_edge = i64::from(area.x);
    let right_edge = i64::from(area.right());

    for (index, slide) in slides.iter().enumerate() {
        let Some(offset) = offsets.get(index) else {
            break;
        };
        let width = presentation.slide_width(index);
        let left = origin + offset;
        let right = left + i64::from(width);
        if right <= left_edge || left >= right_edge {
            continue;
        }

        let state = presentation
            .slide_state(index)
            .unwrap_or(SlideState::Inactive);
        let inset = match state {
            SlideState::Inactive if area.height >= MIN_TRACK_HEIGHT_FOR_INSET => {
                INACTIVE_CARD_INSET
            }
            _ => 0,
        };
        let card_height = area.height.saturating_sub(inset * 2);
        let card_width = u16::try_from(width).unwrap_or(u16::MAX);
        let card = render_card(slide, state, card_width, card_height, styles);

        for column in 0..card_width {
            let x = left + i64::from(column);
            if x < left_edge || x >= right_edge {
                continue;
            }
            let Ok(x) = u16::try_from(x) else {
                continue;
            };
            for row in 0..card_height {
                let y = area.y + inset + row;
                if let (Some(src), Some(dst)) = (card.cell((column, row)), buf.cell_mut((x, y))) {
                    *dst = src.clone();
                }
            }
        }
    }
}

/// Render one card into a scratch buffer anchored at the origin.
fn render_card(
    slide: &Slide,
    state: SlideState,
    width: u16,
    height: u16,
    styles: &CardStyles,
) -> Buffer {
    let scratch_area = Rect::new(0, 0, width, height);
    let mut scratch = Buffer::empty(scratch_area);

    let (border_type, border_style, body_style) = match state {
        SlideState::Active => (BorderType::Thick, styles.active_border, styles.active_body),
        SlideState::Inactive => (BorderType::Plain, styles.inactive, styles.inactive),
    };

    let block = Block::bordered()
        .border_type(border_type)
        .border_style(border_style)
        .title(Line::from(Span::styled(format!(" {} ", slide.title()), border_style)));

    let body: Vec<Line> = slide
        .body()
        .iter()
        .map(|line| Line::from(Span::styled(line.as_str(), body_style)))
        .collect();

    Paragraph::new(body)
        .block(block)
        .wrap(Wrap { trim: false })
        .render(scratch_area, &mut scratch);

    scratch
}

/// Draw the visible previous/next controls at the vertical middle of `area`.
///
/// Returns where they were drawn. Nothing is drawn when the track is too
/// narrow to hold both.
pub fn render_controls(
    buf: &mut Buffer,
    area: Rect,
    presentation: &Presentation,
    styles: &CardStyles,
) -> ControlAreas {
    if area.width < CONTROL_WIDTH * 2 || area.height == 0 {
        return ControlAreas::default();
    }

    let row = area.y + area.height / 2;
    let prev_rect = Rect::new(area.x, row, CONTROL_WIDTH, 1);
    let next_rect = Rect::new(area.right() - CONTROL_WIDTH, row, CONTROL_WIDTH, 1);

    let mut drawn = ControlAreas::default();
    if presentation.is_control_visible(NavControl::Prev) {
        buf.set_string(prev_rect.x, prev_rect.y, " ‹ ", styles.control);
        drawn.prev = Some(prev_rect);
    }
    if presentation.is_control_visible(NavControl::Next) {
        buf.set_string(next_rect.x, next_rect.y, " › ", styles.control);
        drawn.next = Some(next_rect);
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolvedConfig;
    use crate::state::AppState;
    use crate::view_state::SlideMetrics;

    fn deck(count: usize) -> Vec<Slide> {
        (0..count)
            .map(|i| Slide::new(format!("T{}", i + 1), vec![format!("body {}", i + 1)]))
            .collect()
    }

    fn symbol(buf: &Buffer, x: u16, y: u16) -> &str {
        buf.cell((x, y)).map(|c| c.symbol()).unwrap_or("")
    }

    fn render(state: &AppState, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        let presentation = state.presentation().unwrap();
        render_track(
            &mut buf,
            area,
            state.slides(),
            presentation,
            state.carousel().unwrap().config().gap,
            &CardStyles::default(),
        );
        buf
    }

    #[test]
    fn active_card_is_centered_with_thick_border() {
        // viewport 100, active 60: translation 20
        let state = AppState::new(deck(3), &ResolvedConfig::default(), 100);
        let buf = render(&state, Rect::new(0, 0, 100, 10));

        assert_eq!(symbol(&buf, 20, 0), "┏");
        assert_eq!(symbol(&buf, 79, 0), "┓");
        assert_eq!(symbol(&buf, 20, 9), "┗");
        assert_eq!(symbol(&buf, 19, 0), " ");
    }

    #[test]
    fn inactive_neighbor_is_inset_and_clipped() {
        let state = AppState::new(deck(3), &ResolvedConfig::default(), 100);
        let buf = render(&state, Rect::new(0, 0, 100, 10));

        // second card starts after active width 60 plus gap 2
        assert_eq!(symbol(&buf, 82, 0), " ");
        assert_eq!(symbol(&buf, 82, 1), "┌");
        assert_eq!(symbol(&buf, 82, 8), "└");
        // its right edge (82 + 40) is off screen
        assert_eq!(symbol(&buf, 99, 1), "─");
    }

    #[test]
    fn card_title_and_body_are_drawn() {
        let state = AppState::new(deck(1), &ResolvedConfig::default(), 100);
        let buf = render(&state, Rect::new(0, 0, 100, 10));

        let top: String = (20..30).map(|x| symbol(&buf, x, 0)).collect();
        assert!(top.contains("T1"), "top border was {:?}", top);
        let body: String = (21..31).map(|x| symbol(&buf, x, 1)).collect();
        assert!(body.starts_with("body 1"), "body row was {:?}", body);
    }

    #[test]
    fn shifted_track_moves_cards_left() {
        let mut state = AppState::new(deck(3), &ResolvedConfig::default(), 100);
        state.go_to(1);
        let buf = render(&state, Rect::new(0, 0, 100, 10));

        // preceding 40 + 2, centering target 20: translation -22
        assert_eq!(state.presentation().unwrap().translation(), -22);
        assert_eq!(symbol(&buf, 20, 0), "┏");
        // first card now inactive, its right edge at 40 - 22 - 1
        assert_eq!(symbol(&buf, 17, 1), "┐");
    }

    #[test]
    fn short_track_skips_inset() {
        let state = AppState::new(deck(2), &ResolvedConfig::default(), 100);
        let buf = render(&state, Rect::new(0, 0, 100, 4));
        assert_eq!(symbol(&buf, 82, 0), "┌");
    }

    #[test]
    fn controls_follow_presentation_visibility() {
        let mut state = AppState::new(deck(3), &ResolvedConfig::default(), 40);
        let area = Rect::new(0, 0, 40, 9);
        let mut buf = Buffer::empty(area);

        let drawn = render_controls(&mut buf, area, state.presentation().unwrap(), &CardStyles::default());
        assert_eq!(drawn.prev, None);
        assert_eq!(drawn.next, Some(Rect::new(37, 4, 3, 1)));
        assert_eq!(symbol(&buf, 38, 4), "›");

        state.go_to(1);
        let mut buf = Buffer::empty(area);
        let drawn = render_controls(&mut buf, area, state.presentation().unwrap(), &CardStyles::default());
        assert_eq!(drawn.prev, Some(Rect::new(0, 4, 3, 1)));
        assert_eq!(symbol(&buf, 1, 4), "‹");
    }

    #[test]
    fn controls_skipped_on_narrow_track() {
        let state = AppState::new(deck(3), &ResolvedConfig::default(), 5);
        let area = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(area);
        let drawn = render_controls(&mut buf, area, state.presentation().unwrap(), &CardStyles::default());
        assert_eq!(drawn, ControlAreas::default());
    }

    #[test]
    fn empty_track_draws_nothing() {
        let presentation = Presentation::new(0, 40, SlideMetrics::default(), true);
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        render_track(&mut buf, area, &deck(2), &presentation, 2, &CardStyles::default());

        assert_eq!(buf, Buffer::empty(area));
    }
}
