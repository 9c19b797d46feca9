//! Mouse event handler.
//!
//! Maps raw mouse events onto carousel events using the hit areas recorded
//! by the last render.

use crate::state::carousel::CarouselEvent;
use crate::state::AppState;
use crate::view_state::{HitAreas, HitTarget};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

/// Translate a mouse event into a carousel event, if it means anything.
///
/// - Left press on an indicator or visible control: click.
/// - Left press on the track: gesture start.
/// - Left release anywhere: gesture end (ignored by the controller when no
///   gesture is in flight).
/// - Horizontal wheel: previous/next.
pub fn mouse_to_carousel_event(mouse: MouseEvent, areas: &HitAreas) -> Option<CarouselEvent> {
    let x = i32::from(mouse.column);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match areas.hit_test(mouse.column, mouse.row) {
                HitTarget::Indicator(index) => Some(CarouselEvent::IndicatorClicked(index)),
                HitTarget::Prev => Some(CarouselEvent::PrevClicked),
                HitTarget::Next => Some(CarouselEvent::NextClicked),
                HitTarget::Track => Some(CarouselEvent::GestureStart { x }),
                HitTarget::Miss => None,
            }
        }
        MouseEventKind::Up(MouseButton::Left) => Some(CarouselEvent::GestureEnd { x }),
        MouseEventKind::ScrollLeft => Some(CarouselEvent::PrevClicked),
        MouseEventKind::ScrollRight => Some(CarouselEvent::NextClicked),
        _ => None,
    }
}

/// Route a mouse event to the carousel. Returns true if the cursor moved.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent, areas: &HitAreas, now: Instant) -> bool {
    match mouse_to_carousel_event(mouse, areas) {
        Some(event) => state.handle_carousel_event(event, now),
        None => false,
    }
}
