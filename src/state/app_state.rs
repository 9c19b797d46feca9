//! Application state.

use crate::config::ResolvedConfig;
use crate::model::{KeyAction, Slide};
use crate::state::carousel::{Carousel, CarouselEvent};
use crate::view_state::{Presentation, SlideMetrics};
use std::time::{Duration, Instant};
use tracing::debug;

/// Everything the terminal shell renders from.
///
/// The carousel is `None` for an empty deck; navigation is then ignored and
/// only quitting and the help overlay respond.
#[derive(Debug)]
pub struct AppState {
    slides: Vec<Slide>,
    carousel: Option<Carousel<Presentation>>,
    help_visible: bool,
    should_quit: bool,
}

impl AppState {
    /// Build state for `slides` shown in a viewport `viewport_width` cells wide.
    pub fn new(slides: Vec<Slide>, config: &ResolvedConfig, viewport_width: u16) -> Self {
        let metrics = SlideMetrics {
            active_percent: config.active_width_percent,
            inactive_percent: config.inactive_width_percent,
        };
        let presentation = Presentation::new(
            slides.len(),
            u32::from(viewport_width),
            metrics,
            config.show_controls,
        );
        let carousel = Carousel::new(presentation, config.carousel());

        Self {
            slides,
            carousel,
            help_visible: false,
            should_quit: false,
        }
    }

    /// The deck.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// The controller, absent for an empty deck.
    pub fn carousel(&self) -> Option<&Carousel<Presentation>> {
        self.carousel.as_ref()
    }

    /// Presentation recorded by the controller.
    pub fn presentation(&self) -> Option<&Presentation> {
        self.carousel.as_ref().map(Carousel::view)
    }

    /// The active slide.
    pub fn current_slide(&self) -> Option<&Slide> {
        let cursor = self.carousel.as_ref()?.cursor();
        self.slides.get(cursor)
    }

    /// Whether the key binding overlay is shown.
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Hide the key binding overlay.
    pub fn close_help(&mut self) {
        self.help_visible = false;
    }

    /// Set once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::ToggleHelp => self.help_visible = !self.help_visible,
            action if action.is_navigation() => {
                let Some(carousel) = self.carousel.as_mut() else {
                    debug!(?action, "Navigation ignored: no slides");
                    return;
                };
                match action {
                    KeyAction::Prev => carousel.prev(),
                    KeyAction::Next => carousel.next(),
                    KeyAction::First => carousel.go_to(0),
                    KeyAction::Last => carousel.go_to(carousel.last_index() as i64),
                    KeyAction::GoTo(index) => {
                        carousel.go_to(i64::try_from(index).unwrap_or(i64::MAX))
                    }
                    KeyAction::Quit | KeyAction::ToggleHelp => false,
                };
            }
            _ => {}
        }
    }

    /// Forward an event to the controller. Returns true if the cursor moved.
    pub fn handle_carousel_event(&mut self, event: CarouselEvent, now: Instant) -> bool {
        match self.carousel.as_mut() {
            Some(carousel) => carousel.handle(event, now),
            None => false,
        }
    }

    /// Jump to a slide by index, clamped. Used for the `--start` option.
    pub fn go_to(&mut self, index: usize) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.go_to(i64::try_from(index).unwrap_or(i64::MAX));
        }
    }

    /// Host finished loading: schedule the deferred first layout.
    pub fn load(&mut self, now: Instant) {
        self.handle_carousel_event(CarouselEvent::Load, now);
    }

    /// Viewport changed: record the new width and schedule a debounced layout.
    pub fn resize(&mut self, viewport_width: u16, now: Instant) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel
                .view_mut()
                .set_viewport_width(u32::from(viewport_width));
            carousel.handle(CarouselEvent::Resize, now);
        }
    }

    /// Run any deferred layout that is due. Returns true if one ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.carousel
            .as_mut()
            .is_some_and(|carousel| carousel.run_due_layout(now))
    }

    /// Time left until the next deferred layout, if one is pending.
    pub fn time_until_layout(&self, now: Instant) -> Option<Duration> {
        self.carousel.as_ref()?.time_until_layout(now)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
