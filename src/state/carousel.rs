//! Carousel controller.
//!
//! The controller owns one piece of mutable state, the cursor, and drives
//! everything else through an injected [`CarouselView`]. Every cursor change
//! runs one synchronous [`Carousel::layout`] pass that restyles slides,
//! recenters the track, syncs indicators and toggles the navigation controls.
//!
//! Geometry changes (load, resize) do not lay out immediately. They go
//! through a [`LayoutScheduler`] so a burst of resizes costs one pass.

use crate::config::CarouselConfig;
use crate::state::gesture::{SwipeDirection, SwipeTracker};
use crate::state::layout_scheduler::LayoutScheduler;
use crate::view_state::geometry::{centering_translation, preceding_offset};
use std::time::{Duration, Instant};
use tracing::debug;

/// Presentation state of one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    /// Centered, full size, emphasized.
    Active,
    /// Shrunk and de-emphasized.
    Inactive,
}

/// One of the two navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavControl {
    /// Moves towards the first slide.
    Prev,
    /// Moves towards the last slide.
    Next,
}

/// The collaborators the controller reads from and writes to.
///
/// Implementations own the slide track, the indicator strip, the viewport and
/// the optional previous/next controls. Widths are read after
/// [`set_slide_state`](CarouselView::set_slide_state) so views may size slides
/// by their state.
pub trait CarouselView {
    /// Number of slides in the track, or `None` when there is no track.
    fn slide_count(&self) -> Option<usize>;

    /// Apply active/inactive presentation to a slide, including its
    /// accessibility-hidden flag.
    fn set_slide_state(&mut self, index: usize, state: SlideState);

    /// Current rendered width of a slide.
    fn slide_width(&self, index: usize) -> u32;

    /// Current visible width of the viewport.
    fn viewport_width(&self) -> u32;

    /// Shift the track horizontally; negative moves it left.
    fn set_translation(&mut self, offset: i64);

    /// Remove every indicator.
    fn clear_indicators(&mut self);

    /// Append an indicator for the next slide position.
    fn push_indicator(&mut self, label: String);

    /// Mark an indicator active or inactive.
    fn set_indicator_active(&mut self, index: usize, active: bool);

    /// Show or hide a navigation control. Views without controls ignore this.
    fn set_control_visible(&mut self, control: NavControl, visible: bool);
}

/// External input the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// An indicator was clicked.
    IndicatorClicked(usize),
    /// The previous control was clicked.
    PrevClicked,
    /// The next control was clicked.
    NextClicked,
    /// A drag began at this horizontal coordinate.
    GestureStart {
        /// Pointer x at press.
        x: i32,
    },
    /// A drag ended at this horizontal coordinate.
    GestureEnd {
        /// Pointer x at release.
        x: i32,
    },
    /// The host finished loading; late assets may still change sizes.
    Load,
    /// The viewport changed size.
    Resize,
}

/// Carousel controller over a view `V`.
///
/// Only exists for a view with at least one slide; see [`Carousel::new`].
#[derive(Debug)]
pub struct Carousel<V> {
    view: V,
    config: CarouselConfig,
    len: usize,
    cursor: usize,
    layout_passes: u64,
    swipe: SwipeTracker,
    scheduler: LayoutScheduler,
}

impl<V: CarouselView> Carousel<V> {
    /// Attach a controller to `view`.
    ///
    /// Returns `None`, leaving the view untouched, when the view has no track
    /// or no slides. Otherwise rebuilds the indicators (one per slide), sets
    /// the cursor to 0 and runs the initial layout pass.
    pub fn new(mut view: V, config: CarouselConfig) -> Option<Self> {
        let len = match view.slide_count() {
            None => {
                debug!("Carousel track absent; controller not initialized");
                return None;
            }
            Some(0) => {
                debug!("Carousel track has no slides; controller inert");
                return None;
            }
            Some(n) => n,
        };

        view.clear_indicators();
        for i in 0..len {
            view.push_indicator(format!("Go to slide {}", i + 1));
        }

        let mut carousel = Self {
            view,
            swipe: SwipeTracker::new(config.swipe_threshold),
            config,
            len,
            cursor: 0,
            layout_passes: 0,
            scheduler: LayoutScheduler::new(),
        };
        carousel.layout();
        Some(carousel)
    }

    /// Index of the active slide.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of slides; always at least 1.
    pub fn slide_count(&self) -> usize {
        self.len
    }

    /// Index of the last slide.
    pub fn last_index(&self) -> usize {
        self.len - 1
    }

    /// Number of layout passes run so far, including the initial one.
    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }

    /// Controller tuning.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The attached view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view, e.g. to update its viewport size.
    ///
    /// Changes made here are not laid out until the next pass.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Move the cursor to `target`, clamped into range.
    ///
    /// A request that lands on the current cursor is a no-op and runs no
    /// layout pass. Returns true if the cursor moved.
    pub fn go_to(&mut self, target: i64) -> bool {
        let clamped = target.clamp(0, self.last_index() as i64) as usize;
        if clamped == self.cursor {
            return false;
        }
        self.cursor = clamped;
        self.layout();
        true
    }

    /// Advance one slide. Wraps to the first slide only when looping.
    pub fn next(&mut self) -> bool {
        if self.config.looping && self.cursor == self.last_index() {
            return self.go_to(0);
        }
        self.go_to(self.cursor as i64 + 1)
    }

    /// Go back one slide. Wraps to the last slide only when looping.
    pub fn prev(&mut self) -> bool {
        if self.config.looping && self.cursor == 0 {
            return self.go_to(self.last_index() as i64);
        }
        self.go_to(self.cursor as i64 - 1)
    }

    /// Recompute every derived presentation property from the cursor.
    pub fn layout(&mut self) {
        let cursor = self.cursor;

        // Restyle first: widths depend on active/inactive state.
        for i in 0..self.len {
            let state = if i == cursor {
                SlideState::Active
            } else {
                SlideState::Inactive
            };
            self.view.set_slide_state(i, state);
        }

        let view = &self.view;
        let preceding = preceding_offset(cursor, self.config.gap, |i| view.slide_width(i));
        let translation = centering_translation(
            preceding,
            view.slide_width(cursor),
            view.viewport_width(),
        );
        self.view.set_translation(translation);

        for i in 0..self.len {
            self.view.set_indicator_active(i, i == cursor);
        }

        let (prev_visible, next_visible) = self.control_visibility();
        self.view.set_control_visible(NavControl::Prev, prev_visible);
        self.view.set_control_visible(NavControl::Next, next_visible);

        self.layout_passes += 1;
        debug!(
            cursor,
            translation,
            pass = self.layout_passes,
            "Carousel layout pass"
        );
    }

    /// Whether (prev, next) should be shown for the current cursor.
    pub fn control_visibility(&self) -> (bool, bool) {
        if self.config.looping {
            let many = self.len > 1;
            return (many, many);
        }
        (self.cursor > 0, self.cursor < self.last_index())
    }

    /// Dispatch an external event.
    ///
    /// `now` is only consulted by geometry events, which schedule a deferred
    /// layout instead of running one. Returns true if the cursor moved.
    pub fn handle(&mut self, event: CarouselEvent, now: Instant) -> bool {
        match event {
            CarouselEvent::IndicatorClicked(index) => {
                self.go_to(i64::try_from(index).unwrap_or(i64::MAX))
            }
            CarouselEvent::PrevClicked => self.prev(),
            CarouselEvent::NextClicked => self.next(),
            CarouselEvent::GestureStart { x } => {
                self.swipe.start(x);
                false
            }
            CarouselEvent::GestureEnd { x } => match self.swipe.finish(x) {
                Some(SwipeDirection::Forward) => {
                    debug!(x, "Swipe forward");
                    self.next()
                }
                Some(SwipeDirection::Backward) => {
                    debug!(x, "Swipe backward");
                    self.prev()
                }
                None => false,
            },
            CarouselEvent::Load => {
                self.schedule_layout(now, self.config.load_delay);
                false
            }
            CarouselEvent::Resize => {
                self.schedule_layout(now, self.config.resize_debounce);
                false
            }
        }
    }

    fn schedule_layout(&mut self, now: Instant, delay: Duration) {
        if self.scheduler.schedule(now, delay) {
            debug!(?delay, "Rescheduled pending layout pass");
        }
    }

    /// Run the deferred layout pass if it is due. Returns true if it ran.
    pub fn run_due_layout(&mut self, now: Instant) -> bool {
        if self.scheduler.take_due(now) {
            self.layout();
            true
        } else {
            false
        }
    }

    /// Time left until the deferred layout pass, if one is pending.
    ///
    /// Zero once the pass is overdue.
    pub fn time_until_layout(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_due(now)
    }
}

#[cfg(test)]
#[path = "carousel_tests.rs"]
mod tests;
