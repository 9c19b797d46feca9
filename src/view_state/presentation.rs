//! Terminal-side carousel presentation state.
//!
//! [`Presentation`] is the [`CarouselView`] the terminal front end hands to the
//! controller. It records what the controller decided (slide states,
//! indicators, translation, control visibility) and answers width queries from
//! the viewport size and each slide's current state. Rendering reads it back.

use crate::state::carousel::{CarouselView, NavControl, SlideState};

/// Narrowest a slide may render, in cells, so borders and a title still fit.
pub const MIN_SLIDE_WIDTH: u32 = 4;

/// Responsive slide sizing: width as a percentage of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideMetrics {
    /// Width of the active slide, percent of viewport.
    pub active_percent: u16,
    /// Width of inactive slides, percent of viewport.
    pub inactive_percent: u16,
}

impl SlideMetrics {
    /// Width in cells for a slide in `state` inside a viewport `viewport` wide.
    pub fn width_for(&self, state: SlideState, viewport: u32) -> u32 {
        let percent = match state {
            SlideState::Active => self.active_percent,
            SlideState::Inactive => self.inactive_percent,
        };
        let scaled = u64::from(viewport) * u64::from(percent) / 100;
        u32::try_from(scaled).unwrap_or(u32::MAX).max(MIN_SLIDE_WIDTH)
    }
}

impl Default for SlideMetrics {
    fn default() -> Self {
        Self {
            active_percent: 60,
            inactive_percent: 40,
        }
    }
}

/// One indicator in the strip under the track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorState {
    /// Accessible label, e.g. "Go to slide 2".
    pub label: String,
    /// True for the indicator matching the cursor.
    pub active: bool,
}

/// Visibility of one navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    /// Drawn and clickable.
    pub visible: bool,
    /// Hidden from assistive technology; mirrors `!visible`.
    pub aria_hidden: bool,
}

impl ControlState {
    fn shown(visible: bool) -> Self {
        Self {
            visible,
            aria_hidden: !visible,
        }
    }
}

/// Recorded presentation of the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    has_track: bool,
    slide_states: Vec<SlideState>,
    aria_hidden: Vec<bool>,
    indicators: Vec<IndicatorState>,
    translation: i64,
    prev: Option<ControlState>,
    next: Option<ControlState>,
    viewport_width: u32,
    metrics: SlideMetrics,
}

impl Presentation {
    /// Presentation for a track of `slide_count` slides.
    ///
    /// With `with_controls` false the previous/next controls are absent and
    /// visibility updates are ignored.
    pub fn new(
        slide_count: usize,
        viewport_width: u32,
        metrics: SlideMetrics,
        with_controls: bool,
    ) -> Self {
        let controls = with_controls.then_some(ControlState::shown(true));
        Self {
            has_track: true,
            slide_states: vec![SlideState::Inactive; slide_count],
            aria_hidden: vec![true; slide_count],
            indicators: Vec::new(),
            translation: 0,
            prev: controls,
            next: controls,
            viewport_width,
            metrics,
        }
    }

    /// Presentation with no track at all.
    pub fn detached() -> Self {
        Self {
            has_track: false,
            ..Self::new(0, 0, SlideMetrics::default(), false)
        }
    }

    /// Update the measured viewport width. Takes effect on the next layout pass.
    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slide_states.len()
    }

    /// True when the track has no slides.
    pub fn is_empty(&self) -> bool {
        self.slide_states.is_empty()
    }

    /// Presentation state of a slide.
    pub fn slide_state(&self, index: usize) -> Option<SlideState> {
        self.slide_states.get(index).copied()
    }

    /// Whether a slide is hidden from assistive technology.
    pub fn is_aria_hidden(&self, index: usize) -> Option<bool> {
        self.aria_hidden.get(index).copied()
    }

    /// Indices of slides currently marked active.
    pub fn active_slides(&self) -> Vec<usize> {
        self.slide_states
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == SlideState::Active)
            .map(|(i, _)| i)
            .collect()
    }

    /// The indicator strip.
    pub fn indicators(&self) -> &[IndicatorState] {
        &self.indicators
    }

    /// Indices of indicators currently marked active.
    pub fn active_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter(|(_, ind)| ind.active)
            .map(|(i, _)| i)
            .collect()
    }

    /// Current track translation.
    pub fn translation(&self) -> i64 {
        self.translation
    }

    /// State of a control, `None` when controls are absent.
    pub fn control(&self, control: NavControl) -> Option<ControlState> {
        match control {
            NavControl::Prev => self.prev,
            NavControl::Next => self.next,
        }
    }

    /// True when the control exists and is visible.
    pub fn is_control_visible(&self, control: NavControl) -> bool {
        self.control(control).is_some_and(|c| c.visible)
    }
}

impl CarouselView for Presentation {
    fn slide_count(&self) -> Option<usize> {
        self.has_track.then_some(self.slide_states.len())
    }

    fn set_slide_state(&mut self, index: usize, state: SlideState) {
        if let Some(slot) = self.slide_states.get_mut(index) {
            *slot = state;
        }
        if let Some(hidden) = self.aria_hidden.get_mut(index) {
            *hidden = state == SlideState::Inactive;
        }
    }

    fn slide_width(&self, index: usize) -> u32 {
        let state = self
            .slide_states
            .get(index)
            .copied()
            .unwrap_or(SlideState::Inactive);
        self.metrics.width_for(state, self.viewport_width)
    }

    fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    fn set_translation(&mut self, offset: i64) {
        self.translation = offset;
    }

    fn clear_indicators(&mut self) {
        self.indicators.clear();
    }

    fn push_indicator(&mut self, label: String) {
        self.indicators.push(IndicatorState {
            label,
            active: false,
        });
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(indicator) = self.indicators.get_mut(index) {
            indicator.active = active;
        }
    }

    fn set_control_visible(&mut self, control: NavControl, visible: bool) {
        let slot = match control {
            NavControl::Prev => &mut self.prev,
            NavControl::Next => &mut self.next,
        };
        if let Some(state) = slot.as_mut() {
            *state = ControlState::shown(visible);
        }
    }
}
