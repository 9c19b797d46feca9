//! Horizontal swipe detection.
//!
//! A gesture is sampled twice: where the pointer went down and where it was
//! released. Only the net horizontal delta matters; intermediate drag motion
//! is ignored.

/// Navigation implied by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Dragged left: show the next slide.
    Forward,
    /// Dragged right: show the previous slide.
    Backward,
}

/// Tracks one in-flight swipe gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeTracker {
    threshold: u32,
    start_x: Option<i32>,
}

impl SwipeTracker {
    /// Create a tracker with a dead-zone of `threshold` units either side.
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    /// Record the gesture start. A second start replaces the first.
    pub fn start(&mut self, x: i32) {
        self.start_x = Some(x);
    }

    /// Finish the gesture at `x` and classify it.
    ///
    /// Returns `None` for deltas inside the dead-zone, and for releases with
    /// no recorded start.
    pub fn finish(&mut self, x: i32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        classify(i64::from(x) - i64::from(start), self.threshold)
    }
}

/// Classify a horizontal delta against a symmetric dead-zone.
///
/// A delta must strictly exceed the threshold; landing exactly on it is noise.
pub fn classify(dx: i64, threshold: u32) -> Option<SwipeDirection> {
    let threshold = i64::from(threshold);
    if dx < -threshold {
        Some(SwipeDirection::Forward)
    } else if dx > threshold {
        Some(SwipeDirection::Backward)
    } else {
        None
    }
}
