//! View-state layer - presentation records, geometry and hit-testing
//!
//! Pure data the terminal shell renders from. Nothing here touches the
//! terminal.
//!
//! # Module Structure
//!
//! - `geometry`: slide offsets and the centering translation
//! - `presentation`: Presentation - the terminal's `CarouselView`
//! - `hit_test`: HitAreas - clickable regions of the last frame

pub mod geometry;
pub mod presentation;

pub use hit_test::{HitAreas, HitTarget};
pub use presentation::{ControlState, IndicatorState, Presentation, SlideMetrics};
