//! UI state machine (pure).
//!
//! All state transitions are plain functions over plain data, testable
//! without a terminal. Time is passed in, never read.

pub mod app_state;
pub mod carousel;
pub mod gesture;
pub mod layout_scheduler;
pub mod mouse_handler;

// Re-export for convenience
pub use app_state::AppState;
pub use carousel::{Carousel, CarouselEvent, CarouselView, NavControl, SlideState};
pub use gesture::{SwipeDirection, SwipeTracker};
pub use layout_scheduler::LayoutScheduler;
pub use mouse_handler::handle_mouse;
