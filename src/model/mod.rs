//! Domain model types (pure).
//!
//! All types in this module are pure data with no terminal or I/O concerns.

pub mod error;
pub mod key_action;
pub mod slide;

// Re-export for convenience
pub use error::{AppError, InputError, ParseError};
pub use key_action::KeyAction;
pub use slide::Slide;
