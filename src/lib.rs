//! Card Reel (cardreel)
//!
//! Terminal carousel for browsing a deck of text cards.
//!
//! This is the library root. The carousel controller and everything it
//! decides live in the pure core (`state`, `view_state`); the terminal shell
//! (`view`) only measures, renders and forwards events.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
