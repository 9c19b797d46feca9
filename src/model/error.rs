//! Error types for cardreel.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - Deck file/stdin reading failures (file not found, no input, IO)
//!   - [`ParseError`] - Deck parsing failures (unterminated fence, too many cards)
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # What is NOT an error
//!
//! The carousel controller itself never fails. Missing collaborators leave it inert,
//! out-of-range navigation is clamped and resize bursts are debounced. Only the
//! edges of the program (reading the deck, driving the terminal) produce errors.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All domain-specific error types convert to `AppError` via `From`, so
/// application code can use `?` freely.
///
/// # Examples
///
/// ```no_run
/// use cardreel::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _deck = read_deck()?;
///     Ok(())
/// }
/// # fn read_deck() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the deck from file or stdin. Fatal.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// The deck text could not be split into cards. Fatal: a half-parsed deck
    /// would silently drop cards.
    #[error("Failed to parse deck: {0}")]
    Parse(#[from] ParseError),

    /// Terminal or TUI rendering error.
    ///
    /// Failures in the crossterm/ratatui layer such as broken pipes or I/O errors
    /// during rendering. Without a working terminal the carousel cannot run.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading a deck from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified deck file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use cardreel::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.deck")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.deck"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No input source was provided - user must supply a deck path or pipe stdin.
    ///
    /// Occurs when cardreel is run without a path in an interactive terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardreel::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("deck path or pipe data to stdin"));
    /// ```
    #[error("No input source: provide a deck path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from the input source.
    ///
    /// Permission denied, invalid UTF-8, broken pipes when reading stdin, etc.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when splitting deck text into cards.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A fenced code block was opened and never closed.
    ///
    /// Separators inside a fence are card content, so an unclosed fence would
    /// swallow every card after it.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardreel::model::error::ParseError;
    ///
    /// let err = ParseError::UnterminatedFence { line: 7 };
    /// assert!(err.to_string().contains("line 7"));
    /// ```
    #[error("Code fence opened at line {line} is never closed")]
    UnterminatedFence {
        /// 1-based line number of the opening fence.
        line: usize,
    },

    /// The deck holds more cards than the carousel accepts.
    #[error("Deck has more than {limit} slides")]
    TooManySlides {
        /// The maximum number of cards.
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_converts_into_app_error() {
        let err: AppError = InputError::NoInput.into();
        assert!(matches!(err, AppError::InputRead(InputError::NoInput)));
    }

    #[test]
    fn parse_error_converts_into_app_error() {
        let err: AppError = ParseError::UnterminatedFence { line: 3 }.into();
        assert!(
            err.to_string().contains("line 3"),
            "AppError should carry the fence line, got: {}",
            err
        );
    }

    #[test]
    fn io_error_converts_into_input_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: InputError = io.into();
        assert!(matches!(err, InputError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn too_many_slides_mentions_limit() {
        let err = ParseError::TooManySlides { limit: 10_000 };
        assert_eq!(err.to_string(), "Deck has more than 10000 slides");
    }
}
