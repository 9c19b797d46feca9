//! Deck input sources.
//!
//! A deck is read once, in full, from either a file or piped stdin.

use crate::model::error::InputError;
use crate::model::{AppError, Slide};
use crate::parser::parse_deck;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing::debug;

/// Where the deck text comes from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
    /// Deck file on disk.
    File(PathBuf),
    /// Deck piped through stdin.
    Stdin,
}

impl DeckSource {
    /// Read the whole source into a string.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for I/O errors, including invalid UTF-8.
    pub fn read_to_string(&self) -> Result<String, InputError> {
        match self {
            DeckSource::File(path) => Ok(std::fs::read_to_string(path)?),
            DeckSource::Stdin => read_all(std::io::stdin().lock()),
        }
    }

    /// Read and parse the deck.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InputRead` if the source cannot be read and
    /// `AppError::Parse` if the text is not a valid deck.
    pub fn read_deck(&self) -> Result<Vec<Slide>, AppError> {
        let text = self.read_to_string()?;
        let slides = parse_deck(&text)?;
        debug!(source = ?self, slides = slides.len(), "Deck loaded");
        Ok(slides)
    }
}

fn read_all(mut reader: impl Read) -> Result<String, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// Detect and create the appropriate deck source.
///
/// # Logic:
/// 1. If a file path is provided: use it (must exist)
/// 2. If stdin is piped: use stdin
/// 3. Else: return InputError::NoInput
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::NoInput` if no file is provided and stdin is a terminal.
pub fn detect_deck_source(file: Option<PathBuf>) -> Result<DeckSource, InputError> {
    match file {
        Some(path) if !path.exists() => Err(InputError::FileNotFound { path }),
        Some(path) => Ok(DeckSource::File(path)),
        None if std::io::stdin().is_terminal() => Err(InputError::NoInput),
        None => Ok(DeckSource::Stdin),
    }
}
