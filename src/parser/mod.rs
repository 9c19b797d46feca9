//! Deck parser.
//!
//! Pure functions that split deck text into [`Slide`]s. A deck is plain text
//! with cards separated by a line containing only `---`:
//!
//! ```text
//! # Welcome
//! First card body
//! ---
//! # Features
//! Second card body
//! ```
//!
//! Separators inside fenced code blocks are card content.

use crate::model::{ParseError, Slide};

/// Line that separates two cards.
const SEPARATOR: &str = "---";

/// Prefix that opens or closes a fenced code block.
const FENCE: &str = "```";

/// Prefix marking the first line of a card as its title.
const TITLE_PREFIX: &str = "# ";

/// Upper bound on cards per deck.
pub const MAX_SLIDES: usize = 10_000;

/// Parse deck text into slides.
///
/// Blank cards are skipped, so a deck of only separators and whitespace yields
/// an empty vector. An empty deck is valid input; it leaves the carousel inert.
///
/// # Errors
///
/// Returns `ParseError::UnterminatedFence` if a code fence is never closed.
/// Returns `ParseError::TooManySlides` if the deck exceeds [`MAX_SLIDES`].
pub fn parse_deck(text: &str) -> Result<Vec<Slide>, ParseError> {
    let mut slides = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut open_fence: Option<usize> = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim_end();

        if line.trim_start().starts_with(FENCE) {
            open_fence = match open_fence {
                Some(_) => None,
                None => Some(idx + 1),
            };
        } else if open_fence.is_none() && line == SEPARATOR {
            push_card(&mut slides, &current)?;
            current.clear();
            continue;
        }

        current.push(line);
    }

    if let Some(line) = open_fence {
        return Err(ParseError::UnterminatedFence { line });
    }

    push_card(&mut slides, &current)?;
    Ok(slides)
}

/// Turn one separator-delimited block into a slide, skipping blank blocks.
fn push_card(slides: &mut Vec<Slide>, lines: &[&str]) -> Result<(), ParseError> {
    let lines = trim_blank_lines(lines);
    let Some((first, rest)) = lines.split_first() else {
        return Ok(());
    };

    if slides.len() >= MAX_SLIDES {
        return Err(ParseError::TooManySlides { limit: MAX_SLIDES });
    }

    let slide = match first.strip_prefix(TITLE_PREFIX) {
        Some(title) => Slide::new(title.trim(), to_owned_lines(trim_blank_lines(rest))),
        None => Slide::new(format!("Slide {}", slides.len() + 1), to_owned_lines(lines)),
    };
    slides.push(slide);
    Ok(())
}

fn trim_blank_lines<'a>(lines: &'a [&'a str]) -> &'a [&'a str] {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |i| i + 1);
    &lines[start..end]
}

fn to_owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| (*l).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_deck_splits_on_separator() {
        let deck = "# One\nfirst\n---\n# Two\nsecond\n";
        let slides = parse_deck(deck).unwrap();

        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].title(), "One");
        assert_eq!(slides[0].body(), &["first".to_string()]);
        assert_eq!(slides[1].title(), "Two");
        assert_eq!(slides[1].body(), &["second".to_string()]);
    }

    #[test]
    fn parse_deck_numbers_untitled_cards() {
        let deck = "plain body\n---\n# Titled\n---\nanother";
        let slides = parse_deck(deck).unwrap();

        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].title(), "Slide 1");
        assert_eq!(slides[0].body(), &["plain body".to_string()]);
        assert_eq!(slides[1].title(), "Titled");
        assert!(slides[1].is_body_empty());
        assert_eq!(slides[2].title(), "Slide 3");
    }

    #[test]
    fn parse_deck_skips_blank_cards() {
        let deck = "\n---\n   \n---\n# Only\nbody\n---\n\n";
        let slides = parse_deck(deck).unwrap();

        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].title(), "Only");
    }

    #[test]
    fn parse_deck_empty_input_yields_no_slides() {
        assert_eq!(parse_deck("").unwrap(), Vec::new());
        assert_eq!(parse_deck("---\n---\n").unwrap(), Vec::new());
    }

    #[test]
    fn parse_deck_trims_blank_lines_around_body() {
        let deck = "\n\n# Title\n\n\nbody line\n\n";
        let slides = parse_deck(deck).unwrap();

        assert_eq!(slides[0].body(), &["body line".to_string()]);
    }

    #[test]
    fn parse_deck_keeps_inner_blank_lines() {
        let deck = "# T\na\n\nb";
        let slides = parse_deck(deck).unwrap();

        assert_eq!(
            slides[0].body(),
            &["a".to_string(), String::new(), "b".to_string()]
        );
    }

    #[test]
    fn parse_deck_separator_with_trailing_whitespace_splits() {
        let deck = "# A\n---   \n# B";
        let slides = parse_deck(deck).unwrap();
        assert_eq!(slides.len(), 2);
    }

    #[test]
    fn parse_deck_indented_separator_is_content() {
        let deck = "# A\n  ---\nstill a";
        let slides = parse_deck(deck).unwrap();
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].body().len(), 2);
    }

    #[test]
    fn parse_deck_separator_inside_fence_is_content() {
        let deck = "# Code\n```\n---\n```\n---\n# Next";
        let slides = parse_deck(deck).unwrap();

        assert_eq!(slides.len(), 2);
        assert_eq!(
            slides[0].body(),
            &["```".to_string(), "---".to_string(), "```".to_string()]
        );
    }

    #[test]
    fn parse_deck_reports_unterminated_fence_line() {
        let deck = "# A\nbody\n---\n# B\n```rust\nfn main() {}\n";
        let result = parse_deck(deck);

        assert_eq!(result, Err(ParseError::UnterminatedFence { line: 5 }));
    }

    #[test]
    fn parse_deck_handles_crlf_line_endings() {
        let deck = "# A\r\none\r\n---\r\n# B\r\ntwo\r\n";
        let slides = parse_deck(deck).unwrap();

        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].body(), &["one".to_string()]);
    }

    #[test]
    fn parse_deck_rejects_too_many_slides() {
        let deck = vec!["x"; MAX_SLIDES + 1].join("\n---\n");
        let result = parse_deck(&deck);

        assert_eq!(result, Err(ParseError::TooManySlides { limit: MAX_SLIDES }));
    }

    #[test]
    fn parse_deck_accepts_exactly_max_slides() {
        let deck = vec!["x"; MAX_SLIDES].join("\n---\n");
        let slides = parse_deck(&deck).unwrap();
        assert_eq!(slides.len(), MAX_SLIDES);
    }
}
