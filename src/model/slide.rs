//! Slide content as parsed from a deck.

/// One card of deck content.
///
/// Content only - whether a slide is active and how wide it renders is
/// presentation state owned by the view, not by the slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    title: String,
    body: Vec<String>,
}

impl Slide {
    /// Create a slide from a title and body lines.
    pub fn new(title: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }

    /// Heading shown in the card border.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body lines, without trailing newlines.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// True when the card has no body text.
    pub fn is_body_empty(&self) -> bool {
        self.body.iter().all(|line| line.trim().is_empty())
    }
}
