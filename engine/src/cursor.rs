//! Keyboard focus within a category's statement list.

use restreveal_types::Rating;

/// Highlight used when the focused statement has no rating yet.
const NEUTRAL: Rating = Rating::ALL[2];

/// Which statement has focus and which level its radio row highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    question: usize,
    highlight: Rating,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            question: 0,
            highlight: NEUTRAL,
        }
    }
}

impl Cursor {
    #[must_use]
    pub fn question(&self) -> usize {
        self.question
    }

    #[must_use]
    pub fn highlight(&self) -> Rating {
        self.highlight
    }

    /// Put focus on `question`, taking its stored rating as the highlight.
    pub(crate) fn focus(&mut self, question: usize, stored: Option<Rating>) {
        self.question = question;
        self.highlight = stored.unwrap_or(NEUTRAL);
    }

    pub(crate) fn set_highlight(&mut self, rating: Rating) {
        self.highlight = rating;
    }

    pub(crate) fn raise(&mut self) {
        self.highlight = self.highlight.raise();
    }

    pub(crate) fn lower(&mut self) {
        self.highlight = self.highlight.lower();
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
