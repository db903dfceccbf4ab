/// A byte range `[start, end)` into the inline source.
///
/// Tokens store spans rather than copied text so the writer can slice the
/// original source back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `src` with this span.
    ///
    /// # Panics
    /// Panics if the span is out of bounds or not on character boundaries.
    pub fn slice(self, src: &str) -> &str {
        &src[self.start..self.end]
    }
}
