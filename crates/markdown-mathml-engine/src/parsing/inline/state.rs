use super::types::InlineToken;
use crate::parsing::span::Span;

/// How a rule is being invoked.
///
/// `Probe` asks "would this rule match here?" and must leave the state
/// untouched. `Commit` performs the match: tokens are pushed and the cursor
/// moves past the consumed span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Probe,
    Commit,
}

impl Mode {
    pub fn is_probe(self) -> bool {
        matches!(self, Mode::Probe)
    }
}

/// The slice of parser state an inline rule is allowed to see.
///
/// Rules read the source and the scan region, move the cursor forward and
/// append tokens. Nothing else about the host parser is exposed.
pub trait InlineState {
    /// The full source text being scanned.
    fn src(&self) -> &str;

    /// Current byte position of the cursor.
    fn pos(&self) -> usize;

    /// Moves the cursor. Positions before the current one are rejected.
    fn set_pos(&mut self, pos: usize);

    /// End of the inline scan region (exclusive).
    fn pos_max(&self) -> usize;

    /// Appends a token to the output stream.
    fn push(&mut self, token: InlineToken);
}

/// Concrete scan state owned by [`InlineParser`](super::InlineParser).
///
/// Tracks a forward-only byte cursor over `src[..pos_max]` plus the tokens
/// emitted so far.
#[derive(Debug, Clone)]
pub struct ScanState<'a> {
    src: &'a str,
    pos: usize,
    pos_max: usize,
    tokens: Vec<InlineToken>,
}

impl<'a> ScanState<'a> {
    /// Creates a state scanning the whole of `src`.
    pub fn new(src: &'a str) -> Self {
        Self::with_region(src, 0, src.len())
    }

    /// Creates a state scanning `src[pos..pos_max]`.
    ///
    /// `pos_max` is clamped to the source length, and both bounds are moved
    /// back to the nearest character boundary.
    pub fn with_region(src: &'a str, pos: usize, pos_max: usize) -> Self {
        let pos_max = floor_char_boundary(src, pos_max.min(src.len()));
        Self {
            src,
            pos: floor_char_boundary(src, pos.min(pos_max)),
            pos_max,
            tokens: Vec::new(),
        }
    }

    /// Returns true once the cursor has reached the end of the region.
    pub fn eof(&self) -> bool {
        self.pos >= self.pos_max
    }

    /// Consumes the character under the cursor as plain text.
    ///
    /// Used by the parser when no rule matched at this position.
    pub fn bump_text(&mut self) {
        let Some(ch) = self.src[self.pos..].chars().next() else {
            return;
        };
        let end = (self.pos + ch.len_utf8()).min(self.pos_max);
        self.push(InlineToken::Text(Span::new(self.pos, end)));
        self.pos = end;
    }

    /// Tokens emitted so far.
    pub fn tokens(&self) -> &[InlineToken] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<InlineToken> {
        self.tokens
    }
}

fn floor_char_boundary(src: &str, mut index: usize) -> usize {
    while !src.is_char_boundary(index) {
        index -= 1;
    }
    index
}

impl InlineState for ScanState<'_> {
    fn src(&self) -> &str {
        self.src
    }

    fn pos(&self) -> usize {
        self.pos
    }

    fn set_pos(&mut self, pos: usize) {
        debug_assert!(
            pos >= self.pos,
            "cursor moved backwards: {} -> {}",
            self.pos,
            pos
        );
        if pos >= self.pos {
            self.pos = pos.min(self.pos_max);
        }
    }

    fn pos_max(&self) -> usize {
        self.pos_max
    }

    fn push(&mut self, token: InlineToken) {
        if let InlineToken::Text(next) = token
            && let Some(InlineToken::Text(prev)) = self.tokens.last_mut()
            && prev.end == next.start
        {
            prev.end = next.end;
            return;
        }
        self.tokens.push(token);
    }
}
