use crate::parsing::span::Span;

/// A token produced by the inline parser.
///
/// Source-backed variants store spans; only rendered markup carries an
/// owned string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineToken {
    /// Plain text. Contiguous text spans are merged when pushed.
    Text(Span),
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// Raw markup written verbatim by the HTML writer, e.g. rendered math.
    HtmlInline {
        /// Source span the markup replaces, delimiters included.
        full: Span,
        /// The markup itself.
        content: String,
    },
}

impl InlineToken {
    /// Extracts the source span covered by any token variant.
    pub fn span(&self) -> Span {
        match self {
            InlineToken::Text(sp) => *sp,
            InlineToken::CodeSpan { full, .. } => *full,
            InlineToken::HtmlInline { full, .. } => *full,
        }
    }
}
