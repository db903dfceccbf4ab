//! # Math
//!
//! LaTeX math spans delimited by configurable marker pairs, rendered to
//! markup by a pluggable [`MathRenderer`] and spliced into the inline token
//! stream as [`InlineToken::HtmlInline`](crate::parsing::InlineToken).
//!
//! ```
//! use markdown_mathml_engine::{
//!     math::{self, MathOptions, RenderError, RenderOptions},
//!     parsing::{InlineParser, render_html},
//! };
//!
//! let mut parser = InlineParser::new();
//! let renderer = |latex: &str, _: &RenderOptions<'_>| -> Result<String, RenderError> {
//!     Ok(format!("<math>{latex}</math>"))
//! };
//! math::register(&mut parser, MathOptions::default(), renderer).unwrap();
//!
//! let src = "Hello \\(x\\) world";
//! assert_eq!(render_html(src, &parser.parse(src)), "Hello <math>x</math> world");
//! ```

pub mod delimiter;
pub mod render;
pub mod rule;
pub mod strict;

pub use delimiter::Delimiter;
#[cfg(feature = "katex")]
pub use render::KatexRenderer;
pub use render::{MathRenderer, OutputFormat, RenderError, RenderOptions};
pub use rule::{EscapedBracketRule, MathSpan, register};
pub use strict::{Strict, StrictFn, StrictLevel};

/// Configuration of the math rule, fixed at registration time.
#[derive(Debug, Clone)]
pub struct MathOptions {
    /// Delimiter pairs in priority order.
    pub delimiters: Vec<Delimiter>,
    pub strict: Strict,
}

impl Default for MathOptions {
    fn default() -> Self {
        Self {
            delimiters: Delimiter::defaults(),
            strict: Strict::Ignore,
        }
    }
}
