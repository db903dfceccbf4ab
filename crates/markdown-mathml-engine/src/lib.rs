pub mod math;
pub mod parsing;

pub use math::{Delimiter, MathOptions, MathRenderer, Strict};
pub use parsing::{InlineParser, InlineToken, Span, render_html};

/// Builds a parser with the math rule registered.
pub fn math_parser(
    options: MathOptions,
    renderer: impl MathRenderer + 'static,
) -> Result<InlineParser, parsing::inline::RulerError> {
    let mut parser = InlineParser::new();
    math::register(&mut parser, options, renderer)?;
    Ok(parser)
}

/// Parses `src` and writes it as an HTML fragment.
pub fn render_inline(parser: &InlineParser, src: &str) -> String {
    render_html(src, &parser.parse(src))
}
