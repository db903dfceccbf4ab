use super::inline::InlineToken;

/// Writes inline tokens as an HTML fragment.
///
/// Text and code are escaped; inline markup is written verbatim.
pub fn render_html(src: &str, tokens: &[InlineToken]) -> String {
    let mut out = String::with_capacity(src.len());
    for token in tokens {
        match token {
            InlineToken::Text(span) => {
                out.push_str(&html_escape::encode_text(span.slice(src)));
            }
            InlineToken::CodeSpan { inner, .. } => {
                out.push_str("<code>");
                out.push_str(&html_escape::encode_text(inner.slice(src)));
                out.push_str("</code>");
            }
            InlineToken::HtmlInline { content, .. } => out.push_str(content),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::InlineParser;

    fn html(src: &str) -> String {
        render_html(src, &InlineParser::new().parse(src))
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(html("a < b & c"), "a &lt; b &amp; c");
    }

    #[test]
    fn code_span_is_wrapped() {
        assert_eq!(html("use `<T>` here"), "use <code>&lt;T&gt;</code> here");
    }

    #[test]
    fn markup_is_verbatim() {
        let tokens = vec![InlineToken::HtmlInline {
            full: crate::parsing::Span::new(0, 1),
            content: "<math><mi>x</mi></math>".to_string(),
        }];
        assert_eq!(render_html("x", &tokens), "<math><mi>x</mi></math>");
    }
}
