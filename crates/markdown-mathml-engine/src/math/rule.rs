use super::{
    MathOptions,
    render::{MathRenderer, RenderOptions},
};
use crate::parsing::{
    inline::{InlineParser, InlineRule, InlineState, InlineToken, Mode, RulerError, kinds::Text},
    span::Span,
};

/// A delimiter span located by [`EscapedBracketRule::scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathSpan {
    /// Index of the matching pair in the configured delimiter list.
    pub delimiter: usize,
    /// `left + content + right`.
    pub full: Span,
    /// Content strictly between the delimiters.
    pub content: Span,
}

/// Recognises configured math delimiters and replaces the enclosed LaTeX
/// with rendered markup.
///
/// Pairs are tried in configured order. A pair whose left delimiter matches
/// but whose right delimiter never shows up before the end of the region is
/// skipped in favour of the next pair.
pub struct EscapedBracketRule {
    options: MathOptions,
    renderer: Box<dyn MathRenderer>,
}

impl EscapedBracketRule {
    pub const NAME: &'static str = "escaped_bracket";

    pub fn new(options: MathOptions, renderer: impl MathRenderer + 'static) -> Self {
        Self {
            options,
            renderer: Box::new(renderer),
        }
    }

    /// Finds the first configured pair that opens at `start` and closes
    /// before `max`.
    ///
    /// Both delimiters must lie entirely inside `[start, max)`. The search
    /// for the right delimiter steps one byte at a time and does not
    /// understand nesting or escapes.
    pub fn scan(&self, src: &str, start: usize, max: usize) -> Option<MathSpan> {
        let bytes = src.as_bytes();
        let max = max.min(bytes.len());
        if start >= max {
            return None;
        }
        let region = &bytes[..max];

        for (index, delim) in self.options.delimiters.iter().enumerate() {
            let left = delim.left.as_bytes();
            let right = delim.right.as_bytes();
            if left.is_empty() || !region[start..].starts_with(left) {
                continue;
            }

            let content_start = start + left.len();
            let found = (content_start..max).find(|&pos| region[pos..].starts_with(right));
            let Some(content_end) = found else {
                log::debug!("unterminated {:?} at byte {start}", delim.left);
                continue;
            };

            return Some(MathSpan {
                delimiter: index,
                full: Span::new(start, content_end + right.len()),
                content: Span::new(content_start, content_end),
            });
        }
        None
    }
}

impl InlineRule for EscapedBracketRule {
    fn apply(&self, state: &mut dyn InlineState, mode: Mode) -> bool {
        let Some(found) = self.scan(state.src(), state.pos(), state.pos_max()) else {
            return false;
        };
        if mode.is_probe() {
            return true;
        }

        let delim = &self.options.delimiters[found.delimiter];
        let content = found.content.slice(state.src());
        let opts = RenderOptions::mathml(delim.display, &self.options.strict);
        let rendered = match self.renderer.render(content, &opts) {
            Ok(markup) => markup,
            Err(err) => {
                log::error!(
                    "failed to render math {:?} at bytes {}..{}: {err}",
                    content,
                    found.full.start,
                    found.full.end
                );
                return false;
            }
        };

        state.push(InlineToken::HtmlInline {
            full: found.full,
            content: rendered,
        });
        state.set_pos(found.full.end);
        true
    }
}

/// Registers the math rule on `parser`, immediately after the `text` rule.
pub fn register(
    parser: &mut InlineParser,
    options: MathOptions,
    renderer: impl MathRenderer + 'static,
) -> Result<(), RulerError> {
    log::debug!(
        "registering {} with {} delimiter pair(s)",
        EscapedBracketRule::NAME,
        options.delimiters.len()
    );
    parser.ruler.after(
        Text::NAME,
        EscapedBracketRule::NAME,
        EscapedBracketRule::new(options, renderer),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        math::{Delimiter, render::RenderError},
        parsing::inline::ScanState,
    };
    use pretty_assertions::assert_eq;

    fn echo(latex: &str, opts: &RenderOptions<'_>) -> Result<String, RenderError> {
        let tag = if opts.display_mode { "block" } else { "inline" };
        Ok(format!("<math {tag}>{latex}</math>"))
    }

    fn default_rule() -> EscapedBracketRule {
        EscapedBracketRule::new(MathOptions::default(), echo)
    }

    #[test]
    fn scan_inline_parens() {
        let src = "Hello \\(x^2\\) world";
        let found = default_rule().scan(src, 6, src.len()).unwrap();
        assert_eq!(found.delimiter, 1);
        assert_eq!(found.full, Span::new(6, 13));
        assert_eq!(found.content.slice(src), "x^2");
    }

    #[test]
    fn scan_requires_left_at_start() {
        let src = "Hello \\(x^2\\)";
        assert_eq!(default_rule().scan(src, 0, src.len()), None);
    }

    #[test]
    fn scan_unterminated() {
        let src = "\\(unterminated";
        assert_eq!(default_rule().scan(src, 0, src.len()), None);
    }

    #[test]
    fn scan_right_must_fit_before_max() {
        let src = "\\(x\\)";
        // The closing `\)` straddles the boundary.
        assert_eq!(default_rule().scan(src, 0, 4), None);
        assert!(default_rule().scan(src, 0, 5).is_some());
    }

    #[test]
    fn scan_does_not_nest() {
        let src = "\\(a \\(b\\) c\\)";
        let found = default_rule().scan(src, 0, src.len()).unwrap();
        assert_eq!(found.content.slice(src), "a \\(b");
    }

    #[test]
    fn scan_falls_through_to_later_pair_with_same_left() {
        let options = MathOptions {
            delimiters: vec![Delimiter::new("$", "!", true), Delimiter::new("$", "$", false)],
            ..MathOptions::default()
        };
        let rule = EscapedBracketRule::new(options, echo);
        let src = "$a$";
        let found = rule.scan(src, 0, src.len()).unwrap();
        assert_eq!(found.delimiter, 1);
        assert_eq!(found.content.slice(src), "a");
    }

    #[test]
    fn scan_first_pair_wins() {
        let options = MathOptions {
            delimiters: vec![Delimiter::new("$", "$", false), Delimiter::new("$$", "$$", true)],
            ..MathOptions::default()
        };
        let rule = EscapedBracketRule::new(options, echo);
        let src = "$$a+b$$";
        let found = rule.scan(src, 0, src.len()).unwrap();
        assert_eq!(found.delimiter, 0);
        assert_eq!(found.full, Span::new(0, 2));
        assert!(found.content.is_empty());
    }

    #[test]
    fn empty_left_never_matches() {
        let options = MathOptions {
            delimiters: vec![Delimiter::new("", "", false)],
            ..MathOptions::default()
        };
        let rule = EscapedBracketRule::new(options, echo);
        assert_eq!(rule.scan("abc", 0, 3), None);
    }

    #[test]
    fn empty_delimiter_list_never_matches() {
        let options = MathOptions {
            delimiters: vec![],
            ..MathOptions::default()
        };
        let rule = EscapedBracketRule::new(options, echo);
        assert_eq!(rule.scan("\\(x\\)", 0, 5), None);
    }

    #[test]
    fn scan_skips_over_multibyte_content() {
        let src = "\\(α→β\\)";
        let found = default_rule().scan(src, 0, src.len()).unwrap();
        assert_eq!(found.content.slice(src), "α→β");
    }

    #[test]
    fn probe_leaves_state_untouched() {
        let mut state = ScanState::new("\\[E=mc^2\\]");
        assert!(default_rule().apply(&mut state, Mode::Probe));
        assert_eq!(state.pos(), 0);
        assert!(state.tokens().is_empty());
    }

    #[test]
    fn commit_pushes_markup_and_advances() {
        let mut state = ScanState::new("\\[E=mc^2\\] rest");
        assert!(default_rule().apply(&mut state, Mode::Commit));
        assert_eq!(state.pos(), 10);
        assert_eq!(
            state.tokens(),
            &[InlineToken::HtmlInline {
                full: Span::new(0, 10),
                content: "<math block>E=mc^2</math>".to_string(),
            }]
        );
    }

    #[test]
    fn render_failure_reports_no_match() {
        let failing = |_: &str, _: &RenderOptions<'_>| -> Result<String, RenderError> {
            Err(RenderError::Engine("boom".to_string()))
        };
        let rule = EscapedBracketRule::new(MathOptions::default(), failing);
        let mut state = ScanState::new("\\(\\bad\\)");
        assert!(!rule.apply(&mut state, Mode::Commit));
        assert_eq!(state.pos(), 0);
        assert!(state.tokens().is_empty());
    }

    #[test]
    fn renderer_receives_tolerant_mathml_options() {
        let options = MathOptions {
            strict: crate::math::Strict::Warn,
            ..MathOptions::default()
        };
        let check = |latex: &str, opts: &RenderOptions<'_>| -> Result<String, RenderError> {
            assert!(!opts.throw_on_error);
            assert_eq!(opts.output, crate::math::OutputFormat::Mathml);
            assert!(!opts.display_mode);
            assert!(matches!(opts.strict, crate::math::Strict::Warn));
            Ok(latex.to_string())
        };
        let rule = EscapedBracketRule::new(options, check);
        let mut state = ScanState::new("\\(y\\)");
        assert!(rule.apply(&mut state, Mode::Commit));
    }

    #[test]
    fn register_places_rule_after_text() {
        let mut parser = InlineParser::new();
        register(&mut parser, MathOptions::default(), echo).unwrap();
        assert_eq!(
            parser.ruler.names().collect::<Vec<_>>(),
            ["text", "escaped_bracket", "escape", "backticks"]
        );
    }

    #[test]
    fn register_twice_is_rejected() {
        let mut parser = InlineParser::new();
        register(&mut parser, MathOptions::default(), echo).unwrap();
        let err = register(&mut parser, MathOptions::default(), echo).unwrap_err();
        assert!(matches!(err, RulerError::DuplicateRule { .. }));
    }

    #[test]
    fn register_without_text_rule_fails() {
        let mut parser = InlineParser::empty();
        let err = register(&mut parser, MathOptions::default(), echo).unwrap_err();
        assert_eq!(
            err,
            RulerError::RuleNotFound {
                name: "text".to_string()
            }
        );
    }
}
