use super::{
    kinds::{CodeSpan, Escape, Text},
    ruler::{InlineRule, InlineRuler},
    state::{InlineState, Mode, ScanState},
    types::InlineToken,
};

/// Rule-chain driven inline parser.
///
/// Scans left to right. At every position the rules are tried in chain
/// order; the first one that matches consumes a span. When no rule
/// matches, the character under the cursor becomes text.
#[derive(Debug)]
pub struct InlineParser {
    pub ruler: InlineRuler,
}

impl Default for InlineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineParser {
    /// Creates a parser with the built-in chain: `text`, `escape`, `backticks`.
    pub fn new() -> Self {
        let builtin: [(&'static str, fn(&mut dyn InlineState, Mode) -> bool); 3] = [
            (Text::NAME, Text::rule),
            (Escape::NAME, Escape::rule),
            (CodeSpan::NAME, CodeSpan::rule),
        ];
        let ruler = InlineRuler::with_rules(
            builtin
                .into_iter()
                .map(|(name, rule)| (name, Box::new(rule) as Box<dyn InlineRule>)),
        );
        Self { ruler }
    }

    /// Creates a parser with no rules at all; everything parses as text.
    pub fn empty() -> Self {
        Self {
            ruler: InlineRuler::new(),
        }
    }

    /// Parses `src` into a sequence of [`InlineToken`]s covering the input.
    pub fn parse(&self, src: &str) -> Vec<InlineToken> {
        let mut state = ScanState::new(src);
        self.tokenize(&mut state);
        state.into_tokens()
    }

    /// Runs the rule chain over the state's region until it is exhausted.
    pub fn tokenize(&self, state: &mut ScanState<'_>) {
        while !state.eof() {
            if !self.apply_rules(state) {
                state.bump_text();
            }
        }
    }

    /// Reports whether any rule would match at byte `pos` of `src`.
    ///
    /// Rules run in probe mode; no tokens are produced.
    pub fn matches_at(&self, src: &str, pos: usize) -> bool {
        let mut state = ScanState::with_region(src, pos, src.len());
        self.ruler
            .rules()
            .any(|rule| rule.apply(&mut state, Mode::Probe))
    }

    fn apply_rules(&self, state: &mut ScanState<'_>) -> bool {
        let before = state.pos();
        for rule in self.ruler.rules() {
            if rule.apply(state, Mode::Commit) {
                if state.pos() > before {
                    return true;
                }
                log::debug!("inline rule matched at {before} without consuming input");
            }
        }
        false
    }
}
