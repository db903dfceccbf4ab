use crate::parsing::{
    inline::{
        state::{InlineState, Mode},
        types::InlineToken,
    },
    span::Span,
};

/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones" - no other inline parsing occurs inside them,
/// so `` `\(x\)` `` stays literal.
pub struct CodeSpan;

impl CodeSpan {
    pub const NAME: &'static str = "backticks";
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Matches a single-backtick code span. Unclosed spans do not match.
    pub fn rule(state: &mut dyn InlineState, mode: Mode) -> bool {
        let start = state.pos();
        let max = state.pos_max();
        let bytes = state.src().as_bytes();
        if start >= max || bytes[start] != Self::TICK {
            return false;
        }

        let inner_start = start + 1;
        let Some(offset) = bytes[inner_start..max]
            .iter()
            .position(|&b| b == Self::TICK)
        else {
            return false;
        };
        let inner_end = inner_start + offset;
        let end = inner_end + 1;

        if mode == Mode::Commit {
            state.push(InlineToken::CodeSpan {
                full: Span::new(start, end),
                inner: Span::new(inner_start, inner_end),
            });
            state.set_pos(end);
        }
        true
    }
}
