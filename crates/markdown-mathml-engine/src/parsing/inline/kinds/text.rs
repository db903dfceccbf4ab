use crate::parsing::{
    inline::{
        state::{InlineState, Mode},
        types::InlineToken,
    },
    span::Span,
};

/// Plain text runs.
///
/// Consumes characters up to the next terminator so that every other rule
/// gets a chance at positions where markdown syntax may start.
pub struct Text;

impl Text {
    pub const NAME: &'static str = "text";

    /// Returns true for bytes that may begin inline markdown syntax.
    pub fn is_terminator(b: u8) -> bool {
        matches!(
            b,
            b'\n'
                | b'!'
                | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'*'
                | b'+'
                | b'-'
                | b':'
                | b'<'
                | b'='
                | b'>'
                | b'@'
                | b'['
                | b'\\'
                | b']'
                | b'^'
                | b'_'
                | b'`'
                | b'{'
                | b'}'
                | b'~'
        )
    }

    pub fn rule(state: &mut dyn InlineState, mode: Mode) -> bool {
        let start = state.pos();
        let max = state.pos_max();
        let end = state.src().as_bytes()[start..max]
            .iter()
            .position(|&b| Self::is_terminator(b))
            .map_or(max, |offset| start + offset);

        if end == start {
            return false;
        }
        if mode == Mode::Commit {
            state.push(InlineToken::Text(Span::new(start, end)));
            state.set_pos(end);
        }
        true
    }
}
