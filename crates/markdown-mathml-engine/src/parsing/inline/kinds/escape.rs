use crate::parsing::{
    inline::{
        state::{InlineState, Mode},
        types::InlineToken,
    },
    span::Span,
};

/// Backslash escapes: `\*` renders as a literal `*`.
pub struct Escape;

impl Escape {
    pub const NAME: &'static str = "escape";
    pub const BACKSLASH: u8 = b'\\';

    pub fn rule(state: &mut dyn InlineState, mode: Mode) -> bool {
        let pos = state.pos();
        if pos + 1 >= state.pos_max() {
            return false;
        }
        let bytes = state.src().as_bytes();
        if bytes[pos] != Self::BACKSLASH || !bytes[pos + 1].is_ascii_punctuation() {
            return false;
        }
        if mode == Mode::Commit {
            state.push(InlineToken::Text(Span::new(pos + 1, pos + 2)));
            state.set_pos(pos + 2);
        }
        true
    }
}
