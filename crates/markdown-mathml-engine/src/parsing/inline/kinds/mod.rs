//! # Inline Kinds
//!
//! Built-in host rules. Each kind owns its syntax constants; the parser
//! never hardcodes a delimiter.
//!
//! - **`Text`**: runs of non-terminator characters
//! - **`Escape`**: `\` followed by ASCII punctuation
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing

pub mod code_span;
pub mod escape;
pub mod text;

pub use code_span::CodeSpan;
pub use escape::Escape;
pub use text::Text;
