pub mod html;
pub mod inline;
pub mod span;

pub use html::render_html;
pub use inline::{InlineParser, InlineToken};
pub use span::Span;
