//! # Inline Parsing
//!
//! A small rule-chain inline parser that hosts the math rule.
//!
//! ## Architecture
//!
//! The parser walks the source with a forward-only cursor. At every
//! position it offers the cursor to each rule in the chain; the first rule
//! that matches consumes a span and pushes tokens. Characters no rule
//! claims become text.
//!
//! Rules see the parser only through [`InlineState`], and are told
//! explicitly whether they are probing or committing via [`Mode`].
//!
//! ## Modules
//!
//! - **`types`**: `InlineToken` enum (Text, CodeSpan, HtmlInline)
//! - **`state`**: `InlineState` capability trait, `Mode`, concrete `ScanState`
//! - **`ruler`**: `InlineRule` trait and the ordered, named `InlineRuler`
//! - **`kinds`**: built-in host rules (text, escape, backticks)
//! - **`parser`**: `InlineParser` driving the chain
//!
//! ## Raw Zone Precedence
//!
//! Code spans are raw zones: `` `\(x\)` `` parses as a single CodeSpan.

pub mod kinds;
pub mod parser;
pub mod ruler;
pub mod state;
pub mod types;

pub use parser::InlineParser;
pub use ruler::{InlineRule, InlineRuler, RulerError};
pub use state::{InlineState, Mode, ScanState};
pub use types::InlineToken;
