use serde::{Deserialize, Serialize};

/// One recognised math span syntax: `left` + content + `right`.
///
/// Rendered in display mode when `display` is set, inline otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiter {
    pub left: String,
    pub right: String,
    pub display: bool,
}

impl Delimiter {
    pub fn new(left: impl Into<String>, right: impl Into<String>, display: bool) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            display,
        }
    }

    /// `\[...\]` for display math.
    pub fn display_brackets() -> Self {
        Self::new("\\[", "\\]", true)
    }

    /// `\(...\)` for inline math.
    pub fn inline_parens() -> Self {
        Self::new("\\(", "\\)", false)
    }

    /// The default delimiter list, in priority order.
    pub fn defaults() -> Vec<Self> {
        vec![Self::display_brackets(), Self::inline_parens()]
    }
}
