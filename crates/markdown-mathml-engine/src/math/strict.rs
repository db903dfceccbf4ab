use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// What the rendering engine should do about a non-standard LaTeX construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrictLevel {
    Ignore,
    Warn,
    Error,
}

/// Callback deciding strictness per offence: `(error_code, message)`.
pub type StrictFn = Arc<dyn Fn(&str, &str) -> StrictLevel + Send + Sync>;

/// Strictness setting handed to the rendering engine.
///
/// `Bool(true)` behaves like `Error` and `Bool(false)` like `Ignore`.
#[derive(Clone, Default)]
pub enum Strict {
    Bool(bool),
    #[default]
    Ignore,
    Warn,
    Error,
    Custom(StrictFn),
}

impl Strict {
    /// Resolves the level that applies to one offence.
    pub fn level_for(&self, error_code: &str, message: &str) -> StrictLevel {
        match self {
            Strict::Bool(true) | Strict::Error => StrictLevel::Error,
            Strict::Bool(false) | Strict::Ignore => StrictLevel::Ignore,
            Strict::Warn => StrictLevel::Warn,
            Strict::Custom(f) => f(error_code, message),
        }
    }

    /// True when every offence is ignored.
    pub fn is_lenient(&self) -> bool {
        matches!(self, Strict::Bool(false) | Strict::Ignore)
    }
}

impl From<StrictLevel> for Strict {
    fn from(level: StrictLevel) -> Self {
        match level {
            StrictLevel::Ignore => Strict::Ignore,
            StrictLevel::Warn => Strict::Warn,
            StrictLevel::Error => Strict::Error,
        }
    }
}

impl From<bool> for Strict {
    fn from(v: bool) -> Self {
        Strict::Bool(v)
    }
}

impl fmt::Debug for Strict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strict::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Strict::Ignore => f.write_str("Ignore"),
            Strict::Warn => f.write_str("Warn"),
            Strict::Error => f.write_str("Error"),
            Strict::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
