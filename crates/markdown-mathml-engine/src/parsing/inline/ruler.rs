use thiserror::Error;

use super::state::{InlineState, Mode};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulerError {
    #[error("inline rule not found: {name}")]
    RuleNotFound { name: String },

    #[error("inline rule already registered: {name}")]
    DuplicateRule { name: String },
}

/// A rule invoked by the inline parser at every scan position.
///
/// Returns true if the rule matched at `state.pos()`. In [`Mode::Commit`] a
/// matching rule must push its tokens and advance the cursor past the
/// consumed span; in [`Mode::Probe`] it must leave the state untouched.
pub trait InlineRule {
    fn apply(&self, state: &mut dyn InlineState, mode: Mode) -> bool;
}

impl<F> InlineRule for F
where
    F: Fn(&mut dyn InlineState, Mode) -> bool,
{
    fn apply(&self, state: &mut dyn InlineState, mode: Mode) -> bool {
        self(state, mode)
    }
}

struct NamedRule {
    name: String,
    rule: Box<dyn InlineRule>,
}

/// Ordered chain of named inline rules. Order is match priority.
#[derive(Default)]
pub struct InlineRuler {
    rules: Vec<NamedRule>,
}

impl InlineRuler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a chain from rules whose names are already known to be distinct.
    pub(super) fn with_rules(
        rules: impl IntoIterator<Item = (&'static str, Box<dyn InlineRule>)>,
    ) -> Self {
        let rules: Vec<NamedRule> = rules
            .into_iter()
            .map(|(name, rule)| NamedRule {
                name: name.to_string(),
                rule,
            })
            .collect();
        debug_assert!(
            rules
                .iter()
                .enumerate()
                .all(|(i, r)| rules[..i].iter().all(|prev| prev.name != r.name)),
            "duplicate rule name in chain"
        );
        Self { rules }
    }

    /// Appends a rule to the end of the chain.
    pub fn push(&mut self, name: &str, rule: impl InlineRule + 'static) -> Result<(), RulerError> {
        self.ensure_unique(name)?;
        self.rules.push(NamedRule {
            name: name.to_string(),
            rule: Box::new(rule),
        });
        Ok(())
    }

    /// Inserts a rule immediately after the rule called `anchor`.
    pub fn after(
        &mut self,
        anchor: &str,
        name: &str,
        rule: impl InlineRule + 'static,
    ) -> Result<(), RulerError> {
        let index = self.index_of(anchor)?;
        self.insert_at(index + 1, name, Box::new(rule))
    }

    /// Inserts a rule immediately before the rule called `anchor`.
    pub fn before(
        &mut self,
        anchor: &str,
        name: &str,
        rule: impl InlineRule + 'static,
    ) -> Result<(), RulerError> {
        let index = self.index_of(anchor)?;
        self.insert_at(index, name, Box::new(rule))
    }

    /// Rule names in priority order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in priority order.
    pub(crate) fn rules(&self) -> impl Iterator<Item = &dyn InlineRule> {
        self.rules.iter().map(|r| r.rule.as_ref())
    }

    fn insert_at(
        &mut self,
        index: usize,
        name: &str,
        rule: Box<dyn InlineRule>,
    ) -> Result<(), RulerError> {
        self.ensure_unique(name)?;
        self.rules.insert(
            index,
            NamedRule {
                name: name.to_string(),
                rule,
            },
        );
        Ok(())
    }

    fn index_of(&self, name: &str) -> Result<usize, RulerError> {
        self.rules
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| RulerError::RuleNotFound {
                name: name.to_string(),
            })
    }

    fn ensure_unique(&self, name: &str) -> Result<(), RulerError> {
        if self.rules.iter().any(|r| r.name == name) {
            return Err(RulerError::DuplicateRule {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for InlineRuler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
