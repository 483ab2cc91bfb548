//! The record of every expression visited during a simplification.

use boolsimp_parser::ast::Expr;
use crate::symbolic::step_collector::StepCollector;
use std::{fmt, ops::Deref};
use super::step::{Law, Step};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What produced an entry of a [`Trace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Label {
    /// The expression the simplification started from.
    Initial,

    /// The expression obtained by applying a rewrite to the previous entry.
    Rule(Step),
}

impl Label {
    /// Returns the step of this label, if it is not the initial expression.
    pub fn step(self) -> Option<Step> {
        match self {
            Self::Initial => None,
            Self::Rule(step) => Some(step),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "initial expression"),
            Self::Rule(step) => write!(f, "{}", step),
        }
    }
}

/// A single entry of a [`Trace`]: a label and the printed form of the expression it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEntry {
    /// What produced the expression.
    pub label: Label,

    /// The printed form of the expression.
    pub expr: String,
}

impl TraceEntry {
    /// Creates an entry for the given label and expression.
    pub fn new(label: Label, expr: &Expr) -> Self {
        Self { label, expr: expr.to_string() }
    }
}

/// The ordered list of expressions visited while simplifying.
///
/// The first entry is always labeled [`Label::Initial`] and holds the input expression. Every
/// following entry holds the expression after one more rewrite. The trace dereferences to a slice
/// of its entries.
///
/// Traces can be serialized but not deserialized, since a trace is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Trace(Vec<TraceEntry>);

impl Trace {
    /// Creates a trace holding only the initial expression.
    pub fn new(initial: &Expr) -> Self {
        Self(vec![TraceEntry::new(Label::Initial, initial)])
    }

    /// Returns the initial entry.
    pub fn initial(&self) -> &TraceEntry {
        &self.0[0]
    }

    /// Returns the entries produced by rewrites, skipping the initial entry.
    pub fn rewrites(&self) -> &[TraceEntry] {
        &self.0[1..]
    }

    /// Returns the steps that were applied, in order.
    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        self.rewrites().iter().filter_map(|entry| entry.label.step())
    }

    /// Returns true if any step applied an instance of the given law.
    pub fn contains_law(&self, law: Law) -> bool {
        self.steps().any(|step| step.law() == law)
    }
}

impl Deref for Trace {
    type Target = [TraceEntry];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEntry;
    type IntoIter = std::slice::Iter<'a, TraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl StepCollector<TraceEntry> for Trace {
    fn push(&mut self, entry: TraceEntry) {
        self.0.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn initial_entry() {
        let trace = Trace::new(&(Expr::var("B") | Expr::var("A")));
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.initial().expr, "A + B");
        assert_eq!(trace.initial().label.to_string(), "initial expression");
        assert!(trace.rewrites().is_empty());
    }

    #[test]
    fn steps_and_laws() {
        let mut trace = Trace::new(&(Expr::var("A") & Expr::Constant(true)));
        trace.push(TraceEntry::new(Label::Rule(Step::IdentityAnd), &Expr::var("A")));

        assert_eq!(trace.steps().collect::<Vec<_>>(), vec![Step::IdentityAnd]);
        assert!(trace.contains_law(Law::Identity));
        assert!(!trace.contains_law(Law::Complement));
        assert_eq!(trace[1].label.to_string(), "Identity: A1 = A");
    }
}
