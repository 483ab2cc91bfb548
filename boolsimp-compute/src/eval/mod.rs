//! Evaluation of expressions over assignments of their variables.
//!
//! Evaluation is how two expressions are compared for logical equivalence: a simplification is
//! correct exactly when the simplified expression agrees with the input on every row of the truth
//! table over their variables.
//!
//! ```
//! use boolsimp_compute::eval::{equivalent, eval, Assignment};
//! use boolsimp_parser::parser::parse;
//!
//! let expr = parse("AB + C'").unwrap();
//! let assignment = Assignment::from_iter([("A", true), ("B", false), ("C", false)]);
//! assert_eq!(eval(&expr, &assignment), Ok(true));
//!
//! assert!(equivalent(&parse("A + AB").unwrap(), &parse("A").unwrap()));
//! ```

pub mod error;
pub mod table;

use boolsimp_parser::ast::Expr;
use std::collections::BTreeMap;

pub use error::UnboundVariable;
pub use table::{equivalent, Assignments, TruthTable};

/// A value for each of a set of variables.
///
/// Variable names are converted to uppercase, the same way [`Expr::var`] does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    values: BTreeMap<String, bool>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of a variable, replacing any previous value.
    pub fn set(&mut self, name: impl AsRef<str>, value: bool) {
        self.values.insert(name.as_ref().to_uppercase(), value);
    }

    /// Returns the value of a variable, if it has one.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    /// Returns an iterator over the variables and their values, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<S: AsRef<str>> FromIterator<(S, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        let mut assignment = Self::new();
        for (name, value) in iter {
            assignment.set(name, value);
        }
        assignment
    }
}

/// Evaluates the expression with the given values for its variables.
///
/// Every operand is evaluated, so an unbound variable is reported even if the value of the
/// expression would not depend on it.
pub fn eval(expr: &Expr, assignment: &Assignment) -> Result<bool, UnboundVariable> {
    match expr {
        Expr::Constant(value) => Ok(*value),
        Expr::Variable(name) => assignment.get(name)
            .ok_or_else(|| UnboundVariable { name: name.clone() }),
        Expr::Not(inner) => eval(inner, assignment).map(|value| !value),
        Expr::And(factors) => factors.iter()
            .try_fold(true, |acc, factor| Ok(eval(factor, assignment)? && acc)),
        Expr::Or(terms) => terms.iter()
            .try_fold(false, |acc, term| Ok(eval(term, assignment)? || acc)),
    }
}
