//! Truth tables, and logical equivalence of expressions.

use boolsimp_parser::ast::Expr;
use std::fmt;
use super::{eval, Assignment};

/// An iterator over every assignment of a list of variables, in counting order.
///
/// The first variable is the most significant: for the variables `A` and `B`, the assignments are
/// `A=0 B=0`, `A=0 B=1`, `A=1 B=0`, and `A=1 B=1`. An empty list of variables has exactly one
/// (empty) assignment.
#[derive(Debug, Clone)]
pub struct Assignments {
    variables: Vec<String>,

    /// The values of the next assignment, or [`None`] once every assignment has been produced.
    next: Option<Vec<bool>>,
}

impl Assignments {
    /// Creates an iterator over the assignments of the given variables.
    pub fn new(variables: impl IntoIterator<Item = String>) -> Self {
        let variables = variables.into_iter().collect::<Vec<_>>();
        let next = Some(vec![false; variables.len()]);
        Self { variables, next }
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        let values = self.next.take()?;
        let assignment = self.variables.iter()
            .zip(values.iter())
            .map(|(name, value)| (name, *value))
            .collect();

        // increment the values as a binary number; there is no next assignment once every digit
        // carries
        let mut values = values;
        if let Some(idx) = values.iter().rposition(|value| !value) {
            values[idx] = true;
            values[idx + 1..].fill(false);
            self.next = Some(values);
        }

        Some(assignment)
    }
}

/// Evaluates an expression under an assignment that binds all of its variables.
fn eval_bound(expr: &Expr, assignment: &Assignment) -> bool {
    match eval(expr, assignment) {
        Ok(value) => value,
        Err(_) => unreachable!("every variable of the expression is assigned"),
    }
}

/// One row of a [`TruthTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The value of each variable, in the same order as [`TruthTable::variables`].
    pub inputs: Vec<bool>,

    /// The value of the expression.
    pub output: bool,
}

/// The value of an expression for every assignment of its variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    /// The variables of the expression, sorted by name.
    pub variables: Vec<String>,

    /// One row for each assignment, in counting order (see [`Assignments`]).
    pub rows: Vec<Row>,
}

impl TruthTable {
    /// Builds the truth table of the expression.
    ///
    /// The table has `2^k` rows for an expression with `k` variables.
    pub fn new(expr: &Expr) -> Self {
        let variables = expr.variables().into_iter().collect::<Vec<_>>();
        let rows = Assignments::new(variables.clone())
            .map(|assignment| Row {
                inputs: assignment.iter().map(|(_, value)| value).collect(),
                output: eval_bound(expr, &assignment),
            })
            .collect();
        Self { variables, rows }
    }

    /// Returns true if the expression is true for every assignment.
    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|row| row.output)
    }

    /// Returns true if the expression is false for every assignment.
    pub fn is_contradiction(&self) -> bool {
        self.rows.iter().all(|row| !row.output)
    }
}

/// Prints the table with one column per variable, followed by the value of the expression.
///
/// ```text
/// A B | F
/// 0 0 | 0
/// 0 1 | 0
/// 1 0 | 0
/// 1 1 | 1
/// ```
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |value: bool| if value { "1" } else { "0" };

        for name in &self.variables {
            write!(f, "{} ", name)?;
        }
        write!(f, "| F")?;

        for row in &self.rows {
            writeln!(f)?;
            for (name, value) in self.variables.iter().zip(&row.inputs) {
                write!(f, "{:<width$} ", bit(*value), width = name.len())?;
            }
            write!(f, "| {}", bit(row.output))?;
        }

        Ok(())
    }
}

/// Returns true if the two expressions have the same value for every assignment of the variables
/// that appear in either of them.
pub fn equivalent(lhs: &Expr, rhs: &Expr) -> bool {
    let mut variables = lhs.variables();
    variables.extend(rhs.variables());

    Assignments::new(variables)
        .all(|assignment| eval_bound(lhs, &assignment) == eval_bound(rhs, &assignment))
}
