//! Implementation of the rewrite rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the rewritten expression if the rule applies, or `None` if the
//! rule does not apply. A rule only ever looks at the root of the expression it is given; reaching
//! into subexpressions is the job of [`descend`].

pub mod absorption;
pub mod annihilation;
pub mod complement;
pub mod de_morgan;
pub mod distribute;
pub mod factor;
pub mod identity;
pub mod negation;

use boolsimp_parser::ast::Expr;
use crate::symbolic::step_collector::StepCollector;
use std::iter::once;
use super::step::Step;

/// If the expression is a negation, calls the given transformation function with the negated
/// expression.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_not(expr: &Expr, f: impl Fn(&Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Not(inner) = expr {
        f(inner)
    } else {
        None
    }
}

/// If the expression is a conjunction, calls the given transformation function with the factors.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_and(expr: &Expr, f: impl Fn(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    expr.as_and().and_then(f)
}

/// If the expression is a disjunction, calls the given transformation function with the terms.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_or(expr: &Expr, f: impl Fn(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    expr.as_or().and_then(f)
}

/// Returns the operands with the ones at the given indices left out, preserving their order.
pub(crate) fn without(operands: &[Expr], skip: &[usize]) -> Vec<Expr> {
    operands.iter()
        .enumerate()
        .filter(|(idx, _)| !skip.contains(idx))
        .map(|(_, operand)| operand.clone())
        .collect()
}

/// Joins a newly built term with the untouched terms of a disjunction.
///
/// With no other terms, the new term replaces the whole disjunction.
pub(crate) fn join_terms(term: Expr, others: Vec<Expr>) -> Expr {
    if others.is_empty() {
        term
    } else {
        Expr::or(once(term).chain(others))
    }
}

/// Rewrites the first subexpression that any rule applies to.
///
/// The operand of a negation is tried first. For a conjunction or disjunction, each operand is
/// tried in canonical order, and the first one that can be rewritten is replaced; the parent is
/// then rebuilt, which may flatten or merge the new operand into it.
pub fn descend(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    match expr {
        Expr::Not(inner) => all(inner, step_collector).map(|new_inner| !new_inner),
        Expr::And(operands) | Expr::Or(operands) => {
            let connective = expr.connective()?;
            operands.iter()
                .enumerate()
                .find_map(|(idx, operand)| Some((idx, all(operand, step_collector)?)))
                .map(|(idx, new_operand)| {
                    let mut new_operands = operands.to_vec();
                    new_operands[idx] = new_operand;
                    connective.build(new_operands)
                })
        },
        Expr::Constant(_) | Expr::Variable(_) => None,
    }
}

/// Applies the first law that matches the root of the expression, without looking into
/// subexpressions.
pub fn at_root(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    complement::all(expr, step_collector)
        .or_else(|| identity::all(expr, step_collector))
        .or_else(|| annihilation::all(expr, step_collector))
        .or_else(|| distribute::all(expr, step_collector))
        .or_else(|| factor::all(expr, step_collector))
        .or_else(|| absorption::all(expr, step_collector))
        .or_else(|| de_morgan::all(expr, step_collector))
        .or_else(|| negation::all(expr, step_collector))
}

/// Applies all rules.
///
/// Subexpressions are always rewritten before the expression itself, so at most one rewrite is
/// performed per call.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    descend(expr, step_collector)
        .or_else(|| at_root(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use boolsimp_parser::parser::parse;
    use pretty_assertions::assert_eq;
    use test_log::test;
    use super::*;

    /// Applies one rewrite to the parsed input, returning the printed result and the step.
    fn rewrite(input: &str) -> Option<(String, Step)> {
        let expr = parse(input).unwrap();
        let mut step: Option<Step> = None;
        let new_expr = all(&expr, &mut step)?;
        Some((new_expr.to_string(), step.unwrap()))
    }

    #[test]
    fn children_before_root() {
        // the root is a disjunction with a 1 in it, but the first operand is rewritten first
        assert_eq!(rewrite("A1 + 1"), Some(("1 + A".to_string(), Step::IdentityAnd)));
    }

    #[test]
    fn first_child_wins() {
        assert_eq!(rewrite("(A + A')(B + B')"), Some(("1(B + B')".to_string(), Step::ComplementOr)));
    }

    #[test]
    fn descend_through_negation() {
        assert_eq!(rewrite("(A + 0)'"), Some(("A'".to_string(), Step::IdentityOr)));
    }

    #[test]
    fn rebuilt_parent_is_flattened() {
        // `(A + B)1` becomes `A + B`, which merges into the outer disjunction
        assert_eq!(rewrite("C + (A + B)1"), Some(("A + B + C".to_string(), Step::IdentityAnd)));
    }

    #[test]
    fn normal_forms() {
        for input in ["A", "0", "1", "A'", "A + B", "AB", "A'B + AB'", "AB'C"] {
            assert_eq!(rewrite(input), None, "`{}` should be in normal form", input);
        }
    }

    #[test]
    fn single_operand_conjunction_is_a_conjunction() {
        // `(0 + B)B` rebuilds to a conjunction of just `B`, which De Morgan's law still sees
        let expr = parse("((0 + B)B)'").unwrap();
        let mut step: Option<Step> = None;
        let expr = all(&expr, &mut step).unwrap();
        assert_eq!((expr.to_string(), step), ("(B)'".to_string(), Some(Step::IdentityOr)));

        let mut step: Option<Step> = None;
        let expr = all(&expr, &mut step).unwrap();
        assert_eq!((expr.to_string(), step), ("B'".to_string(), Some(Step::DeMorganAnd)));
        assert_eq!(expr.as_or(), Some(&[!Expr::var("B")][..]));
        assert_eq!(all(&expr, &mut ()), None);
    }

    #[test]
    fn join_with_other_terms() {
        let term = Expr::var("A") & Expr::var("B");
        assert_eq!(join_terms(term.clone(), vec![]), term);
        assert_eq!(join_terms(term, vec![Expr::var("C")]).to_string(), "AB + C");
    }

    #[test]
    fn without_indices() {
        let operands = [Expr::var("A"), Expr::var("B"), Expr::var("C")];
        assert_eq!(without(&operands, &[0, 2]), vec![Expr::var("B")]);
        assert_eq!(without(&operands, &[]), operands.to_vec());
    }
}
