//! Absorption laws: an operand swallows any operand of the dual connective that contains it.
//!
//! When simplifying from the top, these rules are usually pre-empted: [`factor_absorbed`] rewrites
//! the disjunctive form first, and distribution rewrites the conjunctive form first. They still
//! fire on expressions handed to them directly.
//!
//! [`factor_absorbed`]: super::factor::factor_absorbed

use boolsimp_parser::ast::{Connective, Expr};
use crate::symbolic::{
    simplify::{rules::{do_and, do_or, without}, step::Step},
    step_collector::StepCollector,
};

/// Finds an operand `i` that appears inside another operand `j` built with the dual connective,
/// and drops operand `j`.
///
/// When `i` and `j` are the only operands, operand `i` replaces the whole connective. Any other
/// operands are kept next to `i`, rather than being absorbed along with `j`: `A + AB + C` becomes
/// `A + C`, not `A`.
fn absorb(connective: Connective, operands: &[Expr]) -> Option<Expr> {
    let dual = connective.dual();
    operands.iter()
        .enumerate()
        .find_map(|(i, operand)| {
            operands.iter()
                .enumerate()
                .position(|(j, other)| {
                    i != j
                        && other.connective() == Some(dual)
                        && other.operands().is_some_and(|inner| inner.contains(operand))
                })
        })
        .map(|j| connective.build_unwrapped(without(operands, &[j])))
}

/// `A + AB = A`
pub fn absorb_or(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_or(expr, |terms| absorb(Connective::Or, terms))?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AbsorbOr);
    Some(opt)
}

/// `A(A + B) = A`
pub fn absorb_and(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_and(expr, |factors| absorb(Connective::And, factors))?;

    step_collector.push(Step::AbsorbAnd);
    Some(opt)
}

/// Applies all absorption rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    absorb_or(expr, step_collector)
        .or_else(|| absorb_and(expr, step_collector))
}
