//! De Morgan's laws, which push a negation through a conjunction or disjunction.

use boolsimp_parser::ast::Expr;
use crate::symbolic::{
    simplify::{rules::do_not, step::Step},
    step_collector::StepCollector,
};

/// Negates every operand of a connective and joins them with the dual connective.
fn negate_operands(expr: &Expr) -> Option<Expr> {
    let dual = expr.connective()?.dual();
    let operands = expr.operands()?;
    Some(dual.build(operands.iter().map(|operand| !operand.clone())))
}

/// `(AB)' = A' + B'`
pub fn de_morgan_and(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_not(expr, |inner| {
        if inner.as_and().is_some() {
            negate_operands(inner)
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::DeMorganAnd);
    Some(opt)
}

/// `(A + B)' = A'B'`
pub fn de_morgan_or(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_not(expr, |inner| {
        if inner.as_or().is_some() {
            negate_operands(inner)
        } else {
            None
        }
    })?;

    step_collector.push(Step::DeMorganOr);
    Some(opt)
}

/// Applies all of De Morgan's laws.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    de_morgan_and(expr, step_collector)
        .or_else(|| de_morgan_or(expr, step_collector))
}
