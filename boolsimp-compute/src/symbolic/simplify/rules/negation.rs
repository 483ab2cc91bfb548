//! Rules that remove negations without pushing them anywhere.

use boolsimp_parser::ast::Expr;
use crate::symbolic::{
    simplify::{rules::do_not, step::Step},
    step_collector::StepCollector,
};

/// `(A')' = A`
pub fn double_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_not(expr, |inner| match inner {
        Expr::Not(expr) => Some((**expr).clone()),
        _ => None,
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::DoubleNegation);
    Some(opt)
}

/// `0' = 1`
/// `1' = 0`
pub fn negate_constant(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_not(expr, |inner| inner.as_constant().map(|value| Expr::Constant(!value)))?;

    step_collector.push(Step::NegateConstant);
    Some(opt)
}

/// Applies all negation rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    double_negation(expr, step_collector)
        .or_else(|| negate_constant(expr, step_collector))
}
