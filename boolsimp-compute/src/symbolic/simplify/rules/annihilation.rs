//! Annihilation laws: the annihilating element of a connective decides its value.

use boolsimp_parser::ast::{Connective, Expr};
use crate::symbolic::{
    simplify::{rules::{do_and, do_or}, step::Step},
    step_collector::StepCollector,
};

/// Returns the annihilating element of the connective if any operand is equal to it.
fn annihilate(connective: Connective, operands: &[Expr]) -> Option<Expr> {
    let annihilator = connective.annihilator();
    operands.iter()
        .any(|operand| operand.is_constant(annihilator))
        .then_some(Expr::Constant(annihilator))
}

/// `A0 = 0`
pub fn annihilate_and(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_and(expr, |factors| annihilate(Connective::And, factors))?;

    step_collector.push(Step::AnnihilateAnd);
    Some(opt)
}

/// `A + 1 = 1`
pub fn annihilate_or(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_or(expr, |terms| annihilate(Connective::Or, terms))?;

    step_collector.push(Step::AnnihilateOr);
    Some(opt)
}

/// Applies all annihilation rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    annihilate_or(expr, step_collector)
        .or_else(|| annihilate_and(expr, step_collector))
}
