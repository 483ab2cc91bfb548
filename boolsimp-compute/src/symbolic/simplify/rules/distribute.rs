//! Simplification rules related to the distributive property.

use boolsimp_parser::ast::Expr;
use crate::symbolic::{
    simplify::{rules::{do_and, without}, step::Step},
    step_collector::StepCollector,
};
use std::iter::once;

/// `A(B + C) = AB + AC`
pub fn distributive_property(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_and(expr, |factors| {
        // find the first disjunction, and distribute every other factor over it
        let idx = factors.iter().position(|factor| matches!(factor, Expr::Or(_)))?;
        let terms = factors[idx].as_or()?;
        let other_factors = without(factors, &[idx]);

        let new_terms = terms.iter()
            .map(|term| Expr::and(other_factors.iter().cloned().chain(once(term.clone()))));
        Some(Expr::or(new_terms))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::Distribute);
    Some(opt)
}

/// Applies all distribution rules.
///
/// The distributive property increases the size of the expression, but exposes the terms to the
/// factorization and absorption rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    distributive_property(expr, step_collector)
}
