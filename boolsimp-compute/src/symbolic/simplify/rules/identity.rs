//! Identity laws: the identity element of a connective can be dropped.

use boolsimp_parser::ast::{Connective, Expr};
use crate::symbolic::{
    simplify::{rules::{do_and, do_or}, step::Step},
    step_collector::StepCollector,
};

/// Removes every operand equal to the identity element of the connective.
///
/// If one operand remains, it replaces the whole connective, unwrapped; if none remain, the
/// result is the identity element itself.
fn remove_identity(connective: Connective, operands: &[Expr]) -> Option<Expr> {
    let identity = connective.identity();
    if !operands.iter().any(|operand| operand.is_constant(identity)) {
        return None;
    }

    let new_operands = operands.iter()
        .filter(|operand| !operand.is_constant(identity))
        .cloned();
    Some(connective.build_unwrapped(new_operands))
}

/// `A1 = A`
pub fn identity_and(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_and(expr, |factors| remove_identity(Connective::And, factors))?;

    step_collector.push(Step::IdentityAnd);
    Some(opt)
}

/// `A + 0 = A`
pub fn identity_or(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_or(expr, |terms| remove_identity(Connective::Or, terms))?;

    step_collector.push(Step::IdentityOr);
    Some(opt)
}

/// Applies all identity rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    identity_and(expr, step_collector)
        .or_else(|| identity_or(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use boolsimp_parser::parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn single_remaining_operand() {
        let mut steps = Vec::new();
        assert_eq!(all(&parse("A*1").unwrap(), &mut steps), Some(Expr::var("A")));
        assert_eq!(all(&parse("0 + B'").unwrap(), &mut steps), Some(!Expr::var("B")));
        assert_eq!(steps, vec![Step::IdentityAnd, Step::IdentityOr]);
    }

    #[test]
    fn several_remaining_operands() {
        let expr = parse("A1B").unwrap();
        assert_eq!(all(&expr, &mut ()), Some(Expr::var("A") & Expr::var("B")));
    }

    #[test]
    fn only_identity_left() {
        // `1 * 1` is just `1` after deduplication, so build the conjunction by hand
        let expr = Expr::and([Expr::Constant(true), Expr::Constant(false)]);
        assert_eq!(identity_and(&expr, &mut ()), Some(Expr::Constant(false)));
    }

    #[test]
    fn single_operand_conjunction_of_identity() {
        // `11` is a conjunction of just `1`
        let expr = parse("11").unwrap();
        assert_eq!(expr.as_and(), Some(&[Expr::Constant(true)][..]));
        assert_eq!(all(&expr, &mut ()), Some(Expr::Constant(true)));
    }

    #[test]
    fn annihilator_is_kept() {
        assert_eq!(all(&parse("A0").unwrap(), &mut ()), None);
        assert_eq!(all(&parse("A + 1").unwrap(), &mut ()), None);
    }
}
