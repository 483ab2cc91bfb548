//! Complement laws: an operand next to its own negation decides the whole connective.

use boolsimp_parser::ast::Expr;
use crate::symbolic::{
    simplify::{rules::{do_and, do_or}, step::Step},
    step_collector::StepCollector,
};

/// Returns true if two of the operands are complements of each other.
fn has_complementary_pair(operands: &[Expr]) -> bool {
    operands.iter()
        .enumerate()
        .any(|(i, lhs)| operands[i + 1..].iter().any(|rhs| lhs.is_complement_of(rhs)))
}

/// `A + A' = 1`
pub fn complement_or(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_or(expr, |terms| {
        has_complementary_pair(terms).then_some(Expr::Constant(true))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::ComplementOr);
    Some(opt)
}

/// `AA' = 0`
pub fn complement_and(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_and(expr, |factors| {
        has_complementary_pair(factors).then_some(Expr::Constant(false))
    })?;

    step_collector.push(Step::ComplementAnd);
    Some(opt)
}

/// Applies all complement rules.
///
/// The complement rules collapse an entire connective into a constant.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    complement_or(expr, step_collector)
        .or_else(|| complement_and(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use boolsimp_parser::parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn or_with_complement() {
        let expr = parse("A + B + A'").unwrap();
        let mut steps = Vec::new();
        assert_eq!(all(&expr, &mut steps), Some(Expr::Constant(true)));
        assert_eq!(steps, vec![Step::ComplementOr]);
    }

    #[test]
    fn and_with_complement() {
        let expr = parse("(A + B)C(A + B)'").unwrap();
        assert_eq!(all(&expr, &mut ()), Some(Expr::Constant(false)));
    }

    #[test]
    fn negated_operand_is_not_enough() {
        assert_eq!(all(&parse("A'B").unwrap(), &mut ()), None);
        assert_eq!(all(&parse("A + (AB)'").unwrap(), &mut ()), None);
    }
}
