//! Factorization rules, which pull a shared factor out of two terms of a disjunction.

use boolsimp_parser::ast::{Connective, Expr};
use crate::symbolic::{
    simplify::{rules::{do_or, join_terms, without}, step::Step},
    step_collector::StepCollector,
};

/// Removes `factor` from the factors of a conjunction.
///
/// A single remaining factor is returned by itself, and no remaining factors give `1`.
fn remove_factor(factors: &[Expr], factor: &Expr) -> Expr {
    Connective::And.build_unwrapped(factors.iter().filter(|other| *other != factor).cloned())
}

/// `AB + AC = A(B + C)`
///
/// The first pair of conjunctions (in canonical order) that share a factor is factored. The shared
/// factor is the first factor of the left conjunction that also appears in the right one. A
/// conjunction with a single factor takes part like any other.
pub fn factor_common(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_or(expr, |terms| {
        for (i, lhs) in terms.iter().enumerate() {
            let Some(lhs_factors) = lhs.as_and() else { continue };
            for (j, rhs) in terms.iter().enumerate().skip(i + 1) {
                let Some(rhs_factors) = rhs.as_and() else { continue };
                let Some(common) = lhs_factors.iter().find(|factor| rhs_factors.contains(factor)) else {
                    continue;
                };

                let new_term = common.clone()
                    & (remove_factor(lhs_factors, common) | remove_factor(rhs_factors, common));
                return Some(join_terms(new_term, without(terms, &[i, j])));
            }
        }

        None
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::FactorCommon);
    Some(opt)
}

/// `A + AB = A(1 + B)`
///
/// A term that also appears as a factor of another term is factored out of both. The result is
/// not smaller than the input, but the identity and annihilation laws reduce `1 + B` to `1` and
/// then `A1` to `A`.
pub fn factor_absorbed(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_or(expr, |terms| {
        for (i, term) in terms.iter().enumerate() {
            for (j, other) in terms.iter().enumerate() {
                let Some(factors) = other.as_and() else { continue };
                if i == j || !factors.contains(term) {
                    continue;
                }

                let new_term = term.clone() & (Expr::Constant(true) | remove_factor(factors, term));
                return Some(join_terms(new_term, without(terms, &[i, j])));
            }
        }

        None
    })?;

    step_collector.push(Step::FactorAbsorbed);
    Some(opt)
}

/// Applies all factorization rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    factor_common(expr, step_collector)
        .or_else(|| factor_absorbed(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use boolsimp_parser::parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn factor(input: &str) -> Option<(String, Vec<Step>)> {
        let mut steps = Vec::new();
        let expr = all(&parse(input).unwrap(), &mut steps)?;
        Some((expr.to_string(), steps))
    }

    #[test]
    fn common_factor() {
        assert_eq!(factor("AB + AC"), Some(("A(B + C)".to_string(), vec![Step::FactorCommon])));
    }

    #[test]
    fn common_factor_keeps_other_terms() {
        assert_eq!(factor("AB + AC + D"), Some(("A(B + C) + D".to_string(), vec![Step::FactorCommon])));
    }

    #[test]
    fn common_factor_with_longer_remainders() {
        assert_eq!(factor("ABC + ABD"), Some(("A(BC + BD)".to_string(), vec![Step::FactorCommon])));
    }

    #[test]
    fn absorbed_term() {
        // `1 + B` prints before `A`, so it comes first in the conjunction
        assert_eq!(factor("A + AB"), Some(("(1 + B)A".to_string(), vec![Step::FactorAbsorbed])));
        assert_eq!(factor("B' + AB' + C"), Some(("(1 + A)B' + C".to_string(), vec![Step::FactorAbsorbed])));
    }

    #[test]
    fn single_factor_conjunction() {
        // `(A + B' + C')B'` distributes to `AB' + B' + B'C'`, where the middle term is a
        // conjunction of just `B'`, so it pairs with `AB'` first
        let expr = parse("(A + B' + C')B'").unwrap();
        let expr = crate::symbolic::simplify::rules::distribute::all(&expr, &mut ()).unwrap();
        assert_eq!(expr.to_string(), "AB' + B' + B'C'");

        let mut steps = Vec::new();
        let expr = all(&expr, &mut steps).unwrap();
        assert_eq!(expr.to_string(), "(1 + A)B' + B'C'");
        assert_eq!(steps, vec![Step::FactorCommon]);
    }

    #[test]
    fn absorbed_by_single_factor_conjunction() {
        // `AA` is a conjunction of just `A`; nothing is left after removing `A`, so the remainder
        // is `1`
        assert_eq!(factor("A + AA"), Some(("(1)A".to_string(), vec![Step::FactorAbsorbed])));
    }

    #[test]
    fn common_factor_comes_first() {
        assert_eq!(
            factor("A + AB + AC"),
            Some(("A + A(B + C)".to_string(), vec![Step::FactorCommon])),
        );
    }

    #[test]
    fn nothing_to_factor() {
        assert_eq!(factor("AB + CD"), None);
        assert_eq!(factor("A + B'C"), None);
        assert_eq!(factor("A(B + C)"), None);
    }
}
