use boolsimp_compute::{
    eval::{equivalent, TruthTable},
    symbolic::{
        simplify::{step::{Law, Step}, trace::Label, MAX_STEPS},
        simplify,
        simplify_steps_with,
        simplify_with_steps,
        Expr,
        SimplifyOptionsBuilder,
        Simplified,
    },
};
use boolsimp_parser::parser::parse;
use pretty_assertions::assert_eq;
use test_log::test;

/// Expressions covering every law, nested negations, constants and redundant terms.
const CORPUS: &[&str] = &[
    "A",
    "A'",
    "0",
    "1'",
    "A + A'",
    "A*1",
    "A + 0",
    "A*0 + B",
    "A + A*B",
    "A(A + B)",
    "(A + B)'",
    "(AB)'",
    "((A')')'",
    "A*B + A*C",
    "AB + A'B",
    "(A + B)(A + C)",
    "A'B'C + A'BC + AB'C",
    "~(A + B'C)D",
    "(A + 1)(B + 0) + C C'",
    "((A + B)' + (AB)')'",
    "AB + BC + CA",
    "A(B + C(D + E'))",
    "x y' + x' y",
];

fn simplify_input(input: &str) -> Simplified {
    simplify_with_steps(&parse(input).unwrap())
}

/// Returns the printed expressions of the trace entries produced by the given law.
fn entries_for(simplified: &Simplified, law: Law) -> Vec<String> {
    simplified.trace.rewrites()
        .iter()
        .filter(|entry| entry.label.step().map(Step::law) == Some(law))
        .map(|entry| entry.expr.clone())
        .collect()
}

#[test]
fn complement_collapses_to_one() {
    let simplified = simplify_input("A + A'");
    assert_eq!(simplified.expr, Expr::Constant(true));
    assert!(simplified.trace.contains_law(Law::Complement));
}

#[test]
fn identity_removes_one() {
    let simplified = simplify_input("A*1");
    assert_eq!(simplified.expr.to_string(), "A");
    assert!(simplified.trace.contains_law(Law::Identity));
}

#[test]
fn absorption() {
    let simplified = simplify_input("A + A*B");
    assert_eq!(simplified.expr.to_string(), "A");
    assert!(simplified.trace.contains_law(Law::Absorption));

    let labels = simplified.trace.iter()
        .map(|entry| (entry.label.to_string(), entry.expr.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(labels, vec![
        ("initial expression".to_string(), "A + AB"),
        ("Absorption: A + AB = A(1 + B)".to_string(), "(1 + B)A"),
        ("Annihilation: A + 1 = 1".to_string(), "1A"),
        ("Identity: A1 = A".to_string(), "A"),
    ]);
}

#[test]
fn de_morgan() {
    let simplified = simplify_input("(A+B)'");
    assert_eq!(entries_for(&simplified, Law::DeMorgan), vec!["A'B'".to_string()]);
    assert_eq!(simplified.expr.to_string(), "A'B'");
}

#[test]
fn factorization_cycles_until_the_limit() {
    let simplified = simplify_input("A*B + A*C");
    let factored = entries_for(&simplified, Law::Factorization);
    assert_eq!(factored.first().map(String::as_str), Some("A(B + C)"));

    // factorization and distribution undo each other
    assert!(simplified.reached_limit);
    assert_eq!(simplified.trace.len(), MAX_STEPS + 1);
    assert!(simplified.trace.contains_law(Law::Distribution));
}

#[test]
fn step_limit_is_configurable() {
    let options = SimplifyOptionsBuilder::new().max_steps(5).build();
    let simplified = simplify_steps_with(&parse("A*B + A*C").unwrap(), options);
    assert!(simplified.reached_limit);
    assert_eq!(simplified.trace.len(), 6);
    assert_eq!(simplified.trace[5].expr, simplified.expr.to_string());
}

#[test]
fn already_minimal() {
    for input in ["A", "A'B + C", "A + B'"] {
        let simplified = simplify_input(input);
        assert!(simplified.is_unchanged(), "`{}` should have no steps", input);
        assert_eq!(simplified.trace.len(), 1);
        assert_eq!(simplified.trace[0].label, Label::Initial);
        assert_eq!(simplified.expr, parse(input).unwrap());
    }
}

#[test]
fn trace_starts_with_input_and_ends_with_result() {
    for input in CORPUS {
        let expr = parse(input).unwrap();
        let simplified = simplify_with_steps(&expr);

        assert_eq!(simplified.trace[0].label, Label::Initial);
        assert_eq!(simplified.trace[0].expr, expr.to_string());
        assert_eq!(
            simplified.trace.last().map(|entry| entry.expr.clone()),
            Some(simplified.expr.to_string()),
            "last entry of `{}`", input,
        );
        assert!(simplified.trace.len() <= MAX_STEPS + 1);
        assert_eq!(simplify(&expr), simplified.expr);
    }
}

#[test]
fn every_step_preserves_meaning() {
    for input in CORPUS {
        let simplified = simplify_input(input);
        let visited = simplified.trace.iter()
            .map(|entry| parse(&entry.expr).unwrap())
            .collect::<Vec<_>>();

        for pair in visited.windows(2) {
            assert!(
                equivalent(&pair[0], &pair[1]),
                "`{}` and `{}` differ while simplifying `{}`", pair[0], pair[1], input,
            );
        }
        assert!(equivalent(&parse(input).unwrap(), &simplified.expr), "simplifying `{}`", input);
    }
}

#[test]
fn normal_forms_are_fixed_points() {
    for input in CORPUS {
        let simplified = simplify_input(input);
        if simplified.reached_limit {
            continue;
        }

        let again = simplify_with_steps(&simplified.expr);
        assert!(again.is_unchanged(), "`{}` simplified to `{}`, which is not minimal", input, simplified.expr);
    }
}

#[test]
fn tautologies_and_contradictions() {
    let expr = parse("(A + 1)(B + 0) + C C'").unwrap();
    let simplified = simplify(&expr);
    assert_eq!(simplified.to_string(), "B");
    assert_eq!(TruthTable::new(&expr).rows.len(), 8);

    // De Morgan rewrites the negation before the complement law can see it, so the result is a
    // tautology that the rules cannot reduce to `1`
    let simplified = simplify(&parse("AB + (AB)'").unwrap());
    assert_eq!(simplified.to_string(), "A' + AB + B'");
    assert!(TruthTable::new(&simplified).is_tautology());
}

/// Returns the printed expressions of the whole trace, initial expression included.
fn printed_trace(simplified: &Simplified) -> Vec<&str> {
    simplified.trace.iter().map(|entry| entry.expr.as_str()).collect()
}

#[test]
fn repeated_factor_pairs_with_its_conjunction() {
    // distribution leaves `B'B'` as a conjunction of just `B'`, which factors with `AB'`
    let simplified = simplify_input("(A + B' + C')B'");
    assert!(!simplified.reached_limit);
    assert_eq!(printed_trace(&simplified), vec![
        "(A + B' + C')B'",
        "AB' + B' + B'C'",
        "(1 + A)B' + B'C'",
        "1B' + B'C'",
        "B' + B'C'",
        "(1 + C')B'",
        "1B'",
        "B'",
    ]);
}

#[test]
fn negated_single_operand_conjunction() {
    let simplified = simplify_input("((0 + B)B)'");
    assert_eq!(printed_trace(&simplified), vec!["((0 + B)B)'", "(B)'", "B'"]);
    assert_eq!(
        simplified.trace.steps().collect::<Vec<_>>(),
        vec![Step::IdentityOr, Step::DeMorganAnd],
    );
}

#[test]
fn complement_inside_distributed_terms() {
    let simplified = simplify_input("(0 + A' + B')(A' + AC')");
    assert!(!simplified.reached_limit);
    assert_eq!(simplified.trace.len(), 10);
    assert_eq!(simplified.expr.to_string(), "A' + AB'C'");
}

#[test]
fn repeated_operands_print_once_but_stay_distinct() {
    let simplified = simplify_input("1(1 + A')");
    assert_eq!(printed_trace(&simplified), vec!["1(1 + A')", "1", "1"]);
    assert_eq!(simplified.expr, Expr::Constant(true));

    // `CC` from distribution is a conjunction of `C`, so `C + C` is printed twice
    let simplified = simplify_input("(A + C)C + A + A' + C");
    assert_eq!(printed_trace(&simplified), vec![
        "(A + C)C + A + A' + C",
        "A + A' + AC + C + C",
        "1",
    ]);
}
