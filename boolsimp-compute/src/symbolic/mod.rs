//! Algebraic manipulation of Boolean expressions.
//!
//! # Expression representation
//!
//! Expressions are represented as a tree of [`Expr`] nodes from [`boolsimp_parser`]. Conjunctions
//! and disjunctions are n-ary and kept in a canonical form: nested nodes of the same kind are
//! **flattened**, duplicate operands are removed, and operands are sorted by their printed form.
//! For example, `A + (C + A) + B` is a single disjunction of `A`, `B`, and `C`.
//!
//! This makes it easy to find the operands that a law applies to: `AB + AC` has both of its
//! conjunctions at the same level, no matter how the input was parenthesized.
//!
//! # Simplification
//!
//! Simplification is done by applying one rewrite rule at a time until none applies. Each rule is
//! simply a function that accepts an expression and returns [`Option<Expr>`]; if the rule is
//! applicable to the expression, the rule is applied and the result is returned. Every rewrite is
//! labeled with a [`Step`], naming the law it applied.
//!
//! ```
//! use boolsimp_compute::symbolic::{simplify_with_steps, simplify::step::Step};
//! use boolsimp_parser::parser::parse;
//!
//! let simplified = simplify_with_steps(&parse("A*1").unwrap());
//! assert_eq!(simplified.expr.to_string(), "A");
//! assert_eq!(simplified.trace.steps().collect::<Vec<_>>(), vec![Step::IdentityAnd]);
//! ```
//!
//! For more information, see the [`mod@simplify`] module.
//!
//! [`Step`]: simplify::step::Step

pub mod simplify;
pub mod step_collector;

pub use boolsimp_parser::ast::Expr;
pub use simplify::{
    apply_rules_once,
    simplify,
    simplify_steps_with,
    simplify_with,
    simplify_with_steps,
    SimplifyOptions,
    SimplifyOptionsBuilder,
    Simplified,
};
pub use step_collector::StepCollector;
