//! Step-by-step simplification of Boolean expressions.
//!
//! Simplification repeatedly applies a single rewrite to the expression until no rule applies or
//! a step limit is reached. Each rewrite is found by [`apply_rules_once`], which searches the
//! expression in a fixed order:
//!
//! 1. the subexpressions of the expression, in canonical order, recursively,
//! 2. the complement laws,
//! 3. the identity laws,
//! 4. the annihilation laws,
//! 5. distribution of a conjunction over a disjunction,
//! 6. factorization of a common factor,
//! 7. factorization of an absorbed term,
//! 8. the absorption laws,
//! 9. De Morgan's laws,
//! 10. removal of double negations and negated constants.
//!
//! Only the first rewrite found is applied. The rewrites do not always converge: some
//! expressions, such as `AB + AC`, alternate between factorization and distribution forever, which
//! is why the number of steps is capped (see [`SimplifyOptions::max_steps`]).
//!
//! ```
//! use boolsimp_compute::symbolic::simplify::{simplify_with_steps, step::Law};
//! use boolsimp_parser::parser::parse;
//!
//! let simplified = simplify_with_steps(&parse("A + A'").unwrap());
//! assert_eq!(simplified.expr.to_string(), "1");
//! assert!(simplified.trace.contains_law(Law::Complement));
//! ```

pub mod rules;
pub mod step;
pub mod trace;

use boolsimp_parser::ast::Expr;
use log::{debug, warn};
use super::step_collector::StepCollector;
use step::Step;
use trace::{Label, Trace, TraceEntry};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default maximum number of rewrites performed by a single simplification.
pub const MAX_STEPS: usize = 60;

/// Options to configure the simplification process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimplifyOptions {
    /// The maximum number of rewrites to perform before giving up on reaching a fixed point.
    ///
    /// The default is [`MAX_STEPS`].
    pub max_steps: usize,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self { max_steps: MAX_STEPS }
    }
}

impl From<SimplifyOptionsBuilder> for SimplifyOptions {
    fn from(builder: SimplifyOptionsBuilder) -> Self {
        builder.build()
    }
}

/// A builder for [`SimplifyOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimplifyOptionsBuilder(SimplifyOptions);

impl SimplifyOptionsBuilder {
    /// Create a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of rewrites to perform.
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.0.max_steps = max_steps;
        self
    }

    /// Build the [`SimplifyOptions`].
    pub fn build(self) -> SimplifyOptions {
        self.0
    }
}

/// The result of a simplification that records its steps.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Simplified {
    /// Every expression visited, starting with the input.
    pub trace: Trace,

    /// The simplified expression. This is the input itself if no rule applied.
    pub expr: Expr,

    /// True if the step limit stopped the simplification while rules still applied.
    pub reached_limit: bool,
}

impl Simplified {
    /// Returns true if no rule applied to the input.
    pub fn is_unchanged(&self) -> bool {
        self.trace.rewrites().is_empty()
    }
}

/// Applies a single rewrite to the expression, returning the new expression and the step taken.
///
/// Returns [`None`] if no rule applies, meaning the expression is in normal form.
pub fn apply_rules_once(expr: &Expr) -> Option<(Expr, Step)> {
    let mut step: Option<Step> = None;
    let new_expr = rules::all(expr, &mut step)?;
    Some((new_expr, step?))
}

/// Runs the rewrite loop, passing every rewrite to the step collector.
///
/// Returns the final expression, and whether the step limit was reached before a fixed point.
fn inner_simplify_with(
    expr: &Expr,
    options: SimplifyOptions,
    step_collector: &mut dyn StepCollector<TraceEntry>,
) -> (Expr, bool) {
    let mut current = expr.clone();
    for step_number in 1..=options.max_steps {
        let Some((new_expr, step)) = apply_rules_once(&current) else {
            debug!("`{}` is in normal form after {} step(s)", current, step_number - 1);
            return (current, false);
        };

        debug!("step {}: {} => `{}` ({} nodes)", step_number, step, new_expr, new_expr.complexity());
        step_collector.push(TraceEntry::new(Label::Rule(step), &new_expr));
        current = new_expr;
    }

    let reached_limit = apply_rules_once(&current).is_some();
    if reached_limit {
        warn!(
            "stopped simplifying `{}` after {} steps without reaching a normal form",
            expr,
            options.max_steps,
        );
    }
    (current, reached_limit)
}

/// Simplifies the given expression with the default options.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, SimplifyOptions::default())
}

/// Simplifies the given expression with the given options.
pub fn simplify_with(expr: &Expr, options: SimplifyOptions) -> Expr {
    inner_simplify_with(expr, options, &mut ()).0
}

/// Simplifies the given expression with the default options, recording every step taken.
pub fn simplify_with_steps(expr: &Expr) -> Simplified {
    simplify_steps_with(expr, SimplifyOptions::default())
}

/// Simplifies the given expression with the given options, recording every step taken.
pub fn simplify_steps_with(expr: &Expr, options: SimplifyOptions) -> Simplified {
    let mut trace = Trace::new(expr);
    let (expr, reached_limit) = inner_simplify_with(expr, options, &mut trace);
    Simplified { trace, expr, reached_limit }
}
