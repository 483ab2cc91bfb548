//! Printing of simplification results.

use boolsimp_compute::{eval::TruthTable, symbolic::Simplified};
use std::io::{self, Write};

/// How much of a simplification to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print only the final expression.
    pub quiet: bool,

    /// Print whether the final expression is equivalent to the input.
    pub check: bool,

    /// Print the truth table of the final expression.
    pub table: bool,
}

/// Writes the steps of a simplification, followed by its result.
///
/// `equivalent` is the outcome of the equivalence check, and is only printed if
/// [`RenderOptions::check`] is set.
pub fn write_simplified(
    out: &mut impl Write,
    input: &str,
    simplified: &Simplified,
    equivalent: bool,
    options: RenderOptions,
) -> io::Result<()> {
    if options.quiet {
        writeln!(out, "{}", simplified.expr)?;
    } else {
        writeln!(out, "input: {}", input.trim())?;

        if simplified.is_unchanged() {
            writeln!(out, "the expression is already in simplest form")?;
        } else {
            for (i, entry) in simplified.trace.rewrites().iter().enumerate() {
                writeln!(out, "Step {}: {}", i + 1, entry.expr)?;
                writeln!(out, "rule applied: {}", entry.label)?;
            }
        }

        if simplified.reached_limit {
            writeln!(
                out,
                "stopped after {} steps without reaching the simplest form",
                simplified.trace.rewrites().len(),
            )?;
        }

        writeln!(out, "result: {}", simplified.expr)?;
    }

    if options.check {
        if equivalent {
            writeln!(out, "check: the result is equivalent to the input")?;
        } else {
            writeln!(out, "check: the result is NOT equivalent to the input")?;
        }
    }

    if options.table {
        writeln!(out, "{}", TruthTable::new(&simplified.expr))?;
    }

    Ok(())
}
