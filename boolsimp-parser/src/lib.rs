//! Parser for Boolean algebra expressions.
//!
//! Expressions are written in the usual textbook notation: variables are single letters (in any
//! case), `+` is OR, juxtaposition or `*` is AND, and a trailing quote (`A'`) or a leading tilde
//! (`~A`) is NOT. `0` and `1` are the constants, and parentheses group.
//!
//! The parser produces an [`ast::Expr`] in canonical form, ready to be simplified.
//!
//! ```
//! use boolsimp_parser::{ast::Expr, parser::parse};
//!
//! let expr = parse("b'a + (c + a)").unwrap();
//! assert_eq!(expr.to_string(), "A + AB' + C");
//! assert_eq!(expr, Expr::or([
//!     Expr::var("A"),
//!     Expr::var("A") & !Expr::var("B"),
//!     Expr::var("C"),
//! ]));
//! ```

pub mod ast;
pub mod parser;
pub mod tokenizer;
