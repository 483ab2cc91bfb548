//! The abstract syntax tree produced by the parser.
//!
//! Unlike most syntax trees, [`Expr`] is already in a canonical form when it leaves the parser:
//! associative operators are flattened, duplicate operands are removed, and operands are sorted.
//! See the [`expr`] module for the details.

pub mod expr;
mod iter;

pub use expr::{Connective, Expr, Operands};
pub use iter::ExprIter;
