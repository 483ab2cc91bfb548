//! Simplification and evaluation of Boolean algebra expressions.
//!
//! Expressions are parsed with [`boolsimp_parser`]; this crate rewrites them step by step with
//! the laws of Boolean algebra ([`symbolic`]), and evaluates them over truth tables to check that
//! a simplification preserves their meaning ([`eval`]).
//!
//! ```
//! use boolsimp_compute::{eval::equivalent, symbolic::simplify};
//! use boolsimp_parser::parser::parse;
//!
//! let expr = parse("(A + B)'").unwrap();
//! let simplified = simplify(&expr);
//! assert_eq!(simplified.to_string(), "A'B'");
//! assert!(equivalent(&expr, &simplified));
//! ```
//!
//! # Features
//!
//! - `serde`: Derives [`Serialize`] and [`Deserialize`] for the expression model, the steps, and
//!   the simplification trace.
//!
//! [`Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html

pub mod eval;
pub mod symbolic;
