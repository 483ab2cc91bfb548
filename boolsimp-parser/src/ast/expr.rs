//! The canonical representation of a Boolean expression.
//!
//! Every expression is an [`Expr`] tree built from constants, variables, negations, and n-ary
//! conjunctions / disjunctions. The n-ary nodes are kept in a **canonical form** at all times:
//!
//! - **Flattening**: an [`Expr::And`] never directly contains another [`Expr::And`], and an
//!   [`Expr::Or`] never directly contains another [`Expr::Or`]. Nested nodes of the same kind are
//!   spliced into their parent when the parent is built, so `A(BC)` is stored as a single
//!   conjunction of `A`, `B`, and `C`.
//! - **Deduplication**: an [`Expr::And`] / [`Expr::Or`] never contains two structurally equal
//!   operands. `A + A` is stored as just `A`.
//! - **Ordering**: operands are sorted by their printed form, so `B + A` and `A + B` are stored
//!   identically.
//!
//! The only way to obtain an [`Expr::And`] or [`Expr::Or`] is through [`Expr::and`],
//! [`Expr::or`], or [`Connective::build`] (or the `&` / `|` operators, which call them), since
//! [`Operands`] has no public constructor.
//!
//! A conjunction or disjunction may end up with a single operand, for example `AA`, which
//! deduplicates to a conjunction of just `A`. Such a node prints exactly like its operand, but it
//! is still a conjunction: the rules that look for conjunctions match it, and a negated one prints
//! as `(A)'`. Only the rewrite rules that say so unwrap a lone operand. Building a node with no
//! operands at all yields the identity element of the connective.
//!
//! # Equality
//!
//! Because of the canonical ordering, the derived [`PartialEq`] and [`Hash`] implementations are
//! purely structural and independent of the order in which an expression was written. Two
//! expressions are equal exactly when they print the same way and have the same structure.
//!
//! Note that structural equality is not logical equivalence: `A(B + C)` and `AB + AC` are not
//! equal, even though they agree on every assignment of their variables.
//!
//! ```
//! use boolsimp_parser::ast::Expr;
//!
//! let ab = Expr::var("b") | Expr::var("a");
//! let ba = Expr::or([Expr::var("A"), Expr::var("B"), Expr::var("A")]);
//! assert_eq!(ab, ba);
//! assert_eq!(ab.to_string(), "A + B");
//! ```

use std::{collections::BTreeSet, fmt, ops::{BitAnd, BitOr, Deref, Not}};
use super::iter::ExprIter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The operands of an [`Expr::And`] or [`Expr::Or`].
///
/// The operands are always flattened, deduplicated, and sorted by their printed form. This type
/// dereferences to a slice of [`Expr`]s; it can only be created by the builders on [`Expr`] and
/// [`Connective`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Operands(Vec<Expr>);

impl Deref for Operands {
    type Target = [Expr];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Operands {
    type Item = &'a Expr;
    type IntoIter = std::slice::Iter<'a, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The two n-ary connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Connective {
    /// Logical conjunction (`AB`, `A*B`).
    And,

    /// Logical disjunction (`A + B`).
    Or,
}

impl Connective {
    /// Returns the identity element of the connective: `1` for [`Connective::And`], and `0` for
    /// [`Connective::Or`].
    pub fn identity(self) -> bool {
        matches!(self, Self::And)
    }

    /// Returns the annihilating element of the connective: `0` for [`Connective::And`], and `1`
    /// for [`Connective::Or`].
    pub fn annihilator(self) -> bool {
        !self.identity()
    }

    /// Returns the other connective.
    pub fn dual(self) -> Self {
        match self {
            Self::And => Self::Or,
            Self::Or => Self::And,
        }
    }

    /// Builds a canonical conjunction / disjunction of the given operands.
    ///
    /// Operands of the same connective are flattened into the result, duplicates are dropped
    /// (keeping the first occurrence), and the remaining operands are sorted by their printed
    /// form. A single remaining operand is kept wrapped. If none remain, the
    /// [identity](Self::identity) constant is returned.
    pub fn build(self, operands: impl IntoIterator<Item = Expr>) -> Expr {
        fn push_unique(operands: &mut Vec<Expr>, expr: Expr) {
            if !operands.contains(&expr) {
                operands.push(expr);
            }
        }

        let mut flat = Vec::new();
        for operand in operands {
            match (self, operand) {
                (Self::And, Expr::And(inner)) | (Self::Or, Expr::Or(inner)) => {
                    for expr in inner.0 {
                        push_unique(&mut flat, expr);
                    }
                },
                (_, operand) => push_unique(&mut flat, operand),
            }
        }

        flat.sort_by_cached_key(|expr| expr.to_string());

        if flat.is_empty() {
            Expr::Constant(self.identity())
        } else {
            self.wrap(Operands(flat))
        }
    }

    /// Like [`Connective::build`], but a single remaining operand is returned by itself instead of
    /// being wrapped.
    pub fn build_unwrapped(self, operands: impl IntoIterator<Item = Expr>) -> Expr {
        match self.build(operands) {
            Expr::And(mut operands) | Expr::Or(mut operands) if operands.len() == 1 => {
                operands.0.remove(0)
            },
            expr => expr,
        }
    }

    /// Wraps canonical operands into the matching [`Expr`] variant.
    fn wrap(self, operands: Operands) -> Expr {
        match self {
            Self::And => Expr::And(operands),
            Self::Or => Expr::Or(operands),
        }
    }
}

/// A Boolean expression in canonical form.
///
/// For more information about the canonical form, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(from = "RawExpr"))]
pub enum Expr {
    /// The constant `0` (`false`) or `1` (`true`).
    Constant(bool),

    /// A variable, such as `A`. Names are always uppercase.
    Variable(String),

    /// The negation of an expression, such as `A'` or `(A + B)'`.
    ///
    /// Double negations are **not** removed when the node is built; removing them is a
    /// simplification step.
    Not(Box<Expr>),

    /// The conjunction of one or more operands, such as `AB'C`.
    And(Operands),

    /// The disjunction of one or more operands, such as `A + B'`.
    Or(Operands),
}

impl Expr {
    /// Creates a constant.
    pub fn constant(value: bool) -> Self {
        Self::Constant(value)
    }

    /// Creates a variable with the given name, converted to uppercase.
    pub fn var(name: impl AsRef<str>) -> Self {
        Self::Variable(name.as_ref().to_uppercase())
    }

    /// Builds a canonical conjunction of the given operands. See [`Connective::build`].
    pub fn and(operands: impl IntoIterator<Item = Expr>) -> Self {
        Connective::And.build(operands)
    }

    /// Builds a canonical disjunction of the given operands. See [`Connective::build`].
    pub fn or(operands: impl IntoIterator<Item = Expr>) -> Self {
        Connective::Or.build(operands)
    }

    /// If the expression is a [`Expr::Constant`], returns its value.
    pub fn as_constant(&self) -> Option<bool> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is the constant with the given value.
    pub fn is_constant(&self, value: bool) -> bool {
        self.as_constant() == Some(value)
    }

    /// If the expression is a [`Expr::Variable`], returns its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// If the expression is an [`Expr::And`] or [`Expr::Or`], returns its connective.
    pub fn connective(&self) -> Option<Connective> {
        match self {
            Self::And(_) => Some(Connective::And),
            Self::Or(_) => Some(Connective::Or),
            _ => None,
        }
    }

    /// If the expression is an [`Expr::And`] or [`Expr::Or`], returns its operands.
    pub fn operands(&self) -> Option<&[Expr]> {
        match self {
            Self::And(operands) | Self::Or(operands) => Some(operands),
            _ => None,
        }
    }

    /// If the expression is an [`Expr::And`], returns its operands.
    pub fn as_and(&self) -> Option<&[Expr]> {
        match self {
            Self::And(operands) => Some(operands),
            _ => None,
        }
    }

    /// If the expression is an [`Expr::Or`], returns its operands.
    pub fn as_or(&self) -> Option<&[Expr]> {
        match self {
            Self::Or(operands) => Some(operands),
            _ => None,
        }
    }

    /// Returns true if one of the two expressions is the negation of the other, such as `A` and
    /// `A'`.
    pub fn is_complement_of(&self, other: &Self) -> bool {
        matches!(self, Self::Not(inner) if **inner == *other)
            || matches!(other, Self::Not(inner) if **inner == *self)
    }

    /// Returns the names of the variables in the expression, in sorted order.
    pub fn variables(&self) -> BTreeSet<String> {
        self.post_order_iter()
            .filter_map(Self::as_variable)
            .map(str::to_string)
            .collect()
    }

    /// Returns the number of nodes in the expression tree.
    pub fn complexity(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }
}

/// Prints the expression in its canonical notation.
///
/// - constants are `0` and `1`, and variables are their name
/// - a negated variable is followed by a quote, as in `A'`; any other negated expression is
///   parenthesized first, as in `(AB)'`
/// - a conjunction is the concatenation of its operands, with disjunctions parenthesized, as in
///   `A(B + C)`
/// - a disjunction joins its operands with ` + `
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(true) => write!(f, "1"),
            Self::Constant(false) => write!(f, "0"),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Not(inner) => match **inner {
                Self::Variable(_) => write!(f, "{}'", inner),
                _ => write!(f, "({})'", inner),
            },
            Self::And(factors) => {
                for factor in factors {
                    if let Self::Or(_) = factor {
                        write!(f, "({})", factor)?;
                    } else {
                        write!(f, "{}", factor)?;
                    }
                }
                Ok(())
            },
            Self::Or(terms) => {
                let mut iter = terms.iter();
                if let Some(term) = iter.next() {
                    write!(f, "{}", term)?;
                    for term in iter {
                        write!(f, " + {}", term)?;
                    }
                }
                Ok(())
            },
        }
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Constant(value)
    }
}

/// `a & b` builds the canonical conjunction of `a` and `b`.
impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::and([self, rhs])
    }
}

/// `a | b` builds the canonical disjunction of `a` and `b`.
impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::or([self, rhs])
    }
}

/// `!a` wraps `a` in an [`Expr::Not`]. Double negations are kept.
impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}

/// Mirror of [`Expr`] used to deserialize expressions through the canonicalizing builders.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
enum RawExpr {
    Constant(bool),
    Variable(String),
    Not(Box<RawExpr>),
    And(Vec<RawExpr>),
    Or(Vec<RawExpr>),
}

#[cfg(feature = "serde")]
impl From<RawExpr> for Expr {
    fn from(raw: RawExpr) -> Self {
        match raw {
            RawExpr::Constant(value) => Self::Constant(value),
            RawExpr::Variable(name) => Self::var(name),
            RawExpr::Not(inner) => !Self::from(*inner),
            RawExpr::And(operands) => Self::and(operands.into_iter().map(Self::from)),
            RawExpr::Or(operands) => Self::or(operands.into_iter().map(Self::from)),
        }
    }
}
