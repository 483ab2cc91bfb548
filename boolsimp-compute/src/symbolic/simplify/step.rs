//! The individual rewrites performed during simplification, and the laws they belong to.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A law of Boolean algebra. Every [`Step`] is an instance of exactly one law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Law {
    /// A variable combined with its own negation.
    Complement,

    /// Removing the identity element of a connective.
    Identity,

    /// An annihilating element absorbing a whole connective.
    Annihilation,

    /// Distributing a conjunction over a disjunction.
    Distribution,

    /// Pulling a common factor out of two terms.
    Factorization,

    /// A term swallowing another term that contains it.
    Absorption,

    /// Pushing a negation through a connective.
    DeMorgan,

    /// Removing a double negation.
    Involution,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Complement => "Complement",
            Self::Identity => "Identity",
            Self::Annihilation => "Annihilation",
            Self::Distribution => "Distribution",
            Self::Factorization => "Factorization",
            Self::Absorption => "Absorption",
            Self::DeMorgan => "De Morgan",
            Self::Involution => "Involution",
        };
        write!(f, "{}", name)
    }
}

/// A single rewrite applied by the simplifier.
///
/// Each variant is documented with the identity it applies; `A`, `B`, and `C` stand for any
/// subexpressions, and the identities hold for any number of additional operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `A + A' = 1`
    ComplementOr,

    /// `AA' = 0`
    ComplementAnd,

    /// `0' = 1` and `1' = 0`
    NegateConstant,

    /// `A1 = A`
    IdentityAnd,

    /// `A + 0 = A`
    IdentityOr,

    /// `A0 = 0`
    AnnihilateAnd,

    /// `A + 1 = 1`
    AnnihilateOr,

    /// `A(B + C) = AB + AC`
    Distribute,

    /// `AB + AC = A(B + C)`
    FactorCommon,

    /// `A + AB = A(1 + B)`
    FactorAbsorbed,

    /// `A + AB = A`
    AbsorbOr,

    /// `A(A + B) = A`
    AbsorbAnd,

    /// `(AB)' = A' + B'`
    DeMorganAnd,

    /// `(A + B)' = A'B'`
    DeMorganOr,

    /// `(A')' = A`
    DoubleNegation,
}

impl Step {
    /// Returns the law this step is an instance of.
    ///
    /// [`Step::FactorAbsorbed`] counts as [`Law::Absorption`]: it is the first half of absorbing
    /// `AB` into `A`, and the identity and annihilation laws finish the job.
    pub fn law(self) -> Law {
        match self {
            Self::ComplementOr | Self::ComplementAnd | Self::NegateConstant => Law::Complement,
            Self::IdentityAnd | Self::IdentityOr => Law::Identity,
            Self::AnnihilateAnd | Self::AnnihilateOr => Law::Annihilation,
            Self::Distribute => Law::Distribution,
            Self::FactorCommon => Law::Factorization,
            Self::FactorAbsorbed | Self::AbsorbOr | Self::AbsorbAnd => Law::Absorption,
            Self::DeMorganAnd | Self::DeMorganOr => Law::DeMorgan,
            Self::DoubleNegation => Law::Involution,
        }
    }

    /// Returns the identity this step applies, written in the same notation as printed
    /// expressions.
    pub fn identity(self) -> &'static str {
        match self {
            Self::ComplementOr => "A + A' = 1",
            Self::ComplementAnd => "AA' = 0",
            Self::NegateConstant => "0' = 1, 1' = 0",
            Self::IdentityAnd => "A1 = A",
            Self::IdentityOr => "A + 0 = A",
            Self::AnnihilateAnd => "A0 = 0",
            Self::AnnihilateOr => "A + 1 = 1",
            Self::Distribute => "A(B + C) = AB + AC",
            Self::FactorCommon => "AB + AC = A(B + C)",
            Self::FactorAbsorbed => "A + AB = A(1 + B)",
            Self::AbsorbOr => "A + AB = A",
            Self::AbsorbAnd => "A(A + B) = A",
            Self::DeMorganAnd => "(AB)' = A' + B'",
            Self::DeMorganOr => "(A + B)' = A'B'",
            Self::DoubleNegation => "(A')' = A",
        }
    }
}

/// Prints the law followed by the identity, as in `Identity: A1 = A`.
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.law(), self.identity())
    }
}
