use ariadne::Fmt;
use boolsimp_attrs::ErrorKind;
use boolsimp_error::EXPR;

/// A parenthesis was opened but never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing closing parenthesis",
    labels = [
        "this parenthesis is not closed".to_string(),
        format!("expected {} here", "`)`".fg(EXPR)),
    ],
    help = "add a closing parenthesis `)` after the grouped expression",
)]
pub struct UnclosedParenthesis {
    /// The position at which the closing parenthesis was expected.
    pub position: usize,
}

/// A complete expression was parsed, but there was more input after it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected input at position {}: `{}`", position, found),
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = "join expressions with `+` for OR, or `*` (or nothing) for AND",
)]
pub struct UnexpectedInput {
    /// The position of the first character that was not consumed.
    pub position: usize,

    /// The first character that was not consumed.
    pub found: char,
}

/// The input ended where a factor (a variable, constant, negation or parenthesized expression)
/// was expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "incomplete expression",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct IncompleteExpression {
    /// The position at which the factor was expected, which is the length of the cleaned input.
    pub position: usize,
}

/// A character that cannot start a factor was found where a factor was expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character at position {}: `{}`", position, found),
    labels = ["this character is not allowed here"],
    help = format!(
        "expected a variable (`A`-`Z`), a constant (`0` or `1`), a negation (`~` or `'`), or {}",
        "a parenthesized expression".fg(EXPR),
    ),
)]
pub struct UnexpectedCharacter {
    /// The position of the unexpected character.
    pub position: usize,

    /// The unexpected character.
    pub found: char,
}
