pub mod error;

use crate::{ast::{Connective, Expr}, tokenizer::{Lexer, Token, TokenKind}};
use error::{Error, kind::{IncompleteExpression, UnclosedParenthesis, UnexpectedCharacter, UnexpectedInput}};
use boolsimp_error::ErrorKind;
use log::debug;
use std::ops::Range;

/// A recursive-descent parser for Boolean expressions.
///
/// The grammar, from lowest to highest precedence, is:
///
/// ```text
/// expression := or_expr
/// or_expr    := and_expr ( '+' and_expr )*
/// and_expr   := factor ( ['*'] factor )*
/// factor     := '(' expression ')' ["'"]
///             | ('0' | '1') ["'"]
///             | letter ["'"]
///             | ('~' | "'") factor
/// ```
///
/// Juxtaposition is conjunction: after a factor, parsing continues into another factor whenever
/// the next character can start one. A quote directly after an atom or a closing parenthesis
/// negates it; a `~` or quote in front of a factor negates the factor. Variable names are
/// converted to uppercase.
///
/// The parser builds the canonical [`Expr`] directly, so operands come out flattened,
/// deduplicated and sorted.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The significant characters of the source.
    lexer: Lexer<'source>,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self { lexer: Lexer::new(source) }
    }

    /// Creates an error that points at the next token, or the end of the source code if there are
    /// no more tokens.
    fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(self.lexer.position(), vec![self.lexer.span()], kind)
    }

    /// Parses the source as a single expression. All the input must be consumed by the parser;
    /// if not, an error is returned.
    pub fn try_parse_full(&mut self) -> Result<Expr, Error> {
        let expr = self.parse_or()?;
        match self.lexer.peek_token() {
            None => Ok(expr),
            Some(token) => {
                let span = token.span.start..self.lexer.eof_span().end;
                let kind = UnexpectedInput {
                    position: self.lexer.position(),
                    found: token.normalized(),
                };
                Err(Error::new(self.lexer.position(), vec![span], kind))
            },
        }
    }

    /// `or_expr := and_expr ( '+' and_expr )*`
    fn parse_or(&mut self) -> Result<Expr, Error> {
        let mut terms = vec![self.parse_and()?];
        while self.lexer.peek_kind() == Some(TokenKind::Or) {
            self.lexer.next_token();
            terms.push(self.parse_and()?);
        }
        Ok(collect(Connective::Or, terms))
    }

    /// `and_expr := factor ( ['*'] factor )*`
    fn parse_and(&mut self) -> Result<Expr, Error> {
        let mut factors = vec![self.parse_factor()?];
        loop {
            match self.lexer.peek_kind() {
                Some(TokenKind::And) => {
                    self.lexer.next_token();
                    factors.push(self.parse_factor()?);
                },
                Some(kind) if kind.starts_factor() => factors.push(self.parse_factor()?),
                // end of input, `)`, `+`, or a character that is reported by the caller
                _ => break,
            }
        }
        Ok(collect(Connective::And, factors))
    }

    /// Parses a single factor: a parenthesized expression, a constant, a variable, or a prefix
    /// negation of another factor.
    fn parse_factor(&mut self) -> Result<Expr, Error> {
        let Some(token) = self.lexer.peek_token().cloned() else {
            return Err(self.error(IncompleteExpression { position: self.lexer.position() }));
        };

        match token.kind {
            TokenKind::OpenParen => {
                self.lexer.next_token();
                let inner = self.parse_or()?;
                self.expect_close_paren(token.span)?;
                Ok(self.parse_postfix_not(inner))
            },
            TokenKind::Zero | TokenKind::One => {
                self.lexer.next_token();
                let constant = Expr::constant(token.kind == TokenKind::One);
                Ok(self.parse_postfix_not(constant))
            },
            TokenKind::Letter => {
                self.lexer.next_token();
                let variable = Expr::var(token.lexeme);
                Ok(self.parse_postfix_not(variable))
            },
            TokenKind::Not | TokenKind::Quote => {
                self.lexer.next_token();
                Ok(!self.parse_factor()?)
            },
            TokenKind::Or
                | TokenKind::And
                | TokenKind::CloseParen
                | TokenKind::Symbol
                | TokenKind::Whitespace => Err(self.unexpected_character(&token)),
        }
    }

    /// Consumes the `)` closing the parenthesis opened at `open_span`.
    fn expect_close_paren(&mut self, open_span: Range<usize>) -> Result<(), Error> {
        let position = self.lexer.position();
        let found_span = self.lexer.span();
        match self.lexer.next_token() {
            Some(Token { kind: TokenKind::CloseParen, .. }) => Ok(()),
            _ => Err(Error::new(
                position,
                vec![open_span, found_span],
                UnclosedParenthesis { position },
            )),
        }
    }

    /// Wraps `expr` in a negation if it is directly followed by a quote.
    fn parse_postfix_not(&mut self, expr: Expr) -> Expr {
        if self.lexer.peek_kind() == Some(TokenKind::Quote) {
            self.lexer.next_token();
            !expr
        } else {
            expr
        }
    }

    /// Creates an error for a token that cannot start a factor.
    fn unexpected_character(&self, token: &Token) -> Error {
        self.error(UnexpectedCharacter {
            position: self.lexer.position(),
            found: token.normalized(),
        })
    }
}

/// Joins the operands parsed at one level of the grammar.
///
/// A lone operand is returned untouched, since no operator was read. Otherwise the operands are
/// joined by the canonical builder, which can leave a single operand wrapped, as in `AA`.
fn collect(connective: Connective, mut operands: Vec<Expr>) -> Expr {
    if operands.len() == 1 {
        operands.remove(0)
    } else {
        connective.build(operands)
    }
}

/// Parses the given source as a single Boolean expression.
pub fn parse(source: &str) -> Result<Expr, Error> {
    let expr = Parser::new(source).try_parse_full()?;
    debug!("parsed `{}` as `{}`", source.trim(), expr);
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn a() -> Expr { Expr::var("A") }
    fn b() -> Expr { Expr::var("B") }
    fn c() -> Expr { Expr::var("C") }

    /// Parses the input, panicking on failure.
    fn parse_ok(input: &str) -> Expr {
        match parse(input) {
            Ok(expr) => expr,
            Err(err) => panic!("failed to parse `{}`: {}", input, err),
        }
    }

    /// Parses the input, panicking if it succeeds.
    fn parse_err(input: &str) -> Error {
        match parse(input) {
            Ok(expr) => panic!("`{}` should not parse, but parsed as `{}`", input, expr),
            Err(err) => err,
        }
    }

    #[test]
    fn atoms() {
        assert_eq!(parse_ok("A"), a());
        assert_eq!(parse_ok("0"), Expr::Constant(false));
        assert_eq!(parse_ok("1"), Expr::Constant(true));
        assert_eq!(parse_ok("(B)"), b());
    }

    #[test]
    fn lowercase_variables() {
        assert_eq!(parse_ok("a + b"), a() | b());
        assert_eq!(parse_ok("aB"), a() & b());
    }

    #[test]
    fn implicit_and_explicit_conjunction() {
        let expected = Expr::and([a(), b(), c()]);
        assert_eq!(parse_ok("ABC"), expected);
        assert_eq!(parse_ok("A*B*C"), expected);
        assert_eq!(parse_ok("A B * C"), expected);
        assert_eq!(parse_ok("A·B·C"), expected);
        assert_eq!(parse_ok("A(B)C"), expected);
    }

    #[test]
    fn or_has_lowest_precedence() {
        assert_eq!(parse_ok("AB + C"), (a() & b()) | c());
        assert_eq!(parse_ok("A(B + C)"), a() & (b() | c()));
        assert_eq!(parse_ok("A + B + C"), Expr::or([a(), b(), c()]));
    }

    #[test]
    fn postfix_negation() {
        assert_eq!(parse_ok("A'"), !a());
        assert_eq!(parse_ok("A´"), !a());
        assert_eq!(parse_ok("A’B"), !a() & b());
        assert_eq!(parse_ok("(A + B)'"), !(a() | b()));
        assert_eq!(parse_ok("1'"), !Expr::Constant(true));
        assert_eq!(parse_ok("(A')'"), !!a());
    }

    #[test]
    fn prefix_negation() {
        assert_eq!(parse_ok("~A"), !a());
        assert_eq!(parse_ok("'A"), !a());
        assert_eq!(parse_ok("~~A"), !!a());
        assert_eq!(parse_ok("~(AB)"), !(a() & b()));
        assert_eq!(parse_ok("A~B"), a() & !b());

        // the postfix quote binds to the atom before the prefix negation applies
        assert_eq!(parse_ok("~A'"), !!a());
    }

    #[test]
    fn canonical_operands() {
        assert_eq!(parse_ok("B + A + B"), a() | b());
        assert_eq!(parse_ok("BA"), parse_ok("AB"));
        assert_eq!(parse_ok("A(BC)"), Expr::and([a(), b(), c()]));
        assert_eq!(parse_ok("(A + B) + C"), Expr::or([a(), b(), c()]));
    }

    #[test]
    fn repeated_operand_keeps_its_connective() {
        assert_eq!(parse_ok("AA"), Expr::and([a()]));
        assert_eq!(parse_ok("AA").to_string(), "A");
        assert_eq!(parse_ok("B + B"), Expr::or([b()]));
        assert_eq!(parse_ok("(AA)'").to_string(), "(A)'");

        // a single factor is not wrapped at all
        assert_eq!(parse_ok("((A))"), a());
    }

    #[test]
    fn print_then_parse_round_trip() {
        let inputs = [
            "A + A'",
            "AB + A'C + (B + C')'",
            "~(A + B)C + 1",
            "((A)) * (0 + B')",
            "A(B + C(D + E'))",
        ];
        for input in inputs {
            let expr = parse_ok(input);
            assert_eq!(parse_ok(&expr.to_string()), expr, "round trip of `{}`", input);
        }
    }

    #[test]
    fn missing_closing_parenthesis() {
        let err = parse_err("A+(B");
        assert_eq!(err.to_string(), "missing closing parenthesis");
        assert_eq!(err.kind::<UnclosedParenthesis>(), Some(&UnclosedParenthesis { position: 4 }));
        assert_eq!(err.spans(), &[2..3, 4..4]);

        // a stray character where `)` is expected is also an unclosed parenthesis
        let err = parse_err("(A]");
        assert_eq!(err.kind::<UnclosedParenthesis>(), Some(&UnclosedParenthesis { position: 2 }));
    }

    #[test]
    fn unexpected_trailing_input() {
        let err = parse_err("A)");
        assert_eq!(err.to_string(), "unexpected input at position 1: `)`");
        assert_eq!(err.position, 1);
        assert_eq!(err.kind::<UnexpectedInput>(), Some(&UnexpectedInput { position: 1, found: ')' }));

        // positions count significant characters only
        let err = parse_err("A B & C");
        assert_eq!(err.kind::<UnexpectedInput>(), Some(&UnexpectedInput { position: 2, found: '&' }));
        assert_eq!(err.spans(), &[4..7]);
    }

    #[test]
    fn incomplete_expression() {
        for input in ["", "   ", "A +", "A *", "~", "(", "A''"] {
            let err = parse_err(input);
            assert!(
                err.kind::<IncompleteExpression>().is_some(),
                "`{}` should be incomplete, got: {}", input, err,
            );
            assert_eq!(err.to_string(), "incomplete expression");
        }

        assert_eq!(parse_err("A + ").position, 2);
    }

    #[test]
    fn unexpected_character() {
        let err = parse_err("+A");
        assert_eq!(err.to_string(), "unexpected character at position 0: `+`");
        assert_eq!(err.kind::<UnexpectedCharacter>(), Some(&UnexpectedCharacter { position: 0, found: '+' }));

        let err = parse_err("A * 2");
        assert_eq!(err.kind::<UnexpectedCharacter>(), Some(&UnexpectedCharacter { position: 2, found: '2' }));

        let err = parse_err("A + )");
        assert_eq!(err.kind::<UnexpectedCharacter>(), Some(&UnexpectedCharacter { position: 2, found: ')' }));

        // only ASCII letters are variables
        let err = parse_err("ñ");
        assert_eq!(err.kind::<UnexpectedCharacter>(), Some(&UnexpectedCharacter { position: 0, found: 'ñ' }));
    }
}
