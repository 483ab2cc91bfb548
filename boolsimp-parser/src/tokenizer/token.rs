use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Every token other than [`TokenKind::Whitespace`] covers exactly one character of the source,
/// so that juxtaposed variables such as `AB` are read as two separate factors.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("+")]
    Or,

    #[token("*")]
    #[token("·")]
    And,

    #[token("~")]
    Not,

    #[token("'")]
    #[token("´")]
    #[token("’")]
    Quote,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("0")]
    Zero,

    #[token("1")]
    One,

    #[regex(r"[a-zA-Z]")]
    Letter,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns true if a factor can begin with this token. These are also the tokens that
    /// continue an implicit conjunction, as in `AB` or `A(B + C)`.
    pub fn starts_factor(self) -> bool {
        matches!(
            self,
            TokenKind::Letter
                | TokenKind::OpenParen
                | TokenKind::Zero
                | TokenKind::One
                | TokenKind::Not
                | TokenKind::Quote
        )
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }

    /// Returns the character this token stands for, with alternate glyphs replaced by their
    /// canonical form: every quote glyph becomes `'` and `·` becomes `*`.
    pub fn normalized(&self) -> char {
        match self.kind {
            TokenKind::Quote => '\'',
            TokenKind::And => '*',
            _ => self.lexeme.chars().next().unwrap_or_default(),
        }
    }
}
