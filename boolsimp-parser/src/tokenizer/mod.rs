pub mod token;

use logos::{Lexer as LogosLexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> LogosLexer<'_, TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, including
/// whitespace.
pub fn tokenize_complete(input: &str) -> Box<[Token<'_>]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            // anything the token definitions cannot describe is still a (bad) character
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

/// A cursor over the significant characters of some source code.
///
/// Whitespace is removed and alternate glyphs are normalized (see [`Token::normalized`]), so the
/// parser only ever sees one canonical character per token. Positions reported by the lexer are
/// 0-based indices into this cleaned stream, while each token keeps the span it occupies in the
/// raw source for error highlighting.
///
/// Lexing never fails: unknown characters become [`TokenKind::Symbol`] tokens, and it is up to the
/// parser to reject them.
#[derive(Debug, Clone)]
pub struct Lexer<'source> {
    /// The significant tokens of the source.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be consumed.
    cursor: usize,

    /// The length of the raw source, used to point at the end of input.
    source_len: usize,
}

impl<'source> Lexer<'source> {
    /// Creates a new lexer for the given source.
    pub fn new(source: &'source str) -> Self {
        let tokens = tokenize_complete(source)
            .into_vec()
            .into_iter()
            .filter(|token| !token.is_whitespace())
            .collect();
        Self {
            tokens,
            cursor: 0,
            source_len: source.len(),
        }
    }

    /// Returns the next character without consuming it, or [`None`] at the end of input.
    pub fn peek(&self) -> Option<char> {
        self.peek_token().map(|token| token.normalized())
    }

    /// Consumes and returns the next character, or [`None`] at the end of input.
    pub fn get(&mut self) -> Option<char> {
        self.next_token().map(|token| token.normalized())
    }

    /// Returns the next token without consuming it.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the kind of the next token without consuming it.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek_token().map(|token| token.kind)
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Option<&Token<'source>> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }

    /// Returns the 0-based position of the next character in the cleaned character stream.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns true if every character has been consumed.
    pub fn is_empty(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> std::ops::Range<usize> {
        self.source_len..self.source_len
    }

    /// Returns the span of the next token, or the end of the source code if there are no more
    /// tokens.
    pub fn span(&self) -> std::ops::Range<usize> {
        self.peek_token()
            .map_or(self.eof_span(), |token| token.span.clone())
    }
}
