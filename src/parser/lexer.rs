//! Lexer (tokenizer) for Monkey source code
//!
//! Converts raw source text into a forward-only stream of [`Token`]s, one per
//! call to [`Lexer::next_token`]. The lexer is byte oriented: identifiers and
//! numbers are ASCII only, and every other byte it does not recognise becomes
//! an [`TokenKind::Illegal`] token. It never fails.

use super::token::{SourceLocation, Token, TokenKind};

/// Lexer for Monkey source code
pub struct Lexer {
    input: String,
    /// Byte offset of `ch`; always on a char boundary.
    position: usize,
    /// Current character, `None` once the input is exhausted.
    ch: Option<u8>,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.to_string(),
            position: 0,
            ch: None,
            line: 1,
            column: 1,
        };
        lexer.ch = lexer.byte_at(0);
        lexer
    }

    /// Produce the next token and advance past it.
    ///
    /// Once the input is exhausted every further call returns an
    /// [`TokenKind::Eof`] token with an empty literal.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let loc = self.current_location();
        let Some(ch) = self.ch else {
            return Token::new(TokenKind::Eof, "", loc);
        };

        let start = self.position;
        let kind = match ch {
            b'=' => self.either(b'=', TokenKind::Eq, TokenKind::Assign),
            b'!' => self.either(b'=', TokenKind::NotEq, TokenKind::Bang),
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => return self.identifier_or_keyword(loc),
            b'0'..=b'9' => return self.number_literal(loc),
            _ => TokenKind::Illegal,
        };

        self.read_char();
        let literal = &self.input[start..self.position];
        if kind == TokenKind::Illegal {
            log::trace!("illegal character {:?} at {}", literal, loc);
        }
        Token::new(kind, literal, loc)
    }

    /// Tokenize the entire input, including the terminating `Eof` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    /// Two-character operators: consume the lookahead when it matches.
    fn either(&mut self, next: u8, matched: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek_char() == Some(next) {
            self.read_char();
            matched
        } else {
            single
        }
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, loc: SourceLocation) -> Token {
        let start = self.position;
        while matches!(self.ch, Some(c) if c.is_ascii_alphanumeric() || c == b'_') {
            self.read_char();
        }
        let ident = &self.input[start..self.position];
        Token::new(TokenKind::lookup_ident(ident), ident, loc)
    }

    /// Parse numeric literal; conversion is left to the parser.
    fn number_literal(&mut self, loc: SourceLocation) -> Token {
        let start = self.position;
        while matches!(self.ch, Some(c) if c.is_ascii_digit()) {
            self.read_char();
        }
        Token::new(TokenKind::Int, &self.input[start..self.position], loc)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_char();
        }
    }

    /// Advance past the current character.
    fn read_char(&mut self) {
        let Some(ch) = self.ch else {
            return;
        };

        // Non-ASCII characters are stepped over whole so that every slice of
        // `input` stays on a char boundary.
        let width = if ch.is_ascii() {
            1
        } else {
            self.input[self.position..]
                .chars()
                .next()
                .map_or(1, char::len_utf8)
        };
        self.position += width;

        if ch == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.ch = self.byte_at(self.position);
    }

    fn peek_char(&self) -> Option<u8> {
        self.byte_at(self.position + 1)
    }

    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.input.as_bytes().get(pos).copied()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Yields tokens up to, but not including, the first `Eof`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            None
        } else {
            Some(token)
        }
    }
}
