//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure:
//! the two-token lookahead window, the prefix/infix handler registry, the
//! diagnostic list and the [`Parser::parse_program`] entry point.
//!
//! # Parser Architecture
//!
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: `let`, `return`, expression and block statements
//! - `expressions`: the Pratt loop and every registered handler
//!
//! Parser methods are split across these files using `impl Parser` blocks.
//! The handlers themselves are plain function pointers stored per token kind,
//! so a new kind of expression is added by registering a handler rather than
//! by editing the Pratt loop.

use rustc_hash::FxHashMap;

use crate::parser::ast::{Expression, Program};
use crate::parser::error::ParseError;
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};

/// Handler invoked when a token kind begins an expression.
pub type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;

/// Handler invoked when a token kind continues an already parsed expression.
pub type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

/// Default bound on nesting, see [`ParserConfig::max_depth`].
///
/// One nested `if` or `fn` body costs two levels (its expression and its
/// block), so the default stays within a 2 MiB thread stack in debug builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tunables for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting of expressions and blocks before the parser gives up
    /// instead of recursing further.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Pratt parser for Monkey
pub struct Parser {
    lexer: Lexer,
    pub(crate) current: Token,
    pub(crate) peek: Token,
    errors: Vec<ParseError>,

    pub(crate) prefix_fns: FxHashMap<TokenKind, PrefixParseFn>,
    pub(crate) infix_fns: FxHashMap<TokenKind, InfixParseFn>,

    config: ParserConfig,
    depth: usize,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Self::from_lexer(Lexer::new(input))
    }

    pub fn from_lexer(lexer: Lexer) -> Self {
        Self::with_config(lexer, ParserConfig::default())
    }

    /// Build a parser and pre-fill the lookahead window.
    pub fn with_config(lexer: Lexer, config: ParserConfig) -> Self {
        let mut parser = Self {
            lexer,
            current: Token::default(),
            peek: Token::default(),
            errors: Vec::new(),
            prefix_fns: FxHashMap::default(),
            infix_fns: FxHashMap::default(),
            config,
            depth: 0,
        };
        parser.register_default_handlers();

        // Read two tokens so both `current` and `peek` are set
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Parse the entire program.
    ///
    /// Never fails by itself: statements that could not be parsed are left
    /// out and described in [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            // Always move on, so malformed input cannot stall the loop
            self.next_token();
        }

        log::debug!(
            "parsed {} statements with {} errors",
            program.statements.len(),
            self.errors.len()
        );
        program
    }

    /// Diagnostics collected so far, in the order they were found.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    pub fn register_prefix(&mut self, kind: TokenKind, handler: PrefixParseFn) {
        self.prefix_fns.insert(kind, handler);
    }

    pub fn register_infix(&mut self, kind: TokenKind, handler: InfixParseFn) {
        self.infix_fns.insert(kind, handler);
    }

    // ===== Helper methods =====

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Slide the lookahead window by one token.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advance if `peek` has the given kind, otherwise record a diagnostic.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let err = ParseError::UnexpectedToken {
            expected,
            found: self.peek.kind,
            location: self.peek.location,
        };
        self.push_error(err);
    }

    /// Enter one level of nesting. Records a diagnostic and returns `false`
    /// once the configured limit is reached.
    pub(crate) fn descend(&mut self) -> bool {
        if self.depth >= self.config.max_depth {
            self.push_error(ParseError::NestingTooDeep {
                limit: self.config.max_depth,
                location: self.current.location,
            });
            return false;
        }
        self.depth += 1;
        true
    }

    pub(crate) fn ascend(&mut self) {
        self.depth -= 1;
    }

    pub(crate) fn push_error(&mut self, err: ParseError) {
        log::debug!("parse error at {}: {}", err.location(), err);
        self.errors.push(err);
    }
}

/// Parse `input` in one go, returning the tree and its diagnostics.
pub fn parse(input: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(input);
    let program = parser.parse_program();
    (program, parser.into_errors())
}
