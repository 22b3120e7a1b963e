//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statement ::= let_stmt | return_stmt | expr_stmt
//! let_stmt  ::= "let" IDENT "=" expression [";"]
//! return_stmt ::= "return" expression [";"]
//! expr_stmt ::= expression [";"]
//! block     ::= "{" statement* "}"
//! ```
//!
//! Each method starts with the statement's first token in `current` and
//! leaves `current` on its last token; [`Parser::parse_program`] advances
//! past it.

use crate::parser::ast::*;
use crate::parser::error::ParseError;
use crate::parser::parse::Parser;
use crate::parser::precedence::Precedence;
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        log::trace!(
            "statement at {} starting with {}",
            self.current.location,
            self.current
        );

        match self.current.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => self
                .parse_expression_statement()
                .map(Statement::Expression),
        }
    }

    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::from_token(self.current.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(LetStatement { token, name, value })
    }

    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.current.clone();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(ReturnStatement { token, value })
    }

    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let token = self.current.clone();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(ExpressionStatement { token, expression })
    }

    /// Parse `{ ... }` with `current` on the opening brace.
    ///
    /// Leaves `current` on the closing brace. Running into the end of input
    /// first is reported as a missing `}`.
    pub(crate) fn parse_block_statement(&mut self) -> Option<BlockStatement> {
        if !self.descend() {
            return None;
        }
        let block = self.parse_block_body();
        self.ascend();
        block
    }

    fn parse_block_body(&mut self) -> Option<BlockStatement> {
        let token = self.current.clone();
        let mut statements = Vec::new();

        self.next_token();
        while !self.current_is(TokenKind::RBrace) {
            if self.current_is(TokenKind::Eof) {
                self.push_error(ParseError::UnexpectedToken {
                    expected: TokenKind::RBrace,
                    found: TokenKind::Eof,
                    location: self.current.location,
                });
                return None;
            }
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        Some(BlockStatement { token, statements })
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}
