//! Expression parsing implementation
//!
//! Expressions are parsed with precedence climbing (Pratt parsing): the
//! handler registered for the current token as a *prefix* builds the left
//! operand, then infix handlers keep extending it while the next operator
//! binds tighter than the surrounding context.
//!
//! # Supported Expressions
//!
//! - Identifiers, integer and boolean literals
//! - Prefix: `!x`, `-x`
//! - Infix: `+ - * / < > == !=` (left-associative)
//! - Grouping: `(x)`
//! - Conditionals: `if <cond> [then] { ... } [else { ... }]`
//! - Function literals: `fn(a, b) { ... }`
//! - Calls: `f(a, b)`
//!
//! Every handler starts with its first token in `current` and leaves
//! `current` on the last token it consumed.

use crate::parser::ast::*;
use crate::parser::error::ParseError;
use crate::parser::parse::Parser;
use crate::parser::precedence::Precedence;
use crate::parser::token::TokenKind;

impl Parser {
    pub(crate) fn register_default_handlers(&mut self) {
        self.register_prefix(TokenKind::Ident, Parser::parse_identifier);
        self.register_prefix(TokenKind::Int, Parser::parse_integer_literal);
        self.register_prefix(TokenKind::True, Parser::parse_boolean);
        self.register_prefix(TokenKind::False, Parser::parse_boolean);
        self.register_prefix(TokenKind::Bang, Parser::parse_prefix_expression);
        self.register_prefix(TokenKind::Minus, Parser::parse_prefix_expression);
        self.register_prefix(TokenKind::LParen, Parser::parse_grouped_expression);
        self.register_prefix(TokenKind::If, Parser::parse_if_expression);
        self.register_prefix(TokenKind::Function, Parser::parse_function_literal);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Eq,
            TokenKind::NotEq,
        ] {
            self.register_infix(kind, Parser::parse_infix_expression);
        }
        self.register_infix(TokenKind::LParen, Parser::parse_call_expression);
    }

    /// Parse an expression whose operators bind tighter than `precedence`.
    ///
    /// Returns `None` after recording a diagnostic when no expression can be
    /// built.
    pub fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        if !self.descend() {
            return None;
        }
        let expr = self.climb(precedence);
        self.ascend();
        expr
    }

    fn climb(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = self.prefix_fns.get(&self.current.kind).copied() else {
            self.push_error(ParseError::NoPrefixParseFn {
                kind: self.current.kind,
                location: self.current.location,
            });
            return None;
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < Precedence::of(self.peek.kind) {
            let Some(infix) = self.infix_fns.get(&self.peek.kind).copied() else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    // ===== Prefix handlers =====

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::from_token(
            self.current.clone(),
        )))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        match integer_value(&token.literal) {
            Some(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
            None => {
                self.push_error(ParseError::InvalidInteger {
                    literal: token.literal,
                    location: token.location,
                });
                None
            }
        }
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        let value = self.current_is(TokenKind::True);
        Some(Expression::Boolean(BooleanLiteral {
            token: self.current.clone(),
            value,
        }))
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix(PrefixExpression {
            operator: token.literal.clone(),
            token,
            right: Box::new(right),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Then) {
            self.next_token();
        }

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement()?;

        Some(Expression::Function(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    /// Parameter list with `current` on the opening parenthesis
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut params = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(params);
        }

        loop {
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            params.push(Identifier::from_token(self.current.clone()));

            if !self.peek_is(TokenKind::Comma) {
                break;
            }
            self.next_token();
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(params)
    }

    // ===== Infix handlers =====

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let precedence = Precedence::of(token.kind);
        self.next_token();

        let right = self.parse_expression(precedence)?;
        Some(Expression::Infix(InfixExpression {
            operator: token.literal.clone(),
            token,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let arguments = self.parse_call_arguments()?;

        Some(Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    /// Argument list: (expr, expr, ...)
    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut args = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(args);
        }

        self.next_token();
        args.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            args.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(args)
    }
}

/// Convert a digit run to its value. A leading `0` followed by more digits
/// selects base 8, so `010` is 8 and `09` is rejected.
fn integer_value(literal: &str) -> Option<i64> {
    match literal.strip_prefix('0') {
        Some(octal) if !octal.is_empty() => i64::from_str_radix(octal, 8).ok(),
        _ => literal.parse().ok(),
    }
}
