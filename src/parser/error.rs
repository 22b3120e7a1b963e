//! Parse diagnostics
//!
//! Parsing never aborts: every problem becomes a [`ParseError`] appended to
//! the parser's diagnostic list, and the statement or expression being built
//! is abandoned. Lexical problems are not errors at all; they surface as
//! `ILLEGAL` tokens that no prefix handler accepts.

use super::token::{SourceLocation, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A required token kind was not found in the lookahead
    #[error("expected next token `{expected}` but got `{found}`")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        location: SourceLocation,
    },

    /// The current token cannot start an expression
    #[error("no prefix parse function for {kind}")]
    NoPrefixParseFn {
        kind: TokenKind,
        location: SourceLocation,
    },

    #[error("could not parse {literal:?} as integer")]
    InvalidInteger {
        literal: String,
        location: SourceLocation,
    },

    #[error("expression nesting exceeds maximum depth of {limit}")]
    NestingTooDeep {
        limit: usize,
        location: SourceLocation,
    },
}

impl ParseError {
    /// Location of the token the diagnostic refers to
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::NoPrefixParseFn { location, .. }
            | ParseError::InvalidInteger { location, .. }
            | ParseError::NestingTooDeep { location, .. } => *location,
        }
    }
}
