//! # Introduction
//!
//! Front end for the Monkey scripting language, a small C-like,
//! expression-oriented language. It turns source text into a syntax tree that
//! a later evaluation stage can walk.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Program + diagnostics → (evaluator)
//! ```
//!
//! 1. [`parser::lexer`] - pulls one token at a time out of the source text.
//! 2. [`parser::parse`] - Pratt parser with a two-token lookahead window.
//! 3. [`parser::ast`] - immutable syntax tree; every node renders a
//!    canonical source-like string.
//!
//! Parsing never aborts. Check [`parser::Parser::errors`] after
//! [`parser::Parser::parse_program`]:
//!
//! ```
//! use monkey::parser::Parser;
//!
//! let mut parser = Parser::new("let x = 1 + 2 * 3;");
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
//! ```
//!
//! ## Language
//!
//! Statements: `let`, `return`, expression statements.
//! Expressions: identifiers, integers, booleans, `!`/`-` prefixes,
//! `+ - * / < > == !=`, grouping, `if`/`else`, `fn` literals and calls.

pub mod parser;
