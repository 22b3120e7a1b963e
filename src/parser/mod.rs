//! Monkey source code parser
//!
//! This module transforms Monkey source text into an Abstract Syntax Tree:
//! - [`token`]: Token kinds and the keyword table
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: The Pratt parser (tokens → AST + diagnostics)
//! - [`ast`]: AST node definitions and their canonical rendering
//! - [`error`]: Parse diagnostics
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent for statements with a two-token lookahead
//! window, and precedence climbing for expressions driven by a registry of
//! per-token-kind prefix and infix handlers.

pub mod ast;
pub mod error;
mod expressions;
pub mod lexer;
pub mod parse;
pub mod precedence;
mod statements;
pub mod token;

pub use error::ParseError;
pub use lexer::Lexer;
pub use parse::{parse, Parser, ParserConfig};
