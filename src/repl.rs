//! Line-oriented shell around the parser
//!
//! Lines are read with `rustyline`, so the prompt has editing and history.
//! Each input line is handled on its own: it is either dumped as a token
//! stream or parsed, and the rendered program or the diagnostic list is
//! written back. The same printers are used when a whole file is given on the
//! command line.

use std::io::{self, Write};

use crossterm::style::Stylize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use monkey::parser::ast::Program;
use monkey::parser::token::{Token, TokenKind};
use monkey::parser::{Lexer, ParseError, Parser};

const PROMPT: &str = ">> ";

/// What the shell prints for each input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The rendered syntax tree
    Tree,
    /// The raw token stream
    Tokens,
}

/// Run the interactive loop until end of input or Ctrl-C.
pub fn start(mode: Mode) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut stdout = io::stdout();

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;

                log::trace!("shell input: {:?}", line);
                run_source(&line, &mut stdout, mode)?;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}

/// Handle one chunk of source text. Returns `false` if it had diagnostics.
pub fn run_source<W: Write>(source: &str, output: &mut W, mode: Mode) -> io::Result<bool> {
    match mode {
        Mode::Tokens => {
            let tokens = Lexer::new(source).tokenize();
            print_tokens(output, &tokens)?;
            Ok(true)
        }
        Mode::Tree => {
            let mut parser = Parser::new(source);
            let program = parser.parse_program();
            if parser.errors().is_empty() {
                print_program(output, &program)?;
                Ok(true)
            } else {
                print_errors(output, parser.errors())?;
                Ok(false)
            }
        }
    }
}

pub fn print_tokens<W: Write>(output: &mut W, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        let text = token.to_string();
        let text = match token.kind {
            TokenKind::Illegal => text.red(),
            TokenKind::Int => text.yellow(),
            k if k.is_keyword() => text.blue(),
            _ => text.stylize(),
        };
        writeln!(output, "{:<8} {}", token.location.to_string(), text)?;
    }
    Ok(())
}

pub fn print_program<W: Write>(output: &mut W, program: &Program) -> io::Result<()> {
    for stmt in &program.statements {
        writeln!(output, "{stmt}")?;
    }
    Ok(())
}

pub fn print_errors<W: Write>(output: &mut W, errors: &[ParseError]) -> io::Result<()> {
    writeln!(output, "{}", "parser errors:".red().bold())?;
    for err in errors {
        writeln!(output, "    {}: {}", err.location(), err.to_string().red())?;
    }
    Ok(())
}
