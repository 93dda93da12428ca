//! Interpreter for a tiny language of `PRINT 'string'` statements.
//!
//! Source flows through four stages, each finishing before the next starts:
//! [`scanner::scan`] splits it into words, [`lexer::lex`] turns words into
//! tokens, [`parser::parse`] builds a [`ast::Program`], and
//! [`interpreter::Interpreter`] evaluates it. Problems in the source are
//! collected as [`diagnostic::Diagnostic`] values instead of being printed.

pub mod ast;
pub mod diagnostic;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod print_handler;
pub mod scanner;
pub mod token;

use crate::ast::Program;
use crate::diagnostic::{Diagnostic, RunError};
use crate::interpreter::Interpreter;
use crate::token::Token;

/// Everything the front end produced for one source text.
#[derive(Debug)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    /// `None` when the source held no tokens.
    pub program: Option<Program>,
    /// Lexer diagnostics followed by parser diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

/// Scans, lexes and parses `source`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn compile(source: &str) -> Compilation {
    let words = scanner::scan(source);
    let (tokens, mut diagnostics) = lexer::lex(&words);
    let (program, parse_diagnostics) = parser::parse(&tokens);
    diagnostics.extend(parse_diagnostics);
    Compilation {
        tokens,
        program,
        diagnostics,
    }
}

/// Compiles and evaluates `source`, returning the diagnostics of a program
/// that ran. Fails when there was no program to run or its output could not
/// be written.
pub fn run(source: &str, interpreter: &mut Interpreter) -> Result<Vec<Diagnostic>, RunError> {
    let Compilation {
        program,
        diagnostics,
        ..
    } = compile(source);
    match program {
        Some(program) => {
            interpreter.interpret(&program)?;
            Ok(diagnostics)
        }
        None => Err(RunError::MissingProgram { diagnostics }),
    }
}
