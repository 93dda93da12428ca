use crate::token::TokenType;
use std::io;
use strum_macros::Display;
use thiserror::Error;

/// Pipeline stage that reported a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Stage {
    Lexer,
    Parser,
}

/// A recoverable problem found in the source. Reporting one never stops the
/// stage that found it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A word that is neither `PRINT` nor a quoted string.
    #[error("Unexpected token: {word}")]
    UnrecognizedWord { word: String },

    /// A `PRINT` followed by something other than a string literal.
    #[error("Expected string after print, but got token: {kind}")]
    MissingStringAfterPrint { kind: TokenType },

    /// A token where a statement was expected.
    #[error("Unexpected token: '{kind}'")]
    UnexpectedToken { kind: TokenType },
}

impl Diagnostic {
    pub fn stage(&self) -> Stage {
        match self {
            Diagnostic::UnrecognizedWord { .. } => Stage::Lexer,
            Diagnostic::MissingStringAfterPrint { .. } | Diagnostic::UnexpectedToken { .. } => {
                Stage::Parser
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    /// The parser had no tokens to work with, so there is nothing to evaluate.
    #[error("No program to run.")]
    MissingProgram { diagnostics: Vec<Diagnostic> },

    /// The output handler could not take a line.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}
